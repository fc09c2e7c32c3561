//! Editing state for an image map, driven one [`Action`] at a time.
//!
//! A UI keeps a single [`MapSession`], feeds it every user edit, and redraws
//! from [`MapSession::document`] and [`MapSession::markup`] afterwards.

use crate::model::{collapse_spaces, remove_line_breaks, ImageArea, ImageMapDocument};

/// Field values typed for the selected area. `None` leaves a field as is.
#[derive(Debug, Clone, Default)]
pub struct AreaEdit {
    pub coords: Option<String>,
    pub title: Option<String>,
    pub alt: Option<String>,
    pub data_content: Option<String>,
    pub on_click: Option<String>,
}

#[derive(Debug, Clone)]
pub enum Action {
    /// Replace everything by reparsing the markup text.
    LoadMarkup(String),
    Select(usize),
    ClearSelection,
    /// Append a freshly drawn area and select it.
    AddArea(ImageArea),
    DeleteSelected,
    EditSelected(AreaEdit),
    /// Squeeze repeated spaces out of the selected area's content.
    CollapseSpaces,
    /// Turn line breaks in the selected area's content into spaces.
    RemoveLineBreaks,
}

#[derive(Debug, Clone)]
pub struct MapSession {
    document: ImageMapDocument,
    selected: Option<usize>,
    markup_valid: bool,
    coords_valid: bool,
}

impl Default for MapSession {
    fn default() -> Self {
        Self {
            document: ImageMapDocument::default(),
            selected: None,
            markup_valid: true,
            coords_valid: true,
        }
    }
}

impl MapSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn document(&self) -> &ImageMapDocument {
        &self.document
    }

    pub fn selected(&self) -> Option<&ImageArea> {
        self.selected.and_then(|i| self.document.areas.get(i))
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// False after the last `LoadMarkup` failed; the previous document is kept.
    pub fn markup_valid(&self) -> bool {
        self.markup_valid
    }

    /// False after the last coords edit was rejected.
    pub fn coords_valid(&self) -> bool {
        self.coords_valid
    }

    /// Current areas as markup.
    pub fn markup(&self) -> String {
        self.document.to_markup()
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::LoadMarkup(text) => self.load_markup(&text),
            Action::Select(index) => self.select(index),
            Action::ClearSelection => self.set_selection(None),
            Action::AddArea(area) => {
                self.document.areas.push(area);
                self.set_selection(Some(self.document.areas.len() - 1));
            }
            Action::DeleteSelected => {
                if let Some(i) = self.selected.take() {
                    self.document.areas.remove(i);
                    tracing::debug!(index = i, "deleted area");
                }
            }
            Action::EditSelected(edit) => self.edit_selected(edit),
            Action::CollapseSpaces => {
                if let Some(area) = self.selected_mut() {
                    area.data_content = collapse_spaces(&area.data_content);
                }
            }
            Action::RemoveLineBreaks => {
                if let Some(area) = self.selected_mut() {
                    area.data_content = remove_line_breaks(&area.data_content);
                }
            }
        }
    }

    fn load_markup(&mut self, text: &str) {
        match ImageMapDocument::from_markup(text) {
            Ok(document) => {
                self.document = document;
                self.selected = None;
                self.markup_valid = true;
                self.coords_valid = true;
            }
            Err(e) => {
                tracing::debug!(error = %e, "keeping previous image map");
                self.markup_valid = false;
            }
        }
    }

    fn select(&mut self, index: usize) {
        if index < self.document.areas.len() {
            self.set_selection(Some(index));
        } else {
            tracing::debug!(index, "ignoring selection out of range");
        }
    }

    fn set_selection(&mut self, selected: Option<usize>) {
        for (i, area) in self.document.areas.iter_mut().enumerate() {
            area.marked = Some(i) == selected;
        }
        self.selected = selected;
        self.coords_valid = true;
    }

    fn selected_mut(&mut self) -> Option<&mut ImageArea> {
        self.selected.and_then(|i| self.document.areas.get_mut(i))
    }

    fn edit_selected(&mut self, edit: AreaEdit) {
        let Some(area) = self.selected_mut() else {
            return;
        };
        let coords_result = edit.coords.as_deref().map(|c| area.set_coords_str(c));
        if let Some(title) = edit.title {
            area.title = title;
        }
        if let Some(alt) = edit.alt {
            area.alt = alt;
        }
        if let Some(content) = edit.data_content {
            area.data_content = content;
        }
        if let Some(on_click) = edit.on_click {
            area.on_click = on_click;
        }
        match coords_result {
            Some(Err(e)) => {
                tracing::debug!(error = %e, "coords edit rejected");
                self.coords_valid = false;
            }
            Some(Ok(())) => self.coords_valid = true,
            None => {}
        }
    }
}
