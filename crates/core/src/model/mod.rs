//! Image areas and the document that holds them.

use crate::error::{CoordsError, ParseError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// One clickable rectangle of an image map plus its text attributes.
///
/// Geometry is kept in image pixels as `f64`. `x`/`y` stay strictly
/// positive and `width`/`height` non-negative when built through
/// [`ImageArea::new`] or [`ImageArea::from_corners`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageArea {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub alt: String,
    #[serde(default)]
    pub data_content: String,
    /// Script handler, written out verbatim.
    #[serde(default)]
    pub on_click: String,
    /// Selection flag owned by whoever edits the map; never serialized.
    #[serde(skip)]
    pub marked: bool,
}

impl ImageArea {
    /// A rectangle with empty text fields.
    ///
    /// Negative extents are flipped so the origin moves to the smaller edge,
    /// then an origin at or below zero is clamped to 1 (size unchanged).
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        let (x, width) = normalize_extent(x, width);
        let (y, height) = normalize_extent(y, height);
        Self {
            x: clamp_origin(x),
            y: clamp_origin(y),
            width,
            height,
            title: String::new(),
            alt: String::new(),
            data_content: String::new(),
            on_click: String::new(),
            marked: false,
        }
    }

    /// Build from two opposite corners, in either order.
    pub fn from_corners(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self::new(x0, y0, x1 - x0, y1 - y0)
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = alt.into();
        self
    }

    pub fn with_data_content(mut self, content: impl Into<String>) -> Self {
        self.data_content = content.into();
        self
    }

    pub fn with_on_click(mut self, on_click: impl Into<String>) -> Self {
        self.on_click = on_click.into();
        self
    }

    /// `[x, y, x + width, y + height]`, each rounded half away from zero.
    pub fn coords(&self) -> [i64; 4] {
        [
            round_coord(self.x),
            round_coord(self.y),
            round_coord(self.x + self.width),
            round_coord(self.y + self.height),
        ]
    }

    /// The `coords` attribute value, e.g. `"10,20,110,70"`.
    pub fn coords_string(&self) -> String {
        let [x0, y0, x1, y1] = self.coords();
        format!("{x0},{y0},{x1},{y1}")
    }

    /// Replace the geometry from an edited `x0,y0,x1,y1` field.
    ///
    /// Stricter than markup parsing: the corners must be given top-left
    /// first and describe a non-empty rectangle. On error nothing changes.
    pub fn set_coords_str(&mut self, text: &str) -> Result<(), CoordsError> {
        let tokens = split_coords(text);
        if tokens.len() != 4 {
            return Err(CoordsError::TokenCount(tokens.len()));
        }
        let mut values = [0.0; 4];
        for (slot, token) in values.iter_mut().zip(&tokens) {
            *slot = parse_coord(token).ok_or_else(|| CoordsError::InvalidNumber(token.to_string()))?;
        }
        let [x0, y0, x1, y1] = values;
        if x1 - x0 <= 0.0 || y1 - y0 <= 0.0 {
            return Err(CoordsError::EmptyExtent);
        }
        self.x = clamp_origin(x0);
        self.y = clamp_origin(y0);
        self.width = x1 - x0;
        self.height = y1 - y0;
        Ok(())
    }
}

fn normalize_extent(origin: f64, extent: f64) -> (f64, f64) {
    if extent < 0.0 {
        (origin + extent, -extent)
    } else {
        (origin, extent)
    }
}

fn clamp_origin(v: f64) -> f64 {
    if v <= 0.0 {
        1.0
    } else {
        v
    }
}

fn round_coord(v: f64) -> i64 {
    v.round() as i64
}

/// Split a `coords` value on commas.
///
/// Trailing empty tokens are discarded (`"1,2,3,4,"` has four tokens) and a
/// value without any comma is a single token, even when empty.
pub(crate) fn split_coords(text: &str) -> Vec<&str> {
    let mut tokens: Vec<&str> = text.split(',').collect();
    if tokens.len() > 1 {
        while tokens.last().is_some_and(|t| t.is_empty()) {
            tokens.pop();
        }
    }
    tokens
}

/// A finite number, ignoring surrounding whitespace.
pub(crate) fn parse_coord(token: &str) -> Option<f64> {
    token.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// An image map: the image it decorates and its areas, in markup order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageMapDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_source: Option<String>,
    #[serde(default)]
    pub areas: Vec<ImageArea>,
}

impl ImageMapDocument {
    pub fn from_markup(markup: &str) -> Result<Self, ParseError> {
        crate::reader::read(markup)
    }

    pub fn to_markup(&self) -> String {
        crate::writer::write(&self.areas)
    }

    /// Where to load the image from: `base` joined with the `<img src>`.
    pub fn image_path(&self, base: &Path) -> Option<PathBuf> {
        self.image_source.as_deref().map(|src| base.join(src))
    }
}

/// Squeeze runs of spaces: repeat "each double space becomes one" until no
/// double space is left, trimming both ends on every pass.
pub fn collapse_spaces(text: &str) -> String {
    let mut out = text.to_string();
    while out.contains("  ") {
        out = out.replace("  ", " ").trim_matches(|c: char| c <= ' ').to_string();
    }
    out
}

/// Join lines with single spaces; a space already before the break is reused.
pub fn remove_line_breaks(text: &str) -> String {
    let mut out = text.to_string();
    while out.contains('\n') {
        out = out.replace(" \n", " ").replace('\n', " ");
    }
    out
}
