//! Markup → areas.
//!
//! Scans the start tags of a fragment in source order. The first `<img>`
//! supplies the image source; every `<area>` must be a `rect` and becomes
//! one [`ImageArea`].

use crate::error::{ParseError, Result};
use crate::model::{parse_coord, split_coords, ImageArea, ImageMapDocument};
use crate::tags::{self, StartTag};

/// Parse an HTML fragment into an [`ImageMapDocument`].
///
/// Fatal: an `<area>` whose `shape` is not exactly `rect`, or one whose four
/// coordinate tokens are not all numbers. Tolerated: an `<area>` whose
/// `coords` does not have four tokens is skipped.
pub fn read(markup: &str) -> Result<ImageMapDocument> {
    let mut image_source: Option<Option<String>> = None;
    let mut areas = Vec::new();
    let mut area_index = 0usize;

    for el in tags::start_tags(markup, &["img", "area"]) {
        match el.name.as_str() {
            "img" if image_source.is_none() => {
                image_source = Some(el.get_attr("src").map(str::to_string));
            }
            "area" => {
                let index = area_index;
                area_index += 1;
                match read_area(&el, index) {
                    Ok(Some(area)) => areas.push(area),
                    Ok(None) => {
                        tracing::debug!(index, coords = el.get_attr("coords"), "dropping area without 4 coordinates");
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "image map markup rejected");
                        return Err(e);
                    }
                }
            }
            _ => {}
        }
    }

    tracing::debug!(areas = areas.len(), seen = area_index, "parsed image map");

    Ok(ImageMapDocument {
        image_source: image_source.flatten(),
        areas,
    })
}

/// `Ok(None)` means the area is skipped, not that parsing failed.
fn read_area(el: &StartTag, index: usize) -> Result<Option<ImageArea>> {
    let shape = el.get_attr("shape");
    if shape != Some("rect") {
        return Err(ParseError::UnsupportedShape {
            index,
            shape: shape.map(str::to_string),
        });
    }

    let Some(coords) = el.get_attr("coords") else {
        return Err(ParseError::InvalidCoordinate {
            index,
            value: String::new(),
        });
    };

    let tokens = split_coords(coords);
    if tokens.len() != 4 {
        return Ok(None);
    }

    let mut values = [0.0; 4];
    for (slot, token) in values.iter_mut().zip(&tokens) {
        *slot = parse_coord(token).ok_or_else(|| ParseError::InvalidCoordinate {
            index,
            value: token.to_string(),
        })?;
    }
    let [x0, y0, x1, y1] = values;

    let text = |name: &str| el.get_attr(name).unwrap_or_default().to_string();

    Ok(Some(ImageArea {
        title: text("title"),
        alt: text("alt"),
        data_content: text("data-content"),
        on_click: text("onclick"),
        ..ImageArea::from_corners(x0, y0, x1, y1)
    }))
}
