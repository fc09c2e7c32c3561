//! Areas → markup.

use crate::model::ImageArea;

/// Render areas as self-closing `<area>` tags, one per line, in order.
///
/// Attribute order is fixed: `shape`, `coords`, `alt`, the two popover hints,
/// `title` and `onclick` (only when non-empty), then `data-content`.
/// `onclick` is written verbatim; the other text attributes go through
/// [`escape_attr`].
pub fn write(areas: &[ImageArea]) -> String {
    let mut out = String::new();
    for area in areas {
        write_area(&mut out, area);
    }
    out
}

fn write_area(out: &mut String, area: &ImageArea) {
    out.push_str("<area shape=\"rect\" ");
    push_attr(out, "coords", &area.coords_string());
    push_attr(out, "alt", &escape_attr(&area.alt));
    out.push_str("data-toggle=\"popover\" data-trigger=\"hover\" ");
    if !area.title.is_empty() {
        push_attr(out, "title", &escape_attr(&area.title));
    }
    if !area.on_click.is_empty() {
        push_attr(out, "onclick", &area.on_click);
    }
    push_attr(out, "data-content", &escape_attr(&area.data_content));
    out.push_str("/>\n");
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(value);
    out.push_str("\" ");
}

/// Named entities for the characters we escape. `<` and `>` are left alone
/// so popover content can carry inline markup.
const ENTITIES: &[(char, &str)] = &[
    ('&', "&amp;"),
    ('"', "&quot;"),
    ('à', "&agrave;"),
    ('À', "&Agrave;"),
    ('â', "&acirc;"),
    ('Â', "&Acirc;"),
    ('å', "&aring;"),
    ('Å', "&Aring;"),
    ('æ', "&aelig;"),
    ('Æ', "&AElig;"),
    ('ç', "&ccedil;"),
    ('Ç', "&Ccedil;"),
    ('é', "&eacute;"),
    ('É', "&Eacute;"),
    ('è', "&egrave;"),
    ('È', "&Egrave;"),
    ('ê', "&ecirc;"),
    ('Ê', "&Ecirc;"),
    ('ë', "&euml;"),
    ('Ë', "&Euml;"),
    ('ï', "&iuml;"),
    ('Ï', "&Iuml;"),
    ('ô', "&ocirc;"),
    ('Ô', "&Ocirc;"),
    ('ø', "&oslash;"),
    ('Ø', "&Oslash;"),
    ('ß', "&szlig;"),
    ('ù', "&ugrave;"),
    ('Ù', "&Ugrave;"),
    ('û', "&ucirc;"),
    ('Û', "&Ucirc;"),
    ('®', "&reg;"),
    ('©', "&copy;"),
    ('€', "&euro;"),
];

/// Escape an attribute value with the fixed entity table, then turn every
/// non-overlapping pair of spaces (scanned left to right) into
/// `&nbsp;&nbsp;`. An odd space at the end of a run stays a plain space.
pub fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match ENTITIES.iter().find(|(ch, _)| *ch == c) {
            Some((_, entity)) => out.push_str(entity),
            None => out.push(c),
        }
    }
    out.replace("  ", "&nbsp;&nbsp;")
}
