//! Tests for rendering areas to markup: attribute order, omission rules, escaping.

use imagemap_core::{serialize, ImageArea};
use pretty_assertions::assert_eq;

#[test]
fn test_minimal_area() {
    let out = serialize(&[ImageArea::new(10.0, 20.0, 100.0, 50.0)]);
    assert_eq!(
        out,
        "<area shape=\"rect\" coords=\"10,20,110,70\" alt=\"\" data-toggle=\"popover\" data-trigger=\"hover\" data-content=\"\" />\n"
    );
}

#[test]
fn test_full_area_attribute_order() {
    let area = ImageArea::new(1.0, 2.0, 3.0, 4.0)
        .with_title("Title")
        .with_alt("Alt")
        .with_data_content("Body")
        .with_on_click("doIt()");
    assert_eq!(
        serialize(&[area]),
        "<area shape=\"rect\" coords=\"1,2,4,6\" alt=\"Alt\" data-toggle=\"popover\" data-trigger=\"hover\" title=\"Title\" onclick=\"doIt()\" data-content=\"Body\" />\n"
    );
}

#[test]
fn test_empty_optional_fields_are_omitted() {
    let out = serialize(&[ImageArea::new(5.0, 5.0, 5.0, 5.0)]);
    assert!(!out.contains("title="), "empty title must be omitted: {out}");
    assert!(!out.contains("onclick="), "empty onclick must be omitted: {out}");
    assert!(out.contains("alt=\"\""));
    assert!(out.contains("data-content=\"\""));
}

#[test]
fn test_coords_round_to_nearest() {
    let area = ImageArea::new(10.6, 10.4, 0.0, 0.5);
    assert_eq!(area.coords(), [11, 10, 11, 11]);
    assert!(serialize(&[area]).contains("coords=\"11,10,11,11\""));

    let half = ImageArea::new(2.5, 3.5, 1.0, 1.0);
    assert_eq!(half.coords_string(), "3,4,4,5");
}

#[test]
fn test_escaping_alt() {
    let area = ImageArea::new(1.0, 1.0, 1.0, 1.0).with_alt("Tom & Jerry \"Café\"");
    let out = serialize(&[area]);
    assert!(
        out.contains("alt=\"Tom &amp; Jerry &quot;Caf&eacute;&quot;\""),
        "unexpected escaping: {out}"
    );
}

#[test]
fn test_escaping_title_and_content() {
    let area = ImageArea::new(1.0, 1.0, 1.0, 1.0)
        .with_title("Ærø © 2024 — 5€")
        .with_data_content("<p>Crème brûlée</p>");
    let out = serialize(&[area]);
    assert!(out.contains("title=\"&AElig;r&oslash; &copy; 2024 — 5&euro;\""), "{out}");
    // Angle brackets stay raw, û is in the table, the ü-family is not.
    assert!(out.contains("data-content=\"<p>Cr&egrave;me br&ucirc;l&eacute;e</p>\""), "{out}");
}

#[test]
fn test_onclick_is_verbatim() {
    let area = ImageArea::new(1.0, 1.0, 1.0, 1.0).with_on_click("alert('<b>hi</b>')");
    let out = serialize(&[area]);
    assert!(out.contains("onclick=\"alert('<b>hi</b>')\""), "{out}");

    let amp = ImageArea::new(1.0, 1.0, 1.0, 1.0).with_on_click("a && b");
    assert!(serialize(&[amp]).contains("onclick=\"a && b\""));
}

#[test]
fn test_double_spaces_become_nbsp() {
    let area = ImageArea::new(1.0, 1.0, 1.0, 1.0).with_data_content("one  two three");
    let out = serialize(&[area]);
    assert!(out.contains("data-content=\"one&nbsp;&nbsp;two three\""), "{out}");
}

#[test]
fn test_odd_space_run_leaves_a_space() {
    let area = ImageArea::new(1.0, 1.0, 1.0, 1.0).with_alt("a   b");
    assert!(serialize(&[area]).contains("alt=\"a&nbsp;&nbsp; b\""));
}

#[test]
fn test_areas_in_order_one_per_line() {
    let areas = vec![
        ImageArea::new(1.0, 1.0, 1.0, 1.0).with_alt("first"),
        ImageArea::new(2.0, 2.0, 1.0, 1.0).with_alt("second"),
        ImageArea::new(3.0, 3.0, 1.0, 1.0).with_alt("third"),
    ];
    let out = serialize(&areas);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains("alt=\"first\""));
    assert!(lines[1].contains("alt=\"second\""));
    assert!(lines[2].contains("alt=\"third\""));
    assert!(out.ends_with("/>\n"));
}

#[test]
fn test_no_areas_no_output() {
    assert_eq!(serialize(&[]), "");
}

#[test]
fn test_marked_flag_is_not_written() {
    let mut area = ImageArea::new(1.0, 1.0, 1.0, 1.0);
    let plain = serialize(std::slice::from_ref(&area));
    area.marked = true;
    assert_eq!(serialize(&[area]), plain);
}
