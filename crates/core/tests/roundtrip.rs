//! Tests for markup → areas → markup and areas → markup → areas.

use imagemap_core::{parse, serialize, ImageArea, ImageMapDocument};
use pretty_assertions::assert_eq;

fn sample_areas() -> Vec<ImageArea> {
    vec![
        ImageArea::new(10.0, 20.0, 100.0, 50.0)
            .with_title("Kitchen & dining")
            .with_alt("Kitchen")
            .with_data_content("<b>Open</b> daily, café included")
            .with_on_click("show('kitchen')"),
        ImageArea::new(300.0, 40.0, 60.0, 60.0)
            .with_title("Bath \"en suite\"")
            .with_alt("Bath")
            .with_data_content("Tiles © Müller"),
    ]
}

#[test]
fn test_areas_survive_a_round_trip() {
    let areas = sample_areas();
    let doc = parse(&serialize(&areas)).unwrap();
    assert_eq!(doc.areas, areas);
    assert_eq!(doc.image_source, None);
}

#[test]
fn test_serialized_markup_is_a_fixed_point() {
    let html = r##"
        <img src="house.png" usemap="#house">
        <map name="house">
        <area shape="rect" coords="50,50,10,10" alt="reversed" title="R">
        <area shape="rect" coords="-5,-3,20,20" data-content="clamped once">
        </map>
    "##;
    let once = ImageMapDocument::from_markup(html).unwrap().to_markup();
    let twice = ImageMapDocument::from_markup(&once).unwrap().to_markup();
    assert_eq!(once, twice);
    assert!(once.contains("coords=\"10,10,50,50\""), "{once}");
    assert!(once.contains("coords=\"1,1,26,24\""), "{once}");
}

#[test]
fn test_double_space_comes_back_as_nbsp() {
    // `&nbsp;` decodes to U+00A0, so the spaces do not survive verbatim.
    let area = ImageArea::new(1.0, 1.0, 1.0, 1.0).with_data_content("a  b");
    let doc = parse(&serialize(&[area])).unwrap();
    assert_eq!(doc.areas[0].data_content, "a\u{a0}\u{a0}b");
}

#[test]
fn test_empty_title_stays_empty() {
    let area = ImageArea::new(4.0, 4.0, 8.0, 8.0);
    let doc = parse(&serialize(std::slice::from_ref(&area))).unwrap();
    assert_eq!(doc.areas, vec![area]);
}

#[test]
fn test_document_json_shape() {
    let doc = ImageMapDocument {
        image_source: Some("map.png".to_string()),
        areas: vec![ImageArea::new(1.0, 2.0, 3.0, 4.0).with_on_click("f()")],
    };
    let json = serde_json::to_value(&doc).unwrap();
    assert_eq!(json["imageSource"], "map.png");
    assert_eq!(json["areas"][0]["onClick"], "f()");
    assert_eq!(json["areas"][0]["dataContent"], "");
    assert!(json["areas"][0].get("marked").is_none());

    let back: ImageMapDocument = serde_json::from_value(json).unwrap();
    assert_eq!(back, doc);
}

#[test]
fn test_image_path_joins_base() {
    let doc = parse(r#"<img src="img/plan.png">"#).unwrap();
    let path = doc.image_path(std::path::Path::new("/srv/site")).unwrap();
    assert_eq!(path, std::path::Path::new("/srv/site/img/plan.png"));

    let none = parse("<p>no image</p>").unwrap();
    assert_eq!(none.image_path(std::path::Path::new("/srv/site")), None);
}
