//! Integration tests for document conversion and node lookup.

use std::io::Write;

use figmap::convert::{convert_document, convert_nodes, get_node, ConvertOptions};
use figmap::model::{Document, Page, Shape};
use figmap::render::{to_json, JsonFormat};
use figmap::schema::NodeType;
use figmap::{parse_file, Error, Figmap};

const DOCUMENT: &str = r##"{
    "name": "Marketing Site",
    "version": "7",
    "last_modified": "2024-05-01T09:30:00Z",
    "pages": [
        {
            "id": "1:0",
            "name": "Home",
            "background": "#F5F5F5",
            "shapes": [
                {
                    "id": "1:1",
                    "name": "Hero",
                    "x": 100, "y": 50, "width": 800, "height": 400,
                    "kind": {"type": "frame", "clip_content": true, "corner_radius": 8},
                    "children": [
                        {
                            "id": "1:2",
                            "name": "Headline",
                            "x": 20, "y": 30, "width": 300, "height": 40,
                            "kind": {
                                "type": "text",
                                "paragraphs": [{"text": "Build faster"}],
                                "attr": {"font_name": "Inter", "font_size": 32, "weight": 700}
                            }
                        },
                        {
                            "id": "1:3",
                            "name": "Badge",
                            "kind": {"type": "oval", "ending_angle": 3.14}
                        },
                        {
                            "id": "1:4",
                            "name": "Sparkle",
                            "kind": {"type": "star", "points": 5}
                        }
                    ]
                }
            ]
        },
        {
            "id": "2:0",
            "name": "About",
            "shapes": [
                {"id": "2:1", "kind": {"type": "group"}, "children": [
                    {"id": "2:2", "kind": {"type": "rect"}, "fills": [
                        {"type": "solid", "color": "#FF0000"}
                    ]}
                ]}
            ]
        }
    ]
}"##;

fn document() -> Document {
    figmap::parse_str(DOCUMENT).unwrap()
}

#[test]
fn test_file_response_structure() {
    let result = convert_document(&document(), &ConvertOptions::default());
    let json = serde_json::to_value(&result.value).unwrap();

    assert_eq!(json["name"], "Marketing Site");
    assert_eq!(json["version"], "7");
    assert_eq!(json["schemaVersion"], 0);
    assert_eq!(json["lastModified"], "2024-05-01T09:30:00Z");
    assert_eq!(json["document"]["id"], "0:0");
    assert_eq!(json["document"]["type"], "DOCUMENT");

    let home = &json["document"]["children"][0];
    assert_eq!(home["type"], "CANVAS");
    assert_eq!(home["name"], "Home");

    let hero = &home["children"][0];
    assert_eq!(hero["type"], "FRAME");
    assert_eq!(hero["clipsContent"], true);
    assert_eq!(hero["cornerRadius"], 8.0);
    assert_eq!(hero["children"].as_array().unwrap().len(), 2);

    let headline = &hero["children"][0];
    assert_eq!(headline["characters"], "Build faster");
    assert_eq!(headline["style"]["fontFamily"], "Inter");
    assert_eq!(headline["absoluteBoundingBox"]["x"], 120.0);
    assert_eq!(headline["absoluteBoundingBox"]["y"], 80.0);

    assert_eq!(hero["children"][1]["arcData"]["endingAngle"], 3.14);
    assert_eq!(result.stats.skipped_count, 1);
}

#[test]
fn test_empty_document() {
    let doc = Document::new("Blank");
    let result = convert_document(&doc, &ConvertOptions::default());

    assert!(result.value.document.children().is_empty());
    let first = to_json(&result.value, JsonFormat::Compact).unwrap();
    let second = to_json(
        &convert_document(&doc, &ConvertOptions::default()).value,
        JsonFormat::Compact,
    )
    .unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_parallel_matches_sequential() {
    let doc = document();
    let parallel = convert_document(&doc, &ConvertOptions::default());
    let sequential = convert_document(&doc, &ConvertOptions::new().sequential());

    assert_eq!(
        to_json(&parallel.value, JsonFormat::Compact).unwrap(),
        to_json(&sequential.value, JsonFormat::Compact).unwrap()
    );
    assert_eq!(parallel.stats, sequential.stats);
}

#[test]
fn test_nodes_lookup() {
    let result = convert_nodes(
        &document(),
        ["1:2", "2:0", "9:9"],
        &ConvertOptions::default(),
    );
    let response = &result.value;

    let headline = response.get("1:2").unwrap();
    assert_eq!(headline.node_type, NodeType::Text);
    let bbox = headline.layout.as_ref().unwrap().absolute_bounding_box;
    assert_eq!((bbox.x, bbox.y), (120.0, 80.0));

    assert_eq!(response.get("2:0").unwrap().node_type, NodeType::Canvas);
    assert!(response.get("9:9").is_none());

    let json = serde_json::to_value(response).unwrap();
    assert_eq!(json["nodes"]["9:9"], serde_json::Value::Null);
    assert_eq!(json["nodes"]["1:2"]["document"]["id"], "1:2");
}

#[test]
fn test_nodes_depth_counts_from_requested_node() {
    let options = ConvertOptions::new().with_depth(1);
    let result = convert_nodes(&document(), ["2:0", "2:1"], &options);

    let page = result.value.get("2:0").unwrap();
    assert_eq!(page.depth(), 1);
    assert!(page.children()[0].children.is_none());

    let group = result.value.get("2:1").unwrap();
    assert_eq!(group.depth(), 1);
    assert_eq!(group.children()[0].id, "2:2");
}

#[test]
fn test_get_node() {
    let doc = document();
    let options = ConvertOptions::default();

    let rect = get_node(&doc, Some("2:0"), "2:2", &options).unwrap();
    assert_eq!(rect.node_type, NodeType::Rectangle);
    assert_eq!(rect.fills.unwrap().fills.len(), 1);

    assert!(matches!(
        get_node(&doc, Some("1:0"), "2:2", &options),
        Err(Error::NodeNotFound(_))
    ));
    assert!(matches!(
        get_node(&doc, Some("3:0"), "2:2", &options),
        Err(Error::PageNotFound(_))
    ));
    assert!(matches!(
        get_node(&doc, None, "1:4", &options),
        Err(Error::Unconvertible(_))
    ));
}

#[test]
fn test_parse_file_and_builder() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(DOCUMENT.as_bytes()).unwrap();

    let doc = parse_file(file.path()).unwrap();
    assert_eq!(doc.page_count(), 2);

    let json = Figmap::new()
        .with_depth(1)
        .parse(file.path())
        .unwrap()
        .to_file_json(JsonFormat::Compact)
        .unwrap();
    assert!(json.contains(r#""type":"CANVAS""#));
    assert!(!json.contains("Headline"));
}

#[test]
fn test_parse_file_missing() {
    let dir = tempfile::tempdir().unwrap();
    let result = parse_file(dir.path().join("missing.json"));
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_parse_file_invalid_json() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"{\"pages\": [{\"shapes\": 3}]}").unwrap();
    assert!(matches!(parse_file(file.path()), Err(Error::Json(_))));
}

#[test]
fn test_builder_wrap() {
    let mut doc = Document::new("Wrapped");
    let mut page = Page::new("p", "Page");
    page.add_shape(Shape::text_shape("t", ["hello"]));
    doc.add_page(page);

    let result = Figmap::new().sequential().wrap(doc);
    let converted = result.convert();
    assert_eq!(converted.stats.char_count, 5);
    assert_eq!(result.node(None, "t").unwrap().node_type, NodeType::Text);
}

#[test]
fn test_lookup_ignores_children_of_non_containers() {
    let doc = figmap::parse_str(
        r#"{"name": "D", "pages": [{"id": "p", "shapes": [
            {"id": "t", "kind": {"type": "text", "paragraphs": [{"text": "hi"}]}, "children": [
                {"id": "nested", "kind": {"type": "group"}}
            ]}
        ]}]}"#,
    )
    .unwrap();
    let options = ConvertOptions::default();

    let file = serde_json::to_value(convert_document(&doc, &options).value).unwrap();
    assert!(file["document"]["children"][0]["children"][0]
        .get("children")
        .is_none());

    assert!(matches!(
        get_node(&doc, None, "nested", &options),
        Err(Error::NodeNotFound(_))
    ));
    assert!(convert_nodes(&doc, ["nested"], &options)
        .value
        .get("nested")
        .is_none());
}

#[test]
fn test_lookup_respects_hidden_ancestors() {
    let doc = figmap::parse_str(
        r#"{"name": "D", "pages": [{"id": "p", "shapes": [
            {"id": "g", "visible": false, "kind": {"type": "group"}, "children": [
                {"id": "r", "kind": {"type": "rect"}}
            ]}
        ]}]}"#,
    )
    .unwrap();
    let options = ConvertOptions::new().with_hidden(false);

    let file = convert_document(&doc, &options).value;
    assert!(file.document.children()[0].children().is_empty());
    assert!(matches!(
        get_node(&doc, None, "r", &options),
        Err(Error::Hidden(_))
    ));
    assert!(get_node(&doc, None, "r", &ConvertOptions::default()).is_ok());
}
