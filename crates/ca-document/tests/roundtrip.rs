use ca_core::{BoundingBox, Pixel};
use ca_document::{
    ComponentDef, ConnectionDef, Document, DocumentError, EndpointDef, ExternalPortDef, PortDef,
    empty_points, from_json_str, load_json, save_json, to_json_pretty, validate_document,
};
use serde_json::json;

fn sample() -> Document {
    let mut doc = Document::default();
    doc.components.insert(
        "R1".to_string(),
        ComponentDef {
            kind: "电阻".to_string(),
            bbox: BoundingBox::from_array([10, 10, 60, 30]),
            ports: vec![
                PortDef {
                    name: "1".to_string(),
                    coord: Pixel::new(10, 20),
                    kind: String::new(),
                },
                PortDef {
                    name: "2".to_string(),
                    coord: Pixel::new(60, 20),
                    kind: String::new(),
                },
            ],
        },
    );
    doc.external_ports.insert(
        "VIN".to_string(),
        ExternalPortDef {
            kind: "input".to_string(),
            coord: Pixel::new(0, 20),
        },
    );
    doc.connections.push(ConnectionDef {
        nodes: vec![EndpointDef::new("external", "VIN"), EndpointDef::new("R1", "1")],
        points: empty_points(),
    });
    doc
}

#[test]
fn missing_sections_default_to_empty() {
    let doc = from_json_str("{}").unwrap();
    assert!(doc.components.is_empty());
    assert!(doc.external_ports.is_empty());
    assert!(doc.connections.is_empty());

    let doc = from_json_str(r#"{"external_ports": {"A": {"type": "in", "coord": [1, 2]}}}"#)
        .unwrap();
    assert_eq!(doc.external_ports.len(), 1);
    assert!(doc.components.is_empty());
}

#[test]
fn non_object_roots_are_rejected() {
    for text in ["[]", "null", "42", "\"components\""] {
        let err = from_json_str(text).unwrap_err();
        assert!(matches!(err, DocumentError::NotAnObject { .. }), "{text}");
    }
    assert!(matches!(
        from_json_str("{not json").unwrap_err(),
        DocumentError::Json(_)
    ));
}

#[test]
fn unordered_boxes_are_normalized_on_load() {
    let doc = from_json_str(
        r#"{"components": {"C1": {"type": "cap", "box": [80, 90, 20, 30], "ports": []}}}"#,
    )
    .unwrap();
    assert_eq!(doc.components["C1"].bbox.to_array(), [20, 30, 80, 90]);
}

#[test]
fn points_are_preserved_verbatim() {
    let text = r#"{"connections": [{"nodes": [], "points": [[1, 2], {"x": 3}]}]}"#;
    let doc = from_json_str(text).unwrap();
    let out = to_json_pretty(&doc).unwrap();
    let again = from_json_str(&out).unwrap();
    assert_eq!(again.connections[0].points, doc.connections[0].points);
    assert_eq!(doc.connections[0].points, json!([[1, 2], {"x": 3}]));
}

#[test]
fn points_of_any_shape_survive() {
    let text = r#"{"connections": [
        {"nodes": [], "points": null},
        {"nodes": [], "points": {"route": "manhattan"}},
        {"nodes": []}
    ]}"#;
    let doc = from_json_str(text).unwrap();
    assert_eq!(doc.connections[0].points, json!(null));
    assert_eq!(doc.connections[1].points, json!({"route": "manhattan"}));
    assert_eq!(doc.connections[2].points, json!([]));

    let again = from_json_str(&to_json_pretty(&doc).unwrap()).unwrap();
    assert_eq!(again, doc);
}

#[test]
fn pretty_output_keeps_non_ascii_text() {
    let out = to_json_pretty(&sample()).unwrap();
    assert!(out.contains("电阻"));
    assert!(!out.contains("\\u"));
    assert!(out.contains('\n'));
}

#[test]
fn component_port_type_is_omitted_when_empty() {
    let out = to_json_pretty(&sample()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    let port = &value["components"]["R1"]["ports"][0];
    assert!(port.get("type").is_none());
    assert_eq!(port["coord"], serde_json::json!([10, 20]));
}

#[test]
fn insertion_order_survives_round_trip() {
    let text = r#"{"components": {
        "Z": {"type": "", "box": [0, 0, 1, 1], "ports": []},
        "A": {"type": "", "box": [0, 0, 1, 1], "ports": []},
        "M": {"type": "", "box": [0, 0, 1, 1], "ports": []}
    }}"#;
    let doc = from_json_str(text).unwrap();
    let again = from_json_str(&to_json_pretty(&doc).unwrap()).unwrap();
    let names: Vec<_> = again.components.keys().cloned().collect();
    assert_eq!(names, ["Z", "A", "M"]);
}

#[test]
fn roundtrip_json_file() {
    let doc = sample();
    validate_document(&doc).unwrap();

    let path = std::env::temp_dir().join("ca_document_roundtrip_sample.json");
    save_json(&path, &doc).unwrap();
    let loaded = load_json(&path).unwrap();
    assert_eq!(doc, loaded);
    let _ = std::fs::remove_file(&path);
}
