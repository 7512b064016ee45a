use std::path::Path;

use n8ngen_core::error::LoadError;
use n8ngen_core::parse;
use serde_json::json;

const PING: &str = include_str!("fixtures/ping.json");
const PETSTORE: &str = include_str!("fixtures/petstore.json");
const UNORDERED: &str = include_str!("fixtures/unordered-31.json");
const INVALID: &str = include_str!("fixtures/invalid.json");

#[test]
fn parse_ping() {
    let doc = parse::from_json(PING).expect("should parse ping.json");
    assert_eq!(doc.openapi, "3.0.3");
    assert_eq!(doc.info.as_ref().unwrap().title, "Ping API");
    assert_eq!(doc.paths.len(), 1);
    let get = &doc.paths["/ping"].operations["get"];
    assert_eq!(get.summary.as_deref(), Some("Ping"));
}

#[test]
fn parse_petstore() {
    let doc = parse::from_json(PETSTORE).expect("should parse petstore");
    assert_eq!(doc.paths.len(), 3);
    assert_eq!(doc.operation_count(), 4);

    let pets = &doc.paths["/pets"];
    assert_eq!(pets.operations["get"].summary.as_deref(), Some("List all pets"));
    assert_eq!(pets.operations["post"].summary, None);

    // Path-level parameters and extensions never become operations.
    let by_id: Vec<&str> = doc.paths["/pets/{petId}"]
        .operations
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(by_id, vec!["get", "delete"]);
    assert!(doc.paths["/health"].operations.is_empty());
}

#[test]
fn parse_keeps_document_order() {
    let doc = parse::from_json(UNORDERED).unwrap();
    let paths: Vec<&str> = doc.paths.keys().map(String::as_str).collect();
    assert_eq!(paths, vec!["/zebra", "/alpha/{id}/items"]);
    let methods: Vec<&str> = doc.paths["/alpha/{id}/items"]
        .operations
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(methods, vec!["patch", "trace", "head"]);
}

#[test]
fn parse_rejects_invalid_json() {
    let result = parse::from_json("{ \"openapi\": ");
    assert!(matches!(result, Err(LoadError::Parse(_))));
}

#[test]
fn parse_reports_all_validation_issues() {
    match parse::from_json(INVALID) {
        Err(LoadError::Validation(err)) => {
            let pointers: Vec<&str> = err.issues.iter().map(|i| i.pointer.as_str()).collect();
            assert_eq!(
                pointers,
                vec![
                    "/info/version",
                    "/paths/~1things/get/responses",
                    "/paths/~1things/get/summary",
                ]
            );
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

fn issue_pointers(input: &serde_json::Value) -> Vec<String> {
    match parse::from_json(&input.to_string()) {
        Err(LoadError::Validation(err)) => err.issues.into_iter().map(|i| i.pointer).collect(),
        other => panic!("expected validation error for {input}, got {other:?}"),
    }
}

#[test]
fn parse_rejects_nonconforming_documents() {
    let ok = json!({ "200": { "description": "ok" } });
    let cases = [
        (
            json!({ "/a": { "get": { "responses": { "200": 5 } } } }),
            json!({}),
            "/paths/~1a/get/responses/200",
        ),
        (
            json!({ "/a": { "post": { "requestBody": 7, "responses": ok } } }),
            json!({}),
            "/paths/~1a/post/requestBody",
        ),
        (
            json!({ "/a": { "get": { "bogus": 1, "responses": ok } } }),
            json!({}),
            "/paths/~1a/get",
        ),
        (json!({}), json!({ "components": 42 }), "/components"),
        (json!({}), json!({ "servers": "nope" }), "/servers"),
        (json!({}), json!({ "bogus": true }), ""),
    ];

    for (paths, extra, expected) in cases {
        let mut doc = json!({
            "openapi": "3.0.3",
            "info": { "title": "T", "version": "1" },
            "paths": paths
        });
        for (key, value) in extra.as_object().unwrap() {
            doc[key] = value.clone();
        }
        let pointers = issue_pointers(&doc);
        assert!(
            pointers.iter().any(|p| p == expected),
            "expected an issue at {expected:?}, got {pointers:?}"
        );
    }
}

#[test]
fn parse_reports_info_issues_where_they_occur() {
    let license = json!({
        "openapi": "3.0.3",
        "info": { "title": "T", "version": "1", "license": 5 },
        "paths": {}
    });
    assert_eq!(issue_pointers(&license), vec!["/info/license"]);

    let description = json!({
        "openapi": "3.1.0",
        "info": { "title": "T", "version": "1", "description": 5 },
        "paths": {}
    });
    assert!(issue_pointers(&description).contains(&"/info/description".to_string()));
}

#[test]
fn parse_rejects_bare_paths_fragment() {
    let result = parse::from_json(r#"{"paths": {"/ping": {"get": {"summary": "Ping"}}}}"#);
    assert!(matches!(result, Err(LoadError::Validation(_))));
}

#[test]
fn load_missing_file() {
    let missing = Path::new("tests/fixtures/does-not-exist.json");
    match parse::load(missing) {
        Err(LoadError::Read { path, .. }) => assert_eq!(path, missing),
        other => panic!("expected read error, got {other:?}"),
    }
}

#[test]
fn load_from_disk() {
    let doc = parse::load(Path::new("tests/fixtures/petstore.json")).unwrap();
    assert_eq!(doc.info.unwrap().title, "Petstore");
}
