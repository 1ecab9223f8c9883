//! Validation behavior against hand-written site documents.

use std::io::Write;

use kiosk_site::{SiteError, SiteRegistry};

fn minimal_document() -> serde_json::Value {
    serde_json::json!({
        "company": { "name": "Testco" },
        "nav": {
            "tabs": [
                { "name": "Home", "path": "/" },
                {
                    "name": "Work",
                    "path": "/work",
                    "submenu": [
                        { "name": "Work", "path": "/work" },
                        { "name": "Audits", "path": "/audits" }
                    ]
                }
            ],
            "call_to_action": { "name": "Hire Us", "path": "/hire" }
        },
        "pages": {
            "/": { "title": "Home" },
            "/work": { "title": "Work" },
            "/audits": { "title": "Audits" },
            "/hire": { "title": "Hire" }
        }
    })
}

fn load(document: serde_json::Value) -> Result<SiteRegistry, SiteError> {
    SiteRegistry::from_json(&document.to_string())
}

#[test]
fn minimal_document_is_accepted() {
    let site = load(minimal_document()).expect("document is valid");
    assert_eq!(site.routes().tab_count(), 2);
    assert_eq!(site.company().name, "Testco");
}

#[test]
fn duplicate_tab_path_is_rejected() {
    let mut document = minimal_document();
    document["nav"]["tabs"][1]["path"] = "/".into();
    document["nav"]["tabs"][1]["submenu"] = serde_json::json!([]);
    let err = load(document).unwrap_err();
    assert!(matches!(err, SiteError::DuplicateTabPath(path) if path == "/"));
}

#[test]
fn submenu_path_colliding_with_foreign_tab_is_rejected() {
    let mut document = minimal_document();
    document["nav"]["tabs"][1]["submenu"][1]["path"] = "/".into();
    let err = load(document).unwrap_err();
    assert!(matches!(err, SiteError::DuplicateSubmenuPath(path) if path == "/"));
}

#[test]
fn call_to_action_collision_is_rejected() {
    let mut document = minimal_document();
    document["nav"]["call_to_action"]["path"] = "/work".into();
    let err = load(document).unwrap_err();
    assert!(matches!(err, SiteError::CallToActionCollision(path) if path == "/work"));
}

#[test]
fn route_without_page_is_rejected() {
    let mut document = minimal_document();
    document["pages"].as_object_mut().unwrap().remove("/audits");
    let err = load(document).unwrap_err();
    assert!(matches!(err, SiteError::MissingPage { path, .. } if path == "/audits"));
}

#[test]
fn orphan_page_is_rejected() {
    let mut document = minimal_document();
    document["pages"]["/secret"] = serde_json::json!({ "title": "Secret" });
    let err = load(document).unwrap_err();
    assert!(matches!(err, SiteError::OrphanPage(path) if path == "/secret"));
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = SiteRegistry::from_json("{ not json").unwrap_err();
    assert!(matches!(err, SiteError::Parse(_)));
}

#[test]
fn loads_from_a_file_on_disk() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, "{}", minimal_document()).expect("write document");
    let site = SiteRegistry::from_path(file.path()).expect("document is valid");
    assert!(site.page("/hire").is_some());
}

#[test]
fn missing_file_is_an_io_error() {
    let err = SiteRegistry::from_path(std::path::Path::new("/nonexistent/site.json")).unwrap_err();
    assert!(matches!(err, SiteError::Io { .. }));
}
