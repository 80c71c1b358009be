//! Tests for the component metadata store: population, lookups,
//! internationalization and the instance registry.
mod common;
use common::*;
use kumiki::prelude::*;

#[test]
fn test_populate_and_lookup() {
    let db = test_db();
    assert!(db.has_type("Button"));
    let button = db.get_type("Button").expect("Button should be known");
    assert_eq!(button.type_name, "com.kumiki.components.Button");
    assert_eq!(button.version, "7");
    assert!(db.get_type("Slider").is_none());
}

#[test]
fn test_event_params_fallback_to_legacy_key() {
    let db = test_db();
    // "Click" uses the preferred "parameters" key, "Dragged" the legacy
    // "params" key; both must resolve.
    let click = db.get_event_for_type("Button", "Click").unwrap();
    assert!(click.params.is_empty());
    let dragged = db.get_event_for_type("Button", "Dragged").unwrap();
    assert_eq!(dragged.params.len(), 2);
    assert_eq!(dragged.params[0].name, "x");
    assert_eq!(dragged.params[0].param_type, "number");
}

#[test]
fn test_setter_and_getter_lists_partition_by_rw_mode() {
    let db = test_db();
    assert_eq!(
        db.get_setter_names_for_type("Button").unwrap(),
        &["Text".to_string(), "Enabled".to_string()]
    );
    assert_eq!(
        db.get_getter_names_for_type("Button").unwrap(),
        &[
            "Text".to_string(),
            "Enabled".to_string(),
            "Width".to_string()
        ]
    );
    assert!(db.get_setter_names_for_type("Slider").is_none());
}

#[test]
fn test_missing_block_property_signals_any() {
    let db = test_db();
    // Width is read-only but block-visible.
    assert!(db.get_property_for_type("Button", "Width").is_some());
    // Unknown property: None, by contract not an error.
    assert!(db.get_property_for_type("Button", "Elevation").is_none());
}

#[test]
fn test_later_descriptors_override_by_name() {
    let mut db = test_db();
    let update = serde_json::json!([
        {
            "type": "com.kumiki.components.Button",
            "name": "Button",
            "version": "8",
            "events": [],
            "methods": [],
            "properties": [],
            "blockProperties": []
        }
    ]);
    db.populate_from_json(&update.to_string()).unwrap();
    assert_eq!(db.get_type("Button").unwrap().version, "8");
    assert!(db.get_event_for_type("Button", "Click").is_none());
}

#[test]
fn test_translation_fallback_chain() {
    let mut db = test_db();
    let mut table = ahash::AHashMap::new();
    table.insert("TitleProperties".to_string(), "Titre".to_string());
    table.insert(
        "Form.TitleProperties".to_string(),
        "Titre du formulaire".to_string(),
    );
    db.set_translations(table);

    // Per-component override beats the bare key.
    assert_eq!(
        db.get_internationalized_property_name("Form", "Title"),
        "Titre du formulaire"
    );
    // Bare key when no override exists for the type.
    assert_eq!(
        db.get_internationalized_property_name("Button", "Title"),
        "Titre"
    );
    // Explicit default when nothing is translated.
    assert_eq!(
        db.get_internationalized_property_description("Button", "Text", "the label"),
        "the label"
    );
    // The untranslated input itself as the last resort.
    assert_eq!(
        db.get_internationalized_property_name("Button", "Elevation"),
        "Elevation"
    );
}

#[test]
fn test_instance_registry_crud() {
    let mut db = test_db();
    assert!(db.add_instance("uid-1", "Button1", "Button"));
    assert!(db.add_instance("uid-2", "Button2", "Button"));
    assert!(!db.add_instance("uid-1", "Button3", "Button"));

    assert!(db.has_instance("uid-1"));
    assert_eq!(db.get_instance("uid-2").unwrap().name, "Button2");
    assert_eq!(db.get_instance_by_name("Button1").unwrap().uid, "uid-1");
    assert_eq!(
        db.get_component_names_by_type("Button"),
        vec!["Button1".to_string(), "Button2".to_string()]
    );

    let mut seen = 0;
    db.for_each_instance(|_| seen += 1);
    assert_eq!(seen, 2);
}

#[test]
fn test_rename_instance_invariants() {
    let mut db = test_db();
    db.add_instance("uid-1", "Button1", "Button");

    // Unknown id and unchanged name are both no-ops.
    assert!(!db.rename_instance("uid-9", "Other"));
    assert!(!db.rename_instance("uid-1", "Button1"));

    assert!(db.rename_instance("uid-1", "Go"));
    assert_eq!(db.get_instance("uid-1").unwrap().name, "Go");
    assert!(db.get_instance_by_name("Button1").is_none());

    // A freed name may be reused by a new instance.
    assert!(db.add_instance("uid-2", "Button1", "Button"));
}

#[test]
fn test_remove_instance() {
    let mut db = test_db();
    db.add_instance("uid-1", "Button1", "Button");
    assert!(db.remove_instance("uid-1"));
    assert!(!db.remove_instance("uid-1"));
    assert!(db.get_instance_by_name("Button1").is_none());
}
