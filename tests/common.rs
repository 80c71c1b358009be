//! Common test utilities for building schema documents, forms and blocks.
use kumiki::prelude::*;

/// Builds a metadata store with a small but representative palette: a Form,
/// a Button, a Sound and a Map.
#[allow(dead_code)]
pub fn test_db() -> ComponentDatabase {
    let schema = serde_json::json!([
        {
            "type": "com.kumiki.components.Form",
            "name": "Form",
            "external": "false",
            "version": "31",
            "categoryString": "LAYOUT",
            "events": [
                { "name": "Initialize", "description": "Fires when the screen opens", "deprecated": "false", "parameters": [] }
            ],
            "methods": [],
            "properties": [
                { "name": "Title", "editorType": "string", "defaultValue": "" },
                { "name": "BackgroundColor", "editorType": "color", "defaultValue": "&H00FFFFFF", "alwaysSend": true }
            ],
            "blockProperties": [
                { "name": "Title", "type": "text", "rw": "read-write" },
                { "name": "BackgroundColor", "type": "number", "rw": "read-write" }
            ]
        },
        {
            "type": "com.kumiki.components.Button",
            "name": "Button",
            "version": "7",
            "categoryString": "USERINTERFACE",
            "events": [
                { "name": "Click", "description": "", "parameters": [] },
                { "name": "Dragged", "description": "", "params": [
                    { "name": "x", "type": "number" },
                    { "name": "y", "type": "number" }
                ] }
            ],
            "methods": [],
            "properties": [
                { "name": "Text", "editorType": "string", "defaultValue": "OK" },
                { "name": "Enabled", "editorType": "boolean", "defaultValue": "True" }
            ],
            "blockProperties": [
                { "name": "Text", "type": "text", "rw": "read-write" },
                { "name": "Enabled", "type": "boolean", "rw": "read-write" },
                { "name": "Width", "type": "number", "rw": "read-only" }
            ]
        },
        {
            "type": "com.kumiki.components.Sound",
            "name": "Sound",
            "version": "4",
            "categoryString": "MEDIA",
            "events": [],
            "methods": [
                { "name": "Play", "parameters": [] },
                { "name": "Vibrate", "parameters": [ { "name": "millisecs", "type": "number" } ] },
                { "name": "Duration", "parameters": [], "returnType": "number" }
            ],
            "properties": [],
            "blockProperties": []
        },
        {
            "type": "com.kumiki.components.Map",
            "name": "Map",
            "version": "2",
            "categoryString": "MAPS",
            "events": [],
            "methods": [],
            "properties": [
                { "name": "ApiKey", "editorType": "string", "defaultValue": "" }
            ],
            "blockProperties": [
                { "name": "ApiKey", "type": "text", "rw": "read-write" }
            ]
        }
    ]);
    let mut db = ComponentDatabase::new();
    db.populate_from_json(&schema.to_string())
        .expect("test schema must load");
    db
}

/// A form named `Screen1` holding one Button with an explicit `Text`.
#[allow(dead_code)]
pub fn simple_form_json() -> String {
    serde_json::json!({
        "Source": "Form",
        "Properties": {
            "$Name": "Screen1",
            "$Type": "Form",
            "$Version": "31",
            "Uuid": "0",
            "TutorialURL": "http://example.com/tutorial",
            "Title": "Home",
            "$Components": [
                {
                    "$Name": "Button1",
                    "$Type": "Button",
                    "Uuid": "-1",
                    "Text": "go"
                }
            ]
        }
    })
    .to_string()
}

/// An event handler block: `when Button1.Click -> set Button1.Text to "hi"`.
#[allow(dead_code)]
pub fn click_handler() -> Block {
    let setter = Block::new("component_set_get")
        .with_mutation(Mutation {
            set_or_get: Some("set".to_string()),
            property_name: Some("Text".to_string()),
            instance_name: Some("Button1".to_string()),
            component_type: Some("Button".to_string()),
            ..Mutation::default()
        })
        .with_value("VALUE", Block::new("text").with_field("TEXT", "hi"));
    Block::new("component_event")
        .with_mutation(Mutation {
            instance_name: Some("Button1".to_string()),
            event_name: Some("Click".to_string()),
            component_type: Some("Button".to_string()),
            ..Mutation::default()
        })
        .with_statement("DO", setter)
}

/// `global score = 0`
#[allow(dead_code)]
pub fn score_global() -> Block {
    Block::new("global_declaration")
        .with_field("NAME", "score")
        .with_value("VALUE", Block::new("math_number").with_field("NUM", "0"))
}
