//! Tests pinning the property serializer's exact behavior, including its
//! deliberately permissive numeric and boolean fallbacks, and the
//! obfuscation transform.
mod common;
use common::*;
use kumiki::codegen::obfuscate::{deobfuscate, obfuscate};
use kumiki::codegen::properties::{property_setter_value, quote, serialize_value};
use kumiki::prelude::*;

#[test]
fn test_numeric_literals_pass_through() {
    assert_eq!(serialize_value("42", "number"), "42");
    assert_eq!(serialize_value("-3.14", "number"), "-3.14");
    assert_eq!(serialize_value("  7  ", "number"), "  7  ");
    assert_eq!(serialize_value("&HFF", "number"), "#xFF");
}

#[test]
fn test_non_numeric_text_falls_through_to_quoting() {
    // Malformed numeric text is not rejected; it degrades to a string.
    assert_eq!(serialize_value("cat", "number"), "\"cat\"");
    assert_eq!(serialize_value("1.2.3", "number"), "\"1.2.3\"");
}

#[test]
fn test_boolean_substring_contract() {
    assert_eq!(serialize_value("True", "boolean"), "#t");
    assert_eq!(serialize_value("False", "boolean"), "#f");
    // Substring match, not equality.
    assert_eq!(serialize_value("IsTrue", "boolean"), "#t");
    // False wins when both appear.
    assert_eq!(serialize_value("FalseTrue", "boolean"), "#f");
    assert_eq!(serialize_value("maybe", "boolean"), "\"maybe\"");
}

#[test]
fn test_component_references() {
    assert_eq!(serialize_value("", "component"), "\"\"");
    assert_eq!(
        serialize_value("Button1", "component"),
        "(get-component Button1)"
    );
}

#[test]
fn test_fallback_empties() {
    assert_eq!(serialize_value("", "text"), "\"\"");
    assert_eq!(serialize_value("null", "text"), "\"\"");
    assert_eq!(serialize_value("a\nb", "text"), "\"a\\nb\"");
}

#[test]
fn test_quote_policy() {
    assert_eq!(quote("say \"hi\""), "\"say \\\"hi\\\"\"");
    assert_eq!(quote("tab\there"), "\"tab\\there\"");
    assert_eq!(quote("café"), "\"caf\\u00E9\"");
}

#[test]
fn test_obfuscation_involution() {
    let samples = [
        "",
        "K",
        "a 50 character value: MIXED case, punct!? #$%&*()-_=+;",
    ];
    for sample in samples {
        for confounder in ["x", "Kmk", "longer-confounder-than-most-inputs"] {
            let masked = obfuscate(sample, confounder);
            assert_eq!(
                deobfuscate(&masked, confounder),
                sample,
                "round trip failed for {sample:?} with confounder {confounder:?}"
            );
        }
    }
}

#[test]
fn test_sensitive_property_obfuscated_only_when_deployed() {
    let db = test_db();
    let deployed = GenContext {
        db: &db,
        mode: GenerationMode::Deployed,
        form_name: "Screen1".to_string(),
        confounder: Some("Kmk".to_string()),
    };
    let masked = property_setter_value("ApiKey", "secret", "text", &deployed);
    assert!(masked.contains("text-deobfuscate"));
    assert!(masked.contains("\"Kmk\""));
    assert!(!masked.contains("secret"));

    let live = GenContext {
        db: &db,
        mode: GenerationMode::LiveSession,
        form_name: "Screen1".to_string(),
        confounder: None,
    };
    assert_eq!(
        property_setter_value("ApiKey", "secret", "text", &live),
        "\"secret\""
    );

    // Other properties are never obfuscated.
    assert_eq!(
        property_setter_value("Text", "secret", "text", &deployed),
        "\"secret\""
    );
}
