//! Serialization of designer property values into runtime literals.
//!
//! The matching here is deliberately permissive: text that fails the numeric
//! or boolean grammar is not rejected, it falls through to generic string
//! quoting. Tests pin that behavior; do not tighten it without changing the
//! runtime's expectations too.

use super::obfuscate::{obfuscate, random_confounder};
use super::{GenContext, GenerationMode};
use regex::Regex;
use std::sync::LazyLock;

/// Property name treated as sensitive by convention.
pub const SENSITIVE_PROPERTY: &str = "ApiKey";

static NUMERIC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*[-+]?[0-9]+(\.[0-9]+)?\s*$").expect("hard-coded numeric pattern")
});
static HEX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^&H[0-9A-Fa-f]+$").expect("hard-coded hex pattern"));

/// Converts a raw designer property string into a literal of the declared
/// block type.
pub fn serialize_value(raw: &str, declared_type: &str) -> String {
    match declared_type {
        "number" => {
            if NUMERIC_RE.is_match(raw) {
                raw.to_string()
            } else if HEX_RE.is_match(raw) {
                format!("#x{}", &raw[2..])
            } else {
                fallback_literal(raw)
            }
        }
        // Substring match, not equality: "IsTrue" counts as true. False wins
        // when both appear.
        "boolean" => {
            if raw.contains("False") {
                "#f".to_string()
            } else if raw.contains("True") {
                "#t".to_string()
            } else {
                fallback_literal(raw)
            }
        }
        "component" => {
            if raw.is_empty() {
                "\"\"".to_string()
            } else {
                format!("(get-component {raw})")
            }
        }
        _ => fallback_literal(raw),
    }
}

fn fallback_literal(raw: &str) -> String {
    if raw.is_empty() || raw == "null" {
        "\"\"".to_string()
    } else {
        quote(raw)
    }
}

/// Serializes one property assignment, routing sensitive values through the
/// obfuscator when generating for a deployed target. Live sessions keep the
/// value in the clear; the session transcript never leaves the developer's
/// machine.
pub fn property_setter_value(
    property_name: &str,
    raw: &str,
    declared_type: &str,
    ctx: &GenContext<'_>,
) -> String {
    if property_name == SENSITIVE_PROPERTY && ctx.mode == GenerationMode::Deployed {
        let confounder = ctx
            .confounder
            .clone()
            .unwrap_or_else(|| random_confounder(raw.encode_utf16().count()));
        let masked = obfuscate(raw, &confounder);
        return format!(
            "(call-runtime-primitive text-deobfuscate (*list-for-runtime* {} {}) '(text text) \"deobfuscate text\")",
            quote_utf16(&masked),
            quote(&confounder)
        );
    }
    serialize_value(raw, declared_type)
}

/// Quotes a string for the runtime language: backslash and quote escapes,
/// the `\n`/`\t`/`\r` shorthands, and 4-hex-digit unicode escapes for
/// anything outside printable ASCII (astral characters become a surrogate
/// pair of escapes).
pub fn quote(s: &str) -> String {
    let units: Vec<u16> = s.encode_utf16().collect();
    quote_utf16(&units)
}

/// Same policy over raw UTF-16 code units, which is what the obfuscator
/// produces (its output may contain lone surrogates).
pub fn quote_utf16(units: &[u16]) -> String {
    let mut out = String::with_capacity(units.len() + 2);
    out.push('"');
    for &unit in units {
        match unit {
            0x5C => out.push_str("\\\\"),
            0x22 => out.push_str("\\\""),
            0x0A => out.push_str("\\n"),
            0x09 => out.push_str("\\t"),
            0x0D => out.push_str("\\r"),
            0x20..=0x7E => out.push(unit as u8 as char),
            other => out.push_str(&format!("\\u{other:04X}")),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_escapes_shorthands() {
        assert_eq!(quote("a\"b\\c\nd"), "\"a\\\"b\\\\c\\nd\"");
    }

    #[test]
    fn quote_escapes_non_ascii_as_hex() {
        assert_eq!(quote("é"), "\"\\u00E9\"");
        // Astral characters become a surrogate pair of escapes.
        assert_eq!(quote("\u{1F600}"), "\"\\uD83D\\uDE00\"");
    }

    #[test]
    fn hex_literals_are_reprefixed() {
        assert_eq!(serialize_value("&HFF", "number"), "#xFF");
    }
}
