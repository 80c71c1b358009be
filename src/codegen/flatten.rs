//! Component tree flattening.
//!
//! Walks the designer's nested component records pre-order and produces, per
//! component, its attach-and-configure fragment followed by that component's
//! top-level event handlers, then its children in stored order. The root
//! Form attaches to nothing; its properties go into a deferred
//! `do-after-form-creation` wrapper so the form exists before anything hooks
//! into its lifecycle.

use super::properties::property_setter_value;
use super::visitor::generate_statement_chain;
use super::{ComponentRecord, GenContext};
use crate::block::Block;
use crate::error::CodegenError;
use ahash::AHashMap;
use itertools::Itertools;

/// Keys of the component record that are identity or editor bookkeeping,
/// never settable properties. `TutorialURL` and `BlocksToolkit` are designer
/// metadata that still ride along in saved projects.
fn is_reserved_key(key: &str) -> bool {
    key.starts_with('$') || key == "Uuid" || key == "TutorialURL" || key == "BlocksToolkit"
}

#[derive(Debug, Default)]
pub(crate) struct FlattenResult {
    /// Ordered code fragments, one per component attach/configure step or
    /// event handler.
    pub fragments: Vec<String>,
    /// Component names in visit order, possibly with duplicates; the emitter
    /// deduplicates when building the initializer call.
    pub component_names: Vec<String>,
}

pub(crate) struct Flattener<'a> {
    ctx: &'a GenContext<'a>,
    events: &'a AHashMap<String, Vec<Block>>,
}

impl<'a> Flattener<'a> {
    pub(crate) fn new(ctx: &'a GenContext<'a>, events: &'a AHashMap<String, Vec<Block>>) -> Self {
        Self { ctx, events }
    }

    pub(crate) fn flatten(&self, root: &ComponentRecord) -> Result<FlattenResult, CodegenError> {
        let mut result = FlattenResult::default();
        self.walk(root, None, &mut result)?;
        Ok(result)
    }

    fn walk(
        &self,
        record: &ComponentRecord,
        parent: Option<&str>,
        out: &mut FlattenResult,
    ) -> Result<(), CodegenError> {
        out.component_names.push(record.name.clone());

        let setters = self.property_setters(record);
        match parent {
            None => {
                out.fragments
                    .push(format!("(do-after-form-creation{})", Self::inline(&setters)));
            }
            Some(parent_name) => {
                let qualified_type = self
                    .ctx
                    .db
                    .get_type(&record.component_type)
                    .map(|t| t.type_name.clone())
                    .unwrap_or_else(|| record.component_type.clone());
                out.fragments.push(format!(
                    "(add-component {parent_name} {qualified_type} {}{})",
                    record.name,
                    Self::inline(&setters)
                ));
            }
        }

        if let Some(handlers) = self.events.get(&record.name) {
            for handler in handlers {
                let code = generate_statement_chain(handler, self.ctx)?;
                let trimmed = code.trim_end();
                if !trimmed.is_empty() {
                    out.fragments.push(trimmed.to_string());
                }
            }
        }

        for child in &record.children {
            self.walk(child, Some(&record.name), out)?;
        }
        Ok(())
    }

    /// Property setter statements for one component, sorted lexicographically
    /// by property name so default and explicit assignments interleave
    /// deterministically.
    ///
    /// The emission set is the union of the type's writable block properties,
    /// its `alwaysSend` designer properties, and whatever non-reserved keys
    /// the record actually stores. Values resolve stored-first, schema
    /// default second, with the one exception that a stored literal empty
    /// string is preserved, never replaced by the default.
    fn property_setters(&self, record: &ComponentRecord) -> Vec<String> {
        let db = self.ctx.db;
        let type_name = &record.component_type;

        let mut names: Vec<String> = Vec::new();
        if let Some(setters) = db.get_setter_names_for_type(type_name) {
            names.extend(setters.iter().cloned());
        }
        if let Some(descriptor) = db.get_type(type_name) {
            for property in descriptor.properties.values() {
                if property.always_send {
                    names.push(property.name.clone());
                }
            }
        }
        for key in record.properties.keys() {
            if !is_reserved_key(key) {
                names.push(key.clone());
            }
        }
        names.sort();
        names.dedup();

        let mut setters = Vec::with_capacity(names.len());
        for name in &names {
            let stored = record.properties.get(name).and_then(stored_as_string);
            let raw = match stored {
                Some(text) => text,
                None => match db.get_designer_property_for_type(type_name, name) {
                    Some(descriptor) => descriptor.default_value.clone(),
                    None => continue,
                },
            };
            let property_type = db
                .get_property_for_type(type_name, name)
                .and_then(|p| p.block_type.clone())
                .unwrap_or_else(|| "any".to_string());
            let literal = property_setter_value(name, &raw, &property_type, self.ctx);
            setters.push(format!(
                "(set-and-coerce-property! '{} '{name} {literal} '{property_type})",
                record.name
            ));
        }
        setters
    }

    fn inline(setters: &[String]) -> String {
        setters.iter().map(|s| format!("\n {s}")).join("")
    }
}

/// A stored property value, stringified. JSON `null` is treated as absent so
/// it falls back to the schema default; everything else, including the empty
/// string, is kept verbatim.
fn stored_as_string(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
