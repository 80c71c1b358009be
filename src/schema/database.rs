use super::descriptor::{
    ComponentTypeDescriptor, EventDescriptor, MethodDescriptor, PropertyDescriptor,
    RawComponentDescriptor,
};
use super::instances::ComponentInstanceRecord;
use crate::error::SchemaError;
use ahash::AHashMap;

/// The component metadata store.
///
/// Holds every known component class keyed by its short name, the translation
/// table for internationalized display strings, and the registry of placed
/// component instances. Populated once at editor load; descriptors arriving
/// later (extension loads) merge in by name, later ones winning.
#[derive(Debug, Default)]
pub struct ComponentDatabase {
    types: AHashMap<String, ComponentTypeDescriptor>,
    translations: AHashMap<String, String>,
    pub(super) instances: AHashMap<String, ComponentInstanceRecord>,
    pub(super) name_index: AHashMap<String, String>,
}

impl ComponentDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a schema document (a JSON array of component descriptors) and
    /// merge-inserts every descriptor it contains.
    pub fn populate_from_json(&mut self, json: &str) -> Result<(), SchemaError> {
        let raw: Vec<RawComponentDescriptor> =
            serde_json::from_str(json).map_err(|e| SchemaError::JsonParseError(e.to_string()))?;
        let mut descriptors = Vec::with_capacity(raw.len());
        for (index, entry) in raw.into_iter().enumerate() {
            let descriptor = entry
                .into_descriptor()
                .ok_or(SchemaError::MissingTypeName { index })?;
            descriptors.push(descriptor);
        }
        self.populate(descriptors);
        Ok(())
    }

    /// Merge-inserts type descriptors by short name; a later descriptor for
    /// the same name replaces the earlier one.
    pub fn populate(&mut self, descriptors: Vec<ComponentTypeDescriptor>) {
        for descriptor in descriptors {
            self.types.insert(descriptor.name.clone(), descriptor);
        }
    }

    /// Replaces the translation table used by the internationalized lookups.
    pub fn set_translations(&mut self, translations: AHashMap<String, String>) {
        self.translations = translations;
    }

    pub fn has_type(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    pub fn get_type(&self, name: &str) -> Option<&ComponentTypeDescriptor> {
        self.types.get(name)
    }

    pub fn get_event_for_type(&self, type_name: &str, event: &str) -> Option<&EventDescriptor> {
        self.types.get(type_name)?.events.get(event)
    }

    pub fn get_method_for_type(&self, type_name: &str, method: &str) -> Option<&MethodDescriptor> {
        self.types.get(type_name)?.methods.get(method)
    }

    /// Returns the block-side property descriptor, or `None` when the
    /// property has no block presence. Callers treat `None` as type "any";
    /// it is not an error.
    pub fn get_property_for_type(
        &self,
        type_name: &str,
        property: &str,
    ) -> Option<&PropertyDescriptor> {
        self.types
            .get(type_name)?
            .properties
            .get(property)
            .filter(|p| p.block_type.is_some())
    }

    /// Every property descriptor of the type, block-visible or not.
    pub fn get_designer_property_for_type(
        &self,
        type_name: &str,
        property: &str,
    ) -> Option<&PropertyDescriptor> {
        self.types.get(type_name)?.properties.get(property)
    }

    /// Writable block property names in declaration order, or `None` for an
    /// unknown type.
    pub fn get_setter_names_for_type(&self, type_name: &str) -> Option<&[String]> {
        self.types.get(type_name).map(|t| t.setter_names.as_slice())
    }

    /// Readable block property names in declaration order, or `None` for an
    /// unknown type.
    pub fn get_getter_names_for_type(&self, type_name: &str) -> Option<&[String]> {
        self.types.get(type_name).map(|t| t.getter_names.as_slice())
    }

    // -----------------------------------------------------------------------
    // Internationalized lookups. Resolution order is always: per-component
    // override key, bare key, the explicit default, and finally the
    // untranslated input itself. Absence never raises.
    // -----------------------------------------------------------------------

    fn translate(&self, override_key: &str, key: &str, default: &str, fallback: &str) -> String {
        if let Some(hit) = self.translations.get(override_key) {
            return hit.clone();
        }
        if let Some(hit) = self.translations.get(key) {
            return hit.clone();
        }
        if !default.is_empty() {
            return default.to_string();
        }
        fallback.to_string()
    }

    pub fn get_internationalized_component_type(&self, type_name: &str) -> String {
        self.translate("", type_name, "", type_name)
    }

    pub fn get_internationalized_event_name(&self, type_name: &str, event: &str) -> String {
        self.translate(
            &format!("{type_name}.{event}Events"),
            &format!("{event}Events"),
            "",
            event,
        )
    }

    pub fn get_internationalized_event_description(
        &self,
        type_name: &str,
        event: &str,
        default: &str,
    ) -> String {
        self.translate(
            &format!("{type_name}.{event}EventDescriptions"),
            &format!("{event}EventDescriptions"),
            default,
            event,
        )
    }

    pub fn get_internationalized_method_name(&self, type_name: &str, method: &str) -> String {
        self.translate(
            &format!("{type_name}.{method}Methods"),
            &format!("{method}Methods"),
            "",
            method,
        )
    }

    pub fn get_internationalized_property_name(&self, type_name: &str, property: &str) -> String {
        self.translate(
            &format!("{type_name}.{property}Properties"),
            &format!("{property}Properties"),
            "",
            property,
        )
    }

    pub fn get_internationalized_property_description(
        &self,
        type_name: &str,
        property: &str,
        default: &str,
    ) -> String {
        self.translate(
            &format!("{type_name}.{property}PropertyDescriptions"),
            &format!("{property}PropertyDescriptions"),
            default,
            property,
        )
    }

    pub fn get_internationalized_param_name(&self, param: &str) -> String {
        self.translate("", &format!("{param}Params"), "", param)
    }
}
