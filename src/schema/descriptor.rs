use ahash::AHashMap;
use serde::{Deserialize, Deserializer};

/// Read/write mode of a component property, derived from cross-referencing
/// the designer and block property tables of the schema document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RwMode {
    ReadOnly,
    WriteOnly,
    ReadWrite,
    /// Designer-only property with no block presence.
    Invisible,
}

impl RwMode {
    pub fn is_readable(self) -> bool {
        matches!(self, RwMode::ReadOnly | RwMode::ReadWrite)
    }

    pub fn is_writable(self) -> bool {
        matches!(self, RwMode::WriteOnly | RwMode::ReadWrite)
    }
}

/// One event or method parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamDescriptor {
    pub name: String,
    pub param_type: String,
}

/// One event exposed by a component type.
#[derive(Debug, Clone)]
pub struct EventDescriptor {
    pub name: String,
    pub description: String,
    pub deprecated: bool,
    pub params: Vec<ParamDescriptor>,
}

/// One method exposed by a component type.
#[derive(Debug, Clone)]
pub struct MethodDescriptor {
    pub name: String,
    pub description: String,
    pub deprecated: bool,
    pub params: Vec<ParamDescriptor>,
    /// `None` for void methods; the block is then statement-shaped.
    pub return_type: Option<String>,
}

/// One property of a component type, merged from the designer and block
/// property tables.
#[derive(Debug, Clone)]
pub struct PropertyDescriptor {
    pub name: String,
    pub description: String,
    /// Block-side type. `None` means the property only exists for the
    /// designer; callers treat that as type "any".
    pub block_type: Option<String>,
    pub editor_type: Option<String>,
    pub default_value: String,
    pub rw: RwMode,
    pub deprecated: bool,
    /// Emit a setter even when the instance stores no value for it.
    pub always_send: bool,
}

/// Everything known about one component class.
#[derive(Debug, Clone)]
pub struct ComponentTypeDescriptor {
    /// Fully-qualified class name.
    pub type_name: String,
    /// Short display name, unique among loaded types.
    pub name: String,
    pub external: bool,
    pub version: String,
    pub category: String,
    pub icon_name: String,
    pub events: AHashMap<String, EventDescriptor>,
    pub methods: AHashMap<String, MethodDescriptor>,
    pub properties: AHashMap<String, PropertyDescriptor>,
    /// Block property names with a writable rw-mode, in declaration order.
    pub setter_names: Vec<String>,
    /// Block property names with a readable rw-mode, in declaration order.
    pub getter_names: Vec<String>,
}

// ---------------------------------------------------------------------------
// Raw serde mirror of the schema document. Descriptor documents come from a
// code generator on the component side and are sloppy about flag encodings,
// so every boolean accepts both `true` and `"true"`.
// ---------------------------------------------------------------------------

fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Text(String),
    }
    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => b,
        Flag::Text(s) => s.eq_ignore_ascii_case("true"),
    })
}

fn loose_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    })
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawParam {
    pub name: String,
    #[serde(rename = "type", default)]
    pub param_type: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawEvent {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "flag")]
    pub deprecated: bool,
    /// Newer documents carry `parameters`; older ones carry `params`.
    #[serde(default)]
    pub parameters: Option<Vec<RawParam>>,
    #[serde(default)]
    pub params: Option<Vec<RawParam>>,
}

impl RawEvent {
    pub(crate) fn take_params(&mut self) -> Vec<RawParam> {
        self.parameters
            .take()
            .or_else(|| self.params.take())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawMethod {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "flag")]
    pub deprecated: bool,
    #[serde(default)]
    pub parameters: Option<Vec<RawParam>>,
    #[serde(default)]
    pub params: Option<Vec<RawParam>>,
    #[serde(rename = "returnType", default)]
    pub return_type: Option<String>,
}

impl RawMethod {
    pub(crate) fn take_params(&mut self) -> Vec<RawParam> {
        self.parameters
            .take()
            .or_else(|| self.params.take())
            .unwrap_or_default()
    }
}

/// Designer-side property row.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawDesignerProperty {
    pub name: String,
    #[serde(rename = "editorType", default)]
    pub editor_type: Option<String>,
    #[serde(rename = "defaultValue", default)]
    pub default_value: String,
    #[serde(rename = "alwaysSend", default, deserialize_with = "flag")]
    pub always_send: bool,
}

/// Block-side property row.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawBlockProperty {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type", default)]
    pub block_type: Option<String>,
    #[serde(default)]
    pub rw: String,
    #[serde(default, deserialize_with = "flag")]
    pub deprecated: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawComponentDescriptor {
    /// Fully-qualified class name; falls back to `name` when absent.
    #[serde(rename = "type", default)]
    pub type_name: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "flag")]
    pub external: bool,
    #[serde(default, deserialize_with = "loose_string")]
    pub version: String,
    #[serde(rename = "categoryString", default)]
    pub category: String,
    #[serde(rename = "iconName", default)]
    pub icon_name: String,
    #[serde(default)]
    pub events: Vec<RawEvent>,
    #[serde(default)]
    pub methods: Vec<RawMethod>,
    #[serde(default)]
    pub properties: Vec<RawDesignerProperty>,
    #[serde(rename = "blockProperties", default)]
    pub block_properties: Vec<RawBlockProperty>,
}

impl RawComponentDescriptor {
    /// Resolves the raw rows into a merged canonical descriptor.
    pub(crate) fn into_descriptor(mut self) -> Option<ComponentTypeDescriptor> {
        let name = self
            .name
            .clone()
            .or_else(|| {
                self.type_name
                    .as_ref()
                    .map(|t| t.rsplit('.').next().unwrap_or(t).to_string())
            })?;
        let type_name = self.type_name.clone().unwrap_or_else(|| name.clone());

        let mut events = AHashMap::new();
        for mut raw in std::mem::take(&mut self.events) {
            let params = raw
                .take_params()
                .into_iter()
                .map(|p| ParamDescriptor {
                    name: p.name,
                    param_type: p.param_type,
                })
                .collect();
            events.insert(
                raw.name.clone(),
                EventDescriptor {
                    name: raw.name,
                    description: raw.description,
                    deprecated: raw.deprecated,
                    params,
                },
            );
        }

        let mut methods = AHashMap::new();
        for mut raw in std::mem::take(&mut self.methods) {
            let params = raw
                .take_params()
                .into_iter()
                .map(|p| ParamDescriptor {
                    name: p.name,
                    param_type: p.param_type,
                })
                .collect();
            methods.insert(
                raw.name.clone(),
                MethodDescriptor {
                    name: raw.name.clone(),
                    description: raw.description,
                    deprecated: raw.deprecated,
                    params,
                    return_type: raw.return_type,
                },
            );
        }

        // Designer rows first, then block rows layered on top. A property may
        // exist on either side alone; rw-mode falls out of the cross-reference.
        let mut properties: AHashMap<String, PropertyDescriptor> = AHashMap::new();
        for raw in std::mem::take(&mut self.properties) {
            properties.insert(
                raw.name.clone(),
                PropertyDescriptor {
                    name: raw.name,
                    description: String::new(),
                    block_type: None,
                    editor_type: raw.editor_type,
                    default_value: raw.default_value,
                    rw: RwMode::Invisible,
                    deprecated: false,
                    always_send: raw.always_send,
                },
            );
        }
        let mut setter_names = Vec::new();
        let mut getter_names = Vec::new();
        for raw in std::mem::take(&mut self.block_properties) {
            let rw = match raw.rw.as_str() {
                "read-only" => RwMode::ReadOnly,
                "write-only" => RwMode::WriteOnly,
                "invisible" => RwMode::Invisible,
                _ => RwMode::ReadWrite,
            };
            if rw.is_writable() {
                setter_names.push(raw.name.clone());
            }
            if rw.is_readable() {
                getter_names.push(raw.name.clone());
            }
            let entry = properties
                .entry(raw.name.clone())
                .or_insert_with(|| PropertyDescriptor {
                    name: raw.name.clone(),
                    description: String::new(),
                    block_type: None,
                    editor_type: None,
                    default_value: String::new(),
                    rw: RwMode::Invisible,
                    deprecated: false,
                    always_send: false,
                });
            entry.description = raw.description;
            entry.block_type = raw.block_type;
            entry.rw = rw;
            entry.deprecated = raw.deprecated;
        }

        Some(ComponentTypeDescriptor {
            type_name,
            name,
            external: self.external,
            version: self.version,
            category: self.category,
            icon_name: self.icon_name,
            events,
            methods,
            properties,
            setter_names,
            getter_names,
        })
    }
}
