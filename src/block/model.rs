use super::kind::{BlockKind, TopLevelKind};
use ahash::AHashMap;
use serde::Deserialize;

/// Extra shape state carried by blocks whose geometry the user can mutate
/// (variadic item counts, if/elseif arms, component bindings, procedure
/// signatures).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Mutation {
    pub items: Option<u32>,
    pub elseif: Option<u32>,
    #[serde(rename = "else")]
    pub else_branch: Option<u32>,
    pub component_type: Option<String>,
    pub instance_name: Option<String>,
    pub event_name: Option<String>,
    pub method_name: Option<String>,
    pub property_name: Option<String>,
    pub set_or_get: Option<String>,
    pub is_generic: bool,
    /// Procedure name on definition and call blocks.
    pub name: Option<String>,
    /// Procedure parameter names, in declaration order.
    pub args: Vec<String>,
    /// Local variable names on local-declaration blocks.
    pub localnames: Vec<String>,
}

/// One node of the visual program.
///
/// A block owns named value slots (each holding at most one value-producing
/// child), named statement slots (each holding the head of a statement
/// chain), literal field values, optional mutation state, and a `next`
/// pointer chaining statements. Top-level blocks have no predecessor and are
/// classified by [`Block::top_level_kind`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Block {
    #[serde(rename = "type")]
    pub tag: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub fields: AHashMap<String, String>,
    #[serde(default)]
    pub values: AHashMap<String, Block>,
    #[serde(default)]
    pub statements: AHashMap<String, Block>,
    #[serde(default)]
    pub mutation: Mutation,
    #[serde(default)]
    pub next: Option<Box<Block>>,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub comment: Option<String>,
}

impl Block {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            id: None,
            fields: AHashMap::new(),
            values: AHashMap::new(),
            statements: AHashMap::new(),
            mutation: Mutation::default(),
            next: None,
            disabled: false,
            comment: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn with_value(mut self, slot: impl Into<String>, child: Block) -> Self {
        self.values.insert(slot.into(), child);
        self
    }

    pub fn with_statement(mut self, slot: impl Into<String>, child: Block) -> Self {
        self.statements.insert(slot.into(), child);
        self
    }

    pub fn with_next(mut self, next: Block) -> Self {
        self.next = Some(Box::new(next));
        self
    }

    pub fn with_mutation(mut self, mutation: Mutation) -> Self {
        self.mutation = mutation;
        self
    }

    pub fn with_comment(mut self, text: impl Into<String>) -> Self {
        self.comment = Some(text.into());
        self
    }

    pub fn disable(mut self) -> Self {
        self.disabled = true;
        self
    }

    pub fn kind(&self) -> Option<BlockKind> {
        BlockKind::from_tag(&self.tag)
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn value(&self, slot: &str) -> Option<&Block> {
        self.values.get(slot)
    }

    pub fn statement(&self, slot: &str) -> Option<&Block> {
        self.statements.get(slot)
    }

    /// Variadic item count, defaulting to the block's natural arity when the
    /// mutation carries none.
    pub fn item_count(&self, natural: u32) -> u32 {
        self.mutation.items.unwrap_or(natural)
    }

    pub fn top_level_kind(&self) -> Option<TopLevelKind> {
        match self.kind()? {
            BlockKind::ComponentEvent => Some(TopLevelKind::EventHandler),
            BlockKind::ProceduresDefNoReturn | BlockKind::ProceduresDefReturn => {
                Some(TopLevelKind::ProcedureDefinition)
            }
            BlockKind::GlobalDeclaration => Some(TopLevelKind::GlobalDeclaration),
            _ => None,
        }
    }
}

/// The top-level blocks of one screen's program, as handed over by the
/// workspace: per-instance event handlers plus the untethered declarations.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProgramBlocks {
    /// Instance name -> its top-level event blocks, in registration order.
    pub events: AHashMap<String, Vec<Block>>,
    pub globals: Vec<Block>,
    pub procedures: Vec<Block>,
}

impl ProgramBlocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_event(&mut self, instance: impl Into<String>, block: Block) {
        self.events.entry(instance.into()).or_default().push(block);
    }

    pub fn add_global(&mut self, block: Block) {
        self.globals.push(block);
    }

    pub fn add_procedure(&mut self, block: Block) {
        self.procedures.push(block);
    }
}
