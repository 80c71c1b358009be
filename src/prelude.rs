//! Prelude module for convenient imports
//!
//! Re-exports the types most callers need: the metadata store, the block
//! model, the generator and its mode, and the error types.

// Metadata store
pub use crate::schema::{
    ComponentDatabase, ComponentInstanceRecord, ComponentTypeDescriptor, EventDescriptor,
    MethodDescriptor, ParamDescriptor, PropertyDescriptor, RwMode,
};

// Block tree model
pub use crate::block::{Block, BlockKind, Mutation, ProgramBlocks, TopLevelKind};

// Generation
pub use crate::codegen::{
    CodeGenerator, ComponentRecord, GenContext, GenerationMode, parse_form_descriptor,
};

// Error types
pub use crate::error::{CodegenError, SchemaError};
