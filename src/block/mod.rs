pub mod kind;
pub mod model;

pub use kind::{BlockKind, TopLevelKind};
pub use model::{Block, Mutation, ProgramBlocks};
