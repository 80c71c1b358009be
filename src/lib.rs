//! # Kumiki - Block-Program Compiler
//!
//! **Kumiki** compiles visual block programs into a Lisp-like runtime
//! language. It is the code-generation core of a block editor: the editor
//! owns rendering, drag-and-drop and dialogs, and hands this crate a
//! materialized picture of the program (a component tree from the designer,
//! the workspace's top-level block trees, and a component metadata store)
//! from which it emits a complete, executable program text.
//!
//! ## Core Workflow
//!
//! 1. **Populate the metadata store**: load the component schema document
//!    into a [`schema::ComponentDatabase`].
//! 2. **Collect the program**: deserialize the editor's block dump into
//!    [`block::Block`] trees and group the top-level blocks into a
//!    [`block::ProgramBlocks`].
//! 3. **Generate**: run a [`codegen::CodeGenerator`] over the form
//!    descriptor and the program, choosing a [`codegen::GenerationMode`]:
//!    `Deployed` for packaged output, `LiveSession` for an incremental
//!    development session (which wraps the output in a state-resetting
//!    begin block and skips the file header).
//!
//! Generation is synchronous and pure: it reads the store and the block
//! trees, performs no I/O, and either returns the full output text or fails
//! on the first fatal input error with nothing emitted.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use kumiki::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut db = ComponentDatabase::new();
//!     db.populate_from_json(&std::fs::read_to_string("components.json")?)?;
//!
//!     let form_json = std::fs::read_to_string("Screen1.scm")?;
//!
//!     let mut program = ProgramBlocks::new();
//!     program.add_event(
//!         "Button1",
//!         serde_json::from_str::<Block>(&std::fs::read_to_string("click.json")?)?,
//!     );
//!
//!     let generator = CodeGenerator::new(&db, GenerationMode::Deployed);
//!     let output = generator.generate(&form_json, &program)?;
//!     println!("{output}");
//!     Ok(())
//! }
//! ```

pub mod block;
pub mod codegen;
pub mod error;
pub mod prelude;
pub mod schema;

#[cfg(feature = "wasm-bindings")]
mod wasm;
