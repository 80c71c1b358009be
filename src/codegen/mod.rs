//! The code-generation core: turns a form descriptor plus the workspace's
//! top-level blocks into a complete program in the runtime language.
//!
//! Generation is a pure function of its inputs. The live-session/deployed
//! distinction is an explicit [`GenerationMode`] threaded through a
//! [`GenContext`]; there is no shared mode state and nothing to restore
//! when generation fails.

use crate::block::ProgramBlocks;
use crate::error::CodegenError;
use crate::schema::ComponentDatabase;
use ahash::AHashMap;
use itertools::Itertools;
use serde::Deserialize;

pub mod blocks;
pub mod flatten;
pub mod obfuscate;
pub mod properties;
pub mod visitor;

use flatten::Flattener;
use visitor::generate_statement_chain;

/// The null literal of the runtime language.
pub const NULL_VALUE: &str = "*the-null-value*";
/// The empty-list literal of the runtime language.
pub const EMPTY_LIST: &str = "'()";
/// Name the runtime gives the implicit default screen of a live session.
pub const DEFAULT_SCREEN_NAME: &str = "Screen1";

/// Whether output targets a packaged app or a live development session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationMode {
    Deployed,
    LiveSession,
}

impl GenerationMode {
    pub fn is_live(self) -> bool {
        matches!(self, GenerationMode::LiveSession)
    }
}

/// Everything a generator function needs, threaded explicitly.
pub struct GenContext<'a> {
    pub db: &'a ComponentDatabase,
    pub mode: GenerationMode,
    pub form_name: String,
    /// Deterministic confounder override for the property obfuscator.
    /// `None` means a random one is drawn per sensitive property.
    pub confounder: Option<String>,
}

/// One designer component record: the `$`-prefixed identity fields plus an
/// open property bag, with children nested under `$Components`.
#[derive(Debug, Clone, Deserialize)]
pub struct ComponentRecord {
    #[serde(rename = "$Name")]
    pub name: String,
    #[serde(rename = "$Type")]
    pub component_type: String,
    #[serde(rename = "$Components", default)]
    pub children: Vec<ComponentRecord>,
    #[serde(flatten)]
    pub properties: AHashMap<String, serde_json::Value>,
}

/// Parses a form descriptor, enforcing the two fatal input conditions:
/// a missing `Properties` section and a source tag other than `"Form"`.
pub fn parse_form_descriptor(json: &str) -> Result<ComponentRecord, CodegenError> {
    let document: serde_json::Value =
        serde_json::from_str(json).map_err(|e| CodegenError::JsonParseError(e.to_string()))?;
    let source = document
        .get("Source")
        .and_then(|s| s.as_str())
        .unwrap_or_default();
    if source != "Form" {
        return Err(CodegenError::UnknownSourceType(source.to_string()));
    }
    let properties = document
        .get("Properties")
        .cloned()
        .ok_or(CodegenError::MissingFormProperties)?;
    serde_json::from_value(properties).map_err(|e| CodegenError::JsonParseError(e.to_string()))
}

/// The program generator.
///
/// Owns nothing but configuration; [`CodeGenerator::generate`] reads the
/// metadata store and the block trees and returns the output text blob, or
/// the first fatal input error with no partial output.
pub struct CodeGenerator<'a> {
    db: &'a ComponentDatabase,
    mode: GenerationMode,
    package: String,
    confounder: Option<String>,
}

impl<'a> CodeGenerator<'a> {
    pub fn new(db: &'a ComponentDatabase, mode: GenerationMode) -> Self {
        Self {
            db,
            mode,
            package: "user.generated".to_string(),
            confounder: None,
        }
    }

    /// Package prefix used in the `define-form` header of deployed output.
    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = package.into();
        self
    }

    /// Fixes the obfuscation confounder instead of drawing a random one.
    pub fn with_confounder(mut self, confounder: impl Into<String>) -> Self {
        self.confounder = Some(confounder.into());
        self
    }

    pub fn generate(
        &self,
        form_json: &str,
        program: &ProgramBlocks,
    ) -> Result<String, CodegenError> {
        let form = parse_form_descriptor(form_json)?;
        self.generate_for_form(&form, program)
    }

    pub fn generate_for_form(
        &self,
        form: &ComponentRecord,
        program: &ProgramBlocks,
    ) -> Result<String, CodegenError> {
        let ctx = GenContext {
            db: self.db,
            mode: self.mode,
            form_name: form.name.clone(),
            confounder: self.confounder.clone(),
        };

        // Phases 2 and 3: declarations, then the flattened component tree
        // with each component's event handlers interleaved.
        let mut body: Vec<String> = Vec::new();
        for global in &program.globals {
            body.push(Self::section(generate_statement_chain(global, &ctx)?));
        }
        for procedure in &program.procedures {
            body.push(Self::section(generate_statement_chain(procedure, &ctx)?));
        }
        let flattened = Flattener::new(&ctx, &program.events).flatten(form)?;
        body.extend(flattened.fragments);

        // Phase 4: runtime initialization of every component except the form
        // itself, each unique name exactly once.
        let init_call = format!(
            "(call-Initialize-of-components{})",
            flattened
                .component_names
                .iter()
                .filter(|n| **n != form.name)
                .unique()
                .map(|n| format!(" '{n}"))
                .join("")
        );

        match self.mode {
            GenerationMode::Deployed => {
                let mut sections = vec![self.header(&form.name)];
                sections.extend(body);
                sections.push(init_call);
                sections.push("(init-runtime)".to_string());
                Ok(sections.join("\n\n"))
            }
            GenerationMode::LiveSession => {
                // Phase 6: wrap everything in a begin block that resets the
                // session and keeps live references resolving under the new
                // form name.
                let mut inner = vec!["(clear-current-form)".to_string()];
                if form.name != DEFAULT_SCREEN_NAME {
                    inner.push(format!(
                        "(rename-component {DEFAULT_SCREEN_NAME} {})",
                        form.name
                    ));
                }
                inner.extend(body);
                inner.push(init_call);
                Ok(format!("(begin\n{}\n)", inner.join("\n\n")))
            }
        }
    }

    fn header(&self, form_name: &str) -> String {
        format!(
            "#|\n$Source $Runtime\n|#\n\n(define-form {package}.{form_name} {form_name})\n(require <com.kumiki.runtime>)",
            package = self.package
        )
    }

    fn section(chain: String) -> String {
        chain.trim_end().to_string()
    }
}
