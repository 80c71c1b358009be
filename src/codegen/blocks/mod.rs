//! Per-category generator functions, one module per block palette.

pub mod components;
pub mod control;
pub mod lists;
pub mod logic;
pub mod math;
pub mod procedures;
pub mod text;
pub mod variables;

use super::GenContext;
use super::visitor::slot_value;
use crate::block::Block;
use crate::error::CodegenError;
use itertools::Itertools;

/// Emits a runtime primitive application: the primitive, its packed argument
/// list, the coercion types, and a display name for runtime diagnostics.
pub(crate) fn call_primitive(prim: &str, args: &[String], types: &[&str], display: &str) -> String {
    format!(
        "(call-runtime-primitive {prim} (*list-for-runtime*{}) '({}) \"{display}\")",
        args.iter().map(|a| format!(" {a}")).join(""),
        types.join(" ")
    )
}

/// Collects the values of a variadic block's numbered slots (`{prefix}0` and
/// up), honoring its mutation item count.
pub(crate) fn variadic_args(
    block: &Block,
    prefix: &str,
    natural: u32,
    ctx: &GenContext<'_>,
    default: &str,
) -> Result<Vec<String>, CodegenError> {
    (0..block.item_count(natural))
        .map(|i| slot_value(block, &format!("{prefix}{i}"), ctx, default))
        .collect()
}

pub(crate) fn unknown_operator(block: &Block, operator: &str) -> CodegenError {
    CodegenError::UnknownOperator {
        type_tag: block.tag.clone(),
        operator: operator.to_string(),
    }
}
