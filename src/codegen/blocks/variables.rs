use crate::block::Block;
use crate::codegen::visitor::{Fragment, slot_body, slot_value, statement, value};
use crate::codegen::{GenContext, NULL_VALUE};
use crate::error::CodegenError;
use itertools::Itertools;

/// Splits a workspace variable reference into its scope and bare name. The
/// workspace prefixes globals with `"global "`.
fn split_scope(reference: &str) -> (bool, &str) {
    match reference.strip_prefix("global ") {
        Some(bare) => (true, bare),
        None => (false, reference),
    }
}

pub(crate) fn global_declaration(
    block: &Block,
    ctx: &GenContext<'_>,
) -> Result<Fragment, CodegenError> {
    let name = block.field("NAME").unwrap_or("name");
    let initial = slot_value(block, "VALUE", ctx, NULL_VALUE)?;
    Ok(statement(format!("(def g${name} {initial})\n")))
}

pub(crate) fn lexical_variable_get(
    block: &Block,
    _ctx: &GenContext<'_>,
) -> Result<Fragment, CodegenError> {
    let (global, name) = split_scope(block.field("VAR").unwrap_or(""));
    Ok(value(if global {
        format!("(get-var g${name})")
    } else {
        format!("(lexical-value ${name})")
    }))
}

pub(crate) fn lexical_variable_set(
    block: &Block,
    ctx: &GenContext<'_>,
) -> Result<Fragment, CodegenError> {
    let (global, name) = split_scope(block.field("VAR").unwrap_or(""));
    let new_value = slot_value(block, "VALUE", ctx, NULL_VALUE)?;
    Ok(statement(if global {
        format!("(set-var! g${name} {new_value})\n")
    } else {
        format!("(set-lexical! ${name} {new_value})\n")
    }))
}

fn local_bindings(block: &Block, ctx: &GenContext<'_>) -> Result<String, CodegenError> {
    let names = &block.mutation.localnames;
    let mut bindings = Vec::with_capacity(names.len());
    for (i, name) in names.iter().enumerate() {
        let initial = slot_value(block, &format!("DECL{i}"), ctx, NULL_VALUE)?;
        bindings.push(format!("(${name} {initial})"));
    }
    Ok(bindings.iter().join(" "))
}

pub(crate) fn local_declaration_statement(
    block: &Block,
    ctx: &GenContext<'_>,
) -> Result<Fragment, CodegenError> {
    let bindings = local_bindings(block, ctx)?;
    let body = slot_body(block, "STACK", ctx)?;
    Ok(statement(format!("(let ( {bindings} ) {body})\n")))
}

pub(crate) fn local_declaration_expression(
    block: &Block,
    ctx: &GenContext<'_>,
) -> Result<Fragment, CodegenError> {
    let bindings = local_bindings(block, ctx)?;
    let result = slot_value(block, "RETURN", ctx, NULL_VALUE)?;
    Ok(value(format!("(let ( {bindings} ) {result})")))
}
