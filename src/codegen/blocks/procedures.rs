use crate::block::Block;
use crate::codegen::visitor::{Fragment, slot_body, slot_value, statement, value};
use crate::codegen::{GenContext, NULL_VALUE};
use crate::error::CodegenError;
use itertools::Itertools;

fn procedure_name(block: &Block) -> &str {
    block
        .mutation
        .name
        .as_deref()
        .or_else(|| block.field("NAME"))
        .or_else(|| block.field("PROCNAME"))
        .unwrap_or("procedure")
}

fn signature(block: &Block) -> String {
    block
        .mutation
        .args
        .iter()
        .map(|a| format!(" ${a}"))
        .join("")
}

fn call_args(block: &Block, ctx: &GenContext<'_>) -> Result<String, CodegenError> {
    let mut args = String::new();
    for i in 0..block.mutation.args.len() {
        args.push(' ');
        args.push_str(&slot_value(block, &format!("ARG{i}"), ctx, NULL_VALUE)?);
    }
    Ok(args)
}

pub(crate) fn procedures_def_no_return(
    block: &Block,
    ctx: &GenContext<'_>,
) -> Result<Fragment, CodegenError> {
    let name = procedure_name(block);
    let body = slot_body(block, "STACK", ctx)?;
    Ok(statement(format!(
        "(def (p${name}{}) {body})\n",
        signature(block)
    )))
}

pub(crate) fn procedures_def_return(
    block: &Block,
    ctx: &GenContext<'_>,
) -> Result<Fragment, CodegenError> {
    let name = procedure_name(block);
    let result = slot_value(block, "RETURN", ctx, NULL_VALUE)?;
    Ok(statement(format!(
        "(def (p${name}{}) {result})\n",
        signature(block)
    )))
}

pub(crate) fn procedures_call_no_return(
    block: &Block,
    ctx: &GenContext<'_>,
) -> Result<Fragment, CodegenError> {
    let name = procedure_name(block);
    Ok(statement(format!(
        "((get-var p${name}){})\n",
        call_args(block, ctx)?
    )))
}

pub(crate) fn procedures_call_return(
    block: &Block,
    ctx: &GenContext<'_>,
) -> Result<Fragment, CodegenError> {
    let name = procedure_name(block);
    Ok(value(format!(
        "((get-var p${name}){})",
        call_args(block, ctx)?
    )))
}
