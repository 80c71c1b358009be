use super::{call_primitive, unknown_operator, variadic_args};
use crate::block::Block;
use crate::codegen::GenContext;
use crate::codegen::properties::quote;
use crate::codegen::visitor::{Fragment, slot_value, value};
use crate::error::CodegenError;

pub(crate) fn text_literal(
    block: &Block,
    _ctx: &GenContext<'_>,
) -> Result<Fragment, CodegenError> {
    Ok(value(quote(block.field("TEXT").unwrap_or(""))))
}

pub(crate) fn text_join(block: &Block, ctx: &GenContext<'_>) -> Result<Fragment, CodegenError> {
    let args = variadic_args(block, "ADD", 2, ctx, "\"\"")?;
    let types = vec!["text"; args.len()];
    Ok(value(call_primitive("string-append", &args, &types, "join")))
}

pub(crate) fn text_length(block: &Block, ctx: &GenContext<'_>) -> Result<Fragment, CodegenError> {
    let operand = slot_value(block, "VALUE", ctx, "\"\"")?;
    Ok(value(call_primitive(
        "string-length",
        &[operand],
        &["text"],
        "length",
    )))
}

pub(crate) fn text_is_empty(block: &Block, ctx: &GenContext<'_>) -> Result<Fragment, CodegenError> {
    let operand = slot_value(block, "VALUE", ctx, "\"\"")?;
    Ok(value(call_primitive(
        "string-empty?",
        &[operand],
        &["text"],
        "is text empty?",
    )))
}

pub(crate) fn text_compare(block: &Block, ctx: &GenContext<'_>) -> Result<Fragment, CodegenError> {
    let op = block.field("OP").unwrap_or("EQUAL");
    let (prim, display) = match op {
        "LT" => ("string<?", "text <"),
        "EQUAL" => ("string=?", "text ="),
        "GT" => ("string>?", "text >"),
        other => return Err(unknown_operator(block, other)),
    };
    let a = slot_value(block, "TEXT1", ctx, "\"\"")?;
    let b = slot_value(block, "TEXT2", ctx, "\"\"")?;
    Ok(value(call_primitive(
        prim,
        &[a, b],
        &["text", "text"],
        display,
    )))
}

pub(crate) fn text_change_case(
    block: &Block,
    ctx: &GenContext<'_>,
) -> Result<Fragment, CodegenError> {
    let op = block.field("OP").unwrap_or("UPCASE");
    let (prim, display) = match op {
        "UPCASE" => ("string-to-upper-case", "upcase"),
        "DOWNCASE" => ("string-to-lower-case", "downcase"),
        other => return Err(unknown_operator(block, other)),
    };
    let operand = slot_value(block, "TEXT", ctx, "\"\"")?;
    Ok(value(call_primitive(prim, &[operand], &["text"], display)))
}

pub(crate) fn text_trim(block: &Block, ctx: &GenContext<'_>) -> Result<Fragment, CodegenError> {
    let operand = slot_value(block, "TEXT", ctx, "\"\"")?;
    Ok(value(call_primitive(
        "string-trim",
        &[operand],
        &["text"],
        "trim",
    )))
}

pub(crate) fn text_contains(block: &Block, ctx: &GenContext<'_>) -> Result<Fragment, CodegenError> {
    let haystack = slot_value(block, "TEXT", ctx, "\"\"")?;
    let needle = slot_value(block, "PIECE", ctx, "\"\"")?;
    Ok(value(call_primitive(
        "string-contains",
        &[haystack, needle],
        &["text", "text"],
        "contains",
    )))
}

pub(crate) fn text_replace_all(
    block: &Block,
    ctx: &GenContext<'_>,
) -> Result<Fragment, CodegenError> {
    let text = slot_value(block, "TEXT", ctx, "\"\"")?;
    let segment = slot_value(block, "SEGMENT", ctx, "\"\"")?;
    let replacement = slot_value(block, "REPLACEMENT", ctx, "\"\"")?;
    Ok(value(call_primitive(
        "string-replace-all",
        &[text, segment, replacement],
        &["text", "text", "text"],
        "replace all",
    )))
}
