use super::{call_primitive, unknown_operator};
use crate::block::Block;
use crate::codegen::GenContext;
use crate::codegen::NULL_VALUE;
use crate::codegen::visitor::{Fragment, slot_value, value};
use crate::error::CodegenError;

pub(crate) fn logic_boolean(
    block: &Block,
    _ctx: &GenContext<'_>,
) -> Result<Fragment, CodegenError> {
    let literal = if block.field("BOOL") == Some("TRUE") {
        "#t"
    } else {
        "#f"
    };
    Ok(value(literal.to_string()))
}

pub(crate) fn logic_false(_block: &Block, _ctx: &GenContext<'_>) -> Result<Fragment, CodegenError> {
    Ok(value("#f".to_string()))
}

pub(crate) fn logic_negate(block: &Block, ctx: &GenContext<'_>) -> Result<Fragment, CodegenError> {
    let operand = slot_value(block, "BOOL", ctx, "#f")?;
    Ok(value(call_primitive(
        "boolean-not",
        &[operand],
        &["boolean"],
        "not",
    )))
}

pub(crate) fn logic_compare(block: &Block, ctx: &GenContext<'_>) -> Result<Fragment, CodegenError> {
    let op = block.field("OP").unwrap_or("EQ");
    let (prim, display) = match op {
        "EQ" => ("values-equal?", "="),
        "NEQ" => ("values-not-equal?", "not ="),
        other => return Err(unknown_operator(block, other)),
    };
    let a = slot_value(block, "A", ctx, NULL_VALUE)?;
    let b = slot_value(block, "B", ctx, NULL_VALUE)?;
    Ok(value(call_primitive(prim, &[a, b], &["any", "any"], display)))
}

/// `and`/`or` with runtime short-circuiting, hence the delayed forms rather
/// than a primitive application.
pub(crate) fn logic_operation(
    block: &Block,
    ctx: &GenContext<'_>,
) -> Result<Fragment, CodegenError> {
    let op = block.field("OP").unwrap_or("AND");
    let form = match op {
        "AND" => "and-delayed",
        "OR" => "or-delayed",
        other => return Err(unknown_operator(block, other)),
    };
    let a = slot_value(block, "A", ctx, "#f")?;
    let b = slot_value(block, "B", ctx, "#f")?;
    Ok(value(format!("({form} {a} {b})")))
}
