use super::{call_primitive, unknown_operator, variadic_args};
use crate::block::Block;
use crate::codegen::GenContext;
use crate::codegen::visitor::{Fragment, slot_value, value};
use crate::error::CodegenError;

pub(crate) fn math_number(block: &Block, _ctx: &GenContext<'_>) -> Result<Fragment, CodegenError> {
    Ok(value(block.field("NUM").unwrap_or("0").to_string()))
}

pub(crate) fn math_compare(block: &Block, ctx: &GenContext<'_>) -> Result<Fragment, CodegenError> {
    let op = block.field("OP").unwrap_or("EQ");
    let prim = match op {
        "EQ" => "=",
        "NEQ" => "not-=",
        "LT" => "<",
        "LTE" => "<=",
        "GT" => ">",
        "GTE" => ">=",
        other => return Err(unknown_operator(block, other)),
    };
    let a = slot_value(block, "A", ctx, "0")?;
    let b = slot_value(block, "B", ctx, "0")?;
    Ok(value(call_primitive(
        prim,
        &[a, b],
        &["number", "number"],
        prim,
    )))
}

pub(crate) fn math_add(block: &Block, ctx: &GenContext<'_>) -> Result<Fragment, CodegenError> {
    let args = variadic_args(block, "NUM", 2, ctx, "0")?;
    let types = vec!["number"; args.len()];
    Ok(value(call_primitive("+", &args, &types, "+")))
}

pub(crate) fn math_subtract(block: &Block, ctx: &GenContext<'_>) -> Result<Fragment, CodegenError> {
    let a = slot_value(block, "A", ctx, "0")?;
    let b = slot_value(block, "B", ctx, "0")?;
    Ok(value(call_primitive(
        "-",
        &[a, b],
        &["number", "number"],
        "-",
    )))
}

pub(crate) fn math_multiply(block: &Block, ctx: &GenContext<'_>) -> Result<Fragment, CodegenError> {
    let args = variadic_args(block, "NUM", 2, ctx, "1")?;
    let types = vec!["number"; args.len()];
    Ok(value(call_primitive("*", &args, &types, "*")))
}

pub(crate) fn math_division(block: &Block, ctx: &GenContext<'_>) -> Result<Fragment, CodegenError> {
    let a = slot_value(block, "A", ctx, "0")?;
    let b = slot_value(block, "B", ctx, "1")?;
    Ok(value(call_primitive(
        "divide-with-zero-check",
        &[a, b],
        &["number", "number"],
        "/",
    )))
}

pub(crate) fn math_power(block: &Block, ctx: &GenContext<'_>) -> Result<Fragment, CodegenError> {
    let a = slot_value(block, "A", ctx, "1")?;
    let b = slot_value(block, "B", ctx, "1")?;
    Ok(value(call_primitive(
        "expt",
        &[a, b],
        &["number", "number"],
        "^",
    )))
}

pub(crate) fn math_single(block: &Block, ctx: &GenContext<'_>) -> Result<Fragment, CodegenError> {
    let op = block.field("OP").unwrap_or("ROOT");
    let (prim, display) = match op {
        "ROOT" => ("sqrt", "sqrt"),
        "ABS" => ("abs", "abs"),
        "NEG" => ("-", "negate"),
        "LN" => ("log", "log"),
        "EXP" => ("exp", "exp"),
        "ROUND" => ("round-to-even", "round"),
        "CEILING" => ("ceiling", "ceiling"),
        "FLOOR" => ("floor", "floor"),
        other => return Err(unknown_operator(block, other)),
    };
    let operand = slot_value(block, "NUM", ctx, "0")?;
    Ok(value(call_primitive(prim, &[operand], &["number"], display)))
}

pub(crate) fn math_divide(block: &Block, ctx: &GenContext<'_>) -> Result<Fragment, CodegenError> {
    let op = block.field("OP").unwrap_or("MODULO");
    let prim = match op {
        "MODULO" => "modulo",
        "REMAINDER" => "remainder",
        "QUOTIENT" => "quotient",
        other => return Err(unknown_operator(block, other)),
    };
    let dividend = slot_value(block, "DIVIDEND", ctx, "0")?;
    let divisor = slot_value(block, "DIVISOR", ctx, "1")?;
    Ok(value(call_primitive(
        prim,
        &[dividend, divisor],
        &["number", "number"],
        prim,
    )))
}

pub(crate) fn math_random_int(
    block: &Block,
    ctx: &GenContext<'_>,
) -> Result<Fragment, CodegenError> {
    let from = slot_value(block, "FROM", ctx, "1")?;
    let to = slot_value(block, "TO", ctx, "100")?;
    Ok(value(call_primitive(
        "random-integer",
        &[from, to],
        &["number", "number"],
        "random integer",
    )))
}

pub(crate) fn math_random_float(
    _block: &Block,
    _ctx: &GenContext<'_>,
) -> Result<Fragment, CodegenError> {
    Ok(value(call_primitive(
        "random-fraction",
        &[],
        &[],
        "random fraction",
    )))
}

pub(crate) fn math_atan2(block: &Block, ctx: &GenContext<'_>) -> Result<Fragment, CodegenError> {
    let y = slot_value(block, "Y", ctx, "1")?;
    let x = slot_value(block, "X", ctx, "1")?;
    Ok(value(call_primitive(
        "atan2-degrees",
        &[y, x],
        &["number", "number"],
        "atan2",
    )))
}
