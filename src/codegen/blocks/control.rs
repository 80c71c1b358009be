use super::call_primitive;
use crate::block::Block;
use crate::codegen::visitor::{Fragment, slot_body, slot_value, statement, value};
use crate::codegen::{GenContext, NULL_VALUE};
use crate::error::CodegenError;

/// `if / else if / else`. Arm count comes from the mutation; arms nest into
/// the else position of their predecessor.
pub(crate) fn controls_if(block: &Block, ctx: &GenContext<'_>) -> Result<Fragment, CodegenError> {
    let arm_count = 1 + block.mutation.elseif.unwrap_or(0);
    let mut arms = Vec::with_capacity(arm_count as usize);
    for i in 0..arm_count {
        let test = slot_value(block, &format!("IF{i}"), ctx, "#f")?;
        let body = slot_body(block, &format!("DO{i}"), ctx)?;
        arms.push((test, body));
    }

    let mut code: Option<String> = if block.mutation.else_branch.unwrap_or(0) > 0 {
        Some(format!("(begin {})", slot_body(block, "ELSE", ctx)?))
    } else {
        None
    };
    for (test, body) in arms.into_iter().rev() {
        let then = format!("(begin {body})");
        code = Some(match code {
            Some(rest) => format!("(if {test} {then} {rest})"),
            None => format!("(if {test} {then})"),
        });
    }
    Ok(statement(format!(
        "{}\n",
        code.unwrap_or_else(|| NULL_VALUE.to_string())
    )))
}

pub(crate) fn controls_for_range(
    block: &Block,
    ctx: &GenContext<'_>,
) -> Result<Fragment, CodegenError> {
    let var = block.field("VAR").unwrap_or("item");
    let start = slot_value(block, "START", ctx, "1")?;
    let end = slot_value(block, "END", ctx, "1")?;
    let step = slot_value(block, "STEP", ctx, "1")?;
    let body = slot_body(block, "DO", ctx)?;
    Ok(statement(format!(
        "(forrange ${var} (begin {body}) {start} {end} {step})\n"
    )))
}

pub(crate) fn controls_for_each(
    block: &Block,
    ctx: &GenContext<'_>,
) -> Result<Fragment, CodegenError> {
    let var = block.field("VAR").unwrap_or("item");
    let list = slot_value(block, "LIST", ctx, crate::codegen::EMPTY_LIST)?;
    let body = slot_body(block, "DO", ctx)?;
    Ok(statement(format!(
        "(foreach ${var} (begin {body}) {list})\n"
    )))
}

pub(crate) fn controls_while(
    block: &Block,
    ctx: &GenContext<'_>,
) -> Result<Fragment, CodegenError> {
    let test = slot_value(block, "TEST", ctx, "#f")?;
    let body = slot_body(block, "DO", ctx)?;
    Ok(statement(format!("(while {test} (begin {body}))\n")))
}

pub(crate) fn controls_choose(
    block: &Block,
    ctx: &GenContext<'_>,
) -> Result<Fragment, CodegenError> {
    let test = slot_value(block, "TEST", ctx, "#f")?;
    let then_return = slot_value(block, "THENRETURN", ctx, NULL_VALUE)?;
    let else_return = slot_value(block, "ELSERETURN", ctx, NULL_VALUE)?;
    Ok(value(format!("(if {test} {then_return} {else_return})")))
}

pub(crate) fn controls_do_then_return(
    block: &Block,
    ctx: &GenContext<'_>,
) -> Result<Fragment, CodegenError> {
    let body = slot_body(block, "STM", ctx)?;
    let result = slot_value(block, "VALUE", ctx, NULL_VALUE)?;
    Ok(value(format!("(begin {body} {result})")))
}

pub(crate) fn controls_eval_but_ignore(
    block: &Block,
    ctx: &GenContext<'_>,
) -> Result<Fragment, CodegenError> {
    let ignored = slot_value(block, "VALUE", ctx, NULL_VALUE)?;
    Ok(statement(format!("(begin {ignored})\n")))
}

pub(crate) fn controls_open_another_screen(
    block: &Block,
    ctx: &GenContext<'_>,
) -> Result<Fragment, CodegenError> {
    let screen = slot_value(block, "SCREEN", ctx, "\"\"")?;
    Ok(statement(format!(
        "{}\n",
        call_primitive(
            "open-another-screen",
            &[screen],
            &["text"],
            "open another screen"
        )
    )))
}

pub(crate) fn controls_close_screen(
    _block: &Block,
    _ctx: &GenContext<'_>,
) -> Result<Fragment, CodegenError> {
    Ok(statement(format!(
        "{}\n",
        call_primitive("close-screen", &[], &[], "close screen")
    )))
}

pub(crate) fn controls_get_start_value(
    _block: &Block,
    _ctx: &GenContext<'_>,
) -> Result<Fragment, CodegenError> {
    Ok(value(call_primitive(
        "get-start-value",
        &[],
        &[],
        "get start value",
    )))
}
