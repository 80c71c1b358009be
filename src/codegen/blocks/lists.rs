use super::{call_primitive, variadic_args};
use crate::block::Block;
use crate::codegen::visitor::{Fragment, slot_value, statement, value};
use crate::codegen::{EMPTY_LIST, GenContext, NULL_VALUE};
use crate::error::CodegenError;

pub(crate) fn lists_create_with(
    block: &Block,
    ctx: &GenContext<'_>,
) -> Result<Fragment, CodegenError> {
    let args = variadic_args(block, "ADD", 0, ctx, NULL_VALUE)?;
    let types = vec!["any"; args.len()];
    Ok(value(call_primitive(
        "make-list",
        &args,
        &types,
        "make a list",
    )))
}

pub(crate) fn lists_length(block: &Block, ctx: &GenContext<'_>) -> Result<Fragment, CodegenError> {
    let list = slot_value(block, "LIST", ctx, EMPTY_LIST)?;
    Ok(value(call_primitive(
        "length-of-list",
        &[list],
        &["list"],
        "length of list",
    )))
}

pub(crate) fn lists_is_empty(
    block: &Block,
    ctx: &GenContext<'_>,
) -> Result<Fragment, CodegenError> {
    let list = slot_value(block, "LIST", ctx, EMPTY_LIST)?;
    Ok(value(call_primitive(
        "list-empty?",
        &[list],
        &["list"],
        "is list empty?",
    )))
}

pub(crate) fn lists_add_items(
    block: &Block,
    ctx: &GenContext<'_>,
) -> Result<Fragment, CodegenError> {
    let list = slot_value(block, "LIST", ctx, EMPTY_LIST)?;
    let items = variadic_args(block, "ITEM", 1, ctx, NULL_VALUE)?;
    let mut args = vec![list];
    args.extend(items);
    let mut types = vec!["list"];
    types.extend(std::iter::repeat_n("any", args.len() - 1));
    Ok(statement(format!(
        "{}\n",
        call_primitive("add-to-list!", &args, &types, "add items to list")
    )))
}

pub(crate) fn lists_select_item(
    block: &Block,
    ctx: &GenContext<'_>,
) -> Result<Fragment, CodegenError> {
    let list = slot_value(block, "LIST", ctx, EMPTY_LIST)?;
    let index = slot_value(block, "NUM", ctx, "1")?;
    Ok(value(call_primitive(
        "select-list-item",
        &[list, index],
        &["list", "number"],
        "select list item",
    )))
}

pub(crate) fn lists_is_in(block: &Block, ctx: &GenContext<'_>) -> Result<Fragment, CodegenError> {
    let item = slot_value(block, "ITEM", ctx, NULL_VALUE)?;
    let list = slot_value(block, "LIST", ctx, EMPTY_LIST)?;
    Ok(value(call_primitive(
        "member?",
        &[item, list],
        &["any", "list"],
        "is in list?",
    )))
}

pub(crate) fn lists_append_list(
    block: &Block,
    ctx: &GenContext<'_>,
) -> Result<Fragment, CodegenError> {
    let target = slot_value(block, "LIST0", ctx, EMPTY_LIST)?;
    let source = slot_value(block, "LIST1", ctx, EMPTY_LIST)?;
    Ok(statement(format!(
        "{}\n",
        call_primitive(
            "append-to-list!",
            &[target, source],
            &["list", "list"],
            "append to list"
        )
    )))
}

pub(crate) fn lists_is_list(block: &Block, ctx: &GenContext<'_>) -> Result<Fragment, CodegenError> {
    let item = slot_value(block, "ITEM", ctx, NULL_VALUE)?;
    Ok(value(call_primitive(
        "list?",
        &[item],
        &["any"],
        "is a list?",
    )))
}
