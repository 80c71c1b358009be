use crate::block::Block;
use crate::codegen::visitor::{Fragment, slot_body, slot_value, statement, value};
use crate::codegen::{GenContext, NULL_VALUE};
use crate::error::CodegenError;
use itertools::Itertools;

/// `(define-event Button1 Click($x) (set-this-form) …)`. Parameter names
/// come from the schema; an event the schema does not know binds no
/// parameters rather than failing.
pub(crate) fn component_event(
    block: &Block,
    ctx: &GenContext<'_>,
) -> Result<Fragment, CodegenError> {
    let instance = block.mutation.instance_name.as_deref().unwrap_or("");
    let event = block.mutation.event_name.as_deref().unwrap_or("");
    let component_type = block.mutation.component_type.as_deref().unwrap_or("");
    let params = ctx
        .db
        .get_event_for_type(component_type, event)
        .map(|e| e.params.iter().map(|p| format!("${}", p.name)).join(" "))
        .unwrap_or_default();
    let body = slot_body(block, "DO", ctx)?;
    Ok(statement(format!(
        "(define-event {instance} {event}({params}) (set-this-form) {body})\n"
    )))
}

/// Component method call, statement- or value-shaped depending on whether
/// the schema declares a return type. Argument coercion types come from the
/// method descriptor; a method the schema does not know degrades to "any"
/// types and value shape.
pub(crate) fn component_method(
    block: &Block,
    ctx: &GenContext<'_>,
) -> Result<Fragment, CodegenError> {
    let method = block.mutation.method_name.as_deref().unwrap_or("");
    let component_type = block.mutation.component_type.as_deref().unwrap_or("");
    let descriptor = ctx.db.get_method_for_type(component_type, method);

    let arg_count = match descriptor {
        Some(d) => d.params.len(),
        None => (0..).take_while(|i| block.value(&format!("ARG{i}")).is_some()).count(),
    };
    let mut args = Vec::with_capacity(arg_count);
    for i in 0..arg_count {
        args.push(slot_value(block, &format!("ARG{i}"), ctx, NULL_VALUE)?);
    }
    let types = match descriptor {
        Some(d) => d
            .params
            .iter()
            .map(|p| {
                if p.param_type.is_empty() {
                    "any".to_string()
                } else {
                    p.param_type.clone()
                }
            })
            .join(" "),
        None => vec!["any"; arg_count].join(" "),
    };
    let packed = args.iter().map(|a| format!(" {a}")).join("");

    let code = if block.mutation.is_generic {
        let component = slot_value(block, "COMPONENT", ctx, NULL_VALUE)?;
        format!(
            "(call-component-type-method {component} '{component_type} '{method} (*list-for-runtime*{packed}) '({types}))"
        )
    } else {
        let instance = block.mutation.instance_name.as_deref().unwrap_or("");
        format!(
            "(call-component-method '{instance} '{method} (*list-for-runtime*{packed}) '({types}))"
        )
    };

    match descriptor {
        Some(d) if d.return_type.is_none() => Ok(statement(format!("{code}\n"))),
        _ => Ok(value(code)),
    }
}

/// Property getter or setter, plain or generic. The coercion type is the
/// block-side property type; a property with no block presence is "any".
pub(crate) fn component_set_get(
    block: &Block,
    ctx: &GenContext<'_>,
) -> Result<Fragment, CodegenError> {
    let property = block.mutation.property_name.as_deref().unwrap_or("");
    let component_type = block.mutation.component_type.as_deref().unwrap_or("");
    let is_setter = block.mutation.set_or_get.as_deref() == Some("set");
    let property_type = ctx
        .db
        .get_property_for_type(component_type, property)
        .and_then(|p| p.block_type.clone())
        .unwrap_or_else(|| "any".to_string());

    if block.mutation.is_generic {
        let component = slot_value(block, "COMPONENT", ctx, NULL_VALUE)?;
        if is_setter {
            let new_value = slot_value(block, "VALUE", ctx, NULL_VALUE)?;
            return Ok(statement(format!(
                "(set-and-coerce-property-and-check! {component} '{component_type} '{property} {new_value} '{property_type})\n"
            )));
        }
        return Ok(value(format!(
            "(get-property-and-check {component} '{component_type} '{property})"
        )));
    }

    let instance = block.mutation.instance_name.as_deref().unwrap_or("");
    if is_setter {
        let new_value = slot_value(block, "VALUE", ctx, NULL_VALUE)?;
        Ok(statement(format!(
            "(set-and-coerce-property! '{instance} '{property} {new_value} '{property_type})\n"
        )))
    } else {
        Ok(value(format!("(get-property '{instance} '{property})")))
    }
}

pub(crate) fn component_component_block(
    block: &Block,
    _ctx: &GenContext<'_>,
) -> Result<Fragment, CodegenError> {
    let instance = block
        .mutation
        .instance_name
        .as_deref()
        .or_else(|| block.field("COMPONENT_SELECTOR"))
        .unwrap_or("");
    Ok(value(format!("(get-component {instance})")))
}
