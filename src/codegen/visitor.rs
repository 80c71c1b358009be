//! Block-to-text dispatch.
//!
//! Every block kind has exactly one generator arm in [`dispatch`]; the match
//! is exhaustive over [`BlockKind`], so adding a kind without a generator is
//! a compile error rather than a runtime surprise. A tag that parses to no
//! kind fails closed before any output is produced.

use super::blocks;
use super::{GenContext, NULL_VALUE};
use crate::block::{Block, BlockKind};
use crate::error::CodegenError;

/// How tightly a value fragment binds. A parent asks for a child at its own
/// precedence; children that bind looser get parenthesized. Fragments in the
/// s-expression dialect are self-delimiting, so nearly everything is
/// `Atomic`, but the contract is part of the visitor interface and callers
/// rely on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precedence {
    None,
    Atomic,
}

impl Precedence {
    fn strength(self) -> u8 {
        match self {
            Precedence::None => 0,
            Precedence::Atomic => 100,
        }
    }
}

/// Output of one generator: a newline-terminated statement, or a value with
/// the precedence its text binds at.
#[derive(Debug, Clone)]
pub enum Fragment {
    Statement(String),
    Value { code: String, precedence: Precedence },
}

pub(crate) fn statement(code: String) -> Fragment {
    debug_assert!(code.ends_with('\n'));
    Fragment::Statement(code)
}

pub(crate) fn value(code: String) -> Fragment {
    Fragment::Value {
        code,
        precedence: Precedence::Atomic,
    }
}

/// Wraps `code` in parentheses when it binds looser than the parent needs.
pub fn maybe_parenthesize(code: String, child: Precedence, parent: Precedence) -> String {
    if child.strength() < parent.strength() {
        format!("({code})")
    } else {
        code
    }
}

/// Generates a whole statement chain. Disabled blocks are skipped without
/// recursing into their children; the chain continues at their successor.
/// Attached comment text is emitted as `;;` lines ahead of the statement.
pub fn generate_statement_chain(block: &Block, ctx: &GenContext<'_>) -> Result<String, CodegenError> {
    let mut out = String::new();
    let mut current = Some(block);
    while let Some(b) = current {
        if !b.disabled {
            if let Some(text) = &b.comment {
                for line in text.lines() {
                    out.push_str(";; ");
                    out.push_str(line);
                    out.push('\n');
                }
            }
            match dispatch(b, ctx)? {
                Fragment::Statement(code) => out.push_str(&code),
                // A value-shaped block in statement position: evaluate and
                // discard, as the runtime does.
                Fragment::Value { code, .. } => {
                    out.push_str(&code);
                    out.push('\n');
                }
            }
        }
        current = b.next.as_deref();
    }
    Ok(out)
}

/// Generates a value block. A disabled block yields `None`; callers fall
/// back to their slot default.
pub fn generate_value(
    block: &Block,
    ctx: &GenContext<'_>,
    parent: Precedence,
) -> Result<Option<String>, CodegenError> {
    if block.disabled {
        return Ok(None);
    }
    match dispatch(block, ctx)? {
        Fragment::Value { code, precedence } => {
            Ok(Some(maybe_parenthesize(code, precedence, parent)))
        }
        Fragment::Statement(code) => Ok(Some(code.trim_end().to_string())),
    }
}

/// Resolves the value plugged into `slot`, or `default` when the slot is
/// empty or holds a disabled block. Absence of a value degrades; it is never
/// an error.
pub(crate) fn slot_value(
    block: &Block,
    slot: &str,
    ctx: &GenContext<'_>,
    default: &str,
) -> Result<String, CodegenError> {
    match block.value(slot) {
        Some(child) => Ok(generate_value(child, ctx, Precedence::None)?
            .unwrap_or_else(|| default.to_string())),
        None => Ok(default.to_string()),
    }
}

/// Generates the statement chain plugged into `slot`, trimmed of its
/// trailing newline, or the null literal for an empty slot so composite
/// forms stay well-formed.
pub(crate) fn slot_body(
    block: &Block,
    slot: &str,
    ctx: &GenContext<'_>,
) -> Result<String, CodegenError> {
    let body = match block.statement(slot) {
        Some(child) => generate_statement_chain(child, ctx)?,
        None => String::new(),
    };
    let trimmed = body.trim_end();
    if trimmed.is_empty() {
        Ok(NULL_VALUE.to_string())
    } else {
        Ok(trimmed.to_string())
    }
}

fn dispatch(block: &Block, ctx: &GenContext<'_>) -> Result<Fragment, CodegenError> {
    let kind = block.kind().ok_or_else(|| CodegenError::UnknownBlockType {
        type_tag: block.tag.clone(),
    })?;
    use BlockKind::*;
    match kind {
        ControlsIf => blocks::control::controls_if(block, ctx),
        ControlsForRange => blocks::control::controls_for_range(block, ctx),
        ControlsForEach => blocks::control::controls_for_each(block, ctx),
        ControlsWhile => blocks::control::controls_while(block, ctx),
        ControlsChoose => blocks::control::controls_choose(block, ctx),
        ControlsDoThenReturn => blocks::control::controls_do_then_return(block, ctx),
        ControlsEvalButIgnore => blocks::control::controls_eval_but_ignore(block, ctx),
        ControlsOpenAnotherScreen => blocks::control::controls_open_another_screen(block, ctx),
        ControlsCloseScreen => blocks::control::controls_close_screen(block, ctx),
        ControlsGetStartValue => blocks::control::controls_get_start_value(block, ctx),

        LogicBoolean => blocks::logic::logic_boolean(block, ctx),
        LogicFalse => blocks::logic::logic_false(block, ctx),
        LogicNegate => blocks::logic::logic_negate(block, ctx),
        LogicCompare => blocks::logic::logic_compare(block, ctx),
        LogicOperation => blocks::logic::logic_operation(block, ctx),

        MathNumber => blocks::math::math_number(block, ctx),
        MathCompare => blocks::math::math_compare(block, ctx),
        MathAdd => blocks::math::math_add(block, ctx),
        MathSubtract => blocks::math::math_subtract(block, ctx),
        MathMultiply => blocks::math::math_multiply(block, ctx),
        MathDivision => blocks::math::math_division(block, ctx),
        MathPower => blocks::math::math_power(block, ctx),
        MathSingle => blocks::math::math_single(block, ctx),
        MathDivide => blocks::math::math_divide(block, ctx),
        MathRandomInt => blocks::math::math_random_int(block, ctx),
        MathRandomFloat => blocks::math::math_random_float(block, ctx),
        MathAtan2 => blocks::math::math_atan2(block, ctx),

        Text => blocks::text::text_literal(block, ctx),
        TextJoin => blocks::text::text_join(block, ctx),
        TextLength => blocks::text::text_length(block, ctx),
        TextIsEmpty => blocks::text::text_is_empty(block, ctx),
        TextCompare => blocks::text::text_compare(block, ctx),
        TextChangeCase => blocks::text::text_change_case(block, ctx),
        TextTrim => blocks::text::text_trim(block, ctx),
        TextContains => blocks::text::text_contains(block, ctx),
        TextReplaceAll => blocks::text::text_replace_all(block, ctx),

        ListsCreateWith => blocks::lists::lists_create_with(block, ctx),
        ListsLength => blocks::lists::lists_length(block, ctx),
        ListsIsEmpty => blocks::lists::lists_is_empty(block, ctx),
        ListsAddItems => blocks::lists::lists_add_items(block, ctx),
        ListsSelectItem => blocks::lists::lists_select_item(block, ctx),
        ListsIsIn => blocks::lists::lists_is_in(block, ctx),
        ListsAppendList => blocks::lists::lists_append_list(block, ctx),
        ListsIsList => blocks::lists::lists_is_list(block, ctx),

        GlobalDeclaration => blocks::variables::global_declaration(block, ctx),
        LexicalVariableGet => blocks::variables::lexical_variable_get(block, ctx),
        LexicalVariableSet => blocks::variables::lexical_variable_set(block, ctx),
        LocalDeclarationStatement => blocks::variables::local_declaration_statement(block, ctx),
        LocalDeclarationExpression => blocks::variables::local_declaration_expression(block, ctx),

        ProceduresDefNoReturn => blocks::procedures::procedures_def_no_return(block, ctx),
        ProceduresDefReturn => blocks::procedures::procedures_def_return(block, ctx),
        ProceduresCallNoReturn => blocks::procedures::procedures_call_no_return(block, ctx),
        ProceduresCallReturn => blocks::procedures::procedures_call_return(block, ctx),

        ComponentEvent => blocks::components::component_event(block, ctx),
        ComponentMethod => blocks::components::component_method(block, ctx),
        ComponentSetGet => blocks::components::component_set_get(block, ctx),
        ComponentComponentBlock => blocks::components::component_component_block(block, ctx),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parenthesizes_looser_children_only() {
        assert_eq!(
            maybe_parenthesize("x".into(), Precedence::None, Precedence::Atomic),
            "(x)"
        );
        assert_eq!(
            maybe_parenthesize("x".into(), Precedence::Atomic, Precedence::None),
            "x"
        );
        assert_eq!(
            maybe_parenthesize("x".into(), Precedence::Atomic, Precedence::Atomic),
            "x"
        );
    }
}
