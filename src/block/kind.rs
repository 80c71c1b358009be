/// Typed variant set over every block shape the generator understands.
///
/// The editor identifies blocks by a string tag; parsing the tag up front
/// means dispatch is an exhaustive `match` checked at compile time, and an
/// unknown tag fails closed before any output is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    // Control
    ControlsIf,
    ControlsForRange,
    ControlsForEach,
    ControlsWhile,
    ControlsChoose,
    ControlsDoThenReturn,
    ControlsEvalButIgnore,
    ControlsOpenAnotherScreen,
    ControlsCloseScreen,
    ControlsGetStartValue,

    // Logic
    LogicBoolean,
    LogicFalse,
    LogicNegate,
    LogicCompare,
    LogicOperation,

    // Math
    MathNumber,
    MathCompare,
    MathAdd,
    MathSubtract,
    MathMultiply,
    MathDivision,
    MathPower,
    MathSingle,
    MathDivide,
    MathRandomInt,
    MathRandomFloat,
    MathAtan2,

    // Text
    Text,
    TextJoin,
    TextLength,
    TextIsEmpty,
    TextCompare,
    TextChangeCase,
    TextTrim,
    TextContains,
    TextReplaceAll,

    // Lists
    ListsCreateWith,
    ListsLength,
    ListsIsEmpty,
    ListsAddItems,
    ListsSelectItem,
    ListsIsIn,
    ListsAppendList,
    ListsIsList,

    // Variables
    GlobalDeclaration,
    LexicalVariableGet,
    LexicalVariableSet,
    LocalDeclarationStatement,
    LocalDeclarationExpression,

    // Procedures
    ProceduresDefNoReturn,
    ProceduresDefReturn,
    ProceduresCallNoReturn,
    ProceduresCallReturn,

    // Components
    ComponentEvent,
    ComponentMethod,
    ComponentSetGet,
    ComponentComponentBlock,
}

impl BlockKind {
    pub fn from_tag(tag: &str) -> Option<Self> {
        use BlockKind::*;
        Some(match tag {
            "controls_if" => ControlsIf,
            "controls_forRange" => ControlsForRange,
            "controls_forEach" => ControlsForEach,
            "controls_while" => ControlsWhile,
            "controls_choose" => ControlsChoose,
            "controls_do_then_return" => ControlsDoThenReturn,
            "controls_eval_but_ignore" => ControlsEvalButIgnore,
            "controls_openAnotherScreen" => ControlsOpenAnotherScreen,
            "controls_closeScreen" => ControlsCloseScreen,
            "controls_getStartValue" => ControlsGetStartValue,

            "logic_boolean" => LogicBoolean,
            "logic_false" => LogicFalse,
            "logic_negate" => LogicNegate,
            "logic_compare" => LogicCompare,
            "logic_operation" => LogicOperation,

            "math_number" => MathNumber,
            "math_compare" => MathCompare,
            "math_add" => MathAdd,
            "math_subtract" => MathSubtract,
            "math_multiply" => MathMultiply,
            "math_division" => MathDivision,
            "math_power" => MathPower,
            "math_single" => MathSingle,
            "math_divide" => MathDivide,
            "math_random_int" => MathRandomInt,
            "math_random_float" => MathRandomFloat,
            "math_atan2" => MathAtan2,

            "text" => Text,
            "text_join" => TextJoin,
            "text_length" => TextLength,
            "text_isEmpty" => TextIsEmpty,
            "text_compare" => TextCompare,
            "text_changeCase" => TextChangeCase,
            "text_trim" => TextTrim,
            "text_contains" => TextContains,
            "text_replace_all" => TextReplaceAll,

            "lists_create_with" => ListsCreateWith,
            "lists_length" => ListsLength,
            "lists_is_empty" => ListsIsEmpty,
            "lists_add_items" => ListsAddItems,
            "lists_select_item" => ListsSelectItem,
            "lists_is_in" => ListsIsIn,
            "lists_append_list" => ListsAppendList,
            "lists_is_list" => ListsIsList,

            "global_declaration" => GlobalDeclaration,
            "lexical_variable_get" => LexicalVariableGet,
            "lexical_variable_set" => LexicalVariableSet,
            "local_declaration_statement" => LocalDeclarationStatement,
            "local_declaration_expression" => LocalDeclarationExpression,

            "procedures_defnoreturn" => ProceduresDefNoReturn,
            "procedures_defreturn" => ProceduresDefReturn,
            "procedures_callnoreturn" => ProceduresCallNoReturn,
            "procedures_callreturn" => ProceduresCallReturn,

            "component_event" => ComponentEvent,
            "component_method" => ComponentMethod,
            "component_set_get" => ComponentSetGet,
            "component_component_block" => ComponentComponentBlock,

            _ => return None,
        })
    }
}

/// Classification of untethered top-level blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopLevelKind {
    EventHandler,
    ProcedureDefinition,
    GlobalDeclaration,
}
