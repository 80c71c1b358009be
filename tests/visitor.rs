//! Tests for block-to-text generation: dispatch, chaining, disabled blocks,
//! variadic shapes and the component blocks.
mod common;
use common::*;
use kumiki::codegen::visitor::{Precedence, generate_statement_chain, generate_value};
use kumiki::prelude::*;

fn ctx(db: &ComponentDatabase) -> GenContext<'_> {
    GenContext {
        db,
        mode: GenerationMode::Deployed,
        form_name: "Screen1".to_string(),
        confounder: None,
    }
}

fn expr(db: &ComponentDatabase, block: &Block) -> String {
    generate_value(block, &ctx(db), Precedence::None)
        .expect("generation should succeed")
        .expect("enabled block should yield code")
}

fn stmt(db: &ComponentDatabase, block: &Block) -> String {
    generate_statement_chain(block, &ctx(db)).expect("generation should succeed")
}

#[test]
fn test_unknown_block_type_fails_closed() {
    let db = test_db();
    let bogus = Block::new("bogus_block");
    match generate_statement_chain(&bogus, &ctx(&db)) {
        Err(CodegenError::UnknownBlockType { type_tag }) => assert_eq!(type_tag, "bogus_block"),
        other => panic!("Expected UnknownBlockType, got {other:?}"),
    }
}

#[test]
fn test_unknown_operator_fails_closed() {
    let db = test_db();
    let bad = Block::new("math_compare")
        .with_field("OP", "WAT")
        .with_value("A", Block::new("math_number").with_field("NUM", "1"))
        .with_value("B", Block::new("math_number").with_field("NUM", "2"));
    match generate_value(&bad, &ctx(&db), Precedence::None) {
        Err(CodegenError::UnknownOperator { type_tag, operator }) => {
            assert_eq!(type_tag, "math_compare");
            assert_eq!(operator, "WAT");
        }
        other => panic!("Expected UnknownOperator, got {other:?}"),
    }
}

#[test]
fn test_literals() {
    let db = test_db();
    assert_eq!(expr(&db, &Block::new("math_number").with_field("NUM", "42")), "42");
    assert_eq!(expr(&db, &Block::new("logic_boolean").with_field("BOOL", "TRUE")), "#t");
    assert_eq!(expr(&db, &Block::new("logic_false")), "#f");
    assert_eq!(expr(&db, &Block::new("text").with_field("TEXT", "hi")), "\"hi\"");
}

#[test]
fn test_math_compare_shapes() {
    let db = test_db();
    let gt = Block::new("math_compare")
        .with_field("OP", "GT")
        .with_value("A", Block::new("math_number").with_field("NUM", "3"))
        .with_value("B", Block::new("math_number").with_field("NUM", "2"));
    assert_eq!(
        expr(&db, &gt),
        "(call-runtime-primitive > (*list-for-runtime* 3 2) '(number number) \">\")"
    );
}

#[test]
fn test_variadic_join_honors_item_count() {
    let db = test_db();
    let join = Block::new("text_join")
        .with_mutation(Mutation {
            items: Some(3),
            ..Mutation::default()
        })
        .with_value("ADD0", Block::new("text").with_field("TEXT", "a"))
        .with_value("ADD2", Block::new("text").with_field("TEXT", "c"));
    // The empty middle slot degrades to the empty-string default.
    assert_eq!(
        expr(&db, &join),
        "(call-runtime-primitive string-append (*list-for-runtime* \"a\" \"\" \"c\") '(text text text) \"join\")"
    );
}

#[test]
fn test_if_elseif_else_nesting() {
    let db = test_db();
    let branch = Block::new("controls_if")
        .with_mutation(Mutation {
            elseif: Some(1),
            else_branch: Some(1),
            ..Mutation::default()
        })
        .with_value("IF0", Block::new("logic_boolean").with_field("BOOL", "TRUE"))
        .with_statement("DO0", Block::new("controls_closeScreen"))
        .with_value("IF1", Block::new("logic_boolean").with_field("BOOL", "FALSE"))
        .with_statement("DO1", Block::new("controls_closeScreen"))
        .with_statement("ELSE", Block::new("controls_closeScreen"));
    let close = "(call-runtime-primitive close-screen (*list-for-runtime*) '() \"close screen\")";
    assert_eq!(
        stmt(&db, &branch),
        format!("(if #t (begin {close}) (if #f (begin {close}) (begin {close})))\n")
    );
}

#[test]
fn test_disabled_statement_skips_to_next() {
    let db = test_db();
    let chain = Block::new("controls_closeScreen")
        .disable()
        .with_next(
            Block::new("lexical_variable_set")
                .with_field("VAR", "global score")
                .with_value("VALUE", Block::new("math_number").with_field("NUM", "1")),
        );
    assert_eq!(stmt(&db, &chain), "(set-var! g$score 1)\n");
}

#[test]
fn test_disabled_value_yields_slot_default() {
    let db = test_db();
    let negate = Block::new("logic_negate")
        .with_value("BOOL", Block::new("logic_boolean").with_field("BOOL", "TRUE").disable());
    assert_eq!(
        expr(&db, &negate),
        "(call-runtime-primitive boolean-not (*list-for-runtime* #f) '(boolean) \"not\")"
    );
}

#[test]
fn test_comment_emitted_before_statement() {
    let db = test_db();
    let chain = Block::new("controls_closeScreen").with_comment("shut it down\nfor good");
    assert_eq!(
        stmt(&db, &chain),
        ";; shut it down\n;; for good\n(call-runtime-primitive close-screen (*list-for-runtime*) '() \"close screen\")\n"
    );
}

#[test]
fn test_variables_and_locals() {
    let db = test_db();
    assert_eq!(stmt(&db, &score_global()), "(def g$score 0)\n");
    assert_eq!(
        expr(&db, &Block::new("lexical_variable_get").with_field("VAR", "global score")),
        "(get-var g$score)"
    );
    assert_eq!(
        expr(&db, &Block::new("lexical_variable_get").with_field("VAR", "item")),
        "(lexical-value $item)"
    );

    let local = Block::new("local_declaration_statement")
        .with_mutation(Mutation {
            localnames: vec!["x".to_string()],
            ..Mutation::default()
        })
        .with_value("DECL0", Block::new("math_number").with_field("NUM", "5"))
        .with_statement(
            "STACK",
            Block::new("lexical_variable_set")
                .with_field("VAR", "x")
                .with_value("VALUE", Block::new("math_number").with_field("NUM", "6")),
        );
    assert_eq!(stmt(&db, &local), "(let ( ($x 5) ) (set-lexical! $x 6))\n");
}

#[test]
fn test_procedures_define_and_call() {
    let db = test_db();
    let def = Block::new("procedures_defreturn")
        .with_mutation(Mutation {
            name: Some("double".to_string()),
            args: vec!["n".to_string()],
            ..Mutation::default()
        })
        .with_value(
            "RETURN",
            Block::new("math_multiply")
                .with_value("NUM0", Block::new("lexical_variable_get").with_field("VAR", "n"))
                .with_value("NUM1", Block::new("math_number").with_field("NUM", "2")),
        );
    assert_eq!(
        stmt(&db, &def),
        "(def (p$double $n) (call-runtime-primitive * (*list-for-runtime* (lexical-value $n) 2) '(number number) \"*\"))\n"
    );

    let call = Block::new("procedures_callreturn")
        .with_mutation(Mutation {
            name: Some("double".to_string()),
            args: vec!["n".to_string()],
            ..Mutation::default()
        })
        .with_value("ARG0", Block::new("math_number").with_field("NUM", "21"));
    assert_eq!(expr(&db, &call), "((get-var p$double) 21)");
}

#[test]
fn test_component_event_binds_schema_params() {
    let db = test_db();
    let handler = Block::new("component_event")
        .with_mutation(Mutation {
            instance_name: Some("Button1".to_string()),
            event_name: Some("Dragged".to_string()),
            component_type: Some("Button".to_string()),
            ..Mutation::default()
        })
        .with_statement("DO", Block::new("controls_closeScreen"));
    let code = stmt(&db, &handler);
    assert!(code.starts_with("(define-event Button1 Dragged($x $y) (set-this-form) "));
}

#[test]
fn test_component_method_statement_vs_value() {
    let db = test_db();
    let play = Block::new("component_method").with_mutation(Mutation {
        instance_name: Some("Sound1".to_string()),
        method_name: Some("Play".to_string()),
        component_type: Some("Sound".to_string()),
        ..Mutation::default()
    });
    // Void method: statement-shaped, newline-terminated.
    assert_eq!(
        stmt(&db, &play),
        "(call-component-method 'Sound1 'Play (*list-for-runtime*) '())\n"
    );

    let vibrate = Block::new("component_method")
        .with_mutation(Mutation {
            instance_name: Some("Sound1".to_string()),
            method_name: Some("Vibrate".to_string()),
            component_type: Some("Sound".to_string()),
            ..Mutation::default()
        })
        .with_value("ARG0", Block::new("math_number").with_field("NUM", "300"));
    assert_eq!(
        stmt(&db, &vibrate),
        "(call-component-method 'Sound1 'Vibrate (*list-for-runtime* 300) '(number))\n"
    );

    let duration = Block::new("component_method").with_mutation(Mutation {
        instance_name: Some("Sound1".to_string()),
        method_name: Some("Duration".to_string()),
        component_type: Some("Sound".to_string()),
        ..Mutation::default()
    });
    assert_eq!(
        expr(&db, &duration),
        "(call-component-method 'Sound1 'Duration (*list-for-runtime*) '())"
    );
}

#[test]
fn test_component_set_get_shapes() {
    let db = test_db();
    let getter = Block::new("component_set_get").with_mutation(Mutation {
        set_or_get: Some("get".to_string()),
        property_name: Some("Text".to_string()),
        instance_name: Some("Button1".to_string()),
        component_type: Some("Button".to_string()),
        ..Mutation::default()
    });
    assert_eq!(expr(&db, &getter), "(get-property 'Button1 'Text)");

    let generic_setter = Block::new("component_set_get")
        .with_mutation(Mutation {
            set_or_get: Some("set".to_string()),
            property_name: Some("Text".to_string()),
            component_type: Some("Button".to_string()),
            is_generic: true,
            ..Mutation::default()
        })
        .with_value(
            "COMPONENT",
            Block::new("component_component_block").with_mutation(Mutation {
                instance_name: Some("Button1".to_string()),
                ..Mutation::default()
            }),
        )
        .with_value("VALUE", Block::new("text").with_field("TEXT", "go"));
    assert_eq!(
        stmt(&db, &generic_setter),
        "(set-and-coerce-property-and-check! (get-component Button1) 'Button 'Text \"go\" 'text)\n"
    );
}

#[test]
fn test_control_loops() {
    let db = test_db();
    let body = Block::new("lexical_variable_set")
        .with_field("VAR", "global score")
        .with_value("VALUE", Block::new("math_number").with_field("NUM", "1"));
    let loop_block = Block::new("controls_forRange")
        .with_field("VAR", "i")
        .with_value("START", Block::new("math_number").with_field("NUM", "1"))
        .with_value("END", Block::new("math_number").with_field("NUM", "10"))
        .with_value("STEP", Block::new("math_number").with_field("NUM", "2"))
        .with_statement("DO", body);
    assert_eq!(
        stmt(&db, &loop_block),
        "(forrange $i (begin (set-var! g$score 1)) 1 10 2)\n"
    );
}
