use reckon::interpreter::engine::Evaluator;
use reckon::interpreter::errors::EvalError;
use reckon::parser::lexer::{normalize, BinOp, Lexer, Token};

#[test]
fn test_normalize_pads_parentheses_and_collapses_whitespace() {
    assert_eq!(normalize("  (5 + 3)  * 10 "), "( 5 + 3 ) * 10");
    assert_eq!(normalize("((1))"), "( ( 1 ) )");
    assert_eq!(normalize("a   =   4"), "a = 4");
    assert_eq!(normalize(""), "");
}

#[test]
fn test_lexer_classifies_words() {
    let tokens = Lexer::new("x++ + ++y").tokenize().expect("lexing failed");
    assert_eq!(
        tokens,
        vec![
            Token::PostInc("x".to_string()),
            Token::Op(BinOp::Add),
            Token::PreInc("y".to_string()),
        ]
    );

    let tokens = Lexer::new("a += ( -2.5 )").tokenize().expect("lexing failed");
    assert_eq!(
        tokens,
        vec![
            Token::Ident("a".to_string()),
            Token::Assign(Some(BinOp::Add)),
            Token::LParen,
            Token::Number(-2.5),
            Token::RParen,
        ]
    );
}

#[test]
fn test_lexer_rejects_unknown_operators() {
    assert_eq!(
        Evaluator::new().evaluate("2 ** 3"),
        Err(EvalError::InvalidOperator {
            symbol: "**".to_string()
        })
    );
    assert_eq!(
        Evaluator::new().evaluate("2 & 3"),
        Err(EvalError::InvalidOperator {
            symbol: "&".to_string()
        })
    );
}

#[test]
fn test_lexer_rejects_fused_words() {
    // Operators are word-level: `1+2` is one unrecognizable word
    assert!(matches!(
        Evaluator::new().evaluate("1+2"),
        Err(EvalError::MalformedExpression { .. })
    ));
}

#[test]
fn test_multiplication_before_addition() {
    let mut evaluator = Evaluator::new();
    assert_eq!(evaluator.evaluate("2 + 3 * 4"), Ok(14.0));
    assert_eq!(evaluator.evaluate("10 + 20 / 4"), Ok(15.0));
    assert_eq!(evaluator.evaluate("10 - 4 % 3"), Ok(9.0));
}

#[test]
fn test_equal_precedence_folds_left_to_right() {
    let mut evaluator = Evaluator::new();
    assert_eq!(evaluator.evaluate("10 - 3 - 2"), Ok(5.0));
    assert_eq!(evaluator.evaluate("100 / 10 / 2"), Ok(5.0));
    assert_eq!(evaluator.evaluate("2 * 6 % 5"), Ok(2.0));
}

#[test]
fn test_parentheses_override_precedence() {
    let mut evaluator = Evaluator::new();
    evaluator.set_variable("a", 2.0);
    evaluator.set_variable("b", 3.0);
    evaluator.set_variable("c", 4.0);

    assert_eq!(evaluator.evaluate("a + b * c"), Ok(14.0));
    assert_eq!(evaluator.evaluate("( a + b ) * c"), Ok(20.0));
}

#[test]
fn test_nested_parentheses() {
    let mut evaluator = Evaluator::new();
    assert_eq!(evaluator.evaluate("( ( 2 + 3 ) * 2 )"), Ok(10.0));
    assert_eq!(evaluator.evaluate("( 2 * ( 3 + ( 4 - 1 ) ) )"), Ok(12.0));
    assert_eq!(evaluator.evaluate("( 5 + 3 ) * ( 2 + 2 )"), Ok(32.0));
}

#[test]
fn test_single_value_expressions() {
    let mut evaluator = Evaluator::new();
    assert_eq!(evaluator.evaluate("5"), Ok(5.0));
    assert_eq!(evaluator.evaluate("-5.5"), Ok(-5.5));
    assert_eq!(evaluator.evaluate("( 7 )"), Ok(7.0));

    evaluator.set_variable("x", 1.25);
    assert_eq!(evaluator.evaluate("x"), Ok(1.25));
}

#[test]
fn test_pre_increment_observes_new_value() {
    let mut evaluator = Evaluator::new();
    evaluator.set_variable("x", 5.0);

    assert_eq!(evaluator.evaluate("++x"), Ok(6.0));
    assert_eq!(evaluator.vars().value("x"), Some(6.0));
}

#[test]
fn test_pre_decrement_observes_new_value() {
    let mut evaluator = Evaluator::new();
    evaluator.set_variable("x", 5.0);

    assert_eq!(evaluator.evaluate("--x"), Ok(4.0));
    assert_eq!(evaluator.vars().value("x"), Some(4.0));
}

#[test]
fn test_post_increment_observes_old_value() {
    let mut evaluator = Evaluator::new();
    evaluator.set_variable("x", 5.0);

    assert_eq!(evaluator.evaluate("x++"), Ok(5.0));
    assert_eq!(evaluator.vars().value("x"), Some(6.0));
}

#[test]
fn test_post_decrement_observes_old_value() {
    let mut evaluator = Evaluator::new();
    evaluator.set_variable("x", 5.0);

    assert_eq!(evaluator.evaluate("x--"), Ok(5.0));
    assert_eq!(evaluator.vars().value("x"), Some(4.0));
}

#[test]
fn test_mixed_increment_ordering() {
    // x++ observes 5 and bumps to 6; ++x then bumps to 7 and observes 7
    let mut evaluator = Evaluator::new();
    evaluator.set_variable("x", 5.0);

    assert_eq!(evaluator.evaluate("x++ + ++x"), Ok(12.0));
    assert_eq!(evaluator.vars().value("x"), Some(7.0));
}

#[test]
fn test_plain_read_observes_earlier_mutation() {
    let mut evaluator = Evaluator::new();
    evaluator.set_variable("x", 1.0);

    assert_eq!(evaluator.evaluate("x++ + x"), Ok(3.0));
    assert_eq!(evaluator.vars().value("x"), Some(2.0));
}

#[test]
fn test_increment_of_undefined_variable() {
    let mut evaluator = Evaluator::new();
    assert_eq!(
        evaluator.evaluate("y++"),
        Err(EvalError::UndefinedVariable {
            name: "y".to_string()
        })
    );
    assert_eq!(
        evaluator.evaluate("++y"),
        Err(EvalError::UndefinedVariable {
            name: "y".to_string()
        })
    );
}

#[test]
fn test_read_of_undefined_variable() {
    let mut evaluator = Evaluator::new();
    assert_eq!(
        evaluator.evaluate("y"),
        Err(EvalError::UndefinedVariable {
            name: "y".to_string()
        })
    );
    assert_eq!(
        evaluator.evaluate("y + 1"),
        Err(EvalError::UndefinedVariable {
            name: "y".to_string()
        })
    );
}

#[test]
fn test_side_effects_persist_past_failure() {
    // x++ applies before the unbound y is reached; the failure does not
    // roll it back
    let mut evaluator = Evaluator::new();
    evaluator.set_variable("x", 5.0);

    assert_eq!(
        evaluator.evaluate("x++ + y"),
        Err(EvalError::UndefinedVariable {
            name: "y".to_string()
        })
    );
    assert_eq!(evaluator.vars().value("x"), Some(6.0));
}

#[test]
fn test_division_by_zero() {
    let mut evaluator = Evaluator::new();
    assert_eq!(evaluator.evaluate("10 / 0"), Err(EvalError::DivisionByZero));
    assert_eq!(
        evaluator.evaluate("10 / ( 5 - 5 )"),
        Err(EvalError::DivisionByZero)
    );
}

#[test]
fn test_division_results() {
    let mut evaluator = Evaluator::new();
    assert_eq!(evaluator.evaluate("10 / 2"), Ok(5.0));
    assert_eq!(evaluator.evaluate("5 / 2"), Ok(2.5));
    assert_eq!(evaluator.evaluate("10 / -2"), Ok(-5.0));
    assert_eq!(evaluator.evaluate("-10 / -2"), Ok(5.0));
}

#[test]
fn test_modulo_keeps_native_remainder_semantics() {
    let mut evaluator = Evaluator::new();
    assert_eq!(evaluator.evaluate("10 % 3"), Ok(1.0));
    assert_eq!(evaluator.evaluate("7.5 % 2"), Ok(1.5));

    // Unlike division, modulo by zero is not guarded: it yields NaN
    let value = evaluator.evaluate("5 % 0").expect("modulo by zero failed");
    assert!(value.is_nan());
}

#[test]
fn test_simple_assignment_creates_variable() {
    let mut evaluator = Evaluator::new();
    assert_eq!(evaluator.evaluate("a = 5"), Ok(5.0));
    assert!(evaluator.vars().contains("a"));
    assert_eq!(evaluator.vars().value("a"), Some(5.0));
}

#[test]
fn test_assignment_overwrites() {
    let mut evaluator = Evaluator::new();
    evaluator.set_variable("a", 1.0);
    assert_eq!(evaluator.evaluate("a = 2"), Ok(2.0));
    assert_eq!(evaluator.vars().value("a"), Some(2.0));
    assert_eq!(evaluator.vars().len(), 1);
}

#[test]
fn test_assignment_right_side_runs_full_pipeline() {
    let mut evaluator = Evaluator::new();
    evaluator.set_variable("x", 5.0);
    evaluator.set_variable("c", 2.0);

    assert_eq!(evaluator.evaluate("a = x + 8 + c * 3"), Ok(19.0));
    assert_eq!(evaluator.vars().value("a"), Some(19.0));

    assert_eq!(evaluator.evaluate("b = ( ++x * 2 )"), Ok(12.0));
    assert_eq!(evaluator.vars().value("x"), Some(6.0));
}

#[test]
fn test_compound_assignment() {
    let mut evaluator = Evaluator::new();
    evaluator.set_variable("num", 10.0);

    assert_eq!(evaluator.evaluate("num += 5"), Ok(15.0));
    assert_eq!(evaluator.evaluate("num -= 3"), Ok(12.0));
    assert_eq!(evaluator.evaluate("num *= 2"), Ok(24.0));
    assert_eq!(evaluator.evaluate("num /= 4"), Ok(6.0));
    assert_eq!(evaluator.evaluate("num %= 4"), Ok(2.0));
    assert_eq!(evaluator.vars().value("num"), Some(2.0));
}

#[test]
fn test_compound_assignment_requires_existing_binding() {
    let mut evaluator = Evaluator::new();
    assert_eq!(
        evaluator.evaluate("num += 5"),
        Err(EvalError::UndefinedVariable {
            name: "num".to_string()
        })
    );

    evaluator.set_variable("num", 10.0);
    assert_eq!(evaluator.evaluate("num += 5"), Ok(15.0));
}

#[test]
fn test_compound_target_checked_after_right_side() {
    // The right-hand side evaluates (and mutates) before the unbound
    // target is rejected
    let mut evaluator = Evaluator::new();
    evaluator.set_variable("x", 5.0);

    assert_eq!(
        evaluator.evaluate("num += x++"),
        Err(EvalError::UndefinedVariable {
            name: "num".to_string()
        })
    );
    assert_eq!(evaluator.vars().value("x"), Some(6.0));
}

#[test]
fn test_compound_division_by_zero() {
    let mut evaluator = Evaluator::new();
    evaluator.set_variable("num", 10.0);
    assert_eq!(evaluator.evaluate("num /= 0"), Err(EvalError::DivisionByZero));
    assert_eq!(evaluator.vars().value("num"), Some(10.0));
}

#[test]
fn test_invalid_assignment_forms() {
    let mut evaluator = Evaluator::new();
    evaluator.set_variable("a", 1.0);
    evaluator.set_variable("b", 2.0);

    // Empty right-hand side
    assert!(matches!(
        evaluator.evaluate("a ="),
        Err(EvalError::InvalidAssignment { .. })
    ));
    // Missing target
    assert!(matches!(
        evaluator.evaluate("= 5"),
        Err(EvalError::InvalidAssignment { .. })
    ));
    // Target is not a single identifier
    assert!(matches!(
        evaluator.evaluate("5 = 3"),
        Err(EvalError::InvalidAssignment { .. })
    ));
    assert!(matches!(
        evaluator.evaluate("a + b = 3"),
        Err(EvalError::InvalidAssignment { .. })
    ));
    // Repeated markers of one kind
    assert!(matches!(
        evaluator.evaluate("a = b = 3"),
        Err(EvalError::InvalidAssignment { .. })
    ));
    assert!(matches!(
        evaluator.evaluate("a += b += 3"),
        Err(EvalError::InvalidAssignment { .. })
    ));
}

#[test]
fn test_nested_assignment_in_right_hand_side() {
    // Compound markers split before bare `=`, so the simple assignment
    // re-dispatches as the right-hand side
    let mut evaluator = Evaluator::new();
    evaluator.set_variable("a", 1.0);

    assert_eq!(evaluator.evaluate("a += b = 4"), Ok(5.0));
    assert_eq!(evaluator.vars().value("a"), Some(5.0));
    assert_eq!(evaluator.vars().value("b"), Some(4.0));
}

#[test]
fn test_mismatched_parentheses() {
    let mut evaluator = Evaluator::new();
    assert_eq!(
        evaluator.evaluate("( 2 + 3"),
        Err(EvalError::MismatchedParentheses)
    );
    assert_eq!(
        evaluator.evaluate("2 + 3 )"),
        Err(EvalError::MismatchedParentheses)
    );
    assert_eq!(
        evaluator.evaluate("( ( 1 + 2 )"),
        Err(EvalError::MismatchedParentheses)
    );
}

#[test]
fn test_malformed_expressions() {
    let mut evaluator = Evaluator::new();
    assert!(matches!(
        evaluator.evaluate(""),
        Err(EvalError::MalformedExpression { .. })
    ));
    assert!(matches!(
        evaluator.evaluate("2 +"),
        Err(EvalError::MalformedExpression { .. })
    ));
    assert!(matches!(
        evaluator.evaluate("+ 2"),
        Err(EvalError::MalformedExpression { .. })
    ));
    assert!(matches!(
        evaluator.evaluate("2 3"),
        Err(EvalError::MalformedExpression { .. })
    ));
    assert!(matches!(
        evaluator.evaluate("( )"),
        Err(EvalError::MalformedExpression { .. })
    ));
}

#[test]
fn test_format_output_empty_table() {
    let evaluator = Evaluator::new();
    assert_eq!(evaluator.format_output(), "()");
}

#[test]
fn test_format_output_sorted_regardless_of_insertion_order() {
    let mut evaluator = Evaluator::new();
    evaluator.set_variable("c", 3.0);
    evaluator.set_variable("a", 1.0);
    evaluator.set_variable("b", 2.0);

    assert_eq!(evaluator.format_output(), "(a=1,b=2,c=3)");

    let mut reversed = Evaluator::new();
    reversed.set_variable("b", 2.0);
    reversed.set_variable("c", 3.0);
    reversed.set_variable("a", 1.0);

    assert_eq!(reversed.format_output(), evaluator.format_output());
}

#[test]
fn test_format_output_value_rendering() {
    let mut evaluator = Evaluator::new();
    evaluator.set_variable("whole", 6.0);
    evaluator.set_variable("frac", 2.5);
    evaluator.set_variable("neg", -4.0);

    assert_eq!(evaluator.format_output(), "(frac=2.5,neg=-4,whole=6)");
}

#[test]
fn test_process_expressions_skips_blank_entries() {
    let mut evaluator = Evaluator::new();
    let table = evaluator
        .process_expressions(&["a = 1", "", "   ", "b = 2"])
        .expect("processing failed");

    assert_eq!(table.len(), 2);
    assert_eq!(table.value("a"), Some(1.0));
    assert_eq!(table.value("b"), Some(2.0));
}

#[test]
fn test_process_expressions_stops_at_first_error() {
    let mut evaluator = Evaluator::new();
    let result = evaluator.process_expressions(&["a = 1", "b = 1 / 0", "c = 2"]);

    assert_eq!(result.err(), Some(EvalError::DivisionByZero));
    assert_eq!(evaluator.vars().value("a"), Some(1.0));
    assert!(!evaluator.vars().contains("b"));
    assert!(!evaluator.vars().contains("c"));
}
