//! Integration tests for malformed and out-of-domain input

#[path = "common/mod.rs"]
mod common;
#[allow(unused_imports)]
use common::{eval, evaluate, EvalError};

use pcalc::ArithmeticError;

#[test]
fn test_unmatched_open_paren() {
    assert!(matches!(
        evaluate("( 1 + 2"),
        Err(EvalError::UnmatchedOpen)
    ));
}

#[test]
fn test_stray_close_paren() {
    assert!(matches!(evaluate("1 ) 2"), Err(EvalError::UnmatchedClose)));
    assert!(matches!(evaluate(")"), Err(EvalError::UnmatchedClose)));
}

#[test]
fn test_trailing_operator() {
    assert!(matches!(evaluate("1 +"), Err(EvalError::UnexpectedEnd)));
}

#[test]
fn test_empty_expression() {
    assert!(matches!(evaluate(""), Err(EvalError::UnexpectedEnd)));
}

#[test]
fn test_empty_parens() {
    assert!(matches!(evaluate("( )"), Err(EvalError::UnmatchedClose)));
}

#[test]
fn test_unknown_operator() {
    assert!(matches!(
        evaluate("1 % 2"),
        Err(EvalError::InvalidOperator(ref s)) if s == "%"
    ));
}

#[test]
fn test_word_in_operator_position() {
    assert!(matches!(
        evaluate("1 plus 2"),
        Err(EvalError::InvalidOperator(ref s)) if s == "plus"
    ));
}

#[test]
fn test_word_in_value_position() {
    assert!(matches!(
        evaluate("1 + two"),
        Err(EvalError::InvalidLiteral(ref s)) if s == "two"
    ));
}

#[test]
fn test_float_literal_rejected() {
    assert!(matches!(
        evaluate("1 + 2.5"),
        Err(EvalError::InvalidLiteral(ref s)) if s == "2.5"
    ));
}

#[test]
fn test_glued_tokens_rejected() {
    // "(1+2)" never splits, so it lands in value position as one junk word
    assert!(matches!(
        evaluate("(1+2)"),
        Err(EvalError::InvalidLiteral(ref s)) if s == "(1+2)"
    ));
}

#[test]
fn test_division_by_zero() {
    assert!(matches!(
        evaluate("1 / 0"),
        Err(EvalError::Arithmetic(ArithmeticError::DivisionByZero))
    ));
    assert!(matches!(
        evaluate("1 / ( 2 - 2 )"),
        Err(EvalError::Arithmetic(ArithmeticError::DivisionByZero))
    ));
}

#[test]
fn test_negative_exponent() {
    assert!(matches!(
        evaluate("2 ^ - 1"),
        Err(EvalError::Arithmetic(ArithmeticError::NegativeExponent(-1)))
    ));
}

#[test]
fn test_overflow_reported() {
    assert!(matches!(
        evaluate("9223372036854775807 + 1"),
        Err(EvalError::Arithmetic(ArithmeticError::Overflow))
    ));
    assert!(matches!(
        evaluate("2 ^ 64"),
        Err(EvalError::Arithmetic(ArithmeticError::Overflow))
    ));
}

#[test]
fn test_error_messages_are_human_readable() {
    assert_eq!(eval("( 1 + 2").unwrap_err(), "unmatched '('");
    assert_eq!(eval("1 +").unwrap_err(), "stream ended unexpectedly");
    assert_eq!(eval("1 % 2").unwrap_err(), "invalid operator: %");
    assert_eq!(
        eval("1 / 0").unwrap_err(),
        "arithmetic error: division by zero"
    );
}

#[test]
fn test_no_partial_results() {
    // A malformed tail poisons the whole expression
    assert!(evaluate("1 + 2 + junk").is_err());
    assert!(evaluate("1 + 2 )").is_err());
}
