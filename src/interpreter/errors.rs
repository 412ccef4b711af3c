//! Evaluation error types
//!
//! This module defines [`EvalError`], which represents all errors that can
//! occur while evaluating an expression.
//!
//! All evaluation errors are terminal - they abort the `evaluate` call, and
//! variable mutations already applied by increment/decrement side effects
//! are not rolled back.

use crate::parser::lexer::LexError;
use std::fmt;

/// Errors raised while evaluating an expression
#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    /// A read, increment/decrement, or compound-assignment target references
    /// an unbound variable name
    UndefinedVariable { name: String },

    /// An unrecognized operator symbol appeared in the expression
    InvalidOperator { symbol: String },

    /// The right operand of `/` was exactly zero
    DivisionByZero,

    /// Unbalanced opening/closing parentheses
    MismatchedParentheses,

    /// An assignment form did not split into a target name and a non-empty
    /// right-hand expression
    InvalidAssignment { expression: String },

    /// Catch-all parse failure: the token stream did not reduce to a single
    /// numeral
    MalformedExpression { detail: String },
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::UndefinedVariable { name } => {
                write!(f, "Variable not defined: {}", name)
            }
            EvalError::InvalidOperator { symbol } => {
                write!(f, "Invalid operator: {}", symbol)
            }
            EvalError::DivisionByZero => {
                write!(f, "Division by zero is not allowed")
            }
            EvalError::MismatchedParentheses => {
                write!(f, "Mismatched parentheses in expression")
            }
            EvalError::InvalidAssignment { expression } => {
                write!(f, "Invalid assignment expression: {}", expression)
            }
            EvalError::MalformedExpression { detail } => {
                write!(f, "Malformed expression: {}", detail)
            }
        }
    }
}

impl std::error::Error for EvalError {}

impl From<LexError> for EvalError {
    fn from(err: LexError) -> Self {
        match err {
            LexError::InvalidOperator { symbol } => {
                EvalError::InvalidOperator { symbol }
            }
            LexError::MalformedToken { lexeme } => EvalError::MalformedExpression {
                detail: format!("unrecognized token '{}'", lexeme),
            },
        }
    }
}
