//! Precedence reduction over a flat, parenthesis-free token stream

use crate::interpreter::engine::Evaluator;
use crate::interpreter::errors::EvalError;
use crate::parser::lexer::{BinOp, Token};

/// Multiplicative tier, folded first.
const MUL_TIER: [BinOp; 3] = [BinOp::Mul, BinOp::Div, BinOp::Mod];
/// Additive tier, folded second.
const ADD_TIER: [BinOp; 2] = [BinOp::Add, BinOp::Sub];

impl Evaluator {
    /// Reduce a flat stream (numerals and binary operators only) to a value.
    ///
    /// Two sequential left-to-right passes: `* / %` first, then `+ -`.
    /// Operators of equal precedence fold leftmost-first, so `10 - 3 - 2`
    /// is `5`.
    pub(crate) fn reduce_flat(&self, tokens: Vec<Token>) -> Result<f64, EvalError> {
        let tokens = self.reduce_pass(tokens, &MUL_TIER)?;
        let reduced = self.reduce_pass(tokens, &ADD_TIER)?;

        let mut remaining = reduced.into_iter();
        match (remaining.next(), remaining.next()) {
            (Some(token), None) => Self::numeric_operand(token),
            (None, _) => Err(EvalError::MalformedExpression {
                detail: "empty expression".to_string(),
            }),
            (Some(_), Some(_)) => Err(EvalError::MalformedExpression {
                detail: "expression did not reduce to a single value".to_string(),
            }),
        }
    }

    /// One reduction pass: fold every operator of the given tier, left to
    /// right, each result taking the consumed triple's place in the output.
    fn reduce_pass(
        &self,
        tokens: Vec<Token>,
        tier: &[BinOp],
    ) -> Result<Vec<Token>, EvalError> {
        let mut out: Vec<Token> = Vec::with_capacity(tokens.len());
        let mut rest = tokens.into_iter();

        while let Some(token) = rest.next() {
            match token {
                Token::Op(op) if tier.contains(&op) => {
                    let lhs = Self::operand(op, out.pop())?;
                    let rhs = Self::operand(op, rest.next())?;
                    out.push(Token::Number(Self::apply_binop(op, lhs, rhs)?));
                }
                other => out.push(other),
            }
        }

        Ok(out)
    }

    /// Coerce a token to a numeric operand.
    ///
    /// An identifier here survived substitution, so it names an unbound
    /// variable.
    fn numeric_operand(token: Token) -> Result<f64, EvalError> {
        match token {
            Token::Number(value) => Ok(value),
            Token::Ident(name) => Err(EvalError::UndefinedVariable { name }),
            other => Err(EvalError::MalformedExpression {
                detail: format!("'{}' is not a numeric value", other),
            }),
        }
    }

    fn operand(op: BinOp, token: Option<Token>) -> Result<f64, EvalError> {
        match token {
            Some(token) => Self::numeric_operand(token),
            None => Err(EvalError::MalformedExpression {
                detail: format!("operator '{}' is missing an operand", op),
            }),
        }
    }

    /// Apply one binary operator.
    ///
    /// Division guards against an exactly-zero divisor; modulo keeps native
    /// `f64` remainder semantics, so `x % 0` yields NaN rather than failing.
    pub(crate) fn apply_binop(op: BinOp, lhs: f64, rhs: f64) -> Result<f64, EvalError> {
        match op {
            BinOp::Add => Ok(lhs + rhs),
            BinOp::Sub => Ok(lhs - rhs),
            BinOp::Mul => Ok(lhs * rhs),
            BinOp::Div => {
                if rhs == 0.0 {
                    Err(EvalError::DivisionByZero)
                } else {
                    Ok(lhs / rhs)
                }
            }
            BinOp::Mod => Ok(lhs % rhs),
        }
    }
}
