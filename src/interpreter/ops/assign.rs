//! Assignment detection, splitting, and compound combination

use crate::interpreter::engine::Evaluator;
use crate::interpreter::errors::EvalError;
use crate::parser::lexer::{BinOp, Token};

/// Marker kinds in detection order: every compound form is tried before the
/// bare `=` fallback, so `a += b = c` splits at `+=` and re-dispatches
/// `b = c` as a nested assignment.
const DETECTION_ORDER: [Option<BinOp>; 6] = [
    Some(BinOp::Add),
    Some(BinOp::Sub),
    Some(BinOp::Mul),
    Some(BinOp::Div),
    Some(BinOp::Mod),
    None,
];

impl Evaluator {
    /// Locate the assignment marker to split on, if any.
    ///
    /// For the first marker kind present in the stream there must be exactly
    /// one occurrence of that kind; `a = b = c` and `a += b += c` are
    /// `InvalidAssignment`.
    pub(crate) fn find_assignment(
        tokens: &[Token],
    ) -> Result<Option<(Option<BinOp>, usize)>, EvalError> {
        for kind in DETECTION_ORDER {
            let mut positions = tokens.iter().enumerate().filter_map(|(i, token)| {
                match token {
                    Token::Assign(k) if *k == kind => Some(i),
                    _ => None,
                }
            });

            match positions.next() {
                None => continue,
                Some(first) => {
                    if positions.next().is_some() {
                        return Err(Self::invalid_assignment(tokens));
                    }
                    return Ok(Some((kind, first)));
                }
            }
        }

        Ok(None)
    }

    /// Evaluate an assignment split at `at`: the left part must be exactly
    /// one identifier, the right part a non-empty expression.
    ///
    /// The right-hand side evaluates first, through the full dispatcher, so
    /// its side effects apply before a compound form's target is checked:
    /// `num += x++` with `num` unbound still increments `x`.
    pub(crate) fn evaluate_assignment(
        &mut self,
        mut tokens: Vec<Token>,
        op: Option<BinOp>,
        at: usize,
    ) -> Result<f64, EvalError> {
        let name = match tokens.get(..at) {
            Some([Token::Ident(name)]) => name.clone(),
            _ => return Err(Self::invalid_assignment(&tokens)),
        };

        let rhs: Vec<Token> = tokens.split_off(at + 1);
        if rhs.is_empty() {
            return Err(Self::invalid_assignment(&tokens));
        }

        let value = self.evaluate_tokens(rhs)?;

        let value = match op {
            Some(base) => {
                let current = self.vars.get(&name)?;
                Self::apply_binop(base, current, value)?
            }
            None => value,
        };

        self.vars.set(&name, value);
        Ok(value)
    }

    fn invalid_assignment(tokens: &[Token]) -> EvalError {
        let expression = tokens
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        EvalError::InvalidAssignment { expression }
    }
}
