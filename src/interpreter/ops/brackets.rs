//! Parenthesis resolution: innermost-first reduction to single numerals

use crate::interpreter::engine::Evaluator;
use crate::interpreter::errors::EvalError;
use crate::parser::lexer::Token;

impl Evaluator {
    /// Collapse every parenthesized range to a single numeral token.
    ///
    /// One left-to-right scan with a stack of open positions.  A closing
    /// parenthesis always pairs with the most recent open, so inner ranges
    /// reduce before their enclosing range by construction.  The scan is
    /// iterative: nesting depth does not grow the call stack.
    ///
    /// Fails with `MismatchedParentheses` on a close with no matching open,
    /// or on opens left unmatched at the end of the scan.
    pub(crate) fn resolve_brackets(
        &self,
        tokens: Vec<Token>,
    ) -> Result<Vec<Token>, EvalError> {
        let mut out: Vec<Token> = Vec::with_capacity(tokens.len());
        let mut opens: Vec<usize> = Vec::new();

        for token in tokens {
            match token {
                Token::LParen => opens.push(out.len()),
                Token::RParen => {
                    let open = opens.pop().ok_or(EvalError::MismatchedParentheses)?;
                    let inner: Vec<Token> = out.drain(open..).collect();
                    let value = self.reduce_flat(inner)?;
                    out.push(Token::Number(value));
                }
                other => out.push(other),
            }
        }

        if !opens.is_empty() {
            return Err(EvalError::MismatchedParentheses);
        }

        Ok(out)
    }
}
