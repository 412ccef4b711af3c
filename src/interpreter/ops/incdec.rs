//! Token processing: increment/decrement resolution and variable substitution

use crate::interpreter::engine::Evaluator;
use crate::interpreter::errors::EvalError;
use crate::parser::lexer::Token;

impl Evaluator {
    /// Resolve increment/decrement tokens and substitute variable references,
    /// left to right.
    ///
    /// Table mutations are applied eagerly during the scan: a later token of
    /// the same expression observes the already-mutated value, which is what
    /// makes `x++ + ++x` order-dependent.  On failure, mutations applied up
    /// to that point persist.
    ///
    /// Identifiers with no binding pass through unchanged; they surface as
    /// `UndefinedVariable` when the reducer needs them as operands.
    pub(crate) fn substitute_tokens(
        &mut self,
        tokens: Vec<Token>,
    ) -> Result<Vec<Token>, EvalError> {
        tokens
            .into_iter()
            .map(|token| self.substitute_token(token))
            .collect()
    }

    fn substitute_token(&mut self, token: Token) -> Result<Token, EvalError> {
        match token {
            // Pre forms observe the new value
            Token::PreInc(name) => {
                let value = self.vars.get(&name)? + 1.0;
                self.vars.set(&name, value);
                Ok(Token::Number(value))
            }
            Token::PreDec(name) => {
                let value = self.vars.get(&name)? - 1.0;
                self.vars.set(&name, value);
                Ok(Token::Number(value))
            }
            // Post forms observe the old value
            Token::PostInc(name) => {
                let value = self.vars.get(&name)?;
                self.vars.set(&name, value + 1.0);
                Ok(Token::Number(value))
            }
            Token::PostDec(name) => {
                let value = self.vars.get(&name)?;
                self.vars.set(&name, value - 1.0);
                Ok(Token::Number(value))
            }
            Token::Ident(name) => match self.vars.value(&name) {
                Some(value) => Ok(Token::Number(value)),
                None => Ok(Token::Ident(name)),
            },
            other => Ok(other),
        }
    }
}
