// Core evaluator for expression sequences

use crate::interpreter::errors::EvalError;
use crate::interpreter::vars::VarTable;
use crate::parser::lexer::{Lexer, Token};

/// The evaluator that executes expressions against one variable table
///
/// One `Evaluator` is one logical session: variables set by earlier
/// expressions (or by [`Evaluator::set_variable`]) are visible to later
/// ones, and increment/decrement side effects apply to the shared table
/// eagerly, in token order.
pub struct Evaluator {
    /// Current variable bindings, shared by every pipeline stage
    pub(crate) vars: VarTable,
}

impl Evaluator {
    /// Create an evaluator with an empty variable table.
    pub fn new() -> Self {
        Evaluator {
            vars: VarTable::new(),
        }
    }

    /// Create-or-overwrite a variable binding.
    pub fn set_variable(&mut self, name: &str, value: f64) {
        self.vars.set(name, value);
    }

    /// Read access to the variable table.
    pub fn vars(&self) -> &VarTable {
        &self.vars
    }

    /// Render the variable table in the output format `(a=1,b=2.5)`.
    pub fn format_output(&self) -> String {
        self.vars.to_string()
    }

    /// Evaluate a single expression and return its value.
    ///
    /// Assignment expressions (`x = ...`, `x += ...`) store into the
    /// variable table and return the stored value.
    pub fn evaluate(&mut self, expression: &str) -> Result<f64, EvalError> {
        let tokens = Lexer::new(expression).tokenize()?;
        self.evaluate_tokens(tokens)
    }

    /// Evaluate each expression in order, skipping blank entries, and return
    /// the final variable table.
    ///
    /// The first failing expression aborts the run; table mutations already
    /// applied by earlier expressions (and by the failing expression's own
    /// side effects up to the failure point) persist.
    pub fn process_expressions<S: AsRef<str>>(
        &mut self,
        expressions: &[S],
    ) -> Result<&VarTable, EvalError> {
        for expression in expressions {
            let expression = expression.as_ref().trim();
            if !expression.is_empty() {
                self.evaluate(expression)?;
            }
        }
        Ok(&self.vars)
    }

    /// Dispatch one tokenized expression: assignment forms split and recurse,
    /// everything else runs the direct pipeline (substitution → brackets →
    /// reduction).
    pub(crate) fn evaluate_tokens(
        &mut self,
        tokens: Vec<Token>,
    ) -> Result<f64, EvalError> {
        if let Some((op, at)) = Self::find_assignment(&tokens)? {
            return self.evaluate_assignment(tokens, op, at);
        }

        let substituted = self.substitute_tokens(tokens)?;
        let flat = self.resolve_brackets(substituted)?;
        self.reduce_flat(flat)
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}
