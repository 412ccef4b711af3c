//! Variable table and result formatting
//!
//! One [`VarTable`] backs one evaluator session.  Bindings are created by
//! `set` (or by assignment expressions), overwritten on reassignment, and
//! never removed.  Iteration order is unspecified except at output time,
//! where [`VarTable`]'s `Display` impl renders entries sorted by name.

use crate::interpreter::errors::EvalError;
use rustc_hash::FxHashMap;
use std::fmt;

/// A named numeric binding
#[derive(Debug, Clone, PartialEq)]
pub struct Var {
    pub name: String,
    pub value: f64,
}

/// Mapping from variable name to its current binding
#[derive(Debug, Clone, Default)]
pub struct VarTable {
    entries: FxHashMap<String, Var>,
}

impl VarTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create-or-overwrite a binding.
    pub fn set(&mut self, name: &str, value: f64) {
        self.entries.insert(
            name.to_string(),
            Var {
                name: name.to_string(),
                value,
            },
        );
    }

    /// Current value of a binding, if present.
    pub fn value(&self, name: &str) -> Option<f64> {
        self.entries.get(name).map(|var| var.value)
    }

    /// Current value of a binding, failing with `UndefinedVariable` if the
    /// name is unbound.
    pub fn get(&self, name: &str) -> Result<f64, EvalError> {
        self.value(name).ok_or_else(|| EvalError::UndefinedVariable {
            name: name.to_string(),
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Snapshot of all bindings, sorted ascending by name.
    pub fn sorted(&self) -> Vec<&Var> {
        let mut vars: Vec<&Var> = self.entries.values().collect();
        vars.sort_by(|a, b| a.name.cmp(&b.name));
        vars
    }
}

impl fmt::Display for VarTable {
    /// Render the table as `(a=1,b=2.5)`: entries sorted ascending by name,
    /// comma-joined, wrapped in parentheses.  `()` when empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, var) in self.sorted().iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}={}", var.name, format_value(var.value))?;
        }
        f.write_str(")")
    }
}

/// Render a value the way the output format does: finite whole numbers as
/// integer literals, everything else in decimal text form.
pub fn format_value(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
