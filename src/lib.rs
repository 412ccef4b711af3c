//! # Introduction
//!
//! reckon evaluates sequences of C-style arithmetic and assignment
//! expressions over named numeric variables.  Expressions support the binary
//! operators `+ - * / %` with the usual precedence, parenthetical grouping,
//! pre/post increment and decrement (`++x`, `x--`), and simple or compound
//! assignment (`=`, `+=`, `-=`, `*=`, `/=`, `%=`).
//!
//! ## Evaluation pipeline
//!
//! ```text
//! Expression → Normalizer → Lexer → Token Processor → Bracket Resolver
//!            → Precedence Reducer → Value
//! ```
//!
//! 1. [`parser`] — normalizes the expression text and classifies each word
//!    into a tagged [`parser::lexer::Token`].
//! 2. [`interpreter`] — resolves increment/decrement against the variable
//!    table, collapses parenthesized subexpressions innermost-first, and
//!    reduces the flat token stream in two precedence passes.
//! 3. [`ui`] — ratatui-based interactive session; not part of the stable
//!    library API.
//!
//! Assignment expressions split on their marker and recurse through the same
//! pipeline for the right-hand side, so `i += ( ++j * 2 )` works as in C.
//!
//! ## Session model
//!
//! One [`interpreter::engine::Evaluator`] holds one variable table for the
//! lifetime of a session.  Increment/decrement side effects are applied
//! eagerly during the left-to-right scan, so later references within the
//! same expression observe the mutated value, and side effects applied
//! before an error persist.

pub mod interpreter;
pub mod parser;
pub mod ui;
