//! Expression text front end
//!
//! This module turns raw expression text into a flat token stream:
//! - [`lexer::normalize`]: whitespace canonicalization (text → words)
//! - [`lexer`]: word classification (words → tagged tokens)
//!
//! # Word grammar
//!
//! Tokens are recognized at word granularity: operators, numbers, and
//! assignment markers must be separated by whitespace in the source text
//! (`x += 5`, not `x+=5`).  Parentheses are the exception: the normalizer
//! pads them with spaces, so `(5 + 3)` lexes the same as `( 5 + 3 )`.
//! Increment/decrement forms stay fused to their identifier (`++x`, `x--`)
//! and are recognized by prefix/suffix inspection.
//!
//! There is no grammar beyond the word level: the token stream is reduced
//! positionally by the interpreter, not parsed into a tree.

pub mod lexer;
