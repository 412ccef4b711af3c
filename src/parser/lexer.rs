//! Lexer (word classifier) for expression text
//!
//! Converts raw expression text into a flat [`Token`] stream consumed by the
//! evaluator.  Classification happens per whitespace-delimited word: the
//! [`normalize`] step guarantees one word per syntactic unit, except for
//! increment/decrement forms, which stay fused to their identifier and are
//! recognized by prefix/suffix inspection.

use std::fmt;

/// Binary arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

impl BinOp {
    /// The operator's source symbol.
    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Mod => "%",
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// All token variants produced by the lexer.
///
/// Increment/decrement variants carry the raw remainder of the word as the
/// variable name, unvalidated: `++x--` lexes as `PreInc("x--")` and fails
/// later as an undefined variable, the same way an unbound `++y` does.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Numeric literal, or a value substituted during reduction.
    Number(f64),
    /// Identifier: a variable reference, or an assignment target.
    Ident(String),
    /// Binary arithmetic operator.
    Op(BinOp),
    /// Assignment marker: `None` for `=`, `Some(op)` for a compound form.
    Assign(Option<BinOp>),
    /// Pre-increment: `++x`, observes the new value.
    PreInc(String),
    /// Pre-decrement: `--x`, observes the new value.
    PreDec(String),
    /// Post-increment: `x++`, observes the old value.
    PostInc(String),
    /// Post-decrement: `x--`, observes the old value.
    PostDec(String),
    /// Opening parenthesis.
    LParen,
    /// Closing parenthesis.
    RParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{}", n),
            Token::Ident(name) => f.write_str(name),
            Token::Op(op) => write!(f, "{}", op),
            Token::Assign(None) => f.write_str("="),
            Token::Assign(Some(op)) => write!(f, "{}=", op),
            Token::PreInc(name) => write!(f, "++{}", name),
            Token::PreDec(name) => write!(f, "--{}", name),
            Token::PostInc(name) => write!(f, "{}++", name),
            Token::PostDec(name) => write!(f, "{}--", name),
            Token::LParen => f.write_str("("),
            Token::RParen => f.write_str(")"),
        }
    }
}

/// Lexer error type
#[derive(Debug, Clone, PartialEq)]
pub enum LexError {
    /// A word made only of operator symbols that is not a supported operator
    /// (`**`, `&`, `<<`, ...).
    InvalidOperator { symbol: String },
    /// A word that is not a number, identifier, operator, or parenthesis
    /// (`1+2`, `x$`, ...).
    MalformedToken { lexeme: String },
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::InvalidOperator { symbol } => {
                write!(f, "Invalid operator: {}", symbol)
            }
            LexError::MalformedToken { lexeme } => {
                write!(f, "Unrecognized token '{}'", lexeme)
            }
        }
    }
}

impl std::error::Error for LexError {}

/// Normalize an expression by padding parentheses with spaces and collapsing
/// whitespace runs, so that splitting on whitespace yields one word per
/// syntactic unit.
///
/// Operators and assignment markers are *not* padded: they must already be
/// space-separated in the source text, while `x++` and `++x` stay fused by
/// design.
pub fn normalize(expression: &str) -> String {
    let padded = expression.replace('(', " ( ").replace(')', " ) ");
    padded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Lexer for expression text
pub struct Lexer<'a> {
    input: &'a str,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given expression string.
    pub fn new(input: &'a str) -> Self {
        Self { input }
    }

    /// Normalize and classify the entire input.
    pub fn tokenize(&self) -> Result<Vec<Token>, LexError> {
        normalize(self.input)
            .split_whitespace()
            .map(classify_word)
            .collect()
    }
}

/// Classify one normalized word.
///
/// Prefix/suffix increment forms are checked before everything else: `++x`
/// is a pre-increment even if `x` is not a valid name, and the bare word
/// `++` is a pre-increment of the empty name.
fn classify_word(word: &str) -> Result<Token, LexError> {
    if let Some(rest) = word.strip_prefix("++") {
        return Ok(Token::PreInc(rest.to_string()));
    }
    if let Some(rest) = word.strip_prefix("--") {
        return Ok(Token::PreDec(rest.to_string()));
    }
    if let Some(rest) = word.strip_suffix("++") {
        return Ok(Token::PostInc(rest.to_string()));
    }
    if let Some(rest) = word.strip_suffix("--") {
        return Ok(Token::PostDec(rest.to_string()));
    }

    match word {
        "(" => return Ok(Token::LParen),
        ")" => return Ok(Token::RParen),
        "+" => return Ok(Token::Op(BinOp::Add)),
        "-" => return Ok(Token::Op(BinOp::Sub)),
        "*" => return Ok(Token::Op(BinOp::Mul)),
        "/" => return Ok(Token::Op(BinOp::Div)),
        "%" => return Ok(Token::Op(BinOp::Mod)),
        "=" => return Ok(Token::Assign(None)),
        "+=" => return Ok(Token::Assign(Some(BinOp::Add))),
        "-=" => return Ok(Token::Assign(Some(BinOp::Sub))),
        "*=" => return Ok(Token::Assign(Some(BinOp::Mul))),
        "/=" => return Ok(Token::Assign(Some(BinOp::Div))),
        "%=" => return Ok(Token::Assign(Some(BinOp::Mod))),
        _ => {}
    }

    // Identifier shape wins over the numeric parse so that words like `NaN`
    // or `inf` name variables instead of lexing as float literals.
    if is_identifier(word) {
        return Ok(Token::Ident(word.to_string()));
    }

    if let Ok(value) = word.parse::<f64>() {
        return Ok(Token::Number(value));
    }

    if word.chars().all(|c| c.is_ascii_punctuation()) {
        Err(LexError::InvalidOperator {
            symbol: word.to_string(),
        })
    } else {
        Err(LexError::MalformedToken {
            lexeme: word.to_string(),
        })
    }
}

fn is_identifier(word: &str) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
