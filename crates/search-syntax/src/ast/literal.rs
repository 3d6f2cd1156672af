use serde::{Deserialize, Serialize};
use std::fmt;

/// Literal values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Literal {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Null,
}

impl Literal {
    /// Classifies an unquoted word: `null`, `true`/`false`, numbers, or plain text.
    pub fn from_bare(word: &str) -> Self {
        if word.eq_ignore_ascii_case("null") {
            return Literal::Null;
        }
        if word.eq_ignore_ascii_case("true") {
            return Literal::Boolean(true);
        }
        if word.eq_ignore_ascii_case("false") {
            return Literal::Boolean(false);
        }
        if let Ok(n) = word.parse::<i64>() {
            return Literal::Integer(n);
        }
        if is_decimal(word)
            && let Ok(n) = word.parse::<f64>()
        {
            return Literal::Float(n);
        }
        Literal::String(word.to_string())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Literal::Null)
    }
}

// Keeps words like `inf` or `NaN` as text.
fn is_decimal(word: &str) -> bool {
    word.chars().any(|c| c.is_ascii_digit())
        && word
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'))
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::String(s) => write!(f, "\"{}\"", s),
            Literal::Integer(n) => write!(f, "{}", n),
            Literal::Float(n) => write!(f, "{}", n),
            Literal::Boolean(b) => write!(f, "{}", b),
            Literal::Null => write!(f, "null"),
        }
    }
}
