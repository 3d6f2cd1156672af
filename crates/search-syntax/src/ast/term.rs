use crate::ast::{literal::Literal, path::FieldPath, span::Span};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Comparison written between the colon and the value (`age:>=18`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Comparator {
    #[default]
    Eq,
    Lt,
    Gt,
    Le,
    Ge,
}

impl Comparator {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "" | "=" => Some(Comparator::Eq),
            "<" => Some(Comparator::Lt),
            ">" => Some(Comparator::Gt),
            "<=" => Some(Comparator::Le),
            ">=" => Some(Comparator::Ge),
            _ => None,
        }
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Comparator::Eq => write!(f, "="),
            Comparator::Lt => write!(f, "<"),
            Comparator::Gt => write!(f, ">"),
            Comparator::Le => write!(f, "<="),
            Comparator::Ge => write!(f, ">="),
        }
    }
}

/// A single `field:value` clause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermNode {
    pub field: FieldPath,
    pub comparator: Comparator,
    pub value: Literal,
    pub negated: bool,
    #[serde(default, skip_serializing)]
    pub span: Span,
}

impl TermNode {
    pub fn new(field: impl Into<FieldPath>, comparator: Comparator, value: Literal) -> Self {
        Self {
            field: field.into(),
            comparator,
            value,
            negated: false,
            span: Span::default(),
        }
    }

    /// Shorthand for an equality term.
    pub fn eq(field: impl Into<FieldPath>, value: Literal) -> Self {
        Self::new(field, Comparator::Eq, value)
    }

    pub fn negate(mut self) -> Self {
        self.negated = !self.negated;
        self
    }
}

impl fmt::Display for TermNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negated {
            write!(f, "NOT ")?;
        }
        write!(f, "{}:", self.field)?;
        if self.comparator != Comparator::Eq {
            write!(f, "{}", self.comparator)?;
        }
        write!(f, "{}", self.value)
    }
}
