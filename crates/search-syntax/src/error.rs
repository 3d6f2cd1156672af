use crate::parser::Rule;
use pest::error::Error as PestError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SyntaxError {
    #[error("Parse error at line {line}, column {column}: {message}")]
    Parse {
        message: String,
        line: usize,
        column: usize,
        source_snippet: String,
    },

    #[error("Invalid comparator '{0}'")]
    InvalidComparator(String),

    #[error("Unexpected rule {rule} at line {line}, column {column}")]
    UnexpectedRule {
        rule: String,
        line: usize,
        column: usize,
    },
}

impl SyntaxError {
    pub fn from_pest_error(err: PestError<Rule>) -> Self {
        use pest::error::LineColLocation;

        let (line, column) = match err.line_col {
            LineColLocation::Pos((l, c)) => (l, c),
            LineColLocation::Span((l, c), _) => (l, c),
        };

        let message = format!("{}", err.variant);
        let source_snippet = err.line().to_string();

        SyntaxError::Parse {
            message,
            line,
            column,
            source_snippet,
        }
    }

    /// Format error with a caret under the offending column.
    pub fn format_error(&self) -> String {
        match self {
            SyntaxError::Parse {
                message,
                line,
                column,
                source_snippet,
            } => {
                format!(
                    "Parse Error at line {}, column {}:\n{}\n{}^\n{}",
                    line,
                    column,
                    source_snippet,
                    " ".repeat(column.saturating_sub(1)),
                    message
                )
            }
            _ => self.to_string(),
        }
    }
}
