use search_syntax::error::SyntaxError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("Invalid filter expression: {0}")]
    Syntax(#[from] SyntaxError),

    #[error("Unknown entity '{0}'")]
    UnknownEntity(String),
}
