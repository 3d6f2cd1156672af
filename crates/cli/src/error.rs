use filter::FilterError;
use model::error::ModelError;
use search_syntax::error::SyntaxError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read the schema file: {0}")]
    SchemaFileRead(#[from] std::io::Error),

    #[error("Failed to parse the schema file as JSON: {0}")]
    SchemaJson(#[from] serde_json::Error),

    #[error("Failed to parse the schema file as YAML: {0}")]
    SchemaYaml(#[from] serde_yaml::Error),

    #[error("Unsupported schema file '{0}': expected .json, .yaml or .yml")]
    UnsupportedSchemaFormat(String),

    #[error("Invalid schema: {0}")]
    Schema(#[from] ModelError),

    #[error("Failed to compile the filter: {0}")]
    Filter(#[from] FilterError),

    #[error("Failed to parse the filter expression: {0}")]
    Syntax(#[from] SyntaxError),

    #[error("Unknown SQL dialect: {0}")]
    UnknownDialect(String),

    #[error("Failed to serialize data to JSON: {0}")]
    JsonSerialize(serde_json::Error),
}
