use crate::error::CliError;
use model::schema::{catalog::SchemaCatalog, definition::SchemaDefinition};
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaFormat {
    Json,
    Yaml,
}

impl SchemaFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "json" => Some(SchemaFormat::Json),
            "yaml" | "yml" => Some(SchemaFormat::Yaml),
            _ => None,
        }
    }
}

pub fn parse_definition(source: &str, format: SchemaFormat) -> Result<SchemaDefinition, CliError> {
    let definition = match format {
        SchemaFormat::Json => serde_json::from_str(source)?,
        SchemaFormat::Yaml => serde_yaml::from_str(source)?,
    };
    Ok(definition)
}

/// Reads a schema definition file and builds the catalog from it.
pub fn load_catalog(path: &str) -> Result<SchemaCatalog, CliError> {
    let format = SchemaFormat::from_path(Path::new(path))
        .ok_or_else(|| CliError::UnsupportedSchemaFormat(path.to_string()))?;

    let source = std::fs::read_to_string(path)?;
    let definition = parse_definition(&source, format)?;
    let catalog = SchemaCatalog::from_definition(&definition)?;

    info!("Loaded {} entities from {}", catalog.len(), path);
    Ok(catalog)
}
