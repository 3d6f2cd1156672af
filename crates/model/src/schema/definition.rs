//! Serializable schema definitions, as written in JSON or YAML schema files.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchemaDefinition {
    pub entities: Vec<EntityDefinition>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityDefinition {
    pub name: String,
    /// Table identifier. Defaults to the lowercased entity name.
    #[serde(default)]
    pub table: Option<String>,
    #[serde(default)]
    pub columns: Vec<ColumnDefinition>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnDefinition {
    pub property: String,
    /// Physical column name. Defaults to the property name.
    #[serde(default)]
    pub column: Option<String>,
    #[serde(rename = "type", default)]
    pub data_type: Option<String>,
    #[serde(default)]
    pub nullable: bool,
    /// Marks a column holding a list: a native array, or a JSON array when
    /// the declared type is `json`/`jsonb`.
    #[serde(default)]
    pub array: bool,
    #[serde(default)]
    pub relation: Option<RelationDefinition>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelationDefinition {
    pub entity: String,
    pub local_column: String,
    #[serde(default = "default_foreign_column")]
    pub foreign_column: String,
}

fn default_foreign_column() -> String {
    "id".to_string()
}

impl EntityDefinition {
    pub fn table_name(&self) -> String {
        self.table
            .clone()
            .unwrap_or_else(|| self.name.to_lowercase())
    }
}
