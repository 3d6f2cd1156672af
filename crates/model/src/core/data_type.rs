use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::{borrow::Cow, collections::HashMap, fmt};

/// Scalar type of a column, resolved once from its declared SQL type name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ScalarType {
    Text,
    Integer,
    Float,
    Decimal,
    Boolean,
    Date,
    Time,
    Timestamp,
    Uuid,
    Enum,
    Json,
    Binary,
    Custom(String),
}

lazy_static! {
    static ref TYPE_NAME_MAP: HashMap<&'static str, ScalarType> = build_type_name_map();
}

impl ScalarType {
    /// Resolves a declared SQL type name (`varchar`, `int4`, `timestamptz`, ...).
    ///
    /// Length and precision modifiers such as `varchar(255)` are ignored.
    /// Unknown names are kept as `Custom` so user-defined types (enums,
    /// domains) still compare with the relational operators.
    pub fn from_type_name(type_name: &str) -> Self {
        let normalized = Self::normalize_type_name(type_name);
        TYPE_NAME_MAP
            .get(normalized.as_str())
            .cloned()
            .unwrap_or_else(|| ScalarType::Custom(type_name.trim().to_string()))
    }

    /// Splits an array type name into its element type name.
    ///
    /// Both the `text[]` spelling and the catalog's `_text` spelling are
    /// recognised.
    pub fn array_element_name(type_name: &str) -> Option<&str> {
        let trimmed = type_name.trim();
        let base = if let Some(base) = trimmed.strip_suffix("[]") {
            base
        } else if let Some(base) = trimmed.strip_prefix('_') {
            base
        } else {
            return None;
        };

        let base = base.trim();
        if base.is_empty() { None } else { Some(base) }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, ScalarType::Text)
    }

    pub fn is_json(&self) -> bool {
        matches!(self, ScalarType::Json)
    }

    pub fn name(&self) -> Cow<'_, str> {
        match self {
            ScalarType::Text => Cow::Borrowed("TEXT"),
            ScalarType::Integer => Cow::Borrowed("INTEGER"),
            ScalarType::Float => Cow::Borrowed("FLOAT"),
            ScalarType::Decimal => Cow::Borrowed("DECIMAL"),
            ScalarType::Boolean => Cow::Borrowed("BOOLEAN"),
            ScalarType::Date => Cow::Borrowed("DATE"),
            ScalarType::Time => Cow::Borrowed("TIME"),
            ScalarType::Timestamp => Cow::Borrowed("TIMESTAMP"),
            ScalarType::Uuid => Cow::Borrowed("UUID"),
            ScalarType::Enum => Cow::Borrowed("ENUM"),
            ScalarType::Json => Cow::Borrowed("JSON"),
            ScalarType::Binary => Cow::Borrowed("BINARY"),
            ScalarType::Custom(name) => Cow::Borrowed(name),
        }
    }

    fn normalize_type_name(type_name: &str) -> String {
        let upper = type_name.trim().to_uppercase();
        match upper.find('(') {
            Some(idx) => upper[..idx].trim_end().to_string(),
            None => upper,
        }
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

fn build_type_name_map() -> HashMap<&'static str, ScalarType> {
    use ScalarType::*;

    let entries = [
        ("TEXT", Text),
        ("TINYTEXT", Text),
        ("MEDIUMTEXT", Text),
        ("LONGTEXT", Text),
        ("VARCHAR", Text),
        ("CHARACTER VARYING", Text),
        ("CHAR", Text),
        ("CHARACTER", Text),
        ("BPCHAR", Text),
        ("NAME", Text),
        ("CITEXT", Text),
        ("STRING", Text),
        ("SMALLINT", Integer),
        ("TINYINT", Integer),
        ("MEDIUMINT", Integer),
        ("INT", Integer),
        ("INT2", Integer),
        ("INT4", Integer),
        ("INT8", Integer),
        ("INTEGER", Integer),
        ("BIGINT", Integer),
        ("SERIAL", Integer),
        ("BIGSERIAL", Integer),
        ("REAL", Float),
        ("FLOAT", Float),
        ("FLOAT4", Float),
        ("FLOAT8", Float),
        ("DOUBLE", Float),
        ("DOUBLE PRECISION", Float),
        ("DECIMAL", Decimal),
        ("NUMERIC", Decimal),
        ("BOOLEAN", Boolean),
        ("BOOL", Boolean),
        ("DATE", Date),
        ("TIME", Time),
        ("TIMETZ", Time),
        ("TIME WITHOUT TIME ZONE", Time),
        ("TIME WITH TIME ZONE", Time),
        ("DATETIME", Timestamp),
        ("TIMESTAMP", Timestamp),
        ("TIMESTAMPTZ", Timestamp),
        ("TIMESTAMP WITHOUT TIME ZONE", Timestamp),
        ("TIMESTAMP WITH TIME ZONE", Timestamp),
        ("UUID", Uuid),
        ("ENUM", Enum),
        ("JSON", Json),
        ("JSONB", Json),
        ("SIMPLE-JSON", Json),
        ("BYTEA", Binary),
        ("BLOB", Binary),
        ("BINARY", Binary),
        ("VARBINARY", Binary),
    ];

    let mut map = HashMap::new();
    for (name, scalar_type) in entries {
        map.insert(name, scalar_type);
    }
    map
}
