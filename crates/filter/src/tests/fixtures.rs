use crate::apply_filter;
use model::schema::catalog::SchemaCatalog;
use planner::filter::FilterQuery;

pub const SCHEMA: &str = r#"
{
    "entities": [
        {
            "name": "User",
            "columns": [
                { "property": "name", "type": "varchar(255)" },
                { "property": "enable", "type": "boolean" },
                { "property": "status", "type": "enum" },
                { "property": "age", "type": "int4" },
                { "property": "tags", "type": "text[]" },
                { "property": "labels", "type": "jsonb", "array": true },
                { "property": "createdAt", "column": "created_at", "type": "timestamptz", "nullable": true },
                {
                    "property": "address",
                    "relation": { "entity": "Address", "local_column": "address_id" }
                },
                {
                    "property": "billing",
                    "relation": { "entity": "Address", "local_column": "billing_address_id" }
                },
                {
                    "property": "manager",
                    "relation": { "entity": "User", "local_column": "manager_id" }
                }
            ]
        },
        {
            "name": "Address",
            "table": "addresses",
            "columns": [
                { "property": "city", "type": "text" },
                { "property": "zip", "type": "varchar" },
                {
                    "property": "country",
                    "relation": { "entity": "Country", "local_column": "country_id" }
                }
            ]
        },
        {
            "name": "Country",
            "table": "countries",
            "columns": [
                { "property": "name", "type": "text" }
            ]
        }
    ]
}
"#;

pub fn catalog() -> SchemaCatalog {
    SchemaCatalog::from_json(SCHEMA).expect("fixture schema")
}

/// Compiles `query` against `User` into a fresh sink.
pub fn filter(query: &str) -> FilterQuery {
    let catalog = catalog();
    let mut sink = FilterQuery::new("user");
    apply_filter(&mut sink, &catalog, "User", query).expect("filter compiles");
    sink
}

pub fn keys(query: &FilterQuery) -> Vec<String> {
    query.bindings().iter().map(|b| b.key.clone()).collect()
}
