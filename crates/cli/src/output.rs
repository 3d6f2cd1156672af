use crate::error::CliError;
use model::core::value::Value;
use planner::{
    filter::{FilterQuery, PredicateSink},
    query::dialect::Dialect,
};
use serde_json::json;

pub fn render_json(query: &FilterQuery, dialect: &dyn Dialect) -> Result<String, CliError> {
    let (sql, params) = query.render(dialect);

    let bindings = query
        .bindings()
        .into_iter()
        .map(|b| json!({ "key": b.key, "value": b.value.to_json() }))
        .collect::<Vec<_>>();

    let report = json!({
        "dialect": dialect.name(),
        "sql": sql,
        "params": params.iter().map(Value::to_json).collect::<Vec<_>>(),
        "bindings": bindings,
        "joins": query.joins(),
    });

    serde_json::to_string_pretty(&report).map_err(CliError::JsonSerialize)
}

pub fn render_text(query: &FilterQuery, dialect: &dyn Dialect) -> String {
    let (sql, params) = query.render(dialect);

    let mut out = sql;
    for (i, param) in params.iter().enumerate() {
        out.push_str(&format!("\n  {} = {}", dialect.get_placeholder(i), param));
    }
    out
}
