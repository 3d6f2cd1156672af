//! Defines the `Dialect` trait for database-specific SQL syntax.

use crate::query::{
    ast::expr::Expr,
    renderer::{Render, Renderer},
};

pub trait Dialect: Send + Sync {
    /// Wraps an identifier (like a table or column name) in the correct
    /// quotation marks for the dialect.
    ///
    /// - PostgreSQL and SQLite use double quotes: `"my_column"`
    /// - MySQL uses backticks: `` `my_column` ``
    fn quote_identifier(&self, ident: &str) -> String;

    /// Returns the placeholder for a parameterized query.
    ///
    /// - PostgreSQL uses `$1`, `$2`, etc.
    /// - MySQL and SQLite use `?`
    fn get_placeholder(&self, index: usize) -> String;

    /// Returns the name of the dialect (e.g., "PostgreSQL", "MySQL").
    fn name(&self) -> String;

    /// Renders membership of `element` in the native array column `array`.
    fn write_array_contains(&self, r: &mut Renderer, array: &Expr, element: &Expr);

    /// Renders containment of the JSON-encoded `candidate` in the JSON array `target`.
    fn write_json_contains(&self, r: &mut Renderer, target: &Expr, candidate: &Expr);
}

#[derive(Debug, Clone)]
pub struct Postgres;

impl Dialect for Postgres {
    fn quote_identifier(&self, ident: &str) -> String {
        format!(r#""{}""#, ident.replace('"', "\"\""))
    }

    fn get_placeholder(&self, index: usize) -> String {
        // PostgreSQL uses $1, $2, etc.
        format!("${}", index + 1)
    }

    fn name(&self) -> String {
        "PostgreSQL".into()
    }

    fn write_array_contains(&self, r: &mut Renderer, array: &Expr, element: &Expr) {
        element.render(r);
        r.sql.push_str(" = ANY(");
        array.render(r);
        r.sql.push(')');
    }

    // The candidate is bound as text and cast, so drivers see a text parameter.
    fn write_json_contains(&self, r: &mut Renderer, target: &Expr, candidate: &Expr) {
        target.render(r);
        r.sql.push_str(" @> ");
        candidate.render(r);
        r.sql.push_str("::text::jsonb");
    }
}

#[derive(Debug, Clone)]
pub struct MySql;

impl Dialect for MySql {
    fn quote_identifier(&self, ident: &str) -> String {
        format!("`{}`", ident.replace('`', "``"))
    }

    fn get_placeholder(&self, _index: usize) -> String {
        // MySQL uses ?
        "?".into()
    }

    fn name(&self) -> String {
        "MySQL".into()
    }

    // MySQL has no native arrays; array columns are stored as JSON.
    fn write_array_contains(&self, r: &mut Renderer, array: &Expr, element: &Expr) {
        element.render(r);
        r.sql.push_str(" MEMBER OF(");
        array.render(r);
        r.sql.push(')');
    }

    fn write_json_contains(&self, r: &mut Renderer, target: &Expr, candidate: &Expr) {
        r.sql.push_str("JSON_CONTAINS(");
        target.render(r);
        r.sql.push_str(", ");
        candidate.render(r);
        r.sql.push(')');
    }
}

#[derive(Debug, Clone)]
pub struct Sqlite;

impl Dialect for Sqlite {
    fn quote_identifier(&self, ident: &str) -> String {
        format!(r#""{}""#, ident.replace('"', "\"\""))
    }

    fn get_placeholder(&self, _index: usize) -> String {
        "?".into()
    }

    fn name(&self) -> String {
        "SQLite".into()
    }

    fn write_array_contains(&self, r: &mut Renderer, array: &Expr, element: &Expr) {
        element.render(r);
        r.sql.push_str(" IN (SELECT value FROM json_each(");
        array.render(r);
        r.sql.push_str("))");
    }

    fn write_json_contains(&self, r: &mut Renderer, target: &Expr, candidate: &Expr) {
        r.sql.push_str("EXISTS (SELECT 1 FROM json_each(");
        target.render(r);
        r.sql.push_str(") WHERE json_each.value = json_extract(");
        candidate.render(r);
        r.sql.push_str(", '$'))");
    }
}

/// Looks up a dialect by the names accepted on the command line.
pub fn dialect_by_name(name: &str) -> Option<Box<dyn Dialect>> {
    match name.to_ascii_lowercase().as_str() {
        "postgres" | "postgresql" | "pg" => Some(Box::new(Postgres)),
        "mysql" | "mariadb" => Some(Box::new(MySql)),
        "sqlite" | "sqlite3" => Some(Box::new(Sqlite)),
        _ => None,
    }
}
