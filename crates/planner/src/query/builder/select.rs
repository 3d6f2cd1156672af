//! Typestate builder for [`Select`]: the projection comes first, then the root
//! table, then joins, the filter and paging in any order.

use crate::query::ast::{
    common::{OrderDir, TableRef},
    expr::Expr,
    select::{FromClause, JoinClause, OrderByExpr, Select},
};
use std::marker::PhantomData;

/// Nothing added yet.
#[derive(Debug, Clone)]
pub struct Empty;

/// Projection set, root table missing.
#[derive(Debug, Clone)]
pub struct Projected;

/// Root table set; the query is complete enough to build.
#[derive(Debug, Clone)]
pub struct Sourced;

#[derive(Debug, Clone)]
pub struct SelectBuilder<State> {
    ast: Select,
    _state: PhantomData<State>,
}

impl<State> SelectBuilder<State> {
    fn advance<Next>(self) -> SelectBuilder<Next> {
        SelectBuilder {
            ast: self.ast,
            _state: PhantomData,
        }
    }
}

impl SelectBuilder<Empty> {
    pub fn new() -> Self {
        Self {
            ast: Select::default(),
            _state: PhantomData,
        }
    }

    pub fn select(mut self, columns: Vec<Expr>) -> SelectBuilder<Projected> {
        self.ast.columns = columns;
        self.advance()
    }
}

impl SelectBuilder<Projected> {
    pub fn from(mut self, table: TableRef, alias: Option<&str>) -> SelectBuilder<Sourced> {
        self.ast.from = Some(FromClause {
            table,
            alias: alias.map(String::from),
        });
        self.advance()
    }
}

impl SelectBuilder<Sourced> {
    /// Appends `LEFT JOIN table AS alias ON on`.
    pub fn left_join(mut self, table: TableRef, alias: Option<&str>, on: Expr) -> Self {
        self.ast.joins.push(JoinClause {
            table,
            alias: alias.map(String::from),
            on,
        });
        self
    }

    pub fn filter(mut self, condition: Expr) -> Self {
        self.ast.where_clause = Some(condition);
        self
    }

    pub fn order_by(mut self, expr: Expr, direction: Option<OrderDir>) -> Self {
        self.ast.order_by.push(OrderByExpr { expr, direction });
        self
    }

    pub fn limit(mut self, limit: Expr) -> Self {
        self.ast.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: Expr) -> Self {
        self.ast.offset = Some(offset);
        self
    }

    pub fn build(self) -> Select {
        self.ast
    }
}
