//! Defines the Abstract Syntax Tree (AST) for a SELECT query.

use crate::query::ast::{
    common::{OrderDir, TableRef},
    expr::Expr,
};

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Select {
    /// Returned columns; empty selects `*`.
    pub columns: Vec<Expr>,

    /// e.g., `FROM books`
    pub from: Option<FromClause>,

    pub where_clause: Option<Expr>,

    pub order_by: Vec<OrderByExpr>,

    pub limit: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FromClause {
    pub table: TableRef,
    pub alias: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderByExpr {
    pub expr: Expr,
    pub direction: Option<OrderDir>,
}
