//! Defines the AST for SQL expressions.

use model::core::value::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A column or table identifier, e.g., `books` or `books.title`.
    Identifier(Ident),

    /// A literal value, always bound as a parameter.
    Value(Value),

    /// A binary operation, e.g., `column = $1` or `a AND b`.
    BinaryOp(Box<BinaryOp>),

    /// `NOT (expr)`
    Not(Box<Expr>),

    /// Inclusive `expr BETWEEN low AND high`.
    Between {
        expr: Box<Expr>,
        low: Box<Expr>,
        high: Box<Expr>,
    },

    /// Case-insensitive pattern match. The pattern is bound as a parameter
    /// and must already carry its wildcards and escapes.
    ILike { expr: Box<Expr>, pattern: Box<Expr> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    pub qualifier: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryOp {
    pub left: Expr,
    pub op: BinaryOperator,
    pub right: Expr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    // Comparison
    Eq, // =

    // Logical
    And,
    Or,
}

impl Expr {
    pub fn binary(left: Expr, op: BinaryOperator, right: Expr) -> Self {
        Expr::BinaryOp(Box::new(BinaryOp { left, op, right }))
    }
}
