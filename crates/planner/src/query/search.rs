//! Lowers a compiled predicate and ordering into a parameterized SELECT.

use crate::{
    ordering::SortKey,
    predicate::{Predicate, TextMode},
    query::{
        ast::{
            common::{OrderDir, TableRef},
            expr::{BinaryOperator, Expr},
            select::Select,
        },
        builder::select::SelectBuilder,
        dialect::Dialect,
        ident,
        renderer::{Render, Renderer},
        value,
    },
    table_ref,
};
use model::{core::value::Value, ordering::Direction};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct SearchQuery {
    table: TableRef,
    predicate: Option<Predicate>,
    order: Vec<SortKey>,
    limit: Option<usize>,
}

impl SearchQuery {
    pub fn new(table: &str) -> Self {
        Self {
            table: table_ref!(table),
            predicate: None,
            order: Vec::new(),
            limit: None,
        }
    }

    pub fn filter(mut self, predicate: Predicate) -> Self {
        self.predicate = Some(predicate);
        self
    }

    pub fn order_by(mut self, keys: Vec<SortKey>) -> Self {
        self.order = keys;
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn to_select(&self) -> Select {
        let mut builder = SelectBuilder::new()
            .select(vec![])
            .from(self.table.clone(), None);

        if let Some(predicate) = &self.predicate {
            builder = builder.where_clause(predicate_expr(predicate));
        }

        for key in &self.order {
            let dir = match key.direction {
                Direction::Ascending => OrderDir::Asc,
                Direction::Descending => OrderDir::Desc,
            };
            builder = builder.order_by(ident(&key.column), Some(dir));
        }

        if let Some(limit) = self.limit {
            builder = builder.limit(value(Value::Int(limit as i64)));
        }

        builder.build()
    }

    /// Renders the query for `dialect`, returning SQL text and the values to
    /// bind, in placeholder order.
    pub fn render(&self, dialect: &dyn Dialect) -> (String, Vec<Value>) {
        let mut renderer = Renderer::new(dialect);
        self.to_select().render(&mut renderer);
        let (sql, params) = renderer.finish();
        debug!("Rendered {} query with {} params", dialect.name(), params.len());
        (sql, params)
    }
}

pub fn predicate_expr(predicate: &Predicate) -> Expr {
    match predicate {
        Predicate::Text {
            column,
            mode,
            pattern,
        } => {
            let escaped = escape_like(pattern);
            let pattern = match mode {
                TextMode::Contains => format!("%{escaped}%"),
                TextMode::Prefix => format!("{escaped}%"),
                TextMode::Exact => escaped,
            };
            Expr::ILike {
                expr: Box::new(ident(column)),
                pattern: Box::new(value(Value::String(pattern))),
            }
        }
        Predicate::Range { column, min, max } => Expr::Between {
            expr: Box::new(ident(column)),
            low: Box::new(value(min.clone())),
            high: Box::new(value(max.clone())),
        },
        Predicate::Equals { column, value: v } => {
            Expr::binary(ident(column), BinaryOperator::Eq, value(v.clone()))
        }
        Predicate::Not(inner) => Expr::Not(Box::new(predicate_expr(inner))),
        Predicate::And(l, r) => Expr::binary(predicate_expr(l), BinaryOperator::And, predicate_expr(r)),
        Predicate::Or(l, r) => Expr::binary(predicate_expr(l), BinaryOperator::Or, predicate_expr(r)),
    }
}

/// Escapes LIKE wildcards so user text only ever matches literally.
pub fn escape_like(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
