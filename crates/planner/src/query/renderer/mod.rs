//! SQL text generation. Values never appear inline: each one becomes a
//! dialect placeholder and is collected for binding.

use crate::query::{ast::common::TableRef, dialect::Dialect};
use model::core::value::Value;

pub mod expr;
pub mod select;

pub trait Render {
    fn render(&self, renderer: &mut Renderer);
}

pub struct Renderer<'a> {
    pub sql: String,
    /// Bind values, in placeholder order.
    pub params: Vec<Value>,
    pub dialect: &'a dyn Dialect,
}

impl<'a> Renderer<'a> {
    pub fn new(dialect: &'a dyn Dialect) -> Self {
        Self {
            sql: String::new(),
            params: Vec::new(),
            dialect,
        }
    }

    pub fn finish(self) -> (String, Vec<Value>) {
        (self.sql, self.params)
    }

    /// Appends the placeholder for `value` and records it for binding.
    pub fn add_param(&mut self, value: Value) {
        let placeholder = self.dialect.get_placeholder(self.params.len());
        self.sql.push_str(&placeholder);
        self.params.push(value);
    }

    pub fn render_table_ref(&mut self, table: &TableRef) {
        if let Some(schema) = &table.schema {
            self.sql.push_str(&self.dialect.quote_identifier(schema));
            self.sql.push('.');
        }
        self.sql.push_str(&self.dialect.quote_identifier(&table.name));
    }
}
