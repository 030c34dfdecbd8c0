use crate::query::{
    ast::{
        common::OrderDir,
        select::{FromClause, OrderByExpr, Select},
    },
    renderer::{Render, Renderer},
};

impl Render for Select {
    fn render(&self, r: &mut Renderer) {
        // 1. SELECT clause
        r.sql.push_str("SELECT ");
        if self.columns.is_empty() {
            r.sql.push('*');
        }
        for (i, col) in self.columns.iter().enumerate() {
            if i > 0 {
                r.sql.push_str(", ");
            }
            col.render(r);
        }

        // 2. FROM
        if let Some(from) = &self.from {
            r.sql.push(' ');
            from.render(r);
        }

        // 3. WHERE
        if let Some(where_clause) = &self.where_clause {
            r.sql.push_str(" WHERE ");
            where_clause.render(r);
        }

        // 4. ORDER BY
        if !self.order_by.is_empty() {
            r.sql.push_str(" ORDER BY ");
            for (i, order) in self.order_by.iter().enumerate() {
                if i > 0 {
                    r.sql.push_str(", ");
                }
                order.render(r);
            }
        }

        // 5. LIMIT
        if let Some(limit) = &self.limit {
            r.sql.push_str(" LIMIT ");
            limit.render(r);
        }
    }
}

impl Render for FromClause {
    fn render(&self, r: &mut Renderer) {
        r.sql.push_str("FROM ");
        r.render_table_ref(&self.table);
        if let Some(alias) = &self.alias {
            r.sql.push_str(" AS ");
            r.sql.push_str(&r.dialect.quote_identifier(alias));
        }
    }
}

impl Render for OrderByExpr {
    fn render(&self, r: &mut Renderer) {
        self.expr.render(r);
        if let Some(dir) = &self.direction {
            let dir_str = match dir {
                OrderDir::Asc => "ASC",
                OrderDir::Desc => "DESC",
            };
            r.sql.push(' ');
            r.sql.push_str(dir_str);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::query::{
        ast::{
            common::{OrderDir, TableRef},
            expr::{BinaryOperator, Expr},
            select::{FromClause, OrderByExpr, Select},
        },
        dialect::{MySql, Postgres},
        ident,
        renderer::{Render, Renderer},
        value,
    };
    use model::core::value::Value;

    fn books() -> Option<FromClause> {
        Some(FromClause {
            table: TableRef {
                schema: Some("library".to_string()),
                name: "books".to_string(),
            },
            alias: None,
        })
    }

    #[test]
    fn test_simple_select_postgres() {
        let ast = Select {
            columns: vec![ident("id"), ident("title")],
            from: books(),
            where_clause: Some(Expr::binary(
                ident("id"),
                BinaryOperator::Eq,
                value(Value::Int(123)),
            )),
            ..Default::default()
        };

        let mut renderer = Renderer::new(&Postgres);
        ast.render(&mut renderer);
        let (sql, params) = renderer.finish();

        assert_eq!(
            sql,
            r#"SELECT "id", "title" FROM "library"."books" WHERE ("id" = $1)"#
        );
        assert_eq!(params, vec![Value::Int(123)]);
    }

    #[test]
    fn test_wildcard_order_and_limit_mysql() {
        let ast = Select {
            from: books(),
            order_by: vec![
                OrderByExpr {
                    expr: ident("year"),
                    direction: Some(OrderDir::Desc),
                },
                OrderByExpr {
                    expr: ident("title"),
                    direction: None,
                },
            ],
            limit: Some(value(Value::Int(10))),
            ..Default::default()
        };

        let mut renderer = Renderer::new(&MySql);
        ast.render(&mut renderer);
        let (sql, params) = renderer.finish();

        assert_eq!(
            sql,
            "SELECT * FROM `library`.`books` ORDER BY `year` DESC, `title` LIMIT ?"
        );
        assert_eq!(params, vec![Value::Int(10)]);
    }
}
