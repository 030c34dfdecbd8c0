use crate::query::{
    ast::expr::{BinaryOp, BinaryOperator, Expr, Ident},
    renderer::{Render, Renderer},
};

impl Render for Expr {
    fn render(&self, r: &mut Renderer) {
        match self {
            Expr::Identifier(ident) => ident.render(r),
            Expr::Value(val) => r.add_param(val.clone()),
            Expr::BinaryOp(op) => op.render(r),
            Expr::Not(inner) => {
                r.sql.push_str("NOT ");
                // Only bare identifiers and values lack their own parentheses.
                let wrap = matches!(inner.as_ref(), Expr::Identifier(_) | Expr::Value(_));
                if wrap {
                    r.sql.push('(');
                }
                inner.render(r);
                if wrap {
                    r.sql.push(')');
                }
            }
            Expr::Between { expr, low, high } => {
                r.sql.push('(');
                expr.render(r);
                r.sql.push_str(" BETWEEN ");
                low.render(r);
                r.sql.push_str(" AND ");
                high.render(r);
                r.sql.push(')');
            }
            Expr::ILike { expr, pattern } => {
                r.sql.push('(');
                match r.dialect.native_ilike() {
                    Some(op) => {
                        expr.render(r);
                        r.sql.push(' ');
                        r.sql.push_str(op);
                        r.sql.push(' ');
                        pattern.render(r);
                    }
                    None => {
                        r.sql.push_str("LOWER(");
                        expr.render(r);
                        r.sql.push_str(") LIKE LOWER(");
                        pattern.render(r);
                        r.sql.push(')');
                    }
                }
                r.sql.push(')');
            }
        }
    }
}

impl Render for Ident {
    fn render(&self, r: &mut Renderer) {
        if let Some(qualifier) = &self.qualifier {
            r.sql.push_str(&r.dialect.quote_identifier(qualifier));
            r.sql.push('.');
        }
        r.sql.push_str(&r.dialect.quote_identifier(&self.name));
    }
}

impl Render for BinaryOp {
    fn render(&self, r: &mut Renderer) {
        r.sql.push('(');
        self.left.render(r);

        let op_str = match self.op {
            BinaryOperator::Eq => " = ",
            BinaryOperator::And => " AND ",
            BinaryOperator::Or => " OR ",
        };
        r.sql.push_str(op_str);

        self.right.render(r);
        r.sql.push(')');
    }
}
