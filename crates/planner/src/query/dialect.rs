//! Defines the `Dialect` trait for database-specific SQL syntax.

pub trait Dialect: Send + Sync {
    /// Wraps an identifier (like a table or column name) in the correct
    /// quotation marks for the dialect.
    ///
    /// - PostgreSQL uses double quotes: `"my_column"`
    /// - MySQL uses backticks: `` `my_column` ``
    fn quote_identifier(&self, ident: &str) -> String;

    /// Returns the placeholder for a parameterized query.
    ///
    /// - PostgreSQL uses `$1`, `$2`, etc.
    /// - MySQL uses `?`
    fn get_placeholder(&self, index: usize) -> String;

    /// The native case-insensitive LIKE operator, if the dialect has one.
    /// Without it both sides are lowered and compared with plain `LIKE`.
    fn native_ilike(&self) -> Option<&'static str>;

    /// Returns the name of the dialect (e.g., "PostgreSQL", "MySQL").
    fn name(&self) -> String;
}

#[derive(Debug, Clone)]
pub struct Postgres;

impl Dialect for Postgres {
    fn quote_identifier(&self, ident: &str) -> String {
        format!(r#""{}""#, ident.replace('"', r#""""#))
    }

    fn get_placeholder(&self, index: usize) -> String {
        // PostgreSQL uses $1, $2, etc.
        format!("${}", index + 1)
    }

    fn native_ilike(&self) -> Option<&'static str> {
        Some("ILIKE")
    }

    fn name(&self) -> String {
        "PostgreSQL".into()
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

    fn native_ilike(&self) -> Option<&'static str> {
        None
    }

    fn name(&self) -> String {
        "MySQL".into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quoting_escapes_quote_characters() {
        assert_eq!(Postgres.quote_identifier(r#"we"ird"#), r#""we""ird""#);
        assert_eq!(MySql.quote_identifier("we`ird"), "`we``ird`");
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(Postgres.get_placeholder(0), "$1");
        assert_eq!(MySql.get_placeholder(3), "?");
    }
}
