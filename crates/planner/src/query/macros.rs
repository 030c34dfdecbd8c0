#[macro_export]
macro_rules! table_ref {
    ($name:expr) => {
        $crate::query::ast::common::TableRef {
            schema: None,
            name: $name.to_string(),
        }
    };
}
