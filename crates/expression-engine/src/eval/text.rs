use model::core::value::Value;
use planner::TextMode;

/// Case-insensitive text match. Non-text values are matched on their
/// textual form; NULL is unknown.
pub fn matches(value: &Value, mode: TextMode, pattern: &str) -> Option<bool> {
    let text = value.as_string()?.to_lowercase();
    let pattern = pattern.to_lowercase();

    Some(match mode {
        TextMode::Contains => text.contains(&pattern),
        TextMode::Exact => text == pattern,
        TextMode::Prefix => text.starts_with(&pattern),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modes_ignore_case() {
        let title = Value::String("The Rust Book".into());
        assert_eq!(matches(&title, TextMode::Contains, "RUST"), Some(true));
        assert_eq!(matches(&title, TextMode::Prefix, "the"), Some(true));
        assert_eq!(matches(&title, TextMode::Prefix, "rust"), Some(false));
        assert_eq!(matches(&title, TextMode::Exact, "the rust book"), Some(true));
        assert_eq!(matches(&title, TextMode::Exact, "the rust"), Some(false));
    }

    #[test]
    fn test_wildcards_are_literal() {
        let v = Value::String("50% off".into());
        assert_eq!(matches(&v, TextMode::Contains, "%"), Some(true));
        assert_eq!(matches(&Value::String("abc".into()), TextMode::Contains, "_"), Some(false));
        assert_eq!(matches(&Value::Null, TextMode::Contains, "a"), None);
        assert_eq!(matches(&Value::Int(1999), TextMode::Prefix, "19"), Some(true));
    }
}
