//! Human-readable rendering of a sequence, e.g.
//! `Year in 1999–2000 or (Title contains "rust" and Language eq English)`.

use crate::ast::{
    condition::{Condition, ConditionValue},
    sequence::Sequence,
    term::Term,
};
use model::{core::value::Value, fields::FieldKind, registry::Registry};

pub fn describe(sequence: &Sequence, registry: &Registry) -> String {
    let mut out = String::new();
    write_sequence(&mut out, sequence, registry);
    out
}

fn write_sequence(out: &mut String, sequence: &Sequence, registry: &Registry) {
    write_term(out, sequence.head(), registry);
    for (join, term) in sequence.tail() {
        out.push(' ');
        out.push_str(join.token());
        out.push(' ');
        write_term(out, term, registry);
    }
}

fn write_term(out: &mut String, term: &Term, registry: &Registry) {
    match term {
        Term::Condition(condition) => out.push_str(&describe_condition(condition, registry)),
        Term::Group(group) => {
            out.push('(');
            write_sequence(out, group, registry);
            out.push(')');
        }
    }
}

fn describe_condition(condition: &Condition, registry: &Registry) -> String {
    let kind = registry.by_label(&condition.field).ok().map(|f| &f.kind);

    let value = match (&condition.value, kind) {
        (ConditionValue::Text(text), _) => format!("\"{text}\""),
        (ConditionValue::Range(min, max), _) => format!("{}–{}", bound(min), bound(max)),
        (ConditionValue::Choice(key), Some(kind)) => {
            kind.choice_label(key).unwrap_or(key).to_string()
        }
        (ConditionValue::Identifier(id), Some(FieldKind::Autocomplete { lookup })) => {
            lookup.resolve_label(id).unwrap_or_else(|_| id.clone())
        }
        (ConditionValue::Choice(raw) | ConditionValue::Identifier(raw), _) => raw.clone(),
    };

    format!("{} {} {}", condition.field, condition.operator, value)
}

fn bound(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::join::JoinOp;
    use model::{
        fields::{Choice, FieldDefinition, Operator},
        lookup::{LookupEntry, StaticLookup},
    };
    use std::sync::Arc;

    fn registry() -> Registry {
        let authors = StaticLookup::new("Author", vec![LookupEntry::new("7", "John Smith")]);
        Registry::builder()
            .register(FieldDefinition::string("Title", "title"))
            .register(FieldDefinition::range("Year", "year"))
            .register(FieldDefinition::value_list(
                "Language",
                "language",
                vec![Choice::new("english", "English")],
            ))
            .register(FieldDefinition::autocomplete("Author", "author_id", Arc::new(authors)))
            .build()
            .unwrap()
    }

    #[test]
    fn test_describe_nested() {
        let seq = Sequence::new(Condition::range(
            "Year",
            Operator::InRange,
            Value::Int(1999),
            Value::String("2000".into()),
        ))
        .with(
            JoinOp::Or,
            Sequence::new(Condition::text("Title", Operator::Contains, "rust"))
                .with(JoinOp::And, Condition::choice("Language", Operator::Equal, "english")),
        );

        assert_eq!(
            describe(&seq, &registry()),
            "Year in 1999–2000 or (Title contains \"rust\" and Language eq English)"
        );
    }

    #[test]
    fn test_describe_resolves_identifiers() {
        let reg = registry();
        let seq = Sequence::new(Condition::identifier("Author", Operator::NotEqual, "7"));
        assert_eq!(describe(&seq, &reg), "Author neq John Smith");

        let seq = Sequence::new(Condition::identifier("Author", Operator::Equal, "99"));
        assert_eq!(describe(&seq, &reg), "Author eq 99");
    }
}
