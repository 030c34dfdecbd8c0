//! Mutation primitives keep the alternating shape of a sequence

use model::fields::Operator;
use seek_syntax::{
    Condition, JoinOp, LastFieldRemovalError, Sequence, StructuralError, SyntaxError, Term,
};

fn title(text: &str) -> Term {
    Condition::text("Title", Operator::Contains, text).into()
}

fn assert_shape(seq: &Sequence) {
    assert_eq!(seq.joins().count(), seq.terms().count() - 1);
    let (terms, joins) = seq.clone().into_parts();
    assert_eq!(Sequence::from_parts(terms, joins).unwrap(), *seq);
}

#[test]
fn test_edit_session_keeps_invariant() {
    let mut seq = Sequence::new(title("a"));
    assert_shape(&seq);

    seq.add_term(1, title("b"), JoinOp::Or).unwrap();
    seq.add_term(2, Term::group(Sequence::new(title("c"))), JoinOp::And).unwrap();
    seq.add_term(1, title("d"), JoinOp::And).unwrap();
    assert_shape(&seq);
    assert_eq!(seq.len(), 4);

    seq.set_join(2, JoinOp::Or).unwrap();
    assert_eq!(seq.join(2), Some(JoinOp::Or));

    seq.remove_term(0).unwrap();
    assert_shape(&seq);
    seq.remove_term(2).unwrap();
    assert_shape(&seq);
    assert_eq!(seq.len(), 2);
}

#[test]
fn test_failed_mutations_leave_sequence_unchanged() {
    let mut seq = Sequence::new(title("a")).with(JoinOp::Or, title("b"));
    let before = seq.clone();

    assert!(matches!(
        seq.add_term(0, title("x"), JoinOp::And),
        Err(StructuralError::InvalidPosition { .. })
    ));
    assert!(matches!(
        seq.set_join(1, JoinOp::And),
        Err(StructuralError::JoinOutOfRange { index: 1, len: 2 })
    ));
    assert!(matches!(
        seq.remove_term(5),
        Err(SyntaxError::Structural(StructuralError::TermOutOfRange { .. }))
    ));
    assert_eq!(seq, before);
}

#[test]
fn test_last_term_guard() {
    let mut seq = Sequence::new(title("only"));
    assert!(matches!(
        seq.remove_term(0),
        Err(SyntaxError::LastFieldRemoval(LastFieldRemovalError))
    ));
    assert_eq!(seq, Sequence::new(title("only")));
}

#[test]
fn test_nested_group_is_editable_in_place() {
    let mut seq = Sequence::new(title("a")).with(JoinOp::And, Term::group(Sequence::new(title("b"))));

    if let Some(Term::Group(group)) = seq.term_mut(1) {
        group.push(JoinOp::Or, title("c"));
    }

    let group = seq.term(1).and_then(Term::as_group).unwrap();
    assert_eq!(group.len(), 2);
    assert_eq!(group.join(0), Some(JoinOp::Or));
}
