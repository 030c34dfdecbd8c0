use crate::ast::{condition::Condition, path::TermPath, sequence::Sequence, term::Term};
use std::ops::ControlFlow;

/// Visitor for depth-first traversal of a sequence, conditions in order.
pub trait TermVisitor {
    type Break;

    fn visit_condition(
        &mut self,
        path: &TermPath,
        condition: &Condition,
    ) -> ControlFlow<Self::Break>;

    fn enter_group(&mut self, _path: &TermPath, _group: &Sequence) -> ControlFlow<Self::Break> {
        ControlFlow::Continue(())
    }
}

pub fn walk<V: TermVisitor>(sequence: &Sequence, visitor: &mut V) -> ControlFlow<V::Break> {
    walk_at(sequence, &TermPath::root(), visitor)
}

fn walk_at<V: TermVisitor>(
    sequence: &Sequence,
    at: &TermPath,
    visitor: &mut V,
) -> ControlFlow<V::Break> {
    for (index, term) in sequence.terms().enumerate() {
        let path = at.child(index);
        match term {
            Term::Condition(condition) => visitor.visit_condition(&path, condition)?,
            Term::Group(group) => {
                visitor.enter_group(&path, group)?;
                walk_at(group, &path, visitor)?;
            }
        }
    }
    ControlFlow::Continue(())
}
