use crate::ast::{condition::Condition, sequence::Sequence};

/// One operand of a sequence: a condition, or a parenthesised group.
#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    Condition(Condition),
    Group(Sequence),
}

impl Term {
    pub fn group(sequence: Sequence) -> Self {
        Term::Group(sequence)
    }

    pub fn as_condition(&self) -> Option<&Condition> {
        match self {
            Term::Condition(c) => Some(c),
            Term::Group(_) => None,
        }
    }

    pub fn as_group(&self) -> Option<&Sequence> {
        match self {
            Term::Condition(_) => None,
            Term::Group(s) => Some(s),
        }
    }
}

impl From<Condition> for Term {
    fn from(condition: Condition) -> Self {
        Term::Condition(condition)
    }
}

impl From<Sequence> for Term {
    fn from(sequence: Sequence) -> Self {
        Term::Group(sequence)
    }
}
