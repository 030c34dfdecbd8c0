use crate::{
    ast::{join::JoinOp, term::Term},
    errors::{LastFieldRemovalError, StructuralError, SyntaxError},
};

/// An alternating list `[T0, J0, T1, ..., Jn-1, Tn]`.
///
/// Stored as the first term plus `(join, term)` pairs, so a sequence always
/// holds at least one term and exactly one join fewer than terms.
#[derive(Debug, Clone, PartialEq)]
pub struct Sequence {
    head: Box<Term>,
    tail: Vec<(JoinOp, Term)>,
}

impl Sequence {
    pub fn new(term: impl Into<Term>) -> Self {
        Self {
            head: Box::new(term.into()),
            tail: Vec::new(),
        }
    }

    /// Builds a sequence from parallel term and join lists, where `joins[i]`
    /// connects `terms[i]` and `terms[i + 1]`.
    pub fn from_parts(terms: Vec<Term>, joins: Vec<JoinOp>) -> Result<Self, StructuralError> {
        if terms.len() != joins.len() + 1 {
            return Err(StructuralError::ArityMismatch {
                terms: terms.len(),
                joins: joins.len(),
            });
        }

        let mut terms = terms.into_iter();
        let head = terms.next().ok_or(StructuralError::ArityMismatch {
            terms: 0,
            joins: joins.len(),
        })?;

        Ok(Self {
            head: Box::new(head),
            tail: joins.into_iter().zip(terms).collect(),
        })
    }

    /// Appends a term joined to the current last term.
    pub fn push(&mut self, join: JoinOp, term: impl Into<Term>) -> &mut Self {
        self.tail.push((join, term.into()));
        self
    }

    pub fn with(mut self, join: JoinOp, term: impl Into<Term>) -> Self {
        self.push(join, term);
        self
    }

    /// Number of terms.
    pub fn len(&self) -> usize {
        self.tail.len() + 1
    }

    pub fn head(&self) -> &Term {
        &self.head
    }

    pub fn tail(&self) -> &[(JoinOp, Term)] {
        &self.tail
    }

    pub fn term(&self, index: usize) -> Option<&Term> {
        match index {
            0 => Some(&self.head),
            i => self.tail.get(i - 1).map(|(_, t)| t),
        }
    }

    pub fn term_mut(&mut self, index: usize) -> Option<&mut Term> {
        match index {
            0 => Some(&mut self.head),
            i => self.tail.get_mut(i - 1).map(|(_, t)| t),
        }
    }

    /// The join following term `index`.
    pub fn join(&self, index: usize) -> Option<JoinOp> {
        self.tail.get(index).map(|(j, _)| *j)
    }

    pub fn terms(&self) -> impl Iterator<Item = &Term> {
        std::iter::once(self.head.as_ref()).chain(self.tail.iter().map(|(_, t)| t))
    }

    pub fn joins(&self) -> impl Iterator<Item = JoinOp> + '_ {
        self.tail.iter().map(|(j, _)| *j)
    }

    /// Inserts `term` at term index `position`, connected to its left
    /// neighbour by `join`. Valid positions are `1..=len`.
    pub fn add_term(
        &mut self,
        position: usize,
        term: impl Into<Term>,
        join: JoinOp,
    ) -> Result<(), StructuralError> {
        if position == 0 || position > self.len() {
            return Err(StructuralError::InvalidPosition {
                position,
                len: self.len(),
            });
        }
        self.tail.insert(position - 1, (join, term.into()));
        Ok(())
    }

    /// Removes the term at `index` together with one adjacent join: its left
    /// join, or for the first term the join to its right.
    pub fn remove_term(&mut self, index: usize) -> Result<Term, SyntaxError> {
        if index >= self.len() {
            return Err(StructuralError::TermOutOfRange {
                index,
                len: self.len(),
            }
            .into());
        }
        if self.len() == 1 {
            return Err(LastFieldRemovalError.into());
        }

        if index == 0 {
            let (_, next) = self.tail.remove(0);
            let removed = std::mem::replace(self.head.as_mut(), next);
            Ok(removed)
        } else {
            let (_, removed) = self.tail.remove(index - 1);
            Ok(removed)
        }
    }

    /// Replaces the join following term `index`.
    pub fn set_join(&mut self, index: usize, join: JoinOp) -> Result<(), StructuralError> {
        let len = self.len();
        match self.tail.get_mut(index) {
            Some((slot, _)) => {
                *slot = join;
                Ok(())
            }
            None => Err(StructuralError::JoinOutOfRange { index, len }),
        }
    }

    pub fn into_parts(self) -> (Vec<Term>, Vec<JoinOp>) {
        let mut terms = Vec::with_capacity(self.len());
        let mut joins = Vec::with_capacity(self.tail.len());
        terms.push(*self.head);
        for (join, term) in self.tail {
            joins.push(join);
            terms.push(term);
        }
        (terms, joins)
    }
}
