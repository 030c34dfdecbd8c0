use std::fmt;

/// Location of a term: the term index at each nesting level, from the root
/// sequence down. The empty path denotes the root sequence itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TermPath {
    pub indices: Vec<usize>,
}

impl TermPath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn new(indices: Vec<usize>) -> Self {
        Self { indices }
    }

    pub fn child(&self, index: usize) -> Self {
        let mut indices = self.indices.clone();
        indices.push(index);
        Self { indices }
    }

    pub fn is_root(&self) -> bool {
        self.indices.is_empty()
    }
}

impl fmt::Display for TermPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return write!(f, "root");
        }
        let segments: Vec<String> = self.indices.iter().map(|i| i.to_string()).collect();
        write!(f, "{}", segments.join("."))
    }
}
