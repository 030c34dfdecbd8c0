use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of ordering slots a fresh form offers.
pub const DEFAULT_ORDERING_SLOTS: usize = 3;

/// Upper bound on slot indices accepted from submitted forms.
pub const MAX_ORDERING_SLOTS: usize = 32;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

impl Direction {
    /// The flag a direction travels as: `"0"` ascending, `"1"` descending.
    pub fn flag(&self) -> &'static str {
        match self {
            Direction::Ascending => "0",
            Direction::Descending => "1",
        }
    }

    pub fn from_flag(flag: &str) -> Option<Direction> {
        match flag {
            "" | "0" => Some(Direction::Ascending),
            "1" => Some(Direction::Descending),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Ascending => write!(f, "ascending"),
            Direction::Descending => write!(f, "descending"),
        }
    }
}

/// A field results can be sorted by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderableField {
    pub label: String,
    pub column: String,
}

impl OrderableField {
    pub fn new(label: &str, column: &str) -> Self {
        Self {
            label: label.to_string(),
            column: column.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderingSlot {
    /// Orderable field label; `None` leaves the slot unused.
    pub field: Option<String>,
    pub direction: Direction,
}

/// Positional list of ordering slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderingSpec {
    slots: Vec<OrderingSlot>,
}

impl OrderingSpec {
    pub fn new(slot_count: usize) -> Self {
        Self {
            slots: vec![OrderingSlot::default(); slot_count],
        }
    }

    pub fn from_slots(slots: Vec<OrderingSlot>) -> Self {
        Self { slots }
    }

    pub fn slots(&self) -> &[OrderingSlot] {
        &self.slots
    }

    pub fn slot(&self, index: usize) -> Option<&OrderingSlot> {
        self.slots.get(index)
    }

    /// Sets a slot, growing the spec with empty slots when `index` is past
    /// the end.
    pub fn set(&mut self, index: usize, field: Option<&str>, direction: Direction) {
        if index >= self.slots.len() {
            self.slots.resize(index + 1, OrderingSlot::default());
        }
        self.slots[index] = OrderingSlot {
            field: field.map(str::to_string),
            direction,
        };
    }

    /// True when no slot selects a field.
    pub fn is_unused(&self) -> bool {
        self.slots.iter().all(|s| s.field.is_none())
    }
}

impl Default for OrderingSpec {
    fn default() -> Self {
        Self::new(DEFAULT_ORDERING_SLOTS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_empty_slots() {
        let spec = OrderingSpec::default();
        assert_eq!(spec.slots().len(), DEFAULT_ORDERING_SLOTS);
        assert!(spec.is_unused());
    }

    #[test]
    fn test_set_grows() {
        let mut spec = OrderingSpec::new(1);
        spec.set(2, Some("Year"), Direction::Descending);
        assert_eq!(spec.slots().len(), 3);
        assert_eq!(spec.slot(2).unwrap().field.as_deref(), Some("Year"));
        assert_eq!(spec.slot(1).unwrap(), &OrderingSlot::default());
    }

    #[test]
    fn test_direction_flags() {
        assert_eq!(Direction::from_flag("1"), Some(Direction::Descending));
        assert_eq!(Direction::from_flag(""), Some(Direction::Ascending));
        assert_eq!(Direction::from_flag("desc"), None);
        assert_eq!(Direction::Descending.flag(), "1");
    }
}
