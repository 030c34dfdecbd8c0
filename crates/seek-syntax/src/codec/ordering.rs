//! Ordering slots travel as flat string parameters:
//! `_ms_ordering_<i>` holds the orderable field label (empty for none) and
//! `_ms_ordering_<i>_dir` holds the direction flag.

use crate::errors::{StructuralError, SyntaxError};
use model::{
    ordering::{DEFAULT_ORDERING_SLOTS, Direction, MAX_ORDERING_SLOTS, OrderingSlot, OrderingSpec},
    registry::Registry,
};
use std::collections::BTreeMap;

pub const ORDERING_PREFIX: &str = "_ms_ordering_";
pub const DIRECTION_SUFFIX: &str = "_dir";
pub const REPORT_TYPE_PARAM: &str = "_ms_report_type";

pub fn field_param(index: usize) -> String {
    format!("{ORDERING_PREFIX}{index}")
}

pub fn direction_param(index: usize) -> String {
    format!("{ORDERING_PREFIX}{index}{DIRECTION_SUFFIX}")
}

pub fn encode_ordering(spec: &OrderingSpec) -> BTreeMap<String, String> {
    let mut params = BTreeMap::new();
    for (index, slot) in spec.slots().iter().enumerate() {
        params.insert(field_param(index), slot.field.clone().unwrap_or_default());
        params.insert(direction_param(index), slot.direction.flag().to_string());
    }
    params
}

/// Rebuilds an ordering from its parameters. Every referenced field must be
/// orderable in `registry`; absent slots come back empty and ascending.
pub fn decode_ordering(
    params: &BTreeMap<String, String>,
    registry: &Registry,
) -> Result<OrderingSpec, SyntaxError> {
    let mut highest = None;
    for key in params.keys() {
        if let Some(index) = slot_index(key)? {
            highest = highest.max(Some(index));
        }
    }

    let slot_count = highest.map_or(0, |i| i + 1).max(DEFAULT_ORDERING_SLOTS);
    let mut slots = Vec::with_capacity(slot_count);

    for index in 0..slot_count {
        let field = match params.get(&field_param(index)).map(String::as_str) {
            None | Some("") => None,
            Some(label) => Some(registry.orderable_by_label(label)?.label.clone()),
        };

        let key = direction_param(index);
        let direction = match params.get(&key) {
            None => Direction::default(),
            Some(flag) => Direction::from_flag(flag).ok_or_else(|| {
                StructuralError::InvalidParameter {
                    key: key.clone(),
                    reason: format!("'{flag}' is not a direction flag"),
                }
            })?,
        };

        slots.push(OrderingSlot { field, direction });
    }

    Ok(OrderingSpec::from_slots(slots))
}

/// Slot index named by an ordering parameter key, `None` for other keys.
fn slot_index(key: &str) -> Result<Option<usize>, StructuralError> {
    let Some(rest) = key.strip_prefix(ORDERING_PREFIX) else {
        return Ok(None);
    };
    let digits = rest.strip_suffix(DIRECTION_SUFFIX).unwrap_or(rest);
    let invalid = |reason: String| StructuralError::InvalidParameter {
        key: key.to_string(),
        reason,
    };

    let index = digits
        .parse::<usize>()
        .map_err(|_| invalid("expected a slot index".to_string()))?;
    if index >= MAX_ORDERING_SLOTS {
        return Err(invalid(format!(
            "slot index must be below {MAX_ORDERING_SLOTS}"
        )));
    }
    Ok(Some(index))
}
