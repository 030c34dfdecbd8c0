use crate::error::PlannerError;
use model::{
    ordering::{Direction, OrderingSpec},
    registry::Registry,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortKey {
    pub column: String,
    pub direction: Direction,
}

/// Resolves the used slots of `spec` to backend columns, in slot order.
pub fn compile_ordering(
    spec: &OrderingSpec,
    registry: &Registry,
) -> Result<Vec<SortKey>, PlannerError> {
    spec.slots()
        .iter()
        .filter_map(|slot| slot.field.as_deref().map(|label| (label, slot.direction)))
        .map(|(label, direction)| {
            let field = registry.orderable_by_label(label)?;
            Ok(SortKey {
                column: field.column.clone(),
                direction,
            })
        })
        .collect()
}
