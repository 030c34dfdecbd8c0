use crate::{error::Result, eval::Evaluator, sort::sort_rows};
use model::{records::row::RowData, registry::Registry};
use planner::{Predicate, compile, compile_ordering};
use seek_syntax::FormData;
use tracing::{debug, info};

/// Rows the predicate definitely holds for, in input order.
pub fn filter<'r>(rows: &'r [RowData], predicate: &Predicate) -> Vec<&'r RowData> {
    rows.iter().filter(|row| predicate.matches(row)).collect()
}

/// Compiles `form` and runs it over `rows`: filter, then sort by the form's
/// ordering.
pub fn execute<'r>(
    form: &FormData,
    registry: &Registry,
    rows: &'r [RowData],
) -> Result<Vec<&'r RowData>> {
    let predicate = compile(&form.sequence, registry)?;
    let keys = compile_ordering(&form.ordering, registry)?;

    let mut matched = filter(rows, &predicate);
    debug!("Sorting {} rows by {} keys", matched.len(), keys.len());
    sort_rows(&mut matched, &keys);

    info!("Matched {} of {} rows", matched.len(), rows.len());
    Ok(matched)
}
