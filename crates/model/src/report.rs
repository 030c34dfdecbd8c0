//! Report types and the gate deciding which of them a caller may pick.

use crate::{
    errors::{AuthorizationError, GateError, NotFoundError},
    registry::Registry,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportType {
    pub label: String,
    #[serde(default)]
    pub restricted: bool,
}

impl ReportType {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            restricted: false,
        }
    }

    pub fn restricted(label: &str) -> Self {
        Self {
            label: label.to_string(),
            restricted: true,
        }
    }
}

/// Report types the caller may see, in registry order.
pub fn visible_report_types(registry: &Registry, privileged: bool) -> Vec<&ReportType> {
    registry
        .report_types()
        .iter()
        .filter(|r| privileged || !r.restricted)
        .collect()
}

pub fn select_report_type<'r>(
    label: &str,
    registry: &'r Registry,
    privileged: bool,
) -> Result<&'r ReportType, GateError> {
    let report_type = registry
        .report_types()
        .iter()
        .find(|r| r.label == label)
        .ok_or_else(|| NotFoundError::ReportType(label.to_string()))?;

    if report_type.restricted && !privileged {
        warn!("Rejected restricted report type '{}'", label);
        return Err(AuthorizationError {
            report_type: label.to_string(),
        }
        .into());
    }

    Ok(report_type)
}
