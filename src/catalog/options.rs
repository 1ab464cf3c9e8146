//! Filter vocabulary derived from the loaded dataset.
//!
//! The selects in the filter bar are not a fixed domain vocabulary; they
//! offer whatever values the currently loaded rows carry. That makes the
//! options a pure view over the dataset, recomputed whenever it changes,
//! with explicit truncation caps instead of an implicit slice.

use serde::Serialize;

use crate::models::PropertyRecord;

/// Dropdowns stay scannable: areas and developers cap at 10 entries, unit
/// types and statuses at 8. First-seen dataset order, blanks dropped.
pub const MAX_AREA_OPTIONS: usize = 10;
pub const MAX_TYPE_OPTIONS: usize = 8;
pub const MAX_DEVELOPER_OPTIONS: usize = 10;
pub const MAX_STATUS_OPTIONS: usize = 8;

/// The categorical options the filter bar can offer for the current rows.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FilterOptions {
    pub areas: Vec<String>,
    pub unit_types: Vec<String>,
    pub developers: Vec<String>,
    pub statuses: Vec<String>,
}

impl FilterOptions {
    pub fn derive(records: &[PropertyRecord]) -> Self {
        Self {
            areas: unique_values(records, |r| r.area_name.clone(), MAX_AREA_OPTIONS),
            unit_types: unique_values(records, |r| r.normalized_type.clone(), MAX_TYPE_OPTIONS),
            developers: unique_values(records, |r| r.developer_name.clone(), MAX_DEVELOPER_OPTIONS),
            statuses: unique_values(records, |r| r.status.clone(), MAX_STATUS_OPTIONS),
        }
    }
}

fn unique_values<F>(records: &[PropertyRecord], field: F, cap: usize) -> Vec<String>
where
    F: Fn(&PropertyRecord) -> String,
{
    let mut values: Vec<String> = Vec::new();
    for record in records {
        let value = field(record);
        let value = value.trim();
        if value.is_empty() {
            continue;
        }
        if !values.iter().any(|v| v == value) {
            values.push(value.to_string());
            if values.len() == cap {
                break;
            }
        }
    }
    values
}
