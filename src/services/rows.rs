// src/services/rows.rs

//! Row assembly: joins status records with the location registry.

use crate::models::{DisplayRow, RowAssembly, RowFailure, StatusRecord, classify_average};
use crate::services::LocationRegistry;

/// Build display rows for the given records, in input order.
///
/// Records whose location id is not in the registry are dropped and
/// reported in `RowAssembly::failures`; the rest of the list is unaffected.
pub fn build_rows(registry: &LocationRegistry, records: &[StatusRecord]) -> RowAssembly {
    let mut assembly = RowAssembly {
        rows: Vec::with_capacity(records.len()),
        failures: Vec::new(),
    };

    for (position, record) in records.iter().enumerate() {
        let entry = match registry.lookup(record.location_id) {
            Ok(entry) => entry,
            Err(error) => {
                log::warn!(
                    "Dropping status record #{} ({:?}): {}",
                    position,
                    record.name,
                    error
                );
                assembly.failures.push(RowFailure {
                    position,
                    location_id: record.location_id,
                    error,
                });
                continue;
            }
        };

        let tier = classify_average(record.status_average);
        assembly.rows.push(DisplayRow {
            location_id: entry.id,
            name: entry.name.clone(),
            image_ref: entry.image_ref.clone(),
            max_capacity: record.max_capacity,
            tier,
            label: tier.label(),
            style: tier.style(),
            record: record.clone(),
        });
    }

    assembly
}
