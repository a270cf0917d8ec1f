//! Client-side summary aggregation.
//!
//! The backend ships a precomputed [`Summary`] with every dataset; this module
//! re-derives it from the rows so summaries can be cross-checked (and tested)
//! without a round trip.

use indexmap::IndexMap;

use crate::error::{EquiviewError, Result};

use super::types::{EquipmentRecord, Summary};

/// Running extrema and sum for one numeric parameter.
#[derive(Debug, Clone, Copy)]
struct Accumulator {
    sum: f64,
    min: f64,
    max: f64,
}

impl Accumulator {
    const fn new() -> Self {
        Self {
            sum: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    fn observe(&mut self, value: f64) {
        self.sum += value;
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    fn mean(self, count: usize) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        {
            self.sum / count as f64
        }
    }
}

/// Derive summary statistics from a row set.
///
/// # Errors
///
/// Returns [`EquiviewError::InsufficientData`] for an empty row set: an average
/// over zero rows is a caller error, not a value to silently turn into NaN.
pub fn aggregate(rows: &[EquipmentRecord]) -> Result<Summary> {
    if rows.is_empty() {
        return Err(EquiviewError::InsufficientData);
    }

    let mut flowrate = Accumulator::new();
    let mut pressure = Accumulator::new();
    let mut temperature = Accumulator::new();
    let mut type_distribution: IndexMap<String, u64> = IndexMap::new();

    for row in rows {
        flowrate.observe(row.flowrate);
        pressure.observe(row.pressure);
        temperature.observe(row.temperature);
        *type_distribution.entry(row.kind.clone()).or_insert(0) += 1;
    }

    let count = rows.len();
    Ok(Summary {
        total_count: count as u64,
        avg_flowrate: flowrate.mean(count),
        avg_pressure: pressure.mean(count),
        avg_temperature: temperature.mean(count),
        min_flowrate: flowrate.min,
        max_flowrate: flowrate.max,
        min_pressure: pressure.min,
        max_pressure: pressure.max,
        min_temperature: temperature.min,
        max_temperature: temperature.max,
        type_distribution,
    })
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
