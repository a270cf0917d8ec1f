//! Projection of summary statistics into chart series.
//!
//! Pure and deterministic: the same summary always maps to the same bundle,
//! and slice order follows the distribution's first-seen category order.

use serde::Serialize;

use crate::dataset::Summary;

/// Fixed category labels for the parameter charts, in display order.
pub const PARAMETER_CATEGORIES: [&str; 3] = ["Flowrate", "Pressure", "Temperature"];

/// A single labeled value in a series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
}

impl SeriesPoint {
    #[must_use]
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Minimum and Maximum series over [`PARAMETER_CATEGORIES`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeSeries {
    pub minimum: Vec<SeriesPoint>,
    pub maximum: Vec<SeriesPoint>,
}

/// Everything the charting surface consumes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartBundle {
    /// Pie: one slice per distinct equipment type, value = count.
    pub type_distribution: Vec<SeriesPoint>,
    /// Bar: average value per parameter, fixed category order.
    pub averages: Vec<SeriesPoint>,
    /// Grouped bar: min/max per parameter.
    pub ranges: RangeSeries,
}

/// Map summary aggregates into chart series.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn project(summary: &Summary) -> ChartBundle {
    let type_distribution = summary
        .type_distribution
        .iter()
        .map(|(kind, count)| SeriesPoint::new(kind.clone(), *count as f64))
        .collect();

    let averages = vec![
        SeriesPoint::new(PARAMETER_CATEGORIES[0], summary.avg_flowrate),
        SeriesPoint::new(PARAMETER_CATEGORIES[1], summary.avg_pressure),
        SeriesPoint::new(PARAMETER_CATEGORIES[2], summary.avg_temperature),
    ];

    let ranges = RangeSeries {
        minimum: vec![
            SeriesPoint::new(PARAMETER_CATEGORIES[0], summary.min_flowrate),
            SeriesPoint::new(PARAMETER_CATEGORIES[1], summary.min_pressure),
            SeriesPoint::new(PARAMETER_CATEGORIES[2], summary.min_temperature),
        ],
        maximum: vec![
            SeriesPoint::new(PARAMETER_CATEGORIES[0], summary.max_flowrate),
            SeriesPoint::new(PARAMETER_CATEGORIES[1], summary.max_pressure),
            SeriesPoint::new(PARAMETER_CATEGORIES[2], summary.max_temperature),
        ],
    };

    ChartBundle {
        type_distribution,
        averages,
        ranges,
    }
}

#[cfg(test)]
#[path = "series_tests.rs"]
mod tests;
