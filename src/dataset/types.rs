//! Wire types shared with the visualizer backend.
//!
//! The backend serializes rows with display-style keys (`"Equipment Name"`,
//! `"Flowrate"`). Those labels are confined to serde renames here; everything
//! downstream works with the fixed-shape [`EquipmentRecord`] and addresses
//! columns through the [`Column`] enum.

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A table column of the equipment dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    Name,
    Type,
    Flowrate,
    Pressure,
    Temperature,
}

impl Column {
    pub const ALL: [Self; 5] = [
        Self::Name,
        Self::Type,
        Self::Flowrate,
        Self::Pressure,
        Self::Temperature,
    ];

    /// Human-readable column header.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Equipment Name",
            Self::Type => "Type",
            Self::Flowrate => "Flowrate",
            Self::Pressure => "Pressure",
            Self::Temperature => "Temperature",
        }
    }

    /// Numeric columns compare numerically; the rest compare as strings.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Flowrate | Self::Pressure | Self::Temperature)
    }
}

/// One row of equipment parameters. Immutable once received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentRecord {
    #[serde(rename = "Equipment Name")]
    pub name: String,

    #[serde(rename = "Type")]
    pub kind: String,

    #[serde(rename = "Flowrate")]
    pub flowrate: f64,

    #[serde(rename = "Pressure")]
    pub pressure: f64,

    #[serde(rename = "Temperature")]
    pub temperature: f64,
}

/// Summary statistics computed by the backend, re-derivable client-side
/// via [`crate::dataset::aggregate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub total_count: u64,
    pub avg_flowrate: f64,
    pub avg_pressure: f64,
    pub avg_temperature: f64,
    pub min_flowrate: f64,
    pub max_flowrate: f64,
    pub min_pressure: f64,
    pub max_pressure: f64,
    pub min_temperature: f64,
    pub max_temperature: f64,
    /// Category → count, iterated in first-seen order for reproducible charts.
    pub type_distribution: IndexMap<String, u64>,
}

/// Full dataset as returned by `GET /datasets/{id}/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub id: u64,
    pub filename: String,
    pub upload_date: DateTime<Utc>,
    #[serde(rename = "data")]
    pub rows: Vec<EquipmentRecord>,
    pub summary: Summary,
}

/// Lightweight dataset entry from the list endpoint (no rows).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetMeta {
    pub id: u64,
    pub filename: String,
    pub upload_date: DateTime<Utc>,
    pub summary: Summary,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;
