use serde::Serialize;

use crate::chart::ChartBundle;
use crate::dataset::{DatasetMeta, EquipmentRecord, PageView, SortDirective, Summary};
use crate::error::Result;

pub struct JsonFormatter;

#[derive(Serialize)]
struct TablePage<'a> {
    page: usize,
    total_pages: usize,
    total_rows: usize,
    first_index: usize,
    last_index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    sort: Option<SortDirective>,
    rows: &'a [EquipmentRecord],
}

#[derive(Serialize)]
struct SummaryOutput<'a> {
    filename: &'a str,
    summary: &'a Summary,
}

impl JsonFormatter {
    /// Serialize one table page.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn format_table(view: &PageView, sort: Option<SortDirective>) -> Result<String> {
        let output = TablePage {
            page: view.page,
            total_pages: view.total_pages,
            total_rows: view.total_rows,
            first_index: view.first_index,
            last_index: view.last_index,
            sort,
            rows: &view.rows,
        };
        Ok(serde_json::to_string_pretty(&output)?)
    }

    /// Serialize summary statistics.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn format_summary(filename: &str, summary: &Summary) -> Result<String> {
        Ok(serde_json::to_string_pretty(&SummaryOutput {
            filename,
            summary,
        })?)
    }

    /// Serialize the recent-datasets list.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn format_history(datasets: &[DatasetMeta]) -> Result<String> {
        Ok(serde_json::to_string_pretty(datasets)?)
    }

    /// Serialize the chart series bundle.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn format_charts(bundle: &ChartBundle) -> Result<String> {
        Ok(serde_json::to_string_pretty(bundle)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
