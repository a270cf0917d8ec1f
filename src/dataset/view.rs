//! Sort and pagination engine for the equipment table.
//!
//! `view` is a pure transform: it never mutates its input and returns the same
//! page for the same arguments, so repeated invocations from re-renders are safe.

use std::cmp::Ordering;

use serde::Serialize;

use super::types::{Column, EquipmentRecord};

/// Rows per table page, matching the web client.
pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Indicator glyph for table headers.
    #[must_use]
    pub const fn arrow(self) -> &'static str {
        match self {
            Self::Ascending => "↑",
            Self::Descending => "↓",
        }
    }
}

/// Transient sort state of the table. Not persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SortDirective {
    pub key: Column,
    pub direction: SortDirection,
}

impl SortDirective {
    #[must_use]
    pub const fn ascending(key: Column) -> Self {
        Self {
            key,
            direction: SortDirection::Ascending,
        }
    }

    /// Header-click rule: re-selecting the active key flips the direction,
    /// selecting a new key resets to ascending.
    #[must_use]
    pub fn toggle(current: Option<Self>, key: Column) -> Self {
        match current {
            Some(active) if active.key == key => Self {
                key,
                direction: active.direction.toggled(),
            },
            _ => Self::ascending(key),
        }
    }
}

/// One ordered, paged view over a row set.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PageView {
    pub rows: Vec<EquipmentRecord>,
    /// Current page, 1-based. 0 when the row set is empty.
    pub page: usize,
    pub total_pages: usize,
    /// 1-based index of the first shown row. 0 when empty.
    pub first_index: usize,
    /// 1-based index of the last shown row. 0 when empty.
    pub last_index: usize,
    pub total_rows: usize,
}

/// Produce an ordered, paged view of `rows`.
///
/// Sorting is stable: equal-key rows retain their prior relative order, which
/// keeps pagination reproducible across repeated sorts. The requested page is
/// clamped to `[1, total_pages]`. An empty row set (or a zero page size) yields
/// zero pages and an empty view.
#[must_use]
pub fn view(
    rows: &[EquipmentRecord],
    sort: Option<SortDirective>,
    page: usize,
    page_size: usize,
) -> PageView {
    if rows.is_empty() || page_size == 0 {
        return PageView::default();
    }

    let mut sorted = rows.to_vec();
    if let Some(directive) = sort {
        sorted.sort_by(|a, b| {
            let ord = compare(a, b, directive.key);
            match directive.direction {
                SortDirection::Ascending => ord,
                SortDirection::Descending => ord.reverse(),
            }
        });
    }

    let total_rows = sorted.len();
    let total_pages = total_rows.div_ceil(page_size);
    let page = page.clamp(1, total_pages);
    let first = (page - 1) * page_size;
    let last = (first + page_size).min(total_rows);

    PageView {
        rows: sorted[first..last].to_vec(),
        page,
        total_pages,
        first_index: first + 1,
        last_index: last,
        total_rows,
    }
}

/// Ascending comparison on one column. Numeric columns use `total_cmp` so NaN
/// orders deterministically; string columns compare case-insensitively.
fn compare(a: &EquipmentRecord, b: &EquipmentRecord, key: Column) -> Ordering {
    match key {
        Column::Name => compare_str(&a.name, &b.name),
        Column::Type => compare_str(&a.kind, &b.kind),
        Column::Flowrate => a.flowrate.total_cmp(&b.flowrate),
        Column::Pressure => a.pressure.total_cmp(&b.pressure),
        Column::Temperature => a.temperature.total_cmp(&b.temperature),
    }
}

fn compare_str(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

#[cfg(test)]
#[path = "view_tests.rs"]
mod tests;
