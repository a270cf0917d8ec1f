//! SVG chart rendering for dataset visualization.
//!
//! Self-contained, viewBox-scaled SVG documents with `<title>` elements for
//! accessibility. The palette follows the web client's chart styling.

mod chart;
mod element;
mod format;
mod pie;
mod style;

pub use chart::{BarChart, BarSeries, GroupedBarChart};
pub use element::{Bar, SvgElement};
pub use pie::PieChart;
pub use style::{ChartColor, MAXIMUM_COLOR, MINIMUM_COLOR, palette_color};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
