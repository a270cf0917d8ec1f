//! SVG styling: the chart color palette.

/// Categorical palette, matching the web client's chart styling.
pub const PALETTE: [&str; 6] = [
    "#ff6384", "#36a2eb", "#ffce56", "#4bc0c0", "#9966ff", "#ff9f40",
];

/// Series color for "Minimum" in range charts.
pub const MINIMUM_COLOR: &str = "#4bc0c0";

/// Series color for "Maximum" in range charts.
pub const MAXIMUM_COLOR: &str = "#ff6384";

/// A concrete hex color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartColor(String);

impl ChartColor {
    #[must_use]
    pub fn hex(color: &str) -> Self {
        Self(color.to_string())
    }

    /// Convert to a CSS value string.
    #[must_use]
    pub fn to_css(&self) -> &str {
        &self.0
    }
}

/// Palette color for the n-th series item, cycling past the palette end.
#[must_use]
pub fn palette_color(index: usize) -> ChartColor {
    ChartColor::hex(PALETTE[index % PALETTE.len()])
}

#[cfg(test)]
#[path = "style_tests.rs"]
mod tests;
