use std::fmt::Write;

use crate::dataset::{Column, DatasetMeta, PageView, SortDirective, Summary};

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            verbose,
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    /// Render one table page with sort indicators and the paging footer.
    #[must_use]
    pub fn format_table(&self, view: &PageView, sort: Option<SortDirective>) -> String {
        let mut output = String::new();

        let title = self.colorize("Equipment Data", ansi::BOLD);
        let _ = writeln!(output, "{title}");

        if view.total_rows == 0 {
            output.push_str("No entries to display.\n");
            return output;
        }

        let _ = writeln!(
            output,
            "Showing {}-{} of {} entries",
            view.first_index, view.last_index, view.total_rows
        );
        output.push('\n');

        let headers = header_labels(sort);
        let widths = column_widths(&headers, view);

        let mut header_row = String::new();
        for (i, (header, width)) in headers.iter().zip(&widths).enumerate() {
            if i > 0 {
                header_row.push_str("  ");
            }
            let _ = write!(header_row, "{}", pad(header, *width, Column::ALL[i]));
        }
        let _ = writeln!(output, "{}", self.colorize(&header_row, ansi::CYAN));

        let mut rule = String::new();
        for (i, width) in widths.iter().enumerate() {
            if i > 0 {
                rule.push_str("  ");
            }
            rule.push_str(&"-".repeat(*width));
        }
        let _ = writeln!(output, "{rule}");

        for row in &view.rows {
            let cells = row_cells(row);
            let mut line = String::new();
            for (i, (cell, width)) in cells.iter().zip(&widths).enumerate() {
                if i > 0 {
                    line.push_str("  ");
                }
                let _ = write!(line, "{}", pad(cell, *width, Column::ALL[i]));
            }
            let _ = writeln!(output, "{}", line.trim_end());
        }

        output.push('\n');
        let _ = writeln!(output, "Page {} of {}", view.page, view.total_pages);

        output
    }

    /// Render summary cards and the type distribution list.
    #[must_use]
    pub fn format_summary(&self, filename: &str, summary: &Summary) -> String {
        let mut output = String::new();

        let title = self.colorize("Summary Statistics", ansi::BOLD);
        let _ = writeln!(output, "{title}");
        let _ = writeln!(output, "Dataset: {filename}");
        output.push('\n');

        let _ = writeln!(output, "Total Equipment:  {}", summary.total_count);
        let _ = writeln!(output, "Avg Flowrate:     {:.2}", summary.avg_flowrate);
        let _ = writeln!(output, "Avg Pressure:     {:.2}", summary.avg_pressure);
        let _ = writeln!(output, "Avg Temperature:  {:.2}", summary.avg_temperature);

        if self.verbose >= 1 {
            output.push('\n');
            let _ = writeln!(output, "Parameter ranges (min .. max):");
            let _ = writeln!(
                output,
                "  Flowrate:     {:.2} .. {:.2}",
                summary.min_flowrate, summary.max_flowrate
            );
            let _ = writeln!(
                output,
                "  Pressure:     {:.2} .. {:.2}",
                summary.min_pressure, summary.max_pressure
            );
            let _ = writeln!(
                output,
                "  Temperature:  {:.2} .. {:.2}",
                summary.min_temperature, summary.max_temperature
            );
        }

        output.push('\n');
        let _ = writeln!(output, "Equipment Type Distribution:");
        for (kind, count) in &summary.type_distribution {
            let units = if *count == 1 { "unit" } else { "units" };
            let line = format!("  {kind:<16} {count} {units}");
            let _ = writeln!(output, "{}", self.colorize(&line, ansi::GREEN));
        }

        output
    }

    /// Render the recent-datasets list.
    #[must_use]
    pub fn format_history(&self, datasets: &[DatasetMeta], current_id: Option<u64>) -> String {
        let mut output = String::new();

        let title = self.colorize("Recent Datasets (Last 5)", ansi::BOLD);
        let _ = writeln!(output, "{title}");

        if datasets.is_empty() {
            output.push_str("No datasets uploaded yet. Upload a CSV to get started!\n");
            return output;
        }

        for dataset in datasets {
            let marker = if current_id == Some(dataset.id) {
                self.colorize("*", ansi::YELLOW)
            } else {
                " ".to_string()
            };
            let _ = writeln!(
                output,
                "{marker} [{}] {}  {}  {} equipment items",
                dataset.id,
                dataset.filename,
                dataset.upload_date.format("%Y-%m-%d %H:%M"),
                dataset.summary.total_count
            );
        }

        output
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

/// Column headers with the sort indicator on the active column.
fn header_labels(sort: Option<SortDirective>) -> Vec<String> {
    Column::ALL
        .iter()
        .map(|column| {
            sort.filter(|d| d.key == *column).map_or_else(
                || column.label().to_string(),
                |d| format!("{} {}", column.label(), d.direction.arrow()),
            )
        })
        .collect()
}

fn row_cells(row: &crate::dataset::EquipmentRecord) -> Vec<String> {
    vec![
        row.name.clone(),
        row.kind.clone(),
        format!("{:.2}", row.flowrate),
        format!("{:.2}", row.pressure),
        format!("{:.2}", row.temperature),
    ]
}

fn column_widths(headers: &[String], view: &PageView) -> Vec<usize> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &view.rows {
        for (i, cell) in row_cells(row).iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }
    widths
}

/// Left-align text columns, right-align numeric ones.
fn pad(text: &str, width: usize, column: Column) -> String {
    let len = text.chars().count();
    let fill = " ".repeat(width.saturating_sub(len));
    if column.is_numeric() {
        format!("{fill}{text}")
    } else {
        format!("{text}{fill}")
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
