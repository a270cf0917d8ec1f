//! Bar chart types: single-series and grouped bars.

use std::fmt::Write;

use crate::chart::SeriesPoint;

use super::element::{Bar, SvgElement};
use super::format::{format_value, html_escape};
use super::style::{ChartColor, palette_color};

const TEXT_COLOR: &str = "#333333";
const MUTED_COLOR: &str = "#777777";

fn open_svg(output: &mut String, width: f64, height: f64, title: &str) {
    // viewBox for responsive scaling
    let _ = writeln!(
        output,
        r#"<svg viewBox="0 0 {width} {height}" xmlns="http://www.w3.org/2000/svg" role="img">"#
    );
    let escaped_title = html_escape(title);
    let _ = writeln!(output, r"    <title>{escaped_title}</title>");
}

fn empty_state(output: &mut String, width: f64, height: f64) {
    let _ = writeln!(
        output,
        r#"    <text x="{}" y="{}" text-anchor="middle" fill="{MUTED_COLOR}" font-size="14">No data available</text>"#,
        width / 2.0,
        height / 2.0
    );
    output.push_str("</svg>");
}

/// Vertical bar chart with automatic scaling and palette-cycled bar colors.
#[derive(Debug)]
pub struct BarChart {
    pub title: String,
    pub data: Vec<SeriesPoint>,
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    pub show_values: bool,
}

impl BarChart {
    #[must_use]
    pub fn new(title: impl Into<String>, data: Vec<SeriesPoint>) -> Self {
        Self {
            title: title.into(),
            data,
            width: 400.0,
            height: 240.0,
            padding: 40.0,
            show_values: true,
        }
    }

    #[must_use]
    pub const fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

impl SvgElement for BarChart {
    #[allow(clippy::cast_precision_loss)]
    fn render(&self) -> String {
        let mut output = String::new();
        open_svg(&mut output, self.width, self.height, &self.title);

        if self.data.is_empty() {
            empty_state(&mut output, self.width, self.height);
            return output;
        }

        let chart_width = self.padding.mul_add(-2.0, self.width);
        let chart_height = self.padding.mul_add(-2.0, self.height);
        let max_value = self
            .data
            .iter()
            .map(|d| d.value)
            .fold(0.0_f64, f64::max)
            .max(1.0);

        let bar_count = self.data.len();
        let gap_ratio = 0.2;
        let total_gap = chart_width * gap_ratio;
        let bar_width = (chart_width - total_gap) / bar_count as f64;
        let gap = total_gap / (bar_count + 1) as f64;
        let base_offset = self.padding + gap;

        for (i, point) in self.data.iter().enumerate() {
            let x = (bar_width + gap).mul_add(i as f64, base_offset);
            let bar_height = (point.value / max_value) * chart_height;
            let y = self.padding + chart_height - bar_height;

            let bar = Bar {
                x,
                y,
                width: bar_width,
                height: bar_height,
                color: palette_color(i),
                label: point.label.clone(),
                value: point.value,
            };
            let _ = writeln!(output, "    {}", bar.render());

            if self.show_values {
                let _ = writeln!(
                    output,
                    r#"    <text x="{}" y="{}" text-anchor="middle" fill="{TEXT_COLOR}" font-size="10">{}</text>"#,
                    x + bar_width / 2.0,
                    y - 4.0,
                    format_value(point.value)
                );
            }

            let escaped_label = html_escape(&point.label);
            let _ = writeln!(
                output,
                r#"    <text x="{}" y="{}" text-anchor="middle" fill="{MUTED_COLOR}" font-size="10">{escaped_label}</text>"#,
                x + bar_width / 2.0,
                self.height - 8.0
            );
        }

        output.push_str("</svg>");
        output
    }
}

/// One named series of a grouped bar chart.
#[derive(Debug, Clone)]
pub struct BarSeries {
    pub name: String,
    pub values: Vec<f64>,
    pub color: ChartColor,
}

/// Grouped bar chart: one bar group per category, one bar per series.
#[derive(Debug)]
pub struct GroupedBarChart {
    pub title: String,
    pub categories: Vec<String>,
    pub series: Vec<BarSeries>,
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    pub show_values: bool,
}

impl GroupedBarChart {
    #[must_use]
    pub fn new(title: impl Into<String>, categories: Vec<String>, series: Vec<BarSeries>) -> Self {
        Self {
            title: title.into(),
            categories,
            series,
            width: 520.0,
            height: 280.0,
            padding: 48.0,
            show_values: true,
        }
    }

    fn max_value(&self) -> f64 {
        self.series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .fold(0.0_f64, f64::max)
            .max(1.0)
    }

    #[allow(clippy::cast_precision_loss)]
    fn render_legend(&self, output: &mut String) {
        let mut x = self.padding;
        for series in &self.series {
            let color = series.color.to_css();
            let escaped_name = html_escape(&series.name);
            let _ = writeln!(
                output,
                r#"    <rect x="{x}" y="10" width="10" height="10" fill="{color}" rx="2"/>"#
            );
            let _ = writeln!(
                output,
                r#"    <text x="{}" y="19" fill="{TEXT_COLOR}" font-size="11">{escaped_name}</text>"#,
                x + 14.0
            );
            x += 14.0 + (series.name.chars().count() as f64).mul_add(7.0, 16.0);
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn render_group(&self, output: &mut String, group: usize, geometry: &GroupGeometry) {
        let group_x = geometry.group_width.mul_add(group as f64, self.padding);
        let bar_span = geometry.bar_width + geometry.bar_gap;

        for (s, series) in self.series.iter().enumerate() {
            let value = series.values.get(group).copied().unwrap_or(0.0);
            let bar_height = (value / geometry.max_value) * geometry.chart_height;
            let x = bar_span.mul_add(s as f64, group_x + geometry.group_inset);
            let y = self.padding + geometry.chart_height - bar_height;

            let bar = Bar {
                x,
                y,
                width: geometry.bar_width,
                height: bar_height,
                color: series.color.clone(),
                label: format!("{} {}", series.name, self.categories[group]),
                value,
            };
            let _ = writeln!(output, "    {}", bar.render());

            if self.show_values {
                let _ = writeln!(
                    output,
                    r#"    <text x="{}" y="{}" text-anchor="middle" fill="{TEXT_COLOR}" font-size="9">{}</text>"#,
                    x + geometry.bar_width / 2.0,
                    y - 3.0,
                    format_value(value)
                );
            }
        }

        let escaped_label = html_escape(&self.categories[group]);
        let _ = writeln!(
            output,
            r#"    <text x="{}" y="{}" text-anchor="middle" fill="{MUTED_COLOR}" font-size="10">{escaped_label}</text>"#,
            group_x + geometry.group_width / 2.0,
            self.height - 8.0
        );
    }
}

struct GroupGeometry {
    chart_height: f64,
    group_width: f64,
    group_inset: f64,
    bar_width: f64,
    bar_gap: f64,
    max_value: f64,
}

impl SvgElement for GroupedBarChart {
    #[allow(clippy::cast_precision_loss)]
    fn render(&self) -> String {
        let mut output = String::new();
        open_svg(&mut output, self.width, self.height, &self.title);

        if self.categories.is_empty() || self.series.is_empty() {
            empty_state(&mut output, self.width, self.height);
            return output;
        }

        self.render_legend(&mut output);

        let chart_width = self.padding.mul_add(-2.0, self.width);
        let chart_height = self.padding.mul_add(-2.0, self.height);
        let group_width = chart_width / self.categories.len() as f64;
        let bar_gap = 4.0;
        let series_count = self.series.len() as f64;
        // Bars fill 70% of the group, centered
        let bars_span = group_width * 0.7;
        let bar_width = (bars_span - bar_gap * (series_count - 1.0)) / series_count;
        let group_inset = (group_width - bars_span) / 2.0;

        let geometry = GroupGeometry {
            chart_height,
            group_width,
            group_inset,
            bar_width,
            bar_gap,
            max_value: self.max_value(),
        };

        for group in 0..self.categories.len() {
            self.render_group(&mut output, group, &geometry);
        }

        output.push_str("</svg>");
        output
    }
}

#[cfg(test)]
#[path = "chart_tests.rs"]
mod tests;
