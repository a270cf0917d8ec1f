//! Pie chart for the equipment type distribution.

use std::f64::consts::TAU;
use std::fmt::Write;

use crate::chart::SeriesPoint;

use super::element::SvgElement;
use super::format::{format_value, html_escape};
use super::style::palette_color;

const TEXT_COLOR: &str = "#333333";
const MUTED_COLOR: &str = "#777777";

/// Pie chart with a legend on the right.
#[derive(Debug)]
pub struct PieChart {
    pub title: String,
    pub data: Vec<SeriesPoint>,
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl PieChart {
    #[must_use]
    pub fn new(title: impl Into<String>, data: Vec<SeriesPoint>) -> Self {
        Self {
            title: title.into(),
            data,
            width: 420.0,
            height: 240.0,
            padding: 20.0,
        }
    }

    fn total(&self) -> f64 {
        self.data.iter().map(|d| d.value.max(0.0)).sum()
    }

    fn render_legend(&self, output: &mut String, x: f64, total: f64) {
        for (i, point) in self.data.iter().enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let y = (i as f64).mul_add(18.0, self.padding + 10.0);
            let color = palette_color(i);
            let escaped_label = html_escape(&point.label);
            let percent = point.value / total * 100.0;

            let _ = writeln!(
                output,
                r#"    <rect x="{x}" y="{}" width="10" height="10" fill="{}" rx="2"/>"#,
                y - 9.0,
                color.to_css()
            );
            let _ = writeln!(
                output,
                r#"    <text x="{}" y="{y}" fill="{TEXT_COLOR}" font-size="11">{escaped_label}: {} ({percent:.1}%)</text>"#,
                x + 14.0,
                format_value(point.value)
            );
        }
    }
}

/// SVG path for one pie slice between two angles (radians, 0 = twelve o'clock).
fn slice_path(cx: f64, cy: f64, r: f64, start: f64, end: f64) -> String {
    let (x0, y0) = point_on_circle(cx, cy, r, start);
    let (x1, y1) = point_on_circle(cx, cy, r, end);
    let large_arc = u8::from(end - start > TAU / 2.0);
    format!("M{cx},{cy} L{x0},{y0} A{r} {r} 0 {large_arc} 1 {x1},{y1} Z")
}

fn point_on_circle(cx: f64, cy: f64, r: f64, angle: f64) -> (f64, f64) {
    // Rotate so that 0 radians points up
    let a = angle - TAU / 4.0;
    (r.mul_add(a.cos(), cx), r.mul_add(a.sin(), cy))
}

impl SvgElement for PieChart {
    fn render(&self) -> String {
        let mut output = String::new();

        let _ = writeln!(
            output,
            r#"<svg viewBox="0 0 {} {}" xmlns="http://www.w3.org/2000/svg" role="img">"#,
            self.width, self.height
        );
        let escaped_title = html_escape(&self.title);
        let _ = writeln!(output, r"    <title>{escaped_title}</title>");

        let total = self.total();
        if self.data.is_empty() || total <= 0.0 {
            let _ = writeln!(
                output,
                r#"    <text x="{}" y="{}" text-anchor="middle" fill="{MUTED_COLOR}" font-size="14">No data available</text>"#,
                self.width / 2.0,
                self.height / 2.0
            );
            output.push_str("</svg>");
            return output;
        }

        let radius = (self.height - 2.0 * self.padding) / 2.0;
        let cx = self.padding + radius;
        let cy = self.height / 2.0;

        let mut start = 0.0;
        for (i, point) in self.data.iter().enumerate() {
            let fraction = point.value.max(0.0) / total;
            let color = palette_color(i);
            let escaped_label = html_escape(&point.label);

            // A single full-circle slice cannot be expressed as an arc path
            let shape = if fraction >= 1.0 {
                format!(r#"<circle cx="{cx}" cy="{cy}" r="{radius}" fill="{}">"#, color.to_css())
            } else {
                let end = fraction.mul_add(TAU, start);
                let path = slice_path(cx, cy, radius, start, end);
                start = end;
                format!(r##"<path d="{path}" fill="{}" stroke="#ffffff" stroke-width="1">"##, color.to_css())
            };

            let _ = writeln!(
                output,
                "    {shape}\n        <title>{escaped_label}: {}</title>\n    {}",
                format_value(point.value),
                if fraction >= 1.0 { "</circle>" } else { "</path>" }
            );
        }

        let legend_x = 2.0f64.mul_add(self.padding, cx + radius);
        self.render_legend(&mut output, legend_x, total);

        output.push_str("</svg>");
        output
    }
}

#[cfg(test)]
#[path = "pie_tests.rs"]
mod tests;
