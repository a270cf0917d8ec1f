use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use crate::chart::{ChartBundle, PARAMETER_CATEGORIES, project};
use crate::cli::{ChartsArgs, Cli};
use crate::output::svg::{
    BarChart, BarSeries, ChartColor, GroupedBarChart, MAXIMUM_COLOR, MINIMUM_COLOR, PieChart,
    SvgElement,
};
use crate::output::{ChartFormat, JsonFormatter};
use crate::{EXIT_SUCCESS, Result};

use super::context::CommandContext;
use super::report_error;

#[must_use]
pub fn run_charts(args: &ChartsArgs, cli: &Cli) -> i32 {
    match run_charts_impl(args, cli) {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => report_error(&e),
    }
}

/// Renders the chart bundle for a dataset.
///
/// SVG output writes three files into the output directory (default: the
/// current directory). JSON output prints the series data, or writes it to
/// `--output` when given.
///
/// # Errors
/// Returns an error if the dataset cannot be fetched or files cannot
/// be written.
pub(crate) fn run_charts_impl(args: &ChartsArgs, cli: &Cli) -> Result<String> {
    let ctx = CommandContext::from_cli(cli)?;
    let dataset = ctx.api_client().get_dataset(args.id)?;
    let bundle = project(&dataset.summary);

    match args.format {
        ChartFormat::Json => {
            let json = JsonFormatter::format_charts(&bundle)?;
            match &args.output {
                Some(path) => {
                    fs::write(path, format!("{json}\n"))?;
                    Ok(format!("Wrote chart data: {}\n", path.display()))
                }
                None => Ok(format!("{json}\n")),
            }
        }
        ChartFormat::Svg => {
            let dir = args.output.clone().unwrap_or_else(|| PathBuf::from("."));
            write_svg_charts(&dir, &bundle)
        }
    }
}

/// Render all three charts and write them as SVG files under `dir`.
fn write_svg_charts(dir: &Path, bundle: &ChartBundle) -> Result<String> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }

    let pie = PieChart::new("Equipment Type Distribution", bundle.type_distribution.clone());
    let averages = BarChart::new("Average Parameter Values", bundle.averages.clone());
    let ranges = GroupedBarChart::new(
        "Min/Max Parameter Ranges",
        PARAMETER_CATEGORIES.iter().map(ToString::to_string).collect(),
        vec![
            BarSeries {
                name: "Minimum".to_string(),
                values: bundle.ranges.minimum.iter().map(|p| p.value).collect(),
                color: ChartColor::hex(MINIMUM_COLOR),
            },
            BarSeries {
                name: "Maximum".to_string(),
                values: bundle.ranges.maximum.iter().map(|p| p.value).collect(),
                color: ChartColor::hex(MAXIMUM_COLOR),
            },
        ],
    );

    let files: [(&str, String); 3] = [
        ("type_distribution.svg", pie.render()),
        ("averages.svg", averages.render()),
        ("ranges.svg", ranges.render()),
    ];

    let mut output = String::new();
    for (name, svg) in files {
        let path = dir.join(name);
        fs::write(&path, svg)?;
        let _ = writeln!(output, "Wrote chart: {}", path.display());
    }
    Ok(output)
}

#[cfg(test)]
#[path = "charts_tests.rs"]
mod tests;
