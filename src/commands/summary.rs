use std::fmt::Write;

use crate::cli::{Cli, SummaryArgs};
use crate::dataset::aggregate;
use crate::output::{JsonFormatter, OutputFormat};
use crate::{EXIT_SUCCESS, Result};

use super::context::CommandContext;
use super::report_error;

#[must_use]
pub fn run_summary(args: &SummaryArgs, cli: &Cli) -> i32 {
    match run_summary_impl(args, cli) {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => report_error(&e),
    }
}

/// Shows summary statistics for a dataset.
///
/// With `--recompute` the summary is re-derived from the rows client-side,
/// which also cross-checks the backend's stored copy.
///
/// # Errors
/// Returns an error if the dataset cannot be fetched, has no rows under
/// `--recompute`, or serialization fails.
pub(crate) fn run_summary_impl(args: &SummaryArgs, cli: &Cli) -> Result<String> {
    let ctx = CommandContext::from_cli(cli)?;
    let dataset = ctx.api_client().get_dataset(args.id)?;

    let summary = resolve_summary(&dataset.summary, &dataset.rows, args.recompute)?;
    if !ctx.quiet && summary.total_count != dataset.summary.total_count {
        eprintln!(
            "Warning: backend summary counts {} rows, local recomputation found {}",
            dataset.summary.total_count, summary.total_count
        );
    }

    match args.format {
        OutputFormat::Text => {
            let mut output = ctx.text_formatter().format_summary(&dataset.filename, &summary);
            if args.recompute && ctx.verbose >= 1 {
                let _ = writeln!(output, "\n(recomputed client-side from {} rows)", dataset.rows.len());
            }
            Ok(output)
        }
        OutputFormat::Json => Ok(format!(
            "{}\n",
            JsonFormatter::format_summary(&dataset.filename, &summary)?
        )),
    }
}

/// Backend summary as-is, or a client-side recomputation from the rows.
fn resolve_summary(
    backend: &crate::dataset::Summary,
    rows: &[crate::dataset::EquipmentRecord],
    recompute: bool,
) -> Result<crate::dataset::Summary> {
    if recompute {
        aggregate(rows)
    } else {
        Ok(backend.clone())
    }
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
