use crate::cli::{Cli, HistoryArgs};
use crate::output::{JsonFormatter, OutputFormat};
use crate::{EXIT_SUCCESS, Result};

use super::context::CommandContext;
use super::report_error;

#[must_use]
pub fn run_history(args: &HistoryArgs, cli: &Cli) -> i32 {
    match run_history_impl(args, cli) {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => report_error(&e),
    }
}

/// Lists the recently uploaded datasets (the backend keeps the last 5).
///
/// # Errors
/// Returns an error if the backend cannot be reached or serialization fails.
pub(crate) fn run_history_impl(args: &HistoryArgs, cli: &Cli) -> Result<String> {
    let ctx = CommandContext::from_cli(cli)?;
    let datasets = ctx.api_client().list_datasets()?;

    match args.format {
        OutputFormat::Text => Ok(ctx.text_formatter().format_history(&datasets, None)),
        OutputFormat::Json => Ok(format!("{}\n", JsonFormatter::format_history(&datasets)?)),
    }
}

#[cfg(test)]
#[path = "history_tests.rs"]
mod tests;
