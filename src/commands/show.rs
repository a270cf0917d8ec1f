use crate::cli::{Cli, ShowArgs};
use crate::dataset::{Session, SortDirection, SortDirective};
use crate::output::{JsonFormatter, OutputFormat};
use crate::{EXIT_SUCCESS, Result};

use super::context::CommandContext;
use super::report_error;

#[must_use]
pub fn run_show(args: &ShowArgs, cli: &Cli) -> i32 {
    match run_show_impl(args, cli) {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => report_error(&e),
    }
}

/// Fetches a dataset and renders one table page.
///
/// # Errors
/// Returns an error if the dataset cannot be fetched or serialization fails.
pub(crate) fn run_show_impl(args: &ShowArgs, cli: &Cli) -> Result<String> {
    let ctx = CommandContext::from_cli(cli)?;
    let dataset = ctx.api_client().get_dataset(args.id)?;

    let mut session = Session::new(args.page_size.unwrap_or_else(|| ctx.page_size()));
    session.select_dataset(dataset);
    session.set_sort(requested_sort(args));
    session.set_page(args.page);

    let view = session.page_view();
    match args.format {
        OutputFormat::Text => Ok(ctx.text_formatter().format_table(&view, session.sort())),
        OutputFormat::Json => Ok(format!(
            "{}\n",
            JsonFormatter::format_table(&view, session.sort())?
        )),
    }
}

/// Sort directive from the CLI flags; `--desc` is only accepted together
/// with `--sort-by`.
fn requested_sort(args: &ShowArgs) -> Option<SortDirective> {
    args.sort_by.map(|key| SortDirective {
        key,
        direction: if args.desc {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        },
    })
}

#[cfg(test)]
#[path = "show_tests.rs"]
mod tests;
