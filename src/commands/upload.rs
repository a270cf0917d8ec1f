use std::fmt::Write;

use crate::cli::{Cli, UploadArgs};
use crate::output::OutputFormat;
use crate::{EXIT_SUCCESS, Result};

use super::context::CommandContext;
use super::report_error;

#[must_use]
pub fn run_upload(args: &UploadArgs, cli: &Cli) -> i32 {
    match run_upload_impl(args, cli) {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => report_error(&e),
    }
}

/// Uploads a CSV file and shows the processed dataset's summary.
///
/// # Errors
/// Returns an error if the file is not a readable CSV or the backend
/// rejects the upload.
pub(crate) fn run_upload_impl(args: &UploadArgs, cli: &Cli) -> Result<String> {
    let ctx = CommandContext::from_cli(cli)?;
    let dataset = ctx.api_client().upload_csv(&args.file)?;

    match args.format {
        OutputFormat::Json => Ok(format!(
            "{}\n",
            serde_json::to_string_pretty(&dataset)?
        )),
        OutputFormat::Text => {
            let mut output = String::new();
            let _ = writeln!(
                output,
                "Uploaded {} as dataset {} ({} equipment items)",
                dataset.filename,
                dataset.id,
                dataset.summary.total_count
            );
            if !ctx.quiet {
                output.push('\n');
                output.push_str(
                    &ctx.text_formatter()
                        .format_summary(&dataset.filename, &dataset.summary),
                );
            }
            Ok(output)
        }
    }
}

#[cfg(test)]
#[path = "upload_tests.rs"]
mod tests;
