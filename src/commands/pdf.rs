use std::fs;
use std::path::PathBuf;

use crate::cli::{Cli, PdfArgs};
use crate::{EXIT_SUCCESS, Result};

use super::context::CommandContext;
use super::report_error;

#[must_use]
pub fn run_pdf(args: &PdfArgs, cli: &Cli) -> i32 {
    match run_pdf_impl(args, cli) {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => report_error(&e),
    }
}

/// Downloads the PDF report of a dataset.
///
/// The default file name matches the web client's download name,
/// `equipment_report_<id>.pdf`.
///
/// # Errors
/// Returns an error if the download fails or the file cannot be written.
pub(crate) fn run_pdf_impl(args: &PdfArgs, cli: &Cli) -> Result<String> {
    let ctx = CommandContext::from_cli(cli)?;
    let bytes = ctx.api_client().download_pdf(args.id)?;

    let path = report_path(args);
    fs::write(&path, &bytes)?;

    Ok(format!(
        "Saved PDF report: {} ({} bytes)\n",
        path.display(),
        bytes.len()
    ))
}

fn report_path(args: &PdfArgs) -> PathBuf {
    args.output
        .clone()
        .unwrap_or_else(|| PathBuf::from(format!("equipment_report_{}.pdf", args.id)))
}

#[cfg(test)]
#[path = "pdf_tests.rs"]
mod tests;
