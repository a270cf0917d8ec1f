use crate::cli::Cli;
use crate::{EXIT_SUCCESS, Result};

use super::context::CommandContext;
use super::report_error;

#[must_use]
pub fn run_logout(cli: &Cli) -> i32 {
    match run_logout_impl(cli) {
        Ok(()) => {
            println!("Logged out.");
            EXIT_SUCCESS
        }
        Err(e) => report_error(&e),
    }
}

/// Invalidates the session token on the backend.
///
/// # Errors
/// Returns an error if the backend cannot be reached or rejects the request.
pub(crate) fn run_logout_impl(cli: &Cli) -> Result<()> {
    let ctx = CommandContext::from_cli(cli)?;
    ctx.api_client().logout()
}

#[cfg(test)]
#[path = "logout_tests.rs"]
mod tests;
