use crate::cli::Cli;
use crate::{EXIT_API_ERROR, EXIT_SUCCESS};

use super::context::CommandContext;
use super::report_error;

/// Probes the backend's health endpoint. Exits 0 when the backend answers
/// with a 2xx status, 1 otherwise.
#[must_use]
pub fn run_health(cli: &Cli) -> i32 {
    let ctx = match CommandContext::from_cli(cli) {
        Ok(ctx) => ctx,
        Err(e) => return report_error(&e),
    };

    let base_url = ctx.config().server.base_url.clone();
    if ctx.api_client().health_check() {
        if !ctx.quiet {
            println!("Backend is healthy: {base_url}");
        }
        EXIT_SUCCESS
    } else {
        eprintln!("Backend is unreachable: {base_url}");
        EXIT_API_ERROR
    }
}

#[cfg(test)]
#[path = "health_tests.rs"]
mod tests;
