pub mod charts;
pub mod config;
pub mod context;
pub mod health;
pub mod history;
pub mod init;
pub mod logout;
pub mod pdf;
pub mod show;
pub mod summary;
pub mod upload;

pub use charts::run_charts;
pub use config::run_config;
pub use context::CommandContext;
pub use health::run_health;
pub use history::run_history;
pub use init::run_init;
pub use logout::run_logout;
pub use pdf::run_pdf;
pub use show::run_show;
pub use summary::run_summary;
pub use upload::run_upload;

use crate::error::EquiviewError;
use crate::{EXIT_API_ERROR, EXIT_CONFIG_ERROR};

/// Map an error to the process exit code: configuration and usage problems
/// exit with 2, backend and I/O failures with 1.
#[must_use]
pub fn error_exit_code(error: &EquiviewError) -> i32 {
    match error {
        EquiviewError::Config(_) | EquiviewError::TomlParse(_) => EXIT_CONFIG_ERROR,
        _ => EXIT_API_ERROR,
    }
}

/// Report an error on stderr and return its exit code.
pub(crate) fn report_error(error: &EquiviewError) -> i32 {
    eprintln!("Error: {error}");
    error_exit_code(error)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
