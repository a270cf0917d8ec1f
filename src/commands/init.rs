use std::fs;

use crate::cli::InitArgs;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, EquiviewError, Result};

#[must_use]
pub fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Initializes a new configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot
/// be written.
pub(crate) fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(EquiviewError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# equiview configuration file
# See: https://github.com/doraemonkeys/equiview for documentation

[server]
# Base URL of the visualizer backend API
base_url = "http://localhost:8000/api"

# Request timeout in seconds (default: 30)
timeout_secs = 30

[auth]
# API token sent as `Authorization: Token <value>`.
# Can also be supplied via --token or the EQUIVIEW_TOKEN environment variable.
# token = "your-api-token"

[table]
# Rows per page in the equipment table (default: 10)
page_size = 10
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
