//! Shared command context: effective configuration plus resolved overrides.

use std::time::Duration;

use crate::api::{ApiClient, ReqwestBackend};
use crate::cli::{Cli, ColorChoice};
use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::error::{EquiviewError, Result};
use crate::output::{ColorMode, TextFormatter};

/// Name of the environment variable holding the API token.
pub const TOKEN_ENV_VAR: &str = "EQUIVIEW_TOKEN";

/// Everything a command needs that comes from outside its own arguments:
/// the loaded configuration with CLI overrides already applied, and the
/// output preferences.
#[derive(Debug)]
pub struct CommandContext {
    config: Config,
    token: Option<String>,
    color_mode: ColorMode,
    pub quiet: bool,
    pub verbose: u8,
}

impl CommandContext {
    /// Build the context from parsed CLI arguments.
    ///
    /// Token resolution order: `--token`, then `EQUIVIEW_TOKEN`, then the
    /// configuration file.
    ///
    /// # Errors
    /// Returns an error if an explicitly named config file cannot be loaded.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let loader = FileConfigLoader::new();
        let mut config = if cli.no_config {
            Config::default()
        } else if let Some(path) = &cli.config {
            if !path.exists() {
                return Err(EquiviewError::Config(format!(
                    "Configuration file not found: {}",
                    path.display()
                )));
            }
            loader.load_from_path(path)?
        } else {
            loader.load()?
        };

        if let Some(server) = &cli.server {
            config.server.base_url = server.trim_end_matches('/').to_string();
        }

        let token = cli
            .token
            .clone()
            .or_else(|| std::env::var(TOKEN_ENV_VAR).ok())
            .or_else(|| config.auth.token.clone());

        Ok(Self {
            config,
            token,
            color_mode: match cli.color {
                ColorChoice::Auto => ColorMode::Auto,
                ColorChoice::Always => ColorMode::Always,
                ColorChoice::Never => ColorMode::Never,
            },
            quiet: cli.quiet,
            verbose: cli.verbose,
        })
    }

    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub fn api_client(&self) -> ApiClient<ReqwestBackend> {
        ApiClient::new(
            &self.config.server.base_url,
            self.token.clone(),
            Duration::from_secs(self.config.server.timeout_secs),
        )
    }

    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.config.table.page_size
    }

    #[must_use]
    pub fn text_formatter(&self) -> TextFormatter {
        TextFormatter::with_verbose(self.color_mode, self.verbose)
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
