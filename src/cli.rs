use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::dataset::Column;
use crate::output::{ChartFormat, OutputFormat};

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "equiview")]
#[command(author, version, about = "Chemical equipment parameter visualizer client")]
#[command(long_about = "A terminal client for the chemical equipment visualizer backend.\n\
    Upload CSV datasets, browse equipment tables, and render summary\n\
    statistics and charts.\n\n\
    Exit codes:\n  \
    0 - Success\n  \
    1 - Backend or API failure\n  \
    2 - Configuration or usage error")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Backend base URL (overrides config)
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// API token (overrides config and EQUIVIEW_TOKEN)
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Upload a CSV of equipment parameters and show the result
    Upload(UploadArgs),

    /// Show the equipment table of a dataset
    Show(ShowArgs),

    /// List recently uploaded datasets
    History(HistoryArgs),

    /// Show summary statistics of a dataset
    Summary(SummaryArgs),

    /// Render charts for a dataset
    Charts(ChartsArgs),

    /// Download the PDF report of a dataset
    Pdf(PdfArgs),

    /// Log out from the backend
    Logout,

    /// Check backend availability
    Health,

    /// Generate a default configuration file
    Init(InitArgs),

    /// Configuration file utilities
    Config(ConfigArgs),
}

#[derive(Parser, Debug)]
pub struct UploadArgs {
    /// Path to the CSV file
    pub file: PathBuf,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Dataset id
    pub id: u64,

    /// Column to sort by
    #[arg(long, value_enum)]
    pub sort_by: Option<Column>,

    /// Sort in descending order (requires --sort-by)
    #[arg(long, requires = "sort_by")]
    pub desc: bool,

    /// Page to display (clamped to the available range)
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,

    /// Rows per page (overrides config)
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Parser, Debug)]
pub struct HistoryArgs {
    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Parser, Debug)]
pub struct SummaryArgs {
    /// Dataset id
    pub id: u64,

    /// Re-derive the summary client-side and cross-check the backend copy
    #[arg(long)]
    pub recompute: bool,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Parser, Debug)]
pub struct ChartsArgs {
    /// Dataset id
    pub id: u64,

    /// Chart output format [possible values: svg, json]
    #[arg(short, long, default_value = "svg")]
    pub format: ChartFormat,

    /// Output directory for SVG files, or file path for JSON
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct PdfArgs {
    /// Dataset id
    pub id: u64,

    /// Output file path (default: equipment_report_<id>.pdf)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = ".equiview.toml")]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Validate configuration file syntax and semantics
    Validate {
        /// Path to configuration file (default: .equiview.toml)
        #[arg(short, long, default_value = ".equiview.toml")]
        config: PathBuf,
    },

    /// Display the effective configuration
    Show {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format [possible values: text, json]
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
