use clap::Parser;

use crate::cli::{Cli, Commands};
use crate::error::EquiviewError;

use super::*;

fn parse(file: &str) -> (crate::cli::UploadArgs, Cli) {
    let cli = Cli::parse_from(["equiview", "--no-config", "upload", file]);
    let args = match &cli.command {
        Commands::Upload(args) => crate::cli::UploadArgs {
            file: args.file.clone(),
            format: args.format,
        },
        _ => unreachable!(),
    };
    (args, cli)
}

#[test]
fn upload_rejects_wrong_extension_before_any_request() {
    let (args, cli) = parse("readings.xlsx");
    let err = run_upload_impl(&args, &cli).unwrap_err();
    assert!(matches!(err, EquiviewError::Config(_)));
    assert!(err.to_string().contains("File must be a CSV"));
}

#[test]
fn upload_missing_file_is_a_read_error() {
    let (args, cli) = parse("missing/plant.csv");
    let err = run_upload_impl(&args, &cli).unwrap_err();
    assert!(matches!(err, EquiviewError::FileRead { .. }));
}

#[test]
fn upload_error_maps_to_config_exit_code() {
    let (args, cli) = parse("readings.xlsx");
    assert_eq!(run_upload(&args, &cli), crate::EXIT_CONFIG_ERROR);
}
