use std::io::Write as _;

use clap::Parser;

use crate::cli::Cli;
use crate::dataset::DEFAULT_PAGE_SIZE;

use super::*;

fn cli(args: &[&str]) -> Cli {
    let mut full = vec!["equiview"];
    full.extend_from_slice(args);
    full.push("health");
    Cli::parse_from(full)
}

#[test]
fn no_config_uses_defaults() {
    let ctx = CommandContext::from_cli(&cli(&["--no-config"])).unwrap();
    assert_eq!(ctx.config().server.base_url, "http://localhost:8000/api");
    assert_eq!(ctx.page_size(), DEFAULT_PAGE_SIZE);
    assert!(!ctx.quiet);
    assert_eq!(ctx.verbose, 0);
}

#[test]
fn server_flag_overrides_config_and_trims_slash() {
    let ctx = CommandContext::from_cli(&cli(&[
        "--no-config",
        "--server",
        "https://plant.example.com/api/",
    ]))
    .unwrap();
    assert_eq!(ctx.config().server.base_url, "https://plant.example.com/api");
}

#[test]
fn explicit_config_path_is_loaded() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[server]\nbase_url = \"http://cfg.example.com/api\"\n\n[table]\npage_size = 25"
    )
    .unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let ctx = CommandContext::from_cli(&cli(&["--config", &path])).unwrap();
    assert_eq!(ctx.config().server.base_url, "http://cfg.example.com/api");
    assert_eq!(ctx.page_size(), 25);
}

#[test]
fn missing_explicit_config_is_a_config_error() {
    let err =
        CommandContext::from_cli(&cli(&["--config", "/definitely/missing.toml"])).unwrap_err();
    assert!(matches!(err, EquiviewError::Config(_)));
    assert!(err.to_string().contains("/definitely/missing.toml"));
}

#[test]
fn quiet_and_verbose_flags_carry_over() {
    let ctx = CommandContext::from_cli(&cli(&["--no-config", "--quiet", "-vv"])).unwrap();
    assert!(ctx.quiet);
    assert_eq!(ctx.verbose, 2);
}
