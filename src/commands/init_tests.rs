use crate::cli::InitArgs;
use crate::config::Config;
use crate::error::EquiviewError;

use super::*;

#[test]
fn init_writes_the_template() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join(".equiview.toml");
    let args = InitArgs {
        output: output.clone(),
        force: false,
    };

    run_init_impl(&args).unwrap();
    let content = fs::read_to_string(&output).unwrap();
    assert!(content.contains("[server]"));
    assert!(content.contains("[table]"));
}

#[test]
fn init_refuses_to_overwrite_without_force() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join(".equiview.toml");
    fs::write(&output, "# existing").unwrap();

    let args = InitArgs {
        output: output.clone(),
        force: false,
    };
    let err = run_init_impl(&args).unwrap_err();
    assert!(matches!(err, EquiviewError::Config(_)));
    assert!(err.to_string().contains("--force"));
    assert_eq!(fs::read_to_string(&output).unwrap(), "# existing");
}

#[test]
fn init_force_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join(".equiview.toml");
    fs::write(&output, "# existing").unwrap();

    let args = InitArgs {
        output,
        force: true,
    };
    run_init_impl(&args).unwrap();
}

#[test]
fn template_is_a_valid_config() {
    let config: Config = toml::from_str(&generate_config_template()).unwrap();
    assert!(config.validate().is_ok());
    assert_eq!(config.server.base_url, "http://localhost:8000/api");
    assert_eq!(config.table.page_size, 10);
    // The token line ships commented out
    assert!(config.auth.token.is_none());
}
