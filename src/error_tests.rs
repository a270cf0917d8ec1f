use std::path::PathBuf;

use super::*;

#[test]
fn config_error_display() {
    let err = EquiviewError::Config("bad value".to_string());
    assert_eq!(err.to_string(), "Configuration error: bad value");
}

#[test]
fn api_error_displays_message_verbatim() {
    let err = EquiviewError::Api("Backend request failed (HTTP 404): no such dataset".to_string());
    assert_eq!(
        err.to_string(),
        "Backend request failed (HTTP 404): no such dataset"
    );
}

#[test]
fn insufficient_data_display() {
    assert_eq!(
        EquiviewError::InsufficientData.to_string(),
        "Insufficient data: dataset contains no rows"
    );
}

#[test]
fn file_read_error_names_the_path() {
    let err = EquiviewError::FileRead {
        path: PathBuf::from("/tmp/plant.csv"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
    };
    assert!(err.to_string().contains("/tmp/plant.csv"));
}

#[test]
fn io_error_converts() {
    let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let err: EquiviewError = io.into();
    assert!(matches!(err, EquiviewError::Io(_)));
}

#[test]
fn json_error_converts() {
    let json = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
    let err: EquiviewError = json.into();
    assert!(matches!(err, EquiviewError::Json(_)));
}

#[test]
fn toml_error_converts() {
    let toml_err = toml::from_str::<toml::Value>("a = [").unwrap_err();
    let err: EquiviewError = toml_err.into();
    assert!(matches!(err, EquiviewError::TomlParse(_)));
}
