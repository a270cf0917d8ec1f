#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the equiview binary.
#[macro_export]
macro_rules! equiview {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("equiview"))
    };
}

/// Temporary working directory with helpers for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a local `.equiview.toml` config file.
    pub fn create_config(&self, content: &str) {
        self.create_file(".equiview.toml", content);
    }

    /// Creates a small equipment CSV file.
    pub fn create_csv(&self, relative_path: &str) {
        self.create_file(
            relative_path,
            "Equipment Name,Type,Flowrate,Pressure,Temperature\n\
             P-101,Pump,12.5,4.2,85.0\n\
             V-201,Valve,8.0,2.0,60.0\n",
        );
    }
}
