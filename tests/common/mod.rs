//! Shared testing utilities for commentsmith CLI tests.

use assert_cmd::Command;
use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated environment for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    data_dir: PathBuf,
    original_home: Option<OsString>,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let data_dir = root.path().join("profile");

        let original_home = env::var_os("HOME");
        unsafe {
            env::set_var("HOME", root.path());
        }

        Self { root, data_dir, original_home }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub fn home(&self) -> &Path {
        self.root.path()
    }

    /// Data directory handed to the binary through `COMMENTSMITH_HOME`.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Build a command for invoking the compiled `commentsmith` binary.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("commentsmith").expect("Failed to locate commentsmith binary");
        cmd.current_dir(self.home())
            .env("HOME", self.home())
            .env("COMMENTSMITH_HOME", self.data_dir())
            .env_remove("COMMENTSMITH_LOG");
        cmd
    }

    /// Write a file relative to `$HOME` and return its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.home().join(name);
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Write `config.toml` into the data directory.
    pub fn write_config(&self, content: &str) {
        fs::create_dir_all(self.data_dir()).expect("Failed to create data directory");
        fs::write(self.data_dir().join("config.toml"), content).expect("Failed to write config");
    }

    /// Raw contents of the persisted store.
    pub fn store_json(&self) -> serde_json::Value {
        let content =
            fs::read_to_string(self.data_dir().join("store.json")).expect("store.json should exist");
        serde_json::from_str(&content).expect("store.json should be valid JSON")
    }

    pub fn store_exists(&self) -> bool {
        self.data_dir().join("store.json").exists()
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        unsafe {
            match &self.original_home {
                Some(home) => env::set_var("HOME", home),
                None => env::remove_var("HOME"),
            }
        }
    }
}
