//! Shared test helpers for integration tests
//!
//! This module provides common utilities used across all test files.

#![allow(dead_code)]

use assert_cmd::cargo;
use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to get an ovs command isolated from the caller's environment
///
/// The user config directory is pointed into `tmp` so a developer's own
/// `~/.config/ovs/config.yaml` never leaks into test results.
pub fn ovs(tmp: &TempDir) -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("ovs"));
    cmd.current_dir(tmp.path())
        .env("XDG_CONFIG_HOME", xdg_dir(tmp))
        .env("HOME", tmp.path())
        .env_remove("OVS_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

/// Config home used by [`ovs`]
pub fn xdg_dir(tmp: &TempDir) -> PathBuf {
    tmp.path().join("xdg")
}

/// Write a YAML config file into the temp dir and return its path
pub fn write_config(tmp: &TempDir, name: &str, yaml: &str) -> PathBuf {
    let path = tmp.path().join(name);
    fs::write(&path, yaml).unwrap();
    path
}

/// Write the per-user config file picked up without `--config`
pub fn write_user_config(tmp: &TempDir, yaml: &str) -> PathBuf {
    let dir = xdg_dir(tmp).join("ovs");
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("config.yaml");
    fs::write(&path, yaml).unwrap();
    path
}

/// Run a command and return stdout as a String
pub fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().unwrap();
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).to_string()
}
