use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// A roadnet command isolated from the caller's logging and network env vars
pub fn roadnet() -> Command {
    let mut cmd = cargo_bin_cmd!("roadnet");
    cmd.env_remove("RUST_LOG")
        .env_remove("ROADNET_LOG")
        .env_remove("ROADNET_NETWORK");
    cmd
}

/// Write a network file into `dir` and return its path
#[allow(dead_code)]
pub fn write_network(dir: &Path, file_name: &str, content: &str) -> PathBuf {
    let path = dir.join(file_name);
    fs::write(&path, content).expect("failed to write network file");
    path
}
