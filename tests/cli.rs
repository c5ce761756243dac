//! End-to-end runs of the `locsearch` binary against a temp data dir.

mod common;

use std::path::Path;
use std::process::{Command, Output};

use common::{place, temp_catalog};
use locsearch::LocationRecord;
use tempfile::TempDir;

fn locsearch_cmd(data_dir: &Path, catalog: Option<&Path>) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_locsearch"));
    cmd.arg("--config")
        .arg(data_dir.join("no-config.toml"))
        .arg("--data-dir")
        .arg(data_dir)
        .env_remove("LOCSEARCH_LOG")
        .env("RUST_LOG", "off");
    if let Some(catalog) = catalog {
        cmd.arg("--catalog").arg(catalog);
    }
    cmd
}

fn run(cmd: &mut Command) -> (Output, String) {
    let output = cmd.output().expect("Failed to execute command");
    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    (output, stdout)
}

#[test]
fn search_prints_matches_from_sample_catalog() {
    let data = TempDir::new().unwrap();
    let (output, stdout) = run(locsearch_cmd(data.path(), None).args(["search", "Pharmacy 3"]));

    assert!(output.status.success());
    assert!(stdout.contains("Pharmacy 3\tpharmacy\t3 Seongsu-dong"));
    assert!(!stdout.contains("No results"));
}

#[test]
fn search_without_matches_prints_indicator() {
    let data = TempDir::new().unwrap();
    let (output, stdout) = run(locsearch_cmd(data.path(), None).args(["search", "zz-no-match"]));

    assert!(output.status.success());
    assert_eq!(stdout.trim(), "No results");
}

#[test]
fn empty_search_prints_nothing() {
    let data = TempDir::new().unwrap();
    let (output, stdout) = run(locsearch_cmd(data.path(), None).arg("search"));

    assert!(output.status.success());
    assert!(stdout.is_empty());
}

#[test]
fn select_then_recent_shows_most_recent_first() {
    let data = TempDir::new().unwrap();
    let (_catalog_dir, catalog) = temp_catalog(&[place("alpha"), place("beta"), place("gamma")]);

    for name in ["alpha", "beta", "gamma", "alpha"] {
        let (output, stdout) =
            run(locsearch_cmd(data.path(), Some(&catalog)).args(["select", name]));
        assert!(output.status.success());
        let handoff: LocationRecord = serde_json::from_str(stdout.trim()).unwrap();
        assert_eq!(handoff, place(name));
    }

    let (_, stdout) = run(locsearch_cmd(data.path(), Some(&catalog)).arg("recent"));
    let listed: Vec<&str> = stdout
        .lines()
        .map(|line| line.split('\t').next().unwrap())
        .collect();
    assert_eq!(listed, vec!["alpha", "gamma", "beta"]);
}

#[test]
fn removing_last_entry_reports_empty_list() {
    let data = TempDir::new().unwrap();
    let (_catalog_dir, catalog) = temp_catalog(&[place("alpha")]);

    run(locsearch_cmd(data.path(), Some(&catalog)).args(["select", "alpha"]));
    let (output, stdout) = run(locsearch_cmd(data.path(), Some(&catalog)).args(["remove", "alpha"]));
    assert!(output.status.success());
    assert!(stdout.contains("recent list is now empty"));

    let (_, stdout) = run(locsearch_cmd(data.path(), Some(&catalog)).arg("recent"));
    assert_eq!(stdout.trim(), "No recent searches");
}

#[test]
fn removing_unknown_entry_is_not_an_error() {
    let data = TempDir::new().unwrap();
    let (output, stdout) = run(locsearch_cmd(data.path(), None).args(["remove", "nowhere"]));

    assert!(output.status.success());
    assert!(stdout.contains("not in the recent list"));
}

#[test]
fn selecting_unknown_name_exits_with_error() {
    let data = TempDir::new().unwrap();
    let output = locsearch_cmd(data.path(), None)
        .args(["select", "Nowhere 99"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Location 'Nowhere 99' not found in catalog"));
}

#[test]
fn corrupt_recent_file_is_treated_as_empty() {
    let data = TempDir::new().unwrap();
    std::fs::write(data.path().join("search_list.json"), "garbage").unwrap();

    let (output, stdout) = run(locsearch_cmd(data.path(), None).arg("recent"));
    assert!(output.status.success());
    assert_eq!(stdout.trim(), "No recent searches");
}

#[test]
fn invalid_config_exits_with_error() {
    let data = TempDir::new().unwrap();
    let config = data.path().join("bad.toml");
    std::fs::write(&config, "[search]\nmax_results = 0\n").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_locsearch"))
        .arg("--config")
        .arg(&config)
        .arg("--data-dir")
        .arg(data.path())
        .arg("recent")
        .env("RUST_LOG", "off")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("max_results must be greater than zero"));
}
