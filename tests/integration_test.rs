// tests/integration_test.rs
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn fist_bump(dir: &Path, args: &[&str], config_home: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fist-bump"))
        .args(args)
        .current_dir(dir)
        .env("XDG_CONFIG_HOME", config_home)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute fist-bump")
}

fn repo_with_commit(message: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("package.json"),
        "{\n  \"name\": \"demo\",\n  \"version\": \"0.9.0\"\n}\n",
    )
    .unwrap();

    let repo = git2::Repository::init(dir.path()).unwrap();
    {
        let mut config = repo.config().unwrap();
        config.set_str("user.name", "Test User").unwrap();
        config.set_str("user.email", "test@example.com").unwrap();
    }
    let mut index = repo.index().unwrap();
    index.add_path(Path::new("package.json")).unwrap();
    index.write().unwrap();
    let tree = repo.find_tree(index.write_tree().unwrap()).unwrap();
    let sig = repo.signature().unwrap();
    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &[])
        .unwrap();

    dir
}

fn head_message(dir: &Path) -> String {
    let repo = git2::Repository::open(dir).unwrap();
    let head = repo.head().unwrap().peel_to_commit().unwrap();
    head.message().unwrap().to_string()
}

#[test]
fn test_fist_bump_help() {
    let home = TempDir::new().unwrap();
    let output = fist_bump(home.path(), &["--help"], home.path());

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("fist-bump"));
    assert!(stdout.contains("--install"));
    assert!(stdout.contains("--dry-run"));
}

#[test]
fn test_fist_bump_version() {
    let home = TempDir::new().unwrap();
    let output = fist_bump(home.path(), &["--version"], home.path());

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout.trim(),
        format!("fist-bump {}", env!("CARGO_PKG_VERSION"))
    );
}

#[test]
fn test_bump_amends_commit() {
    let dir = repo_with_commit("fix: crash on start");
    let home = TempDir::new().unwrap();

    let output = fist_bump(dir.path(), &[], home.path());

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("0.9.1"));
    assert_eq!(head_message(dir.path()), "(v0.9.1) fix: crash on start");
}

#[test]
fn test_skip_exits_with_one() {
    let dir = repo_with_commit("docs: readme");
    let home = TempDir::new().unwrap();

    let output = fist_bump(dir.path(), &[], home.path());

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Bump not needed (keyword not found)"));
    assert_eq!(head_message(dir.path()), "docs: readme");
}

#[test]
fn test_dry_run_leaves_repository_untouched() {
    let dir = repo_with_commit("feature: export");
    let home = TempDir::new().unwrap();

    let output = fist_bump(dir.path(), &["--dry-run"], home.path());

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("(v0.10.0) feature: export"));
    assert_eq!(head_message(dir.path()), "feature: export");
    let package = fs::read_to_string(dir.path().join("package.json")).unwrap();
    assert!(package.contains("0.9.0"));
}

#[test]
fn test_missing_config_file_fails() {
    let dir = repo_with_commit("fix: bug");
    let home = TempDir::new().unwrap();

    let output = fist_bump(dir.path(), &["--config", "missing.toml"], home.path());

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("missing.toml"));
    assert_eq!(head_message(dir.path()), "fix: bug");
}

#[test]
fn test_install_and_uninstall_hook() {
    let dir = repo_with_commit("chore: init");
    let home = TempDir::new().unwrap();
    let hook = dir.path().join(".git/hooks/post-commit");

    let output = fist_bump(dir.path(), &["--install"], home.path());
    assert!(output.status.success());
    let script = fs::read_to_string(&hook).unwrap();
    assert!(script.starts_with("#!/bin/sh"));
    assert!(script.contains("fist-bump"));

    let output = fist_bump(dir.path(), &["-I"], home.path());
    assert!(output.status.success());
    assert!(String::from_utf8(output.stdout)
        .unwrap()
        .contains("already installed"));

    let output = fist_bump(dir.path(), &["--uninstall"], home.path());
    assert!(output.status.success());
    assert!(!hook.exists());
}

#[test]
fn test_install_conflicts_with_uninstall() {
    let dir = repo_with_commit("chore: init");
    let home = TempDir::new().unwrap();

    let output = fist_bump(dir.path(), &["-I", "-U"], home.path());
    assert!(!output.status.success());
}
