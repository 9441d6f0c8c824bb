//! Development and maintenance tasks for the Exitpass workspace.
//!
//! Run with: `cargo xtask <command>`
//!
//! This is a CLI tool for developers, so `println!` and `eprintln!` are
//! used for user-facing output rather than structured logging.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::env;
use std::path::PathBuf;
use std::process::{Command, ExitCode};

use anyhow::{anyhow, Context};
use exitpass_infra::{KeyManager, SecureStore};

mod features;

fn main() -> ExitCode {
    let mut args = env::args().skip(1);
    let task = args.next();

    let result = match task.as_deref() {
        Some("ci") => run_ci(),
        Some("fmt") => run_fmt(),
        Some("clippy") => run_clippy(),
        Some("test") => run_test(),
        Some("bench") => run_bench(),
        Some("test-features") => features::test_feature_matrix(),
        Some("keygen") => {
            run_keygen();
            Ok(())
        }
        Some("encrypt") => file_arg(args.next()).and_then(run_encrypt),
        Some("decrypt") => file_arg(args.next()).and_then(run_decrypt),
        Some("help") | None => {
            print_help();
            Ok(())
        }
        Some(unknown) => {
            eprintln!("Unknown task: {unknown}");
            eprintln!();
            print_help();
            Err(anyhow!("Unknown task"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Task failed: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn print_help() {
    println!("Exitpass Development Tasks");
    println!();
    println!("USAGE:");
    println!("    cargo xtask <TASK> [ARGS]");
    println!();
    println!("TASKS:");
    println!("    ci              Run all CI checks (fmt, clippy, features, test)");
    println!("    fmt             Check Rust code formatting");
    println!("    clippy          Run Clippy lints");
    println!("    test            Run all tests");
    println!("    bench           Run criterion benches");
    println!("    test-features   Verify exitpass-common feature tiers compile");
    println!("    keygen          Print a fresh STUDENTS_DATA_KEY line");
    println!("    encrypt <FILE>  Encrypt a plaintext JSON document in place");
    println!("    decrypt <FILE>  Decrypt a document in place to pretty JSON");
    println!("    help            Show this help message");
}

fn run_ci() -> anyhow::Result<()> {
    println!("==> Step 1/4: Checking Rust format...");
    run_fmt()?;

    println!("\n==> Step 2/4: Running Clippy...");
    run_clippy()?;

    println!("\n==> Step 3/4: Checking feature tiers...");
    features::test_feature_matrix()?;

    println!("\n==> Step 4/4: Running tests...");
    run_test()?;

    println!("\nAll CI checks passed.");
    Ok(())
}

fn cargo(args: &[&str], failure: &str) -> anyhow::Result<()> {
    let status = Command::new("cargo").args(args).status().context("Failed to run cargo")?;
    if status.success() {
        Ok(())
    } else {
        Err(anyhow!("{failure}"))
    }
}

fn run_fmt() -> anyhow::Result<()> {
    cargo(&["fmt", "--all", "--", "--check"], "Format check failed. Run 'cargo fmt --all' to fix.")
}

fn run_clippy() -> anyhow::Result<()> {
    cargo(&["clippy", "--workspace", "--all-targets", "--all-features"], "Clippy run failed.")
}

fn run_test() -> anyhow::Result<()> {
    cargo(&["test", "--workspace", "--all-features"], "Tests failed")
}

fn run_bench() -> anyhow::Result<()> {
    cargo(
        &["bench", "-p", "exitpass-core", "-p", "exitpass-common", "--all-features"],
        "Benches failed",
    )
}

fn run_keygen() {
    println!("STUDENTS_DATA_KEY={}", KeyManager::generate_key());
}

fn file_arg(arg: Option<String>) -> anyhow::Result<PathBuf> {
    arg.map(PathBuf::from).ok_or_else(|| anyhow!("Missing <FILE> argument"))
}

/// Store built from `STUDENTS_DATA_KEY`, after loading `.env`.
fn store_from_env() -> anyhow::Result<SecureStore> {
    let _ = exitpass_infra::config::load().context("Failed to load configuration")?;
    let key = KeyManager::from_env()?;
    Ok(SecureStore::new(&key)?)
}

fn run_encrypt(path: PathBuf) -> anyhow::Result<()> {
    store_from_env()?
        .encrypt_plain_file(&path)
        .with_context(|| format!("Failed to encrypt {}", path.display()))?;
    println!("Encrypted {}", path.display());
    Ok(())
}

fn run_decrypt(path: PathBuf) -> anyhow::Result<()> {
    store_from_env()?
        .decrypt_to_plain_file(&path)
        .with_context(|| format!("Failed to decrypt {}", path.display()))?;
    println!("Decrypted {} (ciphertext kept as .enc.bak)", path.display());
    Ok(())
}
