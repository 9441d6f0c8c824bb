use std::process::Command;

use anyhow::{Context, Result};

/// `exitpass-common` tiers that must build on their own.
const FEATURE_COMBINATIONS: &[&[&str]] = &[
    &[], // default
    &["foundation"],
    &["runtime"],
];

/// Check that every feature tier of the common crate compiles.
pub fn test_feature_matrix() -> Result<()> {
    println!("Testing {} exitpass-common feature combinations...", FEATURE_COMBINATIONS.len());

    for (index, features) in FEATURE_COMBINATIONS.iter().enumerate() {
        let label = if features.is_empty() { "default".to_string() } else { features.join(",") };

        println!(
            "\n[{}/{}] cargo check -p exitpass-common ({label})",
            index + 1,
            FEATURE_COMBINATIONS.len()
        );

        let mut command = Command::new("cargo");
        command.args(["check", "-p", "exitpass-common", "--all-targets"]);
        if !features.is_empty() {
            command.arg("--features").arg(features.join(","));
        }

        let status =
            command.status().with_context(|| format!("Failed to run cargo check for '{label}'"))?;
        if !status.success() {
            anyhow::bail!("Feature combination '{label}' failed to compile");
        }
    }

    println!("\nAll {} feature combinations compile.", FEATURE_COMBINATIONS.len());
    Ok(())
}
