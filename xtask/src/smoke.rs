//! Live panel smoke run
//!
//! Wraps `cargo run --example panel_smoke` with a preflight that fails fast
//! when no credentials are configured.

use std::env;
use std::path::Path;
use std::process::Command;

use anyhow::{bail, Context};

const CREDENTIAL_VARS: [&str; 2] = ["QL_CLIENT_ID", "QL_CLIENT_SECRET"];
const CONFIG_FILES: [&str; 5] =
    [".env", "qinglong.toml", "qinglong.json", "config.toml", "config.json"];

/// Run the smoke example against the panel named by `QL_URL`
pub fn run_panel_smoke() -> anyhow::Result<()> {
    if !credentials_available() {
        eprintln!("No panel credentials found.");
        eprintln!("Set {} or create one of: {}", CREDENTIAL_VARS.join(" and "), CONFIG_FILES.join(", "));
        bail!("panel credentials missing");
    }

    let target = env::var("QL_URL").unwrap_or_else(|_| "http://127.0.0.1:5700".to_string());
    println!("==> Running panel smoke against {target}");
    println!("    This creates and deletes a job, a subscription and a variable.\n");

    let status = Command::new("cargo")
        .args(["run", "-p", super::CLIENT_CRATE, "--example", "panel_smoke"])
        .status()
        .context("Failed to spawn cargo run")?;

    if !status.success() {
        bail!("Panel smoke run failed");
    }

    println!("\n✓ Panel smoke passed");
    Ok(())
}

fn credentials_available() -> bool {
    CREDENTIAL_VARS.iter().all(|key| env::var_os(key).is_some())
        || CONFIG_FILES.iter().any(|name| Path::new(name).exists())
}
