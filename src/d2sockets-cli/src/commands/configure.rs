//! Configuration command handlers
//!
//! Handles the `configure` subcommand for setting up d2sockets CLI defaults.

use crate::config::Config;
use anyhow::Result;
use std::path::PathBuf;

/// Handle the configure command
///
/// # Arguments
/// * `manifest` - Optional manifest path to set as default
/// * `show` - If true, show current configuration
pub fn handle(manifest: Option<PathBuf>, show: bool) -> Result<()> {
    let mut config = Config::load()?;

    if show {
        show_config(&config);
        return Ok(());
    }

    if let Some(path) = manifest {
        set_manifest(&mut config, path)?;
    } else {
        show_usage();
    }

    Ok(())
}

fn show_config(config: &Config) {
    match config.get_manifest() {
        Some(path) => println!("Manifest: {}", path.display()),
        None => println!("No manifest configured"),
    }

    if let Ok(path) = Config::config_path() {
        println!("Config file: {}", path.display());
    }
}

fn set_manifest(config: &mut Config, path: PathBuf) -> Result<()> {
    if !path.exists() {
        tracing::warn!(path = %path.display(), "manifest file does not exist yet");
    }

    println!("Manifest configured: {}", path.display());
    config.set_manifest(path);
    config.save()?;

    if let Ok(path) = Config::config_path() {
        println!("Config saved to: {}", path.display());
    }

    Ok(())
}

fn show_usage() {
    println!("Usage: d2sockets configure --set-manifest PATH");
    println!("   or: d2sockets configure --show");
    println!();
    println!("Note: the manifest is the jsonWorldContent file from the Destiny 2 API.");
}
