//! Command handlers for the d2sockets CLI
//!
//! Each subcommand has its own module with handler functions.

pub mod configure;
pub mod definition;
pub mod inspect;

use crate::config::Config;
use crate::file_io;
use anyhow::Result;
use d2sockets::ManifestTables;
use std::path::Path;

/// Load the manifest from the flag/env path, falling back to the configured one
pub fn load_manifest(flag: Option<&Path>) -> Result<ManifestTables> {
    let path = Config::load()?.resolve_manifest(flag)?;
    file_io::load_manifest(&path)
}
