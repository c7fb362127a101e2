//! Loading manifest and profile files

use anyhow::{Context, Result};
use d2sockets::{ItemComponent, ItemComponentSet, ManifestTables};
use serde::Deserialize;
use std::path::Path;

/// Items plus their instance components, as found in a profile response
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileItems {
    pub items: Vec<ItemComponent>,
    pub item_components: Option<ItemComponentSet>,
}

pub fn load_manifest(path: &Path) -> Result<ManifestTables> {
    let tables = ManifestTables::from_path(path)
        .with_context(|| format!("Failed to load manifest: {}", path.display()))?;

    let stats = tables.stats();
    tracing::debug!(
        items = stats.inventory_items,
        socket_types = stats.socket_types,
        socket_categories = stats.socket_categories,
        plug_sets = stats.plug_sets,
        perks = stats.sandbox_perks,
        "manifest loaded"
    );
    Ok(tables)
}

pub fn load_profile(path: &Path) -> Result<ProfileItems> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read profile: {}", path.display()))?;

    serde_json::from_str(&content).context("Failed to parse profile")
}
