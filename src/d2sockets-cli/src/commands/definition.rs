//! Definition command: sockets for an item with no live instance

use crate::render::render_sockets;
use anyhow::{Context, Result};
use d2sockets::{build_defined_sockets, BuiltSockets, Definitions};
use std::path::Path;

pub fn build<'d, D: Definitions>(defs: &'d D, hash: u32) -> Result<BuiltSockets<'d>> {
    let item_def = defs
        .inventory_item(hash)
        .with_context(|| format!("Item {} not found in manifest", hash))?;

    Ok(BuiltSockets {
        sockets: build_defined_sockets(defs, item_def),
        missing_sockets: false,
    })
}

pub fn handle(manifest: Option<&Path>, hash: u32, json: bool) -> Result<()> {
    let defs = super::load_manifest(manifest)?;
    let built = build(&defs, hash)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&built)?);
    } else if let Some(item_def) = defs.inventory_item(hash) {
        println!("{}", render_sockets(item_def, &built));
    }
    Ok(())
}
