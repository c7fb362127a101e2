//! Inspect command: build sockets for items in a profile response

use crate::file_io::{self, ProfileItems};
use crate::render::render_sockets;
use anyhow::{bail, Result};
use d2sockets::{build_sockets, BuiltSockets, Definitions, ItemComponent};
use serde::Serialize;
use std::path::Path;

/// One inspected item in JSON output
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemReport<'d> {
    pub item_hash: u32,
    pub item_instance_id: Option<&'d str>,
    pub name: &'d str,
    #[serde(flatten)]
    pub built: BuiltSockets<'d>,
}

/// Items to inspect, narrowed to one instance if requested
fn select_items<'p>(
    profile: &'p ProfileItems,
    instance: Option<&str>,
) -> Result<Vec<&'p ItemComponent>> {
    let Some(id) = instance else {
        return Ok(profile.items.iter().collect());
    };

    let selected: Vec<_> = profile
        .items
        .iter()
        .filter(|item| item.instance_id() == Some(id))
        .collect();
    if selected.is_empty() {
        bail!("No item with instance ID {} in profile", id);
    }
    Ok(selected)
}

/// Build reports for every selected item the manifest knows about
pub fn inspect_items<'d, D: Definitions>(
    defs: &'d D,
    profile: &'d ProfileItems,
    instance: Option<&str>,
) -> Result<Vec<ItemReport<'d>>> {
    let items = select_items(profile, instance)?;
    let components = profile.item_components.as_ref();

    let reports = items
        .into_iter()
        .filter_map(|item| {
            let Some(item_def) = defs.inventory_item(item.item_hash) else {
                tracing::warn!(item_hash = item.item_hash, "item not in manifest, skipping");
                return None;
            };
            Some(ItemReport {
                item_hash: item.item_hash,
                item_instance_id: item.instance_id(),
                name: &item_def.display_properties.name,
                built: build_sockets(item, components, defs, item_def),
            })
        })
        .collect();

    Ok(reports)
}

pub fn handle(
    manifest: Option<&Path>,
    profile_path: &Path,
    instance: Option<&str>,
    json: bool,
) -> Result<()> {
    let defs = super::load_manifest(manifest)?;
    let profile = file_io::load_profile(profile_path)?;
    let reports = inspect_items(&defs, &profile, instance)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    for report in &reports {
        if let Some(item_def) = defs.inventory_item(report.item_hash) {
            println!("{}", render_sockets(item_def, &report.built));
        }
    }
    Ok(())
}
