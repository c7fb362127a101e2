//! Plug construction from live records or static definitions

use crate::definitions::{
    InventoryItemDefinition, SandboxPerkDefinition, SocketEntryDefinition, SocketEntryPlugItem,
};
use crate::live::{ItemPlugBase, ItemSocketState, ObjectiveProgress};
use crate::manifest::Definitions;
use crate::model::Plug;
use std::collections::HashMap;

/// Plug hash -> objectives tracked on that plug
pub type PlugObjectives = HashMap<u32, Vec<ObjectiveProgress>>;

/// Where a plug comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlugSource<'a> {
    /// Live profile data: the inserted plug or a live reusable plug
    Live(LivePlug<'a>),
    /// A plug item hash from a socket entry or plug set definition
    Defined(u32),
}

/// Live plug reference, normalized from either of the two live record shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LivePlug<'a> {
    pub plug_hash: Option<u32>,
    pub enabled: bool,
    /// The inserted plug has no insert flag of its own and counts as insertable
    pub can_insert: bool,
    pub enable_fail_indexes: &'a [usize],
}

impl<'a> From<&'a ItemSocketState> for LivePlug<'a> {
    fn from(state: &'a ItemSocketState) -> Self {
        Self {
            plug_hash: state.plug_hash,
            enabled: state.is_enabled,
            can_insert: true,
            enable_fail_indexes: &state.enable_fail_indexes,
        }
    }
}

impl<'a> From<&'a ItemPlugBase> for LivePlug<'a> {
    fn from(plug: &'a ItemPlugBase) -> Self {
        Self {
            plug_hash: Some(plug.plug_item_hash),
            enabled: plug.enabled,
            can_insert: plug.can_insert,
            enable_fail_indexes: &plug.enable_fail_indexes,
        }
    }
}

impl<'a> From<&'a ItemSocketState> for PlugSource<'a> {
    fn from(state: &'a ItemSocketState) -> Self {
        Self::Live(state.into())
    }
}

impl<'a> From<&'a ItemPlugBase> for PlugSource<'a> {
    fn from(plug: &'a ItemPlugBase) -> Self {
        Self::Live(plug.into())
    }
}

impl From<&SocketEntryPlugItem> for PlugSource<'_> {
    fn from(item: &SocketEntryPlugItem) -> Self {
        Self::Defined(item.plug_item_hash)
    }
}

/// Build a plug from any source. `None` means the plug doesn't exist as far
/// as the manifest is concerned.
pub fn build_plug<'d, D: Definitions>(
    defs: &'d D,
    source: PlugSource<'_>,
    socket_def: &SocketEntryDefinition,
    plug_objectives: Option<&PlugObjectives>,
) -> Option<Plug<'d>> {
    match source {
        PlugSource::Live(live) => build_live_plug(defs, live, socket_def, plug_objectives),
        PlugSource::Defined(hash) => build_defined_plug(defs, hash),
    }
}

/// Build a plug from live profile data.
///
/// An unknown plug hash falls back to the socket's initial item.
pub fn build_live_plug<'d, D: Definitions>(
    defs: &'d D,
    live: LivePlug<'_>,
    socket_def: &SocketEntryDefinition,
    plug_objectives: Option<&PlugObjectives>,
) -> Option<Plug<'d>> {
    let plug_hash = live.plug_hash.filter(|&h| h != 0)?;

    let plug_item = defs
        .inventory_item(plug_hash)
        .or_else(|| socket_def.single_initial_item().and_then(|h| defs.inventory_item(h)))?;

    Some(Plug {
        plug_item,
        enabled: live.enabled && live.can_insert,
        enable_fail_reasons: fail_reasons(plug_item, live.enable_fail_indexes),
        plug_objectives: plug_objectives
            .and_then(|objectives| objectives.get(&plug_hash))
            .cloned()
            .unwrap_or_default(),
        perks: resolve_perks(defs, plug_item),
        stats: None,
    })
}

/// Build a plug from a static plug item hash. Always enabled.
pub fn build_defined_plug<D: Definitions>(defs: &D, plug_hash: u32) -> Option<Plug<'_>> {
    if plug_hash == 0 {
        return None;
    }
    let plug_item = defs.inventory_item(plug_hash)?;

    Some(Plug {
        plug_item,
        enabled: true,
        enable_fail_reasons: String::new(),
        plug_objectives: Vec::new(),
        perks: resolve_perks(defs, plug_item),
        stats: None,
    })
}

fn fail_reasons(plug_item: &InventoryItemDefinition, fail_indexes: &[usize]) -> String {
    let Some(plug) = &plug_item.plug else {
        return String::new();
    };

    fail_indexes
        .iter()
        .filter_map(|&i| plug.enabled_rules.get(i))
        .map(|rule| rule.failure_message.as_str())
        .filter(|msg| !msg.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn resolve_perks<'d, D: Definitions>(
    defs: &'d D,
    plug_item: &InventoryItemDefinition,
) -> Vec<&'d SandboxPerkDefinition> {
    plug_item
        .perks
        .iter()
        .filter_map(|perk| defs.sandbox_perk(perk.perk_hash))
        .collect()
}
