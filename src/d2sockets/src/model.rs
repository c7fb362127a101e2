//! Built socket and plug view models
//!
//! These borrow their definitions from the manifest, so a built socket set
//! lives no longer than the [`Definitions`](crate::Definitions) it came from.

use crate::definitions::{
    InventoryItemDefinition, SandboxPerkDefinition, SocketCategoryDefinition,
    SocketEntryDefinition,
};
use crate::live::{ItemPlugBase, ObjectiveProgress};
use serde::Serialize;
use std::collections::HashMap;

/// Stat hash -> value contributed by a plug
pub type PlugStats = HashMap<u32, i32>;

/// A single plug, inserted or available
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Plug<'d> {
    pub plug_item: &'d InventoryItemDefinition,
    pub enabled: bool,
    /// Failure messages joined by newlines, empty if none
    pub enable_fail_reasons: String,
    pub plug_objectives: Vec<ObjectiveProgress>,
    pub perks: Vec<&'d SandboxPerkDefinition>,
    /// Filled in by stat calculation, never by the socket builder
    pub stats: Option<PlugStats>,
}

impl Plug<'_> {
    pub fn hash(&self) -> u32 {
        self.plug_item.hash
    }

    pub fn name(&self) -> &str {
        &self.plug_item.display_properties.name
    }

    pub fn has_category(&self, category_hash: u32) -> bool {
        self.plug_item.has_category(category_hash)
    }
}

/// One socket on an item
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Socket<'d> {
    /// Position in the item definition's socket entries
    pub socket_index: usize,
    /// The inserted plug. Always `None` when built from definitions only.
    pub plug: Option<Plug<'d>>,
    /// Inserted plug plus alternatives for perk sockets; at most the inserted
    /// plug for everything else
    pub plug_options: Vec<Plug<'d>>,
    /// Raw live reusable plugs, kept for downstream consumers
    pub reusable_plug_items: Option<Vec<ItemPlugBase>>,
    pub has_randomized_plug_items: bool,
    pub is_perk: bool,
    pub socket_definition: &'d SocketEntryDefinition,
}

impl Socket<'_> {
    pub fn plug_hash(&self) -> Option<u32> {
        self.plug.as_ref().map(Plug::hash)
    }

    pub fn option_hashes(&self) -> Vec<u32> {
        self.plug_options.iter().map(Plug::hash).collect()
    }
}

/// A display group of sockets
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SocketCategory<'d> {
    pub category: &'d SocketCategoryDefinition,
    pub sockets: Vec<Socket<'d>>,
}

impl SocketCategory<'_> {
    pub fn socket_indexes(&self) -> Vec<usize> {
        self.sockets.iter().map(|s| s.socket_index).collect()
    }
}

/// All sockets for an item, flat and grouped by category
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Sockets<'d> {
    pub sockets: Vec<Socket<'d>>,
    /// Sorted by the category definition's `index`
    pub categories: Vec<SocketCategory<'d>>,
}

impl<'d> Sockets<'d> {
    pub fn socket_by_index(&self, index: usize) -> Option<&Socket<'d>> {
        self.sockets.iter().find(|s| s.socket_index == index)
    }

    pub fn category_by_hash(&self, hash: u32) -> Option<&SocketCategory<'d>> {
        self.categories.iter().find(|c| c.category.hash == hash)
    }
}

/// Result of [`build_sockets`](crate::build_sockets)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuiltSockets<'d> {
    pub sockets: Option<Sockets<'d>>,
    /// Live socket data should have existed for this item but didn't
    pub missing_sockets: bool,
}
