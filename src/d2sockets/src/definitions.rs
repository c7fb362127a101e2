//! Static manifest definitions
//!
//! Only the fields the socket builder reads are modeled. Everything else in
//! the manifest JSON is ignored on deserialization.

use serde::{Deserialize, Serialize};

/// Name/description block shared by most definitions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DisplayProperties {
    pub name: String,
    pub description: String,
    pub icon: Option<String>,
}

/// `DestinyInventoryItemDefinition`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InventoryItemDefinition {
    pub hash: u32,
    pub display_properties: DisplayProperties,
    pub item_category_hashes: Vec<u32>,
    pub plug: Option<ItemPlugDefinition>,
    pub perks: Vec<ItemPerkEntry>,
    pub sockets: Option<ItemSocketBlock>,
}

impl InventoryItemDefinition {
    pub fn has_category(&self, category_hash: u32) -> bool {
        self.item_category_hashes.contains(&category_hash)
    }

    /// Socket entries declared by this item, empty if it has no socket block
    pub fn socket_entries(&self) -> &[SocketEntryDefinition] {
        self.sockets
            .as_ref()
            .map(|s| s.socket_entries.as_slice())
            .unwrap_or_default()
    }
}

/// Plug block present on items that can be inserted into a socket
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemPlugDefinition {
    pub plug_category_identifier: String,
    pub plug_category_hash: u32,
    pub enabled_rules: Vec<PlugRule>,
}

/// One enable rule; live fail indexes point into this list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlugRule {
    pub failure_message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemPerkEntry {
    pub perk_hash: u32,
}

/// Socket layout of an item
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemSocketBlock {
    pub socket_entries: Vec<SocketEntryDefinition>,
    pub socket_categories: Vec<ItemSocketCategory>,
}

/// Static description of one socket slot.
///
/// Hash fields use `0` for "not set", the same as the API. Use the accessor
/// methods rather than comparing against zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SocketEntryDefinition {
    pub socket_type_hash: u32,
    pub single_initial_item_hash: u32,
    pub reusable_plug_items: Vec<SocketEntryPlugItem>,
    pub reusable_plug_set_hash: Option<u32>,
    pub randomized_plug_set_hash: Option<u32>,
}

impl SocketEntryDefinition {
    pub fn single_initial_item(&self) -> Option<u32> {
        nonzero(self.single_initial_item_hash)
    }

    pub fn reusable_plug_set(&self) -> Option<u32> {
        self.reusable_plug_set_hash.and_then(nonzero)
    }

    pub fn randomized_plug_set(&self) -> Option<u32> {
        self.randomized_plug_set_hash.and_then(nonzero)
    }
}

/// Plug item reference inside a socket entry or plug set
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SocketEntryPlugItem {
    pub plug_item_hash: u32,
}

/// Display group of sockets on an item, by socket index
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemSocketCategory {
    pub socket_category_hash: u32,
    pub socket_indexes: Vec<usize>,
}

/// `DestinySocketTypeDefinition`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SocketTypeDefinition {
    pub hash: u32,
    pub socket_category_hash: u32,
    pub always_randomize_sockets: bool,
}

/// `DestinySocketCategoryDefinition`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SocketCategoryDefinition {
    pub hash: u32,
    pub display_properties: DisplayProperties,
    pub category_style: SocketCategoryStyle,
    /// Stable display order
    pub index: i32,
}

/// `DestinySocketCategoryStyle`, carried as an integer on the wire
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub enum SocketCategoryStyle {
    #[default]
    Unknown,
    Reusable,
    Consumable,
    Unlockable,
    Intrinsic,
    EnergyMeter,
    LargePerk,
    Abilities,
    Supers,
}

impl SocketCategoryStyle {
    /// Perk-style sockets have a meaningful list of alternative plugs.
    /// Everything else (mods, shaders, trackers) only cares about what's
    /// inserted.
    pub fn is_perk(self) -> bool {
        matches!(self, Self::Reusable | Self::Unlockable | Self::LargePerk)
    }
}

impl From<u32> for SocketCategoryStyle {
    fn from(value: u32) -> Self {
        match value {
            1 => Self::Reusable,
            2 => Self::Consumable,
            3 => Self::Unlockable,
            4 => Self::Intrinsic,
            5 => Self::EnergyMeter,
            6 => Self::LargePerk,
            7 => Self::Abilities,
            8 => Self::Supers,
            _ => Self::Unknown,
        }
    }
}

impl From<SocketCategoryStyle> for u32 {
    fn from(style: SocketCategoryStyle) -> Self {
        match style {
            SocketCategoryStyle::Unknown => 0,
            SocketCategoryStyle::Reusable => 1,
            SocketCategoryStyle::Consumable => 2,
            SocketCategoryStyle::Unlockable => 3,
            SocketCategoryStyle::Intrinsic => 4,
            SocketCategoryStyle::EnergyMeter => 5,
            SocketCategoryStyle::LargePerk => 6,
            SocketCategoryStyle::Abilities => 7,
            SocketCategoryStyle::Supers => 8,
        }
    }
}

/// `DestinyPlugSetDefinition`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlugSetDefinition {
    pub hash: u32,
    pub reusable_plug_items: Vec<SocketEntryPlugItem>,
}

/// `DestinySandboxPerkDefinition`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SandboxPerkDefinition {
    pub hash: u32,
    pub display_properties: DisplayProperties,
    pub is_displayable: bool,
}

fn nonzero(hash: u32) -> Option<u32> {
    (hash != 0).then_some(hash)
}
