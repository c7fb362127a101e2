//! Live item component records from the profile API
//!
//! These mirror the shapes returned by `GetProfile` / `GetItem` for the
//! `ItemSockets` (305), `ItemReusablePlugs` (310) and `ItemPlugObjectives`
//! (309) components. Every field is optional on the wire.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// `DestinyItemComponent`, the minimal reference to an inventory item
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemComponent {
    pub item_hash: u32,
    /// Only set for non-stackable items owned by a player
    pub item_instance_id: Option<String>,
    pub quantity: u32,
}

impl ItemComponent {
    pub fn instance_id(&self) -> Option<&str> {
        self.item_instance_id.as_deref().filter(|id| !id.is_empty())
    }
}

/// `DestinyItemSocketState`: what is plugged into one socket right now
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemSocketState {
    pub plug_hash: Option<u32>,
    pub is_enabled: bool,
    pub is_visible: bool,
    pub enable_fail_indexes: Vec<usize>,
}

/// `DestinyItemPlugBase`: one plug that could be inserted into a socket
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemPlugBase {
    pub plug_item_hash: u32,
    pub can_insert: bool,
    pub enabled: bool,
    pub insert_fail_indexes: Vec<usize>,
    pub enable_fail_indexes: Vec<usize>,
}

/// `DestinyObjectiveProgress`, e.g. a kill tracker count
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ObjectiveProgress {
    pub objective_hash: u32,
    pub progress: Option<i64>,
    pub completion_value: i64,
    pub complete: bool,
    pub visible: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemSocketsComponent {
    pub sockets: Vec<ItemSocketState>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemReusablePlugsComponent {
    /// Socket index -> plugs available in that socket
    pub plugs: HashMap<usize, Vec<ItemPlugBase>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemPlugObjectivesComponent {
    /// Plug item hash -> objectives tracked on that plug
    pub objectives_per_plug: HashMap<u32, Vec<ObjectiveProgress>>,
}

/// A component keyed by item instance id. `data` is absent when the
/// component was not requested or is privacy-restricted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryComponent<T> {
    #[serde(default = "Option::default")]
    pub data: Option<HashMap<String, T>>,
}

impl<T> Default for DictionaryComponent<T> {
    fn default() -> Self {
        Self { data: None }
    }
}

impl<T> DictionaryComponent<T> {
    pub fn get(&self, instance_id: &str) -> Option<&T> {
        self.data.as_ref()?.get(instance_id)
    }

    /// Whether the keyed structure itself was returned
    pub fn has_data(&self) -> bool {
        self.data.is_some()
    }
}

/// `DestinyItemComponentSetOfint64`, the per-instance component bundle
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemComponentSet {
    pub sockets: Option<DictionaryComponent<ItemSocketsComponent>>,
    pub reusable_plugs: Option<DictionaryComponent<ItemReusablePlugsComponent>>,
    pub plug_objectives: Option<DictionaryComponent<ItemPlugObjectivesComponent>>,
}

impl ItemComponentSet {
    /// Resolve all live lookups for one item instance
    pub fn for_instance(&self, instance_id: &str) -> InstanceComponents<'_> {
        InstanceComponents {
            sockets: self
                .sockets
                .as_ref()
                .and_then(|c| c.get(instance_id))
                .map(|c| c.sockets.as_slice()),
            reusable_plugs: self
                .reusable_plugs
                .as_ref()
                .and_then(|c| c.get(instance_id))
                .map(|c| &c.plugs),
            plug_objectives: self
                .plug_objectives
                .as_ref()
                .and_then(|c| c.get(instance_id))
                .map(|c| &c.objectives_per_plug),
        }
    }

    /// Whether live socket state was returned at all (for any instance)
    pub fn has_socket_data(&self) -> bool {
        self.sockets.as_ref().is_some_and(DictionaryComponent::has_data)
    }
}

/// Live data for a single item instance, borrowed from an [`ItemComponentSet`]
#[derive(Debug, Clone, Copy, Default)]
pub struct InstanceComponents<'a> {
    pub sockets: Option<&'a [ItemSocketState]>,
    pub reusable_plugs: Option<&'a HashMap<usize, Vec<ItemPlugBase>>>,
    pub plug_objectives: Option<&'a HashMap<u32, Vec<ObjectiveProgress>>>,
}

impl<'a> InstanceComponents<'a> {
    pub fn reusable_plugs_at(&self, index: usize) -> Option<&'a [ItemPlugBase]> {
        self.reusable_plugs
            .and_then(|plugs| plugs.get(&index))
            .map(Vec::as_slice)
    }

    pub fn objectives_for(&self, plug_hash: u32) -> Option<&'a [ObjectiveProgress]> {
        self.plug_objectives
            .and_then(|objectives| objectives.get(&plug_hash))
            .map(Vec::as_slice)
    }
}
