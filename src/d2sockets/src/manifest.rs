//! Manifest definition lookups
//!
//! The socket builder only ever reads definitions by hash, through the
//! [`Definitions`] trait. [`ManifestTables`] is the in-memory implementation,
//! loaded from a Bungie `jsonWorldContent` document or filled in code.

use crate::definitions::{
    InventoryItemDefinition, PlugSetDefinition, SandboxPerkDefinition, SocketCategoryDefinition,
    SocketTypeDefinition,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

const INVENTORY_ITEM_TABLE: &str = "DestinyInventoryItemDefinition";
const SOCKET_TYPE_TABLE: &str = "DestinySocketTypeDefinition";
const SOCKET_CATEGORY_TABLE: &str = "DestinySocketCategoryDefinition";
const PLUG_SET_TABLE: &str = "DestinyPlugSetDefinition";
const SANDBOX_PERK_TABLE: &str = "DestinySandboxPerkDefinition";

/// Errors that can occur while loading manifest tables
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid manifest JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid definition in {table}: {source}")]
    Definition {
        table: &'static str,
        source: serde_json::Error,
    },

    #[error("Invalid hash key in {table}: {key}")]
    InvalidKey { table: &'static str, key: String },
}

/// Read-only access to manifest definitions by hash.
///
/// Implementations must return `None` for unknown hashes and must be
/// side-effect free: the builder may ask for the same hash many times.
pub trait Definitions {
    fn inventory_item(&self, hash: u32) -> Option<&InventoryItemDefinition>;
    fn socket_type(&self, hash: u32) -> Option<&SocketTypeDefinition>;
    fn socket_category(&self, hash: u32) -> Option<&SocketCategoryDefinition>;
    fn plug_set(&self, hash: u32) -> Option<&PlugSetDefinition>;
    fn sandbox_perk(&self, hash: u32) -> Option<&SandboxPerkDefinition>;
}

/// In-memory manifest tables keyed by definition hash
#[derive(Debug, Clone, Default)]
pub struct ManifestTables {
    inventory_items: HashMap<u32, InventoryItemDefinition>,
    socket_types: HashMap<u32, SocketTypeDefinition>,
    socket_categories: HashMap<u32, SocketCategoryDefinition>,
    plug_sets: HashMap<u32, PlugSetDefinition>,
    sandbox_perks: HashMap<u32, SandboxPerkDefinition>,
}

/// Raw table map: table name -> hash string -> definition JSON
#[derive(Deserialize)]
struct WorldContent(HashMap<String, HashMap<String, serde_json::Value>>);

impl ManifestTables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a `jsonWorldContent`-shaped document.
    ///
    /// Tables the socket builder doesn't use are skipped; tables that are
    /// missing from the document are left empty.
    pub fn from_json(json: &str) -> Result<Self, ManifestError> {
        let WorldContent(mut tables) = serde_json::from_str(json)?;

        Ok(Self {
            inventory_items: take_table(&mut tables, INVENTORY_ITEM_TABLE)?,
            socket_types: take_table(&mut tables, SOCKET_TYPE_TABLE)?,
            socket_categories: take_table(&mut tables, SOCKET_CATEGORY_TABLE)?,
            plug_sets: take_table(&mut tables, PLUG_SET_TABLE)?,
            sandbox_perks: take_table(&mut tables, SANDBOX_PERK_TABLE)?,
        })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn insert_inventory_item(&mut self, def: InventoryItemDefinition) {
        self.inventory_items.insert(def.hash, def);
    }

    pub fn insert_socket_type(&mut self, def: SocketTypeDefinition) {
        self.socket_types.insert(def.hash, def);
    }

    pub fn insert_socket_category(&mut self, def: SocketCategoryDefinition) {
        self.socket_categories.insert(def.hash, def);
    }

    pub fn insert_plug_set(&mut self, def: PlugSetDefinition) {
        self.plug_sets.insert(def.hash, def);
    }

    pub fn insert_sandbox_perk(&mut self, def: SandboxPerkDefinition) {
        self.sandbox_perks.insert(def.hash, def);
    }

    /// Get statistics about loaded tables
    pub fn stats(&self) -> ManifestStats {
        ManifestStats {
            inventory_items: self.inventory_items.len(),
            socket_types: self.socket_types.len(),
            socket_categories: self.socket_categories.len(),
            plug_sets: self.plug_sets.len(),
            sandbox_perks: self.sandbox_perks.len(),
        }
    }
}

impl Definitions for ManifestTables {
    fn inventory_item(&self, hash: u32) -> Option<&InventoryItemDefinition> {
        self.inventory_items.get(&hash)
    }

    fn socket_type(&self, hash: u32) -> Option<&SocketTypeDefinition> {
        self.socket_types.get(&hash)
    }

    fn socket_category(&self, hash: u32) -> Option<&SocketCategoryDefinition> {
        self.socket_categories.get(&hash)
    }

    fn plug_set(&self, hash: u32) -> Option<&PlugSetDefinition> {
        self.plug_sets.get(&hash)
    }

    fn sandbox_perk(&self, hash: u32) -> Option<&SandboxPerkDefinition> {
        self.sandbox_perks.get(&hash)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestStats {
    pub inventory_items: usize,
    pub socket_types: usize,
    pub socket_categories: usize,
    pub plug_sets: usize,
    pub sandbox_perks: usize,
}

fn take_table<T: DeserializeOwned>(
    tables: &mut HashMap<String, HashMap<String, serde_json::Value>>,
    table: &'static str,
) -> Result<HashMap<u32, T>, ManifestError> {
    let Some(raw) = tables.remove(table) else {
        return Ok(HashMap::new());
    };

    raw.into_iter()
        .map(|(key, value)| {
            let hash = key
                .parse::<u32>()
                .map_err(|_| ManifestError::InvalidKey { table, key })?;
            let def = serde_json::from_value(value)
                .map_err(|source| ManifestError::Definition { table, source })?;
            Ok((hash, def))
        })
        .collect()
}
