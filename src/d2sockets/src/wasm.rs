//! WebAssembly bindings for d2sockets
//!
//! Inputs and outputs cross the boundary as JSON strings.

use crate::live::{ItemComponent, ItemComponentSet};
use crate::manifest::{Definitions, ManifestTables};
use crate::socket_set::{build_defined_sockets, build_sockets};
use wasm_bindgen::prelude::*;

/// JavaScript-friendly socket builder holding a loaded manifest
#[wasm_bindgen]
pub struct SocketBuilder {
    defs: ManifestTables,
}

#[wasm_bindgen]
impl SocketBuilder {
    /// Load manifest tables from a `jsonWorldContent` document
    #[wasm_bindgen(constructor)]
    pub fn new(manifest_json: &str) -> Result<SocketBuilder, JsValue> {
        let defs = ManifestTables::from_json(manifest_json)
            .map_err(|e| JsValue::from_str(&format!("Manifest load failed: {}", e)))?;
        Ok(SocketBuilder { defs })
    }

    /// Build sockets for an item
    ///
    /// # Arguments
    /// * `item_json` - `DestinyItemComponent` JSON
    /// * `components_json` - `DestinyItemComponentSetOfint64` JSON, or empty
    ///
    /// # Returns
    /// `BuiltSockets` JSON
    #[wasm_bindgen(js_name = buildSockets)]
    pub fn build_sockets(&self, item_json: &str, components_json: &str) -> Result<String, JsValue> {
        let item: ItemComponent = serde_json::from_str(item_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid item: {}", e)))?;
        let components: Option<ItemComponentSet> = if components_json.trim().is_empty() {
            None
        } else {
            Some(
                serde_json::from_str(components_json)
                    .map_err(|e| JsValue::from_str(&format!("Invalid components: {}", e)))?,
            )
        };

        let item_def = self
            .defs
            .inventory_item(item.item_hash)
            .ok_or_else(|| JsValue::from_str(&format!("Unknown item hash: {}", item.item_hash)))?;

        let built = build_sockets(&item, components.as_ref(), &self.defs, item_def);
        serde_json::to_string(&built)
            .map_err(|e| JsValue::from_str(&format!("Serialize failed: {}", e)))
    }

    /// Build definition-only sockets for an item hash. Returns `null` JSON if
    /// the item has no sockets.
    #[wasm_bindgen(js_name = buildDefinedSockets)]
    pub fn build_defined_sockets(&self, item_hash: u32) -> Result<String, JsValue> {
        let item_def = self
            .defs
            .inventory_item(item_hash)
            .ok_or_else(|| JsValue::from_str(&format!("Unknown item hash: {}", item_hash)))?;

        let sockets = build_defined_sockets(&self.defs, item_def);
        serde_json::to_string(&sockets)
            .map_err(|e| JsValue::from_str(&format!("Serialize failed: {}", e)))
    }

    /// Number of inventory item definitions loaded
    #[wasm_bindgen(js_name = itemCount)]
    pub fn item_count(&self) -> usize {
        self.defs.stats().inventory_items
    }

    /// Whether a plug would be shown as an option, by plug item hash
    #[wasm_bindgen(js_name = isPlugOption)]
    pub fn is_plug_option(&self, plug_hash: u32) -> js_sys::Boolean {
        let shown = crate::plug::build_defined_plug(&self.defs, plug_hash)
            .is_some_and(|plug| crate::options::is_plug_option(&plug));
        js_sys::Boolean::from(shown)
    }
}
