//! # d2sockets
//!
//! Destiny 2 item sockets and plugs, reconciled from live profile data and
//! manifest definitions.
//!
//! Sockets are how perks, mods, shaders and intrinsic traits attach to
//! weapons and armor. This library:
//! - Merges an item's live socket state with its definition's socket entries
//! - Picks the inserted plug and builds the list of alternative plugs
//! - Filters plugs that aren't worth showing as options
//! - Groups sockets into the item's display categories
//!
//! When an item has no live instance (vendor items, collections), sockets are
//! built from the definition alone.
//!
//! ## Example
//!
//! ```no_run
//! use d2sockets::{build_sockets, Definitions, ItemComponent, ItemComponentSet, ManifestTables};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let defs = ManifestTables::from_path("world_content.json")?;
//! let components_json = std::fs::read_to_string("components.json")?;
//! let components: ItemComponentSet = serde_json::from_str(&components_json)?;
//!
//! let item = ItemComponent {
//!     item_hash: 1_248_372_789,
//!     item_instance_id: Some("6917529863125378912".to_string()),
//!     quantity: 1,
//! };
//! let item_def = defs.inventory_item(item.item_hash).ok_or("unknown item")?;
//!
//! let built = build_sockets(&item, Some(&components), &defs, item_def);
//! if let Some(sockets) = &built.sockets {
//!     for category in &sockets.categories {
//!         println!("{}", category.category.display_properties.name);
//!         for socket in &category.sockets {
//!             let names: Vec<_> = socket.plug_options.iter().map(|p| p.name()).collect();
//!             println!("  [{}] {}", socket.socket_index, names.join(", "));
//!         }
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod definitions;
pub mod hashes;
pub mod live;
pub mod manifest;
pub mod model;
pub mod options;
pub mod plug;
pub mod socket;
pub mod socket_set;
pub mod sources;

#[cfg(feature = "wasm")]
pub mod wasm;

#[cfg(test)]
mod test_fixtures;

#[doc(inline)]
pub use definitions::{
    InventoryItemDefinition, PlugSetDefinition, SandboxPerkDefinition, SocketCategoryDefinition,
    SocketCategoryStyle, SocketEntryDefinition, SocketTypeDefinition,
};
#[doc(inline)]
pub use live::{
    InstanceComponents, ItemComponent, ItemComponentSet, ItemPlugBase, ItemSocketState,
    ObjectiveProgress,
};
#[doc(inline)]
pub use manifest::{Definitions, ManifestError, ManifestStats, ManifestTables};
#[doc(inline)]
pub use model::{BuiltSockets, Plug, Socket, SocketCategory, Sockets};
#[doc(inline)]
pub use options::is_plug_option;
#[doc(inline)]
pub use socket_set::{build_defined_sockets, build_instanced_sockets, build_sockets};
