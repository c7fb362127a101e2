//! Building the full socket set for an item
//!
//! Sockets are built from live profile data when the item has an instance
//! with socket state, and from the item definition otherwise (vendor items,
//! collections, anything without an instance).

use crate::definitions::InventoryItemDefinition;
use crate::live::{InstanceComponents, ItemComponent, ItemComponentSet};
use crate::manifest::Definitions;
use crate::model::{BuiltSockets, Socket, SocketCategory, Sockets};
use crate::socket::{build_defined_socket, build_instanced_socket, pair_socket_slots};
use tracing::{debug, warn};

/// Build every socket we want to display or search for an item.
///
/// `missing_sockets` is set when the item has sockets and the profile returned
/// socket data, but not for this item's instance. The definition-only sockets
/// are still returned.
pub fn build_sockets<'d, D: Definitions>(
    item: &ItemComponent,
    components: Option<&ItemComponentSet>,
    defs: &'d D,
    item_def: &'d InventoryItemDefinition,
) -> BuiltSockets<'d> {
    let instance_id = item.instance_id();
    let live = match (instance_id, components) {
        (Some(id), Some(components)) => components.for_instance(id),
        _ => InstanceComponents::default(),
    };

    let missing_sockets = instance_id.is_some()
        && item_def.sockets.is_some()
        && components.is_some_and(ItemComponentSet::has_socket_data)
        && live.sockets.is_none();
    if missing_sockets {
        warn!(
            item_hash = item.item_hash,
            instance_id = instance_id.unwrap_or_default(),
            "profile has socket data, but none for this item"
        );
    }

    let mut sockets = build_instanced_sockets(defs, item_def, item, live);
    if sockets.is_none() && item_def.sockets.is_some() {
        sockets = build_defined_sockets(defs, item_def);
    }

    BuiltSockets {
        sockets,
        missing_sockets,
    }
}

/// Build sockets from the live instance.
///
/// Returns `None` if there's no instance, no live socket state, or the item
/// definition has no sockets.
pub fn build_instanced_sockets<'d, D: Definitions>(
    defs: &'d D,
    item_def: &'d InventoryItemDefinition,
    item: &ItemComponent,
    live: InstanceComponents<'_>,
) -> Option<Sockets<'d>> {
    item.instance_id()?;
    let entries = item_def.socket_entries();
    let states = live.sockets.filter(|s| !s.is_empty())?;
    if entries.is_empty() {
        return None;
    }

    let built: Vec<Option<Socket<'d>>> = pair_socket_slots(entries, states, live)
        .map(|slot| build_instanced_socket(defs, slot, live.plug_objectives))
        .collect();

    let categories = build_categories(defs, item_def, &built, |_| true);

    Some(Sockets {
        sockets: built.into_iter().flatten().collect(),
        categories,
    })
}

/// Build sockets from the item definition only. We can't tell which plugs
/// are inserted, so every socket's `plug` is `None`.
pub fn build_defined_sockets<'d, D: Definitions>(
    defs: &'d D,
    item_def: &'d InventoryItemDefinition,
) -> Option<Sockets<'d>> {
    let entries = item_def.socket_entries();
    if entries.is_empty() {
        return None;
    }

    let built: Vec<Option<Socket<'d>>> = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| build_defined_socket(defs, entry, index))
        .collect();

    // Without live data, a socket with no options has nothing worth showing
    let categories = build_categories(defs, item_def, &built, |s| !s.plug_options.is_empty());

    Some(Sockets {
        sockets: built.into_iter().flatten().collect(),
        categories,
    })
}

/// Group built sockets (indexed by socket index) into the item's categories,
/// sorted by the category definition's display order.
///
/// A socket listed under several categories appears in each of them.
fn build_categories<'d, D: Definitions>(
    defs: &'d D,
    item_def: &'d InventoryItemDefinition,
    built: &[Option<Socket<'d>>],
    include: impl Fn(&Socket<'d>) -> bool,
) -> Vec<SocketCategory<'d>> {
    let Some(block) = &item_def.sockets else {
        return Vec::new();
    };

    let mut categories: Vec<SocketCategory<'d>> = block
        .socket_categories
        .iter()
        .filter_map(|entry| {
            let Some(category) = defs.socket_category(entry.socket_category_hash) else {
                debug!(
                    item_hash = item_def.hash,
                    category = entry.socket_category_hash,
                    "unknown socket category on item"
                );
                return None;
            };

            let sockets = entry
                .socket_indexes
                .iter()
                .filter_map(|&index| built.get(index)?.as_ref())
                .filter(|socket| include(socket))
                .cloned()
                .collect();

            Some(SocketCategory { category, sockets })
        })
        .collect();

    categories.sort_by_key(|c| c.category.index);
    categories
}
