//! Building individual sockets
//!
//! Live socket state and the item definition's socket entries are related
//! only by array position. [`pair_socket_slots`] does that join once so the
//! builders never index two arrays in parallel.

use crate::definitions::{SocketCategoryDefinition, SocketEntryDefinition, SocketTypeDefinition};
use crate::live::{InstanceComponents, ItemPlugBase, ItemSocketState};
use crate::manifest::Definitions;
use crate::model::Socket;
use crate::options::{assemble_plug_options, is_plug_option};
use crate::plug::{build_plug, PlugObjectives};
use crate::sources::{plug_candidates, DEFINED_SOURCES, INSTANCED_SOURCES};
use tracing::debug;

/// Live state for one socket index, joined with its definition
#[derive(Debug, Clone, Copy)]
pub struct SocketSlot<'d, 'a> {
    pub index: usize,
    /// `None` when the live array is longer than the definition's
    pub definition: Option<&'d SocketEntryDefinition>,
    pub state: &'a ItemSocketState,
    pub reusable_plugs: Option<&'a [ItemPlugBase]>,
}

/// Join live socket state with socket entry definitions by index.
///
/// One slot is produced per live socket.
pub fn pair_socket_slots<'d, 'a>(
    entries: &'d [SocketEntryDefinition],
    states: &'a [ItemSocketState],
    live: InstanceComponents<'a>,
) -> impl Iterator<Item = SocketSlot<'d, 'a>> + 'a
where
    'd: 'a,
{
    states
        .iter()
        .enumerate()
        .map(move |(index, state)| SocketSlot {
            index,
            definition: entries.get(index),
            state,
            reusable_plugs: live.reusable_plugs_at(index),
        })
}

/// Build a socket from live profile data
pub fn build_instanced_socket<'d, D: Definitions>(
    defs: &'d D,
    slot: SocketSlot<'d, '_>,
    plug_objectives: Option<&PlugObjectives>,
) -> Option<Socket<'d>> {
    let Some(socket_def) = slot.definition else {
        debug!(index = slot.index, "no socket entry for live socket");
        return None;
    };

    // Invisible sockets are dropped, except trackers that still carry progress
    if !slot.state.is_visible && !has_tracked_progress(slot.state, plug_objectives) {
        return None;
    }

    let (socket_type, category) = resolve_socket_type(defs, socket_def, slot.index)?;
    let Some(category) = category else {
        debug!(
            index = slot.index,
            category = socket_type.socket_category_hash,
            "unknown socket category"
        );
        return None;
    };
    let is_perk = category.category_style.is_perk();

    let plug = build_plug(defs, slot.state.into(), socket_def, plug_objectives);

    let plug_options = if is_perk {
        let candidates = plug_candidates(INSTANCED_SOURCES, defs, socket_def, slot.reusable_plugs)
            .map(|(_, candidates)| candidates)
            .unwrap_or_default();
        assemble_plug_options(
            plug.as_ref(),
            candidates
                .into_iter()
                .map(|source| build_plug(defs, source, socket_def, plug_objectives)),
        )
    } else {
        plug.iter().cloned().collect()
    };

    Some(Socket {
        socket_index: slot.index,
        plug,
        plug_options,
        reusable_plug_items: slot.reusable_plugs.map(<[ItemPlugBase]>::to_vec),
        has_randomized_plug_items: has_randomized_plugs(socket_def, socket_type),
        is_perk,
        socket_definition: socket_def,
    })
}

/// Build a socket from its definition alone. Nothing is ever inserted.
pub fn build_defined_socket<'d, D: Definitions>(
    defs: &'d D,
    socket_def: &'d SocketEntryDefinition,
    index: usize,
) -> Option<Socket<'d>> {
    let (socket_type, category) = resolve_socket_type(defs, socket_def, index)?;
    let is_perk = category.is_some_and(|c| c.category_style.is_perk());

    let plug_options = if is_perk {
        plug_candidates(DEFINED_SOURCES, defs, socket_def, None)
            .map(|(_, candidates)| candidates)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|source| build_plug(defs, source, socket_def, None))
            .filter(is_plug_option)
            .collect()
    } else {
        Vec::new()
    };

    Some(Socket {
        socket_index: index,
        plug: None,
        plug_options,
        reusable_plug_items: Some(Vec::new()),
        has_randomized_plug_items: has_randomized_plugs(socket_def, socket_type),
        is_perk,
        socket_definition: socket_def,
    })
}

fn resolve_socket_type<'d, D: Definitions>(
    defs: &'d D,
    socket_def: &SocketEntryDefinition,
    index: usize,
) -> Option<(&'d SocketTypeDefinition, Option<&'d SocketCategoryDefinition>)> {
    let Some(socket_type) = defs.socket_type(socket_def.socket_type_hash) else {
        debug!(index, socket_type = socket_def.socket_type_hash, "unknown socket type");
        return None;
    };
    Some((socket_type, defs.socket_category(socket_type.socket_category_hash)))
}

fn has_tracked_progress(state: &ItemSocketState, plug_objectives: Option<&PlugObjectives>) -> bool {
    state
        .plug_hash
        .and_then(|hash| plug_objectives?.get(&hash))
        .is_some_and(|objectives| !objectives.is_empty())
}

fn has_randomized_plugs(
    socket_def: &SocketEntryDefinition,
    socket_type: &SocketTypeDefinition,
) -> bool {
    socket_def.randomized_plug_set().is_some() || socket_type.always_randomize_sockets
}
