//! Where a perk socket's alternative plugs come from
//!
//! Sources are tried in order. The first one that applies to the socket
//! supplies every candidate, even if it turns out to be empty.

use crate::definitions::SocketEntryDefinition;
use crate::live::ItemPlugBase;
use crate::manifest::Definitions;
use crate::plug::PlugSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CandidateSource {
    /// Live reusable plugs for this socket index
    LiveReusable,
    /// The socket entry's reusable plug set
    PlugSet,
    /// The socket entry's inline reusable plug items
    InlineItems,
}

/// Source priority when live profile data is available
pub const INSTANCED_SOURCES: &[CandidateSource] = &[
    CandidateSource::LiveReusable,
    CandidateSource::PlugSet,
    CandidateSource::InlineItems,
];

/// Source priority when building from definitions only
pub const DEFINED_SOURCES: &[CandidateSource] =
    &[CandidateSource::PlugSet, CandidateSource::InlineItems];

impl CandidateSource {
    /// Candidates from this source, or `None` if it doesn't apply.
    ///
    /// A plug set hash that doesn't resolve still applies, with no candidates.
    pub fn candidates<'a, D: Definitions>(
        self,
        defs: &'a D,
        socket_def: &'a SocketEntryDefinition,
        live_plugs: Option<&'a [ItemPlugBase]>,
    ) -> Option<Vec<PlugSource<'a>>> {
        match self {
            Self::LiveReusable => {
                live_plugs.map(|plugs| plugs.iter().map(PlugSource::from).collect())
            }
            Self::PlugSet => socket_def.reusable_plug_set().map(|hash| {
                defs.plug_set(hash)
                    .map(|set| set.reusable_plug_items.iter().map(PlugSource::from).collect())
                    .unwrap_or_default()
            }),
            Self::InlineItems => (!socket_def.reusable_plug_items.is_empty()).then(|| {
                socket_def
                    .reusable_plug_items
                    .iter()
                    .map(PlugSource::from)
                    .collect()
            }),
        }
    }
}

/// Candidates from the first applicable source in `sources`
pub fn plug_candidates<'a, D: Definitions>(
    sources: &[CandidateSource],
    defs: &'a D,
    socket_def: &'a SocketEntryDefinition,
    live_plugs: Option<&'a [ItemPlugBase]>,
) -> Option<(CandidateSource, Vec<PlugSource<'a>>)> {
    sources.iter().find_map(|&source| {
        source
            .candidates(defs, socket_def, live_plugs)
            .map(|candidates| (source, candidates))
    })
}
