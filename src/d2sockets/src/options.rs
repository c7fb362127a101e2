//! Plug option filtering and assembly
//!
//! Perk sockets show the inserted plug alongside every alternative the
//! player could pick. A handful of plug kinds are noise in that list and get
//! filtered out here. The inserted plug itself is never filtered.

use crate::hashes::{is_excluded_plug, item_category, MASTERWORK_STAT_PLUG_CATEGORY};
use crate::model::Plug;
use tracing::trace;

/// Whether a plug belongs in a socket's list of options
pub fn is_plug_option(plug: &Plug<'_>) -> bool {
    let item = plug.plug_item;

    !is_excluded_plug(item.hash)
        && !item.has_category(item_category::MASTERWORKS_MODS)
        && !item.has_category(item_category::GHOST_MODS_PROJECTIONS)
        && !item
            .plug
            .as_ref()
            .is_some_and(|p| p.plug_category_identifier.contains(MASTERWORK_STAT_PLUG_CATEGORY))
}

/// Merge the inserted plug with candidate plugs into an ordered option list.
///
/// Candidates are given in source order; `None` entries are candidates that
/// failed to build and only count towards position. The inserted plug takes
/// the position of its matching candidate, or the front of the list if no
/// candidate matches.
pub fn assemble_plug_options<'d, I>(active: Option<&Plug<'d>>, candidates: I) -> Vec<Plug<'d>>
where
    I: IntoIterator<Item = Option<Plug<'d>>>,
{
    candidates
        .into_iter()
        .enumerate()
        .filter_map(|(position, built)| built.map(|plug| (position, plug)))
        .fold(PlugOptions::default(), |options, (position, candidate)| {
            options.add(candidate, position, active)
        })
        .finish(active)
}

#[derive(Default)]
struct PlugOptions<'d> {
    plugs: Vec<Plug<'d>>,
    active_placed: bool,
    intrinsic_placed: bool,
}

fn is_intrinsic(plug: &Plug<'_>) -> bool {
    plug.has_category(item_category::WEAPON_MODS_INTRINSIC)
}

impl<'d> PlugOptions<'d> {
    fn add(mut self, candidate: Plug<'d>, position: usize, active: Option<&Plug<'d>>) -> Self {
        if !is_plug_option(&candidate) {
            trace!(plug = candidate.hash(), "filtered plug option");
            return self;
        }

        match active {
            Some(active) if active.hash() == candidate.hash() => {
                // The live-built inserted plug replaces its candidate, once
                if !self.active_placed {
                    self.plugs.push(active.clone());
                    self.active_placed = true;
                    self.intrinsic_placed |= is_intrinsic(active);
                }
            }
            // The API repeats intrinsic frames past the first position. An
            // inserted intrinsic always ends up in the list, so it wins.
            _ if is_intrinsic(&candidate)
                && (position > 0 || self.intrinsic_placed || active.is_some_and(is_intrinsic)) =>
            {
                trace!(plug = candidate.hash(), position, "dropped repeated intrinsic");
            }
            _ => {
                self.intrinsic_placed |= is_intrinsic(&candidate);
                self.plugs.push(candidate);
            }
        }
        self
    }

    fn finish(mut self, active: Option<&Plug<'d>>) -> Vec<Plug<'d>> {
        if let Some(active) = active {
            if !self.active_placed {
                self.plugs.insert(0, active.clone());
            }
        }
        self.plugs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plug::build_defined_plug;
    use crate::test_fixtures::*;

    fn hashes(plugs: &[Plug<'_>]) -> Vec<u32> {
        plugs.iter().map(Plug::hash).collect()
    }

    #[test]
    fn test_filter_allows_regular_perks() {
        let defs = fixture_manifest();
        assert!(is_plug_option(&build_defined_plug(&defs, OUTLAW).unwrap()));
        assert!(is_plug_option(&build_defined_plug(&defs, INTRINSIC_FRAME).unwrap()));
    }

    #[test]
    fn test_filter_exclusions() {
        let defs = fixture_manifest();
        for hash in [DEFAULT_ORNAMENT, MASTERWORK_TIER, GHOST_PROJECTION, MASTERWORK_STAT] {
            let plug = build_defined_plug(&defs, hash).unwrap();
            assert!(!is_plug_option(&plug), "{} should be filtered", hash);
        }
    }

    #[test]
    fn test_no_active_plug() {
        let defs = fixture_manifest();
        let candidates =
            [RAMPAGE, MASTERWORK_TIER, KILL_CLIP].map(|h| build_defined_plug(&defs, h));
        let options = assemble_plug_options(None, candidates);
        assert_eq!(hashes(&options), vec![RAMPAGE, KILL_CLIP]);
    }

    #[test]
    fn test_active_takes_candidate_position() {
        let defs = fixture_manifest();
        let mut active = build_defined_plug(&defs, OUTLAW).unwrap();
        active.enable_fail_reasons = "live".to_string();

        let candidates = [KILL_CLIP, OUTLAW, SNAPSHOT].map(|h| build_defined_plug(&defs, h));
        let options = assemble_plug_options(Some(&active), candidates);

        assert_eq!(hashes(&options), vec![KILL_CLIP, OUTLAW, SNAPSHOT]);
        // The live-built object, not the candidate
        assert_eq!(options[1], active);
    }

    #[test]
    fn test_active_not_among_candidates_stays_first() {
        let defs = fixture_manifest();
        let active = build_defined_plug(&defs, RAMPAGE).unwrap();
        let candidates = [KILL_CLIP, SNAPSHOT].map(|h| build_defined_plug(&defs, h));
        let options = assemble_plug_options(Some(&active), candidates);
        assert_eq!(hashes(&options), vec![RAMPAGE, KILL_CLIP, SNAPSHOT]);
    }

    #[test]
    fn test_active_exempt_from_filter() {
        let defs = fixture_manifest();
        let active = build_defined_plug(&defs, MASTERWORK_TIER).unwrap();
        let candidates = [MASTERWORK_TIER, KILL_CLIP].map(|h| build_defined_plug(&defs, h));
        let options = assemble_plug_options(Some(&active), candidates);
        assert_eq!(hashes(&options), vec![MASTERWORK_TIER, KILL_CLIP]);
    }

    #[test]
    fn test_active_duplicated_in_candidates() {
        let defs = fixture_manifest();
        let active = build_defined_plug(&defs, OUTLAW).unwrap();
        let candidates = [OUTLAW, KILL_CLIP, OUTLAW].map(|h| build_defined_plug(&defs, h));
        let options = assemble_plug_options(Some(&active), candidates);
        assert_eq!(hashes(&options), vec![OUTLAW, KILL_CLIP]);
    }

    #[test]
    fn test_repeated_intrinsics_dropped() {
        let defs = fixture_manifest();
        let candidates =
            [INTRINSIC_FRAME, INTRINSIC_FRAME_ALT, OUTLAW].map(|h| build_defined_plug(&defs, h));
        let options = assemble_plug_options(None, candidates);
        assert_eq!(hashes(&options), vec![INTRINSIC_FRAME, OUTLAW]);
    }

    #[test]
    fn test_inserted_intrinsic_is_the_only_intrinsic() {
        let defs = fixture_manifest();
        let active = build_defined_plug(&defs, INTRINSIC_FRAME_ALT).unwrap();
        let candidates = [INTRINSIC_FRAME, INTRINSIC_FRAME_ALT, OUTLAW]
            .map(|h| build_defined_plug(&defs, h));
        let options = assemble_plug_options(Some(&active), candidates);

        assert_eq!(hashes(&options), vec![INTRINSIC_FRAME_ALT, OUTLAW]);
        let intrinsics = options.iter().filter(|p| is_intrinsic(p)).count();
        assert_eq!(intrinsics, 1);
    }

    #[test]
    fn test_inserted_intrinsic_not_among_candidates() {
        let defs = fixture_manifest();
        let active = build_defined_plug(&defs, INTRINSIC_FRAME_ALT).unwrap();
        let candidates = [INTRINSIC_FRAME, OUTLAW].map(|h| build_defined_plug(&defs, h));
        let options = assemble_plug_options(Some(&active), candidates);
        assert_eq!(hashes(&options), vec![INTRINSIC_FRAME_ALT, OUTLAW]);
    }

    #[test]
    fn test_intrinsic_not_first_dropped() {
        let defs = fixture_manifest();
        let candidates = [OUTLAW, INTRINSIC_FRAME].map(|h| build_defined_plug(&defs, h));
        let options = assemble_plug_options(None, candidates);
        assert_eq!(hashes(&options), vec![OUTLAW]);
    }

    #[test]
    fn test_unbuilt_candidates_count_towards_position() {
        let defs = fixture_manifest();
        // The first candidate didn't resolve, so the intrinsic is second
        let candidates = [UNKNOWN_HASH, INTRINSIC_FRAME].map(|h| build_defined_plug(&defs, h));
        let options = assemble_plug_options(None, candidates);
        assert!(options.is_empty());
    }
}
