//! Well-known manifest hashes
//!
//! Hash values are stable across manifest versions. Item category hashes
//! mirror the `DestinyItemCategoryDefinition` table.

/// Item category hashes referenced by the plug filter
pub mod item_category {
    /// Masterwork tier plugs ("Masterworks Mods")
    pub const MASTERWORKS_MODS: u32 = 2_109_563_519;

    /// Ghost projection cosmetics
    pub const GHOST_MODS_PROJECTIONS: u32 = 1_404_791_674;

    /// Intrinsic weapon frames ("Weapon Mods: Intrinsic")
    pub const WEAPON_MODS_INTRINSIC: u32 = 2_237_038_328;
}

/// Substring of `plugCategoryIdentifier` shared by masterwork stat plugs
pub const MASTERWORK_STAT_PLUG_CATEGORY: &str = "masterworks.stat";

/// Plugs that are never worth surfacing as an option.
///
/// Default ornaments, empty shader/tracker placeholders and the
/// masterwork upgrade pseudo-plugs all show up in reusable plug lists.
pub static EXCLUDED_PLUGS: phf::Set<u32> = phf::phf_set! {
    // Default ornament
    2_931_483_505u32,
    1_959_648_454u32,
    702_981_643u32,
    // Empty mod socket
    2_600_899_007u32,
    // Default shader
    4_248_210_736u32,
    // Kill tracker placeholder
    2_285_418_970u32,
    // Upgrade masterwork
    3_876_796_314u32,
    // Upgrade armor masterwork
    1_176_735_155u32,
};

/// Whether a plug item hash is in the fixed exclusion set
pub fn is_excluded_plug(hash: u32) -> bool {
    EXCLUDED_PLUGS.contains(&hash)
}
