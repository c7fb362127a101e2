//! Small hand-built manifest shared by the unit tests

use crate::definitions::*;
use crate::hashes::item_category;
use crate::live::{ItemPlugBase, ObjectiveProgress};
use crate::manifest::ManifestTables;

// Socket categories
pub const INTRINSIC_CATEGORY: u32 = 3_956_125_808;
pub const WEAPON_PERKS_CATEGORY: u32 = 4_241_085_061;
pub const WEAPON_MODS_CATEGORY: u32 = 2_685_412_949;

// Socket types
pub const INTRINSIC_SOCKET_TYPE: u32 = 965_959_289;
pub const PERK_SOCKET_TYPE: u32 = 3_815_406_785;
pub const MOD_SOCKET_TYPE: u32 = 2_248_667_690;
pub const RANDOM_SOCKET_TYPE: u32 = 1_757_026_848;
/// Points at a socket category that doesn't exist
pub const ORPHAN_SOCKET_TYPE: u32 = 1_282_012_138;

// Plug items
pub const OUTLAW: u32 = 1_168_162_263;
pub const RAMPAGE: u32 = 3_425_386_926;
pub const KILL_CLIP: u32 = 1_015_611_457;
pub const SNAPSHOT: u32 = 957_782_887;
pub const RULED_MOD: u32 = 1_255_614_814;
pub const KILL_TRACKER: u32 = 38_912_240;
pub const MASTERWORK_TIER: u32 = 150_943_607;
pub const GHOST_PROJECTION: u32 = 1_771_897_777;
pub const MASTERWORK_STAT: u32 = 3_928_770_367;
pub const DEFAULT_ORNAMENT: u32 = 2_931_483_505;
pub const INTRINSIC_FRAME: u32 = 3_468_089_894;
pub const INTRINSIC_FRAME_ALT: u32 = 1_294_026_524;

pub const PERK_PLUG_SET: u32 = 1_205_537_913;
pub const RANDOM_PLUG_SET: u32 = 2_284_117_498;
pub const OUTLAW_PERK: u32 = 1_428_297_954;

pub const WEAPON: u32 = 1_248_372_789;

/// Never present in the fixture manifest
pub const UNKNOWN_HASH: u32 = 4_000_000_001;

fn plug_item(
    hash: u32,
    name: &str,
    categories: &[u32],
    plug_category: &str,
) -> InventoryItemDefinition {
    InventoryItemDefinition {
        hash,
        display_properties: DisplayProperties {
            name: name.to_string(),
            ..Default::default()
        },
        item_category_hashes: categories.to_vec(),
        plug: Some(ItemPlugDefinition {
            plug_category_identifier: plug_category.to_string(),
            ..Default::default()
        }),
        ..Default::default()
    }
}

fn socket_category(hash: u32, style: SocketCategoryStyle, index: i32) -> SocketCategoryDefinition {
    SocketCategoryDefinition {
        hash,
        category_style: style,
        index,
        ..Default::default()
    }
}

fn socket_type(hash: u32, category: u32, always_randomize: bool) -> SocketTypeDefinition {
    SocketTypeDefinition {
        hash,
        socket_category_hash: category,
        always_randomize_sockets: always_randomize,
    }
}

pub fn weapon_inline(hashes: &[u32]) -> Vec<SocketEntryPlugItem> {
    hashes
        .iter()
        .map(|&plug_item_hash| SocketEntryPlugItem { plug_item_hash })
        .collect()
}

pub fn live_plug(plug_item_hash: u32, can_insert: bool) -> ItemPlugBase {
    ItemPlugBase {
        plug_item_hash,
        can_insert,
        enabled: true,
        ..Default::default()
    }
}

pub fn kill_count(progress: i64) -> ObjectiveProgress {
    ObjectiveProgress {
        objective_hash: 1_501_870_536,
        progress: Some(progress),
        completion_value: 0,
        complete: false,
        visible: true,
    }
}

/// Weapon with five sockets:
///
/// | index | socket | source |
/// | --- | --- | --- |
/// | 0 | intrinsic | inline [`INTRINSIC_FRAME`] |
/// | 1 | perk | plug set [`PERK_PLUG_SET`], randomized |
/// | 2 | perk | inline [`RAMPAGE`], [`KILL_CLIP`] |
/// | 3 | mod | initial [`RULED_MOD`] |
/// | 4 | tracker | initial [`KILL_TRACKER`] |
pub fn fixture_weapon() -> InventoryItemDefinition {
    InventoryItemDefinition {
        hash: WEAPON,
        display_properties: DisplayProperties {
            name: "Ace of Spades".to_string(),
            ..Default::default()
        },
        sockets: Some(ItemSocketBlock {
            socket_entries: vec![
                SocketEntryDefinition {
                    socket_type_hash: INTRINSIC_SOCKET_TYPE,
                    single_initial_item_hash: INTRINSIC_FRAME,
                    reusable_plug_items: weapon_inline(&[INTRINSIC_FRAME]),
                    ..Default::default()
                },
                SocketEntryDefinition {
                    socket_type_hash: PERK_SOCKET_TYPE,
                    reusable_plug_set_hash: Some(PERK_PLUG_SET),
                    randomized_plug_set_hash: Some(RANDOM_PLUG_SET),
                    ..Default::default()
                },
                SocketEntryDefinition {
                    socket_type_hash: PERK_SOCKET_TYPE,
                    reusable_plug_items: weapon_inline(&[RAMPAGE, KILL_CLIP]),
                    ..Default::default()
                },
                SocketEntryDefinition {
                    socket_type_hash: MOD_SOCKET_TYPE,
                    single_initial_item_hash: RULED_MOD,
                    ..Default::default()
                },
                SocketEntryDefinition {
                    socket_type_hash: MOD_SOCKET_TYPE,
                    single_initial_item_hash: KILL_TRACKER,
                    ..Default::default()
                },
            ],
            socket_categories: vec![
                ItemSocketCategory {
                    socket_category_hash: WEAPON_MODS_CATEGORY,
                    socket_indexes: vec![3, 4],
                },
                ItemSocketCategory {
                    socket_category_hash: INTRINSIC_CATEGORY,
                    socket_indexes: vec![0],
                },
                ItemSocketCategory {
                    socket_category_hash: WEAPON_PERKS_CATEGORY,
                    socket_indexes: vec![1, 2],
                },
            ],
        }),
        ..Default::default()
    }
}

pub fn fixture_manifest() -> ManifestTables {
    let mut defs = ManifestTables::new();

    defs.insert_socket_category(socket_category(
        INTRINSIC_CATEGORY,
        SocketCategoryStyle::Intrinsic,
        0,
    ));
    defs.insert_socket_category(socket_category(
        WEAPON_PERKS_CATEGORY,
        SocketCategoryStyle::Reusable,
        1,
    ));
    defs.insert_socket_category(socket_category(
        WEAPON_MODS_CATEGORY,
        SocketCategoryStyle::Consumable,
        2,
    ));

    defs.insert_socket_type(socket_type(INTRINSIC_SOCKET_TYPE, INTRINSIC_CATEGORY, false));
    defs.insert_socket_type(socket_type(PERK_SOCKET_TYPE, WEAPON_PERKS_CATEGORY, false));
    defs.insert_socket_type(socket_type(MOD_SOCKET_TYPE, WEAPON_MODS_CATEGORY, false));
    defs.insert_socket_type(socket_type(RANDOM_SOCKET_TYPE, WEAPON_PERKS_CATEGORY, true));
    defs.insert_socket_type(socket_type(ORPHAN_SOCKET_TYPE, UNKNOWN_HASH, false));

    let mut outlaw = plug_item(OUTLAW, "Outlaw", &[], "frames");
    outlaw.perks = vec![
        ItemPerkEntry {
            perk_hash: OUTLAW_PERK,
        },
        ItemPerkEntry {
            perk_hash: UNKNOWN_HASH,
        },
    ];
    defs.insert_inventory_item(outlaw);
    defs.insert_inventory_item(plug_item(RAMPAGE, "Rampage", &[], "frames"));
    defs.insert_inventory_item(plug_item(KILL_CLIP, "Kill Clip", &[], "frames"));
    defs.insert_inventory_item(plug_item(SNAPSHOT, "Snapshot Sights", &[], "frames"));

    let mut ruled_mod = plug_item(RULED_MOD, "Backup Mag", &[], "v400.weapon.mod_magazine");
    if let Some(plug) = ruled_mod.plug.as_mut() {
        plug.enabled_rules = vec![
            PlugRule {
                failure_message: "Requires a masterworked weapon".to_string(),
            },
            PlugRule {
                failure_message: "Already equipped elsewhere".to_string(),
            },
        ];
    }
    defs.insert_inventory_item(ruled_mod);

    defs.insert_inventory_item(plug_item(
        KILL_TRACKER,
        "Kill Tracker",
        &[],
        "v400.plugs.weapons.masterworks.trackers",
    ));
    defs.insert_inventory_item(plug_item(
        MASTERWORK_TIER,
        "Tier 10: Handling",
        &[item_category::MASTERWORKS_MODS],
        "v400.plugs.weapons.masterworks",
    ));
    defs.insert_inventory_item(plug_item(
        GHOST_PROJECTION,
        "Ghost Projection",
        &[item_category::GHOST_MODS_PROJECTIONS],
        "ghosts.projections",
    ));
    defs.insert_inventory_item(plug_item(
        MASTERWORK_STAT,
        "Masterwork: Range",
        &[],
        "v400.weapon.masterworks.stat.range",
    ));
    defs.insert_inventory_item(plug_item(
        DEFAULT_ORNAMENT,
        "Default Ornament",
        &[],
        "armor_skins_empty",
    ));
    defs.insert_inventory_item(plug_item(
        INTRINSIC_FRAME,
        "Adaptive Frame",
        &[item_category::WEAPON_MODS_INTRINSIC],
        "intrinsics",
    ));
    defs.insert_inventory_item(plug_item(
        INTRINSIC_FRAME_ALT,
        "Adaptive Frame",
        &[item_category::WEAPON_MODS_INTRINSIC],
        "intrinsics",
    ));

    defs.insert_plug_set(PlugSetDefinition {
        hash: PERK_PLUG_SET,
        reusable_plug_items: weapon_inline(&[KILL_CLIP, OUTLAW, SNAPSHOT, MASTERWORK_TIER]),
    });

    defs.insert_sandbox_perk(SandboxPerkDefinition {
        hash: OUTLAW_PERK,
        display_properties: DisplayProperties {
            name: "Outlaw".to_string(),
            ..Default::default()
        },
        is_displayable: true,
    });

    defs.insert_inventory_item(fixture_weapon());
    defs
}
