//! Every kind the game runs, declared as data.
//!
//! Constants are tuned per kind; two kinds with the same shape may still use
//! different intervals, windows, or floors.

/// Artisan kinds anchored to creatures.
pub mod creature;
/// Arrangements between pairs of civilizations.
pub mod diplomacy;
/// Geological and geothermal features anchored to tiles.
pub mod geology;

use crate::error::{SimError, SimResult};
use crate::kind::KindSpec;

/// Family labels accepted by [`by_family`].
pub const FAMILIES: [&str; 3] = ["creature", "diplomatic", "terrain"];

static ALL: &[&KindSpec] = &[
    // creature
    &creature::CREATURE_ANODIZER,
    &creature::CREATURE_RUNE_CRAFTER,
    &creature::CREATURE_GLASSBLOWER,
    &creature::CREATURE_BLACKSMITH,
    &creature::CREATURE_WEAVER,
    &creature::CREATURE_POTTER,
    &creature::CREATURE_TANNER,
    &creature::CREATURE_JEWELER,
    &creature::CREATURE_COOPER,
    &creature::CREATURE_FLETCHER,
    &creature::CREATURE_BOOKBINDER,
    &creature::CREATURE_BREWER,
    &creature::CREATURE_CHANDLER,
    &creature::CREATURE_CARTOGRAPHER,
    &creature::CREATURE_CLOCKMAKER,
    &creature::CREATURE_ENGRAVER,
    &creature::CREATURE_ENAMELER,
    &creature::CREATURE_GILDER,
    &creature::CREATURE_LAPIDARY,
    &creature::CREATURE_LUTHIER,
    &creature::CREATURE_MASON,
    &creature::CREATURE_MILLINER,
    &creature::CREATURE_PERFUMER,
    &creature::CREATURE_SADDLER,
    &creature::CREATURE_SCRIBE,
    &creature::CREATURE_SILVERSMITH,
    &creature::CREATURE_TINSMITH,
    &creature::CREATURE_UPHOLSTERER,
    &creature::CREATURE_VINTNER,
    &creature::CREATURE_WHEELWRIGHT,
    &creature::CREATURE_WOODCARVER,
    &creature::CREATURE_BASKET_WEAVER,
    &creature::CREATURE_BELLFOUNDER,
    &creature::CREATURE_CALLIGRAPHER,
    &creature::CREATURE_DYER,
    &creature::CREATURE_EMBROIDERER,
    &creature::CREATURE_FARRIER,
    &creature::CREATURE_GLAZIER,
    &creature::CREATURE_GOLDBEATER,
    &creature::CREATURE_LACEMAKER,
    &creature::CREATURE_LOCKSMITH,
    &creature::CREATURE_MOSAICIST,
    &creature::CREATURE_PAPERMAKER,
    &creature::CREATURE_PEWTERER,
    &creature::CREATURE_ROPEMAKER,
    &creature::CREATURE_SCULPTOR,
    &creature::CREATURE_SHIPWRIGHT,
    &creature::CREATURE_SOAPMAKER,
    &creature::CREATURE_TAPESTRY_WEAVER,
    &creature::CREATURE_THATCHER,
    &creature::CREATURE_ARMORER,
    &creature::CREATURE_BOWYER,
    &creature::CREATURE_CORDWAINER,
    &creature::CREATURE_DISTILLER,
    &creature::CREATURE_APOTHECARY,
    // diplomatic
    &diplomacy::DIPLOMATIC_NON_AGGRESSION,
    &diplomacy::DIPLOMATIC_RAPPROCHEMENT,
    &diplomacy::DIPLOMATIC_INTERCESSION,
    &diplomacy::DIPLOMATIC_TRADE_AGREEMENT,
    &diplomacy::DIPLOMATIC_HOSTAGE_EXCHANGE,
    &diplomacy::DIPLOMATIC_MARRIAGE_ALLIANCE,
    &diplomacy::DIPLOMATIC_TRIBUTE,
    &diplomacy::DIPLOMATIC_EMBASSY,
    &diplomacy::DIPLOMATIC_BORDER_TREATY,
    &diplomacy::DIPLOMATIC_CEASEFIRE,
    &diplomacy::DIPLOMATIC_EXTRADITION,
    &diplomacy::DIPLOMATIC_FISHING_RIGHTS,
    &diplomacy::DIPLOMATIC_WATER_SHARING,
    &diplomacy::DIPLOMATIC_ARMS_LIMITATION,
    &diplomacy::DIPLOMATIC_CULTURAL_EXCHANGE,
    &diplomacy::DIPLOMATIC_STUDENT_EXCHANGE,
    &diplomacy::DIPLOMATIC_MUTUAL_DEFENSE,
    &diplomacy::DIPLOMATIC_ENVOY_MISSION,
    &diplomacy::DIPLOMATIC_SUMMIT,
    &diplomacy::DIPLOMATIC_ARBITRATION,
    &diplomacy::DIPLOMATIC_SANCTION,
    &diplomacy::DIPLOMATIC_EMBARGO,
    &diplomacy::DIPLOMATIC_CONDOMINIUM,
    &diplomacy::DIPLOMATIC_BUFFER_ZONE,
    &diplomacy::DIPLOMATIC_SAFE_PASSAGE,
    &diplomacy::DIPLOMATIC_ASYLUM,
    &diplomacy::DIPLOMATIC_PRISONER_EXCHANGE,
    &diplomacy::DIPLOMATIC_REPARATIONS,
    &diplomacy::DIPLOMATIC_JOINT_VENTURE,
    &diplomacy::DIPLOMATIC_CURRENCY_UNION,
    &diplomacy::DIPLOMATIC_CUSTOMS_UNION,
    &diplomacy::DIPLOMATIC_POSTAL_UNION,
    &diplomacy::DIPLOMATIC_NAVIGATION_TREATY,
    &diplomacy::DIPLOMATIC_MINING_CONCESSION,
    &diplomacy::DIPLOMATIC_GRAIN_ACCORD,
    &diplomacy::DIPLOMATIC_LETTERS_OF_MARQUE,
    &diplomacy::DIPLOMATIC_NEUTRALITY,
    &diplomacy::DIPLOMATIC_GUARANTEE,
    &diplomacy::DIPLOMATIC_PROTECTORATE,
    &diplomacy::DIPLOMATIC_VASSALAGE,
    &diplomacy::DIPLOMATIC_ROYAL_VISIT,
    &diplomacy::DIPLOMATIC_GIFT_EXCHANGE,
    &diplomacy::DIPLOMATIC_MEDIATION,
    &diplomacy::DIPLOMATIC_SCIENCE_ACCORD,
    &diplomacy::DIPLOMATIC_PILGRIMAGE_RIGHT,
    // terrain
    &geology::WORLD_EROSION,
    &geology::WORLD_GEYSER,
    &geology::WORLD_FUMAROLE,
    &geology::WORLD_HOT_SPRING,
    &geology::WORLD_MUD_POT,
    &geology::WORLD_SINKHOLE,
    &geology::WORLD_LANDSLIDE,
    &geology::WORLD_SAND_DUNE,
    &geology::WORLD_GLACIER,
    &geology::WORLD_VOLCANIC_VENT,
    &geology::WORLD_LAVA_TUBE,
    &geology::WORLD_OBSIDIAN_FLOW,
    &geology::WORLD_SALT_FLAT,
    &geology::WORLD_KARST,
    &geology::WORLD_CAVE,
    &geology::WORLD_CANYON,
    &geology::WORLD_MESA,
    &geology::WORLD_DELTA,
    &geology::WORLD_OXBOW,
    &geology::WORLD_PEAT_BOG,
    &geology::WORLD_TAR_PIT,
    &geology::WORLD_CRYSTAL_CAVERN,
    &geology::WORLD_FOSSIL_BED,
    &geology::WORLD_METEORITE_CRATER,
    &geology::WORLD_TRAVERTINE_TERRACE,
    &geology::WORLD_SULFUR_VENT,
    &geology::WORLD_THERMAL_POOL,
    &geology::WORLD_STEAM_FIELD,
    &geology::WORLD_MAGMA_CHAMBER,
    &geology::WORLD_CALDERA,
    &geology::WORLD_TUFF_RING,
    &geology::WORLD_CINDER_CONE,
    &geology::WORLD_BASALT_COLUMN,
    &geology::WORLD_HOODOO,
    &geology::WORLD_ARCH,
    &geology::WORLD_SEA_STACK,
    &geology::WORLD_TIDAL_FLAT,
    &geology::WORLD_REEF,
    &geology::WORLD_ESTUARY,
    &geology::WORLD_MORAINE,
    &geology::WORLD_ESKER,
    &geology::WORLD_DRUMLIN,
    &geology::WORLD_PERMAFROST,
    &geology::WORLD_ICE_CAVE,
    &geology::WORLD_AVALANCHE_CHUTE,
    &geology::WORLD_SCREE_SLOPE,
    &geology::WORLD_QUICKSAND,
    &geology::WORLD_SPRING,
    &geology::WORLD_WATERFALL,
    &geology::WORLD_RIFT,
];

/// All kinds, grouped by family.
pub fn all() -> &'static [&'static KindSpec] {
    ALL
}

/// Look up a kind by name.
pub fn find(name: &str) -> Option<&'static KindSpec> {
    ALL.iter().copied().find(|k| k.name == name)
}

/// Look up a kind by name, failing with [`SimError::UnknownKind`].
pub fn get(name: &str) -> SimResult<&'static KindSpec> {
    find(name).ok_or_else(|| SimError::UnknownKind(name.to_string()))
}

/// Kinds whose family label is `family`.
pub fn by_family(family: &str) -> Vec<&'static KindSpec> {
    ALL.iter()
        .copied()
        .filter(|k| k.family.label() == family)
        .collect()
}
