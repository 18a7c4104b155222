//! Geological and geothermal features anchored to a tile.
//!
//! Geothermal kinds keep temperature on a `0..=500` scale and let activity
//! swing with a slow oscillation.

use wt_core::TileType;

use crate::kind::{Drift, Eviction, Family, KindSpec, StatSpec, TileEffect};

const FEATURE: KindSpec = KindSpec {
    name: "",
    label: "",
    family: Family::Terrain {
        attempts: 1,
        tiles: &[],
    },
    check_interval: 2000,
    spawn_chance: 0.002,
    max_count: 10,
    stats: &[],
    eviction: &[],
    progression: None,
    tile_effect: None,
};

/// Weathering that wears mountains into hills and hills into grassland.
pub static WORLD_EROSION: KindSpec = KindSpec {
    name: "world_erosion",
    label: "erosion sites",
    check_interval: 2000,
    spawn_chance: 0.004,
    max_count: 40,
    family: Family::Terrain {
        attempts: 3,
        tiles: &[TileType::Mountain, TileType::Hills],
    },
    stats: &[
        StatSpec::new("erosion_level", 5.0, 15.0).drift(Drift::Grow(3.0)),
        StatSpec::new("rock_hardness", 30.0, 50.0),
        StatSpec::new("water_flow", 10.0, 40.0).drift(Drift::Walk(2.0)),
    ],
    eviction: &[Eviction::Window(95_000)],
    tile_effect: Some(TileEffect {
        stat: 0,
        threshold: 90.0,
        reset: 0.0,
        transitions: &[
            (TileType::Mountain, TileType::Hills),
            (TileType::Hills, TileType::Grass),
        ],
    }),
    ..FEATURE
};

/// Periodically erupting hot springs.
pub static WORLD_GEYSER: KindSpec = KindSpec {
    name: "world_geyser",
    label: "geysers",
    check_interval: 2800,
    spawn_chance: 0.0018,
    max_count: 15,
    family: Family::Terrain {
        attempts: 2,
        tiles: &[TileType::Hills, TileType::Mountain, TileType::Grass],
    },
    stats: &[
        StatSpec::new("activity", 40.0, 40.0)
            .drift(Drift::Oscillate { amplitude: 4.0, period: 4000.0 }),
        StatSpec::new("temperature", 200.0, 150.0)
            .range(0.0, 500.0)
            .drift(Drift::Oscillate { amplitude: 10.0, period: 11000.0 }),
        StatSpec::new("pressure", 25.0, 25.0).drift(Drift::Walk(1.0)),
    ],
    eviction: &[Eviction::Window(63_000)],
    ..FEATURE
};

/// Steam vents on volcanic ground.
pub static WORLD_FUMAROLE: KindSpec = KindSpec {
    name: "world_fumarole",
    label: "fumaroles",
    check_interval: 1550,
    spawn_chance: 0.0008,
    max_count: 10,
    family: Family::Terrain {
        attempts: 2,
        tiles: &[TileType::Mountain, TileType::Hills],
    },
    stats: &[
        StatSpec::new("activity", 20.0, 40.0)
            .drift(Drift::Oscillate { amplitude: 4.0, period: 8000.0 }),
        StatSpec::new("temperature", 180.0, 100.0)
            .range(0.0, 500.0)
            .drift(Drift::Oscillate { amplitude: 8.0, period: 11000.0 }),
        StatSpec::new("gas_output", 10.0, 40.0).drift(Drift::Walk(0.5)),
    ],
    eviction: &[Eviction::Floor { stat: 0, at: 4.0 }, Eviction::Window(96_000)],
    ..FEATURE
};

/// Mineral pools fed by deep heat.
pub static WORLD_HOT_SPRING: KindSpec = KindSpec {
    name: "world_hot_spring",
    label: "hot springs",
    check_interval: 3100,
    spawn_chance: 0.001,
    max_count: 30,
    family: Family::Terrain {
        attempts: 2,
        tiles: &[TileType::Grass, TileType::Forest, TileType::Hills],
    },
    stats: &[
        StatSpec::new("flow_rate", 30.0, 30.0)
            .drift(Drift::Oscillate { amplitude: 3.0, period: 5500.0 }),
        StatSpec::new("temperature", 100.0, 100.0)
            .range(0.0, 500.0)
            .drift(Drift::Oscillate { amplitude: 10.0, period: 4000.0 }),
        StatSpec::new("mineral_content", 10.0, 25.0).drift(Drift::Walk(3.0)),
    ],
    eviction: &[Eviction::Window(67_000)],
    ..FEATURE
};

/// Bubbling pools of acid mud.
pub static WORLD_MUD_POT: KindSpec = KindSpec {
    name: "world_mud_pot",
    label: "mud pots",
    check_interval: 3075,
    spawn_chance: 0.0012,
    max_count: 25,
    family: Family::Terrain {
        attempts: 1,
        tiles: &[TileType::Swamp, TileType::Hills],
    },
    stats: &[
        StatSpec::new("activity", 30.0, 30.0)
            .drift(Drift::Oscillate { amplitude: 3.0, period: 2000.0 }),
        StatSpec::new("temperature", 200.0, 150.0)
            .range(0.0, 500.0)
            .drift(Drift::Oscillate { amplitude: 10.0, period: 9000.0 }),
        StatSpec::new("viscosity", 25.0, 20.0).drift(Drift::Walk(3.0)),
    ],
    eviction: &[Eviction::Floor { stat: 0, at: 4.0 }, Eviction::Window(66_000)],
    ..FEATURE
};

/// Collapses over dissolved bedrock.
pub static WORLD_SINKHOLE: KindSpec = KindSpec {
    name: "world_sinkhole",
    label: "sinkholes",
    check_interval: 2600,
    spawn_chance: 0.0018,
    max_count: 30,
    family: Family::Terrain {
        attempts: 2,
        tiles: &[TileType::Grass, TileType::Forest],
    },
    stats: &[
        StatSpec::new("depth", 5.0, 20.0).drift(Drift::Biased { step: 2.0, bias: 0.5 }),
        StatSpec::new("instability", 25.0, 20.0),
        StatSpec::new("width", 10.0, 30.0).drift(Drift::Walk(2.0)),
    ],
    eviction: &[Eviction::Age { step: 1.0, ceiling: 80.0 }, Eviction::Window(55_000)],
    ..FEATURE
};

/// Slopes sliding after heavy rain.
pub static WORLD_LANDSLIDE: KindSpec = KindSpec {
    name: "world_landslide",
    label: "landslides",
    check_interval: 1675,
    spawn_chance: 0.0025,
    max_count: 25,
    family: Family::Terrain {
        attempts: 3,
        tiles: &[TileType::Hills, TileType::Mountain],
    },
    stats: &[
        StatSpec::new("instability", 20.0, 30.0).drift(Drift::Biased { step: 3.0, bias: 0.5 }),
        StatSpec::new("debris_volume", 5.0, 20.0).drift(Drift::Walk(1.0)),
        StatSpec::new("slope", 30.0, 25.0).drift(Drift::Walk(1.5)),
    ],
    eviction: &[Eviction::Floor { stat: 0, at: 4.0 }, Eviction::Window(98_000)],
    ..FEATURE
};

/// Wind-driven dunes migrating over sand.
pub static WORLD_SAND_DUNE: KindSpec = KindSpec {
    name: "world_sand_dune",
    label: "sand dunes",
    check_interval: 2000,
    spawn_chance: 0.002,
    max_count: 10,
    family: Family::Terrain {
        attempts: 3,
        tiles: &[TileType::Sand],
    },
    stats: &[
        StatSpec::new("height", 10.0, 30.0).drift(Drift::Biased { step: 3.0, bias: 0.52 }),
        StatSpec::new("migration_rate", 20.0, 20.0).drift(Drift::Walk(2.0)),
        StatSpec::new("vegetation_cover", 30.0, 40.0).drift(Drift::Walk(1.5)),
    ],
    eviction: &[Eviction::Window(53_000)],
    ..FEATURE
};

/// Slow rivers of ice on high ground.
pub static WORLD_GLACIER: KindSpec = KindSpec {
    name: "world_glacier",
    label: "glaciers",
    check_interval: 2500,
    spawn_chance: 0.003,
    max_count: 30,
    family: Family::Terrain {
        attempts: 2,
        tiles: &[TileType::Snow, TileType::Mountain],
    },
    stats: &[
        StatSpec::new("ice_mass", 5.0, 25.0).drift(Drift::Biased { step: 2.5, bias: 0.5 }),
        StatSpec::new("flow_rate", 5.0, 40.0).drift(Drift::Walk(3.0)),
        StatSpec::new("meltwater", 25.0, 25.0).drift(Drift::Walk(0.5)),
    ],
    eviction: &[Eviction::Age { step: 0.5, ceiling: 86.0 }, Eviction::Window(59_000)],
    ..FEATURE
};

/// Openings venting gas and ash.
pub static WORLD_VOLCANIC_VENT: KindSpec = KindSpec {
    name: "world_volcanic_vent",
    label: "volcanic vents",
    check_interval: 2425,
    spawn_chance: 0.001,
    max_count: 30,
    family: Family::Terrain {
        attempts: 1,
        tiles: &[TileType::Mountain, TileType::Lava],
    },
    stats: &[
        StatSpec::new("activity", 40.0, 40.0)
            .drift(Drift::Oscillate { amplitude: 4.0, period: 7000.0 }),
        StatSpec::new("temperature", 200.0, 100.0)
            .range(0.0, 500.0)
            .drift(Drift::Oscillate { amplitude: 10.0, period: 4000.0 }),
        StatSpec::new("ash_output", 20.0, 20.0).drift(Drift::Walk(1.5)),
    ],
    eviction: &[Eviction::Window(67_000)],
    ..FEATURE
};

/// Drained conduits under cooled flows.
pub static WORLD_LAVA_TUBE: KindSpec = KindSpec {
    name: "world_lava_tube",
    label: "lava tubes",
    check_interval: 2050,
    spawn_chance: 0.0018,
    max_count: 25,
    family: Family::Terrain {
        attempts: 1,
        tiles: &[TileType::Lava, TileType::Mountain],
    },
    stats: &[
        StatSpec::new("integrity", 30.0, 40.0)
            .drift(Drift::Oscillate { amplitude: 1.5, period: 3000.0 }),
        StatSpec::new("temperature", 180.0, 150.0)
            .range(0.0, 500.0)
            .drift(Drift::Oscillate { amplitude: 5.0, period: 9000.0 }),
        StatSpec::new("length", 25.0, 20.0).drift(Drift::Walk(3.0)),
    ],
    eviction: &[Eviction::Floor { stat: 0, at: 4.0 }, Eviction::Window(65_000)],
    ..FEATURE
};

/// Glassy flows of quenched lava.
pub static WORLD_OBSIDIAN_FLOW: KindSpec = KindSpec {
    name: "world_obsidian_flow",
    label: "obsidian flows",
    check_interval: 2300,
    spawn_chance: 0.0025,
    max_count: 20,
    family: Family::Terrain {
        attempts: 1,
        tiles: &[TileType::Lava],
    },
    stats: &[
        StatSpec::new("cooling", 40.0, 40.0)
            .drift(Drift::Oscillate { amplitude: 3.0, period: 8000.0 }),
        StatSpec::new("temperature", 220.0, 80.0)
            .range(0.0, 500.0)
            .drift(Drift::Oscillate { amplitude: 10.0, period: 6000.0 }),
        StatSpec::new("glass_purity", 25.0, 25.0).drift(Drift::Walk(2.0)),
    ],
    eviction: &[Eviction::Window(74_000)],
    ..FEATURE
};

/// Evaporite pans.
pub static WORLD_SALT_FLAT: KindSpec = KindSpec {
    name: "world_salt_flat",
    label: "salt flats",
    check_interval: 1975,
    spawn_chance: 0.0007,
    max_count: 25,
    family: Family::Terrain {
        attempts: 2,
        tiles: &[TileType::Sand],
    },
    stats: &[
        StatSpec::new("crust_thickness", 10.0, 20.0).drift(Drift::Biased { step: 2.0, bias: 0.52 }),
        StatSpec::new("salinity", 15.0, 30.0).drift(Drift::Walk(1.0)),
        StatSpec::new("moisture", 5.0, 20.0).drift(Drift::Walk(3.0)),
    ],
    eviction: &[Eviction::Floor { stat: 0, at: 5.0 }, Eviction::Window(83_000)],
    ..FEATURE
};

/// Dissolved limestone riddled with sinkholes.
pub static WORLD_KARST: KindSpec = KindSpec {
    name: "world_karst",
    label: "karst fields",
    check_interval: 2650,
    spawn_chance: 0.002,
    max_count: 30,
    family: Family::Terrain {
        attempts: 2,
        tiles: &[TileType::Hills, TileType::Forest],
    },
    stats: &[
        StatSpec::new("dissolution", 5.0, 25.0).drift(Drift::Biased { step: 2.0, bias: 0.5 }),
        StatSpec::new("cave_density", 10.0, 40.0),
        StatSpec::new("water_table", 10.0, 30.0).drift(Drift::Walk(3.0)),
    ],
    eviction: &[Eviction::Window(65_000)],
    ..FEATURE
};

/// Cave systems under hills.
pub static WORLD_CAVE: KindSpec = KindSpec {
    name: "world_cave",
    label: "caves",
    check_interval: 1850,
    spawn_chance: 0.0018,
    max_count: 25,
    family: Family::Terrain {
        attempts: 2,
        tiles: &[TileType::Hills, TileType::Mountain],
    },
    stats: &[
        StatSpec::new("extent", 10.0, 20.0).drift(Drift::Biased { step: 2.0, bias: 0.52 }),
        StatSpec::new("stability", 5.0, 25.0).drift(Drift::Walk(1.0)),
        StatSpec::new("humidity", 20.0, 30.0),
    ],
    eviction: &[Eviction::Age { step: 0.5, ceiling: 95.0 }, Eviction::Window(82_000)],
    ..FEATURE
};

/// River-cut gorges.
pub static WORLD_CANYON: KindSpec = KindSpec {
    name: "world_canyon",
    label: "canyons",
    check_interval: 3200,
    spawn_chance: 0.0012,
    max_count: 15,
    family: Family::Terrain {
        attempts: 1,
        tiles: &[TileType::Hills, TileType::Mountain, TileType::Sand],
    },
    stats: &[
        StatSpec::new("depth", 20.0, 20.0).drift(Drift::Biased { step: 3.0, bias: 0.5 }),
        StatSpec::new("erosion_rate", 20.0, 30.0).drift(Drift::Walk(0.5)),
        StatSpec::new("wall_stability", 15.0, 30.0),
    ],
    eviction: &[Eviction::Floor { stat: 0, at: 5.0 }, Eviction::Window(50_000)],
    ..FEATURE
};

/// Flat-topped tablelands.
pub static WORLD_MESA: KindSpec = KindSpec {
    name: "world_mesa",
    label: "mesas",
    check_interval: 1600,
    spawn_chance: 0.0015,
    max_count: 30,
    family: Family::Terrain {
        attempts: 1,
        tiles: &[TileType::Hills, TileType::Sand],
    },
    stats: &[
        StatSpec::new("caprock_integrity", 10.0, 30.0)
            .drift(Drift::Biased { step: 1.5, bias: 0.52 }),
        StatSpec::new("height", 15.0, 25.0).drift(Drift::Walk(1.0)),
        StatSpec::new("erosion_rate", 30.0, 40.0),
    ],
    eviction: &[Eviction::Window(68_000)],
    ..FEATURE
};

/// Sediment fans at river mouths.
pub static WORLD_DELTA: KindSpec = KindSpec {
    name: "world_delta",
    label: "deltas",
    check_interval: 2825,
    spawn_chance: 0.003,
    max_count: 20,
    family: Family::Terrain {
        attempts: 2,
        tiles: &[TileType::ShallowWater, TileType::Swamp, TileType::Sand],
    },
    stats: &[
        StatSpec::new("sediment", 15.0, 30.0).drift(Drift::Biased { step: 2.0, bias: 0.55 }),
        StatSpec::new("channel_count", 20.0, 30.0).drift(Drift::Walk(3.0)),
        StatSpec::new("fertility", 30.0, 20.0).drift(Drift::Walk(0.5)),
    ],
    eviction: &[Eviction::Age { step: 1.5, ceiling: 87.0 }, Eviction::Window(73_000)],
    ..FEATURE
};

/// Cut-off river bends.
pub static WORLD_OXBOW: KindSpec = KindSpec {
    name: "world_oxbow",
    label: "oxbow lakes",
    check_interval: 2850,
    spawn_chance: 0.0008,
    max_count: 10,
    family: Family::Terrain {
        attempts: 1,
        tiles: &[TileType::Grass, TileType::Swamp],
    },
    stats: &[
        StatSpec::new("water_level", 5.0, 25.0).drift(Drift::Biased { step: 2.0, bias: 0.55 }),
        StatSpec::new("silting", 10.0, 20.0).drift(Drift::Walk(3.0)),
        StatSpec::new("isolation", 25.0, 25.0),
    ],
    eviction: &[Eviction::Floor { stat: 0, at: 4.0 }, Eviction::Window(81_000)],
    ..FEATURE
};

/// Waterlogged peat building up over centuries.
pub static WORLD_PEAT_BOG: KindSpec = KindSpec {
    name: "world_peat_bog",
    label: "peat bogs",
    check_interval: 3050,
    spawn_chance: 0.0008,
    max_count: 30,
    family: Family::Terrain {
        attempts: 2,
        tiles: &[TileType::Swamp],
    },
    stats: &[
        StatSpec::new("peat_depth", 10.0, 30.0).drift(Drift::Biased { step: 3.0, bias: 0.5 }),
        StatSpec::new("acidity", 30.0, 25.0).drift(Drift::Walk(1.0)),
        StatSpec::new("water_level", 5.0, 20.0).drift(Drift::Walk(0.5)),
    ],
    eviction: &[Eviction::Window(60_000)],
    ..FEATURE
};

/// Seeps of natural asphalt.
pub static WORLD_TAR_PIT: KindSpec = KindSpec {
    name: "world_tar_pit",
    label: "tar pits",
    check_interval: 2375,
    spawn_chance: 0.0025,
    max_count: 15,
    family: Family::Terrain {
        attempts: 1,
        tiles: &[TileType::Swamp, TileType::Sand],
    },
    stats: &[
        StatSpec::new("seepage", 30.0, 30.0)
            .drift(Drift::Oscillate { amplitude: 4.0, period: 2500.0 }),
        StatSpec::new("temperature", 80.0, 100.0)
            .range(0.0, 500.0)
            .drift(Drift::Oscillate { amplitude: 10.0, period: 12000.0 }),
        StatSpec::new("depth", 15.0, 25.0).drift(Drift::Walk(3.0)),
    ],
    eviction: &[Eviction::Floor { stat: 0, at: 4.0 }, Eviction::Window(76_000)],
    ..FEATURE
};

/// Geodes and crystal-lined chambers.
pub static WORLD_CRYSTAL_CAVERN: KindSpec = KindSpec {
    name: "world_crystal_cavern",
    label: "crystal caverns",
    check_interval: 2300,
    spawn_chance: 0.004,
    max_count: 15,
    family: Family::Terrain {
        attempts: 1,
        tiles: &[TileType::Mountain],
    },
    stats: &[
        StatSpec::new("crystal_growth", 20.0, 25.0).drift(Drift::Biased { step: 2.5, bias: 0.5 }),
        StatSpec::new("humidity", 5.0, 25.0).drift(Drift::Walk(0.5)),
        StatSpec::new("stability", 30.0, 30.0),
    ],
    eviction: &[Eviction::Floor { stat: 0, at: 4.0 }, Eviction::Window(67_000)],
    ..FEATURE
};

/// Exposed layers of fossils.
pub static WORLD_FOSSIL_BED: KindSpec = KindSpec {
    name: "world_fossil_bed",
    label: "fossil beds",
    check_interval: 2800,
    spawn_chance: 0.002,
    max_count: 30,
    family: Family::Terrain {
        attempts: 2,
        tiles: &[TileType::Hills, TileType::Sand],
    },
    stats: &[
        StatSpec::new("exposure", 15.0, 30.0).drift(Drift::Biased { step: 1.5, bias: 0.52 }),
        StatSpec::new("preservation", 20.0, 40.0).drift(Drift::Walk(1.0)),
        StatSpec::new("density", 15.0, 30.0).drift(Drift::Walk(1.0)),
    ],
    eviction: &[Eviction::Window(72_000)],
    ..FEATURE
};

/// Impact craters slowly filling back in.
pub static WORLD_METEORITE_CRATER: KindSpec = KindSpec {
    name: "world_meteorite_crater",
    label: "meteorite craters",
    check_interval: 2825,
    spawn_chance: 0.0007,
    max_count: 20,
    family: Family::Terrain {
        attempts: 1,
        tiles: &[TileType::Grass, TileType::Sand, TileType::Snow],
    },
    stats: &[
        StatSpec::new("rim_integrity", 15.0, 25.0).drift(Drift::Biased { step: 1.5, bias: 0.52 }),
        StatSpec::new("depth", 5.0, 30.0).drift(Drift::Decay(0.1)),
        StatSpec::new("iron_content", 5.0, 40.0),
    ],
    eviction: &[Eviction::Age { step: 0.5, ceiling: 90.0 }, Eviction::Window(89_000)],
    ..FEATURE
};

/// Stepped pools of precipitated limestone.
pub static WORLD_TRAVERTINE_TERRACE: KindSpec = KindSpec {
    name: "world_travertine_terrace",
    label: "travertine terraces",
    check_interval: 2425,
    spawn_chance: 0.0007,
    max_count: 25,
    family: Family::Terrain {
        attempts: 1,
        tiles: &[TileType::Hills],
    },
    stats: &[
        StatSpec::new("deposition", 40.0, 30.0)
            .drift(Drift::Oscillate { amplitude: 4.0, period: 3000.0 }),
        StatSpec::new("temperature", 180.0, 80.0)
            .range(0.0, 500.0)
            .drift(Drift::Oscillate { amplitude: 5.0, period: 7000.0 }),
        StatSpec::new("flow_rate", 25.0, 40.0).drift(Drift::Walk(0.5)),
    ],
    eviction: &[Eviction::Floor { stat: 0, at: 4.0 }, Eviction::Window(63_000)],
    ..FEATURE
};

/// Vents crusted with sulfur.
pub static WORLD_SULFUR_VENT: KindSpec = KindSpec {
    name: "world_sulfur_vent",
    label: "sulfur vents",
    check_interval: 3150,
    spawn_chance: 0.004,
    max_count: 15,
    family: Family::Terrain {
        attempts: 1,
        tiles: &[TileType::Mountain, TileType::Lava],
    },
    stats: &[
        StatSpec::new("activity", 20.0, 30.0)
            .drift(Drift::Oscillate { amplitude: 1.5, period: 3000.0 }),
        StatSpec::new("temperature", 100.0, 150.0)
            .range(0.0, 500.0)
            .drift(Drift::Oscillate { amplitude: 5.0, period: 7000.0 }),
        StatSpec::new("sulfur_output", 20.0, 40.0).drift(Drift::Walk(0.5)),
    ],
    eviction: &[Eviction::Window(96_000)],
    ..FEATURE
};

/// Hot spring pools.
pub static WORLD_THERMAL_POOL: KindSpec = KindSpec {
    name: "world_thermal_pool",
    label: "thermal pools",
    check_interval: 3025,
    spawn_chance: 0.0007,
    max_count: 30,
    family: Family::Terrain {
        attempts: 2,
        tiles: &[TileType::Grass, TileType::Hills],
    },
    stats: &[
        StatSpec::new("depth", 20.0, 30.0)
            .drift(Drift::Oscillate { amplitude: 2.0, period: 6500.0 }),
        StatSpec::new("temperature", 140.0, 60.0)
            .range(0.0, 500.0)
            .drift(Drift::Oscillate { amplitude: 5.0, period: 4000.0 }),
        StatSpec::new("clarity", 30.0, 30.0).drift(Drift::Walk(1.5)),
    ],
    eviction: &[Eviction::Floor { stat: 0, at: 4.0 }, Eviction::Window(83_000)],
    ..FEATURE
};

/// Ground venting steam over a wide area.
pub static WORLD_STEAM_FIELD: KindSpec = KindSpec {
    name: "world_steam_field",
    label: "steam fields",
    check_interval: 1850,
    spawn_chance: 0.0007,
    max_count: 20,
    family: Family::Terrain {
        attempts: 3,
        tiles: &[TileType::Hills, TileType::Grass],
    },
    stats: &[
        StatSpec::new("activity", 20.0, 40.0)
            .drift(Drift::Oscillate { amplitude: 1.5, period: 5500.0 }),
        StatSpec::new("temperature", 200.0, 100.0)
            .range(0.0, 500.0)
            .drift(Drift::Oscillate { amplitude: 5.0, period: 3000.0 }),
        StatSpec::new("steam_output", 15.0, 25.0).drift(Drift::Walk(2.0)),
    ],
    eviction: &[Eviction::Window(78_000)],
    ..FEATURE
};

/// Molten reservoirs under volcanic ground.
pub static WORLD_MAGMA_CHAMBER: KindSpec = KindSpec {
    name: "world_magma_chamber",
    label: "magma chambers",
    check_interval: 2200,
    spawn_chance: 0.001,
    max_count: 15,
    family: Family::Terrain {
        attempts: 1,
        tiles: &[TileType::Mountain],
    },
    stats: &[
        StatSpec::new("pressure", 40.0, 30.0)
            .drift(Drift::Oscillate { amplitude: 1.5, period: 2000.0 }),
        StatSpec::new("temperature", 80.0, 80.0)
            .range(0.0, 500.0)
            .drift(Drift::Oscillate { amplitude: 5.0, period: 12000.0 }),
        StatSpec::new("volume", 5.0, 20.0).drift(Drift::Walk(2.0)),
    ],
    eviction: &[Eviction::Floor { stat: 0, at: 4.0 }, Eviction::Window(61_000)],
    ..FEATURE
};

/// Collapsed volcanic craters.
pub static WORLD_CALDERA: KindSpec = KindSpec {
    name: "world_caldera",
    label: "calderas",
    check_interval: 1950,
    spawn_chance: 0.0015,
    max_count: 25,
    family: Family::Terrain {
        attempts: 1,
        tiles: &[TileType::Mountain, TileType::Hills],
    },
    stats: &[
        StatSpec::new("activity", 40.0, 30.0)
            .drift(Drift::Oscillate { amplitude: 3.0, period: 6000.0 }),
        StatSpec::new("temperature", 80.0, 100.0)
            .range(0.0, 500.0)
            .drift(Drift::Oscillate { amplitude: 8.0, period: 8000.0 }),
        StatSpec::new("rim_stability", 20.0, 40.0).drift(Drift::Walk(1.5)),
    ],
    eviction: &[Eviction::Window(77_000)],
    ..FEATURE
};

/// Low rings of fused ash.
pub static WORLD_TUFF_RING: KindSpec = KindSpec {
    name: "world_tuff_ring",
    label: "tuff rings",
    check_interval: 1825,
    spawn_chance: 0.0025,
    max_count: 30,
    family: Family::Terrain {
        attempts: 1,
        tiles: &[TileType::Hills, TileType::Sand],
    },
    stats: &[
        StatSpec::new("activity", 20.0, 30.0)
            .drift(Drift::Oscillate { amplitude: 2.0, period: 6500.0 }),
        StatSpec::new("temperature", 100.0, 150.0)
            .range(0.0, 500.0)
            .drift(Drift::Oscillate { amplitude: 5.0, period: 6000.0 }),
        StatSpec::new("ash_layer", 30.0, 40.0).drift(Drift::Walk(2.0)),
    ],
    eviction: &[Eviction::Floor { stat: 0, at: 4.0 }, Eviction::Window(82_000)],
    ..FEATURE
};

/// Steep cones of loose scoria.
pub static WORLD_CINDER_CONE: KindSpec = KindSpec {
    name: "world_cinder_cone",
    label: "cinder cones",
    check_interval: 2525,
    spawn_chance: 0.002,
    max_count: 10,
    family: Family::Terrain {
        attempts: 2,
        tiles: &[TileType::Hills, TileType::Mountain],
    },
    stats: &[
        StatSpec::new("activity", 40.0, 40.0)
            .drift(Drift::Oscillate { amplitude: 2.0, period: 2500.0 }),
        StatSpec::new("temperature", 200.0, 60.0)
            .range(0.0, 500.0)
            .drift(Drift::Oscillate { amplitude: 10.0, period: 9000.0 }),
        StatSpec::new("height", 25.0, 20.0).drift(Drift::Walk(3.0)),
    ],
    eviction: &[Eviction::Window(51_000)],
    ..FEATURE
};

/// Jointed columns of cooled basalt.
pub static WORLD_BASALT_COLUMN: KindSpec = KindSpec {
    name: "world_basalt_column",
    label: "basalt columns",
    check_interval: 2925,
    spawn_chance: 0.0008,
    max_count: 10,
    family: Family::Terrain {
        attempts: 1,
        tiles: &[TileType::Hills, TileType::Lava],
    },
    stats: &[
        StatSpec::new("exposure", 20.0, 30.0).drift(Drift::Biased { step: 1.5, bias: 0.55 }),
        StatSpec::new("jointing", 30.0, 30.0).drift(Drift::Walk(0.5)),
        StatSpec::new("weathering", 15.0, 40.0).drift(Drift::Walk(1.0)),
    ],
    eviction: &[Eviction::Age { step: 1.5, ceiling: 81.0 }, Eviction::Window(56_000)],
    ..FEATURE
};

/// Weathered rock spires.
pub static WORLD_HOODOO: KindSpec = KindSpec {
    name: "world_hoodoo",
    label: "hoodoos",
    check_interval: 2650,
    spawn_chance: 0.004,
    max_count: 25,
    family: Family::Terrain {
        attempts: 2,
        tiles: &[TileType::Sand, TileType::Hills],
    },
    stats: &[
        StatSpec::new("height", 5.0, 25.0).drift(Drift::Biased { step: 3.0, bias: 0.52 }),
        StatSpec::new("caprock_integrity", 15.0, 25.0),
        StatSpec::new("erosion_rate", 20.0, 40.0).drift(Drift::Walk(1.0)),
    ],
    eviction: &[Eviction::Floor { stat: 0, at: 3.0 }, Eviction::Window(63_000)],
    ..FEATURE
};

/// Natural stone arches.
pub static WORLD_ARCH: KindSpec = KindSpec {
    name: "world_arch",
    label: "natural arches",
    check_interval: 3225,
    spawn_chance: 0.002,
    max_count: 25,
    family: Family::Terrain {
        attempts: 1,
        tiles: &[TileType::Sand, TileType::Hills],
    },
    stats: &[
        StatSpec::new("span", 15.0, 30.0).drift(Drift::Biased { step: 3.0, bias: 0.5 }),
        StatSpec::new("thickness", 15.0, 25.0).drift(Drift::Walk(2.0)),
        StatSpec::new("stress", 25.0, 20.0),
    ],
    eviction: &[Eviction::Window(88_000)],
    ..FEATURE
};

/// Pillars of rock left standing by the sea.
pub static WORLD_SEA_STACK: KindSpec = KindSpec {
    name: "world_sea_stack",
    label: "sea stacks",
    check_interval: 1875,
    spawn_chance: 0.0008,
    max_count: 20,
    family: Family::Terrain {
        attempts: 1,
        tiles: &[TileType::ShallowWater],
    },
    stats: &[
        StatSpec::new("height", 15.0, 20.0).drift(Drift::Biased { step: 3.0, bias: 0.5 }),
        StatSpec::new("wave_exposure", 25.0, 20.0).drift(Drift::Walk(1.0)),
        StatSpec::new("stability", 30.0, 20.0).drift(Drift::Walk(1.5)),
    ],
    eviction: &[Eviction::Age { step: 0.5, ceiling: 89.0 }, Eviction::Window(78_000)],
    ..FEATURE
};

/// Mudflats that flood with the tide.
pub static WORLD_TIDAL_FLAT: KindSpec = KindSpec {
    name: "world_tidal_flat",
    label: "tidal flats",
    check_interval: 1950,
    spawn_chance: 0.0025,
    max_count: 20,
    family: Family::Terrain {
        attempts: 2,
        tiles: &[TileType::ShallowWater, TileType::Sand],
    },
    stats: &[
        StatSpec::new("exposure", 10.0, 20.0).drift(Drift::Biased { step: 2.5, bias: 0.52 }),
        StatSpec::new("sediment", 5.0, 25.0).drift(Drift::Walk(1.0)),
        StatSpec::new("biodiversity", 5.0, 25.0).drift(Drift::Walk(2.0)),
    ],
    eviction: &[Eviction::Floor { stat: 0, at: 4.0 }, Eviction::Window(93_000)],
    ..FEATURE
};

/// Coral reefs in shallow water.
pub static WORLD_REEF: KindSpec = KindSpec {
    name: "world_reef",
    label: "reefs",
    check_interval: 2950,
    spawn_chance: 0.0035,
    max_count: 30,
    family: Family::Terrain {
        attempts: 2,
        tiles: &[TileType::ShallowWater],
    },
    stats: &[
        StatSpec::new("coral_cover", 10.0, 30.0).drift(Drift::Biased { step: 2.5, bias: 0.55 }),
        StatSpec::new("health", 20.0, 30.0).drift(Drift::Walk(1.0)),
        StatSpec::new("bleaching", 5.0, 30.0).drift(Drift::Walk(2.0)),
    ],
    eviction: &[Eviction::Window(89_000)],
    ..FEATURE
};

/// River mouths mixing fresh and salt water.
pub static WORLD_ESTUARY: KindSpec = KindSpec {
    name: "world_estuary",
    label: "estuaries",
    check_interval: 3200,
    spawn_chance: 0.0008,
    max_count: 10,
    family: Family::Terrain {
        attempts: 1,
        tiles: &[TileType::ShallowWater, TileType::Swamp],
    },
    stats: &[
        StatSpec::new("salinity", 15.0, 25.0).drift(Drift::Biased { step: 2.0, bias: 0.52 }),
        StatSpec::new("sediment", 10.0, 40.0).drift(Drift::Walk(1.5)),
        StatSpec::new("fertility", 30.0, 20.0).drift(Drift::Walk(1.5)),
    ],
    eviction: &[Eviction::Age { step: 0.5, ceiling: 94.0 }, Eviction::Window(57_000)],
    ..FEATURE
};

/// Ridges of glacial debris.
pub static WORLD_MORAINE: KindSpec = KindSpec {
    name: "world_moraine",
    label: "moraines",
    check_interval: 2950,
    spawn_chance: 0.003,
    max_count: 25,
    family: Family::Terrain {
        attempts: 2,
        tiles: &[TileType::Snow, TileType::Hills],
    },
    stats: &[
        StatSpec::new("till_volume", 5.0, 25.0).drift(Drift::Biased { step: 1.5, bias: 0.5 }),
        StatSpec::new("sorting", 5.0, 25.0).drift(Drift::Walk(0.5)),
        StatSpec::new("stability", 20.0, 25.0).drift(Drift::Walk(1.5)),
    ],
    eviction: &[Eviction::Floor { stat: 0, at: 5.0 }, Eviction::Window(67_000)],
    ..FEATURE
};

/// Winding gravel ridges left by meltwater.
pub static WORLD_ESKER: KindSpec = KindSpec {
    name: "world_esker",
    label: "eskers",
    check_interval: 1900,
    spawn_chance: 0.002,
    max_count: 10,
    family: Family::Terrain {
        attempts: 1,
        tiles: &[TileType::Grass, TileType::Hills],
    },
    stats: &[
        StatSpec::new("length", 15.0, 30.0).drift(Drift::Biased { step: 2.0, bias: 0.55 }),
        StatSpec::new("gravel_content", 10.0, 30.0).drift(Drift::Walk(0.5)),
        StatSpec::new("erosion", 10.0, 30.0).drift(Drift::Walk(1.0)),
    ],
    eviction: &[Eviction::Window(73_000)],
    ..FEATURE
};

/// Streamlined glacial hills.
pub static WORLD_DRUMLIN: KindSpec = KindSpec {
    name: "world_drumlin",
    label: "drumlins",
    check_interval: 1600,
    spawn_chance: 0.003,
    max_count: 25,
    family: Family::Terrain {
        attempts: 1,
        tiles: &[TileType::Grass],
    },
    stats: &[
        StatSpec::new("elongation", 20.0, 20.0).drift(Drift::Biased { step: 2.5, bias: 0.55 }),
        StatSpec::new("height", 30.0, 30.0).drift(Drift::Walk(1.5)),
        StatSpec::new("till_density", 20.0, 30.0).drift(Drift::Walk(1.0)),
    ],
    eviction: &[Eviction::Age { step: 0.5, ceiling: 91.0 }, Eviction::Window(75_000)],
    ..FEATURE
};

/// Ground frozen year round.
pub static WORLD_PERMAFROST: KindSpec = KindSpec {
    name: "world_permafrost",
    label: "permafrost patches",
    check_interval: 2075,
    spawn_chance: 0.0015,
    max_count: 30,
    family: Family::Terrain {
        attempts: 3,
        tiles: &[TileType::Snow],
    },
    stats: &[
        StatSpec::new("ice_content", 20.0, 20.0).drift(Drift::Biased { step: 1.5, bias: 0.52 }),
        StatSpec::new("thaw_depth", 30.0, 20.0),
        StatSpec::new("stability", 20.0, 40.0).drift(Drift::Walk(1.0)),
    ],
    eviction: &[Eviction::Floor { stat: 0, at: 5.0 }, Eviction::Window(75_000)],
    ..FEATURE
};

/// Caves of standing ice.
pub static WORLD_ICE_CAVE: KindSpec = KindSpec {
    name: "world_ice_cave",
    label: "ice caves",
    check_interval: 2000,
    spawn_chance: 0.003,
    max_count: 15,
    family: Family::Terrain {
        attempts: 1,
        tiles: &[TileType::Snow, TileType::Mountain],
    },
    stats: &[
        StatSpec::new("ice_thickness", 15.0, 25.0).drift(Drift::Biased { step: 2.0, bias: 0.52 }),
        StatSpec::new("stability", 30.0, 30.0).drift(Drift::Walk(0.5)),
        StatSpec::new("meltwater", 5.0, 25.0).drift(Drift::Walk(1.0)),
    ],
    eviction: &[Eviction::Window(58_000)],
    ..FEATURE
};

/// Tracks cleared by repeated avalanches.
pub static WORLD_AVALANCHE_CHUTE: KindSpec = KindSpec {
    name: "world_avalanche_chute",
    label: "avalanche chutes",
    check_interval: 3250,
    spawn_chance: 0.0008,
    max_count: 10,
    family: Family::Terrain {
        attempts: 2,
        tiles: &[TileType::Snow, TileType::Mountain],
    },
    stats: &[
        StatSpec::new("snow_load", 15.0, 25.0).drift(Drift::Biased { step: 3.0, bias: 0.55 }),
        StatSpec::new("slope", 20.0, 30.0),
        StatSpec::new("release_risk", 10.0, 30.0).drift(Drift::Walk(3.0)),
    ],
    eviction: &[Eviction::Age { step: 1.5, ceiling: 84.0 }, Eviction::Window(53_000)],
    ..FEATURE
};

/// Slopes of loose broken rock.
pub static WORLD_SCREE_SLOPE: KindSpec = KindSpec {
    name: "world_scree_slope",
    label: "scree slopes",
    check_interval: 1550,
    spawn_chance: 0.0007,
    max_count: 25,
    family: Family::Terrain {
        attempts: 2,
        tiles: &[TileType::Mountain],
    },
    stats: &[
        StatSpec::new("debris_volume", 15.0, 25.0).drift(Drift::Biased { step: 2.5, bias: 0.5 }),
        StatSpec::new("slope", 10.0, 40.0).drift(Drift::Walk(0.5)),
        StatSpec::new("stability", 5.0, 40.0).drift(Drift::Walk(3.0)),
    ],
    eviction: &[Eviction::Floor { stat: 0, at: 4.0 }, Eviction::Window(68_000)],
    ..FEATURE
};

/// Waterlogged sand.
pub static WORLD_QUICKSAND: KindSpec = KindSpec {
    name: "world_quicksand",
    label: "quicksand patches",
    check_interval: 1500,
    spawn_chance: 0.001,
    max_count: 15,
    family: Family::Terrain {
        attempts: 1,
        tiles: &[TileType::Sand, TileType::Swamp],
    },
    stats: &[
        StatSpec::new("saturation", 20.0, 20.0).drift(Drift::Biased { step: 2.0, bias: 0.55 }),
        StatSpec::new("depth", 20.0, 20.0).drift(Drift::Walk(2.0)),
        StatSpec::new("firmness", 10.0, 20.0).drift(Drift::Walk(2.0)),
    ],
    eviction: &[Eviction::Window(56_000)],
    ..FEATURE
};

/// Freshwater springs.
pub static WORLD_SPRING: KindSpec = KindSpec {
    name: "world_spring",
    label: "springs",
    check_interval: 1625,
    spawn_chance: 0.003,
    max_count: 15,
    family: Family::Terrain {
        attempts: 2,
        tiles: &[TileType::Forest, TileType::Grass, TileType::Hills],
    },
    stats: &[
        StatSpec::new("flow_rate", 10.0, 25.0).drift(Drift::Biased { step: 2.0, bias: 0.52 }),
        StatSpec::new("purity", 25.0, 40.0).drift(Drift::Walk(2.0)),
        StatSpec::new("recharge", 20.0, 30.0).drift(Drift::Walk(3.0)),
    ],
    eviction: &[Eviction::Age { step: 0.5, ceiling: 93.0 }, Eviction::Window(54_000)],
    ..FEATURE
};

/// Falls where rivers drop over hard rock.
pub static WORLD_WATERFALL: KindSpec = KindSpec {
    name: "world_waterfall",
    label: "waterfalls",
    check_interval: 2450,
    spawn_chance: 0.002,
    max_count: 25,
    family: Family::Terrain {
        attempts: 1,
        tiles: &[TileType::Hills, TileType::Mountain],
    },
    stats: &[
        StatSpec::new("drop_height", 20.0, 30.0).drift(Drift::Biased { step: 1.5, bias: 0.52 }),
        StatSpec::new("flow_rate", 20.0, 20.0).drift(Drift::Walk(0.5)),
        StatSpec::new("undercutting", 30.0, 20.0).drift(Drift::Walk(0.5)),
    ],
    eviction: &[Eviction::Floor { stat: 0, at: 3.0 }, Eviction::Window(77_000)],
    ..FEATURE
};

/// Spreading cracks in the crust.
pub static WORLD_RIFT: KindSpec = KindSpec {
    name: "world_rift",
    label: "rift valleys",
    check_interval: 1650,
    spawn_chance: 0.0012,
    max_count: 30,
    family: Family::Terrain {
        attempts: 1,
        tiles: &[TileType::Hills, TileType::Grass],
    },
    stats: &[
        StatSpec::new("spreading", 40.0, 40.0)
            .drift(Drift::Oscillate { amplitude: 2.0, period: 4500.0 }),
        StatSpec::new("temperature", 200.0, 150.0)
            .range(0.0, 500.0)
            .drift(Drift::Oscillate { amplitude: 8.0, period: 10000.0 }),
        StatSpec::new("seismicity", 5.0, 25.0).drift(Drift::Walk(2.0)),
    ],
    eviction: &[Eviction::Window(74_000)],
    ..FEATURE
};
