//! Creature artisans: records anchored to a single creature.
//!
//! The first stat of every artisan is its craft skill.

use crate::kind::{CandidateFilter, Drift, Eviction, Family, KindSpec, StatSpec};

const ARTISAN: KindSpec = KindSpec {
    name: "",
    label: "",
    family: Family::Creature {
        filter: CandidateFilter::Any,
        skill_memory: false,
    },
    check_interval: 2000,
    spawn_chance: 0.002,
    max_count: 10,
    stats: &[],
    eviction: &[],
    progression: None,
    tile_effect: None,
};

/// Metalworkers growing oxide coatings on light alloys.
pub static CREATURE_ANODIZER: KindSpec = KindSpec {
    name: "creature_anodizer",
    label: "anodizers",
    check_interval: 2500,
    spawn_chance: 0.003,
    max_count: 15,
    stats: &[
        StatSpec::new("anodizing_skill", 10.0, 30.0).drift(Drift::Biased { step: 2.0, bias: 0.52 }),
        StatSpec::new("electrolyte_control", 10.0, 25.0).drift(Drift::Walk(1.5)),
        StatSpec::new("voltage_regulation", 10.0, 20.0).drift(Drift::Walk(1.0)),
        StatSpec::new("coating_uniformity", 15.0, 30.0).drift(Drift::Walk(1.5)),
    ],
    eviction: &[Eviction::Floor { stat: 0, at: 4.0 }, Eviction::Window(60_000)],
    ..ARTISAN
};

/// Elders who carve binding runes. Skill carries over between commissions.
pub static CREATURE_RUNE_CRAFTER: KindSpec = KindSpec {
    name: "creature_rune_crafter",
    label: "rune crafters",
    check_interval: 3000,
    spawn_chance: 0.0015,
    max_count: 10,
    family: Family::Creature {
        filter: CandidateFilter::MinAge(30.0),
        skill_memory: true,
    },
    stats: &[
        StatSpec::new("rune_skill", 5.0, 15.0).drift(Drift::Grow(0.5)),
        StatSpec::new("carving_precision", 20.0, 30.0).drift(Drift::Walk(1.0)),
        StatSpec::new("inscription_depth", 10.0, 20.0).drift(Drift::Walk(1.0)),
        StatSpec::new("focus", 30.0, 40.0).drift(Drift::Walk(3.0)),
    ],
    eviction: &[Eviction::Age { step: 1.0, ceiling: 90.0 }, Eviction::Window(80_000)],
    ..ARTISAN
};

/// Artisans shaping molten glass.
pub static CREATURE_GLASSBLOWER: KindSpec = KindSpec {
    name: "creature_glassblower",
    label: "glassblowers",
    check_interval: 2400,
    spawn_chance: 0.0015,
    max_count: 25,
    stats: &[
        StatSpec::new("blowing_skill", 10.0, 20.0).drift(Drift::Biased { step: 2.0, bias: 0.5 }),
        StatSpec::new("furnace_control", 10.0, 25.0).drift(Drift::Walk(3.0)),
        StatSpec::new("breath_control", 15.0, 40.0).drift(Drift::Walk(1.0)),
        StatSpec::new("clarity", 25.0, 20.0),
    ],
    eviction: &[Eviction::Age { step: 1.0, ceiling: 97.0 }, Eviction::Window(86_000)],
    ..ARTISAN
};

/// Smiths working iron at the forge.
pub static CREATURE_BLACKSMITH: KindSpec = KindSpec {
    name: "creature_blacksmith",
    label: "blacksmiths",
    check_interval: 2075,
    spawn_chance: 0.0012,
    max_count: 12,
    stats: &[
        StatSpec::new("forging_skill", 5.0, 25.0).drift(Drift::Biased { step: 1.5, bias: 0.55 }),
        StatSpec::new("hammer_control", 5.0, 30.0).drift(Drift::Walk(3.0)),
        StatSpec::new("temper_judgement", 20.0, 40.0).drift(Drift::Walk(1.5)),
        StatSpec::new("endurance", 25.0, 40.0).drift(Drift::Walk(0.5)),
    ],
    eviction: &[Eviction::Floor { stat: 0, at: 5.0 }, Eviction::Window(54_000)],
    ..ARTISAN
};

/// Loom workers.
pub static CREATURE_WEAVER: KindSpec = KindSpec {
    name: "creature_weaver",
    label: "weavers",
    check_interval: 2150,
    spawn_chance: 0.0012,
    max_count: 8,
    stats: &[
        StatSpec::new("weaving_skill", 15.0, 30.0).drift(Drift::Biased { step: 2.5, bias: 0.55 }),
        StatSpec::new("thread_tension", 30.0, 40.0).drift(Drift::Walk(1.5)),
        StatSpec::new("pattern_memory", 5.0, 30.0).drift(Drift::Walk(0.5)),
        StatSpec::new("speed", 30.0, 25.0).drift(Drift::Walk(1.5)),
    ],
    eviction: &[Eviction::Window(66_000)],
    ..ARTISAN
};

/// Throwers and firers of clay vessels.
pub static CREATURE_POTTER: KindSpec = KindSpec {
    name: "creature_potter",
    label: "potters",
    check_interval: 1725,
    spawn_chance: 0.0007,
    max_count: 12,
    stats: &[
        StatSpec::new("throwing_skill", 20.0, 20.0).drift(Drift::Biased { step: 2.0, bias: 0.5 }),
        StatSpec::new("clay_preparation", 25.0, 30.0).drift(Drift::Walk(1.0)),
        StatSpec::new("kiln_control", 5.0, 20.0).drift(Drift::Walk(1.0)),
        StatSpec::new("glaze_consistency", 20.0, 20.0).drift(Drift::Walk(3.0)),
    ],
    eviction: &[Eviction::Age { step: 1.5, ceiling: 88.0 }, Eviction::Window(83_000)],
    ..ARTISAN
};

/// Leather curers working with bark liquors.
pub static CREATURE_TANNER: KindSpec = KindSpec {
    name: "creature_tanner",
    label: "tanners",
    check_interval: 2350,
    spawn_chance: 0.003,
    max_count: 25,
    stats: &[
        StatSpec::new("tanning_skill", 5.0, 25.0).drift(Drift::Biased { step: 2.5, bias: 0.55 }),
        StatSpec::new("liquor_strength", 25.0, 30.0).drift(Drift::Walk(1.5)),
        StatSpec::new("hide_selection", 30.0, 40.0).drift(Drift::Walk(2.0)),
        StatSpec::new("patience", 30.0, 40.0).drift(Drift::Walk(0.5)),
    ],
    eviction: &[Eviction::Floor { stat: 0, at: 4.0 }, Eviction::Window(68_000)],
    ..ARTISAN
};

/// Stone setters and cutters.
pub static CREATURE_JEWELER: KindSpec = KindSpec {
    name: "creature_jeweler",
    label: "jewelers",
    check_interval: 3025,
    spawn_chance: 0.0018,
    max_count: 15,
    stats: &[
        StatSpec::new("setting_skill", 10.0, 25.0).drift(Drift::Biased { step: 2.5, bias: 0.52 }),
        StatSpec::new("stone_judgement", 5.0, 30.0).drift(Drift::Walk(2.0)),
        StatSpec::new("filigree_precision", 10.0, 30.0).drift(Drift::Walk(1.5)),
        StatSpec::new("steadiness", 30.0, 20.0).drift(Drift::Walk(0.5)),
    ],
    eviction: &[Eviction::Window(84_000)],
    ..ARTISAN
};

/// Barrel makers.
pub static CREATURE_COOPER: KindSpec = KindSpec {
    name: "creature_cooper",
    label: "coopers",
    check_interval: 2950,
    spawn_chance: 0.0025,
    max_count: 10,
    stats: &[
        StatSpec::new("coopering_skill", 20.0, 30.0).drift(Drift::Biased { step: 2.0, bias: 0.52 }),
        StatSpec::new("stave_fitting", 15.0, 25.0),
        StatSpec::new("hoop_tension", 30.0, 30.0).drift(Drift::Walk(0.5)),
        StatSpec::new("watertightness", 5.0, 30.0).drift(Drift::Walk(1.5)),
    ],
    eviction: &[Eviction::Age { step: 0.5, ceiling: 92.0 }, Eviction::Window(69_000)],
    ..ARTISAN
};

/// Arrow makers fitting shafts and flights.
pub static CREATURE_FLETCHER: KindSpec = KindSpec {
    name: "creature_fletcher",
    label: "fletchers",
    check_interval: 2900,
    spawn_chance: 0.0035,
    max_count: 8,
    stats: &[
        StatSpec::new("fletching_skill", 5.0, 20.0).drift(Drift::Biased { step: 1.5, bias: 0.52 }),
        StatSpec::new("feather_matching", 15.0, 40.0).drift(Drift::Walk(1.5)),
        StatSpec::new("shaft_straightness", 20.0, 40.0).drift(Drift::Walk(1.5)),
        StatSpec::new("balance", 10.0, 25.0).drift(Drift::Walk(1.0)),
    ],
    eviction: &[Eviction::Floor { stat: 0, at: 4.0 }, Eviction::Window(54_000)],
    ..ARTISAN
};

/// Binders sewing signatures into boards.
pub static CREATURE_BOOKBINDER: KindSpec = KindSpec {
    name: "creature_bookbinder",
    label: "bookbinders",
    check_interval: 2000,
    spawn_chance: 0.0015,
    max_count: 10,
    stats: &[
        StatSpec::new("binding_skill", 20.0, 20.0).drift(Drift::Biased { step: 3.0, bias: 0.5 }),
        StatSpec::new("sewing_tension", 5.0, 20.0).drift(Drift::Walk(1.5)),
        StatSpec::new("spine_rounding", 10.0, 20.0),
        StatSpec::new("gilding", 20.0, 25.0).drift(Drift::Walk(0.5)),
    ],
    eviction: &[Eviction::Window(65_000)],
    ..ARTISAN
};

/// Brewers tending mash tuns and casks.
pub static CREATURE_BREWER: KindSpec = KindSpec {
    name: "creature_brewer",
    label: "brewers",
    check_interval: 2325,
    spawn_chance: 0.0025,
    max_count: 20,
    stats: &[
        StatSpec::new("brewing_skill", 5.0, 20.0).drift(Drift::Biased { step: 3.0, bias: 0.52 }),
        StatSpec::new("mash_temperature", 10.0, 30.0),
        StatSpec::new("yeast_husbandry", 10.0, 40.0).drift(Drift::Walk(2.0)),
        StatSpec::new("clarity", 10.0, 25.0).drift(Drift::Walk(1.0)),
    ],
    eviction: &[Eviction::Age { step: 1.5, ceiling: 94.0 }, Eviction::Window(65_000)],
    ..ARTISAN
};

/// Candle makers rendering tallow and wax.
pub static CREATURE_CHANDLER: KindSpec = KindSpec {
    name: "creature_chandler",
    label: "chandlers",
    check_interval: 1775,
    spawn_chance: 0.003,
    max_count: 15,
    stats: &[
        StatSpec::new("dipping_skill", 5.0, 30.0).drift(Drift::Biased { step: 3.0, bias: 0.5 }),
        StatSpec::new("wick_trimming", 15.0, 25.0).drift(Drift::Walk(3.0)),
        StatSpec::new("wax_purity", 5.0, 40.0).drift(Drift::Walk(1.5)),
        StatSpec::new("burn_evenness", 10.0, 20.0).drift(Drift::Walk(3.0)),
    ],
    eviction: &[Eviction::Floor { stat: 0, at: 4.0 }, Eviction::Window(76_000)],
    ..ARTISAN
};

/// Surveyors drawing regional maps.
pub static CREATURE_CARTOGRAPHER: KindSpec = KindSpec {
    name: "creature_cartographer",
    label: "cartographers",
    check_interval: 2525,
    spawn_chance: 0.0007,
    max_count: 15,
    stats: &[
        StatSpec::new("mapping_skill", 10.0, 30.0).drift(Drift::Biased { step: 1.5, bias: 0.55 }),
        StatSpec::new("survey_accuracy", 20.0, 20.0).drift(Drift::Walk(1.0)),
        StatSpec::new("projection_knowledge", 15.0, 40.0).drift(Drift::Walk(1.0)),
        StatSpec::new("lettering", 25.0, 20.0),
    ],
    eviction: &[Eviction::Window(62_000)],
    ..ARTISAN
};

/// Makers of escapements and gear trains.
pub static CREATURE_CLOCKMAKER: KindSpec = KindSpec {
    name: "creature_clockmaker",
    label: "clockmakers",
    check_interval: 2450,
    spawn_chance: 0.0035,
    max_count: 10,
    stats: &[
        StatSpec::new("horology_skill", 5.0, 30.0).drift(Drift::Biased { step: 2.0, bias: 0.55 }),
        StatSpec::new("gear_cutting", 10.0, 30.0).drift(Drift::Walk(1.0)),
        StatSpec::new("escapement_tuning", 20.0, 30.0).drift(Drift::Walk(0.5)),
        StatSpec::new("patience", 10.0, 30.0).drift(Drift::Walk(2.0)),
    ],
    eviction: &[Eviction::Age { step: 1.5, ceiling: 91.0 }, Eviction::Window(86_000)],
    ..ARTISAN
};

/// Engravers cutting lines into plate and seal.
pub static CREATURE_ENGRAVER: KindSpec = KindSpec {
    name: "creature_engraver",
    label: "engravers",
    check_interval: 1650,
    spawn_chance: 0.0025,
    max_count: 15,
    stats: &[
        StatSpec::new("engraving_skill", 15.0, 30.0).drift(Drift::Biased { step: 1.5, bias: 0.5 }),
        StatSpec::new("burin_control", 20.0, 40.0).drift(Drift::Walk(1.5)),
        StatSpec::new("line_depth", 10.0, 25.0).drift(Drift::Walk(2.0)),
        StatSpec::new("shading", 15.0, 25.0).drift(Drift::Walk(1.5)),
    ],
    eviction: &[Eviction::Floor { stat: 0, at: 4.0 }, Eviction::Window(97_000)],
    ..ARTISAN
};

/// Fuse powdered glass onto metal.
pub static CREATURE_ENAMELER: KindSpec = KindSpec {
    name: "creature_enameler",
    label: "enamelers",
    check_interval: 2275,
    spawn_chance: 0.001,
    max_count: 10,
    stats: &[
        StatSpec::new("enameling_skill", 20.0, 30.0).drift(Drift::Biased { step: 2.0, bias: 0.52 }),
        StatSpec::new("firing_control", 5.0, 40.0),
        StatSpec::new("color_matching", 15.0, 25.0),
        StatSpec::new("surface_finish", 15.0, 30.0).drift(Drift::Walk(0.5)),
    ],
    eviction: &[Eviction::Window(51_000)],
    ..ARTISAN
};

/// Gilders laying gold leaf.
pub static CREATURE_GILDER: KindSpec = KindSpec {
    name: "creature_gilder",
    label: "gilders",
    check_interval: 2900,
    spawn_chance: 0.0015,
    max_count: 10,
    stats: &[
        StatSpec::new("gilding_skill", 20.0, 30.0).drift(Drift::Biased { step: 3.0, bias: 0.55 }),
        StatSpec::new("leaf_handling", 15.0, 20.0).drift(Drift::Walk(2.0)),
        StatSpec::new("size_timing", 15.0, 40.0).drift(Drift::Walk(1.0)),
        StatSpec::new("burnishing", 30.0, 30.0).drift(Drift::Walk(1.0)),
    ],
    eviction: &[Eviction::Age { step: 1.5, ceiling: 83.0 }, Eviction::Window(56_000)],
    ..ARTISAN
};

/// Stone cutters faceting gems.
pub static CREATURE_LAPIDARY: KindSpec = KindSpec {
    name: "creature_lapidary",
    label: "lapidaries",
    check_interval: 1500,
    spawn_chance: 0.0008,
    max_count: 15,
    stats: &[
        StatSpec::new("cutting_skill", 20.0, 25.0).drift(Drift::Biased { step: 3.0, bias: 0.5 }),
        StatSpec::new("facet_geometry", 20.0, 40.0).drift(Drift::Walk(1.0)),
        StatSpec::new("polish", 25.0, 40.0).drift(Drift::Walk(1.0)),
        StatSpec::new("yield", 20.0, 40.0).drift(Drift::Walk(0.5)),
    ],
    eviction: &[Eviction::Floor { stat: 0, at: 4.0 }, Eviction::Window(82_000)],
    ..ARTISAN
};

/// Builders of stringed instruments.
pub static CREATURE_LUTHIER: KindSpec = KindSpec {
    name: "creature_luthier",
    label: "luthiers",
    check_interval: 2275,
    spawn_chance: 0.002,
    max_count: 20,
    stats: &[
        StatSpec::new("lutherie_skill", 5.0, 25.0).drift(Drift::Biased { step: 3.0, bias: 0.55 }),
        StatSpec::new("wood_selection", 10.0, 25.0).drift(Drift::Walk(2.0)),
        StatSpec::new("voicing", 5.0, 25.0).drift(Drift::Walk(2.0)),
        StatSpec::new("varnish", 20.0, 30.0),
    ],
    eviction: &[Eviction::Window(56_000)],
    ..ARTISAN
};

/// Stonemasons dressing ashlar.
pub static CREATURE_MASON: KindSpec = KindSpec {
    name: "creature_mason",
    label: "masons",
    check_interval: 3000,
    spawn_chance: 0.001,
    max_count: 10,
    stats: &[
        StatSpec::new("masonry_skill", 10.0, 25.0).drift(Drift::Biased { step: 2.0, bias: 0.5 }),
        StatSpec::new("chisel_control", 10.0, 20.0).drift(Drift::Walk(3.0)),
        StatSpec::new("bedding_judgement", 5.0, 25.0),
        StatSpec::new("strength", 25.0, 25.0).drift(Drift::Walk(1.5)),
    ],
    eviction: &[Eviction::Age { step: 0.5, ceiling: 89.0 }, Eviction::Window(72_000)],
    ..ARTISAN
};

/// Hat makers.
pub static CREATURE_MILLINER: KindSpec = KindSpec {
    name: "creature_milliner",
    label: "milliners",
    check_interval: 1575,
    spawn_chance: 0.0007,
    max_count: 25,
    stats: &[
        StatSpec::new("millinery_skill", 20.0, 25.0).drift(Drift::Biased { step: 2.0, bias: 0.52 }),
        StatSpec::new("blocking", 10.0, 30.0),
        StatSpec::new("trimming", 15.0, 25.0).drift(Drift::Walk(2.0)),
        StatSpec::new("style", 5.0, 30.0).drift(Drift::Walk(1.0)),
    ],
    eviction: &[Eviction::Floor { stat: 0, at: 4.0 }, Eviction::Window(54_000)],
    ..ARTISAN
};

/// Distil and blend aromatic oils.
pub static CREATURE_PERFUMER: KindSpec = KindSpec {
    name: "creature_perfumer",
    label: "perfumers",
    check_interval: 3225,
    spawn_chance: 0.0018,
    max_count: 15,
    stats: &[
        StatSpec::new("blending_skill", 10.0, 20.0).drift(Drift::Biased { step: 2.5, bias: 0.5 }),
        StatSpec::new("distillation_control", 25.0, 30.0),
        StatSpec::new("scent_memory", 5.0, 20.0).drift(Drift::Walk(0.5)),
        StatSpec::new("fixative_balance", 15.0, 30.0).drift(Drift::Walk(3.0)),
    ],
    eviction: &[Eviction::Window(71_000)],
    ..ARTISAN
};

/// Saddle and harness makers.
pub static CREATURE_SADDLER: KindSpec = KindSpec {
    name: "creature_saddler",
    label: "saddlers",
    check_interval: 2975,
    spawn_chance: 0.0035,
    max_count: 8,
    stats: &[
        StatSpec::new("saddlery_skill", 20.0, 25.0).drift(Drift::Biased { step: 1.5, bias: 0.55 }),
        StatSpec::new("stitching", 25.0, 20.0),
        StatSpec::new("tree_fitting", 15.0, 20.0).drift(Drift::Walk(1.0)),
        StatSpec::new("leather_judgement", 10.0, 40.0).drift(Drift::Walk(0.5)),
    ],
    eviction: &[Eviction::Age { step: 0.5, ceiling: 82.0 }, Eviction::Window(95_000)],
    ..ARTISAN
};

/// Copyists keeping civic records.
pub static CREATURE_SCRIBE: KindSpec = KindSpec {
    name: "creature_scribe",
    label: "scribes",
    check_interval: 2100,
    spawn_chance: 0.001,
    max_count: 15,
    stats: &[
        StatSpec::new("scribal_skill", 10.0, 25.0).drift(Drift::Biased { step: 2.0, bias: 0.55 }),
        StatSpec::new("letterform", 20.0, 30.0).drift(Drift::Walk(1.0)),
        StatSpec::new("ink_preparation", 10.0, 25.0).drift(Drift::Walk(1.0)),
        StatSpec::new("accuracy", 5.0, 20.0),
    ],
    eviction: &[Eviction::Floor { stat: 0, at: 5.0 }, Eviction::Window(55_000)],
    ..ARTISAN
};

/// Silversmiths raising plate and flatware.
pub static CREATURE_SILVERSMITH: KindSpec = KindSpec {
    name: "creature_silversmith",
    label: "silversmiths",
    check_interval: 2500,
    spawn_chance: 0.0035,
    max_count: 8,
    stats: &[
        StatSpec::new("raising_skill", 10.0, 30.0).drift(Drift::Biased { step: 2.5, bias: 0.52 }),
        StatSpec::new("annealing_control", 20.0, 20.0).drift(Drift::Walk(2.0)),
        StatSpec::new("chasing", 25.0, 25.0).drift(Drift::Walk(2.0)),
        StatSpec::new("planishing", 20.0, 25.0).drift(Drift::Walk(2.0)),
    ],
    eviction: &[Eviction::Window(81_000)],
    ..ARTISAN
};

/// Tinsmiths folding and soldering sheet tin.
pub static CREATURE_TINSMITH: KindSpec = KindSpec {
    name: "creature_tinsmith",
    label: "tinsmiths",
    check_interval: 2450,
    spawn_chance: 0.002,
    max_count: 25,
    stats: &[
        StatSpec::new("tinsmithing_skill", 10.0, 25.0)
            .drift(Drift::Biased { step: 2.5, bias: 0.55 }),
        StatSpec::new("seam_soldering", 10.0, 30.0).drift(Drift::Walk(2.0)),
        StatSpec::new("shearing_accuracy", 15.0, 40.0).drift(Drift::Walk(1.5)),
        StatSpec::new("forming", 5.0, 20.0),
    ],
    eviction: &[Eviction::Age { step: 1.0, ceiling: 86.0 }, Eviction::Window(55_000)],
    ..ARTISAN
};

/// Upholsterers stuffing and covering furniture.
pub static CREATURE_UPHOLSTERER: KindSpec = KindSpec {
    name: "creature_upholsterer",
    label: "upholsterers",
    check_interval: 1925,
    spawn_chance: 0.0007,
    max_count: 10,
    stats: &[
        StatSpec::new("upholstery_skill", 15.0, 20.0)
            .drift(Drift::Biased { step: 2.0, bias: 0.52 }),
        StatSpec::new("webbing_tension", 30.0, 40.0),
        StatSpec::new("stuffing_density", 5.0, 40.0).drift(Drift::Walk(0.5)),
        StatSpec::new("tacking", 20.0, 30.0),
    ],
    eviction: &[Eviction::Floor { stat: 0, at: 4.0 }, Eviction::Window(72_000)],
    ..ARTISAN
};

/// Vintners tending ferments and casks.
pub static CREATURE_VINTNER: KindSpec = KindSpec {
    name: "creature_vintner",
    label: "vintners",
    check_interval: 3200,
    spawn_chance: 0.001,
    max_count: 10,
    stats: &[
        StatSpec::new("vinification_skill", 5.0, 25.0)
            .drift(Drift::Biased { step: 2.5, bias: 0.52 }),
        StatSpec::new("ferment_control", 20.0, 20.0).drift(Drift::Walk(1.0)),
        StatSpec::new("blending", 10.0, 20.0).drift(Drift::Walk(1.5)),
        StatSpec::new("cellar_hygiene", 15.0, 40.0).drift(Drift::Walk(3.0)),
    ],
    eviction: &[Eviction::Window(50_000)],
    ..ARTISAN
};

/// Wheelwrights fitting spokes and iron tyres.
pub static CREATURE_WHEELWRIGHT: KindSpec = KindSpec {
    name: "creature_wheelwright",
    label: "wheelwrights",
    check_interval: 3025,
    spawn_chance: 0.004,
    max_count: 12,
    stats: &[
        StatSpec::new("wheelwright_skill", 20.0, 20.0)
            .drift(Drift::Biased { step: 2.5, bias: 0.5 }),
        StatSpec::new("spoke_fitting", 10.0, 40.0),
        StatSpec::new("tyre_shrinking", 15.0, 30.0).drift(Drift::Walk(1.0)),
        StatSpec::new("dishing", 30.0, 30.0).drift(Drift::Walk(0.5)),
    ],
    eviction: &[Eviction::Age { step: 1.5, ceiling: 93.0 }, Eviction::Window(91_000)],
    ..ARTISAN
};

/// Carvers of figures and relief panels.
pub static CREATURE_WOODCARVER: KindSpec = KindSpec {
    name: "creature_woodcarver",
    label: "woodcarvers",
    check_interval: 2950,
    spawn_chance: 0.001,
    max_count: 20,
    stats: &[
        StatSpec::new("carving_skill", 20.0, 30.0).drift(Drift::Biased { step: 2.0, bias: 0.52 }),
        StatSpec::new("grain_reading", 10.0, 20.0).drift(Drift::Walk(1.5)),
        StatSpec::new("tool_sharpness", 30.0, 25.0).drift(Drift::Walk(0.5)),
        StatSpec::new("detail", 25.0, 25.0).drift(Drift::Walk(1.5)),
    ],
    eviction: &[Eviction::Floor { stat: 0, at: 3.0 }, Eviction::Window(81_000)],
    ..ARTISAN
};

/// Basket weavers working willow and reed.
pub static CREATURE_BASKET_WEAVER: KindSpec = KindSpec {
    name: "creature_basket_weaver",
    label: "basket weavers",
    check_interval: 2800,
    spawn_chance: 0.0025,
    max_count: 12,
    stats: &[
        StatSpec::new("basketry_skill", 5.0, 20.0).drift(Drift::Biased { step: 3.0, bias: 0.52 }),
        StatSpec::new("withy_preparation", 25.0, 30.0),
        StatSpec::new("weave_tightness", 20.0, 30.0).drift(Drift::Walk(0.5)),
        StatSpec::new("speed", 15.0, 20.0).drift(Drift::Walk(1.5)),
    ],
    eviction: &[Eviction::Window(73_000)],
    ..ARTISAN
};

/// Cast and tune bronze bells.
pub static CREATURE_BELLFOUNDER: KindSpec = KindSpec {
    name: "creature_bellfounder",
    label: "bellfounders",
    check_interval: 3325,
    spawn_chance: 0.0035,
    max_count: 10,
    stats: &[
        StatSpec::new("founding_skill", 5.0, 20.0).drift(Drift::Biased { step: 2.5, bias: 0.5 }),
        StatSpec::new("mould_making", 15.0, 40.0).drift(Drift::Walk(1.5)),
        StatSpec::new("alloy_judgement", 20.0, 40.0).drift(Drift::Walk(0.5)),
        StatSpec::new("tuning", 5.0, 25.0),
    ],
    eviction: &[Eviction::Age { step: 1.5, ceiling: 92.0 }, Eviction::Window(55_000)],
    ..ARTISAN
};

/// Scribes of formal hands.
pub static CREATURE_CALLIGRAPHER: KindSpec = KindSpec {
    name: "creature_calligrapher",
    label: "calligraphers",
    check_interval: 3200,
    spawn_chance: 0.0015,
    max_count: 8,
    stats: &[
        StatSpec::new("calligraphy_skill", 20.0, 25.0)
            .drift(Drift::Biased { step: 1.5, bias: 0.55 }),
        StatSpec::new("brush_control", 30.0, 40.0).drift(Drift::Walk(1.0)),
        StatSpec::new("ink_flow", 30.0, 20.0),
        StatSpec::new("composition", 10.0, 40.0).drift(Drift::Walk(0.5)),
    ],
    eviction: &[Eviction::Floor { stat: 0, at: 5.0 }, Eviction::Window(89_000)],
    ..ARTISAN
};

/// Dyers fixing colour with mordants.
pub static CREATURE_DYER: KindSpec = KindSpec {
    name: "creature_dyer",
    label: "dyers",
    check_interval: 1750,
    spawn_chance: 0.0035,
    max_count: 12,
    stats: &[
        StatSpec::new("dyeing_skill", 10.0, 20.0).drift(Drift::Biased { step: 1.5, bias: 0.52 }),
        StatSpec::new("mordant_balance", 30.0, 40.0).drift(Drift::Walk(2.0)),
        StatSpec::new("vat_temperature", 30.0, 40.0).drift(Drift::Walk(1.0)),
        StatSpec::new("colourfastness", 30.0, 30.0).drift(Drift::Walk(3.0)),
    ],
    eviction: &[Eviction::Window(58_000)],
    ..ARTISAN
};

/// Needleworkers.
pub static CREATURE_EMBROIDERER: KindSpec = KindSpec {
    name: "creature_embroiderer",
    label: "embroiderers",
    check_interval: 2300,
    spawn_chance: 0.0015,
    max_count: 20,
    stats: &[
        StatSpec::new("embroidery_skill", 5.0, 25.0).drift(Drift::Biased { step: 1.5, bias: 0.52 }),
        StatSpec::new("stitch_density", 10.0, 20.0).drift(Drift::Walk(1.5)),
        StatSpec::new("thread_selection", 25.0, 40.0).drift(Drift::Walk(3.0)),
        StatSpec::new("design", 5.0, 20.0).drift(Drift::Walk(2.0)),
    ],
    eviction: &[Eviction::Age { step: 1.0, ceiling: 86.0 }, Eviction::Window(78_000)],
    ..ARTISAN
};

/// Farriers shoeing horses.
pub static CREATURE_FARRIER: KindSpec = KindSpec {
    name: "creature_farrier",
    label: "farriers",
    check_interval: 1575,
    spawn_chance: 0.004,
    max_count: 10,
    stats: &[
        StatSpec::new("farriery_skill", 20.0, 25.0).drift(Drift::Biased { step: 3.0, bias: 0.55 }),
        StatSpec::new("hoof_trimming", 10.0, 25.0).drift(Drift::Walk(0.5)),
        StatSpec::new("shoe_fitting", 10.0, 20.0).drift(Drift::Walk(0.5)),
        StatSpec::new("nerve", 5.0, 20.0).drift(Drift::Walk(1.0)),
    ],
    eviction: &[Eviction::Floor { stat: 0, at: 3.0 }, Eviction::Window(54_000)],
    ..ARTISAN
};

/// Cut and lead window glass.
pub static CREATURE_GLAZIER: KindSpec = KindSpec {
    name: "creature_glazier",
    label: "glaziers",
    check_interval: 2650,
    spawn_chance: 0.0007,
    max_count: 20,
    stats: &[
        StatSpec::new("glazing_skill", 10.0, 30.0).drift(Drift::Biased { step: 3.0, bias: 0.5 }),
        StatSpec::new("cutting_accuracy", 30.0, 40.0),
        StatSpec::new("leading", 20.0, 40.0).drift(Drift::Walk(2.0)),
        StatSpec::new("sealing", 15.0, 25.0).drift(Drift::Walk(1.5)),
    ],
    eviction: &[Eviction::Window(63_000)],
    ..ARTISAN
};

/// Goldbeaters hammering leaf.
pub static CREATURE_GOLDBEATER: KindSpec = KindSpec {
    name: "creature_goldbeater",
    label: "goldbeaters",
    check_interval: 1925,
    spawn_chance: 0.0035,
    max_count: 8,
    stats: &[
        StatSpec::new("beating_skill", 10.0, 30.0).drift(Drift::Biased { step: 2.0, bias: 0.55 }),
        StatSpec::new("leaf_thinness", 25.0, 40.0),
        StatSpec::new("rhythm", 15.0, 20.0).drift(Drift::Walk(1.5)),
        StatSpec::new("stamina", 15.0, 40.0).drift(Drift::Walk(0.5)),
    ],
    eviction: &[Eviction::Age { step: 1.0, ceiling: 84.0 }, Eviction::Window(77_000)],
    ..ARTISAN
};

/// Bobbin lacemakers.
pub static CREATURE_LACEMAKER: KindSpec = KindSpec {
    name: "creature_lacemaker",
    label: "lacemakers",
    check_interval: 1550,
    spawn_chance: 0.002,
    max_count: 15,
    stats: &[
        StatSpec::new("lacemaking_skill", 15.0, 25.0)
            .drift(Drift::Biased { step: 3.0, bias: 0.55 }),
        StatSpec::new("bobbin_handling", 15.0, 25.0).drift(Drift::Walk(0.5)),
        StatSpec::new("pricking_accuracy", 5.0, 30.0).drift(Drift::Walk(1.0)),
        StatSpec::new("eyesight", 20.0, 30.0).drift(Drift::Walk(2.0)),
    ],
    eviction: &[Eviction::Floor { stat: 0, at: 3.0 }, Eviction::Window(55_000)],
    ..ARTISAN
};

/// Locksmiths.
pub static CREATURE_LOCKSMITH: KindSpec = KindSpec {
    name: "creature_locksmith",
    label: "locksmiths",
    check_interval: 2900,
    spawn_chance: 0.0018,
    max_count: 10,
    stats: &[
        StatSpec::new("locksmithing_skill", 5.0, 20.0)
            .drift(Drift::Biased { step: 1.5, bias: 0.55 }),
        StatSpec::new("ward_cutting", 20.0, 20.0).drift(Drift::Walk(2.0)),
        StatSpec::new("spring_tempering", 10.0, 25.0).drift(Drift::Walk(1.0)),
        StatSpec::new("discretion", 30.0, 20.0).drift(Drift::Walk(1.0)),
    ],
    eviction: &[Eviction::Window(60_000)],
    ..ARTISAN
};

/// Mosaicists setting tesserae.
pub static CREATURE_MOSAICIST: KindSpec = KindSpec {
    name: "creature_mosaicist",
    label: "mosaicists",
    check_interval: 1725,
    spawn_chance: 0.0012,
    max_count: 10,
    stats: &[
        StatSpec::new("mosaic_skill", 5.0, 25.0).drift(Drift::Biased { step: 2.0, bias: 0.55 }),
        StatSpec::new("tessera_cutting", 25.0, 25.0).drift(Drift::Walk(1.0)),
        StatSpec::new("setting_bed", 25.0, 20.0),
        StatSpec::new("color_sense", 10.0, 25.0).drift(Drift::Walk(0.5)),
    ],
    eviction: &[Eviction::Age { step: 0.5, ceiling: 98.0 }, Eviction::Window(85_000)],
    ..ARTISAN
};

/// Pulp beaters and vat men.
pub static CREATURE_PAPERMAKER: KindSpec = KindSpec {
    name: "creature_papermaker",
    label: "papermakers",
    check_interval: 3225,
    spawn_chance: 0.0015,
    max_count: 10,
    stats: &[
        StatSpec::new("papermaking_skill", 20.0, 25.0)
            .drift(Drift::Biased { step: 2.0, bias: 0.55 }),
        StatSpec::new("pulp_consistency", 20.0, 30.0).drift(Drift::Walk(2.0)),
        StatSpec::new("couching", 10.0, 40.0).drift(Drift::Walk(0.5)),
        StatSpec::new("sizing", 5.0, 40.0),
    ],
    eviction: &[Eviction::Floor { stat: 0, at: 4.0 }, Eviction::Window(73_000)],
    ..ARTISAN
};

/// Pewter casters.
pub static CREATURE_PEWTERER: KindSpec = KindSpec {
    name: "creature_pewterer",
    label: "pewterers",
    check_interval: 2375,
    spawn_chance: 0.0015,
    max_count: 10,
    stats: &[
        StatSpec::new("pewter_skill", 15.0, 20.0).drift(Drift::Biased { step: 1.5, bias: 0.52 }),
        StatSpec::new("mould_temperature", 25.0, 20.0),
        StatSpec::new("alloy_purity", 25.0, 25.0),
        StatSpec::new("turning", 30.0, 25.0).drift(Drift::Walk(0.5)),
    ],
    eviction: &[Eviction::Window(64_000)],
    ..ARTISAN
};

/// Ropewalk spinners laying strands into line.
pub static CREATURE_ROPEMAKER: KindSpec = KindSpec {
    name: "creature_ropemaker",
    label: "ropemakers",
    check_interval: 2725,
    spawn_chance: 0.003,
    max_count: 12,
    stats: &[
        StatSpec::new("ropemaking_skill", 10.0, 30.0)
            .drift(Drift::Biased { step: 3.0, bias: 0.55 }),
        StatSpec::new("twist_consistency", 20.0, 25.0).drift(Drift::Walk(0.5)),
        StatSpec::new("fibre_selection", 15.0, 20.0).drift(Drift::Walk(2.0)),
        StatSpec::new("walk_endurance", 10.0, 25.0),
    ],
    eviction: &[Eviction::Age { step: 1.0, ceiling: 80.0 }, Eviction::Window(71_000)],
    ..ARTISAN
};

/// Sculptors working marble and bronze.
pub static CREATURE_SCULPTOR: KindSpec = KindSpec {
    name: "creature_sculptor",
    label: "sculptors",
    check_interval: 2775,
    spawn_chance: 0.0008,
    max_count: 20,
    stats: &[
        StatSpec::new("sculpting_skill", 5.0, 20.0).drift(Drift::Biased { step: 2.5, bias: 0.5 }),
        StatSpec::new("proportion", 30.0, 25.0).drift(Drift::Walk(1.0)),
        StatSpec::new("finishing", 20.0, 20.0).drift(Drift::Walk(3.0)),
        StatSpec::new("vision", 10.0, 25.0).drift(Drift::Walk(1.5)),
    ],
    eviction: &[Eviction::Floor { stat: 0, at: 3.0 }, Eviction::Window(60_000)],
    ..ARTISAN
};

/// Shipwrights.
pub static CREATURE_SHIPWRIGHT: KindSpec = KindSpec {
    name: "creature_shipwright",
    label: "shipwrights",
    check_interval: 3150,
    spawn_chance: 0.0012,
    max_count: 12,
    stats: &[
        StatSpec::new("shipwright_skill", 5.0, 25.0).drift(Drift::Biased { step: 2.0, bias: 0.55 }),
        StatSpec::new("lofting", 5.0, 30.0),
        StatSpec::new("caulking", 10.0, 30.0),
        StatSpec::new("timber_judgement", 20.0, 40.0).drift(Drift::Walk(1.0)),
    ],
    eviction: &[Eviction::Window(52_000)],
    ..ARTISAN
};

/// Soap boilers rendering lye and tallow.
pub static CREATURE_SOAPMAKER: KindSpec = KindSpec {
    name: "creature_soapmaker",
    label: "soapmakers",
    check_interval: 2450,
    spawn_chance: 0.0025,
    max_count: 8,
    stats: &[
        StatSpec::new("saponification_skill", 20.0, 20.0)
            .drift(Drift::Biased { step: 2.0, bias: 0.5 }),
        StatSpec::new("lye_strength", 20.0, 30.0).drift(Drift::Walk(0.5)),
        StatSpec::new("curing_patience", 15.0, 40.0).drift(Drift::Walk(3.0)),
        StatSpec::new("scenting", 15.0, 25.0).drift(Drift::Walk(3.0)),
    ],
    eviction: &[Eviction::Age { step: 0.5, ceiling: 88.0 }, Eviction::Window(60_000)],
    ..ARTISAN
};

/// Weavers of large pictorial hangings.
pub static CREATURE_TAPESTRY_WEAVER: KindSpec = KindSpec {
    name: "creature_tapestry_weaver",
    label: "tapestry weavers",
    check_interval: 2650,
    spawn_chance: 0.0035,
    max_count: 20,
    stats: &[
        StatSpec::new("tapestry_skill", 10.0, 30.0).drift(Drift::Biased { step: 2.0, bias: 0.5 }),
        StatSpec::new("cartoon_reading", 15.0, 25.0).drift(Drift::Walk(1.5)),
        StatSpec::new("weft_packing", 5.0, 25.0).drift(Drift::Walk(3.0)),
        StatSpec::new("color_sense", 25.0, 40.0).drift(Drift::Walk(1.5)),
    ],
    eviction: &[Eviction::Floor { stat: 0, at: 5.0 }, Eviction::Window(78_000)],
    ..ARTISAN
};

/// Thatchers laying straw and reed roofs.
pub static CREATURE_THATCHER: KindSpec = KindSpec {
    name: "creature_thatcher",
    label: "thatchers",
    check_interval: 1650,
    spawn_chance: 0.0012,
    max_count: 12,
    stats: &[
        StatSpec::new("thatching_skill", 15.0, 25.0).drift(Drift::Biased { step: 1.5, bias: 0.52 }),
        StatSpec::new("reed_grading", 30.0, 40.0).drift(Drift::Walk(0.5)),
        StatSpec::new("pitch_judgement", 5.0, 30.0).drift(Drift::Walk(1.5)),
        StatSpec::new("weatherproofing", 15.0, 40.0),
    ],
    eviction: &[Eviction::Window(86_000)],
    ..ARTISAN
};

/// Make and fit plate harness.
pub static CREATURE_ARMORER: KindSpec = KindSpec {
    name: "creature_armorer",
    label: "armorers",
    check_interval: 2900,
    spawn_chance: 0.003,
    max_count: 25,
    stats: &[
        StatSpec::new("armoring_skill", 15.0, 20.0).drift(Drift::Biased { step: 2.0, bias: 0.5 }),
        StatSpec::new("plate_shaping", 10.0, 25.0),
        StatSpec::new("riveting", 10.0, 40.0).drift(Drift::Walk(2.0)),
        StatSpec::new("fitting", 20.0, 25.0).drift(Drift::Walk(2.0)),
    ],
    eviction: &[Eviction::Age { step: 1.0, ceiling: 97.0 }, Eviction::Window(53_000)],
    ..ARTISAN
};

/// Bow makers.
pub static CREATURE_BOWYER: KindSpec = KindSpec {
    name: "creature_bowyer",
    label: "bowyers",
    check_interval: 1650,
    spawn_chance: 0.0008,
    max_count: 25,
    stats: &[
        StatSpec::new("bowyery_skill", 10.0, 25.0).drift(Drift::Biased { step: 2.0, bias: 0.55 }),
        StatSpec::new("stave_selection", 5.0, 25.0).drift(Drift::Walk(3.0)),
        StatSpec::new("tillering", 25.0, 40.0).drift(Drift::Walk(2.0)),
        StatSpec::new("draw_weight_control", 25.0, 25.0).drift(Drift::Walk(2.0)),
    ],
    eviction: &[Eviction::Floor { stat: 0, at: 3.0 }, Eviction::Window(81_000)],
    ..ARTISAN
};

/// Cordwainers making shoes from new leather.
pub static CREATURE_CORDWAINER: KindSpec = KindSpec {
    name: "creature_cordwainer",
    label: "cordwainers",
    check_interval: 2600,
    spawn_chance: 0.002,
    max_count: 25,
    stats: &[
        StatSpec::new("shoemaking_skill", 5.0, 30.0).drift(Drift::Biased { step: 3.0, bias: 0.52 }),
        StatSpec::new("last_fitting", 10.0, 25.0).drift(Drift::Walk(3.0)),
        StatSpec::new("welt_stitching", 5.0, 30.0).drift(Drift::Walk(0.5)),
        StatSpec::new("comfort", 15.0, 30.0),
    ],
    eviction: &[Eviction::Window(87_000)],
    ..ARTISAN
};

/// Run pot stills for spirits.
pub static CREATURE_DISTILLER: KindSpec = KindSpec {
    name: "creature_distiller",
    label: "distillers",
    check_interval: 1750,
    spawn_chance: 0.0008,
    max_count: 15,
    stats: &[
        StatSpec::new("distilling_skill", 15.0, 25.0).drift(Drift::Biased { step: 3.0, bias: 0.5 }),
        StatSpec::new("cut_judgement", 15.0, 20.0).drift(Drift::Walk(1.5)),
        StatSpec::new("still_temperature", 20.0, 30.0),
        StatSpec::new("aging", 15.0, 25.0).drift(Drift::Walk(1.0)),
    ],
    eviction: &[Eviction::Age { step: 0.5, ceiling: 83.0 }, Eviction::Window(79_000)],
    ..ARTISAN
};

/// Apothecaries compounding remedies.
pub static CREATURE_APOTHECARY: KindSpec = KindSpec {
    name: "creature_apothecary",
    label: "apothecaries",
    check_interval: 1900,
    spawn_chance: 0.0008,
    max_count: 25,
    stats: &[
        StatSpec::new("compounding_skill", 15.0, 20.0)
            .drift(Drift::Biased { step: 2.0, bias: 0.5 }),
        StatSpec::new("herb_knowledge", 15.0, 40.0).drift(Drift::Walk(0.5)),
        StatSpec::new("dosage_accuracy", 20.0, 20.0).drift(Drift::Walk(1.5)),
        StatSpec::new("purity", 10.0, 30.0).drift(Drift::Walk(1.0)),
    ],
    eviction: &[Eviction::Floor { stat: 0, at: 4.0 }, Eviction::Window(64_000)],
    ..ARTISAN
};
