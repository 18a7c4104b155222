//! Diplomatic arrangements between two distinct civilizations.

use crate::kind::{Drift, Eviction, Family, KindSpec, StatSpec};
use crate::stage::Progression;

const ARRANGEMENT: KindSpec = KindSpec {
    name: "",
    label: "",
    family: Family::Diplomatic,
    check_interval: 2000,
    spawn_chance: 0.002,
    max_count: 10,
    stats: &[],
    eviction: &[],
    progression: None,
    tile_effect: None,
};

/// Mutual promises not to attack.
pub static DIPLOMATIC_NON_AGGRESSION: KindSpec = KindSpec {
    name: "diplomatic_non_aggression",
    label: "pacts",
    check_interval: 2000,
    spawn_chance: 0.002,
    max_count: 20,
    stats: &[
        StatSpec::new("trust", 40.0, 30.0).drift(Drift::Biased { step: 2.0, bias: 0.52 }),
        StatSpec::new("compliance", 50.0, 30.0).drift(Drift::Walk(1.5)),
        StatSpec::new("tension", 10.0, 20.0).drift(Drift::Walk(2.0)),
    ],
    eviction: &[Eviction::Floor { stat: 0, at: 4.0 }, Eviction::Window(75_000)],
    ..ARRANGEMENT
};

/// Former rivals slowly normalizing relations.
pub static DIPLOMATIC_RAPPROCHEMENT: KindSpec = KindSpec {
    name: "diplomatic_rapprochement",
    label: "rapprochements",
    check_interval: 1800,
    spawn_chance: 0.0012,
    max_count: 8,
    stats: &[
        StatSpec::new("goodwill", 20.0, 20.0).drift(Drift::Biased { step: 6.0, bias: 0.3 }),
        StatSpec::new("dialogue_frequency", 10.0, 30.0).drift(Drift::Walk(2.0)),
        StatSpec::new("grievance", 30.0, 40.0).drift(Drift::Biased { step: 2.0, bias: 0.55 }),
    ],
    eviction: &[Eviction::Concluded, Eviction::Window(90_000)],
    progression: Some(Progression::Rapprochement {
        stat: 0,
        dialogue: 25.0,
        warming: 50.0,
        normalized: 80.0,
    }),
    ..ARRANGEMENT
};

/// A third party interceding in a dispute.
pub static DIPLOMATIC_INTERCESSION: KindSpec = KindSpec {
    name: "diplomatic_intercession",
    label: "intercessions",
    check_interval: 2200,
    spawn_chance: 0.001,
    max_count: 6,
    stats: &[
        StatSpec::new("persuasion", 35.0, 20.0).drift(Drift::Walk(6.0)),
        StatSpec::new("mediator_standing", 40.0, 40.0).drift(Drift::Walk(1.0)),
        StatSpec::new("hostility", 20.0, 40.0).drift(Drift::Walk(3.0)),
    ],
    eviction: &[Eviction::Concluded, Eviction::Window(70_000)],
    progression: Some(Progression::Intercession {
        stat: 0,
        success: 75.0,
        rejection: 10.0,
        patience: 60_000,
    }),
    ..ARRANGEMENT
};

/// Tariff concessions between two realms.
pub static DIPLOMATIC_TRADE_AGREEMENT: KindSpec = KindSpec {
    name: "diplomatic_trade_agreement",
    label: "trade agreements",
    check_interval: 1625,
    spawn_chance: 0.001,
    max_count: 10,
    stats: &[
        StatSpec::new("volume", 5.0, 20.0).drift(Drift::Biased { step: 2.0, bias: 0.5 }),
        StatSpec::new("fairness", 15.0, 30.0).drift(Drift::Walk(1.0)),
        StatSpec::new("dependency", 10.0, 20.0).drift(Drift::Walk(2.0)),
    ],
    eviction: &[Eviction::Floor { stat: 0, at: 4.0 }, Eviction::Window(81_000)],
    ..ARRANGEMENT
};

/// Noble hostages held as surety for good conduct.
pub static DIPLOMATIC_HOSTAGE_EXCHANGE: KindSpec = KindSpec {
    name: "diplomatic_hostage_exchange",
    label: "hostage exchanges",
    check_interval: 1725,
    spawn_chance: 0.0015,
    max_count: 25,
    stats: &[
        StatSpec::new("assurance", 5.0, 25.0).drift(Drift::Biased { step: 1.5, bias: 0.55 }),
        StatSpec::new("hostage_welfare", 15.0, 40.0).drift(Drift::Walk(0.5)),
        StatSpec::new("suspicion", 20.0, 30.0),
    ],
    eviction: &[Eviction::Window(84_000)],
    ..ARRANGEMENT
};

/// Dynastic marriages binding two houses.
pub static DIPLOMATIC_MARRIAGE_ALLIANCE: KindSpec = KindSpec {
    name: "diplomatic_marriage_alliance",
    label: "marriage alliances",
    check_interval: 3075,
    spawn_chance: 0.0012,
    max_count: 20,
    stats: &[
        StatSpec::new("bond_strength", 10.0, 25.0).drift(Drift::Biased { step: 1.5, bias: 0.55 }),
        StatSpec::new("heir_prospects", 20.0, 20.0).drift(Drift::Walk(1.5)),
        StatSpec::new("court_favor", 30.0, 40.0).drift(Drift::Walk(2.0)),
    ],
    eviction: &[Eviction::Floor { stat: 0, at: 4.0 }, Eviction::Window(73_000)],
    ..ARRANGEMENT
};

/// A weaker realm paying tribute to a stronger one.
pub static DIPLOMATIC_TRIBUTE: KindSpec = KindSpec {
    name: "diplomatic_tribute",
    label: "tribute arrangements",
    check_interval: 2850,
    spawn_chance: 0.0012,
    max_count: 8,
    stats: &[
        StatSpec::new("payment_regularity", 10.0, 20.0)
            .drift(Drift::Biased { step: 2.5, bias: 0.5 }),
        StatSpec::new("resentment", 5.0, 20.0).drift(Drift::Walk(3.0)),
        StatSpec::new("protection_value", 10.0, 40.0),
    ],
    eviction: &[Eviction::Floor { stat: 0, at: 5.0 }, Eviction::Window(51_000)],
    ..ARRANGEMENT
};

/// Permanent envoys resident at a foreign court.
pub static DIPLOMATIC_EMBASSY: KindSpec = KindSpec {
    name: "diplomatic_embassy",
    label: "embassies",
    check_interval: 3000,
    spawn_chance: 0.0008,
    max_count: 10,
    stats: &[
        StatSpec::new("access", 5.0, 20.0).drift(Drift::Biased { step: 2.5, bias: 0.52 }),
        StatSpec::new("prestige", 15.0, 25.0).drift(Drift::Walk(1.5)),
        StatSpec::new("intelligence_yield", 20.0, 20.0).drift(Drift::Walk(1.5)),
    ],
    eviction: &[Eviction::Window(93_000)],
    ..ARRANGEMENT
};

/// An agreed line between two realms.
pub static DIPLOMATIC_BORDER_TREATY: KindSpec = KindSpec {
    name: "diplomatic_border_treaty",
    label: "border treaties",
    check_interval: 3075,
    spawn_chance: 0.0015,
    max_count: 12,
    stats: &[
        StatSpec::new("demarcation_clarity", 15.0, 20.0)
            .drift(Drift::Biased { step: 1.5, bias: 0.55 }),
        StatSpec::new("incident_rate", 10.0, 30.0).drift(Drift::Walk(0.5)),
        StatSpec::new("enforcement", 10.0, 25.0).drift(Drift::Walk(0.5)),
    ],
    eviction: &[Eviction::Floor { stat: 0, at: 4.0 }, Eviction::Window(97_000)],
    ..ARRANGEMENT
};

/// Fragile halts to open fighting.
pub static DIPLOMATIC_CEASEFIRE: KindSpec = KindSpec {
    name: "diplomatic_ceasefire",
    label: "ceasefires",
    check_interval: 1600,
    spawn_chance: 0.0008,
    max_count: 12,
    stats: &[
        StatSpec::new("adherence", 20.0, 30.0).drift(Drift::Biased { step: 1.5, bias: 0.52 }),
        StatSpec::new("violations", 5.0, 40.0).drift(Drift::Walk(1.0)),
        StatSpec::new("war_weariness", 25.0, 20.0),
    ],
    eviction: &[Eviction::Floor { stat: 0, at: 5.0 }, Eviction::Window(68_000)],
    ..ARRANGEMENT
};

/// Fugitives returned across the border.
pub static DIPLOMATIC_EXTRADITION: KindSpec = KindSpec {
    name: "diplomatic_extradition",
    label: "extradition treaties",
    check_interval: 2325,
    spawn_chance: 0.0012,
    max_count: 15,
    stats: &[
        StatSpec::new("cooperation", 10.0, 25.0).drift(Drift::Biased { step: 3.0, bias: 0.55 }),
        StatSpec::new("case_backlog", 20.0, 25.0).drift(Drift::Walk(1.0)),
        StatSpec::new("legal_alignment", 15.0, 30.0).drift(Drift::Walk(2.0)),
    ],
    eviction: &[Eviction::Window(50_000)],
    ..ARRANGEMENT
};

/// Shared access to fishing grounds.
pub static DIPLOMATIC_FISHING_RIGHTS: KindSpec = KindSpec {
    name: "diplomatic_fishing_rights",
    label: "fishing rights",
    check_interval: 2075,
    spawn_chance: 0.0012,
    max_count: 20,
    stats: &[
        StatSpec::new("catch_share", 15.0, 25.0).drift(Drift::Biased { step: 2.5, bias: 0.55 }),
        StatSpec::new("stock_health", 5.0, 25.0).drift(Drift::Walk(3.0)),
        StatSpec::new("disputes", 20.0, 25.0).drift(Drift::Walk(1.0)),
    ],
    eviction: &[Eviction::Floor { stat: 0, at: 4.0 }, Eviction::Window(77_000)],
    ..ARRANGEMENT
};

/// Agreements over shared rivers.
pub static DIPLOMATIC_WATER_SHARING: KindSpec = KindSpec {
    name: "diplomatic_water_sharing",
    label: "water sharing accords",
    check_interval: 3250,
    spawn_chance: 0.0015,
    max_count: 10,
    stats: &[
        StatSpec::new("allocation_fairness", 10.0, 25.0)
            .drift(Drift::Biased { step: 1.5, bias: 0.55 }),
        StatSpec::new("flow_reliability", 15.0, 20.0),
        StatSpec::new("drought_stress", 20.0, 20.0).drift(Drift::Walk(1.5)),
    ],
    eviction: &[Eviction::Floor { stat: 0, at: 3.0 }, Eviction::Window(82_000)],
    ..ARRANGEMENT
};

/// Caps on standing armies and fleets.
pub static DIPLOMATIC_ARMS_LIMITATION: KindSpec = KindSpec {
    name: "diplomatic_arms_limitation",
    label: "arms limitations",
    check_interval: 2900,
    spawn_chance: 0.002,
    max_count: 10,
    stats: &[
        StatSpec::new("verification", 10.0, 20.0).drift(Drift::Biased { step: 2.5, bias: 0.52 }),
        StatSpec::new("compliance", 5.0, 40.0),
        StatSpec::new("arsenal_pressure", 5.0, 20.0).drift(Drift::Walk(0.5)),
    ],
    eviction: &[Eviction::Window(77_000)],
    ..ARRANGEMENT
};

/// Travelling troupes, scholars and artists.
pub static DIPLOMATIC_CULTURAL_EXCHANGE: KindSpec = KindSpec {
    name: "diplomatic_cultural_exchange",
    label: "cultural exchanges",
    check_interval: 1525,
    spawn_chance: 0.002,
    max_count: 20,
    stats: &[
        StatSpec::new("reach", 20.0, 20.0).drift(Drift::Biased { step: 3.0, bias: 0.55 }),
        StatSpec::new("mutual_regard", 30.0, 20.0).drift(Drift::Walk(1.5)),
        StatSpec::new("novelty", 10.0, 30.0).drift(Drift::Walk(1.0)),
    ],
    eviction: &[Eviction::Floor { stat: 0, at: 4.0 }, Eviction::Window(68_000)],
    ..ARRANGEMENT
};

/// Scholars sent to study abroad.
pub static DIPLOMATIC_STUDENT_EXCHANGE: KindSpec = KindSpec {
    name: "diplomatic_student_exchange",
    label: "student exchanges",
    check_interval: 2600,
    spawn_chance: 0.0007,
    max_count: 15,
    stats: &[
        StatSpec::new("enrolment", 15.0, 30.0).drift(Drift::Biased { step: 3.0, bias: 0.55 }),
        StatSpec::new("satisfaction", 20.0, 30.0).drift(Drift::Walk(1.5)),
        StatSpec::new("brain_drain", 25.0, 20.0).drift(Drift::Walk(2.0)),
    ],
    eviction: &[Eviction::Floor { stat: 0, at: 5.0 }, Eviction::Window(56_000)],
    ..ARRANGEMENT
};

/// Each party promises to come to the other's aid.
pub static DIPLOMATIC_MUTUAL_DEFENSE: KindSpec = KindSpec {
    name: "diplomatic_mutual_defense",
    label: "mutual defense pacts",
    check_interval: 3150,
    spawn_chance: 0.0008,
    max_count: 25,
    stats: &[
        StatSpec::new("commitment", 5.0, 25.0).drift(Drift::Biased { step: 2.0, bias: 0.52 }),
        StatSpec::new("readiness", 20.0, 30.0).drift(Drift::Walk(3.0)),
        StatSpec::new("entanglement_risk", 20.0, 40.0).drift(Drift::Walk(1.5)),
    ],
    eviction: &[Eviction::Window(70_000)],
    ..ARRANGEMENT
};

/// A resident envoy at a foreign court.
pub static DIPLOMATIC_ENVOY_MISSION: KindSpec = KindSpec {
    name: "diplomatic_envoy_mission",
    label: "envoy missions",
    check_interval: 2325,
    spawn_chance: 0.003,
    max_count: 10,
    stats: &[
        StatSpec::new("reception", 10.0, 25.0).drift(Drift::Biased { step: 2.0, bias: 0.5 }),
        StatSpec::new("progress", 20.0, 25.0).drift(Drift::Walk(1.0)),
        StatSpec::new("fatigue", 30.0, 30.0).drift(Drift::Walk(1.5)),
    ],
    eviction: &[Eviction::Floor { stat: 0, at: 4.0 }, Eviction::Window(77_000)],
    ..ARRANGEMENT
};

/// Meetings of rulers in person.
pub static DIPLOMATIC_SUMMIT: KindSpec = KindSpec {
    name: "diplomatic_summit",
    label: "summits",
    check_interval: 1950,
    spawn_chance: 0.002,
    max_count: 15,
    stats: &[
        StatSpec::new("rapport", 10.0, 20.0).drift(Drift::Biased { step: 2.0, bias: 0.5 }),
        StatSpec::new("agenda_progress", 20.0, 25.0).drift(Drift::Walk(2.0)),
        StatSpec::new("spectacle", 20.0, 20.0).drift(Drift::Walk(1.0)),
    ],
    eviction: &[Eviction::Floor { stat: 0, at: 4.0 }, Eviction::Window(50_000)],
    ..ARRANGEMENT
};

/// A dispute put before an arbiter.
pub static DIPLOMATIC_ARBITRATION: KindSpec = KindSpec {
    name: "diplomatic_arbitration",
    label: "arbitrations",
    check_interval: 3200,
    spawn_chance: 0.001,
    max_count: 20,
    stats: &[
        StatSpec::new("arbiter_credibility", 5.0, 20.0)
            .drift(Drift::Biased { step: 2.0, bias: 0.52 }),
        StatSpec::new("evidence_weight", 15.0, 20.0).drift(Drift::Walk(2.0)),
        StatSpec::new("acceptance", 15.0, 20.0).drift(Drift::Walk(3.0)),
    ],
    eviction: &[Eviction::Window(53_000)],
    ..ARRANGEMENT
};

/// Economic pressure by one realm on another.
pub static DIPLOMATIC_SANCTION: KindSpec = KindSpec {
    name: "diplomatic_sanction",
    label: "sanctions",
    check_interval: 2825,
    spawn_chance: 0.0015,
    max_count: 25,
    stats: &[
        StatSpec::new("severity", 5.0, 30.0).drift(Drift::Biased { step: 1.5, bias: 0.5 }),
        StatSpec::new("evasion", 10.0, 25.0).drift(Drift::Walk(2.0)),
        StatSpec::new("domestic_cost", 25.0, 30.0).drift(Drift::Walk(1.5)),
    ],
    eviction: &[Eviction::Floor { stat: 0, at: 4.0 }, Eviction::Window(56_000)],
    ..ARRANGEMENT
};

/// One realm refusing trade with another.
pub static DIPLOMATIC_EMBARGO: KindSpec = KindSpec {
    name: "diplomatic_embargo",
    label: "embargoes",
    check_interval: 2775,
    spawn_chance: 0.0007,
    max_count: 12,
    stats: &[
        StatSpec::new("tightness", 15.0, 20.0).drift(Drift::Biased { step: 2.5, bias: 0.52 }),
        StatSpec::new("smuggling", 20.0, 20.0).drift(Drift::Walk(0.5)),
        StatSpec::new("hardship", 20.0, 25.0),
    ],
    eviction: &[Eviction::Floor { stat: 0, at: 3.0 }, Eviction::Window(89_000)],
    ..ARRANGEMENT
};

/// Territories ruled jointly.
pub static DIPLOMATIC_CONDOMINIUM: KindSpec = KindSpec {
    name: "diplomatic_condominium",
    label: "condominiums",
    check_interval: 2550,
    spawn_chance: 0.0012,
    max_count: 15,
    stats: &[
        StatSpec::new("shared_governance", 10.0, 20.0)
            .drift(Drift::Biased { step: 1.5, bias: 0.55 }),
        StatSpec::new("friction", 5.0, 40.0).drift(Drift::Walk(2.0)),
        StatSpec::new("local_consent", 5.0, 25.0).drift(Drift::Walk(0.5)),
    ],
    eviction: &[Eviction::Window(90_000)],
    ..ARRANGEMENT
};

/// A demilitarized strip between rivals.
pub static DIPLOMATIC_BUFFER_ZONE: KindSpec = KindSpec {
    name: "diplomatic_buffer_zone",
    label: "buffer zones",
    check_interval: 2700,
    spawn_chance: 0.0018,
    max_count: 8,
    stats: &[
        StatSpec::new("width_respected", 5.0, 25.0).drift(Drift::Biased { step: 2.0, bias: 0.5 }),
        StatSpec::new("patrol_density", 20.0, 20.0).drift(Drift::Walk(3.0)),
        StatSpec::new("incursions", 25.0, 30.0).drift(Drift::Walk(2.0)),
    ],
    eviction: &[Eviction::Floor { stat: 0, at: 4.0 }, Eviction::Window(66_000)],
    ..ARRANGEMENT
};

/// Guaranteed transit for travellers and caravans.
pub static DIPLOMATIC_SAFE_PASSAGE: KindSpec = KindSpec {
    name: "diplomatic_safe_passage",
    label: "safe passage guarantees",
    check_interval: 2900,
    spawn_chance: 0.001,
    max_count: 12,
    stats: &[
        StatSpec::new("route_security", 5.0, 30.0).drift(Drift::Biased { step: 1.5, bias: 0.5 }),
        StatSpec::new("toll_fairness", 10.0, 40.0),
        StatSpec::new("incidents", 20.0, 25.0).drift(Drift::Walk(2.0)),
    ],
    eviction: &[Eviction::Floor { stat: 0, at: 4.0 }, Eviction::Window(65_000)],
    ..ARRANGEMENT
};

/// Shelter extended to exiles of the other party.
pub static DIPLOMATIC_ASYLUM: KindSpec = KindSpec {
    name: "diplomatic_asylum",
    label: "asylum arrangements",
    check_interval: 2125,
    spawn_chance: 0.003,
    max_count: 25,
    stats: &[
        StatSpec::new("capacity", 20.0, 30.0).drift(Drift::Biased { step: 3.0, bias: 0.5 }),
        StatSpec::new("goodwill", 30.0, 40.0).drift(Drift::Walk(2.0)),
        StatSpec::new("diplomatic_cost", 30.0, 25.0).drift(Drift::Walk(1.0)),
    ],
    eviction: &[Eviction::Window(55_000)],
    ..ARRANGEMENT
};

/// Captives traded after a war.
pub static DIPLOMATIC_PRISONER_EXCHANGE: KindSpec = KindSpec {
    name: "diplomatic_prisoner_exchange",
    label: "prisoner exchanges",
    check_interval: 2800,
    spawn_chance: 0.001,
    max_count: 15,
    stats: &[
        StatSpec::new("fairness", 5.0, 30.0).drift(Drift::Biased { step: 2.5, bias: 0.55 }),
        StatSpec::new("logistics", 25.0, 25.0),
        StatSpec::new("good_faith", 30.0, 30.0).drift(Drift::Walk(1.0)),
    ],
    eviction: &[Eviction::Floor { stat: 0, at: 4.0 }, Eviction::Window(88_000)],
    ..ARRANGEMENT
};

/// War indemnities paid in instalments.
pub static DIPLOMATIC_REPARATIONS: KindSpec = KindSpec {
    name: "diplomatic_reparations",
    label: "reparations",
    check_interval: 3225,
    spawn_chance: 0.004,
    max_count: 25,
    stats: &[
        StatSpec::new("payment_progress", 15.0, 30.0).drift(Drift::Biased { step: 3.0, bias: 0.5 }),
        StatSpec::new("bitterness", 20.0, 40.0).drift(Drift::Walk(0.5)),
        StatSpec::new("economic_strain", 15.0, 20.0).drift(Drift::Walk(1.0)),
    ],
    eviction: &[Eviction::Floor { stat: 0, at: 4.0 }, Eviction::Window(61_000)],
    ..ARRANGEMENT
};

/// A shared trading or building enterprise.
pub static DIPLOMATIC_JOINT_VENTURE: KindSpec = KindSpec {
    name: "diplomatic_joint_venture",
    label: "joint ventures",
    check_interval: 2200,
    spawn_chance: 0.0012,
    max_count: 12,
    stats: &[
        StatSpec::new("profitability", 5.0, 20.0).drift(Drift::Biased { step: 2.0, bias: 0.5 }),
        StatSpec::new("trust", 5.0, 20.0).drift(Drift::Walk(2.0)),
        StatSpec::new("governance_friction", 15.0, 30.0).drift(Drift::Walk(2.0)),
    ],
    eviction: &[Eviction::Window(77_000)],
    ..ARRANGEMENT
};

/// Shared coinage and mint standards.
pub static DIPLOMATIC_CURRENCY_UNION: KindSpec = KindSpec {
    name: "diplomatic_currency_union",
    label: "currency unions",
    check_interval: 3150,
    spawn_chance: 0.004,
    max_count: 25,
    stats: &[
        StatSpec::new("stability", 5.0, 30.0).drift(Drift::Biased { step: 2.0, bias: 0.52 }),
        StatSpec::new("debasement", 25.0, 40.0).drift(Drift::Walk(0.5)),
        StatSpec::new("convergence", 15.0, 20.0).drift(Drift::Walk(3.0)),
    ],
    eviction: &[Eviction::Floor { stat: 0, at: 4.0 }, Eviction::Window(50_000)],
    ..ARRANGEMENT
};

/// Common tariffs on goods crossing outer borders.
pub static DIPLOMATIC_CUSTOMS_UNION: KindSpec = KindSpec {
    name: "diplomatic_customs_union",
    label: "customs unions",
    check_interval: 3325,
    spawn_chance: 0.0018,
    max_count: 25,
    stats: &[
        StatSpec::new("integration", 15.0, 20.0).drift(Drift::Biased { step: 2.0, bias: 0.5 }),
        StatSpec::new("revenue_share", 10.0, 30.0),
        StatSpec::new("smuggling", 15.0, 25.0).drift(Drift::Walk(1.5)),
    ],
    eviction: &[Eviction::Floor { stat: 0, at: 4.0 }, Eviction::Window(88_000)],
    ..ARRANGEMENT
};

/// Couriers carrying each other's mail.
pub static DIPLOMATIC_POSTAL_UNION: KindSpec = KindSpec {
    name: "diplomatic_postal_union",
    label: "postal unions",
    check_interval: 2175,
    spawn_chance: 0.0007,
    max_count: 20,
    stats: &[
        StatSpec::new("delivery_rate", 10.0, 20.0).drift(Drift::Biased { step: 1.5, bias: 0.55 }),
        StatSpec::new("courier_safety", 5.0, 30.0).drift(Drift::Walk(2.0)),
        StatSpec::new("cost_sharing", 30.0, 20.0).drift(Drift::Walk(2.0)),
    ],
    eviction: &[Eviction::Window(61_000)],
    ..ARRANGEMENT
};

/// Free passage on rivers and straits.
pub static DIPLOMATIC_NAVIGATION_TREATY: KindSpec = KindSpec {
    name: "diplomatic_navigation_treaty",
    label: "navigation treaties",
    check_interval: 2525,
    spawn_chance: 0.001,
    max_count: 10,
    stats: &[
        StatSpec::new("openness", 5.0, 20.0).drift(Drift::Biased { step: 3.0, bias: 0.5 }),
        StatSpec::new("pilotage", 10.0, 25.0).drift(Drift::Walk(0.5)),
        StatSpec::new("collisions", 15.0, 20.0).drift(Drift::Walk(3.0)),
    ],
    eviction: &[Eviction::Floor { stat: 0, at: 4.0 }, Eviction::Window(83_000)],
    ..ARRANGEMENT
};

/// Mining rights leased to a foreign realm.
pub static DIPLOMATIC_MINING_CONCESSION: KindSpec = KindSpec {
    name: "diplomatic_mining_concession",
    label: "mining concessions",
    check_interval: 2825,
    spawn_chance: 0.0025,
    max_count: 12,
    stats: &[
        StatSpec::new("output", 5.0, 30.0).drift(Drift::Biased { step: 1.5, bias: 0.5 }),
        StatSpec::new("royalty_fairness", 15.0, 40.0).drift(Drift::Walk(2.0)),
        StatSpec::new("local_unrest", 30.0, 25.0).drift(Drift::Walk(2.0)),
    ],
    eviction: &[Eviction::Floor { stat: 0, at: 5.0 }, Eviction::Window(78_000)],
    ..ARRANGEMENT
};

/// Famine relief commitments.
pub static DIPLOMATIC_GRAIN_ACCORD: KindSpec = KindSpec {
    name: "diplomatic_grain_accord",
    label: "grain accords",
    check_interval: 2725,
    spawn_chance: 0.003,
    max_count: 20,
    stats: &[
        StatSpec::new("reserve_level", 20.0, 20.0).drift(Drift::Biased { step: 3.0, bias: 0.52 }),
        StatSpec::new("delivery_reliability", 15.0, 40.0).drift(Drift::Walk(0.5)),
        StatSpec::new("hoarding", 25.0, 25.0),
    ],
    eviction: &[Eviction::Window(87_000)],
    ..ARRANGEMENT
};

/// Privateers licensed against a common enemy.
pub static DIPLOMATIC_LETTERS_OF_MARQUE: KindSpec = KindSpec {
    name: "diplomatic_letters_of_marque",
    label: "letters of marque",
    check_interval: 1875,
    spawn_chance: 0.0018,
    max_count: 8,
    stats: &[
        StatSpec::new("privateer_activity", 5.0, 25.0)
            .drift(Drift::Biased { step: 2.5, bias: 0.5 }),
        StatSpec::new("restraint", 5.0, 40.0).drift(Drift::Walk(1.0)),
        StatSpec::new("plunder", 5.0, 40.0),
    ],
    eviction: &[Eviction::Floor { stat: 0, at: 4.0 }, Eviction::Window(98_000)],
    ..ARRANGEMENT
};

/// A pledge to stay out of a war.
pub static DIPLOMATIC_NEUTRALITY: KindSpec = KindSpec {
    name: "diplomatic_neutrality",
    label: "neutrality declarations",
    check_interval: 1500,
    spawn_chance: 0.0012,
    max_count: 25,
    stats: &[
        StatSpec::new("credibility", 5.0, 20.0).drift(Drift::Biased { step: 1.5, bias: 0.52 }),
        StatSpec::new("pressure", 20.0, 30.0).drift(Drift::Walk(0.5)),
        StatSpec::new("profiteering", 30.0, 40.0).drift(Drift::Walk(2.0)),
    ],
    eviction: &[Eviction::Floor { stat: 0, at: 5.0 }, Eviction::Window(88_000)],
    ..ARRANGEMENT
};

/// A great power guaranteeing a lesser realm's borders.
pub static DIPLOMATIC_GUARANTEE: KindSpec = KindSpec {
    name: "diplomatic_guarantee",
    label: "guarantees",
    check_interval: 1650,
    spawn_chance: 0.0018,
    max_count: 25,
    stats: &[
        StatSpec::new("credibility", 10.0, 25.0).drift(Drift::Biased { step: 3.0, bias: 0.52 }),
        StatSpec::new("deterrence", 10.0, 20.0).drift(Drift::Walk(1.0)),
        StatSpec::new("cost", 20.0, 20.0),
    ],
    eviction: &[Eviction::Window(98_000)],
    ..ARRANGEMENT
};

/// A realm under another's protection.
pub static DIPLOMATIC_PROTECTORATE: KindSpec = KindSpec {
    name: "diplomatic_protectorate",
    label: "protectorates",
    check_interval: 2650,
    spawn_chance: 0.002,
    max_count: 12,
    stats: &[
        StatSpec::new("autonomy", 20.0, 25.0).drift(Drift::Biased { step: 2.5, bias: 0.55 }),
        StatSpec::new("protection", 20.0, 40.0).drift(Drift::Walk(1.5)),
        StatSpec::new("resentment", 30.0, 40.0).drift(Drift::Walk(1.0)),
    ],
    eviction: &[Eviction::Floor { stat: 0, at: 4.0 }, Eviction::Window(79_000)],
    ..ARRANGEMENT
};

/// Feudal subordination of one realm to another.
pub static DIPLOMATIC_VASSALAGE: KindSpec = KindSpec {
    name: "diplomatic_vassalage",
    label: "vassalages",
    check_interval: 2975,
    spawn_chance: 0.002,
    max_count: 12,
    stats: &[
        StatSpec::new("loyalty", 10.0, 30.0).drift(Drift::Biased { step: 2.0, bias: 0.55 }),
        StatSpec::new("levy_contribution", 15.0, 25.0).drift(Drift::Walk(0.5)),
        StatSpec::new("ambition", 15.0, 30.0).drift(Drift::Walk(1.5)),
    ],
    eviction: &[Eviction::Floor { stat: 0, at: 4.0 }, Eviction::Window(60_000)],
    ..ARRANGEMENT
};

/// A state visit between courts.
pub static DIPLOMATIC_ROYAL_VISIT: KindSpec = KindSpec {
    name: "diplomatic_royal_visit",
    label: "royal visits",
    check_interval: 2875,
    spawn_chance: 0.0008,
    max_count: 25,
    stats: &[
        StatSpec::new("pageantry", 20.0, 20.0).drift(Drift::Biased { step: 1.5, bias: 0.55 }),
        StatSpec::new("goodwill", 5.0, 20.0).drift(Drift::Walk(1.0)),
        StatSpec::new("security_risk", 20.0, 25.0).drift(Drift::Walk(1.5)),
    ],
    eviction: &[Eviction::Window(66_000)],
    ..ARRANGEMENT
};

/// Formal exchanges of precious gifts.
pub static DIPLOMATIC_GIFT_EXCHANGE: KindSpec = KindSpec {
    name: "diplomatic_gift_exchange",
    label: "gift exchanges",
    check_interval: 2650,
    spawn_chance: 0.002,
    max_count: 20,
    stats: &[
        StatSpec::new("generosity", 5.0, 30.0).drift(Drift::Biased { step: 2.5, bias: 0.52 }),
        StatSpec::new("reciprocity", 25.0, 25.0).drift(Drift::Walk(0.5)),
        StatSpec::new("obligation", 30.0, 40.0).drift(Drift::Walk(0.5)),
    ],
    eviction: &[Eviction::Floor { stat: 0, at: 4.0 }, Eviction::Window(58_000)],
    ..ARRANGEMENT
};

/// Talks brokered by a go-between.
pub static DIPLOMATIC_MEDIATION: KindSpec = KindSpec {
    name: "diplomatic_mediation",
    label: "mediations",
    check_interval: 2050,
    spawn_chance: 0.001,
    max_count: 20,
    stats: &[
        StatSpec::new("neutrality", 20.0, 20.0).drift(Drift::Biased { step: 2.0, bias: 0.52 }),
        StatSpec::new("progress", 20.0, 40.0),
        StatSpec::new("patience", 30.0, 40.0).drift(Drift::Walk(1.5)),
    ],
    eviction: &[Eviction::Floor { stat: 0, at: 4.0 }, Eviction::Window(50_000)],
    ..ARRANGEMENT
};

/// Shared observatories and academies.
pub static DIPLOMATIC_SCIENCE_ACCORD: KindSpec = KindSpec {
    name: "diplomatic_science_accord",
    label: "science accords",
    check_interval: 1825,
    spawn_chance: 0.0035,
    max_count: 20,
    stats: &[
        StatSpec::new("collaboration", 5.0, 20.0).drift(Drift::Biased { step: 3.0, bias: 0.52 }),
        StatSpec::new("discovery_rate", 25.0, 40.0).drift(Drift::Walk(2.0)),
        StatSpec::new("secrecy", 15.0, 30.0).drift(Drift::Walk(1.0)),
    ],
    eviction: &[Eviction::Window(50_000)],
    ..ARRANGEMENT
};

/// Access to holy sites across the border.
pub static DIPLOMATIC_PILGRIMAGE_RIGHT: KindSpec = KindSpec {
    name: "diplomatic_pilgrimage_right",
    label: "pilgrimage rights",
    check_interval: 1625,
    spawn_chance: 0.004,
    max_count: 12,
    stats: &[
        StatSpec::new("access", 20.0, 25.0).drift(Drift::Biased { step: 1.5, bias: 0.52 }),
        StatSpec::new("pilgrim_safety", 30.0, 25.0).drift(Drift::Walk(1.0)),
        StatSpec::new("sectarian_tension", 25.0, 25.0).drift(Drift::Walk(1.5)),
    ],
    eviction: &[Eviction::Floor { stat: 0, at: 4.0 }, Eviction::Window(83_000)],
    ..ARRANGEMENT
};
