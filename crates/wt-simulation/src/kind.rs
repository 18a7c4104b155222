//! Kind specifications: the per-kind configuration a [`Manager`] runs on.
//!
//! A kind is pure data. Its record layout is the list of [`StatSpec`]s, its
//! cadence is `check_interval` / `spawn_chance` / `max_count`, and the rest
//! of the lifecycle is picked from a small set of rules. Every catalog entry
//! is one `static KindSpec`.
//!
//! [`Manager`]: crate::manager::Manager

use rand::Rng;
use wt_core::TileType;

use crate::error::{SimError, SimResult};
use crate::stage::Progression;

/// How a stat moves on each activation. The result is always clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Drift {
    /// Never changes after spawn.
    Fixed,
    /// Symmetric random walk: `+= (r - 0.5) * step`.
    Walk(f64),
    /// Biased random walk: `+= (r - bias) * step`. A bias above 0.5 trends down.
    Biased {
        /// Size of the largest possible move.
        step: f64,
        /// Centre of the draw.
        bias: f64,
    },
    /// Deterministic growth: `+= amount`.
    Grow(f64),
    /// Deterministic decay: `-= amount`.
    Decay(f64),
    /// Sinusoidal swing: `+= sin(tick / period) * amplitude`.
    Oscillate {
        /// Largest move per activation.
        amplitude: f64,
        /// Ticks per radian.
        period: f64,
    },
}

impl Drift {
    /// Unclamped value after one activation at `tick`.
    pub fn apply<R: Rng + ?Sized>(self, value: f64, rng: &mut R, tick: u64) -> f64 {
        match self {
            Self::Fixed => value,
            Self::Walk(step) => value + (rng.random::<f64>() - 0.5) * step,
            Self::Biased { step, bias } => value + (rng.random::<f64>() - bias) * step,
            Self::Grow(amount) => value + amount,
            Self::Decay(amount) => value - amount,
            Self::Oscillate { amplitude, period } => {
                value + (tick as f64 / period).sin() * amplitude
            }
        }
    }
}

/// One numeric field of a record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatSpec {
    /// Field name, `snake_case`.
    pub name: &'static str,
    /// Lowest spawn value.
    pub base: f64,
    /// Spawn values are drawn from `base .. base + spread`.
    pub spread: f64,
    /// Lower clamp bound.
    pub min: f64,
    /// Upper clamp bound.
    pub max: f64,
    /// Per-activation movement.
    pub drift: Drift,
}

impl StatSpec {
    /// A stat bounded to `0..=100` that never drifts.
    pub const fn new(name: &'static str, base: f64, spread: f64) -> Self {
        Self {
            name,
            base,
            spread,
            min: 0.0,
            max: 100.0,
            drift: Drift::Fixed,
        }
    }

    /// Replace the clamp range.
    pub const fn range(mut self, min: f64, max: f64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Replace the drift rule.
    pub const fn drift(mut self, drift: Drift) -> Self {
        self.drift = drift;
        self
    }

    /// Clamp into `min..=max`.
    pub fn clamp(&self, value: f64) -> f64 {
        value.min(self.max).max(self.min)
    }

    /// Draw a spawn value.
    pub fn initial<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.clamp(self.base + rng.random::<f64>() * self.spread)
    }

    /// Value after one activation, clamped.
    pub fn step<R: Rng + ?Sized>(&self, value: f64, rng: &mut R, tick: u64) -> f64 {
        self.clamp(self.drift.apply(value, rng, tick))
    }
}

/// Extra condition a creature must meet to be picked as a spawn candidate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CandidateFilter {
    /// Any creature.
    Any,
    /// Creatures at least this many years old.
    MinAge(f64),
}

/// Where a kind's records come from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Family {
    /// Records anchored to one creature from the entity store.
    Creature {
        /// Candidate filter.
        filter: CandidateFilter,
        /// Remember the first stat per creature across records.
        skill_memory: bool,
    },
    /// Records anchored to a pair of distinct civilizations.
    Diplomatic,
    /// Records anchored to a tile whose terrain is in `tiles`.
    Terrain {
        /// Candidate positions tried per activation (1 to 3).
        attempts: u32,
        /// Terrain a record may appear on.
        tiles: &'static [TileType],
    },
}

impl Family {
    /// Short family label used for filtering.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Creature { .. } => "creature",
            Self::Diplomatic => "diplomatic",
            Self::Terrain { .. } => "terrain",
        }
    }
}

/// A rule that removes records. Any matching rule evicts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Eviction {
    /// `stats[stat] <= at`.
    Floor {
        /// Index of the vitality stat.
        stat: usize,
        /// Floor value.
        at: f64,
    },
    /// `tick - record.tick > window`.
    Window(u64),
    /// `record.age > ceiling`, where age grows by `step` per activation.
    Age {
        /// Age gained per activation.
        step: f64,
        /// Age at which the record is removed.
        ceiling: f64,
    },
    /// The record's stage is terminal.
    Concluded,
}

/// Rewrites the anchored tile once a stat builds up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileEffect {
    /// Index of the stat that builds up.
    pub stat: usize,
    /// Value at which the tile is rewritten.
    pub threshold: f64,
    /// Value the stat falls back to afterwards.
    pub reset: f64,
    /// `(from, into)` terrain pairs.
    pub transitions: &'static [(TileType, TileType)],
}

impl TileEffect {
    /// Terrain `tile` turns into, if this effect applies to it.
    pub fn target(&self, tile: TileType) -> Option<TileType> {
        self.transitions
            .iter()
            .find(|(from, _)| *from == tile)
            .map(|(_, into)| *into)
    }
}

/// Full configuration of one managed kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KindSpec {
    /// Unique `family_thing` name.
    pub name: &'static str,
    /// Plural display label, e.g. "anodizers".
    pub label: &'static str,
    /// Spawn family.
    pub family: Family,
    /// Minimum ticks between activations.
    pub check_interval: u64,
    /// Per-activation (per-attempt for terrain) spawn probability.
    pub spawn_chance: f64,
    /// Capacity.
    pub max_count: usize,
    /// Record layout.
    pub stats: &'static [StatSpec],
    /// Removal rules.
    pub eviction: &'static [Eviction],
    /// Stage machine, for staged kinds.
    pub progression: Option<Progression>,
    /// Tile rewrite, for erosion-like kinds.
    pub tile_effect: Option<TileEffect>,
}

impl KindSpec {
    /// Position of the stat called `name`.
    pub fn stat_index(&self, name: &str) -> Option<usize> {
        self.stats.iter().position(|s| s.name == name)
    }

    /// Age gained per activation, if this kind ages.
    pub fn age_step(&self) -> Option<f64> {
        self.eviction.iter().find_map(|e| match e {
            Eviction::Age { step, .. } => Some(*step),
            _ => None,
        })
    }

    /// Check the internal consistency of this specification.
    pub fn validate(&self) -> SimResult<()> {
        let fail = |reason: String| {
            Err(SimError::InvalidKind {
                kind: self.name.to_string(),
                reason,
            })
        };

        if self.check_interval == 0 {
            return fail("check interval must be positive".into());
        }
        if self.spawn_chance.is_nan() || self.spawn_chance <= 0.0 || self.spawn_chance > 1.0 {
            return fail(format!("spawn chance {} outside (0, 1]", self.spawn_chance));
        }
        if self.max_count == 0 {
            return fail("capacity must be positive".into());
        }
        if self.stats.is_empty() {
            return fail("at least one stat is required".into());
        }
        for (i, stat) in self.stats.iter().enumerate() {
            if stat.min > stat.max {
                return fail(format!("stat {} has an inverted range", stat.name));
            }
            if stat.base < stat.min || stat.base + stat.spread > stat.max {
                return fail(format!("stat {} spawns outside its range", stat.name));
            }
            if self.stats[..i].iter().any(|other| other.name == stat.name) {
                return fail(format!("stat {} is declared twice", stat.name));
            }
        }
        if self.eviction.is_empty() {
            return fail("at least one eviction rule is required".into());
        }
        for rule in self.eviction {
            if let Eviction::Floor { stat, .. } = rule {
                if *stat >= self.stats.len() {
                    return fail(format!("floor rule refers to missing stat {stat}"));
                }
            }
        }
        let concludes = self.eviction.contains(&Eviction::Concluded);
        match (self.progression, concludes) {
            (Some(p), true) => {
                let stat = match p {
                    Progression::Rapprochement { stat, .. }
                    | Progression::Intercession { stat, .. } => stat,
                };
                if stat >= self.stats.len() {
                    return fail(format!("progression refers to missing stat {stat}"));
                }
            }
            (Some(_), false) => return fail("staged kinds must evict concluded records".into()),
            (None, true) => return fail("only staged kinds can evict concluded records".into()),
            (None, false) => {}
        }
        if let Family::Terrain { attempts, tiles } = self.family {
            if !(1..=3).contains(&attempts) {
                return fail(format!("{attempts} spawn attempts, expected 1 to 3"));
            }
            if tiles.is_empty() {
                return fail("terrain kinds need at least one tile type".into());
            }
        }
        if let Some(effect) = self.tile_effect {
            if !matches!(self.family, Family::Terrain { .. }) {
                return fail("tile effects need a terrain anchor".into());
            }
            if effect.stat >= self.stats.len() {
                return fail(format!("tile effect refers to missing stat {}", effect.stat));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const SKILL: StatSpec = StatSpec::new("skill", 20.0, 30.0).drift(Drift::Walk(4.0));

    static STATS: [StatSpec; 2] = [
        SKILL,
        StatSpec::new("temperature", 200.0, 100.0)
            .range(100.0, 400.0)
            .drift(Drift::Decay(2.5)),
    ];

    fn spec() -> KindSpec {
        KindSpec {
            name: "test_kind",
            label: "tests",
            family: Family::Diplomatic,
            check_interval: 2000,
            spawn_chance: 0.003,
            max_count: 10,
            stats: &STATS,
            eviction: &[Eviction::Window(60_000)],
            progression: None,
            tile_effect: None,
        }
    }

    #[test]
    fn stat_builder_defaults() {
        assert_eq!(SKILL.min, 0.0);
        assert_eq!(SKILL.max, 100.0);
        assert_eq!(STATS[1].min, 100.0);
        assert_eq!(STATS[1].drift, Drift::Decay(2.5));
    }

    #[test]
    fn initial_values_fall_inside_spawn_band() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let v = SKILL.initial(&mut rng);
            assert!((20.0..50.0).contains(&v));
        }
    }

    #[test]
    fn step_clamps_to_range() {
        let mut rng = StdRng::seed_from_u64(1);
        let grow = StatSpec::new("g", 0.0, 0.0).drift(Drift::Grow(30.0));
        assert_eq!(grow.step(90.0, &mut rng, 0), 100.0);
        let decay = StatSpec::new("d", 0.0, 0.0).drift(Drift::Decay(30.0));
        assert_eq!(decay.step(10.0, &mut rng, 0), 0.0);
    }

    #[test]
    fn walks_stay_within_half_step() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            let v = Drift::Walk(4.0).apply(50.0, &mut rng, 0);
            assert!((48.0..=52.0).contains(&v));
            let b = Drift::Biased { step: 2.0, bias: 0.7 }.apply(50.0, &mut rng, 0);
            assert!((48.6..=50.6).contains(&b));
        }
    }

    #[test]
    fn oscillation_follows_sine() {
        let mut rng = StdRng::seed_from_u64(3);
        let drift = Drift::Oscillate {
            amplitude: 2.0,
            period: 1000.0,
        };
        assert_eq!(drift.apply(10.0, &mut rng, 0), 10.0);
        let quarter = (std::f64::consts::FRAC_PI_2 * 1000.0) as u64;
        assert!((drift.apply(10.0, &mut rng, quarter) - 12.0).abs() < 1e-3);
    }

    #[test]
    fn fixed_never_moves() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(Drift::Fixed.apply(42.0, &mut rng, 999), 42.0);
    }

    #[test]
    fn stat_index_lookup() {
        let spec = spec();
        assert_eq!(spec.stat_index("temperature"), Some(1));
        assert_eq!(spec.stat_index("missing"), None);
    }

    #[test]
    fn age_step_from_rules() {
        let mut spec = spec();
        assert_eq!(spec.age_step(), None);
        spec.eviction = &[
            Eviction::Window(50_000),
            Eviction::Age {
                step: 2.5,
                ceiling: 90.0,
            },
        ];
        assert_eq!(spec.age_step(), Some(2.5));
    }

    #[test]
    fn valid_spec_passes() {
        spec().validate().unwrap();
    }

    #[test]
    fn invalid_specs_are_rejected() {
        let mut zero_interval = spec();
        zero_interval.check_interval = 0;
        assert!(zero_interval.validate().is_err());

        let mut bad_floor = spec();
        bad_floor.eviction = &[Eviction::Floor { stat: 5, at: 4.0 }];
        assert!(bad_floor.validate().is_err());

        let mut unstaged = spec();
        unstaged.eviction = &[Eviction::Concluded];
        assert!(unstaged.validate().is_err());

        let mut staged_without_rule = spec();
        staged_without_rule.progression = Some(Progression::Intercession {
            stat: 0,
            success: 75.0,
            rejection: 10.0,
            patience: 40_000,
        });
        assert!(staged_without_rule.validate().is_err());

        let mut effect_without_tiles = spec();
        effect_without_tiles.tile_effect = Some(TileEffect {
            stat: 0,
            threshold: 90.0,
            reset: 0.0,
            transitions: &[(TileType::Mountain, TileType::Hills)],
        });
        assert!(effect_without_tiles.validate().is_err());

        let mut too_many_attempts = spec();
        too_many_attempts.family = Family::Terrain {
            attempts: 4,
            tiles: &[TileType::Grass],
        };
        assert!(too_many_attempts.validate().is_err());
    }

    #[test]
    fn spawn_band_must_fit_range() {
        static WIDE: [StatSpec; 1] = [StatSpec::new("wide", 90.0, 20.0)];
        let mut spec = spec();
        spec.stats = &WIDE;
        let err = spec.validate().unwrap_err();
        assert!(err.to_string().contains("spawns outside"));
    }

    #[test]
    fn tile_effect_targets() {
        let effect = TileEffect {
            stat: 0,
            threshold: 90.0,
            reset: 10.0,
            transitions: &[
                (TileType::Mountain, TileType::Hills),
                (TileType::Hills, TileType::Grass),
            ],
        };
        assert_eq!(effect.target(TileType::Mountain), Some(TileType::Hills));
        assert_eq!(effect.target(TileType::Hills), Some(TileType::Grass));
        assert_eq!(effect.target(TileType::Sand), None);
    }
}
