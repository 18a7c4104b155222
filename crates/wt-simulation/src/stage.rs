//! Stage machines layered on top of the generic record.
//!
//! Only a couple of diplomatic kinds carry a stage. Transitions are guard
//! checks on a single stat, evaluated once per activation during the mutate
//! phase; a stage never moves backwards.

use std::fmt;

/// Progress of a rapprochement between two civilizations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RapprochementStage {
    /// First contact, nothing agreed yet.
    Overture,
    /// Regular talks under way.
    Dialogue,
    /// Relations thawing.
    Warming,
    /// Full relations restored. Final.
    Normalized,
}

/// Status of an intercession by a third party.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntercessionStatus {
    /// Still pleading the case.
    Active,
    /// The parties accepted. Final.
    Successful,
    /// The parties refused. Final.
    Rejected,
    /// The intercessor gave up. Final.
    Withdrawn,
}

/// The stage of a staged record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// A rapprochement stage.
    Rapprochement(RapprochementStage),
    /// An intercession status.
    Intercession(IntercessionStatus),
}

impl Stage {
    /// Whether no further transition is possible.
    pub fn is_terminal(self) -> bool {
        match self {
            Self::Rapprochement(s) => s == RapprochementStage::Normalized,
            Self::Intercession(s) => s != IntercessionStatus::Active,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Rapprochement(RapprochementStage::Overture) => "overture",
            Self::Rapprochement(RapprochementStage::Dialogue) => "dialogue",
            Self::Rapprochement(RapprochementStage::Warming) => "warming",
            Self::Rapprochement(RapprochementStage::Normalized) => "normalized",
            Self::Intercession(IntercessionStatus::Active) => "active",
            Self::Intercession(IntercessionStatus::Successful) => "successful",
            Self::Intercession(IntercessionStatus::Rejected) => "rejected",
            Self::Intercession(IntercessionStatus::Withdrawn) => "withdrawn",
        };
        write!(f, "{name}")
    }
}

/// Guard conditions driving a kind's stage machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Progression {
    /// `overture -> dialogue -> warming -> normalized`, one step per
    /// activation once `stats[stat]` reaches the next threshold.
    Rapprochement {
        /// Index of the guarded stat.
        stat: usize,
        /// Threshold to enter dialogue.
        dialogue: f64,
        /// Threshold to enter warming.
        warming: f64,
        /// Threshold to normalize.
        normalized: f64,
    },
    /// `active -> successful | rejected | withdrawn`.
    Intercession {
        /// Index of the guarded stat.
        stat: usize,
        /// At or above this value the intercession succeeds.
        success: f64,
        /// At or below this value it is rejected.
        rejection: f64,
        /// Ticks after creation at which an undecided intercession is withdrawn.
        patience: u64,
    },
}

impl Progression {
    /// The stage a freshly spawned record starts in.
    pub fn initial(&self) -> Stage {
        match self {
            Self::Rapprochement { .. } => Stage::Rapprochement(RapprochementStage::Overture),
            Self::Intercession { .. } => Stage::Intercession(IntercessionStatus::Active),
        }
    }

    /// The stage after one activation. `elapsed` is ticks since creation.
    ///
    /// A stage that does not belong to this progression is returned as is.
    pub fn advance(&self, stage: Stage, stats: &[f64], elapsed: u64) -> Stage {
        match (*self, stage) {
            (
                Self::Rapprochement {
                    stat,
                    dialogue,
                    warming,
                    normalized,
                },
                Stage::Rapprochement(current),
            ) => {
                let value = stats.get(stat).copied().unwrap_or(0.0);
                let next = match current {
                    RapprochementStage::Overture if value >= dialogue => RapprochementStage::Dialogue,
                    RapprochementStage::Dialogue if value >= warming => RapprochementStage::Warming,
                    RapprochementStage::Warming if value >= normalized => {
                        RapprochementStage::Normalized
                    }
                    other => other,
                };
                Stage::Rapprochement(next)
            }
            (
                Self::Intercession {
                    stat,
                    success,
                    rejection,
                    patience,
                },
                Stage::Intercession(IntercessionStatus::Active),
            ) => {
                let value = stats.get(stat).copied().unwrap_or(0.0);
                let next = if value >= success {
                    IntercessionStatus::Successful
                } else if value <= rejection {
                    IntercessionStatus::Rejected
                } else if elapsed > patience {
                    IntercessionStatus::Withdrawn
                } else {
                    IntercessionStatus::Active
                };
                Stage::Intercession(next)
            }
            (_, unchanged) => unchanged,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LADDER: Progression = Progression::Rapprochement {
        stat: 0,
        dialogue: 25.0,
        warming: 50.0,
        normalized: 80.0,
    };

    const VERDICT: Progression = Progression::Intercession {
        stat: 1,
        success: 75.0,
        rejection: 10.0,
        patience: 40_000,
    };

    #[test]
    fn ladder_steps_once_per_activation() {
        let stage = LADDER.initial();
        assert_eq!(stage, Stage::Rapprochement(RapprochementStage::Overture));

        // Even a maxed-out stat only moves one rung.
        let stage = LADDER.advance(stage, &[100.0], 0);
        assert_eq!(stage, Stage::Rapprochement(RapprochementStage::Dialogue));
        let stage = LADDER.advance(stage, &[100.0], 0);
        assert_eq!(stage, Stage::Rapprochement(RapprochementStage::Warming));
        let stage = LADDER.advance(stage, &[100.0], 0);
        assert_eq!(stage, Stage::Rapprochement(RapprochementStage::Normalized));
        assert!(stage.is_terminal());
        assert_eq!(LADDER.advance(stage, &[100.0], 0), stage);
    }

    #[test]
    fn ladder_never_backtracks() {
        let warming = Stage::Rapprochement(RapprochementStage::Warming);
        assert_eq!(LADDER.advance(warming, &[0.0], 0), warming);
    }

    #[test]
    fn ladder_waits_below_threshold() {
        let stage = LADDER.initial();
        assert_eq!(LADDER.advance(stage, &[24.9], 0), stage);
        assert!(!stage.is_terminal());
    }

    #[test]
    fn verdict_outcomes() {
        let active = VERDICT.initial();
        assert!(!active.is_terminal());
        assert_eq!(
            VERDICT.advance(active, &[0.0, 80.0], 0),
            Stage::Intercession(IntercessionStatus::Successful)
        );
        assert_eq!(
            VERDICT.advance(active, &[0.0, 10.0], 0),
            Stage::Intercession(IntercessionStatus::Rejected)
        );
        assert_eq!(
            VERDICT.advance(active, &[0.0, 50.0], 40_001),
            Stage::Intercession(IntercessionStatus::Withdrawn)
        );
        assert_eq!(VERDICT.advance(active, &[0.0, 50.0], 40_000), active);
    }

    #[test]
    fn verdict_outcomes_are_final() {
        let rejected = Stage::Intercession(IntercessionStatus::Rejected);
        assert!(rejected.is_terminal());
        assert_eq!(VERDICT.advance(rejected, &[0.0, 99.0], 0), rejected);
    }

    #[test]
    fn foreign_stage_is_left_alone() {
        let active = VERDICT.initial();
        assert_eq!(LADDER.advance(active, &[100.0], 0), active);
    }

    #[test]
    fn stage_display() {
        assert_eq!(LADDER.initial().to_string(), "overture");
        assert_eq!(
            Stage::Intercession(IntercessionStatus::Withdrawn).to_string(),
            "withdrawn"
        );
    }
}
