//! Result payloads and rejection errors for engine actions.
//!
//! A successful call returns an outcome struct describing what happened,
//! including adverse results (illness, injury, death), which are not errors.
//! A rejected call returns [`ActionError`] and leaves the creature
//! untouched.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::afflictions::{AfflictionEffects, AfflictionInfo, DurationClass};
use crate::creature::HealthStatus;
use crate::hair_care::{GroomIntensity, TreatmentKind};
use crate::stats::StatChanges;

/// Which rung of the magnitude ladder a care action landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CareTier {
    /// Declined by the creature; only a side penalty applied.
    Refused,
    Normal,
    Excessive,
    /// Beyond excessive (garbage-tier feeding).
    Extreme,
}

/// The resolved parts of a catalog entry reported back to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AfflictionSummary {
    pub key: String,
    pub name: String,
    pub effects: AfflictionEffects,
    pub duration: DurationClass,
    pub symptoms: String,
}

impl From<&AfflictionInfo> for AfflictionSummary {
    fn from(info: &AfflictionInfo) -> Self {
        Self {
            key: info.key.clone(),
            name: info.name.clone(),
            effects: info.effects,
            duration: info.duration,
            symptoms: info.symptoms.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeathNotice {
    pub cause: String,
    pub at: DateTime<Utc>,
}

/// An adverse side effect of an otherwise successful care action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Consequence {
    /// Unpleasant but no lasting affliction.
    FeltSick,
    Afflicted(AfflictionSummary),
    Died(DeathNotice),
}

/// Result of feed, hydrate, rest and exercise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareOutcome {
    pub message: String,
    pub tier: CareTier,
    pub changes: StatChanges,
    #[serde(default)]
    pub consequences: Vec<Consequence>,
    #[serde(default)]
    pub notes: Vec<String>,
}

impl CareOutcome {
    pub fn died(&self) -> bool {
        self.consequences
            .iter()
            .any(|c| matches!(c, Consequence::Died(_)))
    }

    pub fn afflictions(&self) -> impl Iterator<Item = &AfflictionSummary> {
        self.consequences.iter().filter_map(|c| match c {
            Consequence::Afflicted(a) => Some(a),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IllnessOutcome {
    pub message: String,
    pub affliction: AfflictionSummary,
    pub changes: StatChanges,
    #[serde(default)]
    pub death: Option<DeathNotice>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CureOutcome {
    pub message: String,
    /// Keys removed from the affliction set.
    pub cured: Vec<String>,
    pub changes: StatChanges,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeathOutcome {
    pub message: String,
    pub cause: String,
    pub died_at: DateTime<Utc>,
    /// True when the creature was already dead before this call.
    pub already_dead: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevivalOutcome {
    pub message: String,
    pub energy: u8,
    pub status: HealthStatus,
    #[serde(default)]
    pub dead_for_secs: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroomOutcome {
    pub message: String,
    pub intensity: GroomIntensity,
    pub changes: StatChanges,
    pub cured: Vec<String>,
    pub still_active: Vec<String>,
    #[serde(default)]
    pub death: Option<DeathNotice>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreatmentOutcome {
    pub message: String,
    pub treatment: TreatmentKind,
    pub changes: StatChanges,
    pub cured: Vec<String>,
    pub still_active: Vec<String>,
    #[serde(default)]
    pub death: Option<DeathNotice>,
}

/// Why an action was rejected. A rejected action never mutates the
/// creature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    /// Care attempted on a dead creature.
    Dead { name: String, action: &'static str },
    /// Zero or out-of-range amount, hours or intensity.
    InvalidMagnitude {
        action: &'static str,
        value: u32,
        max: u32,
    },
    UnknownAffliction(String),
    /// The affliction exists but cannot be contracted through `fall_ill`
    /// (the death marker).
    NotContractible(String),
    /// The affliction (display name) is already active.
    AlreadyAfflicted(String),
    /// Cure requested for an affliction that is not active.
    NotAfflicted(String),
    /// Cure-all requested on a creature with no afflictions.
    NothingToCure,
    TooTired { energy: u8, required: u8 },
    /// Revive requested on a living creature.
    NotDead,
    NotRevivable { species: String },
    RevivalWindowExpired {
        species: String,
        dead_for_secs: Option<i64>,
        window_secs: i64,
    },
}

impl ActionError {
    /// Whether this is the uniform dead-creature rejection rather than a
    /// validation failure.
    pub fn is_dead_rejection(&self) -> bool {
        matches!(self, ActionError::Dead { .. })
    }
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionError::Dead { name, action } => {
                write!(f, "{} is dead and cannot {}", name, action)
            }
            ActionError::InvalidMagnitude { action, value, max } => {
                write!(f, "Cannot {} with {}: expected 1 to {}", action, value, max)
            }
            ActionError::UnknownAffliction(q) => {
                write!(f, "Unknown affliction '{}'", q)
            }
            ActionError::NotContractible(name) => {
                write!(f, "{} cannot be contracted like an illness", name)
            }
            ActionError::AlreadyAfflicted(name) => {
                write!(f, "Already suffering from {}", name)
            }
            ActionError::NotAfflicted(name) => write!(f, "Not suffering from {}", name),
            ActionError::NothingToCure => write!(f, "There are no afflictions to cure"),
            ActionError::TooTired { energy, required } => write!(
                f,
                "Too tired to exercise (energy {}, needs at least {})",
                energy, required
            ),
            ActionError::NotDead => write!(f, "Only a dead creature can be revived"),
            ActionError::NotRevivable { species } => {
                write!(f, "A {} cannot be brought back from the dead", species)
            }
            ActionError::RevivalWindowExpired {
                species,
                dead_for_secs,
                window_secs,
            } => match dead_for_secs {
                Some(secs) => write!(
                    f,
                    "A {} can only be revived within {} days of death; \
                     it has been dead for {} hours",
                    species,
                    window_secs / 86_400,
                    secs / 3_600
                ),
                None => write!(
                    f,
                    "A {} can only be revived within {} days of death, \
                     and its time of death is unknown",
                    species,
                    window_secs / 86_400
                ),
            },
        }
    }
}

impl std::error::Error for ActionError {}
