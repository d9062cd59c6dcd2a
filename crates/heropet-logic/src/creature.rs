//! The creature record: identity, raw vitals, afflictions and lifecycle
//! flags.
//!
//! A `Creature` is plain data so the hosting layer can map it to and from
//! storage field by field. Mutation is meant to go through
//! [`crate::vitality::VitalityEngine`]; [`Creature::validate`] checks
//! records that arrive from outside.

use std::collections::BTreeSet;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::afflictions::{Catalog, DEATH_MARKER};
use crate::stats::Vitals;

/// Alive or dead, derived from [`Creature::alive`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifeState {
    Alive,
    Dead,
}

/// Overall health, derived from the lifecycle flag and affliction set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthStatus {
    /// Alive with no afflictions.
    Healthy,
    /// Alive with at least one affliction.
    Sick,
    Dead,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creature {
    pub id: u64,
    pub name: String,
    /// Species or creature type, e.g. "cat" or "phoenix".
    pub species: String,
    /// Elemental affinity tag, e.g. "fire".
    pub element: String,
    pub special_power: String,
    pub vitals: Vitals,
    /// Catalog keys of active afflictions.
    #[serde(default)]
    pub afflictions: BTreeSet<String>,
    pub alive: bool,
    #[serde(default)]
    pub died_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub death_cause: Option<String>,
    #[serde(default)]
    pub last_cared_at: Option<DateTime<Utc>>,
}

impl Creature {
    /// A new creature at full health.
    pub fn new(id: u64, name: impl Into<String>, species: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            species: species.into(),
            element: String::new(),
            special_power: String::new(),
            vitals: Vitals::default(),
            afflictions: BTreeSet::new(),
            alive: true,
            died_at: None,
            death_cause: None,
            last_cared_at: None,
        }
    }

    pub fn with_element(mut self, element: impl Into<String>) -> Self {
        self.element = element.into();
        self
    }

    pub fn with_power(mut self, power: impl Into<String>) -> Self {
        self.special_power = power.into();
        self
    }

    pub fn life_state(&self) -> LifeState {
        if self.alive {
            LifeState::Alive
        } else {
            LifeState::Dead
        }
    }

    pub fn health_status(&self) -> HealthStatus {
        if !self.alive {
            HealthStatus::Dead
        } else if self.afflictions.is_empty() {
            HealthStatus::Healthy
        } else {
            HealthStatus::Sick
        }
    }

    pub fn has_affliction(&self, key: &str) -> bool {
        self.afflictions.contains(key)
    }

    /// Check a record loaded from storage against the catalog and the
    /// lifecycle invariants.
    pub fn validate(&self, catalog: &Catalog) -> Result<(), CreatureError> {
        if !self.vitals.in_range() {
            return Err(CreatureError::StatOutOfRange);
        }
        if let Some(unknown) = self.afflictions.iter().find(|k| !catalog.contains(k)) {
            return Err(CreatureError::UnknownAffliction(unknown.clone()));
        }
        if self.alive {
            if self.died_at.is_some() || self.death_cause.is_some() {
                return Err(CreatureError::LivingWithDeathRecord);
            }
            if self.has_affliction(DEATH_MARKER) {
                return Err(CreatureError::LivingWithDeathMarker);
            }
            if self.vitals.energy == 0 {
                return Err(CreatureError::LivingWithoutEnergy);
            }
        } else {
            if !self.has_affliction(DEATH_MARKER) {
                return Err(CreatureError::DeadWithoutMarker);
            }
            if self.vitals.energy != 0 {
                return Err(CreatureError::DeadWithEnergy(self.vitals.energy));
            }
        }
        Ok(())
    }
}

/// Why a loaded creature record is inconsistent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreatureError {
    StatOutOfRange,
    UnknownAffliction(String),
    LivingWithDeathRecord,
    LivingWithDeathMarker,
    /// Energy at zero is death; a living record cannot sit there.
    LivingWithoutEnergy,
    DeadWithoutMarker,
    DeadWithEnergy(u8),
}

impl fmt::Display for CreatureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreatureError::StatOutOfRange => write!(f, "A vitality stat is above 100"),
            CreatureError::UnknownAffliction(k) => {
                write!(f, "Affliction '{}' is not in the catalog", k)
            }
            CreatureError::LivingWithDeathRecord => {
                write!(f, "Living creature carries a death time or cause")
            }
            CreatureError::LivingWithDeathMarker => {
                write!(f, "Living creature carries the death marker")
            }
            CreatureError::LivingWithoutEnergy => {
                write!(f, "Living creature has no energy left")
            }
            CreatureError::DeadWithoutMarker => {
                write!(f, "Dead creature is missing the death marker")
            }
            CreatureError::DeadWithEnergy(e) => {
                write!(f, "Dead creature still has {} energy", e)
            }
        }
    }
}

impl std::error::Error for CreatureError {}
