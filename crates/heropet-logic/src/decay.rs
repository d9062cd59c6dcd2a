//! Passive stat drift between care actions.
//!
//! Needs rise and mood falls with elapsed time. Each active affliction
//! drains extra energy, as does being fully starved or dehydrated. A
//! creature whose energy runs out dies of neglect.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::DecayConfig;
use crate::creature::Creature;
use crate::lifecycle::mark_dead;
use crate::outcome::DeathNotice;
use crate::stats::{Stat, StatChanges, Vitals, STAT_MAX};

pub const NEGLECT_CAUSE: &str = "neglect";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecayReport {
    pub changes: StatChanges,
    #[serde(default)]
    pub death: Option<DeathNotice>,
}

/// Whole-point change for `rate` over `hours`. Anything past a full stat
/// swing is capped, so very long or infinite spans stay finite.
fn per_hour(rate: f32, hours: f32) -> i32 {
    ((rate * hours).round() as i32).clamp(-STAT_MAX, STAT_MAX)
}

/// Advance a living creature by `hours`. Dead creatures and non-positive
/// spans are left untouched.
pub fn apply_elapsed(
    creature: &mut Creature,
    hours: f32,
    config: &DecayConfig,
    now: DateTime<Utc>,
) -> DecayReport {
    if !creature.alive || hours.is_nan() || hours <= 0.0 {
        return DecayReport::default();
    }

    let before = creature.vitals;
    let v = &mut creature.vitals;
    v.adjust(Stat::Hunger, per_hour(config.hunger_per_hour, hours));
    v.adjust(Stat::Thirst, per_hour(config.thirst_per_hour, hours));
    v.adjust(Stat::Fatigue, per_hour(config.fatigue_per_hour, hours));
    v.adjust(Stat::Stress, per_hour(config.stress_per_hour, hours));
    v.adjust(Stat::Happiness, -per_hour(config.happiness_loss_per_hour, hours));

    let mut drain = config.energy_loss_per_hour
        + config.affliction_drain_per_hour * creature.afflictions.len() as f32;
    if v.hunger as i32 == STAT_MAX || v.thirst as i32 == STAT_MAX {
        drain += config.deprivation_drain_per_hour;
    }
    v.adjust(Stat::Energy, -per_hour(drain, hours));

    let death = if creature.vitals.energy == 0 {
        Some(mark_dead(creature, NEGLECT_CAUSE, now))
    } else {
        None
    };

    DecayReport {
        changes: Vitals::diff(&before, &creature.vitals),
        death,
    }
}

/// Hours since the last care action, if the creature has ever been cared
/// for.
pub fn hours_since_care(creature: &Creature, now: DateTime<Utc>) -> Option<f64> {
    creature
        .last_cared_at
        .map(|t| (now - t).num_seconds() as f64 / 3600.0)
}
