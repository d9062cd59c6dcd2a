//! Death and revival.
//!
//! Death is a lifecycle flag plus the death marker in the affliction set.
//! Revival depends on species: immortal species always come back,
//! temporarily revivable species only within a window after death, and
//! everything else stays dead.

use chrono::{DateTime, Utc};

use crate::afflictions::{DEATH_MARKER, REVIVAL_WEAKNESS};
use crate::config::LifecycleConfig;
use crate::creature::Creature;
use crate::outcome::{ActionError, DeathNotice, DeathOutcome, RevivalOutcome};
use crate::stats::Stat;
use crate::vitality::VitalityEngine;

/// Flip a living creature to dead. Energy drops to zero and the death
/// marker joins the affliction set.
pub(crate) fn mark_dead(creature: &mut Creature, cause: &str, now: DateTime<Utc>) -> DeathNotice {
    creature.alive = false;
    creature.died_at = Some(now);
    creature.death_cause = Some(cause.to_string());
    creature.vitals.set(Stat::Energy, 0);
    creature.afflictions.insert(DEATH_MARKER.to_string());
    log::info!(
        "Creature {} ({}) died of {}",
        creature.id,
        creature.name,
        cause
    );
    DeathNotice {
        cause: cause.to_string(),
        at: now,
    }
}

/// Whether a creature of `species` that died at `died_at` may be revived at
/// `now`. On success returns how long it has been dead, when known.
pub fn revival_eligibility(
    species: &str,
    died_at: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
    config: &LifecycleConfig,
) -> Result<Option<i64>, ActionError> {
    let dead_for_secs = died_at.map(|t| (now - t).num_seconds());
    let matches = |list: &[String]| list.iter().any(|s| s.eq_ignore_ascii_case(species.trim()));

    if matches(&config.immortal_species) {
        return Ok(dead_for_secs);
    }
    if !matches(&config.temporarily_revivable_species) {
        return Err(ActionError::NotRevivable {
            species: species.to_string(),
        });
    }
    match dead_for_secs {
        Some(secs) if secs <= config.revival_window_secs => Ok(Some(secs)),
        _ => Err(ActionError::RevivalWindowExpired {
            species: species.to_string(),
            dead_for_secs,
            window_secs: config.revival_window_secs,
        }),
    }
}

impl VitalityEngine<'_> {
    /// Kill the creature. Killing a dead creature keeps the original time
    /// of death and only replaces the cause when a new one is given.
    pub fn kill(
        &self,
        creature: &mut Creature,
        cause: Option<String>,
        now: DateTime<Utc>,
    ) -> DeathOutcome {
        if !creature.alive {
            if let Some(cause) = cause {
                creature.death_cause = Some(cause);
            }
            let cause = creature
                .death_cause
                .clone()
                .unwrap_or_else(|| self.config().lifecycle.default_death_cause.clone());
            return DeathOutcome {
                message: format!("{} is already dead", creature.name),
                cause,
                died_at: creature.died_at.unwrap_or(now),
                already_dead: true,
            };
        }

        let cause = cause.unwrap_or_else(|| self.config().lifecycle.default_death_cause.clone());
        let notice = mark_dead(creature, &cause, now);
        DeathOutcome {
            message: format!("{} has died of {}", creature.name, notice.cause),
            cause: notice.cause,
            died_at: notice.at,
            already_dead: false,
        }
    }

    /// Bring a dead creature back, weakened.
    pub fn revive(
        &self,
        creature: &mut Creature,
        now: DateTime<Utc>,
    ) -> Result<RevivalOutcome, ActionError> {
        if creature.alive {
            return Err(ActionError::NotDead);
        }
        let cfg = &self.config().lifecycle;
        let dead_for_secs = revival_eligibility(&creature.species, creature.died_at, now, cfg)?;
        let weakness = self.resolve(REVIVAL_WEAKNESS)?;

        creature.alive = true;
        creature.died_at = None;
        creature.death_cause = None;
        creature.afflictions.remove(DEATH_MARKER);
        creature.afflictions.insert(weakness.key.clone());
        creature.vitals.set(Stat::Energy, cfg.revival_energy as i32);
        creature.last_cared_at = Some(now);
        log::info!(
            "Creature {} ({}) revived after {}s",
            creature.id,
            creature.name,
            dead_for_secs.unwrap_or_default()
        );

        Ok(RevivalOutcome {
            message: format!(
                "{} has been brought back to life but is still weak",
                creature.name
            ),
            energy: creature.vitals.energy,
            status: creature.health_status(),
            dead_for_secs,
        })
    }
}
