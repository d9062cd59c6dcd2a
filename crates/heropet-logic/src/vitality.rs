//! The vitality engine: care actions over a creature's stats and
//! afflictions.
//!
//! Every care action has the same shape:
//!
//! 1. Reject outright (dead creature, invalid magnitude, unknown affliction)
//!    without touching the creature.
//! 2. Refuse with a side penalty when the creature does not need the care
//!    (force-feeding a full creature, putting a rested one to bed).
//! 3. Walk the magnitude ladder (normal / excessive / extreme) and apply
//!    clamped stat changes, rolling the injected [`RandomSource`] for the
//!    risky rungs.
//! 4. If energy reached zero along the way, the creature dies.
//!
//! Lifecycle actions (kill, revive) live in [`crate::lifecycle`]; grooming
//! and hairball treatments in [`crate::hair_care`].

use chrono::{DateTime, Utc};

use crate::afflictions::{
    AfflictionCategory, AfflictionInfo, Catalog, CatalogError, JOINT_INJURY, LETHARGY,
    PRIMARY_DIGESTIVE, WATER_BLOAT,
};
use crate::config::VitalityConfig;
use crate::creature::Creature;
use crate::lifecycle;
use crate::outcome::{
    ActionError, AfflictionSummary, CareOutcome, CareTier, Consequence, CureOutcome, DeathNotice,
    IllnessOutcome,
};
use crate::rng::RandomSource;
use crate::stats::{Stat, Vitals};

/// Stateless engine over a catalog and a configuration.
#[derive(Debug, Clone, Copy)]
pub struct VitalityEngine<'a> {
    catalog: &'a Catalog,
    config: &'a VitalityConfig,
}

impl<'a> VitalityEngine<'a> {
    pub fn new(catalog: &'a Catalog, config: &'a VitalityConfig) -> Self {
        Self { catalog, config }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn config(&self) -> &'a VitalityConfig {
        self.config
    }

    // ── Shared steps ───────────────────────────────────────────────────

    pub(crate) fn ensure_alive(
        creature: &Creature,
        action: &'static str,
    ) -> Result<(), ActionError> {
        if creature.alive {
            Ok(())
        } else {
            Err(ActionError::Dead {
                name: creature.name.clone(),
                action,
            })
        }
    }

    fn check_magnitude(action: &'static str, value: u32, max: u32) -> Result<(), ActionError> {
        if value == 0 || value > max {
            Err(ActionError::InvalidMagnitude { action, value, max })
        } else {
            Ok(())
        }
    }

    pub(crate) fn resolve(&self, key_or_name: &str) -> Result<&'a AfflictionInfo, ActionError> {
        self.catalog.lookup(key_or_name).map_err(|e| match e {
            CatalogError::NotFound(q) => ActionError::UnknownAffliction(q),
            other => ActionError::UnknownAffliction(other.to_string()),
        })
    }

    /// Add an affliction and apply its effect vector. Returns `None` when it
    /// was already active (nothing changes).
    pub(crate) fn afflict(
        creature: &mut Creature,
        info: &AfflictionInfo,
    ) -> Option<AfflictionSummary> {
        if !creature.afflictions.insert(info.key.clone()) {
            return None;
        }
        creature.vitals.apply(&info.effects.as_changes());
        log::debug!(
            "Creature {} ({}) contracted {}",
            creature.id,
            creature.name,
            info.name
        );
        Some(AfflictionSummary::from(info))
    }

    /// Kill the creature if an action drained its energy to zero.
    pub(crate) fn settle(
        &self,
        creature: &mut Creature,
        cause: &str,
        now: DateTime<Utc>,
    ) -> Option<DeathNotice> {
        if creature.alive && creature.vitals.energy == 0 {
            Some(lifecycle::mark_dead(creature, cause, now))
        } else {
            None
        }
    }

    /// Outcome for care the creature turned down. A record already at zero
    /// energy still dies here.
    fn refuse(
        &self,
        message: String,
        before: &Vitals,
        creature: &mut Creature,
        now: DateTime<Utc>,
    ) -> CareOutcome {
        let consequences = self
            .settle(creature, "exhaustion", now)
            .map(Consequence::Died)
            .into_iter()
            .collect();
        CareOutcome {
            message,
            tier: CareTier::Refused,
            changes: Vitals::diff(before, &creature.vitals),
            consequences,
            notes: Vec::new(),
        }
    }

    // ── Feed ───────────────────────────────────────────────────────────

    /// Feed a portion of `amount` (1..=`max_amount`).
    ///
    /// * Full creature (hunger below `full_below`) and a large portion:
    ///   refused, stress rises.
    /// * Above `garbage_above`: large penalties and the primary digestive
    ///   affliction, guaranteed.
    /// * Above `excessive_above`: penalties, then a death roll, then an
    ///   affliction roll, else the creature merely feels sick.
    /// * Otherwise: hunger down by `amount`, energy up by half of it.
    pub fn feed(
        &self,
        creature: &mut Creature,
        amount: u32,
        rng: &mut dyn RandomSource,
        now: DateTime<Utc>,
    ) -> Result<CareOutcome, ActionError> {
        let cfg = &self.config.feed;
        Self::ensure_alive(creature, "eat")?;
        Self::check_magnitude("feed", amount, cfg.max_amount)?;
        let digestive = if amount > cfg.excessive_above {
            Some(self.resolve(PRIMARY_DIGESTIVE)?)
        } else {
            None
        };

        let before = creature.vitals;
        let amount = amount as i32;
        creature.last_cared_at = Some(now);

        if creature.vitals.hunger < cfg.full_below && amount > cfg.refuse_amount_above as i32 {
            creature.vitals.adjust(Stat::Stress, cfg.refusal_stress);
            log::debug!("Creature {} refused food while full", creature.id);
            return Ok(self.refuse(
                format!("{} is already full and refuses to eat", creature.name),
                &before,
                creature,
                now,
            ));
        }

        let mut consequences = Vec::new();
        let (tier, message) = match digestive {
            Some(info) if amount > cfg.garbage_above as i32 => {
                let v = &mut creature.vitals;
                v.adjust(Stat::Hunger, -amount);
                v.adjust(Stat::Energy, -cfg.garbage_energy_penalty);
                v.adjust(Stat::Stress, cfg.garbage_stress);
                v.adjust(Stat::Happiness, -cfg.garbage_happiness_penalty);
                consequences.extend(Self::afflict(creature, info).map(Consequence::Afflicted));
                (
                    CareTier::Extreme,
                    format!(
                        "{} wolfed down far too much and now has {}",
                        creature.name, info.name
                    ),
                )
            }
            Some(info) => {
                let v = &mut creature.vitals;
                v.adjust(Stat::Hunger, -amount);
                v.adjust(Stat::Energy, -cfg.excessive_energy_penalty);
                v.adjust(Stat::Stress, cfg.excessive_stress);
                if rng.chance(cfg.excessive_death_chance) {
                    let notice = lifecycle::mark_dead(creature, "overfeeding", now);
                    consequences.push(Consequence::Died(notice));
                    (
                        CareTier::Excessive,
                        format!("{} ate until its body gave out", creature.name),
                    )
                } else if rng.chance(cfg.excessive_sick_chance) {
                    consequences.extend(Self::afflict(creature, info).map(Consequence::Afflicted));
                    (
                        CareTier::Excessive,
                        format!("{} overate and developed {}", creature.name, info.name),
                    )
                } else {
                    consequences.push(Consequence::FeltSick);
                    (
                        CareTier::Excessive,
                        format!("{} overate and feels sick", creature.name),
                    )
                }
            }
            None => {
                let v = &mut creature.vitals;
                v.adjust(Stat::Hunger, -amount);
                v.adjust(Stat::Energy, amount / 2);
                v.adjust(Stat::Happiness, cfg.normal_happiness);
                v.adjust(Stat::Stress, -cfg.normal_stress_relief);
                (
                    CareTier::Normal,
                    format!("{} enjoyed the meal", creature.name),
                )
            }
        };

        consequences.extend(self.settle(creature, "exhaustion", now).map(Consequence::Died));
        Ok(CareOutcome {
            message,
            tier,
            changes: Vitals::diff(&before, &creature.vitals),
            consequences,
            notes: Vec::new(),
        })
    }

    // ── Hydrate ────────────────────────────────────────────────────────

    /// Give `amount` of water. Energy never drops below `energy_floor`
    /// through this action (or below its starting value if that was already
    /// lower).
    pub fn hydrate(
        &self,
        creature: &mut Creature,
        amount: u32,
        rng: &mut dyn RandomSource,
        now: DateTime<Utc>,
    ) -> Result<CareOutcome, ActionError> {
        let cfg = &self.config.hydrate;
        Self::ensure_alive(creature, "drink")?;
        Self::check_magnitude("hydrate", amount, cfg.max_amount)?;
        let bloat = if amount > cfg.excessive_above {
            Some(self.resolve(WATER_BLOAT)?)
        } else {
            None
        };

        let before = creature.vitals;
        let amount = amount as i32;
        creature.last_cared_at = Some(now);

        if creature.vitals.thirst < cfg.hydrated_below && amount > cfg.refuse_amount_above as i32 {
            creature.vitals.adjust(Stat::Stress, cfg.refusal_stress);
            log::debug!("Creature {} refused water while hydrated", creature.id);
            return Ok(self.refuse(
                format!("{} is not thirsty and pushes the bowl away", creature.name),
                &before,
                creature,
                now,
            ));
        }

        let mut consequences = Vec::new();
        let (tier, message) = match bloat {
            Some(info) => {
                let v = &mut creature.vitals;
                v.adjust(Stat::Thirst, -amount);
                v.adjust(Stat::Energy, -cfg.excessive_energy_penalty);
                v.adjust(Stat::Stress, cfg.excessive_stress);
                if rng.chance(cfg.excessive_sick_chance) {
                    consequences.extend(Self::afflict(creature, info).map(Consequence::Afflicted));
                }
                (
                    CareTier::Excessive,
                    format!("{} drank far too much water", creature.name),
                )
            }
            None => {
                let v = &mut creature.vitals;
                v.adjust(Stat::Thirst, -amount);
                v.adjust(Stat::Energy, amount / cfg.energy_divisor.max(1) as i32);
                v.adjust(Stat::Happiness, cfg.normal_happiness);
                v.adjust(Stat::Stress, -cfg.normal_stress_relief);
                (
                    CareTier::Normal,
                    format!("{} had a refreshing drink", creature.name),
                )
            }
        };

        let floor = before.energy.min(cfg.energy_floor);
        creature.vitals.floor_at(Stat::Energy, floor);

        consequences.extend(self.settle(creature, "exhaustion", now).map(Consequence::Died));
        Ok(CareOutcome {
            message,
            tier,
            changes: Vitals::diff(&before, &creature.vitals),
            consequences,
            notes: Vec::new(),
        })
    }

    // ── Rest ───────────────────────────────────────────────────────────

    /// Put the creature to rest for `hours`.
    pub fn rest(
        &self,
        creature: &mut Creature,
        hours: u32,
        rng: &mut dyn RandomSource,
        now: DateTime<Utc>,
    ) -> Result<CareOutcome, ActionError> {
        let cfg = &self.config.rest;
        Self::ensure_alive(creature, "rest")?;
        Self::check_magnitude("rest", hours, cfg.max_hours)?;
        let lethargy = if hours > cfg.excessive_above {
            Some(self.resolve(LETHARGY)?)
        } else {
            None
        };

        let before = creature.vitals;
        let hours = hours as i32;
        creature.last_cared_at = Some(now);

        if creature.vitals.fatigue < cfg.tired_at && hours > cfg.refuse_hours_above as i32 {
            creature.vitals.adjust(Stat::Stress, cfg.boredom_stress);
            creature
                .vitals
                .adjust(Stat::Happiness, -cfg.boredom_happiness_penalty);
            log::debug!("Creature {} refused to rest while not tired", creature.id);
            return Ok(self.refuse(
                format!("{} is not tired and gets bored lying around", creature.name),
                &before,
                creature,
                now,
            ));
        }

        let mut consequences = Vec::new();
        let (tier, message) = match lethargy {
            Some(info) => {
                let v = &mut creature.vitals;
                v.adjust(Stat::Fatigue, -cfg.fatigue_per_hour * hours);
                v.adjust(Stat::Energy, cfg.excessive_energy_per_hour * hours);
                v.adjust(Stat::Stress, cfg.excessive_stress);
                if rng.chance(cfg.excessive_sick_chance) {
                    consequences.extend(Self::afflict(creature, info).map(Consequence::Afflicted));
                }
                (
                    CareTier::Excessive,
                    format!(
                        "{} slept for {} hours and feels restless from the inactivity",
                        creature.name, hours
                    ),
                )
            }
            None => {
                let v = &mut creature.vitals;
                v.adjust(Stat::Fatigue, -cfg.fatigue_per_hour * hours);
                v.adjust(Stat::Energy, cfg.energy_per_hour * hours);
                v.adjust(Stat::Stress, -cfg.stress_relief_per_hour * hours);
                (
                    CareTier::Normal,
                    format!("{} rested for {} hours", creature.name, hours),
                )
            }
        };

        consequences.extend(self.settle(creature, "exhaustion", now).map(Consequence::Died));
        Ok(CareOutcome {
            message,
            tier,
            changes: Vitals::diff(&before, &creature.vitals),
            consequences,
            notes: Vec::new(),
        })
    }

    // ── Exercise ───────────────────────────────────────────────────────

    /// Exercise at `intensity` (1..=`max_intensity`).
    ///
    /// Refuses below `min_energy`. Exercising while very hungry or thirsty
    /// still happens but costs extra energy and stress (overheating).
    pub fn exercise(
        &self,
        creature: &mut Creature,
        intensity: u32,
        rng: &mut dyn RandomSource,
        now: DateTime<Utc>,
    ) -> Result<CareOutcome, ActionError> {
        let cfg = &self.config.exercise;
        Self::ensure_alive(creature, "exercise")?;
        Self::check_magnitude("exercise", intensity, cfg.max_intensity)?;
        if creature.vitals.energy < cfg.min_energy {
            return Err(ActionError::TooTired {
                energy: creature.vitals.energy,
                required: cfg.min_energy,
            });
        }
        let injury = if intensity > cfg.excessive_above {
            Some(self.resolve(JOINT_INJURY)?)
        } else {
            None
        };

        let before = creature.vitals;
        let i = intensity as i32;
        creature.last_cared_at = Some(now);
        let mut notes = Vec::new();
        let mut consequences = Vec::new();

        if creature.vitals.hunger > cfg.strain_above || creature.vitals.thirst > cfg.strain_above {
            creature
                .vitals
                .adjust(Stat::Energy, -cfg.strain_energy_penalty);
            creature.vitals.adjust(Stat::Stress, cfg.strain_stress);
            notes.push(format!(
                "{} overheated exercising on an empty stomach or without water",
                creature.name
            ));
        }

        let (tier, message) = match injury {
            Some(info) => {
                let v = &mut creature.vitals;
                v.adjust(Stat::Stress, -i / 3);
                v.adjust(Stat::Happiness, cfg.excessive_happiness);
                v.adjust(Stat::Hunger, i / 3);
                v.adjust(Stat::Thirst, i / 2);
                v.adjust(Stat::Fatigue, i / 2);
                v.adjust(Stat::Energy, -i / 2);
                if rng.chance(cfg.injury_chance) {
                    creature
                        .vitals
                        .adjust(Stat::Energy, -cfg.injury_energy_penalty);
                    consequences.extend(Self::afflict(creature, info).map(Consequence::Afflicted));
                }
                (
                    CareTier::Excessive,
                    format!("{} pushed through a brutal workout", creature.name),
                )
            }
            None => {
                let v = &mut creature.vitals;
                v.adjust(Stat::Stress, -i / 4);
                v.adjust(Stat::Happiness, cfg.normal_base_happiness + i / 10);
                v.adjust(Stat::Hunger, i / 5);
                v.adjust(Stat::Thirst, i / 4);
                v.adjust(Stat::Fatigue, i / 4);
                v.adjust(Stat::Energy, -i / 4);
                (
                    CareTier::Normal,
                    format!("{} enjoyed a good workout", creature.name),
                )
            }
        };

        consequences.extend(self.settle(creature, "exhaustion", now).map(Consequence::Died));
        Ok(CareOutcome {
            message,
            tier,
            changes: Vitals::diff(&before, &creature.vitals),
            consequences,
            notes,
        })
    }

    // ── Illness ────────────────────────────────────────────────────────

    /// Contract an affliction by key or display name.
    pub fn fall_ill(
        &self,
        creature: &mut Creature,
        key_or_name: &str,
        now: DateTime<Utc>,
    ) -> Result<IllnessOutcome, ActionError> {
        Self::ensure_alive(creature, "fall ill")?;
        let info = self.resolve(key_or_name)?;
        if info.category == AfflictionCategory::Terminal {
            return Err(ActionError::NotContractible(info.name.clone()));
        }
        if creature.has_affliction(&info.key) {
            return Err(ActionError::AlreadyAfflicted(info.name.clone()));
        }

        let before = creature.vitals;
        let summary = AfflictionSummary::from(info);
        Self::afflict(creature, info);
        let death = self.settle(creature, &format!("complications of {}", info.name), now);

        Ok(IllnessOutcome {
            message: format!("{} has fallen ill with {}", creature.name, info.name),
            affliction: summary,
            changes: Vitals::diff(&before, &creature.vitals),
            death,
        })
    }

    /// Cure one affliction, or every affliction when `key_or_name` is
    /// `None`.
    pub fn cure(
        &self,
        creature: &mut Creature,
        key_or_name: Option<&str>,
    ) -> Result<CureOutcome, ActionError> {
        Self::ensure_alive(creature, "be cured")?;
        let before = creature.vitals;

        let (cured, bonus, message) = match key_or_name {
            Some(query) => {
                let info = self.resolve(query)?;
                if !creature.afflictions.remove(&info.key) {
                    return Err(ActionError::NotAfflicted(info.name.clone()));
                }
                (
                    vec![info.key.clone()],
                    &self.config.cure.single_bonus,
                    format!("{} has recovered from {}", creature.name, info.name),
                )
            }
            None => {
                if creature.afflictions.is_empty() {
                    return Err(ActionError::NothingToCure);
                }
                let cured: Vec<String> = std::mem::take(&mut creature.afflictions)
                    .into_iter()
                    .collect();
                let message = format!(
                    "{} has been cured of {} affliction{}",
                    creature.name,
                    cured.len(),
                    if cured.len() == 1 { "" } else { "s" }
                );
                (cured, &self.config.cure.all_bonus, message)
            }
        };

        creature.vitals.apply(bonus);
        log::debug!("Creature {} cured of {:?}", creature.id, cured);
        Ok(CureOutcome {
            message,
            cured,
            changes: Vitals::diff(&before, &creature.vitals),
        })
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::afflictions::DEATH_MARKER;
    use crate::rng::FixedSequence;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    fn pet() -> Creature {
        Creature::new(1, "Whiskers", "cat")
    }

    fn with_engine<T>(f: impl FnOnce(VitalityEngine<'_>) -> T) -> T {
        let config = VitalityConfig::default();
        f(VitalityEngine::new(Catalog::standard(), &config))
    }

    // ── feed ──

    #[test]
    fn test_feed_normal() {
        with_engine(|engine| {
            let mut c = pet();
            c.vitals.hunger = 60;
            c.vitals.energy = 50;
            c.vitals.stress = 20;
            c.vitals.happiness = 50;
            let out = engine
                .feed(&mut c, 40, &mut FixedSequence::every_time(), now())
                .unwrap();
            assert_eq!(out.tier, CareTier::Normal);
            assert_eq!(c.vitals.hunger, 20);
            assert_eq!(c.vitals.energy, 70);
            assert_eq!(c.vitals.happiness, 55);
            assert_eq!(c.vitals.stress, 15);
            assert_eq!(c.last_cared_at, Some(now()));
            assert!(out.consequences.is_empty());
        });
    }

    #[test]
    fn test_feed_normal_energy_capped() {
        with_engine(|engine| {
            let mut c = pet();
            c.vitals.hunger = 80;
            c.vitals.energy = 90;
            engine
                .feed(&mut c, 80, &mut FixedSequence::never(), now())
                .unwrap();
            assert_eq!(c.vitals.energy, 100);
            assert_eq!(c.vitals.hunger, 0);
        });
    }

    #[test]
    fn test_feed_refused_when_full() {
        with_engine(|engine| {
            let mut c = pet();
            c.vitals.hunger = 5;
            let out = engine
                .feed(&mut c, 50, &mut FixedSequence::every_time(), now())
                .unwrap();
            assert_eq!(out.tier, CareTier::Refused);
            assert_eq!(c.vitals.stress, 10);
            assert_eq!(c.vitals.hunger, 5);
            assert_eq!(out.changes.stress, 10);
            assert_eq!(out.changes.hunger, 0);
            assert!(c.afflictions.is_empty());
            assert_eq!(c.last_cared_at, Some(now()));
        });
    }

    #[test]
    fn test_refusal_at_zero_energy_still_dies() {
        with_engine(|engine| {
            let mut rng = FixedSequence::never();
            let mut fed = pet();
            fed.vitals.hunger = 5;
            fed.vitals.energy = 0;
            let out = engine.feed(&mut fed, 50, &mut rng, now()).unwrap();
            assert_eq!(out.tier, CareTier::Refused);
            assert!(out.died());
            assert!(!fed.alive);
            assert!(fed.validate(Catalog::standard()).is_ok());

            let mut watered = pet();
            watered.vitals.energy = 0;
            assert!(engine.hydrate(&mut watered, 50, &mut rng, now()).unwrap().died());

            let mut rested = pet();
            rested.vitals.energy = 0;
            assert!(engine.rest(&mut rested, 8, &mut rng, now()).unwrap().died());
            assert_eq!(rested.death_cause.as_deref(), Some("exhaustion"));
        });
    }

    #[test]
    fn test_feed_small_snack_when_full_is_fine() {
        with_engine(|engine| {
            let mut c = pet();
            c.vitals.hunger = 5;
            let out = engine
                .feed(&mut c, 10, &mut FixedSequence::never(), now())
                .unwrap();
            assert_eq!(out.tier, CareTier::Normal);
        });
    }

    #[test]
    fn test_feed_excessive_no_adverse_outcome() {
        with_engine(|engine| {
            let mut c = pet();
            c.vitals.hunger = 50;
            let out = engine
                .feed(&mut c, 90, &mut FixedSequence::never(), now())
                .unwrap();
            assert_eq!(out.tier, CareTier::Excessive);
            assert_eq!(c.vitals.hunger, 0);
            assert_eq!(c.vitals.energy, 80);
            assert_eq!(c.vitals.stress, 30);
            assert!(c.afflictions.is_empty());
            assert_eq!(out.consequences, vec![Consequence::FeltSick]);
            assert_eq!(out.changes.energy, -20);
            assert_eq!(out.changes.stress, 30);
        });
    }

    #[test]
    fn test_feed_excessive_forced_affliction() {
        with_engine(|engine| {
            let mut c = pet();
            c.vitals.hunger = 50;
            // First draw survives the death roll, second triggers illness.
            let mut rng = FixedSequence::new(vec![0.99, 0.0]);
            let out = engine.feed(&mut c, 90, &mut rng, now()).unwrap();
            assert!(c.has_affliction(PRIMARY_DIGESTIVE));
            assert_eq!(out.afflictions().count(), 1);
            assert_eq!(c.vitals.hunger, 0);
            assert!(c.alive);
        });
    }

    #[test]
    fn test_feed_excessive_forced_death() {
        with_engine(|engine| {
            let mut c = pet();
            c.vitals.hunger = 50;
            let out = engine
                .feed(&mut c, 95, &mut FixedSequence::every_time(), now())
                .unwrap();
            assert!(out.died());
            assert!(!c.alive);
            assert_eq!(c.death_cause.as_deref(), Some("overfeeding"));
            assert_eq!(c.vitals.energy, 0);
            assert!(c.has_affliction(DEATH_MARKER));
        });
    }

    #[test]
    fn test_feed_garbage_tier_always_afflicts() {
        with_engine(|engine| {
            for draw in [0.0, 0.5, 0.999] {
                let mut c = pet();
                c.vitals.hunger = 70;
                let mut rng = FixedSequence::always(draw);
                let out = engine.feed(&mut c, 120, &mut rng, now()).unwrap();
                assert_eq!(out.tier, CareTier::Extreme);
                assert!(c.has_affliction(PRIMARY_DIGESTIVE));
                assert!(c.alive);
                assert_eq!(rng.draws(), 0);
            }
        });
    }

    #[test]
    fn test_feed_rejects_zero_and_oversized() {
        with_engine(|engine| {
            let mut c = pet();
            let before = c.clone();
            let mut rng = FixedSequence::never();
            assert!(matches!(
                engine.feed(&mut c, 0, &mut rng, now()),
                Err(ActionError::InvalidMagnitude { .. })
            ));
            assert!(matches!(
                engine.feed(&mut c, 10_000, &mut rng, now()),
                Err(ActionError::InvalidMagnitude { .. })
            ));
            assert_eq!(c, before);
        });
    }

    // ── hydrate ──

    #[test]
    fn test_hydrate_normal() {
        with_engine(|engine| {
            let mut c = pet();
            c.vitals.thirst = 70;
            c.vitals.energy = 50;
            let out = engine
                .hydrate(&mut c, 40, &mut FixedSequence::every_time(), now())
                .unwrap();
            assert_eq!(out.tier, CareTier::Normal);
            assert_eq!(c.vitals.thirst, 30);
            assert_eq!(c.vitals.energy, 60);
        });
    }

    #[test]
    fn test_hydrate_refused_when_hydrated() {
        with_engine(|engine| {
            let mut c = pet();
            c.vitals.thirst = 2;
            let out = engine
                .hydrate(&mut c, 60, &mut FixedSequence::never(), now())
                .unwrap();
            assert_eq!(out.tier, CareTier::Refused);
            assert_eq!(c.vitals.stress, 10);
        });
    }

    #[test]
    fn test_hydrate_excessive_energy_floor() {
        with_engine(|engine| {
            let mut c = pet();
            c.vitals.thirst = 90;
            c.vitals.energy = 12;
            let out = engine
                .hydrate(&mut c, 90, &mut FixedSequence::every_time(), now())
                .unwrap();
            assert_eq!(out.tier, CareTier::Excessive);
            assert!(c.has_affliction(WATER_BLOAT));
            assert_eq!(c.vitals.energy, 5);
            assert!(c.alive);
        });
    }

    #[test]
    fn test_hydrate_excessive_without_bloat() {
        with_engine(|engine| {
            let mut c = pet();
            c.vitals.thirst = 90;
            engine
                .hydrate(&mut c, 100, &mut FixedSequence::never(), now())
                .unwrap();
            assert!(c.afflictions.is_empty());
            assert_eq!(c.vitals.thirst, 0);
            assert_eq!(c.vitals.energy, 85);
            assert_eq!(c.vitals.stress, 15);
        });
    }

    // ── rest ──

    #[test]
    fn test_rest_normal() {
        with_engine(|engine| {
            let mut c = pet();
            c.vitals.fatigue = 60;
            c.vitals.energy = 30;
            c.vitals.stress = 20;
            let out = engine
                .rest(&mut c, 4, &mut FixedSequence::every_time(), now())
                .unwrap();
            assert_eq!(out.tier, CareTier::Normal);
            assert_eq!(c.vitals.fatigue, 28);
            assert_eq!(c.vitals.energy, 50);
            assert_eq!(c.vitals.stress, 12);
        });
    }

    #[test]
    fn test_rest_refused_when_not_tired() {
        with_engine(|engine| {
            let mut c = pet();
            c.vitals.fatigue = 10;
            let out = engine
                .rest(&mut c, 8, &mut FixedSequence::never(), now())
                .unwrap();
            assert_eq!(out.tier, CareTier::Refused);
            assert_eq!(c.vitals.stress, 10);
            assert_eq!(c.vitals.happiness, 95);
            assert_eq!(c.vitals.fatigue, 10);
        });
    }

    #[test]
    fn test_short_nap_allowed_when_not_tired() {
        with_engine(|engine| {
            let mut c = pet();
            c.vitals.fatigue = 10;
            let out = engine
                .rest(&mut c, 2, &mut FixedSequence::never(), now())
                .unwrap();
            assert_eq!(out.tier, CareTier::Normal);
            assert_eq!(c.vitals.fatigue, 0);
        });
    }

    #[test]
    fn test_rest_oversleep() {
        with_engine(|engine| {
            let mut c = pet();
            c.vitals.fatigue = 90;
            c.vitals.energy = 10;
            let out = engine
                .rest(&mut c, 14, &mut FixedSequence::every_time(), now())
                .unwrap();
            assert_eq!(out.tier, CareTier::Excessive);
            assert_eq!(c.vitals.fatigue, 0);
            assert_eq!(c.vitals.stress, 15 + 5);
            assert!(c.has_affliction(LETHARGY));
            // 10 + 84, then lethargy -20
            assert_eq!(c.vitals.energy, 74);
        });
    }

    // ── exercise ──

    #[test]
    fn test_exercise_too_tired_is_rejected() {
        with_engine(|engine| {
            let mut c = pet();
            c.vitals.energy = 10;
            let before = c.clone();
            let err = engine
                .exercise(&mut c, 30, &mut FixedSequence::never(), now())
                .unwrap_err();
            assert_eq!(
                err,
                ActionError::TooTired {
                    energy: 10,
                    required: 20
                }
            );
            assert_eq!(c, before);
        });
    }

    #[test]
    fn test_exercise_normal() {
        with_engine(|engine| {
            let mut c = pet();
            c.vitals.stress = 40;
            c.vitals.happiness = 50;
            let out = engine
                .exercise(&mut c, 40, &mut FixedSequence::every_time(), now())
                .unwrap();
            assert_eq!(out.tier, CareTier::Normal);
            assert_eq!(c.vitals.stress, 30);
            assert_eq!(c.vitals.happiness, 59);
            assert_eq!(c.vitals.hunger, 8);
            assert_eq!(c.vitals.thirst, 10);
            assert_eq!(c.vitals.fatigue, 10);
            assert_eq!(c.vitals.energy, 90);
            assert!(out.notes.is_empty());
        });
    }

    #[test]
    fn test_exercise_strained_when_hungry() {
        with_engine(|engine| {
            let mut c = pet();
            c.vitals.hunger = 90;
            let out = engine
                .exercise(&mut c, 40, &mut FixedSequence::never(), now())
                .unwrap();
            assert_eq!(out.notes.len(), 1);
            assert_eq!(c.vitals.energy, 100 - 10 - 10);
        });
    }

    #[test]
    fn test_exercise_overdone_with_injury() {
        with_engine(|engine| {
            let mut c = pet();
            c.vitals.stress = 60;
            let out = engine
                .exercise(&mut c, 90, &mut FixedSequence::every_time(), now())
                .unwrap();
            assert_eq!(out.tier, CareTier::Excessive);
            assert!(c.has_affliction(JOINT_INJURY));
            // 100 - 45 - 10 (injury) - 20 (sprain effects)
            assert_eq!(c.vitals.energy, 25);
        });
    }

    #[test]
    fn test_exercise_to_exhaustion_kills() {
        with_engine(|engine| {
            let mut c = pet();
            c.vitals.energy = 25;
            c.vitals.thirst = 95;
            let out = engine
                .exercise(&mut c, 100, &mut FixedSequence::every_time(), now())
                .unwrap();
            assert!(out.died());
            assert!(!c.alive);
            assert_eq!(c.death_cause.as_deref(), Some("exhaustion"));
        });
    }

    // ── fall_ill ──

    #[test]
    fn test_fall_ill_by_name() {
        with_engine(|engine| {
            let mut c = pet();
            let out = engine.fall_ill(&mut c, "Common Cold", now()).unwrap();
            assert_eq!(out.affliction.key, "common_cold");
            assert_eq!(out.affliction.duration.to_string(), "3-7 days");
            assert_eq!(c.vitals.energy, 90);
            assert_eq!(c.vitals.happiness, 90);
            assert_eq!(c.vitals.stress, 5);
            assert!(out.death.is_none());
        });
    }

    #[test]
    fn test_fall_ill_duplicate_rejected() {
        with_engine(|engine| {
            let mut c = pet();
            engine.fall_ill(&mut c, "flu", now()).unwrap();
            let before = c.clone();
            assert_eq!(
                engine.fall_ill(&mut c, "Flu", now()),
                Err(ActionError::AlreadyAfflicted("Flu".to_string()))
            );
            assert_eq!(c, before);
            assert_eq!(c.afflictions.len(), 1);
        });
    }

    #[test]
    fn test_fall_ill_unknown_rejected() {
        with_engine(|engine| {
            let mut c = pet();
            assert_eq!(
                engine.fall_ill(&mut c, "space madness", now()),
                Err(ActionError::UnknownAffliction("space madness".to_string()))
            );
            assert!(c.afflictions.is_empty());
        });
    }

    #[test]
    fn test_fall_ill_with_death_marker_rejected() {
        with_engine(|engine| {
            let mut c = pet();
            assert!(matches!(
                engine.fall_ill(&mut c, DEATH_MARKER, now()),
                Err(ActionError::NotContractible(_))
            ));
            assert!(c.alive);
        });
    }

    #[test]
    fn test_fall_ill_can_be_fatal() {
        with_engine(|engine| {
            let mut c = pet();
            c.vitals.energy = 30;
            let out = engine.fall_ill(&mut c, "pneumonia", now()).unwrap();
            assert!(out.death.is_some());
            assert!(!c.alive);
            assert_eq!(c.death_cause.as_deref(), Some("complications of Pneumonia"));
        });
    }

    // ── cure ──

    #[test]
    fn test_cure_single() {
        with_engine(|engine| {
            let mut c = pet();
            engine.fall_ill(&mut c, "flu", now()).unwrap();
            engine.fall_ill(&mut c, "fleas", now()).unwrap();
            let energy = c.vitals.energy;
            let out = engine.cure(&mut c, Some("Flu")).unwrap();
            assert_eq!(out.cured, vec!["flu".to_string()]);
            assert!(c.has_affliction("fleas"));
            assert_eq!(c.vitals.energy, energy + 10);
        });
    }

    #[test]
    fn test_cure_single_not_active() {
        with_engine(|engine| {
            let mut c = pet();
            assert_eq!(
                engine.cure(&mut c, Some("flu")),
                Err(ActionError::NotAfflicted("Flu".to_string()))
            );
        });
    }

    #[test]
    fn test_cure_all() {
        with_engine(|engine| {
            let mut c = pet();
            for key in ["flu", "fleas", "boredom"] {
                engine.fall_ill(&mut c, key, now()).unwrap();
            }
            let out = engine.cure(&mut c, None).unwrap();
            assert_eq!(out.cured.len(), 3);
            assert!(c.afflictions.is_empty());
            assert_eq!(out.changes.energy, 25);
        });
    }

    #[test]
    fn test_cure_all_when_healthy_rejected() {
        with_engine(|engine| {
            let mut c = pet();
            assert_eq!(engine.cure(&mut c, None), Err(ActionError::NothingToCure));
        });
    }

    // ── dead lockout ──

    #[test]
    fn test_dead_creature_rejects_care() {
        with_engine(|engine| {
            let mut c = pet();
            lifecycle::mark_dead(&mut c, "testing", now());
            let before = c.clone();
            let mut rng = FixedSequence::never();
            let errors = [
                engine.feed(&mut c, 10, &mut rng, now()).unwrap_err(),
                engine.hydrate(&mut c, 10, &mut rng, now()).unwrap_err(),
                engine.rest(&mut c, 2, &mut rng, now()).unwrap_err(),
                engine.exercise(&mut c, 10, &mut rng, now()).unwrap_err(),
                engine.fall_ill(&mut c, "flu", now()).unwrap_err(),
                engine.cure(&mut c, None).unwrap_err(),
            ];
            assert!(errors.iter().all(ActionError::is_dead_rejection));
            assert_eq!(c, before);
        });
    }
}
