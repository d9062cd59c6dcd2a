//! Grooming and treatments aimed at the hairball family of afflictions.
//!
//! Both actions apply a configured benefit vector and then give every active
//! family affliction one independent cure roll. [`assess_hair_health`]
//! summarises the family for display.

use std::collections::HashSet;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::afflictions::{AfflictionInfo, Catalog};
use crate::config::CoatCare;
use crate::creature::Creature;
use crate::outcome::{ActionError, DeathNotice, GroomOutcome, TreatmentOutcome};
use crate::rng::RandomSource;
use crate::stats::{StatChanges, Vitals};
use crate::vitality::VitalityEngine;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroomIntensity {
    Gentle,
    Normal,
    Intense,
}

impl fmt::Display for GroomIntensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GroomIntensity::Gentle => "gentle",
            GroomIntensity::Normal => "normal",
            GroomIntensity::Intense => "intense",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TreatmentKind {
    HairballPaste,
    FiberSupplement,
    SpecialDiet,
    Laxative,
    VeterinaryCare,
    MedicatedBath,
}

impl TreatmentKind {
    pub const ALL: [TreatmentKind; 6] = [
        TreatmentKind::HairballPaste,
        TreatmentKind::FiberSupplement,
        TreatmentKind::SpecialDiet,
        TreatmentKind::Laxative,
        TreatmentKind::VeterinaryCare,
        TreatmentKind::MedicatedBath,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TreatmentKind::HairballPaste => "Hairball paste",
            TreatmentKind::FiberSupplement => "Fibre supplement",
            TreatmentKind::SpecialDiet => "Special diet",
            TreatmentKind::Laxative => "Laxative",
            TreatmentKind::VeterinaryCare => "Veterinary care",
            TreatmentKind::MedicatedBath => "Medicated bath",
        }
    }
}

impl fmt::Display for TreatmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    None,
    Mild,
    Moderate,
    Severe,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HairHealthReport {
    /// Active hairball-family keys, in family order.
    pub active: Vec<String>,
    pub severity: Severity,
    /// Treatment names first, then prevention advice, without repeats.
    pub recommendations: Vec<String>,
}

fn active_family<'c>(creature: &Creature, catalog: &'c Catalog) -> Vec<&'c AfflictionInfo> {
    catalog
        .hairball_family()
        .into_iter()
        .filter(|info| creature.has_affliction(&info.key))
        .collect()
}

/// Summarise the creature's hairball-family afflictions.
pub fn assess_hair_health(creature: &Creature, catalog: &Catalog) -> HairHealthReport {
    let active = active_family(creature, catalog);
    let worst_energy = active.iter().map(|a| a.effects.energy).min().unwrap_or(0);
    let severity = match active.len() {
        0 => Severity::None,
        n if n >= 3 || worst_energy <= -35 => Severity::Severe,
        n if n == 2 || worst_energy <= -20 => Severity::Moderate,
        _ => Severity::Mild,
    };

    let mut seen = HashSet::new();
    let mut recommendations = Vec::new();
    let treatments = active
        .iter()
        .flat_map(|a| a.treatments.iter().map(|t| t.name().to_string()));
    let prevention = active.iter().flat_map(|a| a.prevention.iter().cloned());
    for rec in treatments.chain(prevention) {
        if seen.insert(rec.clone()) {
            recommendations.push(rec);
        }
    }

    HairHealthReport {
        active: active.iter().map(|a| a.key.clone()).collect(),
        severity,
        recommendations,
    }
}

struct CureRolls {
    cured: Vec<String>,
    still_active: Vec<String>,
}

impl VitalityEngine<'_> {
    fn roll_family_cures(
        &self,
        creature: &mut Creature,
        chance: f64,
        rng: &mut dyn RandomSource,
    ) -> CureRolls {
        let mut rolls = CureRolls {
            cured: Vec::new(),
            still_active: Vec::new(),
        };
        for info in active_family(creature, self.catalog()) {
            if rng.chance(chance) {
                creature.afflictions.remove(&info.key);
                rolls.cured.push(info.key.clone());
            } else {
                rolls.still_active.push(info.key.clone());
            }
        }
        if !rolls.cured.is_empty() {
            log::debug!("Creature {} hair care cured {:?}", creature.id, rolls.cured);
        }
        rolls
    }

    fn care_for_coat(
        &self,
        creature: &mut Creature,
        care: &CoatCare,
        rng: &mut dyn RandomSource,
        now: DateTime<Utc>,
    ) -> (StatChanges, CureRolls, Option<DeathNotice>) {
        let before = creature.vitals;
        creature.last_cared_at = Some(now);
        creature.vitals.apply(&care.benefits);
        let rolls = self.roll_family_cures(creature, care.cure_chance, rng);
        let death = self.settle(creature, "exhaustion", now);
        (Vitals::diff(&before, &creature.vitals), rolls, death)
    }

    pub fn groom(
        &self,
        creature: &mut Creature,
        intensity: GroomIntensity,
        rng: &mut dyn RandomSource,
        now: DateTime<Utc>,
    ) -> Result<GroomOutcome, ActionError> {
        Self::ensure_alive(creature, "be groomed")?;
        let care = self.config().hair_care.groom(intensity);
        let (changes, rolls, death) = self.care_for_coat(creature, care, rng, now);
        let message = match rolls.cured.len() {
            0 => format!("{} had a {} grooming session", creature.name, intensity),
            n => format!(
                "{} had a {} grooming session that cleared {} coat problem{}",
                creature.name,
                intensity,
                n,
                if n == 1 { "" } else { "s" }
            ),
        };
        Ok(GroomOutcome {
            message,
            intensity,
            changes,
            cured: rolls.cured,
            still_active: rolls.still_active,
            death,
        })
    }

    pub fn apply_treatment(
        &self,
        creature: &mut Creature,
        treatment: TreatmentKind,
        rng: &mut dyn RandomSource,
        now: DateTime<Utc>,
    ) -> Result<TreatmentOutcome, ActionError> {
        Self::ensure_alive(creature, "be treated")?;
        let care = self.config().hair_care.treatment(treatment);
        let (changes, rolls, death) = self.care_for_coat(creature, care, rng, now);
        let message = format!(
            "{} received {}; {} cleared, {} still active",
            creature.name,
            treatment.name().to_lowercase(),
            rolls.cured.len(),
            rolls.still_active.len()
        );
        Ok(TreatmentOutcome {
            message,
            treatment,
            changes,
            cured: rolls.cured,
            still_active: rolls.still_active,
            death,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::VitalityConfig;
    use crate::rng::FixedSequence;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    fn with_hairballs(keys: &[&str]) -> Creature {
        let mut c = Creature::new(3, "Mittens", "cat");
        c.vitals.energy = 50;
        c.vitals.happiness = 50;
        c.vitals.stress = 50;
        for k in keys {
            c.afflictions.insert(k.to_string());
        }
        c
    }

    #[test]
    fn test_groom_gentle_no_problems() {
        let config = VitalityConfig::default();
        let engine = VitalityEngine::new(Catalog::standard(), &config);
        let mut c = with_hairballs(&[]);
        let out = engine
            .groom(&mut c, GroomIntensity::Gentle, &mut FixedSequence::every_time(), now())
            .unwrap();
        assert_eq!(out.changes.happiness, 5);
        assert_eq!(out.changes.stress, -5);
        assert!(out.cured.is_empty());
        assert!(out.still_active.is_empty());
    }

    #[test]
    fn test_groom_rolls_once_per_family_member() {
        let config = VitalityConfig::default();
        let engine = VitalityEngine::new(Catalog::standard(), &config);
        let mut c = with_hairballs(&["hairball", "matted_fur", "flu"]);
        // Family order: hairball first, then matted_fur.
        let mut rng = FixedSequence::new(vec![0.1, 0.9]);
        let out = engine
            .groom(&mut c, GroomIntensity::Normal, &mut rng, now())
            .unwrap();
        assert_eq!(rng.draws(), 2);
        assert_eq!(out.cured, vec!["hairball".to_string()]);
        assert_eq!(out.still_active, vec!["matted_fur".to_string()]);
        assert!(c.has_affliction("flu"));
        assert!(!c.has_affliction("hairball"));
    }

    #[test]
    fn test_treatment_effectiveness_threshold() {
        let config = VitalityConfig::default();
        let engine = VitalityEngine::new(Catalog::standard(), &config);

        let mut rng = FixedSequence::always(0.85);

        let mut c = with_hairballs(&["trichobezoar"]);
        let out = engine
            .apply_treatment(&mut c, TreatmentKind::VeterinaryCare, &mut rng, now())
            .unwrap();
        assert_eq!(out.cured, vec!["trichobezoar".to_string()]);

        let mut c = with_hairballs(&["trichobezoar"]);
        let out = engine
            .apply_treatment(&mut c, TreatmentKind::SpecialDiet, &mut rng, now())
            .unwrap();
        assert!(out.cured.is_empty());
        assert_eq!(out.changes.hunger, 0);
        assert_eq!(out.changes.energy, 10);
    }

    #[test]
    fn test_dead_creature_cannot_be_groomed() {
        let config = VitalityConfig::default();
        let engine = VitalityEngine::new(Catalog::standard(), &config);
        let mut c = with_hairballs(&["hairball"]);
        engine.kill(&mut c, None, now());
        let before = c.clone();
        let mut rng = FixedSequence::every_time();
        let err = engine
            .groom(&mut c, GroomIntensity::Intense, &mut rng, now())
            .unwrap_err();
        assert!(err.is_dead_rejection());
        let err = engine
            .apply_treatment(&mut c, TreatmentKind::Laxative, &mut rng, now())
            .unwrap_err();
        assert!(err.is_dead_rejection());
        assert_eq!(c, before);
    }

    #[test]
    fn test_treatment_follows_config() {
        let mut config = VitalityConfig::default();
        config.hair_care.medicated_bath = CoatCare {
            benefits: StatChanges {
                happiness: 20,
                ..StatChanges::default()
            },
            cure_chance: 1.0,
        };
        let engine = VitalityEngine::new(Catalog::standard(), &config);
        let mut c = with_hairballs(&["matted_fur", "fur_loss"]);
        let mut rng = FixedSequence::always(0.99);
        let out = engine
            .apply_treatment(&mut c, TreatmentKind::MedicatedBath, &mut rng, now())
            .unwrap();
        assert_eq!(out.cured.len(), 2);
        assert_eq!(out.changes.happiness, 20);
        assert_eq!(out.changes.stress, 0);
    }

    #[test]
    fn test_intense_grooming_can_exhaust() {
        let config = VitalityConfig::default();
        let engine = VitalityEngine::new(Catalog::standard(), &config);
        let mut c = with_hairballs(&[]);
        c.vitals.energy = 8;
        let out = engine
            .groom(&mut c, GroomIntensity::Intense, &mut FixedSequence::never(), now())
            .unwrap();
        assert!(out.death.is_some());
        assert!(!c.alive);
    }

    #[test]
    fn test_assess_severity() {
        let catalog = Catalog::standard();
        assert_eq!(
            assess_hair_health(&with_hairballs(&["flu"]), catalog).severity,
            Severity::None
        );
        assert_eq!(
            assess_hair_health(&with_hairballs(&["matted_fur"]), catalog).severity,
            Severity::Mild
        );
        assert_eq!(
            assess_hair_health(&with_hairballs(&["hairball", "fur_loss"]), catalog).severity,
            Severity::Moderate
        );
        assert_eq!(
            assess_hair_health(&with_hairballs(&["trichobezoar"]), catalog).severity,
            Severity::Severe
        );
        assert_eq!(
            assess_hair_health(&with_hairballs(&["hairball", "constipation", "fur_loss"]), catalog)
                .severity,
            Severity::Severe
        );
    }

    #[test]
    fn test_recommendations_deduplicated_treatments_first() {
        let report = assess_hair_health(
            &with_hairballs(&["constipation", "hairball"]),
            Catalog::standard(),
        );
        assert_eq!(report.active, vec!["hairball".to_string(), "constipation".to_string()]);
        let recs = &report.recommendations;
        let unique: HashSet<_> = recs.iter().collect();
        assert_eq!(unique.len(), recs.len());
        assert!(recs.contains(&"Hairball paste".to_string()));
        assert!(recs.contains(&"Laxative".to_string()));
        let first_prevention = recs
            .iter()
            .position(|r| r.starts_with("Brush"))
            .unwrap();
        let last_treatment = recs
            .iter()
            .rposition(|r| TreatmentKind::ALL.iter().any(|t| t.name() == r))
            .unwrap();
        assert!(last_treatment < first_prevention);
    }
}
