//! Human-readable condition labels, derived from the current stats on
//! demand and never stored.

use serde::Serialize;

use crate::afflictions::Catalog;
use crate::creature::{Creature, HealthStatus};
use crate::stats::Vitals;

pub fn energy_label(energy: u8) -> &'static str {
    match energy {
        0..=14 => "exhausted",
        15..=39 => "tired",
        40..=69 => "normal",
        _ => "energetic",
    }
}

pub fn happiness_label(happiness: u8) -> &'static str {
    match happiness {
        0..=14 => "miserable",
        15..=39 => "sad",
        40..=69 => "content",
        _ => "happy",
    }
}

pub fn hunger_label(hunger: u8) -> &'static str {
    match hunger {
        0..=39 => "satisfied",
        40..=79 => "hungry",
        _ => "starving",
    }
}

pub fn thirst_label(thirst: u8) -> &'static str {
    match thirst {
        0..=39 => "hydrated",
        40..=79 => "thirsty",
        _ => "dehydrated",
    }
}

pub fn fatigue_label(fatigue: u8) -> &'static str {
    match fatigue {
        0..=39 => "rested",
        40..=79 => "tired",
        _ => "exhausted",
    }
}

pub fn stress_label(stress: u8) -> &'static str {
    match stress {
        0..=39 => "calm",
        40..=74 => "tense",
        _ => "overwhelmed",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatLabels {
    pub energy: &'static str,
    pub happiness: &'static str,
    pub hunger: &'static str,
    pub thirst: &'static str,
    pub fatigue: &'static str,
    pub stress: &'static str,
}

impl StatLabels {
    pub fn of(v: &Vitals) -> Self {
        Self {
            energy: energy_label(v.energy),
            happiness: happiness_label(v.happiness),
            hunger: hunger_label(v.hunger),
            thirst: thirst_label(v.thirst),
            fatigue: fatigue_label(v.fatigue),
            stress: stress_label(v.stress),
        }
    }

    /// Whether any stat sits in its worst bucket.
    pub fn any_critical(&self) -> bool {
        self.energy == "exhausted"
            || self.happiness == "miserable"
            || self.hunger == "starving"
            || self.thirst == "dehydrated"
            || self.fatigue == "exhausted"
            || self.stress == "overwhelmed"
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConditionReport {
    pub labels: StatLabels,
    pub status: HealthStatus,
    /// Symptom text of each active affliction, in key order.
    pub symptoms: Vec<String>,
    /// Living and either sick or critical on some stat.
    pub needs_attention: bool,
}

pub fn describe(creature: &Creature, catalog: &Catalog) -> ConditionReport {
    let labels = StatLabels::of(&creature.vitals);
    let status = creature.health_status();
    let symptoms = creature
        .afflictions
        .iter()
        .filter_map(|key| catalog.lookup(key).ok())
        .map(|info| info.symptoms.clone())
        .collect();
    let needs_attention = status == HealthStatus::Sick
        || (status == HealthStatus::Healthy && labels.any_critical());
    ConditionReport {
        labels,
        status,
        symptoms,
        needs_attention,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_boundaries() {
        assert_eq!(energy_label(100), "energetic");
        assert_eq!(energy_label(70), "energetic");
        assert_eq!(energy_label(69), "normal");
        assert_eq!(energy_label(15), "tired");
        assert_eq!(energy_label(14), "exhausted");
        assert_eq!(hunger_label(39), "satisfied");
        assert_eq!(hunger_label(40), "hungry");
        assert_eq!(hunger_label(80), "starving");
        assert_eq!(stress_label(75), "overwhelmed");
        assert_eq!(thirst_label(0), "hydrated");
        assert_eq!(fatigue_label(50), "tired");
        assert_eq!(happiness_label(0), "miserable");
    }

    #[test]
    fn test_fresh_creature_needs_nothing() {
        let report = describe(&Creature::new(1, "Rex", "dog"), Catalog::standard());
        assert_eq!(report.status, HealthStatus::Healthy);
        assert_eq!(report.labels.energy, "energetic");
        assert_eq!(report.labels.hunger, "satisfied");
        assert!(report.symptoms.is_empty());
        assert!(!report.needs_attention);
    }

    #[test]
    fn test_sick_creature_lists_symptoms() {
        let mut c = Creature::new(1, "Rex", "dog");
        c.afflictions.insert("fleas".to_string());
        c.afflictions.insert("flu".to_string());
        let report = describe(&c, Catalog::standard());
        assert_eq!(report.status, HealthStatus::Sick);
        assert_eq!(report.symptoms.len(), 2);
        assert!(report.symptoms[0].contains("scratching"));
        assert!(report.needs_attention);
    }

    #[test]
    fn test_starving_creature_needs_attention() {
        let mut c = Creature::new(1, "Rex", "dog");
        c.vitals.hunger = 95;
        assert!(describe(&c, Catalog::standard()).needs_attention);
    }

    #[test]
    fn test_labels_follow_stat_changes() {
        let mut c = Creature::new(1, "Rex", "dog");
        c.vitals.energy = 10;
        assert_eq!(describe(&c, Catalog::standard()).labels.energy, "exhausted");
        c.vitals.energy = 50;
        assert_eq!(describe(&c, Catalog::standard()).labels.energy, "normal");
    }
}
