//! Tunable thresholds, penalties and probabilities for every care action.
//!
//! The magnitude ladders (normal / excessive / extreme) share one shape but
//! their constants are game-balance values, not invariants. They live here
//! so a host can override them from JSON; every struct is
//! `#[serde(default)]`, so a partial document only replaces the fields it
//! names.

use serde::{Deserialize, Serialize};

use crate::hair_care::{GroomIntensity, TreatmentKind};
use crate::stats::StatChanges;

/// All engine tuning in one place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VitalityConfig {
    pub feed: FeedConfig,
    pub hydrate: HydrateConfig,
    pub rest: RestConfig,
    pub exercise: ExerciseConfig,
    pub cure: CureConfig,
    pub hair_care: HairCareConfig,
    pub lifecycle: LifecycleConfig,
    pub decay: DecayConfig,
}

impl VitalityConfig {
    /// Parse a (possibly partial) JSON override on top of the defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Largest portion accepted at all.
    pub max_amount: u32,
    /// Hunger below this counts as "already full".
    pub full_below: u8,
    /// A full creature refuses portions larger than this.
    pub refuse_amount_above: u32,
    pub refusal_stress: i32,
    /// Portions above this are in the excessive tier.
    pub excessive_above: u32,
    /// Portions above this are garbage tier.
    pub garbage_above: u32,
    pub excessive_energy_penalty: i32,
    pub excessive_stress: i32,
    pub excessive_death_chance: f64,
    pub excessive_sick_chance: f64,
    pub garbage_energy_penalty: i32,
    pub garbage_stress: i32,
    pub garbage_happiness_penalty: i32,
    pub normal_happiness: i32,
    pub normal_stress_relief: i32,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            max_amount: 500,
            full_below: 10,
            refuse_amount_above: 30,
            refusal_stress: 10,
            excessive_above: 80,
            garbage_above: 100,
            excessive_energy_penalty: 20,
            excessive_stress: 30,
            excessive_death_chance: 0.05,
            excessive_sick_chance: 0.3,
            garbage_energy_penalty: 30,
            garbage_stress: 40,
            garbage_happiness_penalty: 10,
            normal_happiness: 5,
            normal_stress_relief: 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HydrateConfig {
    pub max_amount: u32,
    /// Thirst below this counts as "already hydrated".
    pub hydrated_below: u8,
    pub refuse_amount_above: u32,
    pub refusal_stress: i32,
    pub excessive_above: u32,
    pub excessive_energy_penalty: i32,
    pub excessive_stress: i32,
    pub excessive_sick_chance: f64,
    /// Energy never drops below this through hydration.
    pub energy_floor: u8,
    /// Normal hydration restores `amount / energy_divisor` energy.
    pub energy_divisor: u32,
    pub normal_happiness: i32,
    pub normal_stress_relief: i32,
}

impl Default for HydrateConfig {
    fn default() -> Self {
        Self {
            max_amount: 500,
            hydrated_below: 10,
            refuse_amount_above: 30,
            refusal_stress: 10,
            excessive_above: 80,
            excessive_energy_penalty: 15,
            excessive_stress: 15,
            excessive_sick_chance: 0.25,
            energy_floor: 5,
            energy_divisor: 4,
            normal_happiness: 3,
            normal_stress_relief: 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RestConfig {
    pub max_hours: u32,
    /// Fatigue below this counts as "not tired".
    pub tired_at: u8,
    /// A rested creature refuses naps longer than this.
    pub refuse_hours_above: u32,
    pub boredom_stress: i32,
    pub boredom_happiness_penalty: i32,
    pub excessive_above: u32,
    pub fatigue_per_hour: i32,
    pub energy_per_hour: i32,
    pub excessive_energy_per_hour: i32,
    pub stress_relief_per_hour: i32,
    pub excessive_stress: i32,
    pub excessive_sick_chance: f64,
}

impl Default for RestConfig {
    fn default() -> Self {
        Self {
            max_hours: 24,
            tired_at: 20,
            refuse_hours_above: 4,
            boredom_stress: 10,
            boredom_happiness_penalty: 5,
            excessive_above: 12,
            fatigue_per_hour: 8,
            energy_per_hour: 5,
            excessive_energy_per_hour: 6,
            stress_relief_per_hour: 2,
            excessive_stress: 15,
            excessive_sick_chance: 0.2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExerciseConfig {
    /// Below this energy the creature refuses to exercise.
    pub min_energy: u8,
    /// Hunger or thirst above this triggers the overheating penalty.
    pub strain_above: u8,
    pub strain_energy_penalty: i32,
    pub strain_stress: i32,
    pub max_intensity: u32,
    pub excessive_above: u32,
    pub excessive_happiness: i32,
    pub normal_base_happiness: i32,
    pub injury_chance: f64,
    pub injury_energy_penalty: i32,
}

impl Default for ExerciseConfig {
    fn default() -> Self {
        Self {
            min_energy: 20,
            strain_above: 80,
            strain_energy_penalty: 10,
            strain_stress: 5,
            max_intensity: 100,
            excessive_above: 70,
            excessive_happiness: 15,
            normal_base_happiness: 5,
            injury_chance: 0.2,
            injury_energy_penalty: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CureConfig {
    /// Bonus for curing a single affliction.
    pub single_bonus: StatChanges,
    /// Bonus for clearing every affliction at once.
    pub all_bonus: StatChanges,
}

impl Default for CureConfig {
    fn default() -> Self {
        Self {
            single_bonus: StatChanges {
                energy: 10,
                happiness: 10,
                stress: -10,
                ..StatChanges::default()
            },
            all_bonus: StatChanges {
                energy: 25,
                happiness: 20,
                stress: -20,
                ..StatChanges::default()
            },
        }
    }
}

/// What one grooming session or treatment does: a fixed benefit vector and
/// the chance of clearing each active hairball-family affliction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoatCare {
    pub benefits: StatChanges,
    pub cure_chance: f64,
}

const fn coat_care(
    energy: i32,
    happiness: i32,
    hunger: i32,
    stress: i32,
    cure_chance: f64,
) -> CoatCare {
    CoatCare {
        benefits: StatChanges {
            energy,
            happiness,
            hunger,
            thirst: 0,
            fatigue: 0,
            stress,
        },
        cure_chance,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HairCareConfig {
    pub gentle_groom: CoatCare,
    pub normal_groom: CoatCare,
    /// Tugging at mats hurts.
    pub intense_groom: CoatCare,
    pub hairball_paste: CoatCare,
    pub fiber_supplement: CoatCare,
    pub special_diet: CoatCare,
    pub laxative: CoatCare,
    pub veterinary_care: CoatCare,
    pub medicated_bath: CoatCare,
}

impl HairCareConfig {
    pub fn groom(&self, intensity: GroomIntensity) -> &CoatCare {
        match intensity {
            GroomIntensity::Gentle => &self.gentle_groom,
            GroomIntensity::Normal => &self.normal_groom,
            GroomIntensity::Intense => &self.intense_groom,
        }
    }

    pub fn treatment(&self, kind: TreatmentKind) -> &CoatCare {
        match kind {
            TreatmentKind::HairballPaste => &self.hairball_paste,
            TreatmentKind::FiberSupplement => &self.fiber_supplement,
            TreatmentKind::SpecialDiet => &self.special_diet,
            TreatmentKind::Laxative => &self.laxative,
            TreatmentKind::VeterinaryCare => &self.veterinary_care,
            TreatmentKind::MedicatedBath => &self.medicated_bath,
        }
    }
}

impl Default for HairCareConfig {
    fn default() -> Self {
        Self {
            gentle_groom: coat_care(0, 5, 0, -5, 0.2),
            normal_groom: coat_care(-5, 10, 0, -10, 0.4),
            intense_groom: coat_care(-10, -5, 0, 5, 0.7),
            hairball_paste: coat_care(5, -5, 0, 0, 0.6),
            fiber_supplement: coat_care(5, 0, -5, 0, 0.5),
            special_diet: coat_care(10, 5, -10, 0, 0.4),
            laxative: coat_care(-5, 0, 0, 5, 0.7),
            veterinary_care: coat_care(10, 0, 0, 10, 0.9),
            medicated_bath: coat_care(0, -5, 0, 10, 0.5),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifecycleConfig {
    /// Species that can always be revived.
    pub immortal_species: Vec<String>,
    /// Species that can be revived only within `revival_window_secs` of
    /// death.
    pub temporarily_revivable_species: Vec<String>,
    pub revival_window_secs: i64,
    /// Energy a revived creature starts with.
    pub revival_energy: u8,
    pub default_death_cause: String,
}

impl Default for LifecycleConfig {
    fn default() -> Self {
        Self {
            immortal_species: vec![
                "phoenix".to_string(),
                "vampire".to_string(),
                "robot".to_string(),
                "deity".to_string(),
            ],
            temporarily_revivable_species: vec![
                "cat".to_string(),
                "dragon".to_string(),
                "mutant".to_string(),
                "superhero".to_string(),
            ],
            revival_window_secs: 7 * 24 * 60 * 60,
            revival_energy: 20,
            default_death_cause: "unknown causes".to_string(),
        }
    }
}

/// Per-hour drift applied between care actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecayConfig {
    pub hunger_per_hour: f32,
    pub thirst_per_hour: f32,
    pub fatigue_per_hour: f32,
    pub stress_per_hour: f32,
    pub happiness_loss_per_hour: f32,
    pub energy_loss_per_hour: f32,
    /// Extra energy drained per hour for each active affliction.
    pub affliction_drain_per_hour: f32,
    /// Hunger or thirst at 100 drains this much extra energy per hour.
    pub deprivation_drain_per_hour: f32,
}

impl Default for DecayConfig {
    fn default() -> Self {
        Self {
            hunger_per_hour: 4.0,
            thirst_per_hour: 6.0,
            fatigue_per_hour: 3.0,
            stress_per_hour: 1.0,
            happiness_loss_per_hour: 2.0,
            energy_loss_per_hour: 1.0,
            affliction_drain_per_hour: 0.5,
            deprivation_drain_per_hour: 4.0,
        }
    }
}
