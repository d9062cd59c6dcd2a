//! The six vitality stats and clamped arithmetic over them.
//!
//! Every stat is an integer in `[0, 100]`. Energy and happiness are "good"
//! stats (higher is better); hunger, thirst, fatigue and stress are "bad"
//! stats (higher is worse). All mutation goes through [`Vitals::adjust`] or
//! [`Vitals::set`], which clamp, so no code path can leave a stat outside
//! the range.

use serde::{Deserialize, Serialize};

/// Lowest value a stat can hold.
pub const STAT_MIN: i32 = 0;

/// Highest value a stat can hold.
pub const STAT_MAX: i32 = 100;

/// Clamp a raw integer into the stat range.
pub fn clamp_stat(value: i32) -> u8 {
    value.clamp(STAT_MIN, STAT_MAX) as u8
}

/// One of the six vitality axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stat {
    Energy,
    Happiness,
    Hunger,
    Thirst,
    Fatigue,
    Stress,
}

impl Stat {
    /// All stats in display order.
    pub const ALL: [Stat; 6] = [
        Stat::Energy,
        Stat::Happiness,
        Stat::Hunger,
        Stat::Thirst,
        Stat::Fatigue,
        Stat::Stress,
    ];

    /// Whether a higher value of this stat is better for the creature.
    pub fn higher_is_better(self) -> bool {
        matches!(self, Stat::Energy | Stat::Happiness)
    }

    pub fn name(self) -> &'static str {
        match self {
            Stat::Energy => "energy",
            Stat::Happiness => "happiness",
            Stat::Hunger => "hunger",
            Stat::Thirst => "thirst",
            Stat::Fatigue => "fatigue",
            Stat::Stress => "stress",
        }
    }
}

/// Raw numeric state of a creature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vitals {
    pub energy: u8,
    pub happiness: u8,
    pub hunger: u8,
    pub thirst: u8,
    pub fatigue: u8,
    pub stress: u8,
}

impl Default for Vitals {
    /// A freshly created, fully healthy creature.
    fn default() -> Self {
        Self {
            energy: 100,
            happiness: 100,
            hunger: 0,
            thirst: 0,
            fatigue: 0,
            stress: 0,
        }
    }
}

impl Vitals {
    pub fn get(&self, stat: Stat) -> u8 {
        match stat {
            Stat::Energy => self.energy,
            Stat::Happiness => self.happiness,
            Stat::Hunger => self.hunger,
            Stat::Thirst => self.thirst,
            Stat::Fatigue => self.fatigue,
            Stat::Stress => self.stress,
        }
    }

    fn slot(&mut self, stat: Stat) -> &mut u8 {
        match stat {
            Stat::Energy => &mut self.energy,
            Stat::Happiness => &mut self.happiness,
            Stat::Hunger => &mut self.hunger,
            Stat::Thirst => &mut self.thirst,
            Stat::Fatigue => &mut self.fatigue,
            Stat::Stress => &mut self.stress,
        }
    }

    /// Set a stat, clamping into range.
    pub fn set(&mut self, stat: Stat, value: i32) {
        *self.slot(stat) = clamp_stat(value);
    }

    /// Add a signed delta to a stat, clamping into range.
    ///
    /// Returns the change actually applied after clamping.
    pub fn adjust(&mut self, stat: Stat, delta: i32) -> i32 {
        let slot = self.slot(stat);
        let before = *slot as i32;
        *slot = clamp_stat(before.saturating_add(delta));
        *slot as i32 - before
    }

    /// Apply every non-zero field of a change vector.
    pub fn apply(&mut self, changes: &StatChanges) {
        for stat in Stat::ALL {
            let delta = changes.get(stat);
            if delta != 0 {
                self.adjust(stat, delta);
            }
        }
    }

    /// Raise a stat to at least `floor`.
    pub fn floor_at(&mut self, stat: Stat, floor: u8) {
        let slot = self.slot(stat);
        if *slot < floor {
            *slot = floor.min(STAT_MAX as u8);
        }
    }

    /// Whether every stat lies within `[STAT_MIN, STAT_MAX]`.
    ///
    /// Always true for values built through this API; used to check
    /// deserialized records.
    pub fn in_range(&self) -> bool {
        Stat::ALL
            .iter()
            .all(|s| (self.get(*s) as i32) <= STAT_MAX)
    }

    /// Per-stat difference `after - before`.
    pub fn diff(before: &Vitals, after: &Vitals) -> StatChanges {
        let mut changes = StatChanges::default();
        for stat in Stat::ALL {
            changes.set(stat, after.get(stat) as i32 - before.get(stat) as i32);
        }
        changes
    }
}

/// Signed per-stat deltas. Used both as requested changes (config benefit
/// vectors) and as reported changes (difference before/after an action).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct StatChanges {
    pub energy: i32,
    pub happiness: i32,
    pub hunger: i32,
    pub thirst: i32,
    pub fatigue: i32,
    pub stress: i32,
}

impl StatChanges {
    pub fn get(&self, stat: Stat) -> i32 {
        match stat {
            Stat::Energy => self.energy,
            Stat::Happiness => self.happiness,
            Stat::Hunger => self.hunger,
            Stat::Thirst => self.thirst,
            Stat::Fatigue => self.fatigue,
            Stat::Stress => self.stress,
        }
    }

    pub fn set(&mut self, stat: Stat, value: i32) {
        match stat {
            Stat::Energy => self.energy = value,
            Stat::Happiness => self.happiness = value,
            Stat::Hunger => self.hunger = value,
            Stat::Thirst => self.thirst = value,
            Stat::Fatigue => self.fatigue = value,
            Stat::Stress => self.stress = value,
        }
    }

    pub fn is_zero(&self) -> bool {
        Stat::ALL.iter().all(|s| self.get(*s) == 0)
    }
}
