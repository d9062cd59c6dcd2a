//! The affliction catalog — every named condition a creature can suffer.
//!
//! Each entry carries a stat-effect vector (applied once when the affliction
//! is contracted), a duration class, and symptom text. The hairball family
//! additionally carries a long description, applicable treatments and
//! prevention advice, which the hair-care subsystem turns into
//! recommendations.
//!
//! The built-in table is built once per process by [`Catalog::standard`] and
//! never mutated afterwards. Lookup accepts either the stable key
//! (`"food_poisoning"`) or the display name (`"Food Poisoning"`), because
//! callers use both interchangeably.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::hair_care::TreatmentKind;
use crate::stats::StatChanges;

/// The affliction every digestive accident (overfeeding, garbage eating)
/// produces.
pub const PRIMARY_DIGESTIVE: &str = "indigestion";
/// Contracted by drinking far too much at once.
pub const WATER_BLOAT: &str = "water_bloat";
/// Contracted by sleeping far too long.
pub const LETHARGY: &str = "lethargy";
/// Contracted by over-exercising.
pub const JOINT_INJURY: &str = "sprained_joint";
/// Marker placed in the affliction set of every dead creature.
pub const DEATH_MARKER: &str = "death";
/// Added on revival so a revived creature is never fully healthy.
pub const REVIVAL_WEAKNESS: &str = "revival_weakness";

/// Identifiers of the hair/digestive family targeted by grooming and
/// hairball treatments.
pub const HAIRBALL_FAMILY: &[&str] = &[
    "hairball",
    "hairball_blockage",
    "trichobezoar",
    "matted_fur",
    "excessive_shedding",
    "fur_loss",
    "constipation",
];

/// Broad grouping of afflictions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AfflictionCategory {
    Digestive,
    Hair,
    Respiratory,
    Skin,
    Musculoskeletal,
    Mental,
    Infectious,
    Environmental,
    Supernatural,
    Terminal,
}

/// Signed deltas applied when an affliction is contracted.
///
/// Energy and happiness are normally negative, stress positive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AfflictionEffects {
    pub energy: i32,
    pub happiness: i32,
    pub stress: i32,
}

impl AfflictionEffects {
    pub const fn new(energy: i32, happiness: i32, stress: i32) -> Self {
        Self {
            energy,
            happiness,
            stress,
        }
    }

    pub fn as_changes(&self) -> StatChanges {
        StatChanges {
            energy: self.energy,
            happiness: self.happiness,
            stress: self.stress,
            ..StatChanges::default()
        }
    }
}

/// How long an affliction typically lasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DurationClass {
    Hours { min: u16, max: u16 },
    Days { min: u16, max: u16 },
    Chronic,
    Variable,
    Permanent,
}

impl fmt::Display for DurationClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DurationClass::Hours { min, max } => write!(f, "{}-{} hours", min, max),
            DurationClass::Days { min, max } => write!(f, "{}-{} days", min, max),
            DurationClass::Chronic => write!(f, "chronic"),
            DurationClass::Variable => write!(f, "variable"),
            DurationClass::Permanent => write!(f, "permanent"),
        }
    }
}

/// A catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AfflictionInfo {
    pub key: String,
    pub name: String,
    pub category: AfflictionCategory,
    pub effects: AfflictionEffects,
    pub duration: DurationClass,
    pub symptoms: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub treatments: Vec<TreatmentKind>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub prevention: Vec<String>,
}

impl AfflictionInfo {
    pub fn is_hairball_family(&self) -> bool {
        HAIRBALL_FAMILY.contains(&self.key.as_str())
    }
}

/// Errors from building or querying a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    NotFound(String),
    DuplicateKey(String),
    DuplicateName(String),
    Parse(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::NotFound(q) => write!(f, "No affliction called '{}' exists", q),
            CatalogError::DuplicateKey(k) => write!(f, "Duplicate affliction key '{}'", k),
            CatalogError::DuplicateName(n) => write!(f, "Duplicate affliction name '{}'", n),
            CatalogError::Parse(e) => write!(f, "Catalog parse error: {}", e),
        }
    }
}

impl std::error::Error for CatalogError {}

/// Immutable affliction table with a key index and a display-name index.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<AfflictionInfo>,
    by_key: HashMap<String, usize>,
    by_name: HashMap<String, usize>,
}

fn name_index_key(name: &str) -> String {
    name.trim().to_lowercase()
}

impl Catalog {
    /// The built-in catalog, built on first use and shared for the lifetime
    /// of the process.
    pub fn standard() -> &'static Catalog {
        static STANDARD: OnceLock<Catalog> = OnceLock::new();
        STANDARD.get_or_init(|| {
            Catalog::index(STANDARD_ENTRIES.iter().map(Entry::to_info).collect())
        })
    }

    /// Build a catalog from caller-supplied entries, rejecting duplicate keys
    /// or display names.
    pub fn from_entries(entries: Vec<AfflictionInfo>) -> Result<Catalog, CatalogError> {
        let mut keys = HashSet::new();
        let mut names = HashSet::new();
        for info in &entries {
            if !keys.insert(info.key.as_str()) {
                return Err(CatalogError::DuplicateKey(info.key.clone()));
            }
            if !names.insert(name_index_key(&info.name)) {
                return Err(CatalogError::DuplicateName(info.name.clone()));
            }
        }
        Ok(Catalog::index(entries))
    }

    /// Parse a JSON array of entries.
    pub fn from_json(json: &str) -> Result<Catalog, CatalogError> {
        let entries: Vec<AfflictionInfo> =
            serde_json::from_str(json).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Catalog::from_entries(entries)
    }

    fn index(entries: Vec<AfflictionInfo>) -> Catalog {
        let mut by_key = HashMap::with_capacity(entries.len());
        let mut by_name = HashMap::with_capacity(entries.len());
        for (i, info) in entries.iter().enumerate() {
            by_key.insert(info.key.clone(), i);
            by_name.insert(name_index_key(&info.name), i);
        }
        Catalog {
            entries,
            by_key,
            by_name,
        }
    }

    /// Resolve by exact key, falling back to display name
    /// (case-insensitive).
    pub fn lookup(&self, key_or_name: &str) -> Result<&AfflictionInfo, CatalogError> {
        self.by_key
            .get(key_or_name)
            .or_else(|| self.by_name.get(&name_index_key(key_or_name)))
            .map(|&i| &self.entries[i])
            .ok_or_else(|| CatalogError::NotFound(key_or_name.to_string()))
    }

    /// Whether `key` is an exact catalog key.
    pub fn contains(&self, key: &str) -> bool {
        self.by_key.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AfflictionInfo> {
        self.entries.iter()
    }

    /// All entries tagged with `category`, in table order.
    pub fn in_category(&self, category: AfflictionCategory) -> Vec<&AfflictionInfo> {
        self.entries
            .iter()
            .filter(|a| a.category == category)
            .collect()
    }

    /// The hairball family members present in this catalog.
    pub fn hairball_family(&self) -> Vec<&AfflictionInfo> {
        HAIRBALL_FAMILY
            .iter()
            .filter_map(|key| self.by_key.get(*key).map(|&i| &self.entries[i]))
            .collect()
    }
}

// ── Built-in table ─────────────────────────────────────────────────────

struct Entry {
    key: &'static str,
    name: &'static str,
    category: AfflictionCategory,
    effects: AfflictionEffects,
    duration: DurationClass,
    symptoms: &'static str,
    description: Option<&'static str>,
    treatments: &'static [TreatmentKind],
    prevention: &'static [&'static str],
}

impl Entry {
    fn to_info(&self) -> AfflictionInfo {
        AfflictionInfo {
            key: self.key.to_string(),
            name: self.name.to_string(),
            category: self.category,
            effects: self.effects,
            duration: self.duration,
            symptoms: self.symptoms.to_string(),
            description: self.description.map(str::to_string),
            treatments: self.treatments.to_vec(),
            prevention: self.prevention.iter().map(|s| s.to_string()).collect(),
        }
    }
}

const fn basic(
    key: &'static str,
    name: &'static str,
    category: AfflictionCategory,
    effects: AfflictionEffects,
    duration: DurationClass,
    symptoms: &'static str,
) -> Entry {
    Entry {
        key,
        name,
        category,
        effects,
        duration,
        symptoms,
        description: None,
        treatments: &[],
        prevention: &[],
    }
}

const fn days(min: u16, max: u16) -> DurationClass {
    DurationClass::Days { min, max }
}

const fn hours(min: u16, max: u16) -> DurationClass {
    DurationClass::Hours { min, max }
}

use AfflictionCategory as C;
use TreatmentKind as T;

const HAIRBALL_PREVENTION: &[&str] = &[
    "Brush the coat daily, more often while shedding",
    "Feed a high-fibre diet",
    "Keep fresh water available at all times",
    "Discourage over-grooming with play and enrichment",
];

static STANDARD_ENTRIES: &[Entry] = &[
    // Digestive
    Entry {
        key: "indigestion",
        name: "Indigestion",
        category: C::Digestive,
        effects: AfflictionEffects::new(-15, -10, 10),
        duration: days(1, 3),
        symptoms: "Bloated belly, loud burps, refuses snacks",
        description: None,
        treatments: &[],
        prevention: &[],
    },
    basic(
        "stomach_ache",
        "Stomach Ache",
        C::Digestive,
        AfflictionEffects::new(-10, -15, 10),
        days(1, 2),
        "Curls up tight, whimpers when touched on the belly",
    ),
    basic(
        "food_poisoning",
        "Food Poisoning",
        C::Digestive,
        AfflictionEffects::new(-30, -25, 20),
        days(2, 5),
        "Vomiting, shivering, will not leave the water bowl",
    ),
    basic(
        "gastritis",
        "Gastritis",
        C::Digestive,
        AfflictionEffects::new(-20, -15, 15),
        days(3, 7),
        "Nausea after every meal, picky eating",
    ),
    basic(
        "diarrhea",
        "Diarrhea",
        C::Digestive,
        AfflictionEffects::new(-25, -15, 15),
        days(1, 3),
        "Frequent loose stools, urgent trips outside",
    ),
    basic(
        "obesity",
        "Obesity",
        C::Digestive,
        AfflictionEffects::new(-20, -10, 10),
        DurationClass::Chronic,
        "Waddling gait, short of breath after short walks",
    ),
    basic(
        "intestinal_parasites",
        "Intestinal Parasites",
        C::Digestive,
        AfflictionEffects::new(-20, -15, 10),
        days(7, 14),
        "Always hungry yet losing weight, scooting",
    ),
    basic(
        "water_bloat",
        "Water Bloat",
        C::Digestive,
        AfflictionEffects::new(-10, -5, 5),
        hours(6, 24),
        "Sloshing belly, sluggish, drooling",
    ),
    Entry {
        key: "constipation",
        name: "Constipation",
        category: C::Digestive,
        effects: AfflictionEffects::new(-10, -10, 10),
        duration: days(1, 4),
        symptoms: "Straining in the litter box, small dry droppings",
        description: Some("Often caused by swallowed fur packing the gut. Usually resolves with \
            fibre and water but can precede a hairball blockage."),
        treatments: &[T::FiberSupplement, T::Laxative, T::SpecialDiet],
        prevention: HAIRBALL_PREVENTION,
    },
    // Hair (hairball family)
    Entry {
        key: "hairball",
        name: "Hairball",
        category: C::Hair,
        effects: AfflictionEffects::new(-10, -15, 10),
        duration: days(1, 3),
        symptoms: "Hacking, gagging, retching without producing anything",
        description: Some("A wad of swallowed fur collected in the stomach. Most pass on their own \
            within a few days with lubrication and fibre."),
        treatments: &[T::HairballPaste, T::FiberSupplement, T::SpecialDiet],
        prevention: HAIRBALL_PREVENTION,
    },
    Entry {
        key: "hairball_blockage",
        name: "Hairball Blockage",
        category: C::Hair,
        effects: AfflictionEffects::new(-35, -30, 25),
        duration: days(3, 7),
        symptoms: "No appetite, swollen abdomen, lethargy, repeated unproductive retching",
        description: Some("A hairball lodged in the intestine. Requires prompt treatment; left \
            alone it can become a trichobezoar."),
        treatments: &[T::Laxative, T::HairballPaste, T::VeterinaryCare],
        prevention: HAIRBALL_PREVENTION,
    },
    Entry {
        key: "trichobezoar",
        name: "Trichobezoar",
        category: C::Hair,
        effects: AfflictionEffects::new(-40, -30, 30),
        duration: days(7, 14),
        symptoms: "Severe abdominal pain, vomiting, refuses food and water",
        description: Some("A compacted mass of hair that has hardened in the gut. Home remedies \
            rarely work; veterinary care is required."),
        treatments: &[T::VeterinaryCare],
        prevention: HAIRBALL_PREVENTION,
    },
    Entry {
        key: "matted_fur",
        name: "Matted Fur",
        category: C::Hair,
        effects: AfflictionEffects::new(-5, -15, 10),
        duration: DurationClass::Variable,
        symptoms: "Tangled clumps of fur, flinches when brushed",
        description: Some("Knots of dead and live fur pulling at the skin. Gentle, regular \
            grooming loosens them; severe mats need a bath and clipping."),
        treatments: &[T::MedicatedBath],
        prevention: &[
            "Brush the coat daily",
            "Dry the coat fully after baths or rain",
        ],
    },
    Entry {
        key: "excessive_shedding",
        name: "Excessive Shedding",
        category: C::Hair,
        effects: AfflictionEffects::new(-5, -10, 5),
        duration: days(7, 21),
        symptoms: "Fur everywhere, thinning coat, more swallowed hair while grooming",
        description: Some("Seasonal or stress-induced coat loss. Raises the risk of hairballs \
            until the coat settles."),
        treatments: &[T::SpecialDiet, T::MedicatedBath],
        prevention: &[
            "Feed omega-3 rich food",
            "Keep stress low with a predictable routine",
            "Brush the coat daily, more often while shedding",
        ],
    },
    Entry {
        key: "fur_loss",
        name: "Fur Loss",
        category: C::Hair,
        effects: AfflictionEffects::new(-5, -20, 15),
        duration: DurationClass::Chronic,
        symptoms: "Bald patches, flaky skin, constant licking",
        description: Some("Patchy hair loss from over-grooming, allergies or mites. Improves \
            slowly once the cause is removed."),
        treatments: &[T::MedicatedBath, T::VeterinaryCare],
        prevention: &[
            "Discourage over-grooming with play and enrichment",
            "Treat fleas and mites promptly",
        ],
    },
    // Respiratory
    basic(
        "common_cold",
        "Common Cold",
        C::Respiratory,
        AfflictionEffects::new(-10, -10, 5),
        days(3, 7),
        "Runny nose, sneezing, watery eyes",
    ),
    basic(
        "flu",
        "Flu",
        C::Respiratory,
        AfflictionEffects::new(-25, -20, 10),
        days(5, 10),
        "Fever, aching limbs, sleeps all day",
    ),
    basic(
        "pneumonia",
        "Pneumonia",
        C::Respiratory,
        AfflictionEffects::new(-40, -30, 25),
        days(14, 21),
        "Laboured breathing, wet cough, high fever",
    ),
    basic(
        "kennel_cough",
        "Kennel Cough",
        C::Respiratory,
        AfflictionEffects::new(-15, -10, 10),
        days(7, 14),
        "Honking cough, gagging after excitement",
    ),
    basic(
        "asthma",
        "Asthma",
        C::Respiratory,
        AfflictionEffects::new(-15, -10, 15),
        DurationClass::Chronic,
        "Wheezing, open-mouth breathing after play",
    ),
    basic(
        "allergies",
        "Allergies",
        C::Respiratory,
        AfflictionEffects::new(-5, -10, 10),
        DurationClass::Chronic,
        "Itchy eyes, sneezing fits, red paws",
    ),
    // Skin
    basic(
        "fleas",
        "Fleas",
        C::Skin,
        AfflictionEffects::new(-5, -20, 20),
        days(7, 14),
        "Constant scratching, black specks in the fur",
    ),
    basic(
        "mange",
        "Mange",
        C::Skin,
        AfflictionEffects::new(-15, -25, 20),
        days(21, 42),
        "Crusty skin, intense itching, hair falling out",
    ),
    basic(
        "rash",
        "Rash",
        C::Skin,
        AfflictionEffects::new(-5, -10, 10),
        days(2, 5),
        "Red bumps, licks the same spot over and over",
    ),
    basic(
        "sunburn",
        "Sunburn",
        C::Skin,
        AfflictionEffects::new(-10, -10, 10),
        days(2, 4),
        "Pink, hot ears and nose, avoids being touched",
    ),
    basic(
        "ringworm",
        "Ringworm",
        C::Skin,
        AfflictionEffects::new(-5, -15, 10),
        days(14, 28),
        "Circular bald patches with scaly edges",
    ),
    // Musculoskeletal
    basic(
        "sprained_joint",
        "Sprained Joint",
        C::Musculoskeletal,
        AfflictionEffects::new(-20, -15, 15),
        days(5, 10),
        "Limping, swollen joint, refuses to jump",
    ),
    basic(
        "muscle_strain",
        "Muscle Strain",
        C::Musculoskeletal,
        AfflictionEffects::new(-15, -10, 10),
        days(2, 5),
        "Stiff movement, yelps when stretching",
    ),
    basic(
        "fractured_paw",
        "Fractured Paw",
        C::Musculoskeletal,
        AfflictionEffects::new(-30, -25, 25),
        days(28, 56),
        "Holds a paw off the ground, cries when it is touched",
    ),
    basic(
        "arthritis",
        "Arthritis",
        C::Musculoskeletal,
        AfflictionEffects::new(-20, -15, 10),
        DurationClass::Chronic,
        "Slow to rise, stiff in the mornings",
    ),
    basic(
        "back_pain",
        "Back Pain",
        C::Musculoskeletal,
        AfflictionEffects::new(-15, -15, 15),
        DurationClass::Variable,
        "Hunched posture, reluctant to climb stairs",
    ),
    // Mental
    basic(
        "anxiety",
        "Anxiety",
        C::Mental,
        AfflictionEffects::new(-10, -20, 30),
        DurationClass::Variable,
        "Pacing, hiding, trembling at small noises",
    ),
    basic(
        "depression",
        "Depression",
        C::Mental,
        AfflictionEffects::new(-20, -35, 20),
        DurationClass::Variable,
        "Ignores toys, sleeps more, lost interest in food",
    ),
    basic(
        "boredom",
        "Boredom",
        C::Mental,
        AfflictionEffects::new(-5, -20, 10),
        days(1, 2),
        "Sighing, destructive chewing, attention seeking",
    ),
    basic(
        "insomnia",
        "Insomnia",
        C::Mental,
        AfflictionEffects::new(-25, -10, 20),
        DurationClass::Variable,
        "Restless at night, dozes off during the day",
    ),
    basic(
        "lethargy",
        "Lethargy",
        C::Mental,
        AfflictionEffects::new(-20, -10, 5),
        days(1, 3),
        "Groggy, slow to respond, uninterested in play",
    ),
    basic(
        "separation_anxiety",
        "Separation Anxiety",
        C::Mental,
        AfflictionEffects::new(-10, -25, 25),
        DurationClass::Chronic,
        "Howls when left alone, scratches at doors",
    ),
    // Infectious
    basic(
        "fever",
        "Fever",
        C::Infectious,
        AfflictionEffects::new(-20, -15, 10),
        days(1, 3),
        "Hot dry nose, shivering, glassy eyes",
    ),
    basic(
        "ear_infection",
        "Ear Infection",
        C::Infectious,
        AfflictionEffects::new(-10, -15, 15),
        days(7, 14),
        "Head tilt, shaking the head, smelly ears",
    ),
    basic(
        "eye_infection",
        "Eye Infection",
        C::Infectious,
        AfflictionEffects::new(-5, -15, 10),
        days(5, 10),
        "Crusty discharge, squinting, pawing at the face",
    ),
    basic(
        "rabies",
        "Rabies",
        C::Infectious,
        AfflictionEffects::new(-50, -40, 40),
        DurationClass::Permanent,
        "Foaming at the mouth, aggression, fear of water",
    ),
    // Environmental
    basic(
        "heatstroke",
        "Heatstroke",
        C::Environmental,
        AfflictionEffects::new(-35, -20, 25),
        days(1, 2),
        "Heavy panting, bright red tongue, collapses in the shade",
    ),
    basic(
        "dehydration",
        "Dehydration",
        C::Environmental,
        AfflictionEffects::new(-25, -15, 15),
        days(1, 2),
        "Sunken eyes, sticky gums, skin slow to spring back",
    ),
    basic(
        "hypothermia",
        "Hypothermia",
        C::Environmental,
        AfflictionEffects::new(-30, -20, 20),
        days(1, 3),
        "Violent shivering, cold ears, drowsiness",
    ),
    // Supernatural
    basic(
        "power_burnout",
        "Power Burnout",
        C::Supernatural,
        AfflictionEffects::new(-35, -15, 20),
        days(2, 5),
        "Powers sputter out, sparks at the fingertips, exhausted",
    ),
    basic(
        "crystal_poisoning",
        "Crystal Poisoning",
        C::Supernatural,
        AfflictionEffects::new(-45, -20, 25),
        days(3, 7),
        "Green-tinged veins, weakness near glowing minerals",
    ),
    basic(
        "elemental_imbalance",
        "Elemental Imbalance",
        C::Supernatural,
        AfflictionEffects::new(-20, -15, 20),
        DurationClass::Variable,
        "Element flares uncontrollably, scorch or frost marks on the bedding",
    ),
    basic(
        "curse",
        "Curse",
        C::Supernatural,
        AfflictionEffects::new(-15, -30, 20),
        DurationClass::Variable,
        "Bad luck follows everywhere, a faint dark aura",
    ),
    basic(
        "phantom_itch",
        "Phantom Itch",
        C::Supernatural,
        AfflictionEffects::new(-5, -15, 15),
        hours(2, 12),
        "Scratches at nothing, glances at empty corners",
    ),
    // Lifecycle
    basic(
        "revival_weakness",
        "Revival Weakness",
        C::Supernatural,
        AfflictionEffects::new(-10, -10, 10),
        days(3, 7),
        "Pale, shaky legs, recovering from the other side",
    ),
    basic(
        "death",
        "Death",
        C::Terminal,
        AfflictionEffects::new(0, 0, 0),
        DurationClass::Permanent,
        "No vital signs",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_has_no_duplicates() {
        let entries: Vec<AfflictionInfo> = Catalog::standard().iter().cloned().collect();
        let rebuilt = Catalog::from_entries(entries).expect("standard table must be unique");
        assert_eq!(rebuilt.len(), Catalog::standard().len());
    }

    #[test]
    fn test_lookup_by_key_and_name() {
        let catalog = Catalog::standard();
        let by_key = catalog.lookup("food_poisoning").unwrap();
        let by_name = catalog.lookup("Food Poisoning").unwrap();
        assert_eq!(by_key, by_name);
        assert_eq!(catalog.lookup("food poisoning").unwrap().key, "food_poisoning");
    }

    #[test]
    fn test_lookup_not_found() {
        let err = Catalog::standard().lookup("dragon pox").unwrap_err();
        assert_eq!(err, CatalogError::NotFound("dragon pox".to_string()));
    }

    #[test]
    fn test_well_known_keys_resolve() {
        let catalog = Catalog::standard();
        for key in [
            PRIMARY_DIGESTIVE,
            WATER_BLOAT,
            LETHARGY,
            JOINT_INJURY,
            DEATH_MARKER,
            REVIVAL_WEAKNESS,
        ] {
            assert!(catalog.contains(key), "missing {}", key);
        }
    }

    #[test]
    fn test_hairball_family_fully_present_and_documented() {
        let family = Catalog::standard().hairball_family();
        assert_eq!(family.len(), HAIRBALL_FAMILY.len());
        for entry in family {
            assert!(entry.is_hairball_family());
            assert!(entry.description.is_some(), "{} lacks description", entry.key);
            assert!(!entry.treatments.is_empty(), "{} lacks treatments", entry.key);
            assert!(!entry.prevention.is_empty(), "{} lacks prevention", entry.key);
        }
    }

    #[test]
    fn test_only_hairball_family_has_extras() {
        for entry in Catalog::standard().iter() {
            if !entry.is_hairball_family() {
                assert!(entry.description.is_none(), "{}", entry.key);
                assert!(entry.treatments.is_empty(), "{}", entry.key);
            }
        }
    }

    #[test]
    fn test_effects_are_adverse() {
        for entry in Catalog::standard().iter() {
            assert!(entry.effects.energy <= 0, "{}", entry.key);
            assert!(entry.effects.happiness <= 0, "{}", entry.key);
            assert!(entry.effects.stress >= 0, "{}", entry.key);
        }
    }

    #[test]
    fn test_in_category() {
        let catalog = Catalog::standard();
        let hair = catalog.in_category(AfflictionCategory::Hair);
        assert!(hair.iter().any(|a| a.key == "hairball"));
        assert!(hair.iter().all(|a| a.category == AfflictionCategory::Hair));
        let terminal = catalog.in_category(AfflictionCategory::Terminal);
        assert_eq!(terminal.len(), 1);
        assert_eq!(terminal[0].key, DEATH_MARKER);
    }

    #[test]
    fn test_from_entries_rejects_duplicate_key() {
        let a = Catalog::standard().lookup("flu").unwrap().clone();
        let mut b = a.clone();
        b.name = "Different Name".to_string();
        let err = Catalog::from_entries(vec![a, b]).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateKey("flu".to_string()));
    }

    #[test]
    fn test_from_entries_rejects_duplicate_name() {
        let a = Catalog::standard().lookup("flu").unwrap().clone();
        let mut b = a.clone();
        b.key = "flu_again".to_string();
        b.name = "FLU".to_string();
        let err = Catalog::from_entries(vec![a, b]).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateName("FLU".to_string()));
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            {
                "key": "zombie_flu",
                "name": "Zombie Flu",
                "category": "infectious",
                "effects": { "energy": -30, "happiness": -30, "stress": 30 },
                "duration": { "kind": "days", "min": 2, "max": 4 },
                "symptoms": "Moaning, shuffling"
            }
        ]"#;
        let catalog = Catalog::from_json(json).unwrap();
        let entry = catalog.lookup("Zombie Flu").unwrap();
        assert_eq!(entry.duration.to_string(), "2-4 days");
        assert!(entry.treatments.is_empty());
        assert!(matches!(
            Catalog::from_json("not json"),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn test_duration_display() {
        assert_eq!(DurationClass::Hours { min: 6, max: 24 }.to_string(), "6-24 hours");
        assert_eq!(DurationClass::Chronic.to_string(), "chronic");
        assert_eq!(DurationClass::Variable.to_string(), "variable");
    }
}
