//! Save/Load functionality for persisting the shelter roster
//!
//! Uses bincode for compact binary serialization. Each entity's components
//! are serialized individually then respawned on load.

use chrono::{DateTime, Utc};
use hecs::World;
use heropet_logic::creature::Creature;
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

use crate::components::{Adoption, Intake};
use crate::shelter::{Shelter, ShelterError};

/// Version number for save file format (increment when format changes)
const SAVE_VERSION: u32 = 1;

/// Serializable snapshot of the roster
#[derive(Serialize, Deserialize)]
pub struct SaveData {
    /// Save format version
    pub version: u32,
    pub saved_at: DateTime<Utc>,
    pub entities: Vec<SerializableEntity>,
}

/// The components of one roster entity
#[derive(Serialize, Deserialize)]
pub struct SerializableEntity {
    pub creature: Creature,
    pub intake: Intake,
    pub adoption: Option<Adoption>,
}

/// Extract every creature from a world into serializable form, ordered by id
fn serialize_entities(world: &World) -> Vec<SerializableEntity> {
    let mut entities: Vec<SerializableEntity> = world
        .query::<(&Creature, &Intake, Option<&Adoption>)>()
        .iter()
        .map(|(_, (creature, intake, adoption))| SerializableEntity {
            creature: creature.clone(),
            intake: *intake,
            adoption: adoption.cloned(),
        })
        .collect();
    entities.sort_by_key(|e| e.creature.id);
    entities
}

/// Save the roster to a writer
pub fn save_shelter<W: Write>(
    writer: W,
    shelter: &Shelter,
    saved_at: DateTime<Utc>,
) -> Result<(), SaveError> {
    let save_data = SaveData {
        version: SAVE_VERSION,
        saved_at,
        entities: serialize_entities(shelter.world()),
    };
    bincode::serialize_into(writer, &save_data)?;
    log::debug!("Saved {} creatures", save_data.entities.len());
    Ok(())
}

/// Load a roster from a reader
pub fn load_shelter<R: Read>(reader: R) -> Result<LoadedShelter, SaveError> {
    let save_data: SaveData = bincode::deserialize_from(reader)?;

    if save_data.version != SAVE_VERSION {
        return Err(SaveError::VersionMismatch {
            expected: SAVE_VERSION,
            found: save_data.version,
        });
    }

    let mut shelter = Shelter::new();
    for se in save_data.entities {
        shelter.insert(se.creature, se.intake, se.adoption)?;
    }

    Ok(LoadedShelter {
        shelter,
        saved_at: save_data.saved_at,
    })
}

/// Result of loading a roster
pub struct LoadedShelter {
    pub shelter: Shelter,
    pub saved_at: DateTime<Utc>,
}

/// Errors that can occur during save/load
#[derive(Debug)]
pub enum SaveError {
    Io(std::io::Error),
    Bincode(Box<bincode::ErrorKind>),
    VersionMismatch { expected: u32, found: u32 },
    /// The snapshot holds two creatures with the same id.
    Roster(ShelterError),
}

impl From<std::io::Error> for SaveError {
    fn from(e: std::io::Error) -> Self {
        SaveError::Io(e)
    }
}

impl From<Box<bincode::ErrorKind>> for SaveError {
    fn from(e: Box<bincode::ErrorKind>) -> Self {
        SaveError::Bincode(e)
    }
}

impl From<ShelterError> for SaveError {
    fn from(e: ShelterError) -> Self {
        SaveError::Roster(e)
    }
}

impl std::fmt::Display for SaveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SaveError::Io(e) => write!(f, "IO error: {}", e),
            SaveError::Bincode(e) => write!(f, "Serialization error: {}", e),
            SaveError::VersionMismatch { expected, found } => {
                write!(
                    f,
                    "Save version mismatch: expected {}, found {}",
                    expected, found
                )
            }
            SaveError::Roster(e) => write!(f, "Corrupt roster: {}", e),
        }
    }
}

impl std::error::Error for SaveError {}
