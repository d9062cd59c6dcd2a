//! The shelter roster: every creature as an ECS entity, indexed by id.

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use hecs::{Entity, World};
use heropet_logic::action::{Action, ActionReport};
use heropet_logic::config::DecayConfig;
use heropet_logic::creature::Creature;
use heropet_logic::outcome::ActionError;
use heropet_logic::rng::RandomSource;
use heropet_logic::vitality::VitalityEngine;

use crate::components::{Adoption, Intake};
use crate::systems::decay_system;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShelterError {
    DuplicateId(u64),
    NotFound(u64),
    AlreadyAdopted { id: u64, owner: String },
    Deceased(u64),
    Action(ActionError),
}

impl From<ActionError> for ShelterError {
    fn from(e: ActionError) -> Self {
        ShelterError::Action(e)
    }
}

impl fmt::Display for ShelterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShelterError::DuplicateId(id) => write!(f, "Creature {} is already in the shelter", id),
            ShelterError::NotFound(id) => write!(f, "No creature with id {}", id),
            ShelterError::AlreadyAdopted { id, owner } => {
                write!(f, "Creature {} has already been adopted by {}", id, owner)
            }
            ShelterError::Deceased(id) => {
                write!(f, "Creature {} has died and cannot be adopted", id)
            }
            ShelterError::Action(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ShelterError {}

/// All creatures the game knows about, adopted or not.
#[derive(Default)]
pub struct Shelter {
    pub(crate) world: World,
    index: HashMap<u64, Entity>,
}

impl Shelter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// All creature ids, sorted.
    pub fn ids(&self) -> Vec<u64> {
        let mut ids: Vec<u64> = self.index.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn admit(
        &mut self,
        creature: Creature,
        now: DateTime<Utc>,
    ) -> Result<Entity, ShelterError> {
        self.insert(creature, Intake { admitted_at: now }, None)
    }

    pub(crate) fn insert(
        &mut self,
        creature: Creature,
        intake: Intake,
        adoption: Option<Adoption>,
    ) -> Result<Entity, ShelterError> {
        let id = creature.id;
        if self.index.contains_key(&id) {
            return Err(ShelterError::DuplicateId(id));
        }
        let entity = match adoption {
            Some(a) => self.world.spawn((creature, intake, a)),
            None => self.world.spawn((creature, intake)),
        };
        self.index.insert(id, entity);
        log::debug!("Admitted creature {}", id);
        Ok(entity)
    }

    fn entity(&self, id: u64) -> Result<Entity, ShelterError> {
        self.index.get(&id).copied().ok_or(ShelterError::NotFound(id))
    }

    /// A copy of the creature record.
    pub fn get(&self, id: u64) -> Option<Creature> {
        let entity = self.index.get(&id)?;
        self.world
            .get::<&Creature>(*entity)
            .ok()
            .map(|c| (*c).clone())
    }

    pub fn adoption(&self, id: u64) -> Option<Adoption> {
        let entity = self.index.get(&id)?;
        self.world
            .get::<&Adoption>(*entity)
            .ok()
            .map(|a| (*a).clone())
    }

    pub fn adopt(
        &mut self,
        id: u64,
        owner: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Result<(), ShelterError> {
        let entity = self.entity(id)?;
        if let Some(existing) = self.adoption(id) {
            return Err(ShelterError::AlreadyAdopted {
                id,
                owner: existing.owner,
            });
        }
        let alive = self
            .world
            .get::<&Creature>(entity)
            .map(|c| c.alive)
            .map_err(|_| ShelterError::NotFound(id))?;
        if !alive {
            return Err(ShelterError::Deceased(id));
        }
        let owner = owner.into();
        log::info!("Creature {} adopted by {}", id, owner);
        self.world
            .insert_one(
                entity,
                Adoption {
                    owner,
                    adopted_at: now,
                },
            )
            .map_err(|_| ShelterError::NotFound(id))
    }

    /// Living creatures without an owner, sorted by id.
    pub fn available(&self) -> Vec<u64> {
        let mut ids: Vec<u64> = self
            .world
            .query::<(&Creature, Option<&Adoption>)>()
            .iter()
            .filter(|(_, (c, adoption))| c.alive && adoption.is_none())
            .map(|(_, (c, _))| c.id)
            .collect();
        ids.sort_unstable();
        ids
    }

    pub fn adopted_by(&self, owner: &str) -> Vec<u64> {
        let mut ids: Vec<u64> = self
            .world
            .query::<(&Creature, &Adoption)>()
            .iter()
            .filter(|(_, (_, a))| a.owner == owner)
            .map(|(_, (c, _))| c.id)
            .collect();
        ids.sort_unstable();
        ids
    }

    /// Run one action against one creature in place.
    pub fn perform(
        &mut self,
        id: u64,
        action: &Action,
        engine: &VitalityEngine<'_>,
        rng: &mut dyn RandomSource,
        now: DateTime<Utc>,
    ) -> Result<ActionReport, ShelterError> {
        let entity = self.entity(id)?;
        let mut creature = self
            .world
            .get::<&mut Creature>(entity)
            .map_err(|_| ShelterError::NotFound(id))?;
        Ok(engine.perform(&mut *creature, action, rng, now)?)
    }

    /// Advance every creature by `hours`. Returns ids that died.
    pub fn tick(&mut self, hours: f32, config: &DecayConfig, now: DateTime<Utc>) -> Vec<u64> {
        let died = decay_system(&mut self.world, config, hours, now);
        if !died.is_empty() {
            log::info!("{} creature(s) died of neglect: {:?}", died.len(), died);
        }
        died
    }
}
