//! Roster components attached alongside each `Creature` entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Present once a creature has been adopted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adoption {
    pub owner: String,
    pub adopted_at: DateTime<Utc>,
}

/// When the creature entered the shelter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intake {
    pub admitted_at: DateTime<Utc>,
}
