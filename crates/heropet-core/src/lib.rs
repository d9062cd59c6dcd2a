//! HeroPet Core - Shelter Roster
//!
//! Keeps every creature the game knows about in an ECS world via `hecs`,
//! runs care actions and passive decay over them, and saves the whole
//! roster as a versioned binary snapshot.
//!
//! # Architecture
//!
//! - **Entities**: one per creature
//! - **Components**: the `Creature` record from `heropet-logic`, plus
//!   `Intake` and (once adopted) `Adoption`
//! - **Systems**: decay over elapsed time, attention scans
//!
//! # Example
//!
//! ```rust,no_run
//! use heropet_core::prelude::*;
//!
//! let catalog = Catalog::standard();
//! let config = VitalityConfig::default();
//! let engine = VitalityEngine::new(catalog, &config);
//! let now = chrono::Utc::now();
//!
//! let mut shelter = Shelter::new();
//! shelter.admit(Creature::new(1, "Whiskers", "cat"), now).unwrap();
//! shelter
//!     .perform(1, &Action::Feed { amount: 20 }, &engine, &mut RngSource::thread(), now)
//!     .unwrap();
//! shelter.tick(1.0, &config.decay, now);
//! ```

pub mod components;
pub mod persistence;
pub mod shelter;
pub mod systems;

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::components::*;
    pub use crate::persistence::{load_shelter, save_shelter, SaveError};
    pub use crate::shelter::{Shelter, ShelterError};
    pub use heropet_logic::{
        Action, ActionReport, Catalog, Creature, RandomSource, RngSource, VitalityConfig,
        VitalityEngine,
    };
}
