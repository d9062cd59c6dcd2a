//! Pure vitality and disease logic for HeroPet creatures.
//!
//! This crate contains all creature simulation that is independent of any
//! storage, server, or runtime. Functions take plain data plus an injected
//! random source and clock, and return fully resolved results, making them
//! unit-testable and deterministic under test.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`action`] | Serializable action enum and single dispatch entry point |
//! | [`afflictions`] | Static affliction catalog, categories, hairball family |
//! | [`condition`] | Derived stat labels, symptoms, needs-attention flag |
//! | [`config`] | Tunable thresholds and probabilities for every action |
//! | [`creature`] | Creature record, derived health status, load validation |
//! | [`decay`] | Passive stat drift over elapsed time, death by neglect |
//! | [`hair_care`] | Grooming, hairball treatments, hair-health assessment |
//! | [`lifecycle`] | Death, species-based revival rules |
//! | [`outcome`] | Action results and rejection errors |
//! | [`rng`] | Injectable random source and scripted test sequences |
//! | [`stats`] | Bounded vitality stats and change vectors |
//! | [`vitality`] | Feed, hydrate, rest, exercise, fall ill, cure |

pub mod action;
pub mod afflictions;
pub mod condition;
pub mod config;
pub mod creature;
pub mod decay;
pub mod hair_care;
pub mod lifecycle;
pub mod outcome;
pub mod rng;
pub mod stats;
pub mod vitality;

pub use action::{Action, ActionReport};
pub use afflictions::{AfflictionInfo, Catalog};
pub use config::VitalityConfig;
pub use creature::{Creature, HealthStatus};
pub use outcome::ActionError;
pub use rng::{FixedSequence, RandomSource, RngSource};
pub use vitality::VitalityEngine;
