//! A single entry point over every engine action.
//!
//! Hosts that receive actions as data (a request body, a scripted
//! scenario) deserialize an [`Action`] and call
//! [`VitalityEngine::perform`]; the result comes back as an
//! [`ActionReport`] tagged by kind.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::creature::Creature;
use crate::hair_care::{GroomIntensity, TreatmentKind};
use crate::outcome::{
    ActionError, CareOutcome, CureOutcome, DeathOutcome, GroomOutcome, IllnessOutcome,
    RevivalOutcome, TreatmentOutcome,
};
use crate::rng::RandomSource;
use crate::vitality::VitalityEngine;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    Feed { amount: u32 },
    Hydrate { amount: u32 },
    Rest { hours: u32 },
    Exercise { intensity: u32 },
    FallIll { affliction: String },
    /// `None` cures every active affliction.
    Cure {
        #[serde(default)]
        affliction: Option<String>,
    },
    Kill {
        #[serde(default)]
        cause: Option<String>,
    },
    Revive,
    Groom { intensity: GroomIntensity },
    ApplyTreatment { treatment: TreatmentKind },
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::Feed { .. } => "feed",
            Action::Hydrate { .. } => "hydrate",
            Action::Rest { .. } => "rest",
            Action::Exercise { .. } => "exercise",
            Action::FallIll { .. } => "fall_ill",
            Action::Cure { .. } => "cure",
            Action::Kill { .. } => "kill",
            Action::Revive => "revive",
            Action::Groom { .. } => "groom",
            Action::ApplyTreatment { .. } => "apply_treatment",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ActionReport {
    Feed(CareOutcome),
    Hydrate(CareOutcome),
    Rest(CareOutcome),
    Exercise(CareOutcome),
    FallIll(IllnessOutcome),
    Cure(CureOutcome),
    Kill(DeathOutcome),
    Revive(RevivalOutcome),
    Groom(GroomOutcome),
    Treatment(TreatmentOutcome),
}

impl ActionReport {
    pub fn message(&self) -> &str {
        match self {
            ActionReport::Feed(o)
            | ActionReport::Hydrate(o)
            | ActionReport::Rest(o)
            | ActionReport::Exercise(o) => &o.message,
            ActionReport::FallIll(o) => &o.message,
            ActionReport::Cure(o) => &o.message,
            ActionReport::Kill(o) => &o.message,
            ActionReport::Revive(o) => &o.message,
            ActionReport::Groom(o) => &o.message,
            ActionReport::Treatment(o) => &o.message,
        }
    }

    /// Whether the action ended with the creature dying.
    pub fn caused_death(&self) -> bool {
        match self {
            ActionReport::Feed(o)
            | ActionReport::Hydrate(o)
            | ActionReport::Rest(o)
            | ActionReport::Exercise(o) => o.died(),
            ActionReport::FallIll(o) => o.death.is_some(),
            ActionReport::Kill(o) => !o.already_dead,
            ActionReport::Groom(o) => o.death.is_some(),
            ActionReport::Treatment(o) => o.death.is_some(),
            ActionReport::Cure(_) | ActionReport::Revive(_) => false,
        }
    }
}

impl VitalityEngine<'_> {
    /// Dispatch one action against one creature.
    pub fn perform(
        &self,
        creature: &mut Creature,
        action: &Action,
        rng: &mut dyn RandomSource,
        now: DateTime<Utc>,
    ) -> Result<ActionReport, ActionError> {
        let report = match action {
            Action::Feed { amount } => ActionReport::Feed(self.feed(creature, *amount, rng, now)?),
            Action::Hydrate { amount } => {
                ActionReport::Hydrate(self.hydrate(creature, *amount, rng, now)?)
            }
            Action::Rest { hours } => ActionReport::Rest(self.rest(creature, *hours, rng, now)?),
            Action::Exercise { intensity } => {
                ActionReport::Exercise(self.exercise(creature, *intensity, rng, now)?)
            }
            Action::FallIll { affliction } => {
                ActionReport::FallIll(self.fall_ill(creature, affliction, now)?)
            }
            Action::Cure { affliction } => {
                ActionReport::Cure(self.cure(creature, affliction.as_deref())?)
            }
            Action::Kill { cause } => ActionReport::Kill(self.kill(creature, cause.clone(), now)),
            Action::Revive => ActionReport::Revive(self.revive(creature, now)?),
            Action::Groom { intensity } => {
                ActionReport::Groom(self.groom(creature, *intensity, rng, now)?)
            }
            Action::ApplyTreatment { treatment } => {
                ActionReport::Treatment(self.apply_treatment(creature, *treatment, rng, now)?)
            }
        };
        log::debug!(
            "Creature {} performed {}: {}",
            creature.id,
            action.name(),
            report.message()
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::afflictions::Catalog;
    use crate::config::VitalityConfig;
    use crate::rng::FixedSequence;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_action_json_shape() {
        let a: Action = serde_json::from_str(r#"{"action":"feed","amount":40}"#).unwrap();
        assert_eq!(a, Action::Feed { amount: 40 });
        let a: Action = serde_json::from_str(r#"{"action":"cure"}"#).unwrap();
        assert_eq!(a, Action::Cure { affliction: None });
        let a: Action =
            serde_json::from_str(r#"{"action":"apply_treatment","treatment":"hairball_paste"}"#)
                .unwrap();
        assert_eq!(
            a,
            Action::ApplyTreatment {
                treatment: TreatmentKind::HairballPaste
            }
        );
        let a: Action = serde_json::from_str(r#"{"action":"revive"}"#).unwrap();
        assert_eq!(a, Action::Revive);
    }

    #[test]
    fn test_perform_dispatches() {
        let config = VitalityConfig::default();
        let engine = VitalityEngine::new(Catalog::standard(), &config);
        let mut c = Creature::new(1, "Whiskers", "cat");
        c.vitals.hunger = 50;
        let mut rng = FixedSequence::never();

        let report = engine
            .perform(&mut c, &Action::Feed { amount: 20 }, &mut rng, now())
            .unwrap();
        assert!(matches!(report, ActionReport::Feed(_)));
        assert!(!report.caused_death());

        let report = engine
            .perform(&mut c, &Action::Kill { cause: None }, &mut rng, now())
            .unwrap();
        assert!(report.caused_death());

        let report = engine
            .perform(&mut c, &Action::Revive, &mut rng, now())
            .unwrap();
        assert!(matches!(report, ActionReport::Revive(_)));
        assert!(c.alive);
    }

    #[test]
    fn test_report_json_is_tagged() {
        let config = VitalityConfig::default();
        let engine = VitalityEngine::new(Catalog::standard(), &config);
        let mut c = Creature::new(1, "Whiskers", "cat");
        let report = engine
            .perform(
                &mut c,
                &Action::FallIll {
                    affliction: "flu".to_string(),
                },
                &mut FixedSequence::never(),
                now(),
            )
            .unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["kind"], "fall_ill");
        assert_eq!(json["affliction"]["key"], "flu");
    }

    #[test]
    fn test_perform_propagates_rejection() {
        let config = VitalityConfig::default();
        let engine = VitalityEngine::new(Catalog::standard(), &config);
        let mut c = Creature::new(1, "Whiskers", "cat");
        let err = engine
            .perform(&mut c, &Action::Revive, &mut FixedSequence::never(), now())
            .unwrap_err();
        assert_eq!(err, ActionError::NotDead);
    }
}
