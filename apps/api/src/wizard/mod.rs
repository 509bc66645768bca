//! Wizard flow: the linear state machine the UI walks through.
//!
//! landing → assessment → loading → roadmap ⇄ progress, with roadmap →
//! assessment for edits. Starting without a stored API key detours through
//! credential capture. There is no error state: generation always settles
//! with a roadmap.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod assessment;
pub mod handlers;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Landing,
    CredentialCapture,
    Assessment,
    Loading,
    Roadmap,
    Progress,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum WizardEvent {
    Start { has_credential: bool },
    CredentialSaved,
    Dismiss,
    Back,
    Submit,
    GenerationSettled,
    ViewProgress,
    ViewRoadmap,
    Modify,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WizardError {
    #[error("cannot apply {event:?} while in {step:?}")]
    InvalidTransition { step: WizardStep, event: WizardEvent },
}

impl WizardStep {
    pub fn apply(self, event: WizardEvent) -> Result<WizardStep, WizardError> {
        use WizardEvent::*;
        use WizardStep::*;

        let next = match (self, event) {
            (Landing, Start { has_credential: true }) => Assessment,
            (Landing, Start { has_credential: false }) => CredentialCapture,
            (CredentialCapture, CredentialSaved) => Assessment,
            (CredentialCapture, Dismiss) => Landing,
            (Assessment, Back) => Landing,
            (Assessment, Submit) => Loading,
            (Loading, GenerationSettled) => Roadmap,
            (Roadmap, ViewProgress) => Progress,
            (Progress, ViewRoadmap) => Roadmap,
            (Roadmap, Modify) => Assessment,
            (step, event) => return Err(WizardError::InvalidTransition { step, event }),
        };
        Ok(next)
    }
}
