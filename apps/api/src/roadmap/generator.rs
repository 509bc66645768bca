//! Roadmap Generation: model call with deterministic fallback.
//!
//! Flow: credential check → build prompt → one LLM call → schema validation.
//! Any failure along the way yields the fallback roadmap instead; the outcome
//! records which path produced the result so callers can warn the user.

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;
use crate::llm_client::{strip_json_fences, LlmError, TextGenerator};
use crate::models::{Roadmap, UserProfile};
use crate::roadmap::fallback::fallback_roadmap;
use crate::roadmap::prompts::{fill_template, ROADMAP_PROMPT_TEMPLATE};
use crate::roadmap::validation::{validate_roadmap, RoadmapValidationError};
use crate::storage::StorageError;

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// Why the model path was abandoned.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("no API key configured")]
    MissingCredential,

    #[error("API key could not be read: {0}")]
    CredentialUnreadable(#[from] StorageError),

    #[error("generation request failed: {0}")]
    Llm(#[from] LlmError),

    #[error("generated roadmap is invalid: {0}")]
    Invalid(#[from] RoadmapValidationError),
}

/// Which path produced a roadmap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RoadmapSource {
    Model,
    Fallback { reason: String },
}

#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    pub roadmap: Roadmap,
    pub source: RoadmapSource,
}

impl GenerationOutcome {
    pub fn used_fallback(&self) -> bool {
        matches!(self.source, RoadmapSource::Fallback { .. })
    }

    pub fn fallback_reason(&self) -> Option<&str> {
        match &self.source {
            RoadmapSource::Fallback { reason } => Some(reason),
            RoadmapSource::Model => None,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Generator
// ────────────────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct RoadmapGenerator {
    llm: Arc<dyn TextGenerator>,
}

impl RoadmapGenerator {
    pub fn new(llm: Arc<dyn TextGenerator>) -> Self {
        Self { llm }
    }

    /// Produces a roadmap for `profile`. Never fails: when the model path is
    /// unavailable or returns garbage, the fallback roadmap is returned and
    /// the outcome is marked accordingly.
    pub async fn generate(&self, profile: &UserProfile, api_key: Option<&str>) -> GenerationOutcome {
        match self.generate_with_model(profile, api_key).await {
            Ok(roadmap) => {
                info!(
                    "Generated roadmap for '{}' with {} milestones",
                    profile.target_role,
                    roadmap.milestones.len()
                );
                GenerationOutcome {
                    roadmap,
                    source: RoadmapSource::Model,
                }
            }
            Err(e) => fallback_outcome(profile, e),
        }
    }

    async fn generate_with_model(
        &self,
        profile: &UserProfile,
        api_key: Option<&str>,
    ) -> Result<Roadmap, GenerationError> {
        let api_key = api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or(GenerationError::MissingCredential)?;

        let prompt = build_roadmap_prompt(profile);
        let text = self.llm.generate_json(api_key, &prompt).await?;

        Ok(validate_roadmap(strip_json_fences(&text))?)
    }
}

/// The fallback roadmap for `profile`, tagged with why the model path was
/// abandoned.
pub fn fallback_outcome(profile: &UserProfile, err: GenerationError) -> GenerationOutcome {
    match &err {
        GenerationError::MissingCredential => {
            info!("No API key configured, using fallback roadmap")
        }
        _ => warn!("Roadmap generation failed, using fallback roadmap: {err}"),
    }
    GenerationOutcome {
        roadmap: fallback_roadmap(profile),
        source: RoadmapSource::Fallback {
            reason: err.to_string(),
        },
    }
}

/// Builds the generation prompt by filling the template with profile fields.
pub fn build_roadmap_prompt(profile: &UserProfile) -> String {
    let skills = profile
        .skills
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    fill_template(
        ROADMAP_PROMPT_TEMPLATE,
        &[
            ("json_only_instruction", JSON_ONLY_INSTRUCTION),
            ("target_role", &profile.target_role),
            ("industry", &profile.industry),
            ("name", &profile.name),
            ("current_role", &profile.current_role),
            ("experience", profile.experience.as_str()),
            ("skills", &skills),
            ("learning_style", profile.learning_style.as_str()),
            ("timeframe", profile.timeframe.as_str()),
        ],
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
