// Roadmap generation engine.
// Implements: prompt building, one-shot LLM call, schema validation, fallback synthesis.
// All LLM calls go through llm_client, no direct Gemini calls here.

pub mod fallback;
pub mod generator;
pub mod handlers;
pub mod prompts;
pub mod validation;

pub use generator::{GenerationOutcome, RoadmapGenerator, RoadmapSource};
