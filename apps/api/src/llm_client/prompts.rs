// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// Instruction appended to every prompt that expects a JSON object back.
pub const JSON_ONLY_INSTRUCTION: &str = "\
    Return ONLY a valid JSON object. \
    Do NOT wrap it in markdown code fences such as ```json. \
    Do NOT include any text, explanations or apologies outside the JSON object.";
