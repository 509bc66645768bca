// All LLM prompt constants for roadmap generation.
// Reuses cross-cutting fragments from llm_client::prompts.

/// Roadmap generation prompt template.
/// Replace: {target_role}, {industry}, {name}, {current_role}, {experience},
///          {skills}, {learning_style}, {timeframe}, {json_only_instruction}
pub const ROADMAP_PROMPT_TEMPLATE: &str = r#"Create a detailed career roadmap for someone transitioning to {target_role} in the {industry} industry.

Current situation:
- Name: {name}
- Current Role: {current_role}
- Experience: {experience} years
- Current Skills: {skills}
- Preferred Learning Style: {learning_style}
- Target Timeframe: {timeframe}

Please create a structured roadmap with 4-6 milestones. Each milestone should have:
- A clear title
- A description of what will be accomplished
- A realistic duration based on the timeframe
- 3-5 specific, actionable tasks

Focus on practical, industry-specific skills and experiences needed for {target_role}. Consider the user's current experience level and learning preferences.

{json_only_instruction}

The JSON object MUST have this EXACT schema (no extra fields):
{
  "role": "Data Scientist",
  "timeline": "6 months",
  "milestones": [
    {
      "id": 1,
      "title": "Foundation Building",
      "description": "Master the fundamental skills required",
      "duration": "4 weeks",
      "tasks": ["Complete foundational courses", "Build first portfolio project", "Set up professional profiles"]
    }
  ]
}

HARD RULES:
1. Between 4 and 6 milestones, never fewer, never more
2. Between 3 and 5 tasks per milestone
3. Milestone ids are integers starting at 1, unique, in order
4. `tasks` is an array of plain strings"#;

/// Substitutes `{key}` placeholders in one pass. Inserted values are never
/// rescanned, and braces that do not name a known key are copied as-is.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        let hit = tail.find('}').and_then(|end| {
            let key = &tail[1..end];
            values
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| (end, *value))
        });
        match hit {
            Some((end, value)) => {
                out.push_str(value);
                rest = &tail[end + 1..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}
