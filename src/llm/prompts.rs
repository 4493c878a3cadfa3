//! Fixed prompts and sampling parameters for first-aid advisory requests.

/// Persona given to the model as the system message.
pub const SYSTEM_PROMPT: &str =
    "You are an emergency medical assistant providing clear, detailed, safe guidance for bystanders.";

/// User message template (uses the `{query}` placeholder).
pub const GUIDANCE_PROMPT: &str = "Provide detailed, step-by-step first aid guidance for: {query}";

/// Sampling temperature for every advisory request.
pub const ADVISORY_TEMPERATURE: f32 = 0.4;

/// Output token cap for every advisory request.
pub const ADVISORY_MAX_TOKENS: u32 = 500;

/// Fill the guidance template with the raw user query.
pub fn guidance_prompt(query: &str) -> String {
    GUIDANCE_PROMPT.replace("{query}", query)
}
