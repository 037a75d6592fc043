// Shared prompt constants and prompt-building utilities.
// Each stage that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// System prompt for narrative proposal sections.
pub const PROPOSAL_WRITER_SYSTEM: &str = "You are a senior solutions consultant \
    writing sections of a business proposal for a prospective client. \
    Write in clear, professional prose. \
    Ground every statement in the client details you are given. \
    Do NOT invent names, figures, or commitments that were not provided. \
    Return only the section text, without a heading.";

/// Placeholder used when an optional free-text value is absent.
pub const NOT_SPECIFIED: &str = "Not specified";

/// Placeholder used when an optional list is empty.
pub const NONE_SPECIFIED: &str = "None specified";

/// Joins list items for prompt interpolation, or returns `fallback` when empty.
pub fn join_or(items: &[String], fallback: &str) -> String {
    if items.is_empty() {
        fallback.to_string()
    } else {
        items.join(", ")
    }
}
