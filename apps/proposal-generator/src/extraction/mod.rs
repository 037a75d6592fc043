// Extraction stage: transcript text -> structured customer and requirements records.
// Fail-fast: any unparseable or invalid model output aborts the run.
// All LLM calls go through the LlmBackend seam in llm_client.

pub mod customer;
pub mod normalize;
pub mod prompts;
pub mod requirements;

pub use customer::extract_customer_info;
pub use requirements::extract_project_requirements;

/// Low temperature keeps extraction close to what was actually said.
pub const EXTRACTION_TEMPERATURE: f32 = 0.3;
