// Synthesis stage: customer + requirements -> narrative sections and a phase plan.
// Five LLM calls, one per section. Only the phase plan expects JSON, and it
// degrades to a fixed default plan instead of failing the run.

pub mod generator;
pub mod phases;
pub mod prompts;
pub mod sections;

pub use generator::{synthesize_sections, SynthesizedSections};
pub use phases::{generate_implementation_phases, next_steps};
pub use sections::{
    generate_executive_summary, generate_investment_summary, generate_roi_analysis,
    generate_success_vision,
};

/// Narrative sections get a little more latitude than extraction.
pub const SYNTHESIS_TEMPERATURE: f32 = 0.2;
