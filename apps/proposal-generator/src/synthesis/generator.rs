use tracing::info;

use crate::errors::AppError;
use crate::llm_client::LlmBackend;
use crate::models::{CustomerInfo, ImplementationPhase, ProjectRequirements};
use crate::synthesis::{
    generate_executive_summary, generate_implementation_phases, generate_investment_summary,
    generate_roi_analysis, generate_success_vision, next_steps,
};

/// Everything the synthesis stage contributes to a proposal.
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesizedSections {
    pub executive_summary: String,
    pub success_vision: String,
    pub implementation_phases: Vec<ImplementationPhase>,
    pub investment_summary: String,
    pub roi_analysis: String,
    pub next_steps: Vec<String>,
}

/// Runs the five section calls in order, then appends the fixed next steps.
///
/// Calls are sequential; the first transport failure aborts the stage.
pub async fn synthesize_sections(
    customer: &CustomerInfo,
    requirements: &ProjectRequirements,
    llm: &dyn LlmBackend,
) -> Result<SynthesizedSections, AppError> {
    info!("Generating executive summary");
    let executive_summary = generate_executive_summary(customer, requirements, llm).await?;

    info!("Generating success vision");
    let success_vision = generate_success_vision(customer, requirements, llm).await?;

    info!("Generating implementation phases");
    let implementation_phases = generate_implementation_phases(customer, requirements, llm).await?;

    info!("Generating investment summary");
    let investment_summary = generate_investment_summary(customer, requirements, llm).await?;

    info!("Generating ROI analysis");
    let roi_analysis = generate_roi_analysis(customer, requirements, llm).await?;

    Ok(SynthesizedSections {
        executive_summary,
        success_vision,
        implementation_phases,
        investment_summary,
        roi_analysis,
        next_steps: next_steps(),
    })
}
