//! Narrative proposal sections: one LLM call each, response trimmed and kept as prose.

use tracing::{debug, warn};

use crate::errors::AppError;
use crate::llm_client::prompts::{join_or, NOT_SPECIFIED, PROPOSAL_WRITER_SYSTEM};
use crate::llm_client::LlmBackend;
use crate::models::{CustomerInfo, ProjectRequirements};
use crate::synthesis::prompts::{
    EXECUTIVE_SUMMARY_TEMPLATE, INVESTMENT_SUMMARY_TEMPLATE, ROI_ANALYSIS_TEMPLATE,
    SUCCESS_VISION_TEMPLATE,
};
use crate::synthesis::SYNTHESIS_TEMPERATURE;

pub async fn generate_executive_summary(
    customer: &CustomerInfo,
    requirements: &ProjectRequirements,
    llm: &dyn LlmBackend,
) -> Result<String, AppError> {
    let prompt = EXECUTIVE_SUMMARY_TEMPLATE
        .replace("{company_name}", &customer.company_name)
        .replace("{industry}", &customer.industry)
        .replace("{scope}", &requirements.scope);
    write_section("executive summary", &prompt, llm).await
}

pub async fn generate_success_vision(
    customer: &CustomerInfo,
    requirements: &ProjectRequirements,
    llm: &dyn LlmBackend,
) -> Result<String, AppError> {
    let prompt = SUCCESS_VISION_TEMPLATE
        .replace("{company_name}", &customer.company_name)
        .replace(
            "{deliverables}",
            &join_or(&requirements.key_deliverables, NOT_SPECIFIED),
        )
        .replace("{scope}", &requirements.scope);
    write_section("success vision", &prompt, llm).await
}

/// Budget figures only reach the prompt when the customer actually named one.
pub async fn generate_investment_summary(
    customer: &CustomerInfo,
    requirements: &ProjectRequirements,
    llm: &dyn LlmBackend,
) -> Result<String, AppError> {
    let budget = requirements.budget.as_deref().unwrap_or(NOT_SPECIFIED);
    let prompt = INVESTMENT_SUMMARY_TEMPLATE
        .replace("{company_name}", &customer.company_name)
        .replace("{budget}", budget)
        .replace("{scope}", &requirements.scope);
    write_section("investment summary", &prompt, llm).await
}

pub async fn generate_roi_analysis(
    customer: &CustomerInfo,
    requirements: &ProjectRequirements,
    llm: &dyn LlmBackend,
) -> Result<String, AppError> {
    let prompt = ROI_ANALYSIS_TEMPLATE
        .replace("{company_name}", &customer.company_name)
        .replace("{industry}", &customer.industry)
        .replace("{scope}", &requirements.scope);
    write_section("ROI analysis", &prompt, llm).await
}

async fn write_section(
    section: &'static str,
    prompt: &str,
    llm: &dyn LlmBackend,
) -> Result<String, AppError> {
    debug!(section, prompt_chars = prompt.len(), "Requesting proposal section");

    let text = llm
        .complete(prompt, PROPOSAL_WRITER_SYSTEM, SYNTHESIS_TEMPERATURE)
        .await
        .map_err(|e| AppError::Llm(format!("Failed to generate {section}: {e}")))?;

    let text = text.trim().to_string();
    if text.is_empty() {
        warn!(section, "Model returned an empty section");
    }
    Ok(text)
}
