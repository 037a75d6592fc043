//! Pulls company, industry and contact details out of a transcript.

use tracing::{debug, info};

use crate::errors::AppError;
use crate::extraction::normalize::optional_text;
use crate::extraction::prompts::{CUSTOMER_PROMPT_TEMPLATE, EXTRACTION_SYSTEM};
use crate::extraction::EXTRACTION_TEMPERATURE;
use crate::llm_client::{parse_json_object, LlmBackend};
use crate::models::CustomerInfo;

const TARGET: &str = "customer information";

/// Asks the LLM for the customer record and validates what comes back.
pub async fn extract_customer_info(
    transcript: &str,
    llm: &dyn LlmBackend,
) -> Result<CustomerInfo, AppError> {
    let prompt = CUSTOMER_PROMPT_TEMPLATE.replace("{transcript}", transcript);
    debug!("Customer extraction prompt: {} chars", prompt.len());

    let raw = llm
        .complete(&prompt, EXTRACTION_SYSTEM, EXTRACTION_TEMPERATURE)
        .await
        .map_err(|e| AppError::Llm(format!("Customer extraction call failed: {e}")))?;

    let customer = parse_customer_info(&raw)?;
    info!("Extracted info for: {}", customer.company_name);
    Ok(customer)
}

/// Parses a raw model response into a `CustomerInfo`.
///
/// The `"null"`/empty coercion applies to every field, so a required field the
/// model left as `"null"` is reported as missing.
pub fn parse_customer_info(raw: &str) -> Result<CustomerInfo, AppError> {
    let value = parse_json_object(raw).map_err(|e| AppError::extraction(TARGET, e, raw))?;
    let object = value
        .as_object()
        .ok_or_else(|| AppError::extraction(TARGET, "response is not a JSON object", raw))?;

    let field = |key: &str| {
        optional_text(object, key).map_err(|e| AppError::extraction(TARGET, e, raw))
    };
    let required = |key: &str| -> Result<String, AppError> {
        field(key)?.ok_or_else(|| {
            AppError::extraction(TARGET, format!("missing required field '{key}'"), raw)
        })
    };

    CustomerInfo::new(
        required("company_name")?,
        required("industry")?,
        required("contact_person")?,
        field("email")?,
        field("phone")?,
    )
    .map_err(|e| AppError::extraction(TARGET, e, raw))
}
