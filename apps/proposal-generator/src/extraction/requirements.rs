use tracing::{debug, info};

use crate::errors::AppError;
use crate::extraction::normalize::{optional_text, required_text, string_list};
use crate::extraction::prompts::{EXTRACTION_SYSTEM, REQUIREMENTS_PROMPT_TEMPLATE};
use crate::extraction::EXTRACTION_TEMPERATURE;
use crate::llm_client::{parse_json_object, LlmBackend};
use crate::models::{CustomerInfo, ProjectRequirements};

const TARGET: &str = "project requirements";

/// Extracts scope, timeline, budget and the needs/deliverables lists for `customer`.
pub async fn extract_project_requirements(
    transcript: &str,
    customer: &CustomerInfo,
    llm: &dyn LlmBackend,
) -> Result<ProjectRequirements, AppError> {
    let prompt = REQUIREMENTS_PROMPT_TEMPLATE
        .replace("{company_name}", &customer.company_name)
        .replace("{transcript}", transcript);
    debug!("Requirements extraction prompt: {} chars", prompt.len());

    let raw = llm
        .complete(&prompt, EXTRACTION_SYSTEM, EXTRACTION_TEMPERATURE)
        .await
        .map_err(|e| AppError::Llm(format!("Requirements extraction call failed: {e}")))?;

    let requirements = parse_project_requirements(&raw)?;
    info!(
        technical_needs = requirements.technical_needs.len(),
        key_deliverables = requirements.key_deliverables.len(),
        "Extracted project requirements"
    );
    Ok(requirements)
}

/// Parses a raw model response into `ProjectRequirements`.
///
/// `scope` and `timeline` are kept verbatim. `budget` gets the usual
/// `"null"`/empty coercion and list fields that are not arrays become empty.
pub fn parse_project_requirements(raw: &str) -> Result<ProjectRequirements, AppError> {
    let value = parse_json_object(raw).map_err(|e| AppError::extraction(TARGET, e, raw))?;
    let object = value
        .as_object()
        .ok_or_else(|| AppError::extraction(TARGET, "response is not a JSON object", raw))?;

    let scope = required_text(object, "scope").map_err(|e| AppError::extraction(TARGET, e, raw))?;
    let timeline =
        required_text(object, "timeline").map_err(|e| AppError::extraction(TARGET, e, raw))?;
    let budget = optional_text(object, "budget").map_err(|e| AppError::extraction(TARGET, e, raw))?;

    Ok(ProjectRequirements {
        budget,
        technical_needs: string_list(object, "technical_needs"),
        key_deliverables: string_list(object, "key_deliverables"),
        ..ProjectRequirements::new(scope, timeline)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::testing::ScriptedLlm;
    use crate::models::proposal::fixtures::sample_customer;

    const FULL_RESPONSE: &str = r#"{
        "scope": "Modernize legacy systems",
        "timeline": "6 months",
        "budget": "$200K-$500K",
        "technical_needs": ["POS system upgrade", "Inventory management automation"],
        "key_deliverables": ["99.9% system uptime", "PCI DSS compliance"]
    }"#;

    #[test]
    fn test_full_response() {
        let requirements = parse_project_requirements(FULL_RESPONSE).unwrap();
        assert_eq!(requirements.scope, "Modernize legacy systems");
        assert_eq!(requirements.timeline, "6 months");
        assert_eq!(requirements.budget.as_deref(), Some("$200K-$500K"));
        assert_eq!(requirements.technical_needs.len(), 2);
        assert_eq!(requirements.key_deliverables[1], "PCI DSS compliance");
    }

    #[test]
    fn test_null_budget_string_is_absent() {
        let raw = r#"{"scope": "Cloud migration", "timeline": "Q3", "budget": "null"}"#;
        let requirements = parse_project_requirements(raw).unwrap();
        assert!(requirements.budget.is_none());
    }

    #[test]
    fn test_non_list_needs_become_empty() {
        let raw = r#"{"scope": "Cloud migration", "timeline": "Q3",
                      "technical_needs": "Kubernetes", "key_deliverables": null}"#;
        let requirements = parse_project_requirements(raw).unwrap();
        assert!(requirements.technical_needs.is_empty());
        assert!(requirements.key_deliverables.is_empty());
    }

    #[test]
    fn test_missing_timeline_is_an_extraction_error() {
        let raw = r#"{"scope": "Cloud migration"}"#;
        let err = parse_project_requirements(raw).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Failed to parse project requirements"));
        assert!(message.contains("missing required field 'timeline'"));
    }

    #[test]
    fn test_array_response_is_rejected() {
        assert!(parse_project_requirements("no object here, just [1, 2]").is_err());
    }

    #[tokio::test]
    async fn test_extract_names_company_and_keeps_transcript_verbatim() {
        let llm = ScriptedLlm::new([FULL_RESPONSE]);
        let transcript = "We said {company_name} out loud in the call.";
        extract_project_requirements(transcript, &sample_customer(), &llm)
            .await
            .unwrap();

        let calls = llm.calls();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].0.contains("discovery call transcript for Test Corp"));
        assert!(calls[0].0.contains("We said {company_name} out loud in the call."));
    }
}
