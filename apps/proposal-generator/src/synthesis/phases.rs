//! Implementation plan generation, the default plan it falls back to, and the
//! fixed next-steps list.

use serde::Deserialize;
use serde_json::Value;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::llm_client::prompts::{join_or, JSON_ONLY_SYSTEM, NONE_SPECIFIED};
use crate::llm_client::{parse_json_object, LlmBackend};
use crate::models::{CustomerInfo, ImplementationPhase, ProjectRequirements};
use crate::synthesis::prompts::IMPLEMENTATION_PHASES_TEMPLATE;
use crate::synthesis::SYNTHESIS_TEMPERATURE;

const TARGET: &str = "implementation phases";

/// (name, weeks, activities, deliverables)
type PhaseSpec = (&'static str, u32, &'static [&'static str], &'static [&'static str]);

const DEFAULT_PHASES: [PhaseSpec; 3] = [
    (
        "Phase 1: Discovery & Planning",
        2,
        &["Initial consultation", "Requirements analysis", "Project planning"],
        &["Project plan", "Requirements document"],
    ),
    (
        "Phase 2: Development & Implementation",
        6,
        &["Core development", "Integration", "Testing"],
        &["Functional system", "Test results"],
    ),
    (
        "Phase 3: Deployment & Training",
        2,
        &["System deployment", "User training", "Go-live support"],
        &["Live system", "User documentation", "Training materials"],
    ),
];

const NEXT_STEPS: [&str; 4] = [
    "Review and approve this proposal",
    "Schedule a project kickoff meeting",
    "Finalize contract terms and timeline",
    "Begin Phase 1: Discovery & Planning",
];

#[derive(Debug, Deserialize)]
struct PhasePlanRecord {
    phases: Vec<PhaseRecord>,
}

#[derive(Debug, Deserialize)]
struct PhaseRecord {
    name: String,
    activities: Vec<String>,
    duration_weeks: Value,
    #[serde(default)]
    deliverables: Vec<String>,
}

/// The three-phase plan (2, 6, 2 weeks) used whenever the model's plan is unusable.
pub fn default_phase_plan() -> Vec<ImplementationPhase> {
    DEFAULT_PHASES
        .iter()
        .map(|(name, weeks, activities, deliverables)| ImplementationPhase {
            name: (*name).to_string(),
            activities: activities.iter().map(|s| (*s).to_string()).collect(),
            duration_weeks: *weeks,
            deliverables: deliverables.iter().map(|s| (*s).to_string()).collect(),
        })
        .collect()
}

/// Closing steps of every proposal. Not model-generated.
pub fn next_steps() -> Vec<String> {
    NEXT_STEPS.iter().map(|s| (*s).to_string()).collect()
}

/// Asks the LLM for a phase plan.
///
/// A plan that fails to parse or validate is replaced wholesale by
/// `default_phase_plan()`. Transport errors are not parse failures and are
/// returned to the caller.
pub async fn generate_implementation_phases(
    customer: &CustomerInfo,
    requirements: &ProjectRequirements,
    llm: &dyn LlmBackend,
) -> Result<Vec<ImplementationPhase>, AppError> {
    let prompt = IMPLEMENTATION_PHASES_TEMPLATE
        .replace("{company_name}", &customer.company_name)
        .replace("{timeline}", &requirements.timeline)
        .replace(
            "{technical_needs}",
            &join_or(&requirements.technical_needs, NONE_SPECIFIED),
        )
        .replace("{scope}", &requirements.scope);

    let raw = llm
        .complete(&prompt, JSON_ONLY_SYSTEM, SYNTHESIS_TEMPERATURE)
        .await
        .map_err(|e| AppError::Llm(format!("Failed to generate {TARGET}: {e}")))?;

    match parse_implementation_phases(&raw) {
        Ok(phases) => {
            info!("Generated {} implementation phases", phases.len());
            Ok(phases)
        }
        Err(e) => {
            warn!(error = %e, "Phase plan unusable, substituting default plan");
            Ok(default_phase_plan())
        }
    }
}

/// Parses `{"phases": [...]}` into validated phases. All or nothing: one bad
/// phase rejects the whole plan.
pub fn parse_implementation_phases(raw: &str) -> Result<Vec<ImplementationPhase>, AppError> {
    let value = parse_json_object(raw).map_err(|e| AppError::extraction(TARGET, e, raw))?;
    let plan: PhasePlanRecord =
        serde_json::from_value(value).map_err(|e| AppError::extraction(TARGET, e, raw))?;

    plan.phases
        .into_iter()
        .map(|record| {
            whole_weeks(&record.duration_weeks)
                .ok_or_else(|| {
                    AppError::extraction(
                        TARGET,
                        format!("duration_weeks {} is not a whole number", record.duration_weeks),
                        raw,
                    )
                })
                .and_then(|weeks| {
                    ImplementationPhase::new(
                        record.name,
                        weeks,
                        record.activities,
                        record.deliverables,
                    )
                })
        })
        .collect()
}

/// Integers pass through, floats truncate toward zero, numeric strings are parsed.
fn whole_weeks(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.abs() < i64::MAX as f64)
                .map(|f| f.trunc() as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
