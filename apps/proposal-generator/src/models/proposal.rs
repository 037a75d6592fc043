use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::{CustomerInfo, ProjectRequirements};

/// One phase of the implementation plan. `duration_weeks` is always positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ImplementationPhaseRecord")]
pub struct ImplementationPhase {
    pub name: String,
    pub activities: Vec<String>,
    pub duration_weeks: u32,
    pub deliverables: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ImplementationPhaseRecord {
    name: String,
    activities: Vec<String>,
    duration_weeks: i64,
    #[serde(default)]
    deliverables: Vec<String>,
}

impl TryFrom<ImplementationPhaseRecord> for ImplementationPhase {
    type Error = AppError;

    fn try_from(record: ImplementationPhaseRecord) -> Result<Self, Self::Error> {
        ImplementationPhase::new(
            record.name,
            record.duration_weeks,
            record.activities,
            record.deliverables,
        )
    }
}

impl ImplementationPhase {
    pub fn new(
        name: impl Into<String>,
        duration_weeks: i64,
        activities: Vec<String>,
        deliverables: Vec<String>,
    ) -> Result<Self, AppError> {
        if duration_weeks <= 0 {
            return Err(AppError::Validation(format!(
                "duration_weeks must be positive, got {duration_weeks}"
            )));
        }
        let duration_weeks = u32::try_from(duration_weeks).map_err(|_| {
            AppError::Validation(format!("duration_weeks {duration_weeks} is out of range"))
        })?;

        Ok(Self {
            name: name.into(),
            activities,
            duration_weeks,
            deliverables,
        })
    }
}

/// The complete proposal aggregate. Built once per run, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProposalData {
    pub customer_info: CustomerInfo,
    pub requirements: ProjectRequirements,
    pub executive_summary: String,
    #[serde(rename = "what_success_looks_like")]
    pub success_vision: String,
    pub implementation_phases: Vec<ImplementationPhase>,
    pub investment_summary: String,
    pub roi_analysis: String,
    pub next_steps: Vec<String>,
}

impl ProposalData {
    /// Sum of every phase duration; zero when the plan has no phases.
    pub fn total_duration_weeks(&self) -> u32 {
        self.implementation_phases
            .iter()
            .map(|phase| phase.duration_weeks)
            .sum()
    }

    pub fn phase_names(&self) -> Vec<&str> {
        self.implementation_phases
            .iter()
            .map(|phase| phase.name.as_str())
            .collect()
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn test_zero_duration_is_rejected() {
        assert!(ImplementationPhase::new("Phase 1", 0, vec![], vec![]).is_err());
    }

    #[test]
    fn test_negative_duration_is_rejected() {
        let err = ImplementationPhase::new("Phase 1", -3, vec![], vec![]).unwrap_err();
        assert!(err.to_string().contains("must be positive"));
    }

    #[test]
    fn test_oversized_duration_is_rejected() {
        assert!(ImplementationPhase::new("Phase 1", i64::from(u32::MAX) + 1, vec![], vec![]).is_err());
    }

    #[test]
    fn test_phase_deserialization_runs_validation() {
        let json = r#"{"name": "Phase 1", "activities": ["a"], "duration_weeks": 0}"#;
        assert!(serde_json::from_str::<ImplementationPhase>(json).is_err());
    }

    #[test]
    fn test_phase_deliverables_default_to_empty() {
        let json = r#"{"name": "Phase 1", "activities": ["a"], "duration_weeks": 3}"#;
        let phase: ImplementationPhase = serde_json::from_str(json).unwrap();
        assert_eq!(phase.duration_weeks, 3);
        assert!(phase.deliverables.is_empty());
    }

    #[test]
    fn test_total_duration_is_sum_of_phases() {
        assert_eq!(sample_proposal().total_duration_weeks(), 12);
    }

    #[test]
    fn test_total_duration_of_empty_plan_is_zero() {
        let proposal = ProposalData {
            implementation_phases: vec![],
            ..sample_proposal()
        };
        assert_eq!(proposal.total_duration_weeks(), 0);
    }

    #[test]
    fn test_total_duration_single_phase() {
        let proposal = ProposalData {
            implementation_phases: vec![phase("Only", 5)],
            ..sample_proposal()
        };
        assert_eq!(proposal.total_duration_weeks(), 5);
    }

    #[test]
    fn test_phase_names_keep_plan_order() {
        assert_eq!(
            sample_proposal().phase_names(),
            vec!["Phase 1: Discovery & Planning", "Phase 2: Implementation"]
        );
    }

    #[test]
    fn test_success_vision_serializes_as_what_success_looks_like() {
        let value = serde_json::to_value(sample_proposal()).unwrap();
        assert!(value.get("what_success_looks_like").is_some());
        assert!(value.get("success_vision").is_none());
    }
}
