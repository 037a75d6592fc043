use serde::Serialize;

use crate::errors::AppError;
use crate::models::ProposalData;
use crate::output::ProposalRenderer;

/// On-disk JSON shape: the proposal's own fields plus the derived total.
#[derive(Serialize)]
struct ProposalDocument<'a> {
    #[serde(flatten)]
    proposal: &'a ProposalData,
    total_duration_weeks: u32,
}

impl ProposalRenderer {
    /// Pretty-printed (2-space) JSON. Absent optionals are written as `null`
    /// and non-ASCII text is kept as-is.
    pub fn format_json(&self, proposal: &ProposalData) -> Result<String, AppError> {
        let document = ProposalDocument {
            proposal,
            total_duration_weeks: proposal.total_duration_weeks(),
        };
        serde_json::to_string_pretty(&document)
            .map_err(|e| AppError::Render(format!("Failed to serialize proposal: {e}")))
    }
}
