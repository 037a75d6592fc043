use tracing::info;

use crate::models::{CustomerInfo, ProjectRequirements, ProposalData};
use crate::synthesis::SynthesizedSections;

/// Merges the extraction and synthesis results into the proposal aggregate.
pub fn assemble_proposal(
    customer: CustomerInfo,
    requirements: ProjectRequirements,
    sections: SynthesizedSections,
) -> ProposalData {
    let proposal = ProposalData {
        customer_info: customer,
        requirements,
        executive_summary: sections.executive_summary,
        success_vision: sections.success_vision,
        implementation_phases: sections.implementation_phases,
        investment_summary: sections.investment_summary,
        roi_analysis: sections.roi_analysis,
        next_steps: sections.next_steps,
    };

    info!(
        phases = proposal.implementation_phases.len(),
        total_weeks = proposal.total_duration_weeks(),
        "Assembled proposal for {}",
        proposal.customer_info.company_name
    );
    proposal
}
