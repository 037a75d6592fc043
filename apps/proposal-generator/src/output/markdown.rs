use tera::{Context, Tera};

use crate::errors::AppError;
use crate::models::ProposalData;

const PROPOSAL_TEMPLATE_NAME: &str = "proposal.md";
const PROPOSAL_TEMPLATE: &str = include_str!("../../templates/proposal.md.tera");

/// Renders a `ProposalData` into its Markdown and JSON documents and writes them out.
///
/// The Markdown template is compiled once, at construction.
#[derive(Debug, Clone)]
pub struct ProposalRenderer {
    tera: Tera,
}

impl ProposalRenderer {
    pub fn new() -> Result<Self, AppError> {
        let mut tera = Tera::default();
        // Markdown, not HTML: `&` in a company name must survive.
        tera.autoescape_on(vec![]);
        tera.add_raw_template(PROPOSAL_TEMPLATE_NAME, PROPOSAL_TEMPLATE)
            .map_err(|e| AppError::Render(format!("Failed to load proposal template: {e}")))?;
        Ok(Self { tera })
    }

    /// Markdown document. `company_name` overrides the title only; the contact
    /// footer always shows the extracted company.
    pub fn format_markdown(
        &self,
        proposal: &ProposalData,
        company_name: Option<&str>,
    ) -> Result<String, AppError> {
        let mut context = Context::new();
        context.insert("proposal", proposal);
        context.insert(
            "company_name",
            company_name.unwrap_or(&proposal.customer_info.company_name),
        );
        context.insert("total_weeks", &proposal.total_duration_weeks());

        self.tera
            .render(PROPOSAL_TEMPLATE_NAME, &context)
            .map_err(|e| AppError::Render(format!("Failed to render proposal markdown: {e}")))
    }
}
