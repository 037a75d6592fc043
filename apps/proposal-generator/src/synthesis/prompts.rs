// All LLM prompt constants for the Synthesis stage.
// Placeholders are replaced with `str::replace`; list fields arrive pre-joined.

/// Executive summary. Replace: {company_name}, {industry}, {scope}
pub const EXECUTIVE_SUMMARY_TEMPLATE: &str = r#"Create a compelling executive summary for a business proposal.

Client: {company_name} in the {industry} industry
Project Scope: {scope}

Write a professional executive summary that:
- Clearly articulates the client's challenges and opportunities
- Positions our solution as the ideal fit
- Highlights key benefits and outcomes
- Maintains a confident but not overselling tone

Keep it concise but compelling, around 150-200 words."#;

/// "What Success Looks Like". Replace: {company_name}, {scope}, {deliverables}
pub const SUCCESS_VISION_TEMPLATE: &str = r#"Create a "What Success Looks Like" section for {company_name}.

Project Scope: {scope}
Key Deliverables: {deliverables}

Paint a vivid picture of the successful project outcome:
- Specific, measurable results the client will see
- How their business operations will improve
- The competitive advantages they'll gain
- Long-term benefits and growth potential

Make it inspiring but realistic. Use bullet points for clarity."#;

/// Implementation plan, JSON output.
/// Replace: {company_name}, {scope}, {timeline}, {technical_needs}
pub const IMPLEMENTATION_PHASES_TEMPLATE: &str = r#"Create a detailed implementation plan for {company_name}.

Project Scope: {scope}
Timeline: {timeline}
Technical Needs: {technical_needs}

Create 3-5 logical project phases. For each phase, provide:
1. Phase name
2. List of specific activities (3-5 activities per phase)
3. Duration in weeks (must be a whole number)
4. Key deliverables for that phase

Return as JSON in this exact format:
{
  "phases": [
    {
      "name": "Phase 1: Discovery & Planning",
      "activities": ["Activity 1", "Activity 2", "Activity 3"],
      "duration_weeks": 2,
      "deliverables": ["Deliverable 1", "Deliverable 2"]
    }
  ]
}

Ensure duration_weeks are realistic and add up to a reasonable total timeline."#;

/// Investment summary. Replace: {company_name}, {scope}, {budget}
pub const INVESTMENT_SUMMARY_TEMPLATE: &str = r#"Create an investment summary for {company_name}.

Project Scope: {scope}
Budget Context: {budget}

Create a professional investment summary that:
- Positions the investment as value-driven
- Explains what's included in the engagement
- Addresses typical pricing concerns
- Suggests next steps for detailed pricing

Don't include specific numbers unless budget was mentioned.
Focus on value and ROI potential."#;

/// ROI analysis. Replace: {company_name}, {industry}, {scope}
pub const ROI_ANALYSIS_TEMPLATE: &str = r#"Create an ROI analysis for {company_name} in the {industry} industry.

Project Scope: {scope}

Analyze potential return on investment by covering:
- Cost savings opportunities
- Revenue generation potential
- Efficiency improvements
- Competitive advantages
- Risk mitigation benefits

Use industry-specific insights where possible.
Be realistic but compelling about ROI potential."#;
