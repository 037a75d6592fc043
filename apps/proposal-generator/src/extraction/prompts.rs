// All LLM prompt constants for the Extraction stage.
// {transcript} is always substituted last so transcript text cannot inject placeholders.

/// System prompt for structured extraction. Enforces JSON-only output.
pub const EXTRACTION_SYSTEM: &str = "You are an expert sales analyst. \
    Read discovery call transcripts and extract structured information. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Customer extraction prompt template. Replace `{transcript}` before sending.
pub const CUSTOMER_PROMPT_TEMPLATE: &str = r#"Analyze the following discovery call transcript and extract customer information.

Transcript:
{transcript}

Extract the following information:
- Company name
- Industry sector
- Primary contact person name
- Email address (if mentioned)
- Phone number (if mentioned)

Return the information in this JSON format:
{
  "company_name": "Company Name Here",
  "industry": "Industry Here",
  "contact_person": "Contact Name Here",
  "email": "email@example.com or null",
  "phone": "phone number or null"
}

If any information is not clearly mentioned, use your best judgment based on context."#;

/// Requirements extraction prompt template.
/// Replace: {company_name}, then {transcript}
pub const REQUIREMENTS_PROMPT_TEMPLATE: &str = r#"Analyze the following discovery call transcript for {company_name} and extract project requirements.

Transcript:
{transcript}

Extract the following information:
- Project scope and main objectives
- Timeline expectations or constraints
- Budget range or budget constraints (if mentioned)
- Technical requirements and needs
- Key deliverables expected

Return the information in this JSON format:
{
  "scope": "Detailed project scope and objectives",
  "timeline": "Timeline information",
  "budget": "Budget information or null if not mentioned",
  "technical_needs": ["Technical need 1", "Technical need 2"],
  "key_deliverables": ["Deliverable 1", "Deliverable 2"]
}

Focus on what the client actually needs and mentioned during the call.
Be specific and actionable in your extraction."#;
