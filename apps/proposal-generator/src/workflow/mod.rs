//! Proposal workflow: runs a transcript through extraction, synthesis,
//! assembly and output, one stage at a time.
//!
//! Every entry point returns a `WorkflowResult`; errors never escape as `Err`.
//! A failed run writes no files.

pub mod stage;
pub mod transcript;

use std::path::Path;
use std::sync::Arc;

use serde::Serialize;
use tracing::{error, info, info_span, Instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::extraction::{extract_customer_info, extract_project_requirements};
use crate::llm_client::LlmBackend;
use crate::models::ProposalData;
use crate::output::{assemble_proposal, OutputPaths, ProposalRenderer};
use crate::synthesis::synthesize_sections;

pub use stage::{PipelineRun, PipelineStage};
pub use transcript::read_transcript;

const PROCESSING_ERROR_PREFIX: &str = "Error during processing";
const READING_ERROR_PREFIX: &str = "Error reading transcript file";

/// Outcome of one run, success or failure, in a single shape.
#[derive(Debug, Clone, Serialize)]
pub struct WorkflowResult {
    pub success: bool,
    pub run_id: Uuid,
    pub stage: PipelineStage,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_stage: Option<PipelineStage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proposal: Option<ProposalData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_paths: Option<OutputPaths>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_duration_weeks: Option<u32>,
}

impl WorkflowResult {
    fn completed(run: &PipelineRun, proposal: ProposalData, file_paths: OutputPaths) -> Self {
        Self {
            success: true,
            run_id: run.run_id(),
            stage: run.stage(),
            failed_stage: None,
            error: None,
            total_duration_weeks: Some(proposal.total_duration_weeks()),
            proposal: Some(proposal),
            file_paths: Some(file_paths),
        }
    }

    fn failed(run: &PipelineRun) -> Self {
        Self {
            success: false,
            run_id: run.run_id(),
            stage: run.stage(),
            failed_stage: run.failed_stage(),
            error: run.error().map(str::to_string),
            proposal: None,
            file_paths: None,
            total_duration_weeks: None,
        }
    }
}

pub struct ProposalWorkflow {
    llm: Arc<dyn LlmBackend>,
    renderer: ProposalRenderer,
}

impl ProposalWorkflow {
    pub fn new(llm: Arc<dyn LlmBackend>) -> Result<Self, AppError> {
        Ok(Self {
            llm,
            renderer: ProposalRenderer::new()?,
        })
    }

    /// Runs the pipeline over transcript text already in memory.
    // Not reached from the CLI, which always starts from a file
    #[allow(dead_code)]
    pub async fn process_transcript_text(
        &self,
        text: &str,
        output_folder: &Path,
        filename: Option<&str>,
    ) -> WorkflowResult {
        let mut run = PipelineRun::new();
        let span = info_span!("proposal_run", run_id = %run.run_id(), model = self.llm.model());

        async {
            let transcript = text.trim();
            if transcript.is_empty() {
                let e = AppError::EmptyTranscript("Transcript text is empty".to_string());
                return fail_run(&mut run, PROCESSING_ERROR_PREFIX, &e);
            }
            self.run_pipeline(&mut run, transcript, output_folder, filename)
                .await
        }
        .instrument(span)
        .await
    }

    /// Reads a transcript file, then runs the pipeline over its contents.
    pub async fn process_transcript_file(
        &self,
        path: &Path,
        output_folder: &Path,
        filename: Option<&str>,
    ) -> WorkflowResult {
        let mut run = PipelineRun::new();
        let span = info_span!(
            "proposal_run",
            run_id = %run.run_id(),
            model = self.llm.model(),
            input = %path.display()
        );

        async {
            let transcript = match read_transcript(path).await {
                Ok(text) => text,
                Err(e) => return fail_run(&mut run, READING_ERROR_PREFIX, &e),
            };
            self.run_pipeline(&mut run, &transcript, output_folder, filename)
                .await
        }
        .instrument(span)
        .await
    }

    async fn run_pipeline(
        &self,
        run: &mut PipelineRun,
        transcript: &str,
        output_folder: &Path,
        filename: Option<&str>,
    ) -> WorkflowResult {
        info!("Processing transcript ({} chars)", transcript.chars().count());

        match self.execute(run, transcript, output_folder, filename).await {
            Ok((proposal, paths)) => {
                info!(
                    total_weeks = proposal.total_duration_weeks(),
                    "Proposal complete for {}", proposal.customer_info.company_name
                );
                WorkflowResult::completed(run, proposal, paths)
            }
            Err(e) => fail_run(run, PROCESSING_ERROR_PREFIX, &e),
        }
    }

    async fn execute(
        &self,
        run: &mut PipelineRun,
        transcript: &str,
        output_folder: &Path,
        filename: Option<&str>,
    ) -> Result<(ProposalData, OutputPaths), AppError> {
        let llm = self.llm.as_ref();

        run.advance()?;
        info!("Step 1: Extracting customer information");
        let customer = extract_customer_info(transcript, llm).await?;

        run.advance()?;
        info!("Step 2: Extracting project requirements");
        let requirements = extract_project_requirements(transcript, &customer, llm).await?;
        info!(
            "Requirements extracted: {}",
            requirements.scope.chars().take(100).collect::<String>()
        );

        run.advance()?;
        info!("Step 3: Generating proposal sections");
        let sections = synthesize_sections(&customer, &requirements, llm).await?;

        run.advance()?;
        let proposal = assemble_proposal(customer, requirements, sections);

        run.advance()?;
        info!("Step 4: Formatting and saving outputs");
        let paths = self
            .renderer
            .save_outputs(&proposal, output_folder, filename)
            .await?;

        run.advance()?;
        Ok((proposal, paths))
    }
}

fn fail_run(run: &mut PipelineRun, prefix: &str, e: &AppError) -> WorkflowResult {
    let message = format!("{prefix}: {e}");
    error!(code = e.code(), stage = %run.stage(), "{message}");
    if let Err(transition) = run.fail(message) {
        error!(error = %transition, "Run already finished");
    }
    WorkflowResult::failed(run)
}
