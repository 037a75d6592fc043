use std::fmt;

use serde::Serialize;
use uuid::Uuid;

use crate::errors::AppError;

/// Where a run is in the pipeline. Forward-only; `Done` and `Failed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStage {
    Reading,
    ExtractingCustomer,
    ExtractingRequirements,
    Synthesizing,
    Assembling,
    Writing,
    Done,
    Failed,
}

impl PipelineStage {
    /// The stage that follows on success; `None` for terminal stages.
    pub fn next(self) -> Option<Self> {
        use PipelineStage::*;
        match self {
            Reading => Some(ExtractingCustomer),
            ExtractingCustomer => Some(ExtractingRequirements),
            ExtractingRequirements => Some(Synthesizing),
            Synthesizing => Some(Assembling),
            Assembling => Some(Writing),
            Writing => Some(Done),
            Done | Failed => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, PipelineStage::Done | PipelineStage::Failed)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PipelineStage::Reading => "reading",
            PipelineStage::ExtractingCustomer => "extracting_customer",
            PipelineStage::ExtractingRequirements => "extracting_requirements",
            PipelineStage::Synthesizing => "synthesizing",
            PipelineStage::Assembling => "assembling",
            PipelineStage::Writing => "writing",
            PipelineStage::Done => "done",
            PipelineStage::Failed => "failed",
        }
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// State of a single pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineRun {
    run_id: Uuid,
    stage: PipelineStage,
    failed_stage: Option<PipelineStage>,
    error: Option<String>,
}

impl PipelineRun {
    pub fn new() -> Self {
        Self {
            run_id: Uuid::new_v4(),
            stage: PipelineStage::Reading,
            failed_stage: None,
            error: None,
        }
    }

    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    pub fn stage(&self) -> PipelineStage {
        self.stage
    }

    /// Stage that was active when the run failed.
    pub fn failed_stage(&self) -> Option<PipelineStage> {
        self.failed_stage
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Moves to the next stage and returns it.
    pub fn advance(&mut self) -> Result<PipelineStage, AppError> {
        let next = self.stage.next().ok_or_else(|| {
            AppError::Internal(anyhow::anyhow!(
                "cannot advance run {} past terminal stage {}",
                self.run_id,
                self.stage
            ))
        })?;
        self.stage = next;
        Ok(next)
    }

    /// Jumps straight to `Failed`, remembering the stage that failed and why.
    pub fn fail(&mut self, message: impl Into<String>) -> Result<(), AppError> {
        if self.stage.is_terminal() {
            return Err(AppError::Internal(anyhow::anyhow!(
                "cannot fail run {} from terminal stage {}",
                self.run_id,
                self.stage
            )));
        }
        self.failed_stage = Some(self.stage);
        self.error = Some(message.into());
        self.stage = PipelineStage::Failed;
        Ok(())
    }
}

impl Default for PipelineRun {
    fn default() -> Self {
        Self::new()
    }
}
