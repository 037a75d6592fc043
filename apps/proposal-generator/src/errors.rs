use std::path::PathBuf;

use thiserror::Error;

/// Longest slice of a raw model response carried inside an extraction error.
pub const RESPONSE_SNIPPET_CHARS: usize = 200;

/// Application-level error type.
/// Every pipeline step returns `Result<T, AppError>`; the workflow turns the
/// first one it sees into a failed `WorkflowResult`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Transcript file not found: {}", .0.display())]
    TranscriptNotFound(PathBuf),

    #[error("{0}")]
    EmptyTranscript(String),

    #[error("Failed to parse {target}: {reason}. Response began: {snippet:?}")]
    Extraction {
        target: &'static str,
        reason: String,
        snippet: String,
    },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Builds an extraction error, keeping at most `RESPONSE_SNIPPET_CHARS`
    /// characters of the raw response for diagnosis.
    pub fn extraction(target: &'static str, reason: impl ToString, raw_response: &str) -> Self {
        AppError::Extraction {
            target,
            reason: reason.to_string(),
            snippet: response_snippet(raw_response),
        }
    }

    /// Stable identifier used in structured log events.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::TranscriptNotFound(_) => "TRANSCRIPT_NOT_FOUND",
            AppError::EmptyTranscript(_) => "EMPTY_TRANSCRIPT",
            AppError::Extraction { .. } => "EXTRACTION_ERROR",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Llm(_) => "LLM_ERROR",
            AppError::Render(_) => "RENDER_ERROR",
            AppError::Io(_) => "IO_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

/// First `RESPONSE_SNIPPET_CHARS` characters of `raw`, cut on a char boundary.
pub fn response_snippet(raw: &str) -> String {
    raw.trim().chars().take(RESPONSE_SNIPPET_CHARS).collect()
}
