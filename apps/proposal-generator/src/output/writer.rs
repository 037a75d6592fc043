use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::ProposalData;
use crate::output::ProposalRenderer;

const FILE_STEM_PREFIX: &str = "proposal";

/// Absolute paths of the two files written for a proposal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputPaths {
    pub markdown: PathBuf,
    pub json: PathBuf,
}

/// Keeps alphanumerics, hyphens and underscores, turns each run of spaces into
/// one underscore and lower-cases the result.
pub fn sanitize_company_name(name: &str) -> String {
    let kept: String = name
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .collect();

    kept.split(' ')
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("_")
        .to_lowercase()
}

/// `proposal_<sanitized>`, or just `proposal` when nothing survives sanitizing.
pub fn default_file_stem(company_name: &str) -> String {
    let sanitized = sanitize_company_name(company_name);
    if sanitized.is_empty() {
        FILE_STEM_PREFIX.to_string()
    } else {
        format!("{FILE_STEM_PREFIX}_{sanitized}")
    }
}

impl ProposalRenderer {
    /// Renders both documents, then writes `<stem>.md` and `<stem>.json` into
    /// `folder`, creating it if needed.
    ///
    /// Rendering happens before anything touches the disk. If the second write
    /// fails the first file is removed, so callers never see half a pair.
    pub async fn save_outputs(
        &self,
        proposal: &ProposalData,
        folder: &Path,
        filename: Option<&str>,
    ) -> Result<OutputPaths, AppError> {
        let stem = match filename.map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => default_file_stem(&proposal.customer_info.company_name),
        };

        let markdown = self.format_markdown(proposal, None)?;
        let json = self.format_json(proposal)?;

        tokio::fs::create_dir_all(folder).await?;
        let markdown_path = folder.join(format!("{stem}.md"));
        let json_path = folder.join(format!("{stem}.json"));

        tokio::fs::write(&markdown_path, markdown).await?;
        if let Err(e) = tokio::fs::write(&json_path, json).await {
            if let Err(cleanup) = tokio::fs::remove_file(&markdown_path).await {
                warn!(
                    path = %markdown_path.display(),
                    error = %cleanup,
                    "Failed to remove markdown after JSON write failed"
                );
            }
            return Err(e.into());
        }

        let paths = OutputPaths {
            markdown: tokio::fs::canonicalize(&markdown_path).await?,
            json: tokio::fs::canonicalize(&json_path).await?,
        };
        info!(
            markdown = %paths.markdown.display(),
            json = %paths.json.display(),
            "Proposal files written"
        );
        Ok(paths)
    }
}
