use std::path::PathBuf;

use clap::Parser;

/// Turn a discovery-call transcript into a business proposal (Markdown + JSON).
#[derive(Debug, Parser)]
#[command(name = "proposal-generator", version, about)]
pub struct Args {
    /// Path to the transcript file (.txt, .md or .pdf)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Folder the proposal files are written to
    #[arg(short, long, default_value = "./outputs")]
    pub output: PathBuf,

    /// File name stem for both outputs [default: proposal_<company>]
    #[arg(short, long)]
    pub filename: Option<String>,

    /// Model identifier; overrides PROPOSAL_MODEL
    #[arg(short, long)]
    pub model: Option<String>,

    /// Verbose logging and a run summary on success
    #[arg(long)]
    pub debug: bool,
}
