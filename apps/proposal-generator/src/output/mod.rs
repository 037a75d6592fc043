// Assembly & Output: merge stage results into a ProposalData, render it as
// Markdown and JSON, and persist both files side by side.

pub mod assemble;
pub mod json;
pub mod markdown;
pub mod writer;

pub use assemble::assemble_proposal;
pub use markdown::ProposalRenderer;
pub use writer::OutputPaths;
