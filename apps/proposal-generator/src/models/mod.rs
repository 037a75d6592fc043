pub mod customer;
pub mod proposal;
pub mod requirements;

pub use customer::CustomerInfo;
pub use proposal::{ImplementationPhase, ProposalData};
pub use requirements::ProjectRequirements;
