//! Core quota types and logic

pub mod quota;
pub mod requirements;
pub mod size;

pub use quota::{QuotaCreationRequest, QuotaFlags, UNLIMITED_APP_INSTANCES, build_request};
pub use requirements::{Requirement, RequirementContext};
pub use size::{UNLIMITED_MEMORY, parse_megabytes};
