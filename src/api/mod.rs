//! Platform API access

pub mod client;
pub mod error;
pub mod quotas;

pub use client::ApiClient;
pub use error::{ApiError, QUOTA_DEFINITION_NAME_TAKEN};
pub use quotas::{HttpQuotaRepository, QuotaRepository};
