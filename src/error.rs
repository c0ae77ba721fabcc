//! Error types for cfq

use thiserror::Error;

use crate::api::ApiError;

pub type Result<T> = std::result::Result<T, CfqError>;

#[derive(Error, Debug)]
pub enum CfqError {
    #[error("Incorrect Usage. {0}")]
    Usage(String),

    #[error("Invalid byte quantity '{raw}': use a whole number followed by M or G (e.g. 1024M, 1G), or -1 for unlimited")]
    MalformedSize { raw: String },

    #[error("{0}")]
    PreconditionFailed(String),

    #[error(transparent)]
    Remote(#[from] ApiError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("missing configuration: {0}")]
    MissingConfig(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CfqError {
    /// Stable machine-readable code used in robot output.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Usage(_) => "usage",
            Self::MalformedSize { .. } => "malformed_size",
            Self::PreconditionFailed(_) => "precondition_failed",
            Self::Remote(_) => "remote",
            Self::Config(_) => "config",
            Self::MissingConfig(_) => "missing_config",
            Self::Io(_) => "io",
            Self::Json(_) => "json",
        }
    }

    pub(crate) fn malformed_size(raw: &str) -> Self {
        Self::MalformedSize {
            raw: raw.to_string(),
        }
    }
}
