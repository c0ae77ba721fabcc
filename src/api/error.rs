//! Classified API failures

use serde::Deserialize;
use thiserror::Error;

/// Platform error code for a duplicate quota definition name.
pub const QUOTA_DEFINITION_NAME_TAKEN: i64 = 240_002;

/// Failures at the platform API boundary.
///
/// Callers match on this set to decide how a failure is presented; the
/// classification happens once, here, from the structured error body.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Server error, status code: 400, error code: 240002, message: {description}")]
    NameTaken { description: String },

    #[error("Server error, status code: {status}, error code: {code}, message: {description}")]
    Http {
        status: u16,
        code: i64,
        error_code: String,
        description: String,
    },

    #[error("Error performing request: {0}")]
    Transport(String),

    #[error("Invalid response from server: {0}")]
    Decode(String),
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    code: i64,
    #[serde(default)]
    description: String,
    #[serde(default)]
    error_code: String,
}

impl ApiError {
    /// Classify a non-success response from its status and raw body.
    #[must_use]
    pub fn from_response(status: u16, body: &str) -> Self {
        let parsed = serde_json::from_str::<ErrorBody>(body).unwrap_or_default();

        if parsed.code == QUOTA_DEFINITION_NAME_TAKEN
            || parsed.error_code == "CF-QuotaDefinitionNameTaken"
        {
            return Self::NameTaken {
                description: parsed.description,
            };
        }

        let description = if parsed.description.is_empty() {
            body.trim().to_string()
        } else {
            parsed.description
        };
        Self::Http {
            status,
            code: parsed.code,
            error_code: parsed.error_code,
            description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_taken_is_classified_by_code() {
        let err = ApiError::from_response(
            400,
            r#"{"code":240002,"description":"Quota Definition is taken: quota-sct","error_code":"CF-QuotaDefinitionNameTaken"}"#,
        );
        assert_eq!(
            err,
            ApiError::NameTaken {
                description: "Quota Definition is taken: quota-sct".to_string()
            }
        );
    }

    #[test]
    fn name_taken_is_classified_by_error_code_alone() {
        let err = ApiError::from_response(
            400,
            r#"{"description":"taken","error_code":"CF-QuotaDefinitionNameTaken"}"#,
        );
        assert!(matches!(err, ApiError::NameTaken { .. }));
    }

    #[test]
    fn other_structured_errors_stay_http() {
        let err = ApiError::from_response(
            400,
            r#"{"code":240001,"description":"Quota Definition is invalid","error_code":"CF-QuotaDefinitionInvalid"}"#,
        );
        assert_eq!(
            err.to_string(),
            "Server error, status code: 400, error code: 240001, message: Quota Definition is invalid"
        );
    }

    #[test]
    fn unstructured_body_is_kept_as_description() {
        let err = ApiError::from_response(502, "Bad Gateway\n");
        assert_eq!(
            err,
            ApiError::Http {
                status: 502,
                code: 0,
                error_code: String::new(),
                description: "Bad Gateway".to_string(),
            }
        );
    }
}
