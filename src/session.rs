//! Session-backed requirement checks

use std::cell::OnceCell;

use semver::Version;
use tracing::{debug, warn};

use crate::api::ApiClient;
use crate::config::SessionConfig;
use crate::core::RequirementContext;

/// Answers requirement checks from the configured session, asking the API for
/// its version only when a check needs it and no version is configured.
pub struct Session<'a> {
    config: &'a SessionConfig,
    client: Option<&'a ApiClient>,
    api_version: OnceCell<Option<Version>>,
}

impl<'a> Session<'a> {
    #[must_use]
    pub const fn new(config: &'a SessionConfig, client: Option<&'a ApiClient>) -> Self {
        Self {
            config,
            client,
            api_version: OnceCell::new(),
        }
    }

    /// Name reported as the acting user.
    #[must_use]
    pub fn username(&self) -> &str {
        self.config
            .username
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or("unknown user")
    }

    fn resolve_api_version(&self) -> Option<Version> {
        if let Some(version) = &self.config.api_version {
            return Some(version.clone());
        }
        let client = self.client?;
        match client.api_version() {
            Ok(version) => {
                debug!(%version, "fetched API version");
                Some(version)
            }
            Err(err) => {
                warn!(error = %err, "could not determine API version");
                None
            }
        }
    }
}

impl RequirementContext for Session<'_> {
    fn is_logged_in(&self) -> bool {
        self.config
            .access_token
            .as_deref()
            .is_some_and(|token| !token.trim().is_empty())
    }

    fn has_minimum_version(&self, feature: &str, required: &Version) -> bool {
        let satisfied = self.api_version().is_some_and(|current| current >= *required);
        debug!(feature, %required, satisfied, "minimum API version check");
        satisfied
    }

    fn api_version(&self) -> Option<Version> {
        self.api_version
            .get_or_init(|| self.resolve_api_version())
            .clone()
    }
}
