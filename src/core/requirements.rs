//! Command preconditions
//!
//! A command describes what must hold before it talks to the platform as a
//! plain list of [`Requirement`]s. [`execute`] evaluates that list against a
//! [`RequirementContext`], stopping at the first one that is not met.

use semver::Version;
use tracing::debug;

use crate::core::quota::QuotaFlags;
use crate::error::{CfqError, Result};

/// Oldest API that understands the org-level app instance limit.
pub const ORG_APP_INSTANCE_LIMIT_MIN_API_VERSION: Version = Version::new(2, 33, 0);

/// Oldest API that understands reserved route port quotas.
pub const RESERVED_ROUTE_PORTS_MIN_API_VERSION: Version = Version::new(2, 55, 0);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Requirement {
    /// An authenticated session must exist.
    Login,
    /// The targeted API must be at least `version` to support `feature`.
    MinApiVersion { feature: String, version: Version },
}

impl Requirement {
    fn min_api_version(feature: &str, version: Version) -> Self {
        Self::MinApiVersion {
            feature: feature.to_string(),
            version,
        }
    }
}

/// Source of truth for requirement checks.
pub trait RequirementContext {
    fn is_logged_in(&self) -> bool;

    /// Whether the targeted API is at least `required`. Implementations may
    /// report the version they found through [`Self::api_version`].
    fn has_minimum_version(&self, feature: &str, required: &Version) -> bool;

    fn api_version(&self) -> Option<Version> {
        None
    }
}

/// Requirements for `create-quota`.
///
/// Login always comes first since version checks may rely on session state.
/// At most one version requirement is added; `-a` is checked before
/// `--reserved-route-ports`.
#[must_use]
pub fn plan(flags: &QuotaFlags) -> Vec<Requirement> {
    let mut requirements = vec![Requirement::Login];

    if flags.app_instances.is_some() {
        requirements.push(Requirement::min_api_version(
            "Option '-a'",
            ORG_APP_INSTANCE_LIMIT_MIN_API_VERSION,
        ));
    } else if flags.reserved_route_ports.is_some() {
        requirements.push(Requirement::min_api_version(
            "Option '--reserved-route-ports'",
            RESERVED_ROUTE_PORTS_MIN_API_VERSION,
        ));
    }

    debug!(?requirements, "planned requirements");
    requirements
}

/// Check requirements in order; the first unmet one aborts.
pub fn execute(requirements: &[Requirement], ctx: &dyn RequirementContext) -> Result<()> {
    for requirement in requirements {
        match requirement {
            Requirement::Login => {
                if !ctx.is_logged_in() {
                    return Err(CfqError::PreconditionFailed(
                        "Not logged in. Set an access token in the config file or CFQ_ACCESS_TOKEN."
                            .to_string(),
                    ));
                }
            }
            Requirement::MinApiVersion { feature, version } => {
                if !ctx.has_minimum_version(feature, version) {
                    let current = ctx
                        .api_version()
                        .map_or_else(|| "unknown".to_string(), |v| v.to_string());
                    return Err(CfqError::PreconditionFailed(format!(
                        "{feature} requires API version {version} or higher. Your target is {current}."
                    )));
                }
            }
        }
        debug!(?requirement, "requirement satisfied");
    }
    Ok(())
}
