//! Quota definition requests

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::size::{UNLIMITED_MEMORY, parse_megabytes};
use crate::error::{CfqError, Result};

/// Platform sentinel for "no cap on application instances".
pub const UNLIMITED_APP_INSTANCES: i32 = -1;

/// Raw quota limits as supplied on the command line, before normalization.
///
/// `None` means the flag was not given. Presence matters: it decides both the
/// defaults applied by [`build_request`] and the version requirements chosen by
/// [`crate::core::requirements::plan`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuotaFlags {
    pub total_memory: Option<String>,
    pub instance_memory: Option<String>,
    pub routes: Option<i32>,
    pub service_instances: Option<i32>,
    pub app_instances: Option<i32>,
    pub reserved_route_ports: Option<i32>,
    pub allow_paid_service_plans: bool,
}

/// Body of a quota definition create call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotaCreationRequest {
    pub name: String,
    /// Omitted on the wire when unset so the platform applies its own default.
    #[serde(rename = "memory_limit", skip_serializing_if = "Option::is_none")]
    pub memory_limit_mb: Option<i64>,
    #[serde(rename = "instance_memory_limit")]
    pub instance_memory_limit_mb: i64,
    #[serde(rename = "total_routes")]
    pub routes_limit: i32,
    #[serde(rename = "total_services")]
    pub service_instances_limit: i32,
    pub app_instance_limit: i32,
    #[serde(rename = "total_reserved_route_ports")]
    pub reserved_route_ports: i32,
    pub non_basic_services_allowed: bool,
}

/// Normalize command-line flags into a create request.
pub fn build_request(name: &str, flags: &QuotaFlags) -> Result<QuotaCreationRequest> {
    if name.is_empty() {
        return Err(CfqError::Usage("Quota name cannot be empty".to_string()));
    }

    let memory_limit_mb = flags
        .total_memory
        .as_deref()
        .map(parse_megabytes)
        .transpose()?;
    let instance_memory_limit_mb = flags
        .instance_memory
        .as_deref()
        .map_or(Ok(UNLIMITED_MEMORY), parse_megabytes)?;

    let request = QuotaCreationRequest {
        name: name.to_string(),
        memory_limit_mb,
        instance_memory_limit_mb,
        routes_limit: flags.routes.unwrap_or(0),
        service_instances_limit: flags.service_instances.unwrap_or(0),
        app_instance_limit: flags.app_instances.unwrap_or(UNLIMITED_APP_INSTANCES),
        reserved_route_ports: flags.reserved_route_ports.unwrap_or(0),
        non_basic_services_allowed: flags.allow_paid_service_plans,
    };
    debug!(?request, "built quota definition request");
    Ok(request)
}
