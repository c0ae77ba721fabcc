//! Quota definition repository

use tracing::debug;

use crate::api::{ApiClient, ApiError};
use crate::core::QuotaCreationRequest;

const QUOTA_DEFINITIONS_PATH: &str = "/v2/quota_definitions";

/// Persistence boundary for quota definitions.
pub trait QuotaRepository {
    fn create(&self, request: &QuotaCreationRequest) -> Result<(), ApiError>;
}

pub struct HttpQuotaRepository<'a> {
    client: &'a ApiClient,
}

impl<'a> HttpQuotaRepository<'a> {
    #[must_use]
    pub const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }
}

impl QuotaRepository for HttpQuotaRepository<'_> {
    fn create(&self, request: &QuotaCreationRequest) -> Result<(), ApiError> {
        debug!(name = %request.name, endpoint = self.client.endpoint(), "creating quota definition");
        self.client.post_json(QUOTA_DEFINITIONS_PATH, request)
    }
}
