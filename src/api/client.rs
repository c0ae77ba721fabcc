//! HTTP transport to the platform API

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder, Response};
use semver::Version;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, trace};

use crate::api::ApiError;
use crate::config::{ApiConfig, SessionConfig};
use crate::error::{CfqError, Result};

/// Blocking client for the platform API.
pub struct ApiClient {
    endpoint: String,
    access_token: Option<String>,
    client: Client,
}

#[derive(Debug, Clone, serde::Deserialize)]
struct InfoResponse {
    #[serde(default)]
    api_version: String,
}

impl ApiClient {
    pub fn from_config(api: &ApiConfig, session: &SessionConfig) -> Result<Self> {
        if api.endpoint.trim().is_empty() {
            return Err(CfqError::MissingConfig(
                "API endpoint is empty; set [api].endpoint or CFQ_API_ENDPOINT".to_string(),
            ));
        }
        let client = Client::builder()
            .timeout(Duration::from_secs(api.timeout_secs.max(1)))
            .danger_accept_invalid_certs(api.skip_ssl_validation)
            .user_agent(concat!("cfq/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|err| CfqError::Config(format!("http client: {err}")))?;

        Ok(Self {
            endpoint: api.endpoint.trim_end_matches('/').to_string(),
            access_token: session.access_token.clone().filter(|t| !t.is_empty()),
            client,
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Version reported by `GET /v2/info`.
    pub fn api_version(&self) -> std::result::Result<Version, ApiError> {
        let info: InfoResponse = self.get_json("/v2/info")?;
        Version::parse(info.api_version.trim())
            .map_err(|err| ApiError::Decode(format!("api_version {:?}: {err}", info.api_version)))
    }

    pub fn get_json<T: DeserializeOwned>(&self, path: &str) -> std::result::Result<T, ApiError> {
        let response = self.send(self.client.get(self.url(path)))?;
        response
            .json()
            .map_err(|err| ApiError::Decode(err.to_string()))
    }

    /// POST a JSON body; the response body is discarded on success.
    pub fn post_json<B: Serialize>(&self, path: &str, body: &B) -> std::result::Result<(), ApiError> {
        self.send(self.client.post(self.url(path)).json(body))?;
        Ok(())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.endpoint)
    }

    fn send(&self, request: RequestBuilder) -> std::result::Result<Response, ApiError> {
        let request = match &self.access_token {
            Some(token) => request.header(reqwest::header::AUTHORIZATION, format!("bearer {token}")),
            None => request,
        };

        let response = request
            .send()
            .map_err(|err| ApiError::Transport(err.to_string()))?;
        let status = response.status();
        debug!(url = %response.url(), %status, "api response");

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().unwrap_or_default();
        trace!(%body, "api error body");
        Err(ApiError::from_response(status.as_u16(), &body))
    }
}
