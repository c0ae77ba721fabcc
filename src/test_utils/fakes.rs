//! In-memory collaborators for exercising commands without a platform.

use std::cell::{Cell, RefCell};

use semver::Version;

use crate::api::{ApiError, QuotaRepository};
use crate::cli::output::Ui;
use crate::core::{QuotaCreationRequest, RequirementContext};
use crate::error::{CfqError, Result};

/// Records everything a command reports.
#[derive(Debug, Default)]
pub struct RecordingUi {
    pub outputs: Vec<String>,
    pub warnings: Vec<String>,
    pub done: Option<serde_json::Value>,
}

impl RecordingUi {
    /// Whether any output line contains `needle`.
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.outputs.iter().any(|line| line.contains(needle))
    }
}

impl Ui for RecordingUi {
    fn say(&mut self, message: &str) {
        self.outputs.push(message.to_string());
    }

    fn ok(&mut self) {
        self.outputs.push("OK".to_string());
    }

    fn warn(&mut self, message: &str) {
        self.warnings.push(message.to_string());
    }

    fn failed(&mut self, err: &CfqError) {
        self.outputs.push("FAILED".to_string());
        self.outputs.push(err.to_string());
    }

    fn done(&mut self, data: serde_json::Value) -> Result<()> {
        self.done = Some(data);
        Ok(())
    }
}

/// Repository that records create calls and answers with a canned result.
#[derive(Debug, Default)]
pub struct FakeQuotaRepository {
    calls: RefCell<Vec<QuotaCreationRequest>>,
    error: Option<ApiError>,
}

impl FakeQuotaRepository {
    #[must_use]
    pub fn failing(error: ApiError) -> Self {
        Self {
            calls: RefCell::default(),
            error: Some(error),
        }
    }

    #[must_use]
    pub fn create_call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    /// # Panics
    /// When fewer than `index + 1` create calls were made.
    #[must_use]
    pub fn create_args_for_call(&self, index: usize) -> QuotaCreationRequest {
        self.calls.borrow()[index].clone()
    }
}

impl QuotaRepository for FakeQuotaRepository {
    fn create(&self, request: &QuotaCreationRequest) -> std::result::Result<(), ApiError> {
        self.calls.borrow_mut().push(request.clone());
        self.error.clone().map_or(Ok(()), Err)
    }
}

/// Requirement context with a fixed login state and API version.
#[derive(Debug, Default)]
pub struct FakeRequirementContext {
    logged_in: bool,
    version: Option<Version>,
    login_checks: Cell<usize>,
    version_checks: RefCell<Vec<(String, Version)>>,
}

impl FakeRequirementContext {
    /// # Panics
    /// When `version` is not valid semver.
    #[must_use]
    pub fn new(logged_in: bool, version: Option<&str>) -> Self {
        Self {
            logged_in,
            version: version.map(|v| Version::parse(v).expect("valid test version")),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn login_checks(&self) -> usize {
        self.login_checks.get()
    }

    #[must_use]
    pub fn version_checks(&self) -> Vec<(String, Version)> {
        self.version_checks.borrow().clone()
    }
}

impl RequirementContext for FakeRequirementContext {
    fn is_logged_in(&self) -> bool {
        self.login_checks.set(self.login_checks.get() + 1);
        self.logged_in
    }

    fn has_minimum_version(&self, feature: &str, required: &Version) -> bool {
        self.version_checks
            .borrow_mut()
            .push((feature.to_string(), required.clone()));
        self.version.as_ref().is_some_and(|current| current >= required)
    }

    fn api_version(&self) -> Option<Version> {
        self.version.clone()
    }
}
