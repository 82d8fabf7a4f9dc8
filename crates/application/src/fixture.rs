//! Suite fixture: one-time account setup and teardown.

use saga_domain::{Registration, ResponseEnvelope, SuiteReport};
use tracing::info;

use crate::context::SuiteContext;
use crate::endpoints;
use crate::error::{SuiteError, SuiteResult};
use crate::ports::StoryApi;

/// One-shot fixture owning the account the whole run authenticates as.
pub struct SuiteFixture {
    registration: Registration,
}

impl SuiteFixture {
    /// Creates a fixture with a fresh unique account under `prefix`.
    #[must_use]
    pub fn new(username_prefix: &str) -> Self {
        Self {
            registration: Registration::generate(username_prefix),
        }
    }

    /// The username this run registers and authenticates as.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.registration.user_name
    }

    /// Registers the account and authenticates it.
    ///
    /// Runs exactly once before any scenario. No scenario can proceed
    /// without credentials, so every failure here is fatal for the run.
    ///
    /// # Errors
    ///
    /// Returns [`SuiteError`] when the transport fails, the service rejects
    /// registration or authentication, or the login response carries no
    /// access token.
    pub async fn setup(&self, api: &dyn StoryApi) -> SuiteResult<SuiteContext> {
        let response = api.send(&endpoints::register(&self.registration), None).await?;
        if !response.is_success() {
            return Err(SuiteError::Setup(format!(
                "registration rejected with status {}: {}",
                response.status,
                response.body_preview()
            )));
        }

        let credentials = self.registration.credentials();
        let response = api.send(&endpoints::authenticate(&credentials), None).await?;
        if !response.is_success() {
            return Err(SuiteError::Setup(format!(
                "authentication rejected with status {}: {}",
                response.status,
                response.body_preview()
            )));
        }

        let envelope = ResponseEnvelope::parse(&response.body);
        let token = envelope.access_token.ok_or_else(|| {
            SuiteError::Setup("authentication response carried no access token".to_string())
        })?;

        info!(user = %self.registration.user_name, "suite account registered and authenticated");
        Ok(SuiteContext::new(token))
    }

    /// Runs exactly once after the ordered scenarios.
    ///
    /// Consumes the fixture; the account is not reusable afterwards.
    pub fn teardown(self, report: &SuiteReport) {
        info!(
            user = %self.registration.user_name,
            passed = report.passed,
            failed = report.failed,
            skipped = report.skipped,
            "suite finished"
        );
    }
}
