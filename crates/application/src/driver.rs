//! Sequential scenario driver.
//!
//! Runs the ordered scenario list against the story service, threading the
//! suite context forward. Scenarios never run concurrently; ordering is a
//! correctness requirement because later scenarios consume state written by
//! earlier ones. A scenario whose precondition is missing is skipped, and a
//! transport failure fails that scenario alone rather than the run.

use std::time::Instant;

use saga_domain::{
    ApiCall, ApiResponse, ResponseEnvelope, ScenarioOutcome, ScenarioStatus, StoryDraft,
    SuiteReport, fabricated_story_id, unique_suffix,
};
use tracing::{info, warn};

use crate::context::SuiteContext;
use crate::endpoints;
use crate::ports::{ApiClientError, StoryApi};
use crate::scenario::Scenario;

/// Error-text fragments the service is known to use for missing stories.
/// Best-effort only; the status code is the authoritative check.
const EDIT_MISSING_HINTS: &[&str] = &["No story", "not exist"];
const DELETE_MISSING_HINTS: &[&str] = &["Unable to delete", "No story"];

/// Drives the ordered scenarios against a transport.
pub struct SuiteDriver<'a> {
    api: &'a dyn StoryApi,
}

impl<'a> SuiteDriver<'a> {
    /// Creates a driver over the given transport.
    #[must_use]
    pub const fn new(api: &'a dyn StoryApi) -> Self {
        Self { api }
    }

    /// Runs every scenario in order and aggregates the outcomes.
    pub async fn run(&self, context: &mut SuiteContext) -> SuiteReport {
        let start = Instant::now();
        let mut outcomes = Vec::with_capacity(Scenario::ordered().len());

        for scenario in Scenario::ordered() {
            let outcome = self.run_scenario(*scenario, context).await;
            match &outcome.status {
                ScenarioStatus::Passed => info!(scenario = scenario.name(), "passed"),
                ScenarioStatus::Failed { reasons } => {
                    warn!(scenario = scenario.name(), ?reasons, "failed");
                }
                ScenarioStatus::Skipped { reason } => {
                    info!(scenario = scenario.name(), reason = %reason, "skipped");
                }
            }
            outcomes.push(outcome);
        }

        SuiteReport::new(outcomes, elapsed_ms(start))
    }

    async fn run_scenario(
        &self,
        scenario: Scenario,
        context: &mut SuiteContext,
    ) -> ScenarioOutcome {
        let start = Instant::now();
        let status = match scenario {
            Scenario::CreateStory => self.create_story(context).await,
            Scenario::EditStory => self.edit_story(context).await,
            Scenario::ListStories => self.list_stories(context).await,
            Scenario::DeleteStory => self.delete_story(context).await,
            Scenario::CreateWithoutFields => self.create_without_fields(context).await,
            Scenario::EditUnknownStory => self.edit_unknown_story(context).await,
            Scenario::DeleteUnknownStory => self.delete_unknown_story(context).await,
        };

        match status {
            ScenarioStatus::Passed => ScenarioOutcome::passed(scenario.name(), elapsed_ms(start)),
            ScenarioStatus::Failed { reasons } => {
                ScenarioOutcome::failed(scenario.name(), reasons, elapsed_ms(start))
            }
            ScenarioStatus::Skipped { reason } => ScenarioOutcome::skipped(scenario.name(), reason),
        }
    }

    async fn send(
        &self,
        call: &ApiCall,
        context: &SuiteContext,
    ) -> Result<ApiResponse, ApiClientError> {
        self.api.send(call, Some(context.token())).await
    }

    async fn create_story(&self, context: &mut SuiteContext) -> ScenarioStatus {
        let draft = StoryDraft::new(
            format!("Test Story {}", unique_suffix()),
            "Auto-created by tests",
        );
        let response = match self.send(&endpoints::create_story(&draft), context).await {
            Ok(response) => response,
            Err(error) => return transport_failure(&error),
        };

        let envelope = ResponseEnvelope::parse(&response.body);
        let mut checks = Checks::new();
        checks.expect_status(&response, 201);
        checks.expect_message_contains(&envelope, "Successfully created");
        match envelope.story_id {
            Some(id) => context.remember_story(id),
            None => checks.fail("response carried no story identifier"),
        }
        checks.into_status()
    }

    async fn edit_story(&self, context: &mut SuiteContext) -> ScenarioStatus {
        let Some(id) = context.story_id().map(ToOwned::to_owned) else {
            return skipped_without_story();
        };

        let draft = StoryDraft::new("Edited Title", "Edited Description").with_url("");
        let response = match self.send(&endpoints::edit_story(&id, &draft), context).await {
            Ok(response) => response,
            Err(error) => return transport_failure(&error),
        };

        let envelope = ResponseEnvelope::parse(&response.body);
        let mut checks = Checks::new();
        checks.expect_status(&response, 200);
        checks.expect_message_contains(&envelope, "Successfully edited");
        checks.into_status()
    }

    async fn list_stories(&self, context: &mut SuiteContext) -> ScenarioStatus {
        let response = match self.send(&endpoints::list_stories(), context).await {
            Ok(response) => response,
            Err(error) => return transport_failure(&error),
        };

        let mut checks = Checks::new();
        checks.expect_status(&response, 200);
        match response.body_as_json().as_ref().and_then(serde_json::Value::as_array) {
            Some(stories) if stories.is_empty() => checks.fail("story list is empty"),
            Some(_) => {}
            None => checks.fail(format!(
                "story list is not a JSON array: {}",
                response.body_preview()
            )),
        }
        checks.into_status()
    }

    async fn delete_story(&self, context: &mut SuiteContext) -> ScenarioStatus {
        let Some(id) = context.story_id().map(ToOwned::to_owned) else {
            return skipped_without_story();
        };

        let response = match self.send(&endpoints::delete_story(&id), context).await {
            Ok(response) => response,
            Err(error) => return transport_failure(&error),
        };

        // One delete attempt spends the stored identifier.
        context.forget_story();

        let envelope = ResponseEnvelope::parse(&response.body);
        let mut checks = Checks::new();
        checks.expect_status(&response, 200);
        checks.expect_message_contains(&envelope, "Deleted successfully");
        checks.into_status()
    }

    async fn create_without_fields(&self, context: &mut SuiteContext) -> ScenarioStatus {
        let response = match self.send(&endpoints::create_story_empty(), context).await {
            Ok(response) => response,
            Err(error) => return transport_failure(&error),
        };

        let mut checks = Checks::new();
        checks.expect_status(&response, 400);
        checks.into_status()
    }

    async fn edit_unknown_story(&self, context: &mut SuiteContext) -> ScenarioStatus {
        let id = fabricated_story_id();
        let draft = StoryDraft::new("Edited Title", "Edited Description");
        let response = match self.send(&endpoints::edit_story(&id, &draft), context).await {
            Ok(response) => response,
            Err(error) => return transport_failure(&error),
        };

        let mut checks = Checks::new();
        checks.expect_status(&response, 400);
        note_unexpected_error_text(&response, EDIT_MISSING_HINTS);
        checks.into_status()
    }

    async fn delete_unknown_story(&self, context: &mut SuiteContext) -> ScenarioStatus {
        let id = fabricated_story_id();
        let response = match self.send(&endpoints::delete_story(&id), context).await {
            Ok(response) => response,
            Err(error) => return transport_failure(&error),
        };

        let mut checks = Checks::new();
        checks.expect_status(&response, 400);
        note_unexpected_error_text(&response, DELETE_MISSING_HINTS);
        checks.into_status()
    }
}

/// Accumulates check failures for one scenario.
struct Checks {
    failures: Vec<String>,
}

impl Checks {
    const fn new() -> Self {
        Self {
            failures: Vec::new(),
        }
    }

    fn fail(&mut self, reason: impl Into<String>) {
        self.failures.push(reason.into());
    }

    fn expect_status(&mut self, response: &ApiResponse, expected: u16) {
        if response.status != expected {
            self.fail(format!(
                "expected status {expected}, got {}: {}",
                response.status,
                response.body_preview()
            ));
        }
    }

    fn expect_message_contains(&mut self, envelope: &ResponseEnvelope, needle: &str) {
        match &envelope.message {
            Some(message) if message.contains(needle) => {}
            Some(message) => self.fail(format!(
                "expected message containing '{needle}', got '{message}'"
            )),
            None => {
                warn!(expected = needle, "response carried no message field");
                self.fail(format!(
                    "expected message containing '{needle}', got no message"
                ));
            }
        }
    }

    fn into_status(self) -> ScenarioStatus {
        if self.failures.is_empty() {
            ScenarioStatus::Passed
        } else {
            ScenarioStatus::Failed {
                reasons: self.failures,
            }
        }
    }
}

/// Message checks for the unknown-id scenarios are best-effort: a mismatch
/// is logged, never failed, because the service's error text is not stable.
fn note_unexpected_error_text(response: &ApiResponse, hints: &[&str]) {
    let envelope = ResponseEnvelope::parse(&response.body);
    match envelope.message {
        Some(message) if hints.iter().any(|hint| message.contains(hint)) => {}
        Some(message) => warn!(%message, "unexpected error text from the service"),
        None => warn!("service returned no error message"),
    }
}

fn transport_failure(error: &ApiClientError) -> ScenarioStatus {
    ScenarioStatus::Failed {
        reasons: vec![format!("transport failure: {error}")],
    }
}

fn skipped_without_story() -> ScenarioStatus {
    ScenarioStatus::Skipped {
        reason: "no story identifier was stored by the create scenario".to_string(),
    }
}

#[allow(clippy::cast_possible_truncation)]
fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}
