//! Scenario outcomes and the suite report.
//!
//! A scenario ends in exactly one of three states: passed, failed with the
//! reasons collected by its checks, or skipped because an earlier scenario
//! never produced the state it depends on. Skipping is deliberately distinct
//! from failing: it means "prerequisite not met", not "behavior under test
//! broke".

use std::fmt;

use serde::{Deserialize, Serialize};

/// Terminal status of one scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ScenarioStatus {
    /// Every check passed.
    Passed,
    /// At least one check failed.
    Failed {
        /// Human-readable reasons, one per failed check.
        reasons: Vec<String>,
    },
    /// A precondition from an earlier scenario was missing.
    Skipped {
        /// Why the scenario could not run.
        reason: String,
    },
}

impl ScenarioStatus {
    /// Returns true if the scenario passed.
    #[must_use]
    pub const fn is_passed(&self) -> bool {
        matches!(self, Self::Passed)
    }

    /// Returns true if the scenario failed.
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    /// Returns true if the scenario was skipped.
    #[must_use]
    pub const fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped { .. })
    }
}

/// Result of one executed (or skipped) scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioOutcome {
    /// Scenario name.
    pub name: String,
    /// Terminal status.
    pub status: ScenarioStatus,
    /// Execution time in milliseconds. Zero for skipped scenarios.
    pub duration_ms: u64,
}

impl ScenarioOutcome {
    /// Creates a passed outcome.
    #[must_use]
    pub fn passed(name: impl Into<String>, duration_ms: u64) -> Self {
        Self {
            name: name.into(),
            status: ScenarioStatus::Passed,
            duration_ms,
        }
    }

    /// Creates a failed outcome with the collected reasons.
    #[must_use]
    pub fn failed(name: impl Into<String>, reasons: Vec<String>, duration_ms: u64) -> Self {
        Self {
            name: name.into(),
            status: ScenarioStatus::Failed { reasons },
            duration_ms,
        }
    }

    /// Creates a skipped outcome.
    #[must_use]
    pub fn skipped(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: ScenarioStatus::Skipped {
                reason: reason.into(),
            },
            duration_ms: 0,
        }
    }
}

/// Aggregated results of a full ordered run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuiteReport {
    /// Individual outcomes in execution order.
    pub outcomes: Vec<ScenarioOutcome>,
    /// Total number of scenarios.
    pub total: usize,
    /// Number of passed scenarios.
    pub passed: usize,
    /// Number of failed scenarios.
    pub failed: usize,
    /// Number of skipped scenarios.
    pub skipped: usize,
    /// Wall-clock time for the whole run in milliseconds.
    pub duration_ms: u64,
}

impl SuiteReport {
    /// Creates a report, computing the counts from the outcomes.
    #[must_use]
    pub fn new(outcomes: Vec<ScenarioOutcome>, duration_ms: u64) -> Self {
        let total = outcomes.len();
        let passed = outcomes.iter().filter(|o| o.status.is_passed()).count();
        let failed = outcomes.iter().filter(|o| o.status.is_failed()).count();
        let skipped = total - passed - failed;

        Self {
            outcomes,
            total,
            passed,
            failed,
            skipped,
            duration_ms,
        }
    }

    /// Returns true when no scenario failed. Skips do not fail a run.
    #[must_use]
    pub const fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

impl fmt::Display for SuiteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "story suite: {} passed, {} failed, {} skipped ({} ms)",
            self.passed, self.failed, self.skipped, self.duration_ms
        )?;
        for outcome in &self.outcomes {
            match &outcome.status {
                ScenarioStatus::Passed => {
                    writeln!(f, "  PASS {} ({} ms)", outcome.name, outcome.duration_ms)?;
                }
                ScenarioStatus::Failed { reasons } => {
                    writeln!(f, "  FAIL {} ({} ms)", outcome.name, outcome.duration_ms)?;
                    for reason in reasons {
                        writeln!(f, "       - {reason}")?;
                    }
                }
                ScenarioStatus::Skipped { reason } => {
                    writeln!(f, "  SKIP {}: {reason}", outcome.name)?;
                }
            }
        }
        Ok(())
    }
}
