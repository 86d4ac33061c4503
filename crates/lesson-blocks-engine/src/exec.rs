//! Simulated code execution.
//!
//! Real execution happens in an external backend the platform owns; this
//! module stands in for it with a fixed-delay task so the code renderer can
//! exercise the full run lifecycle (pending, resolved, failed). Callers are
//! expected to scope the returned future to the owning block instance and
//! cancel it when that instance goes away.

use std::time::Duration;

/// Latency of the simulated backend.
pub const SIMULATED_RUN_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRequest {
    pub code: String,
    pub language: String,
}

/// Terminal state of one simulated run, rendered inline by the code block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Success { output: String },
    Failure { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StubExecutor {
    delay: Duration,
}

impl StubExecutor {
    pub fn new() -> Self {
        Self {
            delay: SIMULATED_RUN_DELAY,
        }
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }

    /// Pretend to run the program and resolve with a canned outcome.
    ///
    /// An empty program fails deterministically so the renderer's inline
    /// failure path stays exercised without a real backend.
    pub async fn run(&self, request: RunRequest) -> RunOutcome {
        tokio::time::sleep(self.delay).await;

        if request.code.trim().is_empty() {
            return RunOutcome::Failure {
                message: "nothing to run: the program is empty".to_string(),
            };
        }

        let line_count = request.code.lines().count();
        RunOutcome::Success {
            output: format!(
                "{} program ({} line{}) finished successfully.",
                request.language,
                line_count,
                if line_count == 1 { "" } else { "s" }
            ),
        }
    }
}

impl Default for StubExecutor {
    fn default() -> Self {
        Self::new()
    }
}
