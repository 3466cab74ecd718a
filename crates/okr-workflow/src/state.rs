// state.rs — SubmissionState: the per-session lifecycle state machine.
//
// Transient and in-memory only: discarded on navigation away, never
// persisted. The state machine enforces a valid lifecycle:
//   Idle → Pending → Succeeded | Failed
//   Succeeded → Pending (a fresh submission)
//   Failed → Pending (manual retry, while the budget lasts)
// A Failed state marked terminal still allows a fresh submission, but the
// coordinator refuses further retries.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The lifecycle state of one generation submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SubmissionState {
    /// Nothing submitted yet.
    Idle,

    /// A request is in flight; re-submission is disabled.
    Pending,

    /// A result payload is present.
    Succeeded,

    /// The request failed; `message` is shown to the user. `terminal` is
    /// set once the manual retry budget is exhausted.
    Failed { message: String, terminal: bool },
}

impl fmt::Display for SubmissionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionState::Idle => write!(f, "idle"),
            SubmissionState::Pending => write!(f, "pending"),
            SubmissionState::Succeeded => write!(f, "succeeded"),
            SubmissionState::Failed { .. } => write!(f, "failed"),
        }
    }
}

impl SubmissionState {
    /// Check whether transitioning from this state to `next` is valid.
    pub fn can_transition_to(&self, next: &SubmissionState) -> bool {
        matches!(
            (self, next),
            (SubmissionState::Idle, SubmissionState::Pending)
                | (SubmissionState::Succeeded, SubmissionState::Pending)
                | (SubmissionState::Failed { .. }, SubmissionState::Pending)
                | (SubmissionState::Pending, SubmissionState::Succeeded)
                | (SubmissionState::Pending, SubmissionState::Failed { .. })
        )
    }

    /// True while a request is in flight.
    pub fn is_pending(&self) -> bool {
        matches!(self, SubmissionState::Pending)
    }

    /// True once the retry budget is exhausted.
    pub fn is_terminal_failure(&self) -> bool {
        matches!(self, SubmissionState::Failed { terminal: true, .. })
    }
}
