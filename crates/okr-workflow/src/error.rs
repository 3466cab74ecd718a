// error.rs — Error types for the submission workflow.

use thiserror::Error;

use okr_client::ClientError;
use okr_types::ValidationError;

/// Errors surfaced by the submission coordinator.
///
/// Every variant maps to a user-actionable message; nothing here is
/// process-fatal.
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// The input failed validation before any network call.
    #[error("input is not submittable: {0}")]
    NotSubmittable(#[from] ValidationError),

    /// A request is already in flight; submission is disabled until it
    /// settles.
    #[error("a request is already in flight")]
    RequestInFlight,

    /// Invalid lifecycle transition.
    #[error("invalid transition from {from} to {to}")]
    InvalidTransition { from: String, to: String },

    /// The generation request failed after its retries were spent.
    #[error("{message}")]
    SubmissionFailed { message: String },

    /// `retry()` was called before any submission happened.
    #[error("nothing has been submitted yet")]
    NothingToRetry,

    /// The bounded manual retry budget is exhausted.
    #[error("maximum retry attempts reached; please try again later")]
    RetriesExhausted,

    /// A save/edit action referenced a goal index that is not displayed.
    #[error("no goal at index {0}")]
    NoSuchGoal(usize),

    /// A secondary save/edit action failed. Scoped: the displayed goals
    /// and the submission state are left intact.
    #[error("{action} failed: {source}")]
    Action {
        action: &'static str,
        source: ClientError,
    },
}
