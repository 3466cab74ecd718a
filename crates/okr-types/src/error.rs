// error.rs — Validation errors for user-entered objective data.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised while collecting or finalizing an [`ObjectiveInput`].
///
/// These are caught before any network call is made; they surface as
/// inline form feedback, never as a server error.
///
/// [`ObjectiveInput`]: crate::ObjectiveInput
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required text field is empty (or whitespace only).
    #[error("field '{0}' must not be empty")]
    EmptyField(&'static str),

    /// No manager objective has been selected.
    #[error("at least one manager objective must be selected")]
    NoManagerObjective,

    /// A required date has not been chosen yet.
    #[error("the {0} date has not been set")]
    MissingDate(&'static str),

    /// The due date falls before the start date. The offending due date
    /// is cleared from the form when this is raised.
    #[error("due date {due} is earlier than start date {start}")]
    DueDateBeforeStart { start: NaiveDate, due: NaiveDate },
}
