//! # okr-workflow
//!
//! The submission/retry/result-reconciliation workflow: everything that
//! happens between "the form is valid" and "goals are on screen".
//!
//! ## Key components
//!
//! - [`SubmissionState`] — the per-session lifecycle state machine
//!   (Idle → Pending → Succeeded | Failed)
//! - [`SubmissionCoordinator`] — owns the lifecycle of one generation
//!   request: validates input, calls the backend through the retry
//!   policy, tracks state, and handles the save/edit round-trips
//! - [`OkrBackend`] — trait seam over the network client so the
//!   coordinator can be driven by scripted fakes in tests
//! - [`reconcile`] — normalizes the heterogeneous response payload into a
//!   [`DisplayModel`] and merges edit/save results back into the working
//!   goal list

pub mod backend;
pub mod coordinator;
pub mod error;
pub mod reconcile;
pub mod state;

pub use backend::OkrBackend;
pub use coordinator::{
    ResultOrigin, SubmissionCoordinator, SubmissionOutcome, MAX_MANUAL_RETRIES,
};
pub use error::WorkflowError;
pub use reconcile::{apply_edit, apply_save, normalize, DisplayModel};
pub use state::SubmissionState;
