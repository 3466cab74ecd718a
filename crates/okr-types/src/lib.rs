//! # okr-types
//!
//! Core data model for the OKR SMART-goal composition workflow.
//!
//! These types carry no I/O: they describe what the user enters, what the
//! upstream generation service returns, and the rules for interpreting both.
//!
//! ## Key components
//!
//! - [`ObjectiveForm`] / [`ObjectiveInput`] — user-entered OKR fields with
//!   the non-empty and date-ordering invariants enforced at the edge
//! - [`GoalRecord`] / [`GoalPatch`] — one AI-produced SMART goal and its
//!   all-optional counterpart used by the edit round-trip
//! - [`KpiBreakdown`] — parsed form of the `*`-delimited KPI text
//! - [`ResultPayload`] — the union of response shapes the upstream may
//!   return (narrative string, goal list, or label/text map)

pub mod error;
pub mod goal;
pub mod objective;
pub mod payload;

pub use error::ValidationError;
pub use goal::{parse_kpi, GoalPatch, GoalRecord, KpiBreakdown, KPI_DELIMITER};
pub use objective::{ObjectiveForm, ObjectiveInput, MANAGER_OBJECTIVE_SEPARATOR};
pub use payload::{GoalsEnvelope, ResultPayload};
