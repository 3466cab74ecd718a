// payload.rs — ResultPayload: the union of upstream response shapes.
//
// The generation service has returned three shapes over its lifetime: a
// plain narrative string, a list of structured goals (bare or wrapped in
// a {"goals": [...]} envelope), and a free-form label/text object. The
// union is modeled as an enum so each shape has exactly one handling
// path; no silent coercion between shapes happens anywhere.

use serde::{Deserialize, Serialize};

use crate::goal::GoalRecord;

/// The `{"goals": [...]}` wrapper used by newer service versions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalsEnvelope {
    pub goals: Vec<GoalRecord>,
}

/// One generation result, in whichever shape the service produced.
///
/// Variant order matters for `untagged` deserialization: the goals
/// envelope must be tried before the generic section map, otherwise any
/// object would match the map first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResultPayload {
    /// A plain narrative string.
    Narrative(String),

    /// A bare array of goal records.
    Goals(Vec<GoalRecord>),

    /// Goal records wrapped in a `goals` envelope.
    Wrapped(GoalsEnvelope),

    /// An arbitrary label → value object. Forward-compatibility path for
    /// response shapes we have not anticipated.
    Sections(serde_json::Map<String, serde_json::Value>),
}

impl ResultPayload {
    /// The goal list, when this payload carries one (bare or wrapped).
    pub fn goals(&self) -> Option<&[GoalRecord]> {
        match self {
            ResultPayload::Goals(goals) => Some(goals),
            ResultPayload::Wrapped(envelope) => Some(&envelope.goals),
            _ => None,
        }
    }
}
