// backend.rs — Trait seam over the network client.
//
// The coordinator only ever talks to this trait. Production wires in
// okr_client::ApiClient; tests drive the coordinator with scripted fakes.

use async_trait::async_trait;

use okr_client::{ApiClient, ClientError, GenerateOutcome};
use okr_types::{GoalPatch, GoalRecord, ObjectiveInput};

/// The three generation-service operations the workflow depends on.
#[async_trait]
pub trait OkrBackend: Send + Sync {
    /// Request a SMART-goal breakdown for one objective.
    async fn generate(&self, input: &ObjectiveInput) -> Result<GenerateOutcome, ClientError>;

    /// Persist one goal; may echo back the persisted record.
    async fn save_goal(&self, goal: &GoalRecord) -> Result<Option<GoalRecord>, ClientError>;

    /// Request a revision of one goal per the user's instructions.
    async fn edit_goal(
        &self,
        goal: &GoalRecord,
        user_comments: &str,
    ) -> Result<GoalPatch, ClientError>;
}

#[async_trait]
impl OkrBackend for ApiClient {
    async fn generate(&self, input: &ObjectiveInput) -> Result<GenerateOutcome, ClientError> {
        ApiClient::generate(self, input).await
    }

    async fn save_goal(&self, goal: &GoalRecord) -> Result<Option<GoalRecord>, ClientError> {
        ApiClient::save_goal(self, goal).await
    }

    async fn edit_goal(
        &self,
        goal: &GoalRecord,
        user_comments: &str,
    ) -> Result<GoalPatch, ClientError> {
        ApiClient::edit_goal(self, goal, user_comments).await
    }
}
