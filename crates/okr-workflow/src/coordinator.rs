// coordinator.rs — SubmissionCoordinator: one generation request's owner.
//
// The coordinator exclusively owns the submission state and the displayed
// goal list; collaborators signal intent (submit, retry, save, edit)
// through its methods and read state back through accessors. One network
// operation is in flight at a time; there is no cancellation, only
// waiting for the in-flight call to settle.
//
// Retry semantics: the automatic retry budget (RetryPolicy) is spent
// inside submit(); the manual retry() budget is separate and bounded by
// MAX_MANUAL_RETRIES. A manual retry re-sends the original form input as
// a single attempt.

use uuid::Uuid;

use okr_client::{fallback_goals, with_retry, ClientError, RetryPolicy};
use okr_types::{ObjectiveInput, ResultPayload};

use crate::backend::OkrBackend;
use crate::error::WorkflowError;
use crate::reconcile::{self, DisplayModel};
use crate::state::SubmissionState;

/// Manual retry budget; exceeding it makes the failure terminal.
pub const MAX_MANUAL_RETRIES: u32 = 3;

/// Who produced the displayed result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultOrigin {
    /// The upstream generation service.
    Upstream,

    /// The local fallback generator (or the service's own fallback path,
    /// when it flags one).
    Fallback,
}

/// A successful submission, forwarded to the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionOutcome {
    /// The input that produced the result.
    pub input: ObjectiveInput,

    /// The raw payload as received.
    pub payload: ResultPayload,

    /// Whether the result came from the upstream or a fallback.
    pub origin: ResultOrigin,
}

/// Owns the lifecycle of one goal-generation request.
pub struct SubmissionCoordinator<B: OkrBackend> {
    backend: B,
    retry_policy: RetryPolicy,
    enable_fallback: bool,
    session_id: Uuid,
    state: SubmissionState,
    retry_count: u32,
    last_input: Option<ObjectiveInput>,
    payload: Option<ResultPayload>,
    origin: Option<ResultOrigin>,
    goals: Vec<okr_types::GoalRecord>,
}

impl<B: OkrBackend> SubmissionCoordinator<B> {
    /// Create a coordinator in the idle state.
    pub fn new(backend: B, retry_policy: RetryPolicy, enable_fallback: bool) -> Self {
        Self {
            backend,
            retry_policy,
            enable_fallback,
            session_id: Uuid::new_v4(),
            state: SubmissionState::Idle,
            retry_count: 0,
            last_input: None,
            payload: None,
            origin: None,
            goals: Vec::new(),
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    /// Manual retries used since the last success.
    pub fn retry_count(&self) -> u32 {
        self.retry_count
    }

    /// The goal working set currently displayed.
    pub fn goals(&self) -> &[okr_types::GoalRecord] {
        &self.goals
    }

    pub fn origin(&self) -> Option<ResultOrigin> {
        self.origin
    }

    pub fn last_input(&self) -> Option<&ObjectiveInput> {
        self.last_input.as_ref()
    }

    /// What the presentation layer should render right now.
    ///
    /// Goal-shaped payloads render from the working set so that save/edit
    /// merges are reflected; the other shapes render from the raw payload.
    pub fn display_model(&self) -> DisplayModel {
        match &self.payload {
            None => DisplayModel::NoGoals,
            Some(payload) => match reconcile::normalize(payload) {
                DisplayModel::Goals(_) => DisplayModel::Goals(self.goals.clone()),
                other => other,
            },
        }
    }

    fn transition(&mut self, next: SubmissionState) -> Result<(), WorkflowError> {
        if !self.state.can_transition_to(&next) {
            return Err(WorkflowError::InvalidTransition {
                from: self.state.to_string(),
                to: next.to_string(),
            });
        }
        tracing::debug!(session_id = %self.session_id, from = %self.state, to = %next, "state transition");
        self.state = next;
        Ok(())
    }

    fn finish_success(
        &mut self,
        input: ObjectiveInput,
        payload: ResultPayload,
        origin: ResultOrigin,
    ) -> Result<SubmissionOutcome, WorkflowError> {
        self.goals = payload.goals().map(|goals| goals.to_vec()).unwrap_or_default();
        self.retry_count = 0;
        self.payload = Some(payload.clone());
        self.origin = Some(origin);
        self.last_input = Some(input.clone());
        self.transition(SubmissionState::Succeeded)?;
        tracing::info!(
            session_id = %self.session_id,
            goals = self.goals.len(),
            fallback = matches!(origin, ResultOrigin::Fallback),
            "generation succeeded"
        );
        Ok(SubmissionOutcome {
            input,
            payload,
            origin,
        })
    }

    fn finish_failure(&mut self, message: String, terminal: bool) -> WorkflowError {
        tracing::warn!(session_id = %self.session_id, %message, terminal, "generation failed");
        // Pending → Failed is always a valid transition.
        self.state = SubmissionState::Failed {
            message: message.clone(),
            terminal,
        };
        WorkflowError::SubmissionFailed { message }
    }

    /// Submit a validated objective through the retry-wrapped generate
    /// call.
    ///
    /// On upstream exhaustion with fallback enabled, a locally generated
    /// goal set is substituted and flagged [`ResultOrigin::Fallback`].
    pub async fn submit(
        &mut self,
        input: ObjectiveInput,
    ) -> Result<SubmissionOutcome, WorkflowError> {
        if self.state.is_pending() {
            return Err(WorkflowError::RequestInFlight);
        }
        input.validate()?;
        self.transition(SubmissionState::Pending)?;

        let policy = self.retry_policy.clone();
        let result = with_retry(&policy, || self.backend.generate(&input)).await;
        match result {
            Ok(outcome) => {
                let origin = if outcome.is_fallback {
                    ResultOrigin::Fallback
                } else {
                    ResultOrigin::Upstream
                };
                self.finish_success(input, outcome.payload, origin)
            }
            Err(error) if self.enable_fallback => {
                tracing::warn!(
                    session_id = %self.session_id,
                    %error,
                    "upstream exhausted; substituting locally generated goals"
                );
                let payload = ResultPayload::Goals(fallback_goals(&input));
                self.finish_success(input, payload, ResultOrigin::Fallback)
            }
            Err(error) => Err(self.finish_failure(error.to_string(), false)),
        }
    }

    /// Re-issue the original form input as a single attempt.
    ///
    /// A no-op with a terminal message once the bounded retry count is
    /// exhausted. Success resets the count.
    pub async fn retry(&mut self) -> Result<SubmissionOutcome, WorkflowError> {
        if self.state.is_pending() {
            return Err(WorkflowError::RequestInFlight);
        }
        let input = self
            .last_input
            .clone()
            .ok_or(WorkflowError::NothingToRetry)?;
        if self.retry_count >= MAX_MANUAL_RETRIES {
            self.state = SubmissionState::Failed {
                message: "Maximum retry attempts reached. Please try again later.".to_string(),
                terminal: true,
            };
            return Err(WorkflowError::RetriesExhausted);
        }
        self.retry_count += 1;
        self.transition(SubmissionState::Pending)?;

        match self.backend.generate(&input).await {
            Ok(outcome) => {
                let origin = if outcome.is_fallback {
                    ResultOrigin::Fallback
                } else {
                    ResultOrigin::Upstream
                };
                self.finish_success(input, outcome.payload, origin)
            }
            Err(error) => {
                let message = format!(
                    "Retry failed ({}/{}): {error}",
                    self.retry_count, MAX_MANUAL_RETRIES
                );
                Err(self.finish_failure(message, false))
            }
        }
    }

    /// Persist the goal at `index` and collapse the working set to it.
    ///
    /// A failure leaves the displayed goals and the submission state
    /// untouched; only a scoped error is returned.
    pub async fn save_goal(&mut self, index: usize) -> Result<(), WorkflowError> {
        let goal = self
            .goals
            .get(index)
            .cloned()
            .ok_or(WorkflowError::NoSuchGoal(index))?;
        match self.backend.save_goal(&goal).await {
            Ok(persisted) => {
                let kept = persisted.unwrap_or(goal);
                self.goals = reconcile::apply_save(&kept);
                tracing::info!(session_id = %self.session_id, "goal saved; working set collapsed");
                Ok(())
            }
            Err(source) => Err(WorkflowError::Action {
                action: "save",
                source,
            }),
        }
    }

    /// Ask the service to revise the goal at `index` and merge the
    /// partial revision back into the working set by position.
    ///
    /// A failure leaves the displayed goals and the submission state
    /// untouched; only a scoped error is returned.
    pub async fn edit_goal(
        &mut self,
        index: usize,
        user_comments: &str,
    ) -> Result<(), WorkflowError> {
        let goal = self
            .goals
            .get(index)
            .cloned()
            .ok_or(WorkflowError::NoSuchGoal(index))?;
        match self.backend.edit_goal(&goal, user_comments).await {
            Ok(patch) => {
                self.goals = reconcile::apply_edit(&self.goals, index, &patch);
                tracing::info!(session_id = %self.session_id, index, "goal revision merged");
                Ok(())
            }
            Err(source) => Err(WorkflowError::Action {
                action: "edit",
                source,
            }),
        }
    }
}
