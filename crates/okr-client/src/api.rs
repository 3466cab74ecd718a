// api.rs — HTTP client for the OKR generation service.
//
// All four endpoints are JSON-over-POST with a success-flag envelope.
// The client unwraps each envelope: a transport failure, a non-2xx
// status, and a well-formed `success: false` body all surface as typed
// ClientError values, so callers never have to inspect raw responses.

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use okr_types::{GoalPatch, GoalRecord, ObjectiveInput, ResultPayload};

use crate::config::ApiConfig;
use crate::error::ClientError;

/// Generation endpoint path.
pub const GENERATE_ENDPOINT: &str = "/api/generate-smart-goal";

/// Save endpoint path.
pub const SAVE_ENDPOINT: &str = "/api/save-goal";

/// Edit endpoint path.
pub const EDIT_ENDPOINT: &str = "/api/edit-goal";

/// Login endpoint path.
pub const LOGIN_ENDPOINT: &str = "/api/login";

/// Body of the generate request, in the service's wire names.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub goal: String,
    pub deadline: String,
    pub department: String,
    pub job_title: String,
    pub key_result: String,
    pub managers_goal: String,
}

impl GenerateRequest {
    /// Build the wire body from a validated objective.
    pub fn from_input(input: &ObjectiveInput) -> Self {
        Self {
            goal: input.goal_description.clone(),
            deadline: input.due_date.to_string(),
            department: input.department.clone(),
            job_title: input.job_title.clone(),
            key_result: input.key_result.clone(),
            managers_goal: input.managers_goal(),
        }
    }
}

/// A successful generation: the raw payload plus whether the *service*
/// produced it from its own fallback path.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateOutcome {
    pub payload: ResultPayload,
    pub is_fallback: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateResponse {
    #[serde(default)]
    success: bool,
    result: Option<ResultPayload>,
    #[serde(default)]
    is_fallback: bool,
    error: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EditRequest<'a> {
    goal: &'a GoalRecord,
    user_comments: &'a str,
}

#[derive(Debug, Deserialize)]
struct EditResponse {
    #[serde(default)]
    success: bool,
    result: Option<EditRevision>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct EditRevision {
    goal: Option<GoalPatch>,
}

#[derive(Debug, Deserialize)]
struct SaveResponse {
    #[serde(default)]
    success: bool,
    goal: Option<GoalRecord>,
    error: Option<String>,
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    #[serde(default)]
    success: bool,
    user: Option<UserProfile>,
    error: Option<String>,
}

/// Profile returned by a successful login.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// HTTP client for the generation service.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    config: ApiConfig,
}

impl ApiClient {
    /// Create a client from a config.
    pub fn new(config: ApiConfig) -> Result<Self, ClientError> {
        let client = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self { client, config })
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, ClientError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = format!("{}{}", self.config.base_url.trim_end_matches('/'), path);
        tracing::debug!(%url, "POST");
        let response = self.client.post(&url).json(body).send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ClientError::Status {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response.json().await?)
    }

    /// Request a SMART-goal breakdown for one objective.
    pub async fn generate(&self, input: &ObjectiveInput) -> Result<GenerateOutcome, ClientError> {
        let body = GenerateRequest::from_input(input);
        let response: GenerateResponse = self.post(GENERATE_ENDPOINT, &body).await?;
        if !response.success {
            return Err(ClientError::Api {
                message: response
                    .error
                    .unwrap_or_else(|| "failed to generate SMART goal".to_string()),
            });
        }
        let payload = response.result.ok_or_else(|| ClientError::Api {
            message: "generation response is missing a result".to_string(),
        })?;
        Ok(GenerateOutcome {
            payload,
            is_fallback: response.is_fallback,
        })
    }

    /// Persist one goal. Returns the persisted record when the service
    /// echoes it back.
    pub async fn save_goal(&self, goal: &GoalRecord) -> Result<Option<GoalRecord>, ClientError> {
        let response: SaveResponse = self.post(SAVE_ENDPOINT, goal).await?;
        if !response.success {
            return Err(ClientError::Api {
                message: response
                    .error
                    .unwrap_or_else(|| "failed to save goal".to_string()),
            });
        }
        Ok(response.goal)
    }

    /// Ask the service to revise one goal according to the user's
    /// instructions. Partial revisions are expected; absent fields mean
    /// "keep the original".
    pub async fn edit_goal(
        &self,
        goal: &GoalRecord,
        user_comments: &str,
    ) -> Result<GoalPatch, ClientError> {
        let body = EditRequest {
            goal,
            user_comments,
        };
        let response: EditResponse = self.post(EDIT_ENDPOINT, &body).await?;
        if !response.success {
            return Err(ClientError::Api {
                message: response
                    .error
                    .unwrap_or_else(|| "failed to edit goal".to_string()),
            });
        }
        Ok(response
            .result
            .and_then(|revision| revision.goal)
            .unwrap_or_default())
    }

    /// Authenticate. Returns the user profile when the service provides
    /// one.
    pub async fn login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<UserProfile>, ClientError> {
        let body = LoginRequest { email, password };
        let response: LoginResponse = self.post(LOGIN_ENDPOINT, &body).await?;
        if !response.success {
            return Err(ClientError::Api {
                message: response
                    .error
                    .unwrap_or_else(|| "login failed".to_string()),
            });
        }
        Ok(response.user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_input() -> ObjectiveInput {
        ObjectiveInput {
            department: "Engineering".to_string(),
            job_title: "Backend Engineer".to_string(),
            manager_objectives: vec![
                "Improve platform reliability".to_string(),
                "Grow revenue".to_string(),
            ],
            goal_description: "Reduce API error rate".to_string(),
            key_result: "Error rate below 0.1%".to_string(),
            start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            due_date: NaiveDate::from_ymd_opt(2026, 3, 31).unwrap(),
        }
    }

    #[test]
    fn generate_request_uses_wire_names() {
        let body = GenerateRequest::from_input(&sample_input());
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["goal"], "Reduce API error rate");
        assert_eq!(json["deadline"], "2026-03-31");
        assert_eq!(json["jobTitle"], "Backend Engineer");
        assert_eq!(json["keyResult"], "Error rate below 0.1%");
        assert_eq!(
            json["managersGoal"],
            "Improve platform reliability, Grow revenue"
        );
    }

    #[test]
    fn generate_response_parses_goal_list() {
        let raw = r#"{
            "success": true,
            "isFallback": false,
            "result": {"goals": [{"title": "A"}, {"title": "B"}]}
        }"#;
        let response: GenerateResponse = serde_json::from_str(raw).unwrap();
        assert!(response.success);
        assert!(!response.is_fallback);
        let payload = response.result.unwrap();
        assert_eq!(payload.goals().unwrap().len(), 2);
    }

    #[test]
    fn generate_response_defaults_flags_when_absent() {
        let raw = r#"{"result": "Grow revenue by 10%"}"#;
        let response: GenerateResponse = serde_json::from_str(raw).unwrap();
        assert!(!response.success);
        assert!(!response.is_fallback);
    }

    #[test]
    fn edit_response_with_partial_goal_parses() {
        let raw = r#"{
            "success": true,
            "result": {"goal": {"title": "New Title"}}
        }"#;
        let response: EditResponse = serde_json::from_str(raw).unwrap();
        let patch = response.result.unwrap().goal.unwrap();
        assert_eq!(patch.title.as_deref(), Some("New Title"));
        assert!(patch.description.is_none());
    }
}
