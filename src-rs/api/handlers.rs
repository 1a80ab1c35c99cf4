use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;
use tracing::{error, info};

use crate::agent::TaskAgent;
use crate::config::{ServerConfig, AGENT_ID, CONTACT_EMAIL};
use crate::llm::ProviderError;
use crate::result::UpstreamOutcome;

#[derive(Clone)]
pub struct AppState {
    pub agent: Arc<TaskAgent>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(agent: TaskAgent, config: ServerConfig) -> Self {
        Self {
            agent: Arc::new(agent),
            config: Arc::new(config),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TaskResponse {
    pub task: String,
    pub agent: String,
    pub output: String,
    pub email: String,
}

impl TaskResponse {
    pub fn new(task: &str, outcome: &UpstreamOutcome) -> Self {
        Self {
            task: task.to_string(),
            agent: AGENT_ID.to_string(),
            output: outcome.text(),
            email: CONTACT_EMAIL.to_string(),
        }
    }
}

/// Handler-level failures. Upstream failures never end up here.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("missing required query parameter: q")]
    MissingQuery,

    #[error("{0}")]
    Internal(String),
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::MissingQuery => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        error!(status = status.as_u16(), error = %self, "error processing task");
        (status, Json(json!({"detail": self.to_string()}))).into_response()
    }
}

pub async fn handle_root() -> Json<Value> {
    Json(json!({"message": "CLI Coding Agent API is running", "status": "healthy"}))
}

pub async fn handle_task(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let task = task_param(params).ok_or(ApiError::MissingQuery)?;
    info!(task = %task, "received task request");

    let outcome = state.agent.solve(&task).await;
    let body = serde_json::to_value(TaskResponse::new(&task, &outcome))?;
    info!(response = %body, "sending response");

    Ok((response_status(&outcome, state.config.strict_status), Json(body)))
}

/// Last `q` wins when the parameter is repeated.
fn task_param(params: Vec<(String, String)>) -> Option<String> {
    params
        .into_iter()
        .filter(|(key, _)| key == "q")
        .map(|(_, value)| value)
        .last()
}

/// Upstream failures are reported inside a 200 envelope unless strict mode is
/// on. Callers that need to tell an answer from an error without reading the
/// text should enable `AGENT_STRICT_STATUS`.
fn response_status(outcome: &UpstreamOutcome, strict: bool) -> StatusCode {
    match outcome {
        UpstreamOutcome::Failure(err) if strict => match err {
            ProviderError::MissingApiKey => StatusCode::SERVICE_UNAVAILABLE,
            ProviderError::Timeout => StatusCode::GATEWAY_TIMEOUT,
            _ => StatusCode::BAD_GATEWAY,
        },
        _ => StatusCode::OK,
    }
}
