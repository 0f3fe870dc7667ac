//! `POST /agent/command`.

use super::error::ApiResult;
use super::AppState;
use crate::command::CommandReply;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandRequest {
    pub prompt: String,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/agent/command", post(run_command))
}

/// Malformed or rejected commands still answer 200; only an unreachable user store
/// is an error.
async fn run_command(
    State(state): State<AppState>,
    Json(request): Json<CommandRequest>,
) -> ApiResult<Json<CommandReply>> {
    Ok(Json(state.agent.process(&request.prompt).await?))
}
