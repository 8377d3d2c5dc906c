use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::types::AppState;

#[derive(Debug, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct StatusBody {
    pub status: String,
    /// Configured stage, `development` when unset.
    pub stage: String,
}

#[utoipa::path(get, path = "/status", responses((status = 200, body = StatusBody)), tag = "System")]
pub async fn status(State(state): State<AppState>) -> Json<StatusBody> {
    Json(StatusBody {
        status: "running".to_string(),
        stage: state.config.stage.name().to_string(),
    })
}
