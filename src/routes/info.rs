use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::types::{AppState, SERVICE_NAME, VERSION};

#[derive(Debug, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct InfoBody {
    pub service: String,
    pub stage: String,
    pub version: String,
}

#[utoipa::path(get, path = "/info", responses((status = 200, body = InfoBody)), tag = "System")]
pub async fn info(State(state): State<AppState>) -> Json<InfoBody> {
    Json(InfoBody {
        service: SERVICE_NAME.to_string(),
        stage: state.config.stage.name().to_string(),
        version: VERSION.to_string(),
    })
}
