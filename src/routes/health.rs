use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct HealthBody {
    pub status: String,
}

#[utoipa::path(get, path = "/health", responses((status = 200, body = HealthBody)), tag = "System")]
pub async fn health() -> Json<HealthBody> {
    Json(HealthBody {
        status: "healthy".to_string(),
    })
}
