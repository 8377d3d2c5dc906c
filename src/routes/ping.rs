use axum::Json;

use crate::types::MessageBody;

/// Liveness probe, always answers `pong`.
#[utoipa::path(get, path = "/ping", responses((status = 200, body = MessageBody)), tag = "System")]
pub async fn ping() -> Json<MessageBody> {
    Json(MessageBody::new("pong"))
}
