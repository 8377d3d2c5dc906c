use axum::Json;

use crate::types::{MessageBody, SERVICE_NAME};

#[utoipa::path(get, path = "/hello", responses((status = 200, body = MessageBody)), tag = "Greeting")]
pub async fn hello() -> Json<MessageBody> {
    Json(MessageBody::new(format!("Hello from {}!", SERVICE_NAME)))
}
