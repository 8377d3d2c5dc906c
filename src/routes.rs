pub mod docs;
pub mod health;
pub mod hello;
pub mod info;
pub mod ping;
pub mod root;
pub mod status;

use axum::{Router, routing::get};

use crate::types::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root::root))
        .route("/hello", get(hello::hello))
        .route("/health", get(health::health))
        .route("/ping", get(ping::ping))
        .route("/status", get(status::status))
        .route("/info", get(info::info))
        .route("/docs", get(docs::swagger_ui))
        .route("/openapi.json", get(docs::openapi_json))
        .route("/openapi.yaml", get(docs::openapi_yaml))
}
