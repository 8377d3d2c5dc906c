use axum::{Router, http::Uri};
use tower_http::trace::TraceLayer;

use crate::{error::AppError, middleware::cors, routes, types::AppState};

pub fn build_router(app_state: AppState) -> Router {
    let stage = app_state.config.stage.clone();

    let mut router = routes::router();
    if stage.is_set() {
        router = router.nest(&stage.prefix(), routes::router());
    }

    router
        .fallback(not_found)
        .with_state(app_state)
        .layer(cors::cors_layer())
        .layer(cors::allow_methods_layer())
        .layer(cors::allow_headers_layer())
        .layer(TraceLayer::new_for_http())
}

async fn not_found(uri: Uri) -> AppError {
    tracing::debug!(path = %uri.path(), "no route matched");
    AppError::NotFound("Not Found".to_string())
}
