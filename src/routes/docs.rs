use axum::{
    extract::{OriginalUri, State},
    http::{HeaderValue, header},
    response::{Html, IntoResponse, Response},
};

use crate::{config::SchemaEncoding, error::AppError, types::AppState};

pub const JSON_CONTENT_TYPE: &str = "application/json";
pub const YAML_CONTENT_TYPE: &str = "application/x-yaml";

// Not part of the generated schema.
pub async fn swagger_ui(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
) -> Result<Html<String>, AppError> {
    let prefix = state.config.stage.prefix();
    tracing::info!(path = %uri.path(), prefix = %prefix, "serving api docs");

    let openapi_url = state.config.stage.url("/openapi.json");
    let page = state.docs.render(&openapi_url)?;
    Ok(Html(page))
}

pub async fn openapi_json(State(state): State<AppState>) -> Result<Response, AppError> {
    let body = state.openapi.to_json()?;
    Ok(schema_response(JSON_CONTENT_TYPE, body))
}

/// Serves the schema with a YAML media type. Unless `OPENAPI_YAML_ENCODING=yaml`
/// the body is the JSON document, byte for byte the same as `/openapi.json`.
pub async fn openapi_yaml(State(state): State<AppState>) -> Result<Response, AppError> {
    let body = match state.config.yaml_encoding {
        SchemaEncoding::Json => state.openapi.to_json()?,
        SchemaEncoding::Yaml => state
            .openapi
            .to_yaml()
            .map_err(|e| AppError::Internal(anyhow::anyhow!(e)))?,
    };
    Ok(schema_response(YAML_CONTENT_TYPE, body))
}

fn schema_response(content_type: &'static str, body: String) -> Response {
    let mut response = ([(header::CONTENT_TYPE, content_type)], body).into_response();
    let headers = response.headers_mut();
    headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, OPTIONS"),
    );
    headers.insert(header::ACCESS_CONTROL_ALLOW_HEADERS, HeaderValue::from_static("*"));
    response
}
