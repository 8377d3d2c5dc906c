use anyhow::Result;
use axum::{
    Router,
    body::{Body, Bytes},
    http::{Request, StatusCode, header},
};
use axum_serverless::{
    app::build_router,
    config::Config,
    routes::{health::HealthBody, info::InfoBody, status::StatusBody},
    types::{AppState, MessageBody},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

fn make_app(stage: Option<&str>) -> Result<Router> {
    let config = match stage {
        Some(stage) => Config::default().with_stage(stage)?,
        None => Config::default(),
    };
    Ok(build_router(AppState::new(config)?))
}

async fn get(app: Router, uri: &str) -> Result<(StatusCode, Bytes)> {
    let request = Request::builder().uri(uri).body(Body::empty())?;
    let response = app.oneshot(request).await?;
    let status = response.status();
    let body = response.into_body().collect().await?.to_bytes();
    Ok((status, body))
}

#[tokio::test]
async fn test_hello() -> Result<()> {
    let (status, body) = get(make_app(None)?, "/hello").await?;
    assert_eq!(status, StatusCode::OK);

    let body: MessageBody = serde_json::from_slice(&body)?;
    assert_eq!(body.message, "Hello from Axum + Serverless!");

    Ok(())
}

#[tokio::test]
async fn test_ping() -> Result<()> {
    let (status, body) = get(make_app(None)?, "/ping").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(serde_json::from_slice::<MessageBody>(&body)?, MessageBody::new("pong"));
    Ok(())
}

#[tokio::test]
async fn test_health() -> Result<()> {
    let (status, body) = get(make_app(None)?, "/health").await?;
    assert_eq!(status, StatusCode::OK);

    let body: HealthBody = serde_json::from_slice(&body)?;
    assert_eq!(body.status, "healthy");

    Ok(())
}

#[tokio::test]
async fn test_static_routes_ignore_stage() -> Result<()> {
    for uri in ["/hello", "/ping", "/health", "/"] {
        let (_, without_stage) = get(make_app(None)?, uri).await?;
        let (_, again) = get(make_app(None)?, uri).await?;
        let (_, with_stage) = get(make_app(Some("prod"))?, uri).await?;
        assert_eq!(without_stage, again, "{} is not deterministic", uri);
        assert_eq!(without_stage, with_stage, "{} depends on the stage", uri);
    }
    Ok(())
}

#[tokio::test]
async fn test_root_welcome_page() -> Result<()> {
    let request = Request::builder().uri("/").body(Body::empty())?;
    let response = make_app(None)?.oneshot(request).await?;
    assert_eq!(response.status(), StatusCode::OK);

    let content_type = response.headers()[header::CONTENT_TYPE].to_str()?.to_string();
    assert!(content_type.starts_with("text/html"));

    let body = response.into_body().collect().await?.to_bytes();
    let html = String::from_utf8(body.to_vec())?;
    assert!(html.contains("<h1>Welcome to Axum + Serverless!</h1>"));
    assert!(html.contains("<a href=\"/docs\">API Documentation</a>"));

    Ok(())
}

#[tokio::test]
async fn test_status_defaults_to_development() -> Result<()> {
    let (status, body) = get(make_app(None)?, "/status").await?;
    assert_eq!(status, StatusCode::OK);

    let body: serde_json::Value = serde_json::from_slice(&body)?;
    assert_eq!(body, serde_json::json!({"status": "running", "stage": "development"}));

    Ok(())
}

#[tokio::test]
async fn test_status_with_stage() -> Result<()> {
    let (_, body) = get(make_app(Some("prod"))?, "/status").await?;
    let body: StatusBody = serde_json::from_slice(&body)?;
    assert_eq!(body.status, "running");
    assert_eq!(body.stage, "prod");
    Ok(())
}

#[tokio::test]
async fn test_info_with_stage() -> Result<()> {
    let (status, body) = get(make_app(Some("prod"))?, "/info").await?;
    assert_eq!(status, StatusCode::OK);

    let body: InfoBody = serde_json::from_slice(&body)?;
    assert_eq!(
        body,
        InfoBody {
            service: "Axum + Serverless".to_string(),
            stage: "prod".to_string(),
            version: "1.0.0".to_string(),
        }
    );

    Ok(())
}

#[tokio::test]
async fn test_info_defaults_to_development() -> Result<()> {
    let (_, body) = get(make_app(None)?, "/info").await?;
    let body: InfoBody = serde_json::from_slice(&body)?;
    assert_eq!(body.stage, "development");
    Ok(())
}

#[tokio::test]
async fn test_routes_mounted_under_stage_prefix() -> Result<()> {
    let app = make_app(Some("stage1"))?;
    for uri in [
        "/stage1",
        "/stage1/hello",
        "/stage1/ping",
        "/stage1/health",
        "/stage1/status",
        "/stage1/info",
        "/stage1/docs",
        "/stage1/openapi.json",
        "/stage1/openapi.yaml",
        "/status",
    ] {
        let (status, _) = get(app.clone(), uri).await?;
        assert_eq!(status, StatusCode::OK, "GET {}", uri);
    }

    let (_, body) = get(app, "/stage1/status").await?;
    let body: StatusBody = serde_json::from_slice(&body)?;
    assert_eq!(body.stage, "stage1");

    Ok(())
}

#[tokio::test]
async fn test_unknown_route_is_not_found() -> Result<()> {
    for (stage, uri) in [(None, "/nope"), (Some("prod"), "/prod/nope"), (None, "/prod/hello")] {
        let (status, body) = get(make_app(stage)?, uri).await?;
        assert_eq!(status, StatusCode::NOT_FOUND, "GET {}", uri);

        let body: serde_json::Value = serde_json::from_slice(&body)?;
        assert_eq!(body["detail"], "Not Found");
    }
    Ok(())
}
