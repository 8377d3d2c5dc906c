use utoipa::OpenApi;

use crate::{routes, types};

/// Schema for everything except the documentation routes themselves.
#[derive(OpenApi)]
#[openapi(
    info(title = "Axum + Serverless", version = "1.0.0"),
    paths(
        routes::hello::hello,
        routes::root::root,
        routes::health::health,
        routes::ping::ping,
        routes::status::status,
        routes::info::info,
    ),
    components(schemas(
        types::MessageBody,
        routes::health::HealthBody,
        routes::status::StatusBody,
        routes::info::InfoBody,
    )),
    tags(
        (name = "Greeting"),
        (name = "System"),
    )
)]
pub struct ApiDoc;
