use axum::response::Html;

const WELCOME_PAGE: &str = r#"
    <html>
        <head>
            <title>Axum + Serverless</title>
        </head>
        <body>
            <h1>Welcome to Axum + Serverless!</h1>
            <p>Visit <a href="/docs">API Documentation</a></p>
        </body>
    </html>
    "#;

/// Welcome page linking to the interactive docs.
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Welcome page", content_type = "text/html", body = String)),
    tag = "Greeting"
)]
pub async fn root() -> Html<&'static str> {
    Html(WELCOME_PAGE)
}
