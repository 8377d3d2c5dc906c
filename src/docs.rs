use serde_json::{Map, Value, json};
use tera::{Context, Tera};

use crate::types::SERVICE_NAME;

const TEMPLATE_NAME: &str = "swagger_ui.html";
const SWAGGER_JS_URL: &str = "https://cdn.jsdelivr.net/npm/swagger-ui-dist@5/swagger-ui-bundle.js";
const SWAGGER_CSS_URL: &str = "https://cdn.jsdelivr.net/npm/swagger-ui-dist@5/swagger-ui.css";
const FAVICON_URL: &str = "https://www.rust-lang.org/static/images/favicon-32x32.png";

/// Swagger UI shell page. The renderer itself is pulled from the CDN, only the
/// bootstrap HTML is rendered here.
#[derive(Debug)]
pub struct DocsPage {
    tera: Tera,
    title: String,
    parameters: Map<String, Value>,
}

impl DocsPage {
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_template(TEMPLATE_NAME, include_str!("../templates/swagger_ui.html"))?;

        Ok(DocsPage {
            tera,
            title: format!("{} Docs", SERVICE_NAME),
            parameters: default_parameters(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn parameters(&self) -> &Map<String, Value> {
        &self.parameters
    }

    /// Renders the page; `openapi_url` is where the browser fetches the schema from,
    /// so it has to carry the stage prefix.
    pub fn render(&self, openapi_url: &str) -> Result<String, tera::Error> {
        let mut context = Context::new();
        context.insert("title", &self.title);
        context.insert("openapi_url", openapi_url);
        context.insert("parameters", &self.parameters);
        context.insert("js_url", SWAGGER_JS_URL);
        context.insert("css_url", SWAGGER_CSS_URL);
        context.insert("favicon_url", FAVICON_URL);
        self.tera.render(TEMPLATE_NAME, &context)
    }
}

fn default_parameters() -> Map<String, Value> {
    let params = json!({
        "dom_id": "#swagger-ui",
        "layout": "BaseLayout",
        "deepLinking": true,
        "showExtensions": true,
        "showCommonExtensions": true,
        // hide the schemas section
        "defaultModelsExpandDepth": -1,
    });
    match params {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}
