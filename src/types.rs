use std::sync::Arc;

use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema, openapi::server::Server};

use crate::{config::Config, docs::DocsPage, openapi::ApiDoc};

pub const SERVICE_NAME: &str = "Axum + Serverless";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub openapi: Arc<utoipa::openapi::OpenApi>,
    pub docs: Arc<DocsPage>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, tera::Error> {
        let mut openapi = ApiDoc::openapi();
        if config.stage.is_set() {
            openapi.servers = Some(vec![Server::new(config.stage.prefix())]);
        }

        Ok(AppState {
            config: Arc::new(config),
            openapi: Arc::new(openapi),
            docs: Arc::new(DocsPage::new()?),
        })
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
