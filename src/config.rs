use std::{fmt, net::SocketAddr, str::FromStr};

use crate::error::ConfigError;

pub const DEFAULT_STAGE: &str = "development";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

// First path segments already taken by the root routes.
const RESERVED_STAGES: [&str; 8] = [
    "hello",
    "health",
    "ping",
    "status",
    "info",
    "docs",
    "openapi.json",
    "openapi.yaml",
];

/// Deployment stage, e.g. `dev` or `prod`. Routes are additionally mounted
/// under `/<stage>` and the name is echoed by `/status` and `/info`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stage(Option<String>);

impl Stage {
    pub fn new(name: Option<&str>) -> Result<Self, ConfigError> {
        match name.map(str::trim) {
            None | Some("") => Ok(Stage(None)),
            Some(name) => {
                let valid = name
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
                if !valid {
                    return Err(ConfigError::InvalidStage(name.to_string()));
                }
                if RESERVED_STAGES.contains(&name) {
                    return Err(ConfigError::ReservedStage(name.to_string()));
                }
                Ok(Stage(Some(name.to_string())))
            }
        }
    }

    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }

    pub fn name(&self) -> &str {
        self.0.as_deref().unwrap_or(DEFAULT_STAGE)
    }

    /// `""` when no stage is configured, `"/<stage>"` otherwise.
    pub fn prefix(&self) -> String {
        match &self.0 {
            Some(stage) => format!("/{}", stage),
            None => String::new(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.prefix(), path)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Body encoding served by `/openapi.yaml`.
///
/// `Json` keeps the historical behavior: the YAML media type is declared but the
/// bytes are the JSON document, identical to `/openapi.json`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SchemaEncoding {
    #[default]
    Json,
    Yaml,
}

impl FromStr for SchemaEncoding {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(SchemaEncoding::Json),
            "yaml" | "yml" => Ok(SchemaEncoding::Yaml),
            other => Err(ConfigError::InvalidEncoding(other.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub stage: Stage,
    pub host: String,
    pub port: u16,
    pub yaml_encoding: SchemaEncoding,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            stage: Stage::default(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            yaml_encoding: SchemaEncoding::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let stage = Stage::new(lookup("STAGE").as_deref())?;
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup("PORT") {
            Some(port) => port
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(port.clone()))?,
            None => DEFAULT_PORT,
        };
        let yaml_encoding = match lookup("OPENAPI_YAML_ENCODING") {
            Some(encoding) => encoding.parse()?,
            None => SchemaEncoding::default(),
        };

        Ok(Config {
            stage,
            host,
            port,
            yaml_encoding,
        })
    }

    pub fn with_stage(mut self, stage: &str) -> Result<Self, ConfigError> {
        self.stage = Stage::new(Some(stage))?;
        Ok(self)
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ConfigError::InvalidHost(self.host.clone()))
    }
}
