use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid STAGE {0:?}: only letters, digits, '-', '_' and '.' are allowed")]
    InvalidStage(String),
    #[error("STAGE {0:?} collides with an existing route")]
    ReservedStage(String),
    #[error("invalid PORT {0:?}")]
    InvalidPort(String),
    #[error("invalid HOST {0:?}")]
    InvalidHost(String),
    #[error("invalid OPENAPI_YAML_ENCODING {0:?}: expected \"json\" or \"yaml\"")]
    InvalidEncoding(String),
}
