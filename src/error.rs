mod app;
mod config;

pub use app::AppError;
pub use config::ConfigError;
