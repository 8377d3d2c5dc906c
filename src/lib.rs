pub mod app;
pub mod config;
pub mod docs;
pub mod error;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod types;
