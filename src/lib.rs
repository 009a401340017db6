pub mod app;
pub mod app_state;
pub mod config;
pub mod copywriter;
pub mod extractor;
pub mod fetcher;
pub mod health;
pub mod openapi;
pub mod privacy;
pub mod sales_copy;
pub mod telemetry;
