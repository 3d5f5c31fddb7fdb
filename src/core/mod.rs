// src/core/mod.rs
//! Core services: configuration, file access and the HTTP client

pub mod config_manager;
pub mod fs_ops;
pub mod service_client;

pub use config_manager::{ClientConfig, ConfigManager};
pub use fs_ops::FsOps;
pub use service_client::{ServiceClient, MATCH_ENDPOINT, UPLOAD_ENDPOINT};
