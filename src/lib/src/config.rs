//! Configuration for pagepatch, the api host and client settings
//!

pub mod api_config;

pub use crate::config::api_config::ApiConfig;
pub use crate::config::api_config::API_CONFIG_FILENAME;
