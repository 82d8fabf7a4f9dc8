//! Saga Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports defined in the
//! application layer: the reqwest transport and environment configuration.

pub mod config;
pub mod http;

pub use config::{ConfigError, SuiteConfig};
pub use http::ReqwestStoryApi;
