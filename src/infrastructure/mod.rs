//! Infrastructure layer - External adapters and implementations
//!
//! This layer contains:
//! - Generation client: reqwest adapter for the text-generation service
//! - File saver: local save-to-disk for exported stories
//! - HTTP: REST API consumed by the presentation layer
//! - Config: Application configuration
//! - State: Shared application state

pub mod config;
pub mod file_saver;
pub mod generation_client;
pub mod http;
pub mod state;
