//! Infrastructure layer - External adapters and implementations
//!
//! This layer contains:
//! - Catalog client: HTTP adapter for the character catalog API
//! - Fallback: built-in catalog used when the API is unreachable
//! - Export: script file serialization
//! - Config: host configuration

pub mod catalog_client;
pub mod config;
pub mod export;
pub mod fallback;
