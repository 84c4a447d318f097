//! Infrastructure layer - Framework implementations
//!
//! This layer contains:
//! - Configuration loading (config)
//! - Tracing setup and the tracing-backed diagnostic sink (logging)

pub mod config;
pub mod logging;

pub use logging::TracingSink;
