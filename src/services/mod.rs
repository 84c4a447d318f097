//! Services Layer
//!
//! Orchestration on top of the pure domain functions.
//! Called directly by library users and by the demo binary.

pub mod isbn_service;

// Re-export for convenience
pub use isbn_service::*;
