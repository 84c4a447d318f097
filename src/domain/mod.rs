//! Domain layer - Pure ISBN logic
//!
//! This layer contains NO logging subscriber or configuration code.
//! Only the normalizer, the checksum validators, error types and the
//! diagnostic sink contract.

pub mod diagnostics;
pub mod errors;
pub mod isbn;

pub use diagnostics::DiagnosticSink;
pub use errors::IsbnError;
pub use isbn::*;
