//! Diagnostic sink contract
//!
//! The classifier reports rejected input through this trait.
//! Implementations live in the infrastructure layer (see `TracingSink`),
//! or can be any closure taking `&str`.

/// Receives one human-readable warning per rejected input
pub trait DiagnosticSink: Send + Sync {
    fn warn(&self, message: &str);
}

impl<F> DiagnosticSink for F
where
    F: Fn(&str) + Send + Sync,
{
    fn warn(&self, message: &str) {
        self(message)
    }
}
