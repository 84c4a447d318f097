//! ISBN classification service
//!
//! `detect` is the decision tree over normalization and the two checksum
//! validators. Every `Invalid` outcome emits exactly one diagnostic carrying
//! the original input.

use serde::Serialize;

use crate::domain::{
    self, Classification, DiagnosticSink, ISBN10_LEN, ISBN13_LEN, is_valid_isbn10,
    is_valid_isbn13,
};

fn reject(
    sink: Option<&dyn DiagnosticSink>,
    reason: &str,
    input: Option<&str>,
) -> Classification {
    tracing::debug!(reason, "ISBN rejected");
    if let Some(sink) = sink {
        sink.warn(&format!(
            "invalid ISBN detected ({}): {}",
            reason,
            input.unwrap_or_default()
        ));
    }
    Classification::Invalid
}

/// Classify `input` as ISBN-10, ISBN-13 or invalid.
pub fn detect(input: Option<&str>, sink: Option<&dyn DiagnosticSink>) -> Classification {
    let cleaned = match domain::normalize(input) {
        Ok(cleaned) => cleaned,
        Err(e) => {
            tracing::debug!(error = %e, "Normalization failed");
            return reject(sink, "illegal character", input);
        }
    };

    match cleaned.len() {
        0 => reject(sink, "empty", input),
        ISBN10_LEN if is_valid_isbn10(Some(&cleaned)) => Classification::Isbn10,
        ISBN10_LEN => reject(sink, "checksum/format 10", input),
        ISBN13_LEN if is_valid_isbn13(Some(&cleaned)) => Classification::Isbn13,
        ISBN13_LEN => reject(sink, "checksum/format 13", input),
        _ => reject(sink, "length", input),
    }
}

/// Everything the demo binary prints about one input
#[derive(Debug, Clone, Serialize)]
pub struct IsbnReport {
    pub input: Option<String>,
    pub normalized: Option<String>,
    pub error: Option<String>,
    pub is_isbn10: bool,
    pub is_isbn13: bool,
    pub classification: Classification,
}

/// Run every operation on `input` and collect the results.
pub fn inspect(input: Option<&str>, sink: Option<&dyn DiagnosticSink>) -> IsbnReport {
    let (normalized, error) = match domain::normalize(input) {
        Ok(cleaned) => (Some(cleaned), None),
        Err(e) => (None, Some(e.to_string())),
    };

    IsbnReport {
        input: input.map(str::to_string),
        normalized,
        error,
        is_isbn10: is_valid_isbn10(input),
        is_isbn13: is_valid_isbn13(input),
        classification: detect(input, sink),
    }
}
