pub mod domain;
pub mod infrastructure;
pub mod services;

pub use domain::{
    Classification, DiagnosticSink, IsbnError, is_valid_isbn10, is_valid_isbn13, normalize,
};
pub use infrastructure::config;
pub use infrastructure::logging;
pub use services::{IsbnReport, detect, inspect};
