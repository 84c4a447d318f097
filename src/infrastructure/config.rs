use std::env;

/// Sample ISBN shown when neither `--isbn` nor `ISBN_SAMPLE` is given
pub const DEFAULT_SAMPLE: &str = "0-879-30566-8";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub sample_isbn: String,
    pub output: OutputFormat,
    /// Fallback filter; `RUST_LOG` still takes precedence in `init_tracing`
    pub log_filter: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let output = match lookup("ISBN_OUTPUT").as_deref().map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("json") => OutputFormat::Json,
            _ => OutputFormat::Text,
        };

        Self {
            sample_isbn: lookup("ISBN_SAMPLE").unwrap_or_else(|| DEFAULT_SAMPLE.to_string()),
            output,
            log_filter: lookup("ISBN_LOG")
                .unwrap_or_else(|| "isbn=warn,isbn_detect=info".to_string()),
        }
    }

    /// Apply `--isbn <value>` and `--json` overrides from the command line
    pub fn apply_args(mut self, args: &[String]) -> Self {
        if let Some(pos) = args.iter().position(|arg| arg == "--isbn") {
            if let Some(val) = args.get(pos + 1) {
                self.sample_isbn = val.clone();
            }
        }
        if args.iter().any(|arg| arg == "--json") {
            self.output = OutputFormat::Json;
        }
        self
    }
}
