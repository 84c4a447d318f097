use isbn_detect::config::{Config, OutputFormat};
use isbn_detect::infrastructure::TracingSink;
use isbn_detect::{inspect, logging};

fn main() {
    // Load configuration
    dotenvy::dotenv().ok();

    let args: Vec<String> = std::env::args().collect();
    let config = Config::from_env().apply_args(&args);

    logging::init_tracing(&config.log_filter);

    let report = inspect(Some(&config.sample_isbn), Some(&TracingSink));

    match config.output {
        OutputFormat::Json => match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => tracing::error!("Failed to serialize report: {}", e),
        },
        OutputFormat::Text => {
            match (&report.normalized, &report.error) {
                (Some(normalized), _) => println!("Normalized: {}", normalized),
                (None, Some(e)) => println!("Normalized: error: {}", e),
                (None, None) => {}
            }
            println!("ISBN-10: {}", report.is_isbn10);
            println!("ISBN-13: {}", report.is_isbn13);
            println!("Detected: {}", report.classification);
        }
    }
}
