//! Tracing configuration.
//!
//! Logging is off unless `DEFC_LOG` (or `RUST_LOG`) is set. The value uses
//! the usual filter syntax:
//!
//! ```bash
//! DEFC_LOG=debug defc src/
//! DEFC_LOG=defc_rewrite=trace DEFC_LOG_FORMAT=json defc src/
//! ```
//!
//! Output always goes to stderr so `--print` and `--json` stay clean.

use tracing_subscriber::EnvFilter;

/// Tracing output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Standard flat text lines (default).
    Text,
    /// Newline-delimited JSON objects.
    Json,
}

impl LogFormat {
    /// Parse a `DEFC_LOG_FORMAT` value.
    pub fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    fn from_env() -> Self {
        Self::parse(&std::env::var("DEFC_LOG_FORMAT").unwrap_or_default())
    }
}

/// `DEFC_LOG` takes precedence over `RUST_LOG`.
fn build_filter() -> EnvFilter {
    if let Ok(val) = std::env::var("DEFC_LOG") {
        EnvFilter::builder().parse_lossy(val)
    } else {
        EnvFilter::from_default_env()
    }
}

/// Initialise the global tracing subscriber.
///
/// Does nothing when neither `DEFC_LOG` nor `RUST_LOG` is set.
pub fn init_tracing() {
    let has_defc_log = std::env::var("DEFC_LOG").is_ok();
    let has_rust_log = std::env::var("RUST_LOG").is_ok();
    if !has_defc_log && !has_rust_log {
        return;
    }

    let builder = tracing_subscriber::fmt()
        .with_env_filter(build_filter())
        .with_writer(std::io::stderr);

    match LogFormat::from_env() {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}
