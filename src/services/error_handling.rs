use thiserror::Error;
use tracing::{error, warn};

/// Failure reported by a [`DataSource`](crate::repository::source::DataSource).
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Resource not found: {path}")]
    NotFound { path: String },

    #[error("Request for {path} returned HTTP {status}")]
    Status { path: String, status: u16 },

    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Transport error fetching {path}: {message}")]
    Transport { path: String, message: String },
}

impl SourceError {
    /// Whether the resource is simply absent, as opposed to unreachable.
    pub fn is_missing(&self) -> bool {
        matches!(self, SourceError::NotFound { .. } | SourceError::Status { .. })
    }
}

/// Custom error types with descriptive messages
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to load performance issues data from {path}")]
    LoadFailed {
        path: String,
        #[source]
        source: Box<CatalogError>,
    },

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Issue not found: {id}")]
    IssueNotFound { id: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Export failed: {message}")]
    Export { message: String },
}

impl CatalogError {
    pub fn load_failed(path: impl Into<String>, cause: CatalogError) -> Self {
        CatalogError::LoadFailed {
            path: path.into(),
            source: Box::new(cause),
        }
    }

    /// Message suitable for the error screen.
    pub fn user_message(&self) -> String {
        match self {
            CatalogError::LoadFailed { .. } | CatalogError::Source(_) | CatalogError::Csv(_) => {
                "Failed to load performance issues data. Please try again later.".to_string()
            }
            other => other.to_string(),
        }
    }
}

/// Structured logging helpers
pub struct LogHelper;

impl LogHelper {
    pub fn log_row_anomaly(line: Option<u64>, reason: &str) {
        warn!(line = ?line, reason = %reason, "Skipping malformed CSV row");
    }

    pub fn log_error_chain(context: &str, err: &(dyn std::error::Error + 'static)) {
        let mut chain = Vec::new();
        let mut current = err.source();
        while let Some(cause) = current {
            chain.push(cause.to_string());
            current = cause.source();
        }
        error!(
            context = %context,
            error = %err,
            error_chain = ?chain,
            "Error occurred"
        );
    }
}
