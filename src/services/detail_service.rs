use std::fmt;
use tracing::{debug, warn};

use crate::domain::Issue;
use crate::repository::Repository;
use crate::services::error_handling::CatalogError;

/// Result of resolving a detail-route identifier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DetailLookup<'a> {
    Found(&'a Issue),
    NotFound,
}

impl<'a> DetailLookup<'a> {
    pub fn issue(self) -> Option<&'a Issue> {
        match self {
            DetailLookup::Found(issue) => Some(issue),
            DetailLookup::NotFound => None,
        }
    }

    pub fn into_result(self, id: &str) -> Result<&'a Issue, CatalogError> {
        self.issue().ok_or_else(|| CatalogError::IssueNotFound { id: id.to_string() })
    }
}

/// First issue whose identifier equals `id` exactly.
pub fn find_issue<'a>(issues: &'a [Issue], id: &str) -> DetailLookup<'a> {
    match issues.iter().find(|issue| issue.id() == id) {
        Some(issue) => DetailLookup::Found(issue),
        None => {
            debug!(id = %id, "No issue with this identifier");
            DetailLookup::NotFound
        }
    }
}

/// Contents of one example slot on the detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExampleSnippet {
    /// No filename given for this slot.
    Missing,
    Loaded(String),
    /// The file does not exist at the source.
    Unavailable { file: String },
    /// The source could not be reached or read.
    Failed { file: String, reason: String },
}

impl ExampleSnippet {
    pub fn is_loaded(&self) -> bool {
        matches!(self, ExampleSnippet::Loaded(_))
    }

    /// Text shown in the slot.
    pub fn text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ExampleSnippet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExampleSnippet::Missing => write!(f, "No example available"),
            ExampleSnippet::Loaded(code) => write!(f, "{code}"),
            ExampleSnippet::Unavailable { file } => {
                write!(f, "Code example could not be loaded ({file})")
            }
            ExampleSnippet::Failed { .. } => write!(f, "Error loading code example"),
        }
    }
}

/// Both example slots of an issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExamplePair {
    pub first: ExampleSnippet,
    pub second: ExampleSnippet,
}

impl ExamplePair {
    pub fn slots(&self) -> [&ExampleSnippet; 2] {
        [&self.first, &self.second]
    }
}

/// Loads one snippet; never fails.
pub async fn load_example(repository: &Repository, file_name: Option<&str>) -> ExampleSnippet {
    let Some(file) = file_name.map(str::trim).filter(|name| !name.is_empty()) else {
        return ExampleSnippet::Missing;
    };

    match repository.fetch_example(file).await {
        Ok(code) => ExampleSnippet::Loaded(code),
        Err(err) if err.is_missing() => {
            debug!(file = %file, error = %err, "Code example not available");
            ExampleSnippet::Unavailable {
                file: file.to_string(),
            }
        }
        Err(err) => {
            warn!(file = %file, error = %err, "Error loading code example");
            ExampleSnippet::Failed {
                file: file.to_string(),
                reason: err.to_string(),
            }
        }
    }
}

/// Fetches both example slots concurrently and waits for both.
pub async fn load_examples(repository: &Repository, issue: &Issue) -> ExamplePair {
    let [first, second] = issue.example_files();
    let (first, second) = futures::join!(
        load_example(repository, first),
        load_example(repository, second)
    );
    ExamplePair { first, second }
}
