use async_trait::async_trait;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::debug;

use crate::services::error_handling::SourceError;

/// Where the dataset and example snippets are fetched from.
///
/// Paths are relative, `/`-separated, and resolved against the source root.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn fetch_bytes(&self, path: &str) -> Result<Vec<u8>, SourceError>;

    /// Text of a resource; invalid UTF-8 is replaced, never an error.
    async fn fetch_text(&self, path: &str) -> Result<String, SourceError> {
        let bytes = self.fetch_bytes(path).await?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Human-readable root, used in log lines.
    fn describe(&self) -> String;
}

/// Reads files below a local directory.
#[derive(Debug, Clone)]
pub struct FileSource {
    root: PathBuf,
}

impl FileSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl DataSource for FileSource {
    async fn fetch_bytes(&self, path: &str) -> Result<Vec<u8>, SourceError> {
        let full = path
            .split('/')
            .filter(|part| !part.is_empty())
            .fold(self.root.clone(), |acc, part| acc.join(part));
        debug!(path = %full.display(), "Reading file");

        tokio::fs::read(&full).await.map_err(|err| {
            if err.kind() == ErrorKind::NotFound {
                SourceError::NotFound {
                    path: path.to_string(),
                }
            } else {
                SourceError::Io {
                    path: path.to_string(),
                    source: err,
                }
            }
        })
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}

/// Fetches resources relative to an `http(s)://` base URL.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl DataSource for HttpSource {
    async fn fetch_bytes(&self, path: &str) -> Result<Vec<u8>, SourceError> {
        let url = self.url_for(path);
        debug!(url = %url, "Fetching resource");

        let transport = |err: reqwest::Error| SourceError::Transport {
            path: path.to_string(),
            message: err.to_string(),
        };

        let response = self.client.get(&url).send().await.map_err(transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                path: path.to_string(),
                status: status.as_u16(),
            });
        }
        let body = response.bytes().await.map_err(transport)?;
        Ok(body.to_vec())
    }

    fn describe(&self) -> String {
        self.base_url.clone()
    }
}

/// In-memory source, for bundled data and tests.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    files: HashMap<String, Vec<u8>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<String>, contents: impl Into<Vec<u8>>) -> Self {
        self.files.insert(path.into(), contents.into());
        self
    }
}

#[async_trait]
impl DataSource for MemorySource {
    async fn fetch_bytes(&self, path: &str) -> Result<Vec<u8>, SourceError> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| SourceError::NotFound {
                path: path.to_string(),
            })
    }

    fn describe(&self) -> String {
        format!("memory ({} files)", self.files.len())
    }
}
