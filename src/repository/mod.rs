pub mod csv_loader;
pub mod source;

use std::sync::Arc;
use tracing::{info, instrument};

use crate::config::CatalogConfig;
use crate::services::error_handling::{CatalogError, LogHelper, SourceError};
use csv_loader::LoadReport;
use source::DataSource;

/// Access to the dataset and its example snippets.
#[derive(Clone)]
pub struct Repository {
    source: Arc<dyn DataSource>,
    config: CatalogConfig,
}

impl Repository {
    pub fn new(source: Arc<dyn DataSource>, config: CatalogConfig) -> Self {
        Self { source, config }
    }

    pub fn from_config(config: CatalogConfig) -> Self {
        let source: Arc<dyn DataSource> = Arc::from(config.data_source());
        Self::new(source, config)
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Fetches and parses the issue CSV.
    #[instrument(skip(self), fields(source = %self.source.describe()))]
    pub async fn load_issues(&self) -> Result<LoadReport, CatalogError> {
        let path = self.config.issues_file.as_str();
        let result = match self.source.fetch_bytes(path).await {
            Ok(bytes) => csv_loader::parse_issues(&bytes),
            Err(err) => Err(err.into()),
        };

        match result {
            Ok(report) => {
                info!(issues = report.issues.len(), "Loaded performance issues");
                Ok(report)
            }
            Err(err) => {
                LogHelper::log_error_chain("Error fetching or parsing CSV", &err);
                Err(CatalogError::load_failed(path, err))
            }
        }
    }

    /// Raw text of an example snippet by file name.
    pub async fn fetch_example(&self, file_name: &str) -> Result<String, SourceError> {
        let path = self.config.example_path(file_name);
        self.source.fetch_text(&path).await
    }
}

impl std::fmt::Debug for Repository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Repository")
            .field("source", &self.source.describe())
            .field("config", &self.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use source::MockDataSource;
    use tempfile::tempdir;

    const CSV: &str = "Issue;Category\nWakelock Leak;Resource Management\n;Code Smell\n";

    #[tokio::test]
    async fn test_load_issues_reads_configured_file() {
        let mut source = MockDataSource::new();
        source
            .expect_fetch_bytes()
            .withf(|path| path == "data/performance_issues_list_v2.csv")
            .times(1)
            .returning(|_| Ok(CSV.as_bytes().to_vec()));
        source.expect_describe().return_const("mock".to_string());

        let repo = Repository::new(Arc::new(source), CatalogConfig::default());
        let report = repo.load_issues().await.unwrap();
        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.skipped_rows, 1);
    }

    #[tokio::test]
    async fn test_fetch_failure_is_load_failure() {
        let mut source = MockDataSource::new();
        source.expect_fetch_bytes().returning(|path| {
            Err(SourceError::Status {
                path: path.to_string(),
                status: 500,
            })
        });
        source.expect_describe().return_const("mock".to_string());

        let repo = Repository::new(Arc::new(source), CatalogConfig::default());
        let err = repo.load_issues().await.unwrap_err();
        assert!(matches!(err, CatalogError::LoadFailed { .. }));
    }

    #[tokio::test]
    async fn test_fetch_example_resolves_examples_dir() {
        let mut source = MockDataSource::new();
        source
            .expect_fetch_text()
            .withf(|path| path == "data/examples/leak.java")
            .returning(|_| Ok("class Leak {}".to_string()));

        let repo = Repository::new(Arc::new(source), CatalogConfig::default());
        assert_eq!(repo.fetch_example("leak.java").await.unwrap(), "class Leak {}");
    }

    #[tokio::test]
    async fn test_bad_bytes_in_one_row_do_not_fail_the_load() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join("issues.csv"),
            b"Issue;Explanation\nGood Row;fine\nBad Row;caf\xE9\nOther Row;ok\n",
        )
        .unwrap();
        let config = CatalogConfig {
            data_root: dir.path().display().to_string(),
            issues_file: "issues.csv".to_string(),
            ..CatalogConfig::default()
        };

        let report = Repository::from_config(config).load_issues().await.unwrap();
        assert_eq!(report.issues.len(), 2);
        assert_eq!(report.parse_errors, 1);
        println!("✅ Load survived an undecodable row");
    }
}
