use chrono::Utc;
use csv::WriterBuilder;
use std::path::Path;
use tracing::info;

use crate::domain::Issue;
use crate::domain::constants::{FIELD_EXPECTED_FIX, FIELD_SIDE_EFFECT};
use crate::services::error_handling::CatalogError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
    Markdown,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
            ExportFormat::Markdown => "md",
        }
    }
}

/// Renders issue sets in shareable formats.
pub struct ExportService;

impl ExportService {
    /// Export issues to JSON format
    pub fn export_to_json(issues: &[Issue]) -> Result<String, CatalogError> {
        serde_json::to_string_pretty(issues).map_err(|e| CatalogError::Export {
            message: e.to_string(),
        })
    }

    /// Export issues to `;`-delimited CSV, columns in first-seen order
    pub fn export_to_csv(issues: &[Issue]) -> Result<String, CatalogError> {
        let mut columns: Vec<&str> = Vec::new();
        for name in issues.iter().flat_map(Issue::field_names) {
            if !columns.contains(&name) {
                columns.push(name);
            }
        }

        let mut wtr = WriterBuilder::new().delimiter(b';').from_writer(vec![]);
        wtr.write_record(&columns)?;
        for issue in issues {
            wtr.write_record(columns.iter().map(|name| issue.raw(name).unwrap_or_default()))?;
        }

        let data = wtr.into_inner().map_err(|e| CatalogError::Export {
            message: e.to_string(),
        })?;
        String::from_utf8(data).map_err(|e| CatalogError::Export {
            message: e.to_string(),
        })
    }

    /// Export issues to a Markdown digest grouped by category
    pub fn export_to_markdown(issues: &[Issue]) -> String {
        let mut output = String::new();

        output.push_str("# Android Performance Issues\n\n");
        output.push_str(&format!(
            "Generated: {}\n",
            Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        ));

        // Multi-category issues appear under each of their categories
        let mut groups: Vec<(String, Vec<&Issue>)> = Vec::new();
        for issue in issues {
            let categories = issue.categories();
            let labels = if categories.is_empty() {
                vec!["Uncategorized"]
            } else {
                categories
            };
            for label in labels {
                match groups.iter_mut().find(|(name, _)| *name == label) {
                    Some((_, members)) => members.push(issue),
                    None => groups.push((label.to_string(), vec![issue])),
                }
            }
        }

        for (category, members) in &groups {
            output.push_str(&format!("\n## {} ({})\n\n", category, members.len()));

            for issue in members {
                output.push_str(&format!("### {}\n", issue.id()));
                output.push_str(&format!("{}\n", issue.preview()));

                if let Some(side_effect) = issue.field(FIELD_SIDE_EFFECT) {
                    output.push_str(&format!("- **Side effect:** {}\n", side_effect));
                }
                if issue.is_android_specific() {
                    output.push_str("- **Android-specific**\n");
                }
                if let Some(fix) = issue.field(FIELD_EXPECTED_FIX) {
                    output.push_str(&format!("- **Fix:** {}\n", fix));
                }
                let tools = issue.detection_tools();
                if !tools.is_empty() {
                    output.push_str(&format!("- **Detected by:** {}\n", tools.join(", ")));
                }
                output.push('\n');
            }
        }

        output
    }

    pub fn export(issues: &[Issue], format: ExportFormat) -> Result<String, CatalogError> {
        match format {
            ExportFormat::Json => Self::export_to_json(issues),
            ExportFormat::Csv => Self::export_to_csv(issues),
            ExportFormat::Markdown => Ok(Self::export_to_markdown(issues)),
        }
    }

    /// Save export to file
    pub async fn export_to_file(
        issues: &[Issue],
        format: ExportFormat,
        path: &Path,
    ) -> Result<(), CatalogError> {
        let content = Self::export(issues, format)?;
        tokio::fs::write(path, content)
            .await
            .map_err(|e| CatalogError::Export {
                message: format!("Failed to save {}: {}", path.display(), e),
            })?;
        info!(path = %path.display(), issues = issues.len(), "Exported issues");
        Ok(())
    }

    /// Timestamped file name for an export.
    pub fn default_file_name(format: ExportFormat) -> String {
        format!(
            "performance_issues_{}.{}",
            Utc::now().format("%Y%m%d_%H%M%S"),
            format.extension()
        )
    }
}
