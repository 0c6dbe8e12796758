use csv::{ReaderBuilder, StringRecord};
use std::collections::HashSet;
use tracing::{debug, info, warn};

use crate::domain::Issue;
use crate::domain::constants::{FIELD_ISSUE, ISSUE_CATEGORIES};
use crate::services::error_handling::{CatalogError, LogHelper};

/// Outcome of parsing the dataset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadReport {
    pub issues: Vec<Issue>,
    /// Rows dropped because their identifier was blank.
    pub skipped_rows: usize,
    /// Rows the CSV reader could not decode.
    pub parse_errors: usize,
    /// Identifiers that occur on more than one row.
    pub duplicate_ids: Vec<String>,
}

/// Parses `;`-delimited CSV into issues.
///
/// Only an unreadable header row is an error; row-level problems (including
/// invalid UTF-8) are logged, counted and skipped.
pub fn parse_issues(data: impl AsRef<[u8]>) -> Result<LoadReport, CatalogError> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(true)
        .flexible(true)
        .from_reader(data.as_ref());

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|name| name.trim().to_string())
        .collect();
    debug!(columns = headers.len(), "Parsed CSV header");

    let mut report = LoadReport::default();
    let mut seen = HashSet::new();

    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(err) => {
                let line = err.position().map(|pos| pos.line());
                LogHelper::log_row_anomaly(line, &err.to_string());
                report.parse_errors += 1;
                continue;
            }
        };

        let Some(issue) = normalize_row(&headers, &record) else {
            let line = record.position().map(|pos| pos.line());
            debug!(line = ?line, "Dropping row without an identifier");
            report.skipped_rows += 1;
            continue;
        };

        let id = issue.id().to_string();
        if !seen.insert(id.clone()) && !report.duplicate_ids.contains(&id) {
            warn!(issue = %id, "Duplicate issue identifier; lookups resolve to the first row");
            report.duplicate_ids.push(id);
        }
        report.issues.push(issue);
    }

    info!(
        issues = report.issues.len(),
        skipped = report.skipped_rows,
        parse_errors = report.parse_errors,
        "Parsed performance issues"
    );
    Ok(report)
}

/// Pairs cells with header names, stripping blank-named columns.
/// Returns `None` when the row has no usable identifier.
fn normalize_row(headers: &[String], record: &StringRecord) -> Option<Issue> {
    let fields = headers
        .iter()
        .zip(record.iter())
        .filter(|(name, _)| !name.is_empty())
        .map(|(name, value)| (name.as_str(), value));
    let issue = Issue::from_fields(fields);

    issue.field(FIELD_ISSUE).is_some().then_some(issue)
}

/// Distinct non-blank values of a column, in first-seen order.
pub fn unique_values(issues: &[Issue], column: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    issues
        .iter()
        .filter_map(|issue| issue.field(column))
        .filter(|value| seen.insert(*value))
        .map(str::to_string)
        .collect()
}

/// Registry categories followed by any other labels present in the data.
pub fn known_categories(issues: &[Issue]) -> Vec<String> {
    let mut categories: Vec<String> = ISSUE_CATEGORIES.iter().map(|c| c.to_string()).collect();
    for issue in issues {
        for label in issue.categories() {
            if !categories.iter().any(|known| known == label) {
                categories.push(label.to_string());
            }
        }
    }
    categories
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::constants::{FIELD_CATEGORY, FIELD_EXPLANATION};

    const SAMPLE: &str = "\
Issue;Category;Explanation;;Lint
Wakelock Leak;Resource Management;Wakelock never released;junk;✅

;Code Smell;orphan row;;
HashMap Usage;Code Smell, Data Manipulation;Use SparseArray;;
";

    #[test]
    fn test_parses_and_drops_blank_identifiers() {
        let report = parse_issues(SAMPLE).unwrap();
        let ids: Vec<_> = report.issues.iter().map(Issue::id).collect();
        assert_eq!(ids, vec!["Wakelock Leak", "HashMap Usage"]);
        assert_eq!(report.skipped_rows, 1);
        assert_eq!(report.parse_errors, 0);
    }

    #[test]
    fn test_blank_named_columns_are_stripped() {
        let report = parse_issues(SAMPLE).unwrap();
        let first = &report.issues[0];
        let names: Vec<_> = first.field_names().collect();
        assert_eq!(names, vec!["Issue", "Category", "Explanation", "Lint"]);
        assert!(first.is_flagged("Lint"));
    }

    #[test]
    fn test_short_rows_lack_missing_fields() {
        let report = parse_issues("Issue;Category;Explanation\nOnly Name\n").unwrap();
        let issue = &report.issues[0];
        assert_eq!(issue.id(), "Only Name");
        assert_eq!(issue.raw(FIELD_CATEGORY), None);
        assert_eq!(issue.raw(FIELD_EXPLANATION), None);
    }

    #[test]
    fn test_whitespace_identifier_is_dropped() {
        let report = parse_issues("Issue;Category\n   ;Concurrency\n").unwrap();
        assert!(report.issues.is_empty());
        assert_eq!(report.skipped_rows, 1);
    }

    #[test]
    fn test_header_names_are_trimmed() {
        let report = parse_issues(" Issue ; Category\nA;Concurrency\n").unwrap();
        assert_eq!(report.issues[0].id(), "A");
        assert_eq!(report.issues[0].field(FIELD_CATEGORY), Some("Concurrency"));
    }

    #[test]
    fn test_duplicates_are_kept_and_reported() {
        let report = parse_issues("Issue;Category\nA;x\nA;y\nA;z\nB;w\n").unwrap();
        assert_eq!(report.issues.len(), 4);
        assert_eq!(report.duplicate_ids, vec!["A".to_string()]);
    }

    #[test]
    fn test_quoted_fields_keep_delimiters() {
        let report = parse_issues("Issue;Explanation\n\"Semi; colon\";\"a; b\"\n").unwrap();
        assert_eq!(report.issues[0].id(), "Semi; colon");
        assert_eq!(report.issues[0].field(FIELD_EXPLANATION), Some("a; b"));
    }

    #[test]
    fn test_undecodable_row_is_counted_and_skipped() {
        let data = b"Issue;Explanation\nGood Row;fine\nBad Row;caf\xE9\nOther Row;ok\n";
        let report = parse_issues(data).unwrap();
        let ids: Vec<_> = report.issues.iter().map(Issue::id).collect();
        assert_eq!(ids, vec!["Good Row", "Other Row"]);
        assert_eq!(report.parse_errors, 1);
        assert_eq!(report.skipped_rows, 0);
    }

    #[test]
    fn test_undecodable_header_is_an_error() {
        let err = parse_issues(b"Iss\xFFue;Explanation\nA;b\n").unwrap_err();
        assert!(matches!(err, CatalogError::Csv(_)));
    }

    #[test]
    fn test_byte_order_mark_is_tolerated() {
        let report = parse_issues("\u{FEFF}Issue;Category\nA;Concurrency\n").unwrap();
        assert_eq!(report.issues[0].id(), "A");
    }

    #[test]
    fn test_unique_values_and_categories() {
        let report = parse_issues(SAMPLE).unwrap();
        assert_eq!(
            unique_values(&report.issues, FIELD_CATEGORY),
            vec!["Resource Management", "Code Smell, Data Manipulation"]
        );

        let extra = vec![Issue::new("X").with(FIELD_CATEGORY, "Code Smell, Startup")];
        let categories = known_categories(&extra);
        assert_eq!(categories.len(), ISSUE_CATEGORIES.len() + 1);
        assert_eq!(categories.last().map(String::as_str), Some("Startup"));
    }
}
