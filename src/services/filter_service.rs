//! Filter engine over the in-memory issue set.
//!
//! All predicates are conjunctive. Within the detection-tool predicate a
//! record matches when it is flagged for any selected tool.

use crate::domain::constants::{FIELD_ANDROID_SPECIFIC, FIELD_EXPLANATION, FIELD_SIDE_EFFECT};
use crate::domain::{Issue, IssueFilters};

/// Issues matching `filters`, in their original relative order.
pub fn apply_filters(issues: &[Issue], filters: &IssueFilters) -> Vec<Issue> {
    if filters.is_empty() {
        return issues.to_vec();
    }
    filter_refs(issues, filters).into_iter().cloned().collect()
}

/// Borrowing variant of [`apply_filters`].
pub fn filter_refs<'a>(issues: &'a [Issue], filters: &IssueFilters) -> Vec<&'a Issue> {
    let search = filters.search_term().map(str::to_lowercase);
    issues
        .iter()
        .filter(|issue| matches_with(issue, filters, search.as_deref()))
        .collect()
}

/// Single-record predicate.
pub fn matches(issue: &Issue, filters: &IssueFilters) -> bool {
    let search = filters.search_term().map(str::to_lowercase);
    matches_with(issue, filters, search.as_deref())
}

fn matches_with(issue: &Issue, filters: &IssueFilters, search: Option<&str>) -> bool {
    search.is_none_or(|needle| matches_search(issue, needle))
        && filters
            .category
            .as_deref()
            .is_none_or(|category| issue.has_category(category))
        && filters
            .side_effect
            .as_deref()
            .is_none_or(|side_effect| issue.raw(FIELD_SIDE_EFFECT) == Some(side_effect))
        && filters
            .platform
            .is_none_or(|platform| issue.raw(FIELD_ANDROID_SPECIFIC) == Some(platform.as_field_value()))
        && (filters.tools.is_empty() || filters.tools.iter().any(|tool| issue.is_flagged(tool)))
}

// `needle` is already lowercased
fn matches_search(issue: &Issue, needle: &str) -> bool {
    issue.id().to_lowercase().contains(needle)
        || issue
            .raw(FIELD_EXPLANATION)
            .is_some_and(|text| text.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Platform;
    use crate::domain::constants::FIELD_CATEGORY;
    use rstest::rstest;

    fn catalog() -> Vec<Issue> {
        vec![
            Issue::new("Wakelock Leak")
                .with(FIELD_CATEGORY, "Code Smell, Resource Management")
                .with(FIELD_SIDE_EFFECT, "Energy")
                .with(FIELD_ANDROID_SPECIFIC, "Yes")
                .with(FIELD_EXPLANATION, "A wakelock held forever drains the battery")
                .with("Lint", "✅"),
            Issue::new("Static Context")
                .with(FIELD_CATEGORY, "Resource Management")
                .with(FIELD_SIDE_EFFECT, "Memory")
                .with(FIELD_ANDROID_SPECIFIC, "Yes")
                .with(FIELD_EXPLANATION, "Holding a Context in a static field causes a memory leak")
                .with("Infer", "✅"),
            Issue::new("String Concatenation in Loop")
                .with(FIELD_CATEGORY, "Suboptimal Algorithm")
                .with(FIELD_SIDE_EFFECT, "Runtime")
                .with(FIELD_ANDROID_SPECIFIC, "No")
                .with("PMD", "✅")
                .with("Lint", ""),
            Issue::new("Unclosed Cursor"),
        ]
    }

    fn ids(issues: &[Issue]) -> Vec<&str> {
        issues.iter().map(Issue::id).collect()
    }

    #[test]
    fn test_empty_filters_return_everything_in_order() {
        let issues = catalog();
        assert_eq!(apply_filters(&issues, &IssueFilters::default()), issues);
    }

    #[rstest]
    #[case("MEMORY", vec!["Static Context"])]
    #[case("leak", vec!["Wakelock Leak", "Static Context"])]
    #[case("  loop ", vec!["String Concatenation in Loop"])]
    #[case("nothing like this", vec![])]
    fn test_search_is_case_insensitive(#[case] search: &str, #[case] expected: Vec<&str>) {
        let issues = catalog();
        let filters = IssueFilters {
            search: search.to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&apply_filters(&issues, &filters)), expected);
    }

    #[rstest]
    #[case("Resource Management", vec!["Wakelock Leak", "Static Context"])]
    #[case("Code Smell", vec!["Wakelock Leak"])]
    #[case("Resource", vec![])]
    fn test_category_matches_list_elements(#[case] category: &str, #[case] expected: Vec<&str>) {
        let issues = catalog();
        let filters = IssueFilters {
            category: Some(category.to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&apply_filters(&issues, &filters)), expected);
    }

    #[test]
    fn test_side_effect_and_platform_are_exact() {
        let issues = catalog();
        let filters = IssueFilters {
            side_effect: Some("Memory".to_string()),
            platform: Some(Platform::AndroidSpecific),
            ..Default::default()
        };
        assert_eq!(ids(&apply_filters(&issues, &filters)), vec!["Static Context"]);

        let generic = IssueFilters {
            platform: Some(Platform::Generic),
            ..Default::default()
        };
        // a missing column is not "No"
        assert_eq!(ids(&apply_filters(&issues, &generic)), vec!["String Concatenation in Loop"]);
    }

    #[test]
    fn test_tools_are_a_union() {
        let issues = catalog();
        let mut filters = IssueFilters::default();
        filters.toggle_tool("Lint");
        filters.toggle_tool("PMD");
        assert_eq!(
            ids(&apply_filters(&issues, &filters)),
            vec!["Wakelock Leak", "String Concatenation in Loop"]
        );
    }

    #[test]
    fn test_predicates_are_conjunctive() {
        let issues = catalog();
        let filters = IssueFilters {
            search: "leak".to_string(),
            category: Some("Resource Management".to_string()),
            tools: vec!["Infer".to_string()],
            ..Default::default()
        };
        assert_eq!(ids(&apply_filters(&issues, &filters)), vec!["Static Context"]);
        assert!(matches(&issues[1], &filters));
        assert!(!matches(&issues[0], &filters));
    }

    #[test]
    fn test_filter_refs_borrow_from_input() {
        let issues = catalog();
        let filters = IssueFilters {
            category: Some("Suboptimal Algorithm".to_string()),
            ..Default::default()
        };
        let refs = filter_refs(&issues, &filters);
        assert!(std::ptr::eq(refs[0], &issues[2]));
    }
}
