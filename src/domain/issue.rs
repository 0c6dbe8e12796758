use serde::ser::{Serialize, SerializeMap, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use super::constants::{
    CHECKMARK, DETECTION_TOOLS, FIELD_ANDROID_SPECIFIC, FIELD_CATEGORY, FIELD_EXAMPLE_1,
    FIELD_EXAMPLE_2, FIELD_EXPLANATION, FIELD_ISSUE, FIELD_KOTLIN, FIELD_SAMPLE, NEGATIVE_MARKERS,
    PREVIEW_CHARS,
};

/// One row of the performance-issue dataset.
///
/// Fields keep the column order of the source file. The only field the
/// catalog relies on is `Issue`, which acts as the identifier.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Issue {
    fields: Vec<(String, String)>,
}

/// Additional material attached to an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sample<'a> {
    Link(&'a str),
    Text(&'a str),
}

impl Issue {
    pub fn new(name: impl Into<String>) -> Self {
        Self::default().with(FIELD_ISSUE, name)
    }

    pub fn from_fields<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut issue = Self::default();
        for (name, value) in fields {
            issue.set(name, value);
        }
        issue
    }

    /// Builder-style setter.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Sets a field, replacing an existing value in place.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(key, _)| *key == name) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((name, value)),
        }
    }

    pub fn id(&self) -> &str {
        self.raw(FIELD_ISSUE).unwrap_or_default()
    }

    /// Value exactly as it appeared in the source.
    pub fn raw(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Trimmed value, `None` when absent or blank.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.raw(name).map(str::trim).filter(|value| !value.is_empty())
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Category labels, split on commas with blanks dropped.
    pub fn categories(&self) -> Vec<&str> {
        self.raw(FIELD_CATEGORY)
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|label| !label.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.categories().contains(&category)
    }

    pub fn is_android_specific(&self) -> bool {
        self.field(FIELD_ANDROID_SPECIFIC) == Some("Yes")
    }

    /// Whether the column for `tool` carries a positive mark.
    pub fn is_flagged(&self, tool: &str) -> bool {
        self.field(tool).is_some_and(is_positive_mark)
    }

    /// Tools flagged for this issue, in registry order.
    pub fn detection_tools(&self) -> Vec<&'static str> {
        DETECTION_TOOLS
            .iter()
            .copied()
            .filter(|tool| self.is_flagged(tool))
            .collect()
    }

    pub fn is_kotlin_detectable(&self) -> bool {
        self.is_flagged(FIELD_KOTLIN)
    }

    /// Card preview of the explanation.
    pub fn preview(&self) -> String {
        match self.field(FIELD_EXPLANATION) {
            None => "No description available".to_string(),
            Some(text) if text.chars().count() > PREVIEW_CHARS => {
                let cut: String = text.chars().take(PREVIEW_CHARS).collect();
                format!("{cut}...")
            }
            Some(text) => text.to_string(),
        }
    }

    pub fn sample(&self) -> Option<Sample<'_>> {
        self.field(FIELD_SAMPLE).map(|sample| {
            if sample.starts_with("http") {
                Sample::Link(sample)
            } else {
                Sample::Text(sample)
            }
        })
    }

    /// Snippet filenames for the two example slots.
    pub fn example_files(&self) -> [Option<&str>; 2] {
        [self.field(FIELD_EXAMPLE_1), self.field(FIELD_EXAMPLE_2)]
    }

    pub fn slug(&self) -> IssueSlug {
        IssueSlug(self.id().to_string())
    }
}

fn is_positive_mark(value: &str) -> bool {
    if value == CHECKMARK {
        return true;
    }
    let lowered = value.to_lowercase();
    !NEGATIVE_MARKERS.contains(&lowered.as_str())
}

impl Serialize for Issue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Issue identifier as it travels through a route segment.
///
/// Displays and parses as the raw identifier. The router percent-encodes
/// the segment when building a URL and decodes it before parsing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct IssueSlug(pub String);

impl IssueSlug {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for IssueSlug {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for IssueSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for IssueSlug {
    type Err = Infallible;

    fn from_str(segment: &str) -> Result<Self, Self::Err> {
        Ok(Self(segment.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::constants::FIELD_SIDE_EFFECT;

    fn wakelock() -> Issue {
        Issue::new("Wakelock Leak")
            .with(FIELD_CATEGORY, "Code Smell, Resource Management,")
            .with(FIELD_SIDE_EFFECT, "Energy")
            .with(FIELD_ANDROID_SPECIFIC, "Yes")
            .with("Lint", "✅")
            .with("PMD", "")
            .with("Infer", "No")
            .with("Detekt", "x")
    }

    #[test]
    fn test_categories_are_split_and_trimmed() {
        let issue = wakelock();
        assert_eq!(issue.categories(), vec!["Code Smell", "Resource Management"]);
        assert!(issue.has_category("Resource Management"));
        assert!(!issue.has_category("Resource"));
    }

    #[test]
    fn test_flags_follow_registry_order() {
        let issue = wakelock();
        assert_eq!(issue.detection_tools(), vec!["Lint", "Detekt"]);
        assert!(!issue.is_flagged("PMD"));
        assert!(!issue.is_flagged("Infer"));
        assert!(!issue.is_flagged("Chimera"));
    }

    #[test]
    fn test_set_replaces_in_place() {
        let mut issue = wakelock();
        issue.set(FIELD_SIDE_EFFECT, "Memory");
        assert_eq!(issue.field(FIELD_SIDE_EFFECT), Some("Memory"));
        let names: Vec<_> = issue.field_names().collect();
        assert_eq!(names[2], FIELD_SIDE_EFFECT);
    }

    #[test]
    fn test_preview_truncates_by_characters() {
        let long = "é".repeat(200);
        let issue = Issue::new("Long").with(FIELD_EXPLANATION, long);
        let preview = issue.preview();
        assert!(preview.ends_with("..."));
        assert_eq!(preview.chars().count(), PREVIEW_CHARS + 3);

        assert_eq!(Issue::new("Bare").preview(), "No description available");
    }

    #[test]
    fn test_sample_kind() {
        let link = Issue::new("A").with(FIELD_SAMPLE, "https://developer.android.com");
        assert_eq!(link.sample(), Some(Sample::Link("https://developer.android.com")));

        let text = Issue::new("B").with(FIELD_SAMPLE, "See the docs");
        assert_eq!(text.sample(), Some(Sample::Text("See the docs")));

        assert_eq!(Issue::new("C").with(FIELD_SAMPLE, "  ").sample(), None);
    }

    #[test]
    fn test_slug_is_the_raw_identifier() {
        let slug = Issue::new("Cache%20Hits (int)").slug();
        assert_eq!(slug.to_string(), "Cache%20Hits (int)");
        assert_eq!(slug.to_string().parse::<IssueSlug>().unwrap(), slug);
    }

    #[test]
    fn test_serializes_in_column_order() {
        let json = serde_json::to_string(&wakelock()).unwrap();
        assert!(json.starts_with("{\"Issue\":\"Wakelock Leak\",\"Category\""));
    }
}
