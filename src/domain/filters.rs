use serde::{Deserialize, Serialize};

/// Platform-specificity choice, matched against the `Android-Specific` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
    AndroidSpecific,
    Generic,
}

impl Platform {
    /// Cell value this choice matches exactly.
    pub fn as_field_value(&self) -> &'static str {
        match self {
            Platform::AndroidSpecific => "Yes",
            Platform::Generic => "No",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Platform::AndroidSpecific => "Android-Specific",
            Platform::Generic => "Generic",
        }
    }

    pub fn from_field_value(value: &str) -> Option<Self> {
        match value {
            "Yes" => Some(Platform::AndroidSpecific),
            "No" => Some(Platform::Generic),
            _ => None,
        }
    }
}

/// Current combination of user-selected search and filter criteria.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IssueFilters {
    pub search: String,
    pub category: Option<String>,
    pub side_effect: Option<String>,
    pub platform: Option<Platform>,
    pub tools: Vec<String>,
}

impl IssueFilters {
    /// Search text with surrounding whitespace removed.
    pub fn search_term(&self) -> Option<&str> {
        let term = self.search.trim();
        (!term.is_empty()).then_some(term)
    }

    pub fn is_empty(&self) -> bool {
        self.search_term().is_none()
            && self.category.is_none()
            && self.side_effect.is_none()
            && self.platform.is_none()
            && self.tools.is_empty()
    }

    /// Adds the tool if absent, removes it otherwise.
    pub fn toggle_tool(&mut self, tool: &str) {
        match self.tools.iter().position(|selected| selected == tool) {
            Some(index) => {
                self.tools.remove(index);
            }
            None => self.tools.push(tool.to_string()),
        }
    }

    pub fn has_tool(&self, tool: &str) -> bool {
        self.tools.iter().any(|selected| selected == tool)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Maps a `<select>` value to an optional criterion; the empty option means "any".
pub fn selection(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}
