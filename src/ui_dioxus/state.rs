use std::sync::Arc;

use crate::domain::Issue;

/// The loaded dataset, shared read-only with every route through context.
#[derive(Clone, Debug, PartialEq)]
pub struct Catalog {
    pub issues: Arc<Vec<Issue>>,
}

impl Catalog {
    pub fn new(issues: Arc<Vec<Issue>>) -> Self {
        Self { issues }
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Sections of the detail page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DetailTab {
    Explanation,
    Fix,
    Examples,
    Detection,
}

impl DetailTab {
    pub const ALL: [DetailTab; 4] = [
        DetailTab::Explanation,
        DetailTab::Fix,
        DetailTab::Examples,
        DetailTab::Detection,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DetailTab::Explanation => "Explanation",
            DetailTab::Fix => "How to Fix",
            DetailTab::Examples => "Code Examples",
            DetailTab::Detection => "Detection Tools",
        }
    }
}
