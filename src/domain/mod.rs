pub mod constants;
pub mod filters;
pub mod issue;

pub use filters::{IssueFilters, Platform};
pub use issue::{Issue, IssueSlug, Sample};
