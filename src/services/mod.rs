pub mod detail_service;
pub mod error_handling;
pub mod export_service;
pub mod filter_service;

pub use detail_service::{DetailLookup, ExamplePair, ExampleSnippet, find_issue, load_examples};
pub use error_handling::{CatalogError, SourceError};
pub use export_service::{ExportFormat, ExportService};
pub use filter_service::apply_filters;
