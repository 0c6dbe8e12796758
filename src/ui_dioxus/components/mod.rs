pub mod examples_panel;
pub mod export_button;
pub mod filter_panel;
pub mod issue_card;

pub use examples_panel::ExamplesPanel;
pub use export_button::ExportButton;
pub use filter_panel::FilterPanel;
pub use issue_card::IssueCard;
