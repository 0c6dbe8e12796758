pub mod issue_detail;
pub mod issue_list;

pub use issue_detail::IssueDetail;
pub use issue_list::IssueList;
