use dioxus::prelude::*;

use crate::domain::IssueFilters;
use crate::repository::csv_loader::known_categories;
use crate::services::apply_filters;
use crate::ui_dioxus::components::{ExportButton, FilterPanel, IssueCard};
use crate::ui_dioxus::state::Catalog;

#[component]
pub fn IssueList() -> Element {
    let catalog = use_context::<Catalog>();
    let mut filters = use_signal(IssueFilters::default);
    let categories = use_hook(|| known_categories(&catalog.issues));

    // Recomputed whenever the filter state changes
    let filtered = use_memo({
        let issues = catalog.issues.clone();
        move || apply_filters(&issues, &filters.read())
    });

    let shown = filtered.read().clone();
    let count = shown.len();
    let total = catalog.len();

    rsx! {
        div {
            class: "home-container",
            style: "padding: 20px; max-width: 1200px; margin: 0 auto;",

            div {
                class: "intro-section",
                h1 { style: "font-size: 1.8rem; font-weight: bold;", "Android Performance Issues Catalog" }
                p { "Browse through common performance issues in Android development and learn how to detect and fix them." }
            }

            FilterPanel { filters: filters, categories: categories }

            div {
                class: "issues-count",
                style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 12px;",
                p { "Showing {count} of {total} issues" }
                ExportButton { issues: shown.clone() }
            }

            if shown.is_empty() {
                div {
                    class: "no-results",
                    style: "text-align: center; padding: 60px; background: white; border-radius: 8px;",
                    p { "No performance issues match your filters." }
                    button {
                        onclick: move |_| filters.write().reset(),
                        "Reset Filters"
                    }
                }
            } else {
                div {
                    class: "issues-list",
                    for (index, issue) in shown.iter().cloned().enumerate() {
                        // identifiers are not guaranteed unique
                        IssueCard { key: "{index}", issue: issue }
                    }
                }
            }
        }
    }
}
