use dioxus::prelude::*;
use std::sync::Arc;
use tracing::warn;

use crate::config::CatalogConfig;
use crate::domain::Issue;
use crate::repository::Repository;
use crate::ui_dioxus::router::Route;
use crate::ui_dioxus::state::Catalog;

const STYLES: &str = r#"
body { font-family: system-ui, sans-serif; background: #f9fafb; margin: 0; }
a { color: inherit; text-decoration: none; }
.navbar { padding: 12px 20px; background: #111827; color: white; font-weight: 600; }
.tabs button { padding: 8px 14px; background: none; border: none; cursor: pointer; }
.tabs button.active { border-bottom: 2px solid #3b82f6; color: #1d4ed8; }
.no-content { color: #9ca3af; font-style: italic; }
"#;

#[component]
pub fn App() -> Element {
    let config = use_context::<CatalogConfig>();
    let repository = use_context_provider(|| Arc::new(Repository::from_config(config)));

    // The dataset is fetched once; "Try Again" restarts the load
    let mut dataset = use_resource(move || {
        let repository = repository.clone();
        async move {
            match repository.load_issues().await {
                Ok(report) => {
                    if report.parse_errors > 0 || !report.duplicate_ids.is_empty() {
                        warn!(
                            parse_errors = report.parse_errors,
                            duplicates = ?report.duplicate_ids,
                            "Dataset loaded with anomalies"
                        );
                    }
                    Ok(Arc::new(report.issues))
                }
                Err(e) => Err(e.user_message()),
            }
        }
    });

    let content = match &*dataset.read_unchecked() {
        Some(Ok(issues)) => rsx! { CatalogRoot { issues: issues.clone() } },
        Some(Err(message)) => rsx! {
            div {
                class: "error-container",
                style: "text-align: center; padding: 60px;",
                h2 { "Error" }
                p { "{message}" }
                button {
                    onclick: move |_| dataset.restart(),
                    "Try Again"
                }
            }
        },
        None => rsx! {
            div {
                class: "loading-container",
                style: "display: flex; justify-content: center; align-items: center; height: 100vh; font-size: 1.5rem;",
                "Loading performance issues data..."
            }
        },
    };

    rsx! {
        style { "{STYLES}" }
        {content}
    }
}

/// Shares the loaded issues with every route.
#[component]
fn CatalogRoot(issues: Arc<Vec<Issue>>) -> Element {
    use_context_provider(|| Catalog::new(issues));

    rsx! {
        Router::<Route> {}
    }
}
