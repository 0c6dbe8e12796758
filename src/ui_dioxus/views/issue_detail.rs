use dioxus::prelude::*;
use std::sync::Arc;

use crate::domain::constants::{
    FIELD_CATEGORY, FIELD_EXPECTED_FIX, FIELD_EXPLANATION, FIELD_FILE_EXTENSIONS,
    FIELD_POSSIBLE_VOID, FIELD_SEVERITY, FIELD_SIDE_EFFECT,
};
use crate::domain::{Issue, IssueSlug, Sample};
use crate::repository::Repository;
use crate::services::{DetailLookup, find_issue, load_examples};
use crate::ui_dioxus::components::ExamplesPanel;
use crate::ui_dioxus::router::Route;
use crate::ui_dioxus::state::{Catalog, DetailTab};

const NO_EXPLANATION: &str = "No detailed explanation available for this issue.";

#[component]
pub fn IssueDetail(issue_id: IssueSlug) -> Element {
    let catalog = use_context::<Catalog>();

    match find_issue(&catalog.issues, issue_id.as_str()) {
        // Keyed so that navigating to another issue remounts the page and
        // drops the previous example fetch
        DetailLookup::Found(issue) => rsx! {
            IssueDetailPage { key: "{issue_id}", issue: issue.clone() }
        },
        DetailLookup::NotFound => rsx! { IssueNotFound {} },
    }
}

#[component]
fn IssueNotFound() -> Element {
    rsx! {
        div {
            class: "error-container",
            style: "text-align: center; padding: 60px;",
            h2 { "Issue Not Found" }
            p { "The performance issue you're looking for doesn't exist in our database." }
            Link { to: Route::IssueList {}, "Return to Issue List" }
        }
    }
}

#[component]
fn IssueDetailPage(issue: Issue) -> Element {
    let repository = use_context::<Arc<Repository>>();
    let mut active_tab = use_signal(|| DetailTab::Explanation);

    let examples = use_resource({
        let issue = issue.clone();
        move || {
            let repository = repository.clone();
            let issue = issue.clone();
            async move { load_examples(&repository, &issue).await }
        }
    });

    // Both snippets must resolve before the page leaves its loading state
    let Some(pair) = (*examples.read()).clone() else {
        return rsx! {
            div {
                class: "loading-container",
                style: "text-align: center; padding: 40px; color: #6b7280;",
                p { "Loading issue details..." }
            }
        };
    };

    let name = issue.id().to_string();
    let severity = issue.field(FIELD_SEVERITY).unwrap_or("Not specified").to_string();
    let tab = active_tab();

    rsx! {
        div {
            class: "issue-detail-container",
            style: "padding: 20px; max-width: 1000px; margin: 0 auto;",

            div {
                class: "issue-header",
                div { class: "back-button", Link { to: Route::IssueList {}, "← Back to Issue List" } }
                h1 { style: "font-size: 1.8rem; font-weight: bold;", "{name}" }

                div {
                    class: "issue-badges",
                    style: "display: flex; gap: 8px;",
                    if let Some(category) = issue.field(FIELD_CATEGORY) {
                        span { class: "category-badge", "{category}" }
                    }
                    if let Some(side_effect) = issue.field(FIELD_SIDE_EFFECT) {
                        span { class: "side-effect-badge", "{side_effect}" }
                    }
                    if issue.is_android_specific() {
                        span { class: "android-badge", "Android-Specific" }
                    }
                    span { class: "severity-badge", "Severity: {severity}" }
                }
            }

            div {
                class: "tabs-container",

                div {
                    class: "tabs",
                    style: "display: flex; gap: 4px; border-bottom: 1px solid #e5e7eb;",
                    for candidate in DetailTab::ALL {
                        button {
                            key: "{candidate:?}",
                            class: if candidate == tab { "active" } else { "" },
                            onclick: move |_| active_tab.set(candidate),
                            {candidate.label()}
                        }
                    }
                }

                div {
                    class: "tab-content",
                    style: "padding: 16px 0;",
                    match tab {
                        DetailTab::Explanation => rsx! { ExplanationTab { issue: issue.clone() } },
                        DetailTab::Fix => rsx! { FixTab { issue: issue.clone() } },
                        DetailTab::Examples => rsx! { ExamplesPanel { examples: pair.clone() } },
                        DetailTab::Detection => rsx! { DetectionTab { issue: issue.clone() } },
                    }
                }
            }
        }
    }
}

#[component]
fn ExplanationTab(issue: Issue) -> Element {
    let explanation = issue.field(FIELD_EXPLANATION).unwrap_or(NO_EXPLANATION).to_string();
    let void_if = issue.field(FIELD_POSSIBLE_VOID).unwrap_or(NO_EXPLANATION).to_string();

    rsx! {
        div {
            class: "explanation-tab",
            h2 { "Explanation" }
            p { "{explanation}" }

            h2 { "Void if" }
            p { "{void_if}" }

            match issue.sample() {
                Some(Sample::Link(url)) => rsx! {
                    div {
                        class: "sample-link",
                        h3 { "Learn More" }
                        a { href: "{url}", target: "_blank", rel: "noopener noreferrer", "{url}" }
                    }
                },
                Some(Sample::Text(text)) => rsx! {
                    div {
                        class: "sample-text",
                        h3 { "Additional Information" }
                        p { "{text}" }
                    }
                },
                None => rsx! {},
            }
        }
    }
}

#[component]
fn FixTab(issue: Issue) -> Element {
    let fix = issue
        .field(FIELD_EXPECTED_FIX)
        .unwrap_or("No fix recommendation available for this issue.")
        .to_string();
    let extensions = issue.field(FIELD_FILE_EXTENSIONS).unwrap_or("Not specified").to_string();

    rsx! {
        div {
            class: "fix-tab",
            h2 { "How to Fix" }
            p { "{fix}" }

            div {
                class: "supported-files",
                h3 { "Affected File Types" }
                p { "{extensions}" }
            }
        }
    }
}

#[component]
fn DetectionTab(issue: Issue) -> Element {
    let tools = issue.detection_tools();
    let kotlin = if issue.is_kotlin_detectable() {
        "This issue can be detected in Kotlin code."
    } else {
        "This issue may not be detectable in Kotlin code."
    };

    rsx! {
        div {
            class: "detection-tab",
            h2 { "Detection Tools" }

            if tools.is_empty() {
                p { class: "no-content", "No detection tools specified for this issue." }
            } else {
                div {
                    class: "detection-tools-list",
                    p { "This performance issue can be detected by the following tools:" }
                    ul {
                        for tool in tools {
                            li { key: "{tool}", "{tool}" }
                        }
                    }
                }
            }

            div {
                class: "kotlin-support",
                h3 { "Kotlin Support" }
                p { "{kotlin}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::constants::FIELD_KOTLIN;

    #[test]
    fn test_detection_tab_renders() {
        let issue = Issue::new("Wakelock Leak")
            .with("Lint", "✅")
            .with(FIELD_KOTLIN, "✅");
        let mut dom = VirtualDom::new_with_props(DetectionTab, DetectionTabProps { issue });
        dom.rebuild_in_place();

        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("<li>Lint</li>"));
        assert!(!html.contains("<li>PMD</li>"));
        assert!(html.contains("This issue can be detected in Kotlin code."));
    }

    #[test]
    fn test_detection_tab_without_tools() {
        let issue = Issue::new("Static Context");
        let mut dom = VirtualDom::new_with_props(DetectionTab, DetectionTabProps { issue });
        dom.rebuild_in_place();

        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("No detection tools specified for this issue."));
        assert!(html.contains("This issue may not be detectable in Kotlin code."));
    }

    #[test]
    fn test_explanation_tab_renders_sample_link() {
        let issue = Issue::new("Wakelock Leak").with("Sample", "https://developer.android.com");
        let mut dom = VirtualDom::new_with_props(ExplanationTab, ExplanationTabProps { issue });
        dom.rebuild_in_place();

        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("href=\"https://developer.android.com\""));
        assert!(html.contains("Learn More"));
    }

    #[test]
    fn test_fix_tab_falls_back_when_blank() {
        let issue = Issue::new("Wakelock Leak").with(FIELD_EXPECTED_FIX, "  ");
        let mut dom = VirtualDom::new_with_props(FixTab, FixTabProps { issue });
        dom.rebuild_in_place();

        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("No fix recommendation available for this issue."));
        assert!(html.contains("Not specified"));
    }
}
