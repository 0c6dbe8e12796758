use dioxus::prelude::*;

use crate::domain::Issue;
use crate::domain::constants::FIELD_CATEGORY;
use crate::ui_dioxus::router::Route;

/// Summary card linking to the issue's detail page.
#[component]
pub fn IssueCard(issue: Issue) -> Element {
    let category = issue.field(FIELD_CATEGORY).unwrap_or_default().to_string();
    let preview = issue.preview();
    let tools = issue.detection_tools();
    let name = issue.id().to_string();

    rsx! {
        Link {
            to: Route::IssueDetail { issue_id: issue.slug() },

            div {
                class: "issue-card",
                style: "padding: 16px; background: white; border: 1px solid #e5e7eb; border-radius: 8px; margin-bottom: 12px;",

                h3 { style: "font-size: 1.1rem; font-weight: 600;", "{name}" }

                div {
                    class: "issue-meta",
                    style: "display: flex; gap: 8px; margin: 6px 0;",
                    span { class: "category", "{category}" }
                    if issue.is_android_specific() {
                        span {
                            class: "android-specific",
                            style: "padding: 2px 8px; background: #d1fae5; color: #065f46; border-radius: 4px; font-size: 12px;",
                            "Android-Specific"
                        }
                    }
                }

                p { class: "issue-preview", style: "color: #6b7280;", "{preview}" }

                div {
                    class: "detection-tools",
                    span { class: "tool-label", "Detected by:" }
                    div {
                        class: "tools-list",
                        style: "display: inline-flex; gap: 4px; margin-left: 6px;",
                        for tool in tools {
                            span {
                                key: "{tool}",
                                class: "tool-tag",
                                style: "padding: 1px 6px; background: #f3f4f6; border-radius: 4px; font-size: 12px;",
                                "{tool}"
                            }
                        }
                    }
                }
            }
        }
    }
}
