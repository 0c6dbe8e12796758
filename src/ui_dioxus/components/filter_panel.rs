use dioxus::prelude::*;

use crate::domain::constants::{DETECTION_TOOLS, SIDE_EFFECTS};
use crate::domain::filters::selection;
use crate::domain::{IssueFilters, Platform};

/// Search box, selects and tool checkboxes bound to the filter signal.
#[component]
pub fn FilterPanel(filters: Signal<IssueFilters>, categories: Vec<String>) -> Element {
    let mut filters = filters;
    let current = filters.read().clone();
    let category = current.category.clone().unwrap_or_default();
    let side_effect = current.side_effect.clone().unwrap_or_default();
    let platform = current
        .platform
        .map(|p| p.as_field_value())
        .unwrap_or_default();

    rsx! {
        div {
            class: "filters-container",
            style: "padding: 15px; background: white; border-radius: 8px; margin-bottom: 20px;",

            div {
                class: "search-bar",
                input {
                    r#type: "text",
                    placeholder: "Search by name or description...",
                    value: "{current.search}",
                    oninput: move |evt| filters.write().search = evt.value(),
                }
            }

            div {
                class: "filter-options",
                style: "display: flex; flex-wrap: wrap; gap: 15px; margin-top: 12px;",

                div {
                    class: "filter-group",
                    label { "Category:" }
                    select {
                        value: "{category}",
                        onchange: move |evt| filters.write().category = selection(&evt.value()),
                        option { value: "", "All Categories" }
                        for name in categories {
                            option { key: "{name}", value: "{name}", "{name}" }
                        }
                    }
                }

                div {
                    class: "filter-group",
                    label { "Side Effect:" }
                    select {
                        value: "{side_effect}",
                        onchange: move |evt| filters.write().side_effect = selection(&evt.value()),
                        option { value: "", "All" }
                        for effect in SIDE_EFFECTS.iter().copied() {
                            option { key: "{effect}", value: "{effect}", "{effect}" }
                        }
                    }
                }

                div {
                    class: "filter-group",
                    label { "Platform:" }
                    select {
                        value: "{platform}",
                        onchange: move |evt| {
                            filters.write().platform = Platform::from_field_value(&evt.value());
                        },
                        option { value: "", "All" }
                        option { value: "Yes", "Android-Specific" }
                        option { value: "No", "Generic" }
                    }
                }

                div {
                    class: "filter-group tools-filter",
                    label { "Detection Tools:" }
                    div {
                        class: "tool-checkboxes",
                        for tool in DETECTION_TOOLS.iter().copied() {
                            label {
                                key: "{tool}",
                                class: "tool-checkbox",
                                input {
                                    r#type: "checkbox",
                                    checked: current.has_tool(tool),
                                    onchange: move |_| filters.write().toggle_tool(tool),
                                }
                                "{tool}"
                            }
                        }
                    }
                }

                button {
                    class: "reset-filters",
                    onclick: move |_| filters.write().reset(),
                    "Reset Filters"
                }
            }
        }
    }
}
