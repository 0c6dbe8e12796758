use dioxus::prelude::*;

use crate::services::{ExamplePair, ExampleSnippet};

/// The two code-example slots of the detail page.
#[component]
pub fn ExamplesPanel(examples: ExamplePair) -> Element {
    rsx! {
        div {
            class: "examples-tab",
            h2 { "Code Examples" }

            div {
                class: "code-examples",
                for (index, snippet) in examples.slots().into_iter().enumerate() {
                    ExampleSlot { key: "{index}", title: format!("Example {}", index + 1), snippet: snippet.clone() }
                }
            }
        }
    }
}

#[component]
fn ExampleSlot(title: String, snippet: ExampleSnippet) -> Element {
    let text = snippet.text();
    let class = if snippet.is_loaded() { "code-example" } else { "code-example no-content" };

    rsx! {
        div {
            class: "{class}",
            h3 { "{title}" }
            pre {
                style: "padding: 12px; background: #1e1e1e; color: #d4d4d4; border-radius: 6px; overflow-x: auto;",
                code { "{text}" }
            }
        }
    }
}
