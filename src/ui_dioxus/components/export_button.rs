use dioxus::prelude::*;
use std::path::PathBuf;

use crate::domain::Issue;
use crate::services::{ExportFormat, ExportService};

/// Writes the issues currently on screen to a file in the working directory.
#[component]
pub fn ExportButton(issues: Vec<Issue>) -> Element {
    let mut show_menu = use_signal(|| false);
    let mut exporting = use_signal(|| false);
    let mut export_message = use_signal(|| None::<String>);

    let do_export = move |format: ExportFormat| {
        let issues = issues.clone();
        spawn(async move {
            exporting.set(true);
            show_menu.set(false);

            let path = PathBuf::from(ExportService::default_file_name(format));
            match ExportService::export_to_file(&issues, format, &path).await {
                Ok(()) => {
                    export_message.set(Some(format!("✅ Exported to {}", path.display())));
                    tokio::time::sleep(tokio::time::Duration::from_secs(3)).await;
                    export_message.set(None);
                }
                Err(e) => {
                    tracing::error!(error = %e, "Export failed");
                    export_message.set(Some(e.to_string()));
                }
            }

            exporting.set(false);
        });
    };

    rsx! {
        div {
            style: "position: relative; display: inline-block;",

            button {
                style: "padding: 8px 16px; background: #6366f1; color: white; border: none; border-radius: 6px; cursor: pointer;",
                disabled: exporting(),
                onclick: move |_| {
                    let current = show_menu();
                    show_menu.set(!current);
                },
                if exporting() { "⏳ Exporting..." } else { "📥 Export" }
            }

            if show_menu() && !exporting() {
                div {
                    style: "position: absolute; top: 100%; right: 0; margin-top: 4px; background: white; border: 1px solid #e5e7eb; border-radius: 6px; z-index: 10; min-width: 150px;",

                    for (format, label) in [
                        (ExportFormat::Json, "📄 Export as JSON"),
                        (ExportFormat::Csv, "📊 Export as CSV"),
                        (ExportFormat::Markdown, "📝 Export as Markdown"),
                    ] {
                        button {
                            key: "{label}",
                            style: "display: block; width: 100%; padding: 8px 12px; text-align: left; background: none; border: none; cursor: pointer;",
                            onclick: {
                                let export = do_export.clone();
                                move |_| export(format)
                            },
                            "{label}"
                        }
                    }
                }
            }

            if let Some(message) = export_message() {
                div {
                    style: "position: absolute; top: 100%; right: 0; margin-top: 4px; padding: 6px 10px; background: #f3f4f6; border-radius: 6px; white-space: nowrap;",
                    "{message}"
                }
            }
        }
    }
}
