use dioxus::prelude::*;

use crate::domain::IssueSlug;
use crate::ui_dioxus::views::{IssueDetail, IssueList};

#[derive(Clone, Routable, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        IssueList {},

        #[route("/issue/:issue_id")]
        IssueDetail { issue_id: IssueSlug },
    #[end_layout]

    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

#[component]
fn Shell() -> Element {
    rsx! {
        div {
            class: "app-container",

            nav {
                class: "navbar",
                div {
                    class: "nav-brand",
                    Link { to: Route::IssueList {}, "📱 Android Performance Issues" }
                }
            }

            div {
                class: "content-container",
                Outlet::<Route> {}
            }
        }
    }
}

/// Unknown paths go back to the list.
#[component]
fn PageNotFound(segments: Vec<String>) -> Element {
    let navigator = use_navigator();

    use_effect(move || {
        tracing::debug!(path = %segments.join("/"), "Unknown route, redirecting to the issue list");
        navigator.replace(Route::IssueList {});
    });

    rsx! {}
}
