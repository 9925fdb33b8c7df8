use crate::Route;
use dioxus::prelude::*;

/// Fallback for any path the router does not know about.
#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div { class: "not-found",
            h1 { "Page not found" }
            p { "Nothing lives at /{path}." }
            Link { to: Route::Home {}, class: "learn-more", "Back to the start →" }
        }
    }
}
