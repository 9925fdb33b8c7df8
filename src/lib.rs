use dioxus::prelude::*;
use views::{Home, Layout, PageNotFound};

/// Define a components module that contains all shared components for our app.
pub mod components;
/// Static copy, link tables and logo data shared by the components.
pub mod content;
/// Pre-rendering of the landing page into a standalone HTML document.
#[cfg(feature = "export")]
pub mod export;
/// Define a views module that contains the UI for all Layouts and Routes for our app.
pub mod views;

/// The Route enum is used to define the structure of internal routes in our app. All route enums need to derive
/// the [`Routable`] trait, which provides the necessary methods for the router to work.
///
/// In-page navigation (`#about`, `#projects`, ...) is plain anchor navigation and never reaches the router.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    // Every route is wrapped by the layout, which carries the navbar.
    #[layout(Layout)]
        #[route("/")]
        Home {},
    #[end_layout]
    // Catch-all so unknown paths render a page instead of a router error.
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

// We can import assets in dioxus with the `asset!` macro. This macro takes a path to an asset relative to the crate root.
const FAVICON: Asset = asset!("/assets/favicon.svg");
// The asset macro also minifies some assets like CSS and JS to make bundled smaller
const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

/// App is the main component of our app. It takes no props because it is the root of our app.
#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        // The router component renders the route enum we defined above. It will handle synchronization of the URL and render
        // the layouts and components for the active route.
        Router::<Route> {}
    }
}
