use crate::components::{About, Contact, Experience, Hero, Projects};
use dioxus::prelude::*;

/// The Home page component that will be rendered when the current route is `[Route::Home]`
///
/// Sections carry the fragment ids the navbar and hero link to.
#[component]
pub fn Home() -> Element {
    rsx! {
        Hero {}
        About {}
        Experience {}
        Projects {}
        Contact {}
    }
}
