use crate::components::Navbar;
use crate::content::anchors;
use crate::Route;
use dioxus::prelude::*;

/// Shared shell for every route: the navigation bar on top and the active route below it.
///
/// The [`Outlet`] component renders whatever route is nested under the `#[layout(Layout)]` attribute.
#[component]
pub fn Layout() -> Element {
    rsx! {
        Navbar {}
        main { id: anchors::HOME, Outlet::<Route> {} }
    }
}
