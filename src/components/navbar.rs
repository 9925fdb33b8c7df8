use crate::content::{
    NavLink, BRAND_FIRST_NAME, BRAND_LAST_NAME, DROPDOWN_LINKS, LOGO_PATH, LOGO_SIZE,
    LOGO_TRANSFORM, LOGO_VIEW_BOX, PRIMARY_LINKS,
};
use dioxus::logger::tracing;
use dioxus::prelude::*;

/// Visibility of the secondary dropdown menu.
///
/// Starts out [`MenuState::Closed`] and only changes when the toggle button is
/// activated. There is no outside-click or escape-key dismissal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    /// The state after one activation of the toggle control.
    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    /// Glyph shown inside the toggle button.
    pub fn glyph(self) -> &'static str {
        match self {
            MenuState::Closed => "•••",
            MenuState::Open => "×",
        }
    }

    fn button_class(self) -> &'static str {
        match self {
            MenuState::Closed => "more-menu-button",
            MenuState::Open => "more-menu-button menu-open",
        }
    }
}

/// The site navigation bar. Owns the menu state; each instance starts closed.
#[component]
pub fn Navbar() -> Element {
    let mut menu = use_signal(MenuState::default);

    rsx! {
        NavbarView {
            menu: menu(),
            on_toggle: move |_| {
                let next = menu().toggled();
                tracing::debug!(?next, "navbar menu toggled");
                menu.set(next);
            },
        }
    }
}

/// Stateless rendering of the navigation bar for a given [`MenuState`].
///
/// The dropdown is left out of the tree entirely while closed rather than
/// hidden with CSS.
#[component]
pub fn NavbarView(menu: MenuState, on_toggle: EventHandler<()>) -> Element {
    rsx! {
        nav { class: "navbar",
            div { class: "logo",
                span { class: "logo-symbol", LogoMark {} }
                span { class: "logo-text", "{BRAND_FIRST_NAME}" }
                span { class: "logo-last-name-text", "{BRAND_LAST_NAME}" }
            }

            div { class: "nav-links",
                for link in PRIMARY_LINKS {
                    NavItem { key: "{link.href}", link }
                }

                button {
                    class: menu.button_class(),
                    onclick: move |_| on_toggle.call(()),
                    span { class: "button-text", "{menu.glyph()}" }
                }

                if menu.is_open() {
                    DropdownMenu {}
                }
            }
        }
    }
}

/// The secondary links revealed by the toggle.
#[component]
pub fn DropdownMenu() -> Element {
    rsx! {
        div { class: "dropdown-menu",
            for link in DROPDOWN_LINKS {
                a { key: "{link.href}", href: link.href, "{link.label}" }
            }
        }
    }
}

#[component]
fn NavItem(link: NavLink) -> Element {
    rsx! {
        a { href: link.href, class: "nav-item", "{link.label}" }
    }
}

#[component]
fn LogoMark() -> Element {
    rsx! {
        svg {
            "version": "1.1",
            view_box: LOGO_VIEW_BOX,
            width: LOGO_SIZE,
            height: LOGO_SIZE,
            "xmlns": "http://www.w3.org/2000/svg",
            path { transform: LOGO_TRANSFORM, d: LOGO_PATH }
        }
    }
}
