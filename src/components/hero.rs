use crate::content::{
    ACTIVITIES, CURRENT_PROJECT, GREETING, LEARN_MORE, OTHER_WORK, PHOTO_CREDIT, PROFILE_ALT,
    PROFILE_IMAGE,
};
use dioxus::prelude::*;

/// Introduction block: profile photo on the left, greeting and short bio on the right.
#[component]
pub fn Hero() -> Element {
    rsx! {
        div { class: "hero-container",
            div { class: "hero-content",
                div { class: "hero-image-container",
                    img { src: PROFILE_IMAGE, alt: PROFILE_ALT, class: "hero-image" }
                    div { class: "image-credit", "{PHOTO_CREDIT}" }
                }

                div { class: "hero-text",
                    h1 { class: "greeting",
                        span { class: "wave", aria_hidden: "true", "👋 " }
                        span { "{GREETING}" }
                    }

                    p { class: "intro-text",
                        "I'm currently working on "
                        HighlightLink { link: CURRENT_PROJECT }
                        ", describe what you're building or working on."
                    }

                    p { class: "additional-info",
                        "I also work on "
                        HighlightLink { link: OTHER_WORK }
                        " and do "
                        HighlightLink { link: ACTIVITIES }
                        ". Add more details about your work and achievements here."
                    }

                    a { href: LEARN_MORE.href, class: "learn-more", "{LEARN_MORE.label}" }
                }
            }
        }
    }
}

#[component]
fn HighlightLink(link: crate::content::NavLink) -> Element {
    rsx! {
        a { href: link.href, class: "highlight-link", "{link.label}" }
    }
}
