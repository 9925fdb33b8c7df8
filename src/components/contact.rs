use crate::content::{anchors, CONTACT};
use dioxus::prelude::*;

/// Contact details and social links.
///
/// There is no backend to receive a message, so reaching out goes through `mailto:`.
#[component]
pub fn Contact() -> Element {
    let mailto = CONTACT.mailto();
    let tel = CONTACT.tel();

    rsx! {
        section { id: anchors::CONTACT, class: "page-section contact",
            h2 { class: "section-title", "Get In Touch" }
            p { class: "section-subtitle", "Let's work together on your next project" }

            dl { class: "contact-details",
                dt { "Email" }
                dd { a { href: "{mailto}", "{CONTACT.email}" } }
                dt { "Phone" }
                dd { a { href: "{tel}", "{CONTACT.phone}" } }
                dt { "Location" }
                dd { "{CONTACT.location}" }
            }

            div { class: "social-links",
                a { href: CONTACT.linkedin, target: "_blank", rel: "noopener noreferrer", "LinkedIn" }
                a { href: CONTACT.github, target: "_blank", rel: "noopener noreferrer", "GitHub" }
            }

            a { class: "learn-more", href: "{mailto}", "Send me an email →" }
        }
    }
}
