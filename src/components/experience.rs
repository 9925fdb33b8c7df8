use crate::content::{anchors, Role, EXPERIENCE};
use dioxus::prelude::*;

/// Work history, most recent role first.
#[component]
pub fn Experience() -> Element {
    rsx! {
        section { id: anchors::WORK, class: "page-section experience",
            h2 { class: "section-title", "Experience" }
            ol { class: "timeline",
                for role in EXPERIENCE {
                    RoleEntry { key: "{role.company}", role }
                }
            }
        }
    }
}

#[component]
fn RoleEntry(role: Role) -> Element {
    rsx! {
        li { class: "timeline-entry role",
            div { class: "role-heading",
                h3 { "{role.title}" }
                div { class: "timeline-years", "{role.dates}" }
            }
            div { class: "role-company", "{role.company} · {role.location}" }
            for paragraph in role.paragraphs() {
                p { "{paragraph}" }
            }
        }
    }
}
