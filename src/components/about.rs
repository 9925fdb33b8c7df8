use crate::content::{anchors, ABOUT_HEADLINE, ABOUT_PARAGRAPHS, EDUCATION, PASSIONS};
use dioxus::prelude::*;

/// Biography, education timeline and the "what I love doing" list.
#[component]
pub fn About() -> Element {
    rsx! {
        section { id: anchors::ABOUT, class: "page-section about",
            h2 { class: "section-title", "Who am I?" }
            h3 { class: "about-headline", "{ABOUT_HEADLINE}" }

            div { class: "about-columns",
                div { class: "about-story",
                    h3 { "About Me" }
                    for paragraph in ABOUT_PARAGRAPHS {
                        p { "{paragraph}" }
                    }
                }

                div { class: "about-education",
                    h3 { "Education" }
                    ol { class: "timeline",
                        for (index, entry) in EDUCATION.iter().enumerate() {
                            li { key: "{index}", class: education_class(index),
                                div { class: "timeline-years", "{entry.years}" }
                                h4 { "{entry.degree}" }
                                p { class: "timeline-field", "{entry.field}" }
                                p { class: "timeline-place", "{entry.institution}" }
                            }
                        }
                    }
                }
            }

            div { id: anchors::ACTIVITIES, class: "passions",
                h3 { "What I Love Doing" }
                ul { class: "passion-list",
                    for passion in PASSIONS {
                        li { class: "passion", "{passion}" }
                    }
                }
            }
        }
    }
}

/// The most recent entry is still in progress and gets highlighted.
fn education_class(index: usize) -> &'static str {
    if index == 0 {
        "timeline-entry current"
    } else {
        "timeline-entry"
    }
}
