use crate::content::{anchors, Project, PROJECTS};
use dioxus::prelude::*;

#[component]
pub fn Projects() -> Element {
    rsx! {
        section { id: anchors::PROJECTS, class: "page-section projects",
            h2 { class: "section-title", "Portfolio" }
            p { class: "section-subtitle", "Showcasing my best work in AI, Data Engineering, and ML" }
            div { class: "project-grid",
                for project in PROJECTS {
                    ProjectCard { key: "{project.title}", project }
                }
            }
        }
    }
}

/// One card per project. Long descriptions are cut and only the first few tags are shown.
#[component]
fn ProjectCard(project: Project) -> Element {
    let excerpt = project.excerpt();

    rsx! {
        article { class: "project-card",
            span { class: "project-category", "{project.category}" }
            h3 { "{project.title}" }
            p { class: "project-excerpt", title: project.description, "{excerpt}" }
            ul { class: "tech-tags",
                for tech in project.card_tech() {
                    li { class: "tech-tag", "{tech}" }
                }
            }
        }
    }
}
