//! Static copy and link tables for the landing page.
//!
//! Everything here is baked into the binary. Components read these tables
//! directly; nothing is loaded or mutated at runtime.

mod profile;
pub use profile::{
    ContactInfo, Education, Project, Role, ABOUT_HEADLINE, ABOUT_PARAGRAPHS, CONTACT, EDUCATION,
    EXPERIENCE, PASSIONS, PROJECTS,
};

/// An anchor rendered as a plain `<a href>`. Resolution is left to the browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

impl NavLink {
    const fn new(label: &'static str, href: &'static str) -> Self {
        Self { label, href }
    }
}

/// Links always visible in the navigation bar.
pub const PRIMARY_LINKS: [NavLink; 4] = [
    NavLink::new("Home", "#home"),
    NavLink::new("About", "#about"),
    NavLink::new("Archive", "#archive"),
    NavLink::new("Life", "#life"),
];

/// Links behind the "more" toggle, in display order.
pub const DROPDOWN_LINKS: [NavLink; 3] = [
    NavLink::new("Projects", "#projects"),
    NavLink::new("Blog", "#blog"),
    NavLink::new("Contact", "#contact"),
];

pub const BRAND_FIRST_NAME: &str = "avi";
pub const BRAND_LAST_NAME: &str = "Verma";

/// Size of the inlined logo mark, in CSS pixels.
pub const LOGO_SIZE: &str = "35";
pub const LOGO_VIEW_BOX: &str = "0 0 1280 1300";
pub const LOGO_TRANSFORM: &str = "translate(393,242)";
pub const LOGO_PATH: &str = "m0 0h181l387 1 4 2 3 6 1 18v96l-5 5-3 1h-59l-75-2 1 2 1 32v129l-1 50-2 33-4 27-6 22-8 19-13 22-9 11-17 17-16 11-25 13-19 7-16 4-32 4-18 1-7 1-1 3 2 5 1 3 4 2 11 11 8 7 12 13 12 14 9 10 9 11 13 16 9 11 12 14 11 13 9 11 11 13 9 11 13 15 9 11 11 14 13 16 11 14 8 10 11 14 10 13 4 7-2 5-6 7-15 10-17 11-16 10-43 29-17 10-6 1-7-4-12-14-10-13-11-14-14-17-13-17-12-15-11-14-14-17-12-15-13-17-14-18-12-16-14-17-10-13-11-14-10-13-13-16-8-10-11-13-8-10-14-17-13-17-11-14-14-17-10-13-12-15-13-17-12-15-12-16-10-13-8-14 4-7 8-7 19-13 12-10 11-9 14-12 10-8 16-13 13-11 5-3 5 1 5 5 8 9 10 13 9 10 7 7 15 11 14 8 21 7 10 2h20l16-3 16-6 9-7 7-8 6-12 4-15 1-10 1-222-134 1h-195l-13-2-6-4-2-2v-45l1-64 2-6 5-5 3-1z";

/// Relative to the page, so it resolves under a project sub-path on static
/// hosts too. A missing file falls back to the browser's broken-image rendering.
pub const PROFILE_IMAGE: &str = "assets/profile.svg";
pub const PROFILE_ALT: &str = "Profile";
pub const PHOTO_CREDIT: &str = "© Photo credit";

pub const GREETING: &str = "Hi, I’m Ravi";

pub const CURRENT_PROJECT: NavLink = NavLink::new("Your Project", "#project");
pub const OTHER_WORK: NavLink = NavLink::new("other projects", "#work");
pub const ACTIVITIES: NavLink = NavLink::new("interesting activities", "#activities");
pub const LEARN_MORE: NavLink = NavLink::new("Learn more about me →", "/about");

/// Fragment ids carried by page sections. Navbar and hero links point at these.
pub mod anchors {
    pub const HOME: &str = "home";
    pub const ABOUT: &str = "about";
    pub const ACTIVITIES: &str = "activities";
    pub const WORK: &str = "work";
    pub const PROJECTS: &str = "projects";
    pub const CONTACT: &str = "contact";
}
