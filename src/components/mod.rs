//! The components module contains all shared components for our app. Components are the building blocks of dioxus apps.
//! They can be used to define common UI elements like buttons, forms, and modals. Each one here is a leaf: it takes no
//! props from the page and never talks to the others.

mod about;
pub use about::About;

mod contact;
pub use contact::Contact;

mod experience;
pub use experience::Experience;

mod hero;
pub use hero::Hero;

mod navbar;
pub use navbar::{DropdownMenu, MenuState, Navbar, NavbarView};

mod projects;
pub use projects::Projects;
