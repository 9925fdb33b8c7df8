//! The views module contains the components for all Layouts and Routes for our app. Each layout and route in our
//! [`Route`](crate::Route) enum will render one of these components.

mod home;
pub use home::Home;

mod layout;
pub use layout::Layout;

mod not_found;
pub use not_found::PageNotFound;
