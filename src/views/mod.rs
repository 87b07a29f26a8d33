//! Web interface components for Restart Life
//!
//! The shared layout with its navigation bar, and one component per route.

/// Navigation bar component
mod navbar;
pub use navbar::Navbar;

/// Page shell wrapping every route
mod layout;
pub use layout::Layout;

/// Landing page
mod home;
pub use home::Home;

/// Birth settings form
mod game;
pub use game::Game;

mod about;
pub use about::About;

/// Fallback for undeclared paths
mod not_found;
pub use not_found::NotFound;

/// Render a routerless page to HTML
#[cfg(test)]
pub(crate) fn render_page(page: fn() -> dioxus::prelude::Element) -> String {
    let mut dom = dioxus::prelude::VirtualDom::new(page);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}
