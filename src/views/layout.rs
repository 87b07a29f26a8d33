use crate::Route;
use crate::views::Navbar;
use dioxus::prelude::*;

/// Shell shared by every route: background, navigation bar, then the page
#[component]
pub fn Layout() -> Element {
    rsx! {
        div { class: "app-shell",
            Navbar {}
            main { class: "content", Outlet::<Route> {} }
        }
    }
}
