use crate::Route;
use crate::nav::NAV_ENTRIES;
use dioxus::prelude::*;

#[component]
pub fn Navbar() -> Element {
    // recomputed on every navigation
    let current = use_route::<Route>().to_string();

    rsx! {
        nav { id: "navbar",
            div { class: "navbar-inner",
                Link { to: Route::Home {}, class: "brand", "《重启人生》" }
                div { class: "nav-links",
                    for entry in NAV_ENTRIES.iter() {
                        Link {
                            key: "{entry.path}",
                            to: entry.path,
                            class: entry.class(&current),
                            span { class: "nav-icon", "{entry.icon.glyph()}" }
                            span { "{entry.label}" }
                        }
                    }
                }
            }
        }
    }
}
