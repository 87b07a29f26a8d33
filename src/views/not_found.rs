use crate::Route;
use dioxus::prelude::*;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    use_hook({
        let path = path.clone();
        move || log::warn!("No page for {}", path)
    });

    rsx! {
        div { id: "not-found-page",
            h1 { class: "page-title", "404" }
            p { "页面不存在" }
            p { class: "requested-path", code { "{path}" } }
            Link { to: Route::Home {}, class: "cta-button", "返回首页" }
        }
    }
}
