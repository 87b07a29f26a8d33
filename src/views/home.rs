use crate::Route;
use crate::nav::Icon;
use dioxus::prelude::*;

const REPOSITORY_URL: &str = "https://github.com/your-org/restart-life-web";

const FEATURES: &[(Icon, &str, &str)] = &[
    (
        Icon::Star,
        "随机人生",
        "每次游戏都有独特的人生体验，随机生成的属性和背景",
    ),
    (Icon::Github, "历史穿越", "体验从1800年到2050年的不同历史时期"),
    (
        Icon::Play,
        "选择决定命运",
        "在关键时刻做出选择，影响你的人生轨迹",
    ),
];

#[component]
pub fn Home() -> Element {
    rsx! {
        div { id: "home-page",
            h1 { class: "hero-title", "《重启人生》" }
            p { class: "hero-text",
                "一款人生模拟游戏，让你体验不同时代、不同国家、不同背景下的完整人生历程。"
                "从1800年到2050年，随机生成独特的人生轨迹，做出关键选择，塑造你的命运。"
            }
            div { class: "feature-grid",
                for (icon, title, text) in FEATURES.iter() {
                    div { key: "{title}", class: "card feature-card",
                        div { class: "feature-icon", "{icon.glyph()}" }
                        h3 { "{title}" }
                        p { "{text}" }
                    }
                }
            }
            div { class: "home-actions",
                Link { to: Route::Game {}, class: "cta-button",
                    span { "{Icon::Play.glyph()}" }
                    span { "开始新人生" }
                }
                div { class: "secondary-links",
                    Link { to: Route::About {}, "了解更多" }
                    span { "•" }
                    a { href: REPOSITORY_URL, "GitHub" }
                }
            }
        }
    }
}
