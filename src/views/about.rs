use dioxus::prelude::*;

const HIGHLIGHTS: &[&str] = &[
    "支持全球任意国家，包括南极、北极等特殊地区",
    "时间跨度从1800年到2050年，体验不同时代",
    "随机生成角色属性：性别、人种、家庭背景、健康状况等",
    "丰富的人生阶段系统和属性成长机制",
    "复杂的关系网络和成就系统",
    "多种推进模式：激进、稳定、保守",
];

const FRONTEND_STACK: &[&str] = &[
    "Rust + Dioxus 0.6",
    "Dioxus Router 路由",
    "WebAssembly 客户端",
    "Signal 状态管理",
];

const BACKEND_STACK: &[&str] = &[
    "Axum + Tokio 服务端",
    "Dioxus 服务端函数",
    "PostgreSQL 数据库（规划中）",
    "Redis 缓存（规划中）",
];

#[component]
pub fn About() -> Element {
    rsx! {
        div { id: "about-page",
            h1 { class: "page-title", "关于《重启人生》" }
            section { class: "card",
                h2 { "游戏简介" }
                p {
                    "《重启人生》是一款文字模拟人生游戏，玩家可以随机重新开启自己的人生。"
                    "你可以选择出生国家、年代，体验从1800年到2050年不同历史时期的人生历程。"
                    "游戏结合历史事件来影响玩家的人生走向，让每次游戏都有独特的体验。"
                }
            }
            section { class: "card",
                h2 { "核心特色" }
                ul { class: "bullet-list",
                    for item in HIGHLIGHTS.iter() {
                        li { "• {item}" }
                    }
                }
            }
            section { class: "card",
                h2 { "技术栈" }
                div { class: "stack-grid",
                    StackColumn { title: "前端技术", items: FRONTEND_STACK }
                    StackColumn { title: "后端技术", items: BACKEND_STACK }
                }
            }
        }
    }
}

#[component]
fn StackColumn(title: &'static str, items: &'static [&'static str]) -> Element {
    rsx! {
        div {
            h3 { "{title}" }
            ul {
                for item in items.iter() {
                    li { "• {item}" }
                }
            }
        }
    }
}
