use crate::setup::{BIRTH_YEAR_DEFAULT, BIRTH_YEAR_MAX, BIRTH_YEAR_MIN, Country, LifeSetup};
use dioxus::prelude::*;

// birth settings form; submitting asks the server to start a life
#[component]
pub fn Game() -> Element {
    let mut setup = use_signal(LifeSetup::default);
    let mut status = use_signal(|| None::<String>);

    let handle_start = move |_| async move {
        let current = *setup.read();
        match start_life_server(current).await {
            Ok(()) => status.set(None),
            Err(e) => {
                log::warn!("Could not start life: {}", e);
                status.set(Some(status_message(&e)));
            }
        }
    };

    rsx! {
        div { id: "game-page",
            h1 { class: "page-title", "开始你的人生" }
            div { class: "card setup-card",
                h2 { "选择你的出生设定" }
                div { class: "form-field",
                    label { r#for: "birth-country", "出生国家" }
                    select {
                        id: "birth-country",
                        name: "country",
                        onchange: move |event| {
                            let birth_year = setup.read().birth_year;
                            match LifeSetup::parse(&event.value(), birth_year) {
                                Ok(next) => setup.set(next),
                                Err(e) => log::warn!("Ignoring country selection: {}", e),
                            }
                        },
                        for country in Country::ALL {
                            option {
                                key: "{country.value()}",
                                value: country.value(),
                                selected: setup.read().country == country,
                                "{country.label()}"
                            }
                        }
                    }
                }
                div { class: "form-field",
                    label { r#for: "birth-year", "出生年份" }
                    input {
                        r#type: "range",
                        id: "birth-year",
                        name: "birth_year",
                        min: "{BIRTH_YEAR_MIN}",
                        max: "{BIRTH_YEAR_MAX}",
                        value: "{setup.read().birth_year}",
                        oninput: move |event| {
                            let Ok(year) = event.value().parse::<i32>() else {
                                return;
                            };
                            let country = setup.read().country;
                            match LifeSetup::parse(country.value(), year) {
                                Ok(next) => setup.set(next),
                                Err(e) => log::warn!("Ignoring birth year: {}", e),
                            }
                        },
                    }
                    div { class: "year-ticks",
                        span { "{BIRTH_YEAR_MIN}" }
                        span { "{BIRTH_YEAR_DEFAULT}" }
                        span { "{BIRTH_YEAR_MAX}" }
                    }
                    p { class: "year-selected", "当前选择：{setup.read().birth_year}年" }
                }
                button { id: "start-life", class: "cta-button", onclick: handle_start, "开始人生" }
                if let Some(message) = status() {
                    p { class: "form-status", "{message}" }
                }
            }
        }
    }
}

/// Domain errors come back as `ServerError`; only transport failures keep the framework wording
fn status_message(err: &ServerFnError) -> String {
    match err {
        ServerFnError::ServerError(msg) => msg.clone(),
        other => other.to_string(),
    }
}

#[server]
async fn start_life_server(setup: LifeSetup) -> Result<(), ServerFnError> {
    let setup = setup.validate()?;
    crate::setup::start_life(&setup)?;
    Ok(())
}
