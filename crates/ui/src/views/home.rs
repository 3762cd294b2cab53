use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::routes::Route;

#[component]
pub fn HomeView() -> Element {
    let navigator = use_navigator();

    rsx! {
        div { class: "page home-page",
            h2 { class: "home-title", "🌿 Welcome to the Energy4All Quiz!" }
            p { class: "home-subtitle", "Click below to start learning how to save energy." }
            button {
                class: "btn btn-primary",
                id: "home-start",
                r#type: "button",
                onclick: move |_| {
                    let _ = navigator.push(Route::Quiz {});
                },
                "Start Quiz ▶"
            }
        }
    }
}
