use dioxus::prelude::*;

use crate::models::Period;
use crate::screens::{HomeScreen, ReportScreen};

#[derive(Clone, Copy, PartialEq)]
pub enum Route {
    Home,
    Report,
}

#[component]
pub fn App() -> Element {
    let mut route = use_signal(|| Route::Home);
    let mut is_dark = use_signal(|| false);
    let period = use_signal(|| Period::Monthly);
    let reload = use_signal(|| 0u32);

    let current_screen = match route() {
        Route::Home => rsx! {
            HomeScreen {
                is_dark: is_dark(),
                period,
                reload,
                on_toggle_theme: move |_| {
                    let v = is_dark();
                    is_dark.set(!v);
                },
                on_open_report: move |_| route.set(Route::Report),
            }
        },
        Route::Report => rsx! {
            ReportScreen {
                period,
                on_back: move |_| route.set(Route::Home),
            }
        },
    };

    rsx! {
        div { style: "font-family: system-ui, sans-serif;",
            {current_screen}
        }
    }
}
