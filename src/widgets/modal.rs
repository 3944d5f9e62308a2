use dioxus::prelude::*;

use crate::theme::{spacing, AppColors};

/// Centered dialog over a dimmed backdrop. Clicking the backdrop does not
/// close it; dismissal goes through the explicit close control so in-progress
/// form state is not lost by accident.
#[component]
pub fn Modal(is_dark: bool, title: String, on_close: EventHandler<()>, children: Element) -> Element {
    let surface = if is_dark { "#1E2220" } else { "#FFFFFF" };
    let on_surface = AppColors::on_surface(is_dark);
    rsx! {
        div {
            style: "position: fixed; inset: 0; background: rgba(0,0,0,0.5); display: flex; align-items: center; justify-content: center; z-index: 100;",
            div {
                style: "background: {surface}; border-radius: 12px; padding: {spacing::LG}; width: 100%; max-width: 480px; max-height: 90vh; overflow-y: auto;",
                div { style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: {spacing::MD};",
                    h2 { style: "color: {on_surface}; font-size: 1.2rem; margin: 0;", "{title}" }
                    button {
                        onclick: move |_| on_close.call(()),
                        style: "background: none; border: none; color: {on_surface}; font-size: 1.2rem; cursor: pointer;",
                        "✕"
                    }
                }
                {children}
            }
        }
    }
}
