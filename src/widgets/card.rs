use dioxus::prelude::*;

use crate::theme::spacing;

#[component]
pub fn Card(is_dark: bool, children: Element) -> Element {
    let surface = if is_dark {
        "rgba(38,43,41,0.95)"
    } else {
        "#FFFFFF"
    };
    let border = if is_dark { "#343A37" } else { "#E1E7E3" };
    rsx! {
        div {
            style: "background: {surface}; border: 1px solid {border}; border-radius: 12px; padding: {spacing::CARD_PADDING}; margin-bottom: {spacing::MD};",
            {children}
        }
    }
}
