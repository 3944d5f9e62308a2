use dioxus::prelude::*;

use crate::theme::AppColors;

#[component]
pub fn PageBackground(is_dark: bool, children: Element) -> Element {
    let surface = AppColors::surface(is_dark);
    rsx! {
        div {
            style: "min-height: 100vh; background: {surface};",
            {children}
        }
    }
}
