use dioxus::prelude::*;

use crate::theme::AppColors;
use crate::widgets::Card;

#[component]
pub fn StatCard(is_dark: bool, title: String, value: String, accent: String) -> Element {
    let on_surface = AppColors::on_surface(is_dark);
    rsx! {
        div { style: "flex: 1; min-width: 180px;",
            Card { is_dark,
                h2 { style: "color: {on_surface}; font-size: 0.9rem; font-weight: 500; margin: 0 0 8px; opacity: 0.8;",
                    "{title}"
                }
                p { style: "font-size: 1.4rem; font-weight: bold; color: {accent}; margin: 0;",
                    "{value}"
                }
            }
        }
    }
}
