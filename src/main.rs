//! Finanzas frontend - Dioxus app.
//! Default: web (dx serve). Desktop: cargo run --features desktop.

use finanzas_frontend::app::App;

fn main() {
    dioxus::launch(App);
}
