use dioxus::prelude::*;

use crate::models::{Period, Transaction};
use crate::screens::{CashCountModal, DashboardScreen, TransactionFormModal, TransactionsScreen};
use crate::theme::AppColors;

#[derive(Clone, Copy, PartialEq)]
pub enum HomeTab {
    Dashboard,
    Transactions,
}

#[component]
pub fn HomeScreen(
    is_dark: bool,
    period: Signal<Period>,
    mut reload: Signal<u32>,
    on_toggle_theme: EventHandler<()>,
    on_open_report: EventHandler<()>,
) -> Element {
    let mut tab = use_signal(|| HomeTab::Dashboard);
    let mut show_transaction_form = use_signal(|| false);
    let mut editing = use_signal(|| Option::<Transaction>::None);
    let mut show_cash_form = use_signal(|| false);

    let text_color = AppColors::on_surface(is_dark);
    let primary = AppColors::primary(is_dark);
    let active_bg = primary;
    let active_fg = if is_dark { "#06130E" } else { "#FFFFFF" };
    let transparent = "transparent";
    let bg_dashboard = if tab() == HomeTab::Dashboard { active_bg } else { transparent };
    let fg_dashboard = if tab() == HomeTab::Dashboard { active_fg } else { text_color };
    let bg_transactions = if tab() == HomeTab::Transactions { active_bg } else { transparent };
    let fg_transactions = if tab() == HomeTab::Transactions { active_fg } else { text_color };

    rsx! {
        div { style: "display: flex; flex-direction: column; height: 100vh;",
            div { style: "display: flex; padding: 12px 24px; gap: 12px; align-items: center; border-bottom: 1px solid #49524D; flex-shrink: 0;",
                span { style: "color: {text_color}; font-weight: bold; font-size: 1.1rem;", "Finanzas" }
                button {
                    onclick: move |_| tab.set(HomeTab::Dashboard),
                    style: "padding: 8px 16px; border-radius: 8px; border: none; cursor: pointer; background: {bg_dashboard}; color: {fg_dashboard};",
                    "Dashboard"
                }
                button {
                    onclick: move |_| tab.set(HomeTab::Transactions),
                    style: "padding: 8px 16px; border-radius: 8px; border: none; cursor: pointer; background: {bg_transactions}; color: {fg_transactions};",
                    "Transactions"
                }
                div { style: "flex: 1;" }
                button {
                    onclick: move |_| {
                        editing.set(None);
                        show_transaction_form.set(true);
                    },
                    style: "padding: 8px 16px; border-radius: 8px; border: none; cursor: pointer; background: {primary}; color: {active_fg}; font-weight: 600;",
                    "New transaction"
                }
                button {
                    onclick: move |_| show_cash_form.set(true),
                    style: "padding: 8px 16px; border-radius: 8px; border: 1px solid {primary}; background: transparent; color: {primary}; cursor: pointer;",
                    "Count cash"
                }
                button {
                    onclick: move |_| on_open_report.call(()),
                    style: "padding: 8px 16px; border-radius: 8px; border: 1px solid #8A938E; background: transparent; color: {text_color}; cursor: pointer;",
                    "Report"
                }
                button {
                    onclick: move |_| on_toggle_theme.call(()),
                    style: "padding: 8px 12px; border-radius: 8px; border: 1px solid #8A938E; background: transparent; color: {text_color}; cursor: pointer;",
                    if is_dark { "Light" } else { "Dark" }
                }
            }
            div { style: "flex: 1; overflow: auto;",
                {match tab() {
                    HomeTab::Dashboard => rsx! {
                        DashboardScreen { is_dark, period, reload }
                    },
                    HomeTab::Transactions => rsx! {
                        TransactionsScreen {
                            is_dark,
                            reload,
                            on_edit: move |t: Transaction| {
                                editing.set(Some(t));
                                show_transaction_form.set(true);
                            },
                            on_changed: move |_| reload += 1,
                        }
                    },
                }}
            }
        }
        if show_transaction_form() {
            TransactionFormModal {
                is_dark,
                transaction: editing(),
                on_close: move |_| show_transaction_form.set(false),
                on_saved: move |_| {
                    show_transaction_form.set(false);
                    reload += 1;
                },
            }
        }
        if show_cash_form() {
            CashCountModal {
                is_dark,
                on_close: move |_| show_cash_form.set(false),
                on_saved: move |_| {
                    show_cash_form.set(false);
                    reload += 1;
                },
            }
        }
    }
}
