use chrono::Utc;
use dioxus::prelude::*;

use crate::api;
use crate::format;
use crate::ledger::CashLedger;
use crate::models::{DenominationKind, DENOMINATIONS};
use crate::theme::{spacing, AppColors};
use crate::widgets::Modal;

/// Modal over the cash denomination ledger. The count is submitted once and
/// then discarded locally; the dashboard re-fetches the summary. A failed
/// submit leaves the ledger untouched so the counted quantities are not lost.
#[component]
pub fn CashCountModal(is_dark: bool, on_close: EventHandler<()>, on_saved: EventHandler<()>) -> Element {
    let mut ledger = use_signal(CashLedger::new);
    let mut description = use_signal(String::new);
    let mut date = use_signal(|| format::datetime_local_value(&Utc::now()));
    let mut submitting = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let totals = ledger().totals();

    let on_surface = AppColors::on_surface(is_dark);
    let primary = AppColors::primary(is_dark);
    let expense_color = AppColors::expense(is_dark);
    let active_fg = if is_dark { "#06130E" } else { "#FFFFFF" };
    let input_style = format!(
        "width: 100%; padding: 10px; border-radius: 8px; border: 1px solid #8A938E; background: transparent; color: {on_surface}; box-sizing: border-box;"
    );
    let section_style = format!(
        "color: {on_surface}; font-size: 0.9rem; font-weight: 600; margin: 12px 0 4px; opacity: 0.8;"
    );

    rsx! {
        Modal { is_dark, title: "Cash count", on_close: move |_| on_close.call(()),
            p { style: "{section_style}", "Bills" }
            for d in DENOMINATIONS.iter().filter(|d| d.kind == DenominationKind::Bill) {
                DenominationRow { is_dark, value: d.value, ledger }
            }
            p { style: "{section_style}", "Coins" }
            for d in DENOMINATIONS.iter().filter(|d| d.kind == DenominationKind::Coin) {
                DenominationRow { is_dark, value: d.value, ledger }
            }
            div { style: "border-top: 1px solid rgba(138,147,142,0.4); margin-top: 12px; padding-top: 12px;",
                div { style: "display: flex; justify-content: space-between;",
                    span { style: "color: {on_surface}; opacity: 0.8;", "Bills subtotal" }
                    span { style: "color: {on_surface};", "{format::format_cop_i64(totals.bills_subtotal)}" }
                }
                div { style: "display: flex; justify-content: space-between;",
                    span { style: "color: {on_surface}; opacity: 0.8;", "Coins subtotal" }
                    span { style: "color: {on_surface};", "{format::format_cop_i64(totals.coins_subtotal)}" }
                }
                div { style: "display: flex; justify-content: space-between; font-weight: bold;",
                    span { style: "color: {on_surface};", "Total cash" }
                    span { style: "color: {primary};", "{format::format_cop_i64(totals.grand_total)}" }
                }
            }
            div { style: "margin: 16px 0;",
                label { style: "display: block; margin-bottom: {spacing::XS}; color: {on_surface}; font-size: 0.875rem;", "Description (optional)" }
                input {
                    r#type: "text",
                    value: "{description()}",
                    oninput: move |ev| description.set(ev.value()),
                    style: "{input_style}",
                }
            }
            div { style: "margin-bottom: 16px;",
                label { style: "display: block; margin-bottom: {spacing::XS}; color: {on_surface}; font-size: 0.875rem;", "Date" }
                input {
                    r#type: "datetime-local",
                    value: "{date()}",
                    oninput: move |ev| date.set(ev.value()),
                    style: "{input_style}",
                }
            }
            if let Some(ref e) = error() {
                p { style: "color: {expense_color}; font-size: 0.875rem; margin-bottom: 12px;", "{e}" }
            }
            div { style: "display: flex; gap: 12px; justify-content: flex-end;",
                button {
                    disabled: submitting(),
                    onclick: move |_| on_close.call(()),
                    style: "padding: 10px 20px; border-radius: 8px; border: 1px solid #8A938E; background: transparent; color: {on_surface}; cursor: pointer;",
                    "Cancel"
                }
                button {
                    disabled: submitting(),
                    onclick: move |_| {
                        submitting.set(true);
                        error.set(None);
                        let desc = description.peek().trim().to_string();
                        let when = format::parse_datetime_local(&date.peek()).unwrap_or_else(Utc::now);
                        let payload = ledger
                            .peek()
                            .to_payload(if desc.is_empty() { None } else { Some(desc) }, when);
                        spawn(async move {
                            match api::create_cash_count(&payload).await {
                                Ok(()) => {
                                    submitting.set(false);
                                    on_saved.call(());
                                }
                                Err(e) => {
                                    log::warn!("cash count submit failed: {e}");
                                    error.set(Some("Could not save the cash count. Try again.".to_string()));
                                    submitting.set(false);
                                }
                            }
                        });
                    },
                    style: "padding: 10px 20px; border-radius: 8px; border: none; background: {primary}; color: {active_fg}; font-weight: 600; cursor: pointer;",
                    if submitting() { "Saving…" } else { "Save count" }
                }
            }
        }
    }
}

#[component]
fn DenominationRow(is_dark: bool, value: i64, ledger: Signal<CashLedger>) -> Element {
    let on_surface = AppColors::on_surface(is_dark);
    let quantity = ledger().quantity(value);
    let line_total = value * quantity as i64;
    let mut ledger = ledger;

    let button_style = format!(
        "width: 28px; height: 28px; border-radius: 8px; border: 1px solid #8A938E; background: transparent; color: {on_surface}; cursor: pointer;"
    );

    rsx! {
        div { style: "display: flex; align-items: center; gap: {spacing::SM}; padding: 2px 0;",
            span { style: "color: {on_surface}; width: 90px;", "{format::format_cop_i64(value)}" }
            button {
                onclick: move |_| ledger.write().decrement(value),
                style: "{button_style}",
                "−"
            }
            input {
                r#type: "number",
                min: "0",
                value: "{quantity}",
                oninput: move |ev| ledger.write().set_quantity(value, &ev.value()),
                style: "width: 70px; padding: 6px; border-radius: 8px; border: 1px solid #8A938E; background: transparent; color: {on_surface}; text-align: center;",
            }
            button {
                onclick: move |_| ledger.write().increment(value),
                style: "{button_style}",
                "+"
            }
            span { style: "color: {on_surface}; opacity: 0.8; margin-left: auto;",
                "{format::format_cop_i64(line_total)}"
            }
        }
    }
}
