use chrono::Utc;
use dioxus::prelude::*;

use crate::api;
use crate::form::{FormStatus, TransactionForm};
use crate::models::{Category, Transaction, TransactionKind};
use crate::theme::{spacing, AppColors};
use crate::widgets::Modal;

/// Modal over the transaction form state machine. A create has no identity;
/// an edit carries the transaction's identity and submits an update instead.
/// Failed submits keep every field so the user can retry without re-entering.
#[component]
pub fn TransactionFormModal(
    is_dark: bool,
    transaction: Option<Transaction>,
    on_close: EventHandler<()>,
    on_saved: EventHandler<()>,
) -> Element {
    let mut form = use_signal(|| match &transaction {
        Some(t) => TransactionForm::open_edit(t),
        None => TransactionForm::open_blank(Utc::now()),
    });
    let mut error = use_signal(|| Option::<String>::None);

    let f = form();
    let submitting = f.status == FormStatus::Submitting;
    let title = if f.is_edit() { "Edit transaction" } else { "New transaction" };

    let on_surface = AppColors::on_surface(is_dark);
    let primary = AppColors::primary(is_dark);
    let income_color = AppColors::income(is_dark);
    let expense_color = AppColors::expense(is_dark);
    let active_fg = if is_dark { "#06130E" } else { "#FFFFFF" };
    let expense_fg = "#FFFFFF";
    let input_style = format!(
        "width: 100%; padding: 10px; border-radius: 8px; border: 1px solid #8A938E; background: transparent; color: {on_surface}; box-sizing: border-box;"
    );
    let xs = spacing::XS;
    let label_style = format!(
        "display: block; margin-bottom: {xs}; color: {on_surface}; font-size: 0.875rem;"
    );

    rsx! {
        Modal { is_dark, title: "{title}", on_close: move |_| on_close.call(()),
            div { style: "margin-bottom: {spacing::MD}; display: flex; gap: {spacing::SM};",
                button {
                    onclick: move |_| form.write().set_kind(TransactionKind::Income),
                    style: if f.kind == TransactionKind::Income {
                        format!("flex: 1; padding: 10px; border-radius: 8px; border: none; cursor: pointer; background: {income_color}; color: {active_fg}; font-weight: 600;")
                    } else {
                        format!("flex: 1; padding: 10px; border-radius: 8px; border: 1px solid #8A938E; cursor: pointer; background: transparent; color: {on_surface};")
                    },
                    "Income"
                }
                button {
                    onclick: move |_| form.write().set_kind(TransactionKind::Expense),
                    style: if f.kind == TransactionKind::Expense {
                        format!("flex: 1; padding: 10px; border-radius: 8px; border: none; cursor: pointer; background: {expense_color}; color: {expense_fg}; font-weight: 600;")
                    } else {
                        format!("flex: 1; padding: 10px; border-radius: 8px; border: 1px solid #8A938E; cursor: pointer; background: transparent; color: {on_surface};")
                    },
                    "Expense"
                }
            }
            div { style: "margin-bottom: 16px;",
                label { style: "{label_style}", "Category" }
                select {
                    onchange: move |ev| {
                        let value = ev.value();
                        let kind = form.peek().kind;
                        if let Some(c) = Category::all_for(kind).iter().find(|c| c.as_str() == value) {
                            form.write().set_category(*c);
                        }
                    },
                    style: "{input_style}",
                    for c in Category::all_for(f.kind).iter().copied() {
                        option { value: c.as_str(), selected: c == f.category, "{c.label()}" }
                    }
                }
            }
            div { style: "margin-bottom: 16px;",
                label { style: "{label_style}", "Amount" }
                input {
                    r#type: "number",
                    min: "0",
                    step: "any",
                    placeholder: "0",
                    value: "{f.amount}",
                    oninput: move |ev| form.write().amount = ev.value(),
                    style: "{input_style}",
                }
            }
            div { style: "margin-bottom: 16px;",
                label { style: "{label_style}", "Description (optional)" }
                input {
                    r#type: "text",
                    value: "{f.description}",
                    oninput: move |ev| form.write().description = ev.value(),
                    style: "{input_style}",
                }
            }
            div { style: "margin-bottom: 16px;",
                label { style: "{label_style}", "Date" }
                input {
                    r#type: "datetime-local",
                    value: "{f.date}",
                    oninput: move |ev| form.write().date = ev.value(),
                    style: "{input_style}",
                }
            }
            if let Some(ref e) = error() {
                p { style: "color: {expense_color}; font-size: 0.875rem; margin-bottom: 12px;", "{e}" }
            }
            div { style: "display: flex; gap: 12px; justify-content: flex-end;",
                button {
                    disabled: submitting,
                    onclick: move |_| on_close.call(()),
                    style: "padding: 10px 20px; border-radius: 8px; border: 1px solid #8A938E; background: transparent; color: {on_surface}; cursor: pointer;",
                    "Cancel"
                }
                button {
                    disabled: submitting,
                    onclick: move |_| {
                        error.set(None);
                        let payload = match form.peek().validate() {
                            Ok(p) => p,
                            Err(e) => {
                                error.set(Some(e.to_string()));
                                return;
                            }
                        };
                        let id = form.peek().id.clone();
                        form.write().begin_submit();
                        spawn(async move {
                            let result = match &id {
                                Some(id) => api::update_transaction(id, &payload).await.map(|_| ()),
                                None => api::create_transaction(&payload).await.map(|_| ()),
                            };
                            match result {
                                Ok(()) => {
                                    form.write().close();
                                    on_saved.call(());
                                }
                                Err(e) => {
                                    log::warn!("transaction submit failed: {e}");
                                    error.set(Some("Could not save the transaction. Try again.".to_string()));
                                    form.write().submit_failed();
                                }
                            }
                        });
                    },
                    style: "padding: 10px 20px; border-radius: 8px; border: none; background: {primary}; color: {active_fg}; font-weight: 600; cursor: pointer;",
                    if submitting { "Saving…" } else { "Save" }
                }
            }
        }
    }
}
