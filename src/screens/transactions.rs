use dioxus::prelude::*;

use crate::api;
use crate::format;
use crate::models::{Transaction, TransactionKind};
use crate::theme::AppColors;
use crate::widgets::{Card, PageBackground};

/// Transaction list with per-row edit and delete. Deletion asks for inline
/// confirmation first; a declined confirmation issues no network call, and a
/// failed delete leaves the list unchanged.
#[component]
pub fn TransactionsScreen(
    is_dark: bool,
    reload: Signal<u32>,
    on_edit: EventHandler<Transaction>,
    on_changed: EventHandler<()>,
) -> Element {
    let mut transactions = use_signal(Vec::<Transaction>::new);
    let mut loaded = use_signal(|| false);
    let mut notice = use_signal(|| Option::<String>::None);
    let mut pending_delete = use_signal(|| Option::<Transaction>::None);
    let mut deleting = use_signal(|| false);

    use_effect(move || {
        let _ = reload();
        spawn(async move {
            match api::transactions().await {
                Ok(list) => {
                    transactions.set(list);
                    notice.set(None);
                }
                Err(e) => {
                    log::warn!("transaction list fetch failed: {e}");
                    notice.set(Some("Could not load transactions.".to_string()));
                }
            }
            loaded.set(true);
        });
    });

    let on_surface = AppColors::on_surface(is_dark);
    let expense_color = AppColors::expense(is_dark);

    rsx! {
        PageBackground { is_dark,
            div { style: "padding: 24px; max-width: 960px; margin: 0 auto;",
                h1 { style: "color: {on_surface}; margin-bottom: 16px;", "Transactions" }
                if let Some(ref n) = notice() {
                    p { style: "color: {expense_color}; font-size: 0.875rem; margin-bottom: 12px;", "{n}" }
                }
                if transactions().is_empty() && loaded() {
                    Card { is_dark,
                        p { style: "color: {on_surface}; opacity: 0.8; margin: 0;", "No transactions yet." }
                    }
                } else {
                    for t in transactions() {
                        TransactionRow {
                            is_dark,
                            transaction: t,
                            on_edit: move |t| on_edit.call(t),
                            on_delete: move |t: Transaction| pending_delete.set(Some(t)),
                        }
                    }
                }
            }
        }
        if let Some(t) = pending_delete() {
            DeleteConfirm {
                is_dark,
                transaction: t,
                busy: deleting(),
                on_cancel: move |_| pending_delete.set(None),
                on_confirm: move |t: Transaction| {
                    deleting.set(true);
                    spawn(async move {
                        match api::delete_transaction(&t.id).await {
                            Ok(()) => {
                                deleting.set(false);
                                pending_delete.set(None);
                                on_changed.call(());
                            }
                            Err(e) => {
                                log::warn!("transaction delete failed: {e}");
                                deleting.set(false);
                                pending_delete.set(None);
                                notice.set(Some("Could not delete the transaction.".to_string()));
                            }
                        }
                    });
                },
            }
        }
    }
}

#[component]
fn TransactionRow(
    is_dark: bool,
    transaction: Transaction,
    on_edit: EventHandler<Transaction>,
    on_delete: EventHandler<Transaction>,
) -> Element {
    let on_surface = AppColors::on_surface(is_dark);
    let amount_color = match transaction.kind {
        TransactionKind::Income => AppColors::income(is_dark),
        TransactionKind::Expense => AppColors::expense(is_dark),
    };
    let for_edit = transaction.clone();
    let for_delete = transaction.clone();

    rsx! {
        Card { is_dark,
            div { style: "display: flex; align-items: center; gap: 12px; flex-wrap: wrap;",
                div { style: "flex: 2; min-width: 160px;",
                    p { style: "color: {on_surface}; margin: 0; font-weight: 500;",
                        "{transaction.category.label()}"
                    }
                    p { style: "color: {on_surface}; margin: 0; opacity: 0.7; font-size: 0.85rem;",
                        "{transaction.description.as_deref().unwrap_or(\"-\")}"
                    }
                }
                span { style: "color: {on_surface}; opacity: 0.8; font-size: 0.85rem; flex: 1;",
                    "{format::format_datetime(&transaction.date)}"
                }
                span { style: "color: {amount_color}; font-weight: 500;",
                    "{transaction.formatted_amount()}"
                }
                button {
                    onclick: move |_| on_edit.call(for_edit.clone()),
                    style: "padding: 6px 12px; border-radius: 8px; border: 1px solid #8A938E; background: transparent; color: {on_surface}; cursor: pointer;",
                    "Edit"
                }
                button {
                    onclick: move |_| on_delete.call(for_delete.clone()),
                    style: "padding: 6px 12px; border-radius: 8px; border: 1px solid {amount_color}; background: transparent; color: {amount_color}; cursor: pointer;",
                    "Delete"
                }
            }
        }
    }
}

#[component]
fn DeleteConfirm(
    is_dark: bool,
    transaction: Transaction,
    busy: bool,
    on_cancel: EventHandler<()>,
    on_confirm: EventHandler<Transaction>,
) -> Element {
    let surface = if is_dark { "#1E2220" } else { "#FFFFFF" };
    let on_surface = AppColors::on_surface(is_dark);
    let expense_color = AppColors::expense(is_dark);
    let for_confirm = transaction.clone();

    rsx! {
        div {
            style: "position: fixed; inset: 0; background: rgba(0,0,0,0.5); display: flex; align-items: center; justify-content: center; z-index: 100;",
            div {
                style: "background: {surface}; border-radius: 12px; padding: 24px; width: 100%; max-width: 400px;",
                h2 { style: "color: {on_surface}; font-size: 1.1rem; margin: 0 0 8px;", "Delete transaction?" }
                p { style: "color: {on_surface}; opacity: 0.8; margin: 0 0 16px;",
                    "{transaction.category.label()} · {transaction.formatted_amount()}"
                }
                div { style: "display: flex; gap: 12px; justify-content: flex-end;",
                    button {
                        disabled: busy,
                        onclick: move |_| on_cancel.call(()),
                        style: "padding: 8px 16px; border-radius: 8px; border: 1px solid #8A938E; background: transparent; color: {on_surface}; cursor: pointer;",
                        "Cancel"
                    }
                    button {
                        disabled: busy,
                        onclick: move |_| on_confirm.call(for_confirm.clone()),
                        style: "padding: 8px 16px; border-radius: 8px; border: none; background: {expense_color}; color: white; cursor: pointer; font-weight: 600;",
                        if busy { "Deleting…" } else { "Delete" }
                    }
                }
            }
        }
    }
}
