use dioxus::prelude::*;

use crate::api;
use crate::format;
use crate::models::{CashSummary, CategoryStat, Period, Transaction, TransactionKind};
use crate::refresh::{self, CategoryBreakdown, Overview};
use crate::theme::AppColors;
use crate::widgets::{Card, Chart, ChartKind, PageBackground, StatCard};

/// Dashboard view: stat cards, period and chart-type selectors, chart panel,
/// category breakdowns, cash summary and recent transactions.
///
/// Fetches are grouped (stats + chart, income + expense categories) and each
/// group is applied all-or-nothing; a failed group keeps the last-known-good
/// state. A generation token guards against a stale in-flight refresh
/// overwriting a newer one after rapid period switching.
#[component]
pub fn DashboardScreen(is_dark: bool, mut period: Signal<Period>, reload: Signal<u32>) -> Element {
    let mut overview = use_signal(|| Option::<Overview>::None);
    let mut breakdown = use_signal(|| Option::<CategoryBreakdown>::None);
    let mut cash = use_signal(|| Option::<CashSummary>::None);
    let mut recent = use_signal(Vec::<Transaction>::new);
    let mut notice = use_signal(|| Option::<String>::None);
    let mut chart_kind = use_signal(|| ChartKind::Bars);
    let generation = use_signal(|| 0u64);

    use_effect(move || {
        let p = period();
        let _ = reload();
        let mut generation = generation;
        let gen = generation.peek().wrapping_add(1);
        generation.set(gen);
        spawn(async move {
            let mut failed = false;

            let result = refresh::load_overview(p).await;
            if *generation.peek() != gen {
                return;
            }
            match result {
                Ok(v) => overview.set(Some(v)),
                Err(e) => {
                    log::warn!("dashboard overview fetch failed: {e}");
                    failed = true;
                }
            }

            let result = refresh::load_category_breakdown(p).await;
            if *generation.peek() != gen {
                return;
            }
            match result {
                Ok(v) => breakdown.set(Some(v)),
                Err(e) => {
                    log::warn!("category breakdown fetch failed: {e}");
                    failed = true;
                }
            }

            let result = api::cash_summary().await;
            if *generation.peek() != gen {
                return;
            }
            match result {
                Ok(v) => cash.set(Some(v)),
                Err(e) => {
                    log::warn!("cash summary fetch failed: {e}");
                    failed = true;
                }
            }

            let result = api::transactions().await;
            if *generation.peek() != gen {
                return;
            }
            match result {
                Ok(list) => recent.set(list.into_iter().take(5).collect()),
                Err(e) => {
                    log::warn!("transaction list fetch failed: {e}");
                    failed = true;
                }
            }

            notice.set(failed.then(|| "Some data could not be updated.".to_string()));
        });
    });

    let on_surface = AppColors::on_surface(is_dark);
    let primary = AppColors::primary(is_dark);
    let income_color = AppColors::income(is_dark);
    let expense_color = AppColors::expense(is_dark);
    let active_fg = if is_dark { "#06130E" } else { "#FFFFFF" };

    let (total_income, total_expense, balance) = match overview() {
        Some(ref v) => (
            format::format_cop(v.stats.total_income),
            format::format_cop(v.stats.total_expense),
            format::format_cop(v.stats.balance),
        ),
        None => ("—".to_string(), "—".to_string(), "—".to_string()),
    };
    let balance_color = match overview() {
        Some(ref v) if v.stats.balance < 0.0 => expense_color,
        _ => income_color,
    };

    rsx! {
        PageBackground { is_dark,
            div { style: "padding: 24px; max-width: 960px; margin: 0 auto;",
                div { style: "display: flex; align-items: center; gap: 12px; margin-bottom: 16px; flex-wrap: wrap;",
                    h1 { style: "color: {on_surface}; margin: 0; flex: 1;", "Dashboard" }
                    for p in Period::ALL {
                        button {
                            onclick: move |_| period.set(p),
                            style: if period() == p {
                                format!("padding: 6px 14px; border-radius: 8px; border: none; cursor: pointer; background: {primary}; color: {active_fg};")
                            } else {
                                format!("padding: 6px 14px; border-radius: 8px; border: 1px solid #8A938E; cursor: pointer; background: transparent; color: {on_surface};")
                            },
                            "{p.label()}"
                        }
                    }
                }
                if let Some(ref n) = notice() {
                    p { style: "color: {expense_color}; font-size: 0.875rem; margin-bottom: 12px;", "{n}" }
                }
                div { style: "display: flex; gap: 16px; flex-wrap: wrap;",
                    StatCard { is_dark, title: "Income", value: total_income, accent: income_color.to_string() }
                    StatCard { is_dark, title: "Expenses", value: total_expense, accent: expense_color.to_string() }
                    StatCard { is_dark, title: "Balance", value: balance, accent: balance_color.to_string() }
                }
                Card { is_dark,
                    div { style: "display: flex; align-items: center; margin-bottom: 8px;",
                        h2 { style: "color: {on_surface}; font-size: 1rem; margin: 0; flex: 1;", "Income vs. expenses" }
                        button {
                            onclick: move |_| chart_kind.set(ChartKind::Bars),
                            style: if chart_kind() == ChartKind::Bars {
                                format!("padding: 4px 12px; border-radius: 8px 0 0 8px; border: 1px solid {primary}; cursor: pointer; background: {primary}; color: {active_fg};")
                            } else {
                                format!("padding: 4px 12px; border-radius: 8px 0 0 8px; border: 1px solid #8A938E; cursor: pointer; background: transparent; color: {on_surface};")
                            },
                            "Bars"
                        }
                        button {
                            onclick: move |_| chart_kind.set(ChartKind::Lines),
                            style: if chart_kind() == ChartKind::Lines {
                                format!("padding: 4px 12px; border-radius: 0 8px 8px 0; border: 1px solid {primary}; cursor: pointer; background: {primary}; color: {active_fg};")
                            } else {
                                format!("padding: 4px 12px; border-radius: 0 8px 8px 0; border: 1px solid #8A938E; cursor: pointer; background: transparent; color: {on_surface};")
                            },
                            "Lines"
                        }
                    }
                    {match overview() {
                        Some(v) => rsx! {
                            Chart { is_dark, data: v.chart.clone(), kind: chart_kind() }
                        },
                        None => rsx! {
                            p { style: "color: {on_surface}; opacity: 0.7;", "Loading chart…" }
                        },
                    }}
                }
                div { style: "display: flex; gap: 16px; flex-wrap: wrap;",
                    div { style: "flex: 1; min-width: 280px;",
                        CategoryPanel {
                            is_dark,
                            title: "Income by category",
                            rows: breakdown().map(|b| b.income).unwrap_or_default(),
                            accent: income_color.to_string(),
                        }
                    }
                    div { style: "flex: 1; min-width: 280px;",
                        CategoryPanel {
                            is_dark,
                            title: "Expenses by category",
                            rows: breakdown().map(|b| b.expense).unwrap_or_default(),
                            accent: expense_color.to_string(),
                        }
                    }
                }
                Card { is_dark,
                    h2 { style: "color: {on_surface}; font-size: 1rem; margin: 0 0 8px;", "Cash on hand" }
                    {match cash() {
                        Some(summary) => rsx! {
                            div { style: "display: flex; gap: 24px; flex-wrap: wrap;",
                                p { style: "color: {on_surface}; margin: 0;", "Bills: {format::format_cop_i64(summary.total_bills)}" }
                                p { style: "color: {on_surface}; margin: 0;", "Coins: {format::format_cop_i64(summary.total_coins)}" }
                                p { style: "color: {on_surface}; margin: 0; font-weight: bold;", "Total: {format::format_cop_i64(summary.total_cash())}" }
                            }
                        },
                        None => rsx! {
                            p { style: "color: {on_surface}; opacity: 0.7; margin: 0;", "No cash count yet." }
                        },
                    }}
                }
                Card { is_dark,
                    h2 { style: "color: {on_surface}; font-size: 1rem; margin: 0 0 8px;", "Recent transactions" }
                    if recent().is_empty() {
                        p { style: "color: {on_surface}; opacity: 0.7; margin: 0;", "No transactions yet." }
                    } else {
                        for t in recent() {
                            div { style: "display: flex; justify-content: space-between; padding: 6px 0; border-bottom: 1px solid rgba(138,147,142,0.2);",
                                span { style: "color: {on_surface};",
                                    "{t.category.label()} · {format::format_date(&t.date)}"
                                }
                                span {
                                    style: if t.kind == TransactionKind::Income {
                                        format!("color: {income_color}; font-weight: 500;")
                                    } else {
                                        format!("color: {expense_color}; font-weight: 500;")
                                    },
                                    "{t.formatted_amount()}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn CategoryPanel(is_dark: bool, title: String, rows: Vec<CategoryStat>, accent: String) -> Element {
    let on_surface = AppColors::on_surface(is_dark);
    rsx! {
        Card { is_dark,
            h2 { style: "color: {on_surface}; font-size: 1rem; margin: 0 0 8px;", "{title}" }
            if rows.is_empty() {
                p { style: "color: {on_surface}; opacity: 0.7; margin: 0;", "No data for this period." }
            } else {
                for row in rows {
                    div { style: "margin-bottom: 8px;",
                        div { style: "display: flex; justify-content: space-between;",
                            span { style: "color: {on_surface}; font-size: 0.9rem;", "{row.category.label()}" }
                            span { style: "color: {on_surface}; font-size: 0.9rem;",
                                "{format::format_cop(row.total)} ({row.percentage:.1}%)"
                            }
                        }
                        div { style: "height: 6px; border-radius: 3px; background: rgba(138,147,142,0.25); overflow: hidden;",
                            div { style: "height: 100%; width: {row.percentage.min(100.0)}%; background: {accent};" }
                        }
                    }
                }
            }
        }
    }
}
