use dioxus::prelude::*;

use crate::api;
use crate::format;
use crate::models::{CategoryStat, DetailedReport, Period, TransactionKind};

/// Print-oriented detailed report for the selected period. Read-only: the
/// whole bundle is pre-aggregated by the backend and laid out as fetched.
/// Rendered on a white surface regardless of theme so it prints cleanly.
#[component]
pub fn ReportScreen(period: Signal<Period>, on_back: EventHandler<()>) -> Element {
    let mut report = use_signal(|| Option::<DetailedReport>::None);
    let mut notice = use_signal(|| Option::<String>::None);

    use_effect(move || {
        let p = period();
        spawn(async move {
            match api::detailed_report(p).await {
                Ok(r) => {
                    report.set(Some(r));
                    notice.set(None);
                }
                Err(e) => {
                    log::warn!("detailed report fetch failed: {e}");
                    notice.set(Some("Could not load the report.".to_string()));
                }
            }
        });
    });

    let heading = format!("Detailed report ({})", period().label());

    rsx! {
        div { style: "min-height: 100vh; background: #FFFFFF; color: #1A1C1B;",
            div { style: "max-width: 760px; margin: 0 auto; padding: 32px 24px;",
                div { style: "display: flex; align-items: center; gap: 12px; margin-bottom: 16px;",
                    h1 { style: "margin: 0; flex: 1; font-size: 1.4rem;", "{heading}" }
                    button {
                        onclick: move |_| {
                            document::eval("window.print()");
                        },
                        style: "padding: 8px 16px; border-radius: 8px; border: 1px solid #1B6B52; background: transparent; color: #1B6B52; cursor: pointer;",
                        "Print"
                    }
                    button {
                        onclick: move |_| on_back.call(()),
                        style: "padding: 8px 16px; border-radius: 8px; border: 1px solid #8A938E; background: transparent; color: #1A1C1B; cursor: pointer;",
                        "Back"
                    }
                }
                if let Some(ref n) = notice() {
                    p { style: "color: #BA1A1A;", "{n}" }
                }
                {match report() {
                    Some(r) => rsx! {
                        p { style: "color: #5B635E; font-size: 0.85rem; margin: 0 0 24px;",
                            "Generated {format::format_datetime(&r.generated_at)}"
                        }
                        div { style: "display: flex; gap: 24px; margin-bottom: 24px;",
                            ReportFigure { label: "Income", value: format::format_cop(r.stats.total_income), color: "#1B6B52".to_string() }
                            ReportFigure { label: "Expenses", value: format::format_cop(r.stats.total_expense), color: "#BA1A1A".to_string() }
                            ReportFigure {
                                label: "Balance",
                                value: format::format_cop(r.stats.balance),
                                color: if r.stats.balance < 0.0 { "#BA1A1A".to_string() } else { "#1B6B52".to_string() },
                            }
                        }
                        ReportCategoryTable { title: "Income by category", rows: r.income_categories.clone() }
                        ReportCategoryTable { title: "Expenses by category", rows: r.expense_categories.clone() }
                        h2 { style: "font-size: 1.05rem; margin: 24px 0 8px;", "Recent transactions" }
                        table { style: "width: 100%; border-collapse: collapse; font-size: 0.9rem;",
                            thead {
                                tr {
                                    th { style: "text-align: left; border-bottom: 1px solid #CCD3CE; padding: 6px 4px;", "Date" }
                                    th { style: "text-align: left; border-bottom: 1px solid #CCD3CE; padding: 6px 4px;", "Category" }
                                    th { style: "text-align: left; border-bottom: 1px solid #CCD3CE; padding: 6px 4px;", "Description" }
                                    th { style: "text-align: right; border-bottom: 1px solid #CCD3CE; padding: 6px 4px;", "Amount" }
                                }
                            }
                            tbody {
                                for t in r.recent_transactions.iter() {
                                    tr {
                                        td { style: "padding: 6px 4px; border-bottom: 1px solid #EEF1EF;",
                                            "{format::format_date(&t.date)}"
                                        }
                                        td { style: "padding: 6px 4px; border-bottom: 1px solid #EEF1EF;",
                                            "{t.category.label()}"
                                        }
                                        td { style: "padding: 6px 4px; border-bottom: 1px solid #EEF1EF;",
                                            "{t.description.as_deref().unwrap_or(\"-\")}"
                                        }
                                        td {
                                            style: if t.kind == TransactionKind::Income {
                                                "padding: 6px 4px; border-bottom: 1px solid #EEF1EF; text-align: right; color: #1B6B52;"
                                            } else {
                                                "padding: 6px 4px; border-bottom: 1px solid #EEF1EF; text-align: right; color: #BA1A1A;"
                                            },
                                            "{t.formatted_amount()}"
                                        }
                                    }
                                }
                            }
                        }
                    },
                    None => rsx! {
                        p { style: "color: #5B635E;", "Loading report…" }
                    },
                }}
            }
        }
    }
}

#[component]
fn ReportFigure(label: String, value: String, color: String) -> Element {
    rsx! {
        div { style: "flex: 1;",
            p { style: "margin: 0; font-size: 0.85rem; color: #5B635E;", "{label}" }
            p { style: "margin: 0; font-size: 1.2rem; font-weight: bold; color: {color};", "{value}" }
        }
    }
}

#[component]
fn ReportCategoryTable(title: String, rows: Vec<CategoryStat>) -> Element {
    rsx! {
        h2 { style: "font-size: 1.05rem; margin: 24px 0 8px;", "{title}" }
        if rows.is_empty() {
            p { style: "color: #5B635E; font-size: 0.9rem;", "No data for this period." }
        } else {
            table { style: "width: 100%; border-collapse: collapse; font-size: 0.9rem;",
                tbody {
                    for row in rows {
                        tr {
                            td { style: "padding: 4px; border-bottom: 1px solid #EEF1EF;", "{row.category.label()}" }
                            td { style: "padding: 4px; border-bottom: 1px solid #EEF1EF; text-align: right;",
                                "{format::format_cop(row.total)}"
                            }
                            td { style: "padding: 4px; border-bottom: 1px solid #EEF1EF; text-align: right; color: #5B635E;",
                                "{row.percentage:.1}%"
                            }
                        }
                    }
                }
            }
        }
    }
}
