use dioxus::prelude::*;

use crate::models::ChartData;
use crate::theme::AppColors;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartKind {
    Bars,
    Lines,
}

const W: f64 = 640.0;
const H: f64 = 240.0;
const PAD: f64 = 28.0;

/// Income vs. expense per label, as a plain SVG panel. The series come from
/// the backend as parallel arrays; missing points render as zero.
#[component]
pub fn Chart(is_dark: bool, data: ChartData, kind: ChartKind) -> Element {
    let on_surface = AppColors::on_surface(is_dark);
    let income_color = AppColors::income(is_dark);
    let expense_color = AppColors::expense(is_dark);

    let n = data.labels.len().max(1);
    let slot_w = (W - 2.0 * PAD) / n as f64;
    let max = data
        .income
        .iter()
        .chain(data.expense.iter())
        .cloned()
        .fold(0.0_f64, f64::max)
        .max(1.0);
    let scale = (H - 2.0 * PAD) / max;

    let value_at = |series: &[f64], i: usize| series.get(i).copied().unwrap_or(0.0);

    let mut bars: Vec<(String, String, String, String, &'static str)> = Vec::new();
    let mut income_points = String::new();
    let mut expense_points = String::new();

    for i in 0..data.labels.len() {
        let x0 = PAD + i as f64 * slot_w;
        match kind {
            ChartKind::Bars => {
                let bar_w = slot_w * 0.32;
                for (offset, value, color) in [
                    (0.12, value_at(&data.income, i), income_color),
                    (0.52, value_at(&data.expense, i), expense_color),
                ] {
                    let h = value * scale;
                    bars.push((
                        format!("{:.1}", x0 + slot_w * offset),
                        format!("{:.1}", H - PAD - h),
                        format!("{:.1}", bar_w),
                        format!("{:.1}", h),
                        color,
                    ));
                }
            }
            ChartKind::Lines => {
                let cx = x0 + slot_w * 0.5;
                let iy = H - PAD - value_at(&data.income, i) * scale;
                let ey = H - PAD - value_at(&data.expense, i) * scale;
                income_points.push_str(&format!("{:.1},{:.1} ", cx, iy));
                expense_points.push_str(&format!("{:.1},{:.1} ", cx, ey));
            }
        }
    }

    let labels: Vec<(String, String)> = data
        .labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            (
                format!("{:.1}", PAD + (i as f64 + 0.5) * slot_w),
                label.clone(),
            )
        })
        .collect();
    let baseline_y = format!("{:.1}", H - PAD);
    let baseline_x1 = format!("{:.1}", PAD);
    let baseline_x2 = format!("{:.1}", W - PAD);
    let label_y = format!("{:.1}", H - 8.0);

    rsx! {
        svg {
            view_box: "0 0 640 240",
            style: "width: 100%; height: auto; display: block;",
            line {
                x1: "{baseline_x1}",
                y1: "{baseline_y}",
                x2: "{baseline_x2}",
                y2: "{baseline_y}",
                stroke: "{on_surface}",
                stroke_width: "1",
                opacity: "0.3",
            }
            if kind == ChartKind::Bars {
                for (x, y, w, h, fill) in bars {
                    rect { x: "{x}", y: "{y}", width: "{w}", height: "{h}", rx: "2", fill: "{fill}" }
                }
            } else {
                polyline {
                    points: "{income_points}",
                    fill: "none",
                    stroke: "{income_color}",
                    stroke_width: "2",
                }
                polyline {
                    points: "{expense_points}",
                    fill: "none",
                    stroke: "{expense_color}",
                    stroke_width: "2",
                }
            }
            for (x, label) in labels {
                text {
                    x: "{x}",
                    y: "{label_y}",
                    fill: "{on_surface}",
                    font_size: "11",
                    text_anchor: "middle",
                    opacity: "0.7",
                    "{label}"
                }
            }
        }
    }
}
