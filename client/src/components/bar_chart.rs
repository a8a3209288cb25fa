//! Inline SVG bar chart of registration fees.
//!
//! Layout is computed by [`layout_bars`] so geometry can be tested without a
//! DOM; the component only maps bars to `<rect>` elements.

#[cfg(test)]
#[path = "bar_chart_test.rs"]
mod bar_chart_test;

use leptos::prelude::*;

use crate::net::types::Registration;
use crate::util::format::{format_datetime, format_fees, or_na};

pub const CHART_WIDTH: f64 = 600.0;
pub const CHART_HEIGHT: f64 = 300.0;
const PADDING: f64 = 40.0;
const GAP_RATIO: f64 = 0.2;

#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub label: String,
    /// Hover text: camp, fee, date, and location.
    pub title: String,
}

/// One bar per registration, scaled to the largest fee.
#[must_use]
pub fn layout_bars(rows: &[Registration], width: f64, height: f64) -> Vec<Bar> {
    if rows.is_empty() {
        return Vec::new();
    }
    let plot_w = (width - PADDING * 2.0).max(0.0);
    let plot_h = (height - PADDING * 2.0).max(0.0);
    #[allow(clippy::cast_precision_loss)]
    let slot = plot_w / rows.len() as f64;
    let bar_w = slot * (1.0 - GAP_RATIO);
    let max_fee = rows.iter().map(|r| r.camp_fees).fold(0.0_f64, f64::max);

    rows.iter()
        .enumerate()
        .map(|(idx, r)| {
            let bar_h = if max_fee > 0.0 { plot_h * (r.camp_fees.max(0.0) / max_fee) } else { 0.0 };
            #[allow(clippy::cast_precision_loss)]
            let x = PADDING + slot * idx as f64 + (slot - bar_w) / 2.0;
            Bar {
                x,
                y: PADDING + plot_h - bar_h,
                width: bar_w,
                height: bar_h,
                label: r.camp_name.clone(),
                title: format!(
                    "{}: {}\nDate: {}\nLocation: {}",
                    r.camp_name,
                    format_fees(r.camp_fees),
                    format_datetime(&r.date_time),
                    or_na(&r.location)
                ),
            }
        })
        .collect()
}

#[component]
pub fn BarChart(rows: Vec<Registration>) -> impl IntoView {
    let bars = layout_bars(&rows, CHART_WIDTH, CHART_HEIGHT);
    let baseline = CHART_HEIGHT - PADDING;

    view! {
        <svg
            class="bar-chart"
            viewBox=format!("0 0 {CHART_WIDTH} {CHART_HEIGHT}")
            role="img"
            aria-label="Camp fees by registration"
        >
            <line
                class="bar-chart__axis"
                x1=PADDING.to_string()
                y1=baseline.to_string()
                x2=(CHART_WIDTH - PADDING).to_string()
                y2=baseline.to_string()
            ></line>
            <line
                class="bar-chart__axis"
                x1=PADDING.to_string()
                y1=PADDING.to_string()
                x2=PADDING.to_string()
                y2=baseline.to_string()
            ></line>
            {bars
                .into_iter()
                .map(|bar| {
                    let label_x = bar.x + bar.width / 2.0;
                    view! {
                        <g class="bar-chart__bar">
                            <rect
                                x=bar.x.to_string()
                                y=bar.y.to_string()
                                width=bar.width.to_string()
                                height=bar.height.to_string()
                            >
                                <title>{bar.title}</title>
                            </rect>
                            <text
                                class="bar-chart__label"
                                x=label_x.to_string()
                                y=(baseline + 16.0).to_string()
                                text-anchor="middle"
                            >
                                {bar.label}
                            </text>
                        </g>
                    }
                })
                .collect::<Vec<_>>()}
        </svg>
    }
}
