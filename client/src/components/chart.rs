//! Bar charts drawn with plain elements and percentage widths.

#[cfg(test)]
#[path = "chart_test.rs"]
mod chart_test;

use leptos::prelude::*;

/// One labelled value.
#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: u32,
}

impl Bar {
    pub fn new(label: impl Into<String>, value: u32) -> Self {
        Self { label: label.into(), value }
    }
}

/// `value` as a percentage of `max`, clamped to `0..=100`.
pub fn bar_percent(value: u32, max: u32) -> f64 {
    if max == 0 {
        return 0.0;
    }
    (f64::from(value) / f64::from(max) * 100.0).clamp(0.0, 100.0)
}

/// Each value's share of the total, in percent. All zero when the total is.
pub fn shares(values: &[u32]) -> Vec<f64> {
    let total: u64 = values.iter().map(|v| u64::from(*v)).sum();
    values
        .iter()
        .map(|v| {
            if total == 0 {
                0.0
            } else {
                #[allow(clippy::cast_precision_loss)]
                let total = total as f64;
                f64::from(*v) / total * 100.0
            }
        })
        .collect()
}

/// Group digits by thousands: `4168` -> `4,168`.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Horizontal bars scaled to the largest value.
#[component]
pub fn BarChart(#[prop(into)] bars: Signal<Vec<Bar>>) -> impl IntoView {
    move || {
        let bars = bars.get();
        let max = bars.iter().map(|b| b.value).max().unwrap_or(0);
        bars.into_iter()
            .map(|bar| {
                let width = format!("width: {:.1}%", bar_percent(bar.value, max));
                view! {
                    <div class="bar-chart__row">
                        <span class="bar-chart__label">{bar.label}</span>
                        <span class="bar-chart__track">
                            <span class="bar-chart__fill" style=width></span>
                        </span>
                        <span class="bar-chart__value">{format_count(u64::from(bar.value))}</span>
                    </div>
                }
            })
            .collect_view()
    }
}

/// One stacked bar split by each part's share of the total.
#[component]
pub fn RatioBar(parts: Vec<Bar>) -> impl IntoView {
    let percents = shares(&parts.iter().map(|p| p.value).collect::<Vec<_>>());
    let segments = parts
        .iter()
        .zip(&percents)
        .enumerate()
        .map(|(i, (part, percent))| {
            let style = format!("width: {percent:.1}%");
            let title = format!("{}: {}", part.label, part.value);
            view! { <span class=format!("ratio-bar__segment ratio-bar__segment--{i}") style=style title=title></span> }
        })
        .collect_view();
    let legend = parts
        .into_iter()
        .zip(percents)
        .map(|(part, percent)| {
            view! {
                <li class="ratio-bar__legend-item">
                    {format!("{} {} ({percent:.0}%)", part.label, format_count(u64::from(part.value)))}
                </li>
            }
        })
        .collect_view();
    view! {
        <div class="ratio-bar">
            <div class="ratio-bar__track">{segments}</div>
            <ul class="ratio-bar__legend">{legend}</ul>
        </div>
    }
}
