//! Dashboard: headline counts and mistake/knowledge trends.
//!
//! SYSTEM CONTEXT
//! ==============
//! The authenticated landing route. Figures are a fixed sample until the
//! backend exposes statistics; the toggles switch which slice is shown.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::chart::{Bar, BarChart, RatioBar, format_count};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Subject {
    /// 高数
    #[default]
    Calculus,
    /// 线代
    LinearAlgebra,
    /// 概率论
    Probability,
}

impl Subject {
    pub const ALL: [Self; 3] = [Self::Calculus, Self::LinearAlgebra, Self::Probability];

    pub fn label(self) -> &'static str {
        match self {
            Self::Calculus => "高数",
            Self::LinearAlgebra => "线代",
            Self::Probability => "概率论",
        }
    }

    fn column(self) -> usize {
        match self {
            Self::Calculus => 0,
            Self::LinearAlgebra => 1,
            Self::Probability => 2,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Period {
    Daily,
    #[default]
    Weekly,
    Monthly,
}

impl Period {
    pub const ALL: [Self; 3] = [Self::Daily, Self::Weekly, Self::Monthly];

    pub fn label(self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
        }
    }
}

pub const DAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// New mistakes per day, columns in `Subject::ALL` order.
pub const NEW_MISTAKES: [[u32; 3]; 7] = [
    [4200, 2800, 1500],
    [3500, 2500, 2000],
    [2800, 2000, 1800],
    [3800, 2800, 1100],
    [4800, 3300, 1900],
    [3900, 2500, 2100],
    [4500, 3000, 2200],
];

/// New knowledge points per day, columns in `Subject::ALL` order.
pub const NEW_KNOWLEDGE: [[u32; 3]; 7] = [
    [4500, 3000, 1800],
    [3800, 2700, 2100],
    [3200, 2200, 1600],
    [4100, 3000, 1000],
    [5000, 3500, 2000],
    [4200, 2700, 2200],
    [4700, 3200, 2300],
];

pub const CHAPTER_RATIO: [(&str, u32); 4] = [("Chapter 1", 546), ("Chapter 2", 457), ("Chapter 3", 386), ("Chapter 4", 64)];

pub const SUMMARY: [(&str, u64); 4] = [
    ("Total mistakes", 4168),
    ("Knowledge points", 1500),
    ("Solved", 3542),
    ("Pending", 626),
];

/// One subject's column of a per-day table.
pub fn daily_series(table: &[[u32; 3]; 7], subject: Subject) -> Vec<Bar> {
    DAYS.iter()
        .zip(table)
        .map(|(day, row)| Bar::new(*day, row[subject.column()]))
        .collect()
}

/// Chapter breakdown for a subject. The sample is shared by all subjects.
pub fn chapter_ratio(_subject: Subject) -> Vec<Bar> {
    CHAPTER_RATIO.iter().map(|(label, value)| Bar::new(*label, *value)).collect()
}

/// Segmented toggle over a fixed option set.
#[component]
fn Segmented<T>(options: [T; 3], selected: RwSignal<T>, label: fn(T) -> &'static str) -> impl IntoView
where
    T: Copy + PartialEq + Send + Sync + 'static,
{
    view! {
        <div class="segmented" role="tablist">
            {options
                .into_iter()
                .map(|option| {
                    view! {
                        <button
                            type="button"
                            class="segmented__option"
                            class:segmented__option--active=move || selected.get() == option
                            on:click=move |_| selected.set(option)
                        >
                            {label(option)}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Trend card with period and subject toggles.
#[component]
fn TrendCard(title: &'static str, table: &'static [[u32; 3]; 7]) -> impl IntoView {
    let period = RwSignal::new(Period::default());
    let subject = RwSignal::new(Subject::default());
    let bars = Signal::derive(move || daily_series(table, subject.get()));

    view! {
        <section class="card dashboard__trend">
            <header class="card__header">
                <h3 class="card__title">{title}</h3>
                <Segmented options=Period::ALL selected=period label=Period::label/>
            </header>
            <Segmented options=Subject::ALL selected=subject label=Subject::label/>
            <p class="card__caption">
                {move || format!("{} · {}", subject.get().label(), period.get().label())}
            </p>
            <BarChart bars=bars/>
        </section>
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ratio_subject = RwSignal::new(Subject::default());

    view! {
        <div class="dashboard-page">
            <h2 class="page__title">"Dashboard"</h2>
            <div class="dashboard__summary">
                {SUMMARY
                    .iter()
                    .map(|(label, value)| {
                        view! {
                            <section class="card dashboard__stat">
                                <h3 class="card__title">{*label}</h3>
                                <p class="dashboard__stat-value">{format_count(*value)}</p>
                            </section>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="dashboard__trends">
                <TrendCard title="New mistakes" table=&NEW_MISTAKES/>
                <TrendCard title="New knowledge points" table=&NEW_KNOWLEDGE/>
            </div>
            <section class="card dashboard__ratio">
                <header class="card__header">
                    <h3 class="card__title">"Knowledge by chapter"</h3>
                    <Segmented options=Subject::ALL selected=ratio_subject label=Subject::label/>
                </header>
                {move || view! { <RatioBar parts=chapter_ratio(ratio_subject.get())/> }}
            </section>
        </div>
    }
}
