//! Stat Card Component

use leptos::prelude::*;

/// Single overview statistic with an icon glyph
#[component]
pub fn StatCard(
    icon: &'static str,
    title: &'static str,
    value: usize,
    #[prop(default = "text-primary")] color_class: &'static str,
) -> impl IntoView {
    view! {
        <div class="stat bg-base-200 rounded-lg">
            <div class=format!("stat-figure {}", color_class)>
                <span class="text-3xl">{icon}</span>
            </div>
            <div class="stat-title">{title}</div>
            <div class=format!("stat-value {}", color_class)>{value}</div>
        </div>
    }
}
