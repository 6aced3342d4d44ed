//! Progress Bar Component
//!
//! Completion bar with a label row and optional subtitle/percentage line.

use leptos::prelude::*;

/// Progress bar, `value` in 0-100
#[component]
pub fn ProgressBar(
    value: u32,
    #[prop(default = "Progress")] label: &'static str,
    #[prop(optional, into)] subtitle: Option<String>,
    #[prop(optional)] show_percentage_below: bool,
) -> impl IntoView {
    view! {
        <div class="mb-4">
            <div class="flex justify-between text-sm mb-2">
                <span class="font-medium">{label}</span>
                {match subtitle {
                    Some(text) => view! { <span class="text-base-content/70">{text}</span> }.into_any(),
                    None => view! { <span>{format!("{}%", value)}</span> }.into_any(),
                }}
            </div>
            <progress class="progress progress-primary w-full" max="100" value=value.to_string()></progress>
            {show_percentage_below.then(|| view! {
                <div class="text-center mt-1 text-sm text-base-content/70">
                    {format!("{}%", value)}
                </div>
            })}
        </div>
    }
}
