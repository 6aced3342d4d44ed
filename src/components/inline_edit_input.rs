//! Inline Edit Input Component
//!
//! Reusable inline editing input with save/cancel actions. Enter saves,
//! Escape cancels; a trimmed-empty or unchanged value is treated as
//! cancel so no-op saves never hit the network.

use leptos::prelude::*;

use crate::models::normalized_name;

#[component]
pub fn InlineEditInput(
    #[prop(into)] initial_value: String,
    #[prop(into)] on_save: Callback<String>,
    #[prop(into)] on_cancel: Callback<()>,
    #[prop(optional, into)] is_loading: Signal<bool>,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    let initial = StoredValue::new(initial_value.clone());
    let (value, set_value) = signal(initial_value);

    let save = move || {
        match normalized_name(&value.get()) {
            Some(name) if name != initial.get_value() => on_save.run(name),
            // Blank or unchanged: a no-op save is a cancel.
            _ => on_cancel.run(()),
        }
    };

    let cancel = move || {
        set_value.set(initial.get_value());
        on_cancel.run(());
    };

    view! {
        <div class="flex items-center gap-2 flex-1">
            <input
                type="text"
                class="input input-sm input-bordered flex-1"
                placeholder=placeholder
                prop:value=move || value.get()
                prop:disabled=move || is_loading.get()
                on:input=move |ev| set_value.set(event_target_value(&ev))
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        save();
                    } else if ev.key() == "Escape" {
                        cancel();
                    }
                }
                autofocus=true
            />
            <button
                class="btn btn-ghost btn-sm btn-circle text-success"
                prop:disabled=move || is_loading.get() || normalized_name(&value.get()).is_none()
                on:click=move |_| save()
            >
                "✓"
            </button>
            <button
                class="btn btn-ghost btn-sm btn-circle text-error"
                prop:disabled=move || is_loading.get()
                on:click=move |_| cancel()
            >
                "✗"
            </button>
        </div>
    }
}
