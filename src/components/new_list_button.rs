//! New List Button Component

use leptos::prelude::*;

/// Primary call-to-action for opening the create-list modal
#[component]
pub fn NewListButton(
    #[prop(into)] on_click: Callback<()>,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <button
            class="btn btn-primary"
            prop:disabled=move || disabled.get()
            on:click=move |_| on_click.run(())
        >
            "+ New List"
        </button>
    }
}
