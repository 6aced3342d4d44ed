//! New List Modal Component
//!
//! Modal form for creating a grocery list. The open flag is owned by the
//! parent; closing is suppressed while the create is in flight.

use leptos::prelude::*;

use crate::models::normalized_name;

#[component]
pub fn NewListModal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] creating: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_create: Callback<String>,
) -> impl IntoView {
    let (list_name, set_list_name) = signal(String::new());

    let submit = move || {
        if creating.get() {
            return;
        }
        if let Some(name) = normalized_name(&list_name.get()) {
            on_create.run(name);
            set_list_name.set(String::new());
        }
    };

    let close = move || {
        if creating.get() {
            return;
        }
        set_list_name.set(String::new());
        on_close.run(());
    };

    view! {
        <Show when=move || open.get()>
            <div class="modal modal-open">
                <div class="modal-box">
                    <h3 class="font-bold text-lg mb-4">"Create New Grocery List"</h3>
                    <div class="form-control">
                        <label class="label">
                            <span class="label-text">"List Name"</span>
                        </label>
                        <input
                            type="text"
                            class="input input-bordered w-full"
                            placeholder="Enter list name..."
                            prop:value=move || list_name.get()
                            prop:disabled=move || creating.get()
                            on:input=move |ev| set_list_name.set(event_target_value(&ev))
                            on:keydown=move |ev: web_sys::KeyboardEvent| {
                                if ev.key() == "Enter" {
                                    submit();
                                }
                            }
                            autofocus=true
                        />
                    </div>
                    <div class="modal-action">
                        <button
                            class="btn btn-ghost"
                            prop:disabled=move || creating.get()
                            on:click=move |_| close()
                        >
                            "Cancel"
                        </button>
                        <button
                            class="btn btn-primary"
                            prop:disabled=move || {
                                creating.get() || normalized_name(&list_name.get()).is_none()
                            }
                            on:click=move |_| submit()
                        >
                            {move || if creating.get() { "Creating..." } else { "Create List" }}
                        </button>
                    </div>
                </div>
                <div class="modal-backdrop" on:click=move |_| close()></div>
            </div>
        </Show>
    }
}
