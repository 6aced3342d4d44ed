//! Item Form Modal Component
//!
//! Shared modal for creating and editing items. The form is seeded from
//! the item under edit when the modal opens; while a save is in flight
//! the controls disable and closing is suppressed. A failed save renders
//! inline and leaves the form open.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::models::{
    normalized_name, CreateGroceryItemRequest, GroceryItem, UpdateGroceryItemRequest,
};
use crate::queries::{self, use_query_client};

#[component]
pub fn ItemFormModal(
    list_id: i64,
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] editing: Signal<Option<GroceryItem>>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let client = use_query_client();

    let (item_name, set_item_name) = signal(String::new());
    let (quantity, set_quantity) = signal(1u32);
    let (saving, set_saving) = signal(false);
    let (save_error, set_save_error) = signal::<Option<String>>(None);

    // Seed the form whenever the modal opens: item values in edit mode,
    // blank name and quantity 1 in create mode.
    Effect::new(move |_| {
        if open.get() {
            match editing.get() {
                Some(item) => {
                    set_item_name.set(item.name.clone());
                    set_quantity.set(item.quantity);
                }
                None => {
                    set_item_name.set(String::new());
                    set_quantity.set(1);
                }
            }
            set_save_error.set(None);
        }
    });

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if saving.get() {
            return;
        }
        let Some(name) = normalized_name(&item_name.get()) else {
            return;
        };
        let qty = quantity.get();
        if qty < 1 {
            return;
        }

        set_saving.set(true);
        set_save_error.set(None);
        let under_edit = editing.get();

        spawn_local(async move {
            let result = match under_edit {
                Some(item) => {
                    let patch = UpdateGroceryItemRequest {
                        name: Some(name),
                        quantity: Some(qty),
                    };
                    queries::update_item(client, list_id, item.id, patch)
                        .await
                        .map(|_| ())
                }
                None => {
                    let request = CreateGroceryItemRequest {
                        name,
                        quantity: qty,
                    };
                    queries::create_item(client, list_id, request).await.map(|_| ())
                }
            };
            set_saving.set(false);
            match result {
                Ok(()) => on_close.run(()),
                Err(err) => {
                    log::error!("failed to save grocery item: {err}");
                    set_save_error.set(Some(err.to_string()));
                }
            }
        });
    };

    let close = move || {
        if !saving.get() {
            on_close.run(());
        }
    };

    view! {
        <Show when=move || open.get()>
            <div class="modal modal-open">
                <div class="modal-box">
                    <h3 class="font-bold text-lg mb-4">
                        {move || if editing.get().is_some() { "Edit Item" } else { "Add New Item" }}
                    </h3>

                    <form class="space-y-4" on:submit=submit>
                        <div class="form-control">
                            <label class="label">
                                <span class="label-text">"Item Name"</span>
                            </label>
                            <input
                                type="text"
                                class="input input-bordered w-full"
                                placeholder="Enter item name..."
                                prop:value=move || item_name.get()
                                prop:disabled=move || saving.get()
                                on:input=move |ev| set_item_name.set(event_target_value(&ev))
                                autofocus=true
                            />
                        </div>

                        <div class="form-control">
                            <label class="label">
                                <span class="label-text">"Quantity"</span>
                            </label>
                            <input
                                type="number"
                                min="1"
                                class="input input-bordered w-full"
                                prop:value=move || quantity.get().to_string()
                                prop:disabled=move || saving.get()
                                on:input=move |ev| {
                                    set_quantity.set(event_target_value(&ev).parse().unwrap_or(1));
                                }
                            />
                        </div>

                        {move || save_error.get().map(|message| view! {
                            <div class="alert alert-error text-sm">
                                <span>{message}</span>
                            </div>
                        })}

                        <div class="modal-action">
                            <button
                                type="button"
                                class="btn btn-ghost"
                                prop:disabled=move || saving.get()
                                on:click=move |_| close()
                            >
                                "Cancel"
                            </button>
                            <button
                                type="submit"
                                class="btn btn-primary"
                                prop:disabled=move || {
                                    saving.get()
                                        || quantity.get() < 1
                                        || normalized_name(&item_name.get()).is_none()
                                }
                            >
                                {move || {
                                    if saving.get() {
                                        "Saving..."
                                    } else if editing.get().is_some() {
                                        "Update"
                                    } else {
                                        "Create"
                                    }
                                }}
                            </button>
                        </div>
                    </form>
                </div>
                <div class="modal-backdrop" on:click=move |_| close()></div>
            </div>
        </Show>
    }
}
