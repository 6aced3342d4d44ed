//! Item Row Component
//!
//! One grocery item: purchase checkbox, name, quantity badge, edit and
//! delete actions. Controls disable while an item mutation is pending.

use leptos::prelude::*;

use crate::models::GroceryItem;

#[component]
pub fn ItemRow(
    item: GroceryItem,
    #[prop(into)] busy: Signal<bool>,
    #[prop(into)] on_toggle: Callback<(i64, bool)>,
    #[prop(into)] on_edit: Callback<GroceryItem>,
    #[prop(into)] on_delete: Callback<i64>,
) -> impl IntoView {
    let id = item.id;
    let is_purchased = item.is_purchased;
    let quantity = item.quantity;
    let name = item.name.clone();
    let for_edit = StoredValue::new(item);

    let card_class = if is_purchased {
        "card bg-base-100 border opacity-60"
    } else {
        "card bg-base-100 border"
    };
    let name_class = if is_purchased { "line-through" } else { "" };

    view! {
        <div class=card_class>
            <div class="card-body py-3 px-4">
                <div class="flex items-center gap-3">
                    <input
                        type="checkbox"
                        class="checkbox checkbox-primary"
                        prop:checked=is_purchased
                        prop:disabled=move || busy.get()
                        on:change=move |_| on_toggle.run((id, is_purchased))
                    />
                    <div class="flex-1">
                        <p class=name_class>{name}</p>
                    </div>
                    "Qty:"
                    <div class="badge badge-outline">{quantity}</div>
                    <button
                        class="btn btn-ghost btn-sm btn-square"
                        title="Edit item"
                        prop:disabled=move || busy.get()
                        on:click=move |_| on_edit.run(for_edit.get_value())
                    >
                        "✎"
                    </button>
                    <button
                        class="btn btn-ghost btn-sm btn-square text-error"
                        title="Delete item"
                        prop:disabled=move || busy.get()
                        on:click=move |_| on_delete.run(id)
                    >
                        "✕"
                    </button>
                </div>
            </div>
        </div>
    }
}
