//! Grocery List Card Component
//!
//! Overview card for one list: inline-editable name, actions menu,
//! completion progress, item statistics, and a link to the detail view.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::{InlineEditInput, ProgressBar};
use crate::models::GroceryList;

#[component]
pub fn GroceryListCard(
    list: GroceryList,
    #[prop(into)] on_delete: Callback<i64>,
    #[prop(into)] on_update: Callback<(i64, String)>,
    #[prop(optional, into)] is_deleting: Signal<bool>,
    #[prop(optional, into)] is_updating: Signal<bool>,
) -> impl IntoView {
    let (editing, set_editing) = signal(false);

    let id = list.id;
    let total = list.grocery_items.len();
    let purchased = list.purchased_count();
    let progress = list.completion_percentage();
    let name = StoredValue::new(list.name);

    view! {
        <div class="card bg-base-100 shadow-lg border border-base-300 hover:shadow-xl transition-shadow">
            <div class="card-body">
                <div class="flex justify-between items-start mb-4">
                    <Show
                        when=move || editing.get()
                        fallback=move || view! {
                            <h2 class="card-title text-lg">{name.get_value()}</h2>
                            <div class="dropdown dropdown-end">
                                <label tabindex="0" class="btn btn-ghost btn-sm btn-circle">"⋮"</label>
                                <ul
                                    tabindex="0"
                                    class="dropdown-content z-[1] menu p-2 shadow bg-base-100 rounded-box w-52 text-right"
                                >
                                    <li>
                                        <a on:click=move |_| set_editing.set(true)>
                                            {move || if is_updating.get() { "Updating..." } else { "Edit" }}
                                        </a>
                                    </li>
                                    <li>
                                        <a class="text-error" on:click=move |_| on_delete.run(id)>
                                            {move || if is_deleting.get() { "Deleting..." } else { "Delete" }}
                                        </a>
                                    </li>
                                </ul>
                            </div>
                        }
                    >
                        <InlineEditInput
                            initial_value=name.get_value()
                            placeholder="Enter list name"
                            is_loading=is_updating
                            on_save=Callback::new(move |new_name: String| {
                                on_update.run((id, new_name));
                                set_editing.set(false);
                            })
                            on_cancel=Callback::new(move |_| set_editing.set(false))
                        />
                    </Show>
                </div>

                <ProgressBar value=progress/>

                <div class="space-y-2 mb-4">
                    <div class="flex justify-between text-sm">
                        <span class="text-base-content/70">"Items:"</span>
                        <span class="font-medium">{total}</span>
                    </div>
                    <div class="flex justify-between text-sm">
                        <span class="text-base-content/70">"Purchased:"</span>
                        <span class="font-medium text-success">{purchased}</span>
                    </div>
                    <div class="flex justify-between text-sm">
                        <span class="text-base-content/70">"Not Purchased:"</span>
                        <span class="font-medium text-warning">{total - purchased}</span>
                    </div>
                </div>

                <div class="card-actions justify-end">
                    <A href=format!("/lists/{}", id) attr:class="btn btn-primary btn-sm">
                        "View List"
                    </A>
                </div>
            </div>
        </div>
    }
}
