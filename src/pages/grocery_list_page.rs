//! Grocery List Page
//!
//! Detail view of one list: progress, pending and completed item groups,
//! and the shared create/edit item modal. The id path parameter is parsed
//! as an integer; anything unusable redirects back to the overview.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::{Redirect, A};
use leptos_router::hooks::use_params_map;

use crate::cache::QueryState;
use crate::components::{ItemFormModal, ItemRow, ProgressBar};
use crate::models::{completion_percentage, partition_by_purchase, GroceryItem};
use crate::queries::{self, use_grocery_items, use_query_client};

#[component]
pub fn GroceryListPage() -> impl IntoView {
    let params = use_params_map();
    let list_id = Memo::new(move |_| {
        params.with(|p| p.get("id").and_then(|raw| raw.parse::<i64>().ok()))
    });

    view! {
        {move || match list_id.get() {
            Some(id) => view! { <ListDetail list_id=id/> }.into_any(),
            None => view! { <Redirect path="/"/> }.into_any(),
        }}
    }
}

#[component]
fn ListDetail(list_id: i64) -> impl IntoView {
    let client = use_query_client();
    let items_query = use_grocery_items(list_id);

    // Modal state owned here; the modal itself only renders it
    let (modal_open, set_modal_open) = signal(false);
    let (editing_item, set_editing_item) = signal::<Option<GroceryItem>>(None);
    let (mutating, set_mutating) = signal(false);

    let toggle_purchase = move |(item_id, is_purchased): (i64, bool)| {
        if mutating.get() {
            return;
        }
        set_mutating.set(true);
        spawn_local(async move {
            if let Err(err) = queries::toggle_purchase(client, list_id, item_id, is_purchased).await
            {
                log::error!("failed to toggle purchase state: {err}");
            }
            set_mutating.set(false);
        });
    };

    let delete_item = move |item_id: i64| {
        if mutating.get() {
            return;
        }
        set_mutating.set(true);
        spawn_local(async move {
            if let Err(err) = queries::delete_item(client, list_id, item_id).await {
                log::error!("failed to delete item: {err}");
            }
            set_mutating.set(false);
        });
    };

    let open_add = move |_| {
        set_editing_item.set(None);
        set_modal_open.set(true);
    };

    let open_edit = move |item: GroceryItem| {
        set_editing_item.set(Some(item));
        set_modal_open.set(true);
    };

    let close_modal = move |_| {
        set_modal_open.set(false);
        set_editing_item.set(None);
    };

    view! {
        <div class="container mx-auto px-4 py-8 max-w-6xl">
            {move || match items_query.get() {
                QueryState::Loading => view! {
                    <div class="flex justify-center">
                        <span class="loading loading-spinner loading-lg"></span>
                    </div>
                }.into_any(),
                QueryState::Failed(err) => view! {
                    <div class="alert alert-error">
                        <span>{err.to_string()}</span>
                    </div>
                    <A href="/" attr:class="btn btn-primary mt-4">"Back to Lists"</A>
                }.into_any(),
                QueryState::Ready(data) | QueryState::Refreshing(data) => {
                    let (pending, completed) = partition_by_purchase(&data.items);
                    let percentage = completion_percentage(&data.items);
                    let subtitle = format!(
                        "{} of {} items completed",
                        completed.len(),
                        data.items.len()
                    );
                    let is_empty = data.items.is_empty();

                    view! {
                        <div class="flex items-center justify-between mb-6">
                            <A href="/" attr:class="btn btn-ghost btn-sm">"← Back to Lists"</A>
                        </div>

                        <div class="mb-6">
                            <h2 class="text-lg">{data.grocery_list_name.clone()}</h2>
                        </div>

                        <ProgressBar
                            value=percentage
                            subtitle=subtitle
                            show_percentage_below=true
                        />

                        <div class="mb-6">
                            <button class="btn btn-primary" on:click=open_add>
                                "+ Add Item"
                            </button>
                        </div>

                        <h3 class="text-xl font-semibold mb-3">"Shopping List"</h3>
                        <div class="space-y-4">
                            {(!pending.is_empty()).then(|| view! {
                                <div>
                                    <h3 class="text-md font-semibold mb-3 underline">"Pending items"</h3>
                                    <div class="space-y-2">
                                        {pending.iter().cloned().map(|item| view! {
                                            <ItemRow
                                                item=item
                                                busy=mutating
                                                on_toggle=Callback::new(toggle_purchase)
                                                on_edit=Callback::new(open_edit)
                                                on_delete=Callback::new(delete_item)
                                            />
                                        }).collect_view()}
                                    </div>
                                </div>
                            })}

                            {(!completed.is_empty()).then(|| view! {
                                <div class="mt-8">
                                    <h3 class="text-md font-semibold mb-3 underline">"Completed items"</h3>
                                    <div class="space-y-2">
                                        {completed.iter().cloned().map(|item| view! {
                                            <ItemRow
                                                item=item
                                                busy=mutating
                                                on_toggle=Callback::new(toggle_purchase)
                                                on_edit=Callback::new(open_edit)
                                                on_delete=Callback::new(delete_item)
                                            />
                                        }).collect_view()}
                                    </div>
                                </div>
                            })}

                            {is_empty.then(|| view! {
                                <div class="text-center py-12">
                                    <h3 class="text-xl font-semibold mb-2">"No items yet"</h3>
                                    <p class="text-base-content/70">
                                        "Add your first item to get started with your grocery list!"
                                    </p>
                                </div>
                            })}
                        </div>
                    }.into_any()
                }
            }}

            <ItemFormModal
                list_id=list_id
                open=modal_open
                editing=editing_item
                on_close=Callback::new(close_modal)
            />
        </div>
    }
}
