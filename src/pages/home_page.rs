//! Home Page
//!
//! Overview dashboard: summary stat cards, the grid of list cards, and
//! the create-list modal. Mutations run through the query layer so the
//! overview re-fetches after every successful write.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::cache::QueryState;
use crate::components::{GroceryListCard, NewListButton, NewListModal, StatCard};
use crate::models::overview_stats;
use crate::queries::{self, use_grocery_lists, use_query_client};

#[component]
pub fn HomePage() -> impl IntoView {
    let client = use_query_client();
    let lists_query = use_grocery_lists();

    // Modal and per-mutation pending flags
    let (show_new_list_modal, set_show_new_list_modal) = signal(false);
    let (creating, set_creating) = signal(false);
    let (updating, set_updating) = signal(false);
    let (deleting, set_deleting) = signal(false);

    let create_list = move |name: String| {
        if creating.get() {
            return;
        }
        set_creating.set(true);
        spawn_local(async move {
            match queries::create_list(client, name).await {
                Ok(_) => set_show_new_list_modal.set(false),
                Err(err) => log::error!("failed to create list: {err}"),
            }
            set_creating.set(false);
        });
    };

    let rename_list = move |(id, name): (i64, String)| {
        if updating.get() {
            return;
        }
        set_updating.set(true);
        spawn_local(async move {
            if let Err(err) = queries::rename_list(client, id, name).await {
                log::error!("failed to rename list: {err}");
            }
            set_updating.set(false);
        });
    };

    let delete_list = move |id: i64| {
        if deleting.get() {
            return;
        }
        set_deleting.set(true);
        spawn_local(async move {
            if let Err(err) = queries::delete_list(client, id).await {
                log::error!("failed to delete list: {err}");
            }
            set_deleting.set(false);
        });
    };

    view! {
        <div class="container mx-auto px-4 py-8 max-w-6xl">
            {move || match lists_query.get() {
                QueryState::Loading => view! {
                    <div class="flex justify-center items-center min-h-[400px]">
                        <div class="text-center">
                            <span class="loading loading-spinner loading-lg text-primary mb-4"></span>
                            <p class="text-lg">"Loading grocery lists..."</p>
                        </div>
                    </div>
                }.into_any(),
                QueryState::Failed(_) => view! {
                    <div class="alert alert-error">
                        <span>"Failed to load grocery lists. Please try again later."</span>
                    </div>
                }.into_any(),
                QueryState::Ready(lists) | QueryState::Refreshing(lists) => {
                    let stats = overview_stats(&lists);
                    view! {
                        <div class="flex flex-col sm:flex-row justify-between items-start sm:items-center mb-8 gap-4">
                            <h1 class="text-4xl font-bold text-primary mb-2">"🛒 Manage Grocery Lists"</h1>
                            <NewListButton
                                disabled=creating
                                on_click=Callback::new(move |_| set_show_new_list_modal.set(true))
                            />
                        </div>

                        <div class="grid grid-cols-1 md:grid-cols-3 gap-6 mb-8">
                            <StatCard icon="📋" title="Total Lists" value=stats.total_lists/>
                            <StatCard
                                icon="🛍"
                                title="Total Items"
                                value=stats.total_items
                                color_class="text-secondary"
                            />
                            <StatCard
                                icon="✅"
                                title="Completed Items"
                                value=stats.completed_items
                                color_class="text-accent"
                            />
                        </div>

                        {if lists.is_empty() {
                            view! {
                                <div class="text-center py-16">
                                    <div class="text-6xl mb-4">"📝"</div>
                                    <h3 class="text-2xl font-semibold mb-2">"No grocery lists yet"</h3>
                                    <p class="text-base-content/70 mb-6">
                                        "Create your first grocery list to get started"
                                    </p>
                                    <NewListButton
                                        on_click=Callback::new(move |_| set_show_new_list_modal.set(true))
                                    />
                                </div>
                            }.into_any()
                        } else {
                            view! {
                                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                                    {lists.into_iter().map(|list| view! {
                                        <GroceryListCard
                                            list=list
                                            on_delete=Callback::new(delete_list)
                                            on_update=Callback::new(rename_list)
                                            is_deleting=deleting
                                            is_updating=updating
                                        />
                                    }).collect_view()}
                                </div>
                            }.into_any()
                        }}
                    }.into_any()
                }
            }}

            <NewListModal
                open=show_new_list_modal
                creating=creating
                on_close=Callback::new(move |_| set_show_new_list_modal.set(false))
                on_create=Callback::new(create_list)
            />
        </div>
    }
}
