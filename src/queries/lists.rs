//! Grocery List Queries
//!
//! Read hook and mutations for the all-lists key.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::cache::QueryState;
use crate::error::ApiError;
use crate::models::GroceryList;

use super::{use_query_client, QueryClient};

/// Reactive read of all grocery lists. A missing or stale cache entry
/// triggers exactly one fetch; identical concurrent reads share it.
pub fn use_grocery_lists() -> Signal<QueryState<Vec<GroceryList>>> {
    let client = use_query_client();

    Effect::new(move |_| {
        if client.lists.with(|cache| cache.wants_fetch(())) {
            client.lists.update(|cache| cache.begin(()));
            spawn_local(async move {
                match api::fetch_grocery_lists().await {
                    Ok(lists) => client.lists.update(|cache| cache.resolve((), lists)),
                    Err(err) => {
                        log::error!("failed to load grocery lists: {err}");
                        client.lists.update(|cache| cache.reject((), err));
                    }
                }
            });
        }
    });

    Signal::derive(move || client.lists.with(|cache| cache.state(())))
}

pub async fn create_list(client: QueryClient, name: String) -> Result<GroceryList, ApiError> {
    let created = api::create_grocery_list(&name).await?;
    client.invalidate_lists();
    Ok(created)
}

pub async fn rename_list(
    client: QueryClient,
    id: i64,
    name: String,
) -> Result<GroceryList, ApiError> {
    let updated = api::update_grocery_list(id, &name).await?;
    client.invalidate_lists();
    Ok(updated)
}

pub async fn delete_list(client: QueryClient, id: i64) -> Result<(), ApiError> {
    api::delete_grocery_list(id).await?;
    client.invalidate_lists();
    Ok(())
}
