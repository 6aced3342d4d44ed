//! Grocery Item Queries
//!
//! Read hook and mutations for the items-of-list keys. Item mutations are
//! addressed by item id on the wire, but invalidation is keyed by the
//! list id supplied at the call site, so callers must pass the id of the
//! list the item belongs to.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::cache::QueryState;
use crate::error::ApiError;
use crate::models::{
    CreateGroceryItemRequest, GroceryItem, GroceryListItems, UpdateGroceryItemRequest,
};

use super::{use_query_client, QueryClient};

/// Reactive read of one list's items (with the list's display name).
pub fn use_grocery_items(list_id: i64) -> Signal<QueryState<GroceryListItems>> {
    let client = use_query_client();

    Effect::new(move |_| {
        if client.items.with(|cache| cache.wants_fetch(list_id)) {
            client.items.update(|cache| cache.begin(list_id));
            spawn_local(async move {
                match api::fetch_list_items(list_id).await {
                    Ok(payload) => client.items.update(|cache| cache.resolve(list_id, payload)),
                    Err(err) => {
                        log::error!("failed to load items of list {list_id}: {err}");
                        client.items.update(|cache| cache.reject(list_id, err));
                    }
                }
            });
        }
    });

    Signal::derive(move || client.items.with(|cache| cache.state(list_id)))
}

pub async fn create_item(
    client: QueryClient,
    list_id: i64,
    request: CreateGroceryItemRequest,
) -> Result<GroceryItem, ApiError> {
    let created = api::create_grocery_item(list_id, &request).await?;
    client.invalidate_items(list_id);
    Ok(created)
}

pub async fn update_item(
    client: QueryClient,
    list_id: i64,
    item_id: i64,
    request: UpdateGroceryItemRequest,
) -> Result<GroceryItem, ApiError> {
    let updated = api::update_grocery_item(item_id, &request).await?;
    client.invalidate_items(list_id);
    Ok(updated)
}

pub async fn delete_item(client: QueryClient, list_id: i64, item_id: i64) -> Result<(), ApiError> {
    api::delete_grocery_item(item_id).await?;
    client.invalidate_items(list_id);
    Ok(())
}

/// Purchase or unpurchase depending on the item's current flag.
pub async fn toggle_purchase(
    client: QueryClient,
    list_id: i64,
    item_id: i64,
    is_purchased: bool,
) -> Result<GroceryItem, ApiError> {
    let updated = if is_purchased {
        api::unpurchase_item(item_id).await?
    } else {
        api::purchase_item(item_id).await?
    };
    client.invalidate_items(list_id);
    Ok(updated)
}
