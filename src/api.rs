//! REST API Client
//!
//! One HTTP call per domain operation against the grocery service. No
//! retries, no timeouts, no batching: a failed call rejects with an
//! [`ApiError`] and the caller decides what to surface.

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::models::{
    ApiErrorBody, CreateGroceryItemRequest, GroceryItem, GroceryList, GroceryListItems,
    GroceryListRequest, UpdateGroceryItemRequest,
};

const DEFAULT_BASE_URL: &str = "http://localhost:5001/api/v1";

/// Base URL baked in at build time, with a local default.
pub fn base_url() -> &'static str {
    option_env!("GROCERY_API_BASE_URL").unwrap_or(DEFAULT_BASE_URL)
}

// ========================
// Endpoint Layout
// ========================

fn lists_url() -> String {
    format!("{}/grocery-lists", base_url())
}

fn list_url(id: i64) -> String {
    format!("{}/grocery-lists/{}", base_url(), id)
}

fn list_items_url(list_id: i64) -> String {
    format!("{}/grocery-lists/{}/items", base_url(), list_id)
}

fn item_url(item_id: i64) -> String {
    format!("{}/grocery-items/{}", base_url(), item_id)
}

fn purchase_url(item_id: i64) -> String {
    format!("{}/grocery-items/{}/purchase", base_url(), item_id)
}

fn unpurchase_url(item_id: i64) -> String {
    format!("{}/grocery-items/{}/unpurchase", base_url(), item_id)
}

// ========================
// Shared Plumbing
// ========================

async fn send(request: reqwest::RequestBuilder) -> Result<Response, ApiError> {
    request
        .send()
        .await
        .map_err(|err| ApiError::Transport(err.to_string()))
}

async fn json_or<T: DeserializeOwned>(
    response: Response,
    failure: &'static str,
) -> Result<T, ApiError> {
    if !response.status().is_success() {
        return Err(ApiError::Failed(failure));
    }
    response
        .json()
        .await
        .map_err(|err| ApiError::Transport(err.to_string()))
}

async fn empty_or(response: Response, failure: &'static str) -> Result<(), ApiError> {
    if response.status().is_success() {
        Ok(())
    } else {
        Err(ApiError::Failed(failure))
    }
}

// ========================
// Grocery Lists
// ========================

pub async fn fetch_grocery_lists() -> Result<Vec<GroceryList>, ApiError> {
    let response = send(Client::new().get(lists_url())).await?;
    json_or(response, "Failed to fetch grocery lists").await
}

pub async fn create_grocery_list(name: &str) -> Result<GroceryList, ApiError> {
    let body = GroceryListRequest {
        name: name.to_string(),
    };
    let response = send(Client::new().post(lists_url()).json(&body)).await?;
    json_or(response, "Failed to create grocery list").await
}

pub async fn update_grocery_list(id: i64, name: &str) -> Result<GroceryList, ApiError> {
    let body = GroceryListRequest {
        name: name.to_string(),
    };
    let response = send(Client::new().put(list_url(id)).json(&body)).await?;
    json_or(response, "Failed to update grocery list").await
}

pub async fn delete_grocery_list(id: i64) -> Result<(), ApiError> {
    let response = send(Client::new().delete(list_url(id))).await?;
    empty_or(response, "Failed to delete grocery list").await
}

// ========================
// Grocery Items
// ========================

/// Fetch a list's items along with the list's display name. Unlike the
/// other reads, a structured `{error}` body is surfaced verbatim so the
/// detail view can distinguish "list not found" from a generic failure.
pub async fn fetch_list_items(list_id: i64) -> Result<GroceryListItems, ApiError> {
    let response = send(Client::new().get(list_items_url(list_id))).await?;
    if !response.status().is_success() {
        if let Ok(body) = response.json::<ApiErrorBody>().await {
            return Err(ApiError::Server(body.error));
        }
        return Err(ApiError::Failed("Failed to fetch grocery items"));
    }
    response
        .json()
        .await
        .map_err(|err| ApiError::Transport(err.to_string()))
}

pub async fn create_grocery_item(
    list_id: i64,
    request: &CreateGroceryItemRequest,
) -> Result<GroceryItem, ApiError> {
    let response = send(Client::new().post(list_items_url(list_id)).json(request)).await?;
    json_or(response, "Failed to create grocery item").await
}

/// Partial update addressed by item id alone, not by list id.
pub async fn update_grocery_item(
    item_id: i64,
    request: &UpdateGroceryItemRequest,
) -> Result<GroceryItem, ApiError> {
    let response = send(Client::new().patch(item_url(item_id)).json(request)).await?;
    json_or(response, "Failed to update grocery item").await
}

pub async fn delete_grocery_item(item_id: i64) -> Result<(), ApiError> {
    let response = send(Client::new().delete(item_url(item_id))).await?;
    empty_or(response, "Failed to delete grocery item").await
}

pub async fn purchase_item(item_id: i64) -> Result<GroceryItem, ApiError> {
    toggle_purchase_state(purchase_url(item_id), "Failed to purchase grocery item").await
}

pub async fn unpurchase_item(item_id: i64) -> Result<GroceryItem, ApiError> {
    toggle_purchase_state(unpurchase_url(item_id), "Failed to unpurchase grocery item").await
}

async fn toggle_purchase_state(url: String, failure: &'static str) -> Result<GroceryItem, ApiError> {
    let response = send(Client::new().post(url)).await?;
    if response.status() == StatusCode::NOT_FOUND {
        return Err(ApiError::NotFound("Grocery item not found"));
    }
    json_or(response, failure).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        assert!(base_url().ends_with("/api/v1"));
    }

    #[test]
    fn test_list_endpoints_layout() {
        assert_eq!(lists_url(), format!("{}/grocery-lists", base_url()));
        assert_eq!(list_url(4), format!("{}/grocery-lists/4", base_url()));
        assert_eq!(
            list_items_url(7),
            format!("{}/grocery-lists/7/items", base_url())
        );
    }

    #[test]
    fn test_item_endpoints_are_addressed_by_item_id_alone() {
        assert_eq!(item_url(12), format!("{}/grocery-items/12", base_url()));
        assert_eq!(
            purchase_url(12),
            format!("{}/grocery-items/12/purchase", base_url())
        );
        assert_eq!(
            unpurchase_url(12),
            format!("{}/grocery-items/12/unpurchase", base_url())
        );
    }
}
