//! Query/Mutation Layer
//!
//! A context-provided [`QueryClient`] owns one reactive cache per read
//! key: all grocery lists, and items-of-list keyed by list id. Mutations
//! invalidate the dependent key on success; the next render re-fetches.

mod items;
mod lists;

pub use items::{create_item, delete_item, toggle_purchase, update_item, use_grocery_items};
pub use lists::{create_list, delete_list, rename_list, use_grocery_lists};

use leptos::prelude::*;

use crate::cache::CacheMap;
use crate::models::{GroceryList, GroceryListItems};

/// Shared cache handle provided via context to all views.
#[derive(Clone, Copy)]
pub struct QueryClient {
    pub(crate) lists: RwSignal<CacheMap<(), Vec<GroceryList>>>,
    pub(crate) items: RwSignal<CacheMap<i64, GroceryListItems>>,
}

impl QueryClient {
    pub fn new() -> Self {
        Self {
            lists: RwSignal::new(CacheMap::new()),
            items: RwSignal::new(CacheMap::new()),
        }
    }

    /// Mark the all-lists read stale; the overview re-fetches on next render.
    pub fn invalidate_lists(&self) {
        self.lists.update(|cache| cache.invalidate(()));
    }

    /// Mark one list's items read stale. The key is the list id supplied
    /// by the mutation call site.
    pub fn invalidate_items(&self, list_id: i64) {
        self.items.update(|cache| cache.invalidate(list_id));
    }
}

impl Default for QueryClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Provide a fresh client to the component tree.
pub fn provide_query_client() {
    provide_context(QueryClient::new());
}

/// Get the query client from context.
pub fn use_query_client() -> QueryClient {
    expect_context::<QueryClient>()
}
