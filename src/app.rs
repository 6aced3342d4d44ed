//! Application Shell
//!
//! Provides the query client to the tree and maps the two views to URL
//! paths: the overview at `/` and the list detail at `/lists/:id`.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::pages::{GroceryListPage, HomePage};
use crate::queries::provide_query_client;

#[component]
pub fn App() -> impl IntoView {
    provide_query_client();

    view! {
        <div class="min-h-screen bg-base-100">
            <Router>
                <Routes fallback=|| view! { <p class="p-8">"Page not found."</p> }>
                    <Route path=path!("/") view=HomePage/>
                    <Route path=path!("/lists/:id") view=GroceryListPage/>
                </Routes>
            </Router>
        </div>
    }
}
