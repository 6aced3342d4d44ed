//! Domain Models
//!
//! Data structures matching the server's JSON payloads, plus the pure
//! derived computations the views render.

use serde::{Deserialize, Serialize};

/// Grocery item (matches the server representation)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroceryItem {
    pub id: i64,
    pub name: String,
    pub quantity: u32,
    pub is_purchased: bool,
    /// Set by the server when the item is purchased, cleared on unpurchase
    pub purchased_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Grocery list with its items (matches the server representation)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroceryList {
    pub id: i64,
    pub name: String,
    pub grocery_items: Vec<GroceryItem>,
    pub created_at: String,
    pub updated_at: String,
}

impl GroceryList {
    pub fn completion_percentage(&self) -> u32 {
        completion_percentage(&self.grocery_items)
    }

    pub fn purchased_count(&self) -> usize {
        self.grocery_items.iter().filter(|item| item.is_purchased).count()
    }
}

/// Composite payload of the items-of-list endpoint: the list's display
/// name rides along so the detail view needs no second round trip.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GroceryListItems {
    pub grocery_list_name: String,
    pub items: Vec<GroceryItem>,
}

// ========================
// Request/Error Payloads
// ========================

/// Body for creating or renaming a list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroceryListRequest {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateGroceryItemRequest {
    pub name: String,
    pub quantity: u32,
}

/// Partial item patch; absent fields are omitted from the JSON body
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateGroceryItemRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
}

/// Structured error body some endpoints return on failure
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
}

// ========================
// Derived Computations
// ========================

/// Trim a name field, rejecting blank input before any write is issued.
pub fn normalized_name(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// round(100 * purchased / total); 0 when the list is empty
pub fn completion_percentage(items: &[GroceryItem]) -> u32 {
    if items.is_empty() {
        return 0;
    }
    let purchased = items.iter().filter(|item| item.is_purchased).count();
    ((purchased as f64 / items.len() as f64) * 100.0).round() as u32
}

/// Split items into (pending, completed), keeping server order within each group.
pub fn partition_by_purchase(items: &[GroceryItem]) -> (Vec<GroceryItem>, Vec<GroceryItem>) {
    items.iter().cloned().partition(|item| !item.is_purchased)
}

/// Aggregate numbers for the overview's stat cards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverviewStats {
    pub total_lists: usize,
    pub total_items: usize,
    pub completed_items: usize,
}

pub fn overview_stats(lists: &[GroceryList]) -> OverviewStats {
    OverviewStats {
        total_lists: lists.len(),
        total_items: lists.iter().map(|list| list.grocery_items.len()).sum(),
        completed_items: lists.iter().map(|list| list.purchased_count()).sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: i64, name: &str, quantity: u32, is_purchased: bool) -> GroceryItem {
        GroceryItem {
            id,
            name: name.to_string(),
            quantity,
            is_purchased,
            purchased_at: is_purchased.then(|| "2026-08-01T10:00:00Z".to_string()),
            created_at: "2026-08-01T09:00:00Z".to_string(),
            updated_at: "2026-08-01T10:00:00Z".to_string(),
        }
    }

    fn make_list(id: i64, name: &str, items: Vec<GroceryItem>) -> GroceryList {
        GroceryList {
            id,
            name: name.to_string(),
            grocery_items: items,
            created_at: "2026-08-01T09:00:00Z".to_string(),
            updated_at: "2026-08-01T09:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_normalized_name_trims() {
        assert_eq!(normalized_name("  Milk "), Some("Milk".to_string()));
    }

    #[test]
    fn test_normalized_name_rejects_blank() {
        assert_eq!(normalized_name(""), None);
        assert_eq!(normalized_name("   "), None);
        assert_eq!(normalized_name("\t\n"), None);
    }

    #[test]
    fn test_completion_percentage_empty_is_zero() {
        assert_eq!(completion_percentage(&[]), 0);
    }

    #[test]
    fn test_completion_percentage_rounds() {
        let items = vec![
            make_item(1, "Milk", 1, true),
            make_item(2, "Bread", 2, false),
            make_item(3, "Eggs", 12, false),
        ];
        // 1 of 3 -> 33, not 33.33
        assert_eq!(completion_percentage(&items), 33);

        let items = vec![
            make_item(1, "Milk", 1, true),
            make_item(2, "Bread", 2, true),
            make_item(3, "Eggs", 12, false),
        ];
        // 2 of 3 -> 67
        assert_eq!(completion_percentage(&items), 67);
    }

    #[test]
    fn test_partition_keeps_server_order() {
        let items = vec![
            make_item(1, "Milk", 1, false),
            make_item(2, "Bread", 2, true),
            make_item(3, "Eggs", 12, false),
            make_item(4, "Butter", 1, true),
        ];

        let (pending, completed) = partition_by_purchase(&items);

        assert_eq!(pending.iter().map(|i| i.id).collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(completed.iter().map(|i| i.id).collect::<Vec<_>>(), vec![2, 4]);
    }

    #[test]
    fn test_toggle_moves_item_between_groups_only() {
        let mut items = vec![
            make_item(1, "Milk", 1, false),
            make_item(2, "Bread", 2, false),
        ];

        let (pending, completed) = partition_by_purchase(&items);
        assert_eq!(pending.len(), 2);
        assert!(completed.is_empty());

        items[1].is_purchased = true;
        let (pending, completed) = partition_by_purchase(&items);
        assert_eq!(pending.iter().map(|i| i.id).collect::<Vec<_>>(), vec![1]);
        assert_eq!(completed.iter().map(|i| i.id).collect::<Vec<_>>(), vec![2]);

        items[1].is_purchased = false;
        let (pending, completed) = partition_by_purchase(&items);
        assert_eq!(pending.iter().map(|i| i.id).collect::<Vec<_>>(), vec![1, 2]);
        assert!(completed.is_empty());
    }

    #[test]
    fn test_overview_stats_scenario() {
        // "Weekly Shopping" with Milk x1 and Bread x2, Bread purchased
        let list = make_list(
            1,
            "Weekly Shopping",
            vec![
                make_item(1, "Milk", 1, false),
                make_item(2, "Bread", 2, true),
            ],
        );
        let lists = vec![list];

        let stats = overview_stats(&lists);
        assert_eq!(stats.total_lists, 1);
        assert_eq!(stats.total_items, 2);
        assert_eq!(stats.completed_items, 1);
        assert_eq!(lists[0].completion_percentage(), 50);
    }

    #[test]
    fn test_item_deserializes_with_null_purchased_at() {
        let json = r#"{
            "id": 7,
            "name": "Milk",
            "quantity": 1,
            "is_purchased": false,
            "purchased_at": null,
            "created_at": "2026-08-01T09:00:00Z",
            "updated_at": "2026-08-01T09:00:00Z"
        }"#;

        let item: GroceryItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, 7);
        assert_eq!(item.quantity, 1);
        assert!(!item.is_purchased);
        assert_eq!(item.purchased_at, None);
    }

    #[test]
    fn test_list_items_payload_deserializes() {
        let json = r#"{
            "grocery_list_name": "Weekly Shopping",
            "items": [
                {
                    "id": 1,
                    "name": "Bread",
                    "quantity": 2,
                    "is_purchased": true,
                    "purchased_at": "2026-08-01T10:00:00Z",
                    "created_at": "2026-08-01T09:00:00Z",
                    "updated_at": "2026-08-01T10:00:00Z"
                }
            ]
        }"#;

        let payload: GroceryListItems = serde_json::from_str(json).unwrap();
        assert_eq!(payload.grocery_list_name, "Weekly Shopping");
        assert_eq!(payload.items.len(), 1);
        assert!(payload.items[0].is_purchased);
    }

    #[test]
    fn test_update_request_omits_absent_fields() {
        let patch = UpdateGroceryItemRequest {
            name: None,
            quantity: Some(3),
        };
        let body = serde_json::to_string(&patch).unwrap();
        assert_eq!(body, r#"{"quantity":3}"#);
    }
}
