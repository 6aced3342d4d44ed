//! UI Components
//!
//! Reusable Leptos components.

mod grocery_list_card;
mod inline_edit_input;
mod item_form_modal;
mod item_row;
mod new_list_button;
mod new_list_modal;
mod progress_bar;
mod stat_card;

pub use grocery_list_card::GroceryListCard;
pub use inline_edit_input::InlineEditInput;
pub use item_form_modal::ItemFormModal;
pub use item_row::ItemRow;
pub use new_list_button::NewListButton;
pub use new_list_modal::NewListModal;
pub use progress_bar::ProgressBar;
pub use stat_card::StatCard;
