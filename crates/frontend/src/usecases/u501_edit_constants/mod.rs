//! Constants editor: pin and order products at the top of a collection
//!
//! - api.rs: filter categories and save endpoints
//! - board.rs: two-list reorder/transfer engine (pure)
//! - view_model.rs: ViewModel with commands and state
//! - filter_panel.rs, view.rs: Leptos components

pub mod api;
pub mod board;
mod filter_panel;
mod view;
pub mod view_model;

pub use view::EditConstantsPage;
