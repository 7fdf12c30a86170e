pub mod api;
pub mod autocomplete;
pub mod state;
pub mod ui;
