pub mod api;
pub mod claims;
pub mod ui;
