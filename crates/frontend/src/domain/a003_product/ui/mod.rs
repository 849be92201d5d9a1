pub mod details;
pub mod items;
pub mod list;
