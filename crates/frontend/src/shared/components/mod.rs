pub mod date_input;
pub mod file_input;
pub mod page_header;
pub mod pagination_controls;
pub mod sort_header;
pub mod stat_card;
