pub mod api_client;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod dialogs;
pub mod form_utils;
pub mod icons;
pub mod list_utils;
pub mod modal_frame;
pub mod modal_stack;
pub mod notice;
pub mod number_format;
pub mod server_pager;
