pub mod admin_pages;
pub mod routes;
