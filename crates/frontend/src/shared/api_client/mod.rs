//! REST client shared by every page
//!
//! - `client.rs`: [`ApiClient`] with the CRUD and auth helpers
//! - `form.rs`: multipart bodies built from DTOs
//! - `pagination.rs`: `x-pagination` header and page query encoding
//! - `error.rs`: [`ApiError`] and the redirect each error triggers
//! - `interceptor.rs`: applies those redirects

mod client;
mod error;
mod form;
mod interceptor;
mod pagination;

pub use client::ApiClient;
pub use error::{ApiError, ApiResult, ErrorReason, Redirect};
pub use form::FormBody;
pub use pagination::{parse_pagination_header, query_suffix};
