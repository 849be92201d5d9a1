//! Brand details dialog
//!
//! MVVM split:
//! - model.rs: form fields and validation
//! - view_model.rs: signals, load and save commands
//! - view.rs: Leptos component

mod model;
mod view;
mod view_model;

pub use view::BrandDetails;
