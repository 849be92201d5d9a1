//! Product details dialog (model / view_model / view)

mod model;
mod view;
mod view_model;

pub use view::ProductDetails;
