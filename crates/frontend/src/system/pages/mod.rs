pub mod error;
pub mod login;
