pub mod context;
pub mod gate;
pub mod guard;
pub mod route_tracker;
pub mod storage;
pub mod store;
pub mod token;
