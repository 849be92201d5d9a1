//! Shared DTOs exchanged with the shop REST backend.
//!
//! The layout follows the UI: `domain` holds catalog/sales aggregates,
//! `system` holds auth, users and roles, `dashboards` holds analytics
//! responses, `shared` holds cross-cutting wire types (pagination).

pub mod dashboards;
pub mod domain;
pub mod shared;
pub mod system;
