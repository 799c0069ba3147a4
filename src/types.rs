//! Typed domain payloads exchanged with the API.
//!
//! Upstream schemas evolve without notice, so every struct keeps its fields
//! optional and carries a flattened `extra` map that round-trips fields the typed
//! core does not model yet.

pub mod calendar;
pub mod common;
pub mod conversations;
pub mod coupons;
pub mod financial;
pub mod listings;
pub mod logs;
pub mod reservations;
pub mod tasks;
pub mod webhooks;

pub use common::{ApiResponse, Flag, ListParams, Pagination};
