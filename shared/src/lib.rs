//! Shared types for TapTable
//!
//! Wire types for every backend route used by the ordering client:
//! restaurant accounts, dining tables, menu items, orders, analytics
//! and settings, plus the generic response envelopes.

pub mod error;
pub mod models;
pub mod response;
pub mod util;

// Re-exports
pub use error::InvalidVariant;
pub use response::{HealthStatus, MessageResponse};
pub use serde::{Deserialize, Serialize};
