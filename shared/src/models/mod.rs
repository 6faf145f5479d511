//! Data models
//!
//! Request and response bodies for the backend routes. Field names follow
//! the backend's JSON (which mixes snake_case and camelCase between
//! routes); aliases absorb the differences between backend revisions.

pub mod analytics;
pub mod dining_table;
pub mod menu_item;
pub mod order;
pub mod restaurant;
pub mod settings;
pub mod upload;

// Re-exports
pub use analytics::*;
pub use dining_table::*;
pub use menu_item::*;
pub use order::*;
pub use restaurant::*;
pub use settings::*;
pub use upload::*;
