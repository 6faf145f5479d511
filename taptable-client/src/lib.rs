//! TapTable API client
//!
//! Typed client for the restaurant ordering backend: session token
//! handling, error normalization and one method per backend route.
//!
//! ```no_run
//! use taptable_client::{ApiClient, ClientConfig};
//!
//! # async fn run() -> taptable_client::ClientResult<()> {
//! let client = ApiClient::new(ClientConfig::from_env()?)?;
//! client.login("owner@example.com", "secret").await?;
//! for table in client.get_tables().await? {
//!     println!("{} -> {}", table.number, table.menu_path(1));
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod logger;
pub mod navigator;
pub mod routes;
pub mod session;
pub mod storage;

// Re-exports
pub use api::ImageFile;
pub use client::{ApiClient, ClientBuilder};
pub use config::{ClientConfig, Environment};
pub use error::{ClientError, ClientResult};
pub use http::{RequestBody, RequestOptions, ResponseEnvelope};
pub use navigator::{Navigator, NoopNavigator, RecordingNavigator};
pub use routes::ApiRoutes;
pub use storage::{FileTokenStore, MemoryTokenStore, TOKEN_KEY, TokenStore};

// Re-export shared types for convenience
pub use rust_decimal::Decimal;
pub use shared::models;
pub use shared::{HealthStatus, MessageResponse};
