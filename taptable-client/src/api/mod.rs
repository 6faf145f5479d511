//! Endpoint methods
//!
//! One method per backend route, grouped by dashboard area. Each is a thin
//! wrapper over [`ApiClient::request`](crate::ApiClient::request) that
//! renders the route template and decodes the typed response.

mod analytics;
mod auth;
mod menu;
mod orders;
mod public;
mod settings;
mod tables;
mod upload;

pub use upload::ImageFile;

use shared::MessageResponse;

use crate::client::ApiClient;
use crate::error::ClientResult;
use crate::http::RequestOptions;

impl ApiClient {
    /// Call a route that answers `{"message": ...}`, or nothing at all
    pub(crate) async fn call_message(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> ClientResult<MessageResponse> {
        Ok(self
            .call::<Option<MessageResponse>>(path, options)
            .await?
            .unwrap_or_default())
    }
}
