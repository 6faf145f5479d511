//! Restaurant settings API

use shared::MessageResponse;
use shared::models::{RestaurantSettings, SettingsUpdate};

use crate::client::ApiClient;
use crate::error::ClientResult;
use crate::http::RequestOptions;

impl ApiClient {
    pub async fn get_settings(&self) -> ClientResult<RestaurantSettings> {
        let path = self.routes().settings.clone();
        self.call(&path, RequestOptions::get()).await
    }

    /// Update settings; unset fields are left unchanged
    pub async fn update_settings(&self, update: &SettingsUpdate) -> ClientResult<MessageResponse> {
        let path = self.routes().settings.clone();
        self.call_message(&path, RequestOptions::post().json(update)?)
            .await
    }
}
