//! Restaurant account API

use shared::models::{
    AuthResponse, LoginRequest, ProfileUpgrade, ProfileUpgradeResponse, RegisterRequest,
};

use crate::client::ApiClient;
use crate::error::ClientResult;
use crate::http::RequestOptions;

impl ApiClient {
    /// Log in and keep the issued token for subsequent calls
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<AuthResponse> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let path = self.routes().login.clone();
        let response: AuthResponse = self
            .call(&path, RequestOptions::post().json(&request)?)
            .await?;
        self.set_token(&response.token)?;
        tracing::info!(restaurant_id = response.restaurant.id, "Logged in");
        Ok(response)
    }

    /// Create a restaurant account and keep the issued token
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> ClientResult<AuthResponse> {
        let request = RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        let path = self.routes().register.clone();
        let response: AuthResponse = self
            .call(&path, RequestOptions::post().json(&request)?)
            .await?;
        self.set_token(&response.token)?;
        tracing::info!(restaurant_id = response.restaurant.id, "Registered");
        Ok(response)
    }

    /// Update the account profile. A reissued token replaces the current one.
    pub async fn upgrade_profile(
        &self,
        profile: &ProfileUpgrade,
    ) -> ClientResult<ProfileUpgradeResponse> {
        let path = self.routes().profile_upgrade.clone();
        let response: Option<ProfileUpgradeResponse> = self
            .call(&path, RequestOptions::post().json(profile)?)
            .await?;
        let response = response.unwrap_or_default();
        if let Some(token) = response.token.as_deref() {
            self.set_token(token)?;
        }
        Ok(response)
    }

    /// End the session locally. The backend keeps no session state.
    pub fn logout(&self) -> ClientResult<()> {
        self.clear_token()
    }
}
