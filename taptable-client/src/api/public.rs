//! Customer-facing API
//!
//! Routes reached from a table's QR code. None of them needs a session,
//! though a held token is still sent.

use shared::HealthStatus;
use shared::models::{DiningTable, MenuItem, MenuListing, Restaurant, TableMenu};

use crate::client::ApiClient;
use crate::error::ClientResult;
use crate::http::RequestOptions;
use crate::routes::render;

impl ApiClient {
    /// Menu shown to customers. A restaurant without available items
    /// yields an empty list.
    pub async fn get_public_menu(&self, restaurant_id: i64) -> ClientResult<Vec<MenuItem>> {
        let path = render(
            &self.routes().public_menu,
            &[("restaurant_id", restaurant_id.to_string().as_str())],
        );
        let listing: MenuListing = self.call(&path, RequestOptions::get()).await?;
        Ok(listing.into_items())
    }

    /// Menu for one table, as opened from its QR code
    pub async fn get_table_menu(
        &self,
        restaurant_id: i64,
        table_number: &str,
    ) -> ClientResult<TableMenu> {
        let path = render(
            &self.routes().table_menu,
            &[
                ("restaurant_id", restaurant_id.to_string().as_str()),
                ("table_number", table_number.trim()),
            ],
        );
        self.call(&path, RequestOptions::get()).await
    }

    /// Table list used to validate a customer's table number
    pub async fn get_public_tables(&self, restaurant_id: i64) -> ClientResult<Vec<DiningTable>> {
        let path = render(
            &self.routes().public_tables,
            &[("restaurant_id", restaurant_id.to_string().as_str())],
        );
        self.call(&path, RequestOptions::get()).await
    }

    pub async fn get_restaurant(&self, restaurant_id: i64) -> ClientResult<Restaurant> {
        let path = render(
            &self.routes().restaurant,
            &[("restaurant_id", restaurant_id.to_string().as_str())],
        );
        self.call(&path, RequestOptions::get()).await
    }

    pub async fn health_check(&self) -> ClientResult<HealthStatus> {
        let path = self.routes().health.clone();
        self.call(&path, RequestOptions::get()).await
    }
}
