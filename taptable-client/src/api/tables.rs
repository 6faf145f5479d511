//! Dining table API

use shared::MessageResponse;
use shared::models::{DiningTable, DiningTableCreate, TableEnvelope};

use crate::client::ApiClient;
use crate::error::ClientResult;
use crate::http::RequestOptions;
use crate::routes::render;

impl ApiClient {
    /// Tables of the logged-in restaurant
    pub async fn get_tables(&self) -> ClientResult<Vec<DiningTable>> {
        let path = self.routes().tables.clone();
        self.call(&path, RequestOptions::get()).await
    }

    pub async fn get_tables_for_restaurant(
        &self,
        restaurant_id: i64,
    ) -> ClientResult<Vec<DiningTable>> {
        let path = render(
            &self.routes().restaurant_tables,
            &[("restaurant_id", restaurant_id.to_string().as_str())],
        );
        self.call(&path, RequestOptions::get()).await
    }

    /// Add a table; the backend generates its QR code
    pub async fn add_table(&self, table: &DiningTableCreate) -> ClientResult<TableEnvelope> {
        let path = self.routes().tables.clone();
        self.call(&path, RequestOptions::post().json(table)?).await
    }

    pub async fn delete_table(&self, table_id: i64) -> ClientResult<MessageResponse> {
        let path = render(
            &self.routes().table,
            &[("table_id", table_id.to_string().as_str())],
        );
        self.call_message(&path, RequestOptions::delete()).await
    }

    /// Issue a fresh QR code for a table
    pub async fn regenerate_table_qr(&self, table_id: i64) -> ClientResult<TableEnvelope> {
        let path = render(
            &self.routes().table_regenerate,
            &[("table_id", table_id.to_string().as_str())],
        );
        self.call(&path, RequestOptions::post()).await
    }
}
