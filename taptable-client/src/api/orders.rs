//! Order API

use shared::MessageResponse;
use shared::models::{
    CreateOrderRequest, CreateOrderResponse, Order, OrderStatus, OrderStatusUpdate,
};

use crate::client::ApiClient;
use crate::error::{ClientError, ClientResult};
use crate::http::RequestOptions;
use crate::routes::render;

impl ApiClient {
    /// Place a customer order.
    ///
    /// The table number from the QR code is checked against the
    /// restaurant's tables first; an unknown number fails with
    /// [`ClientError::TableNotFound`] and no order is created.
    pub async fn create_order(
        &self,
        order: &CreateOrderRequest,
    ) -> ClientResult<CreateOrderResponse> {
        let tables = self.get_public_tables(order.restaurant_id).await?;
        let table = tables
            .iter()
            .find(|t| t.matches_number(&order.table_number))
            .ok_or_else(|| ClientError::TableNotFound {
                restaurant_id: order.restaurant_id,
                table_number: order.table_number.trim().to_string(),
            })?;

        let payload = order.to_payload(&table.number);
        let path = self.routes().order_create.clone();
        let response: CreateOrderResponse = self
            .call(&path, RequestOptions::post().json(&payload)?)
            .await?;
        tracing::info!(
            order_id = response.local_order_id,
            table = %table.number,
            payment = %response.payment_mode,
            "Order placed"
        );
        Ok(response)
    }

    /// Orders of the logged-in restaurant
    pub async fn get_orders(&self) -> ClientResult<Vec<Order>> {
        let path = self.routes().orders.clone();
        self.call(&path, RequestOptions::get()).await
    }

    pub async fn update_order_status(
        &self,
        order_id: i64,
        status: OrderStatus,
    ) -> ClientResult<MessageResponse> {
        let path = render(
            &self.routes().order_status,
            &[("order_id", order_id.to_string().as_str())],
        );
        self.call_message(&path, RequestOptions::put().json(&OrderStatusUpdate { status })?)
            .await
    }
}
