//! Menu management API

use shared::MessageResponse;
use shared::models::{
    DietaryInfoUpdate, MenuItem, MenuItemCreate, MenuItemCreated, MenuItemUpdate, MenuListing,
};

use crate::client::ApiClient;
use crate::error::ClientResult;
use crate::http::RequestOptions;
use crate::routes::render;

impl ApiClient {
    /// Full menu of a restaurant, unavailable items included
    pub async fn get_menu(&self, restaurant_id: i64) -> ClientResult<Vec<MenuItem>> {
        let path = render(
            &self.routes().menu,
            &[("restaurant_id", restaurant_id.to_string().as_str())],
        );
        let listing: MenuListing = self.call(&path, RequestOptions::get()).await?;
        Ok(listing.into_items())
    }

    /// Add a menu item. The backend classifies its dietary flags.
    pub async fn create_menu_item(&self, item: &MenuItemCreate) -> ClientResult<MenuItemCreated> {
        let path = self.routes().menu_create.clone();
        self.call(&path, RequestOptions::post().json(item)?).await
    }

    pub async fn update_menu_item(
        &self,
        item_id: i64,
        update: &MenuItemUpdate,
    ) -> ClientResult<MessageResponse> {
        let path = render(
            &self.routes().menu_item,
            &[("item_id", item_id.to_string().as_str())],
        );
        self.call_message(&path, RequestOptions::put().json(update)?)
            .await
    }

    pub async fn delete_menu_item(&self, item_id: i64) -> ClientResult<MessageResponse> {
        let path = render(
            &self.routes().menu_item,
            &[("item_id", item_id.to_string().as_str())],
        );
        self.call_message(&path, RequestOptions::delete()).await
    }

    /// Override the dietary flags of one item
    pub async fn update_dietary_info(
        &self,
        item_id: i64,
        dietary: &DietaryInfoUpdate,
    ) -> ClientResult<MessageResponse> {
        let path = render(
            &self.routes().menu_dietary,
            &[("item_id", item_id.to_string().as_str())],
        );
        self.call_message(&path, RequestOptions::put().json(dietary)?)
            .await
    }

    /// Re-run dietary classification over a restaurant's whole menu
    pub async fn reclassify_menu(&self, restaurant_id: i64) -> ClientResult<MessageResponse> {
        let path = render(
            &self.routes().menu_reclassify,
            &[("restaurant_id", restaurant_id.to_string().as_str())],
        );
        self.call_message(&path, RequestOptions::post()).await
    }
}
