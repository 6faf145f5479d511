//! Analytics API

use shared::models::{Analytics, AnalyticsQuery};

use crate::client::ApiClient;
use crate::error::ClientResult;
use crate::http::RequestOptions;
use crate::routes::render;

impl ApiClient {
    /// Dashboard figures for a restaurant, filtered by `query`
    pub async fn get_analytics(
        &self,
        restaurant_id: i64,
        query: &AnalyticsQuery,
    ) -> ClientResult<Analytics> {
        let path = render(
            &self.routes().analytics,
            &[("restaurant_id", restaurant_id.to_string().as_str())],
        );
        self.call(&path, RequestOptions::get().query(query.to_pairs()))
            .await
    }
}
