use crate::domain::model::{ApiResponse, OrderStatusQuery};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;

/// Settings an [`ApiClient`](crate::core::client::ApiClient) is built from.
pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn timeout(&self) -> Duration;
    fn default_headers(&self) -> &HashMap<String, String>;
}

#[async_trait]
pub trait OrderStatusService: Send + Sync {
    async fn fetch_order_status(&self, query: &OrderStatusQuery) -> Result<ApiResponse>;
}
