use crate::core::client::{ApiClient, RequestOptions};
use crate::core::{ApiResponse, OrderStatusQuery, OrderStatusService};
use crate::utils::error::Result;
use std::fmt::Display;
use std::future::Future;
use tokio::task::JoinHandle;

pub const ORDER_STATUS_PATH: &str = "/order-status";

/// Order status lookups against the shared [`ApiClient`].
///
/// Every call is exactly one GET. Nothing is retried, cached or logged here,
/// and failures reach the caller as returned by the client.
#[derive(Debug, Clone)]
pub struct OrderService {
    client: ApiClient,
}

impl OrderService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Returns the pending request; it runs when the caller awaits it.
    pub fn get_order_status(
        &self,
        customer_number: impl Display,
        invoice_number: impl Display,
    ) -> impl Future<Output = Result<ApiResponse>> + Send + '_ {
        let query = OrderStatusQuery::new(customer_number, invoice_number);
        async move {
            self.get_order_status_with(&query, &RequestOptions::default())
                .await
        }
    }

    pub async fn get_order_status_with(
        &self,
        query: &OrderStatusQuery,
        options: &RequestOptions,
    ) -> Result<ApiResponse> {
        self.client.get(ORDER_STATUS_PATH, query, options).await
    }

    /// Starts the request on the runtime right away and hands back its handle.
    pub fn spawn_order_status(
        &self,
        customer_number: impl Display,
        invoice_number: impl Display,
    ) -> JoinHandle<Result<ApiResponse>> {
        let client = self.client.clone();
        let query = OrderStatusQuery::new(customer_number, invoice_number);
        tokio::spawn(async move {
            client
                .get(ORDER_STATUS_PATH, &query, &RequestOptions::default())
                .await
        })
    }
}

#[async_trait::async_trait]
impl OrderStatusService for OrderService {
    async fn fetch_order_status(&self, query: &OrderStatusQuery) -> Result<ApiResponse> {
        self.get_order_status_with(query, &RequestOptions::default())
            .await
    }
}
