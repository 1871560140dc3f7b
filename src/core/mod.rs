pub mod client;
pub mod order_service;

pub use crate::domain::model::{ApiResponse, OrderStatusQuery};
pub use crate::domain::ports::{ConfigProvider, OrderStatusService};
pub use crate::utils::error::Result;
