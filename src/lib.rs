pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::theme::ThemeConfig;
pub use config::toml_config::AppConfig;
pub use config::ClientConfig;
pub use crate::core::client::{ApiClient, RequestOptions};
pub use crate::core::order_service::OrderService;
pub use domain::model::{ApiResponse, OrderStatusQuery};
pub use domain::ports::{ConfigProvider, OrderStatusService};
pub use utils::error::{ApiError, Result};
