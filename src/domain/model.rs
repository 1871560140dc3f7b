use crate::utils::error::Result;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Display;

/// Query string of `GET /order-status`. Values are passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderStatusQuery {
    pub customer_number: String,
    pub invoice_number: String,
}

impl OrderStatusQuery {
    pub fn new(customer_number: impl Display, invoice_number: impl Display) -> Self {
        Self {
            customer_number: customer_number.to_string(),
            invoice_number: invoice_number.to_string(),
        }
    }
}

/// A resolved, successful response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: u16,
    pub headers: HashMap<String, String>,
    /// Parsed JSON body; `Null` when the server sent no body.
    pub data: serde_json::Value,
}

impl ApiResponse {
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(T::deserialize(&self.data)?)
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_accepts_numbers_and_strings() {
        let query = OrderStatusQuery::new(42, "INV-0007");
        assert_eq!(query.customer_number, "42");
        assert_eq!(query.invoice_number, "INV-0007");

        // no trimming or normalisation
        let query = OrderStatusQuery::new(" CUST 1 ", "");
        assert_eq!(query.customer_number, " CUST 1 ");
        assert_eq!(query.invoice_number, "");
    }

    #[test]
    fn test_response_typed_access() {
        #[derive(Deserialize)]
        struct Status {
            status: String,
        }

        let mut headers = HashMap::new();
        headers.insert("content-type".to_string(), "application/json".to_string());
        let response = ApiResponse {
            status: 200,
            headers,
            data: serde_json::json!({"status": "shipped"}),
        };

        let typed: Status = response.json().unwrap();
        assert_eq!(typed.status, "shipped");
        assert_eq!(response.header("Content-Type"), Some("application/json"));
        assert!(response.json::<Vec<String>>().is_err());
    }
}
