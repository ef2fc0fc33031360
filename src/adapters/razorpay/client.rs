//! Razorpay Orders API client.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::ports::{GatewayError, GatewayOrder, OrderRequest, PaymentGateway};

/// Razorpay API configuration.
#[derive(Clone)]
pub struct RazorpayConfig {
    /// Key id (rzp_live_... or rzp_test_...). Public; also sent to clients.
    key_id: String,

    /// Key secret, used as the basic-auth password.
    key_secret: SecretString,

    /// Base URL for the Razorpay API (default: https://api.razorpay.com).
    api_base_url: String,
}

impl RazorpayConfig {
    /// Create a new Razorpay configuration.
    pub fn new(key_id: impl Into<String>, key_secret: SecretString) -> Self {
        Self {
            key_id: key_id.into(),
            key_secret,
            api_base_url: "https://api.razorpay.com".to_string(),
        }
    }

    /// Set a custom API base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }
}

/// Razorpay payment gateway adapter.
pub struct RazorpayGateway {
    config: RazorpayConfig,
    http_client: reqwest::Client,
}

impl RazorpayGateway {
    /// Create a new Razorpay adapter with the given configuration.
    pub fn new(config: RazorpayConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }
}

/// Request body for POST /v1/orders.
#[derive(Debug, Serialize)]
struct CreateOrderBody<'a> {
    amount: i64,
    currency: &'a str,
    receipt: &'a str,
    notes: OrderNotesBody,
}

/// Razorpay notes are a flat string map.
#[derive(Debug, Serialize)]
struct OrderNotesBody {
    user_id: String,
    package_id: String,
}

#[derive(Debug, Deserialize)]
struct RazorpayOrder {
    id: String,
}

#[derive(Debug, Deserialize)]
struct RazorpayErrorEnvelope {
    error: RazorpayErrorBody,
}

#[derive(Debug, Deserialize)]
struct RazorpayErrorBody {
    description: String,
}

#[async_trait]
impl PaymentGateway for RazorpayGateway {
    async fn create_order(&self, request: OrderRequest) -> Result<GatewayOrder, GatewayError> {
        let url = format!("{}/v1/orders", self.config.api_base_url);

        let body = CreateOrderBody {
            amount: request.amount,
            currency: &request.currency,
            receipt: &request.receipt,
            notes: OrderNotesBody {
                user_id: request.notes.user_id.to_string(),
                package_id: request.notes.package_id.to_string(),
            },
        };

        let response = self
            .http_client
            .post(&url)
            .basic_auth(
                &self.config.key_id,
                Some(self.config.key_secret.expose_secret()),
            )
            .json(&body)
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<RazorpayErrorEnvelope>(&error_text)
                .map(|envelope| envelope.error.description)
                .unwrap_or(error_text);
            tracing::error!(status = %status, error = %message, "Razorpay order creation failed");
            return Err(GatewayError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let order: RazorpayOrder = response.json().await.map_err(|e| {
            GatewayError::Network(format!("Failed to parse Razorpay response: {}", e))
        })?;

        Ok(GatewayOrder { id: order.id })
    }

    fn key_id(&self) -> &str {
        &self.config.key_id
    }
}
