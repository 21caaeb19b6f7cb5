//! Orders endpoint client.

use reqwest::StatusCode;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use serde::Deserialize;

use conekta_payments_core::ConektaOrderId;

use super::ConektaError;
use super::types::{Order, OrderRequest};
use crate::config::ConektaConfig;

/// Conekta Orders API client.
///
/// Auth and Accept headers are fixed at construction; the underlying
/// `reqwest::Client` is cheap to clone and share.
#[derive(Debug, Clone)]
pub struct OrdersClient {
    client: reqwest::Client,
    base_url: String,
}

impl OrdersClient {
    /// Create a new Orders API client.
    ///
    /// # Errors
    ///
    /// Returns error if the private key is not a valid header value or the
    /// HTTP client fails to build.
    pub fn new(config: &ConektaConfig) -> Result<Self, ConektaError> {
        let mut headers = HeaderMap::new();

        let auth_value = format!("Bearer {}", config.private_key.expose_secret());
        let mut auth_header = HeaderValue::from_str(&auth_value)
            .map_err(|e| ConektaError::Parse(format!("invalid private key format: {e}")))?;
        auth_header.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth_header);

        let accept = HeaderValue::from_str(&config.accept_header())
            .map_err(|e| ConektaError::Parse(format!("invalid API version: {e}")))?;
        headers.insert(ACCEPT, accept);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch an order by id.
    ///
    /// # Errors
    ///
    /// Returns `ConektaError::NotFound` if the order does not exist, other
    /// variants for transport or API failures.
    pub async fn find(&self, order_id: &ConektaOrderId) -> Result<Order, ConektaError> {
        let url = format!("{}/orders/{}", self.base_url, order_id);

        let response = self.client.get(&url).send().await?;
        Self::decode_order(order_id.as_str(), response).await
    }

    /// Create a new order.
    ///
    /// # Errors
    ///
    /// Returns `ConektaError::ParameterValidation` if the API rejects the
    /// parameters, other variants for transport or API failures.
    pub async fn create(&self, request: &OrderRequest) -> Result<Order, ConektaError> {
        let url = format!("{}/orders", self.base_url);

        let response = self.client.post(&url).json(request).send().await?;
        Self::decode_order("(new order)", response).await
    }

    /// Update an existing order.
    ///
    /// # Errors
    ///
    /// Returns `ConektaError::NotFound` if the order does not exist,
    /// `ConektaError::ParameterValidation` if the API rejects the parameters.
    pub async fn update(
        &self,
        order_id: &ConektaOrderId,
        request: &OrderRequest,
    ) -> Result<Order, ConektaError> {
        let url = format!("{}/orders/{}", self.base_url, order_id);

        let response = self.client.put(&url).json(request).send().await?;
        Self::decode_order(order_id.as_str(), response).await
    }

    async fn decode_order(
        subject: &str,
        response: reqwest::Response,
    ) -> Result<Order, ConektaError> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(classify_error(subject, status, &body));
        }

        response
            .json()
            .await
            .map_err(|e| ConektaError::Parse(e.to_string()))
    }
}

/// Conekta error envelope (`object: "error"`).
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(rename = "type")]
    error_type: Option<String>,
    details: Option<Vec<ApiErrorDetail>>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: Option<String>,
    debug_message: Option<String>,
}

/// Map a non-success response to the matching `ConektaError` variant.
fn classify_error(subject: &str, status: StatusCode, body: &str) -> ConektaError {
    if status == StatusCode::NOT_FOUND {
        return ConektaError::NotFound(subject.to_string());
    }

    if let Ok(error_body) = serde_json::from_str::<ApiErrorBody>(body) {
        let message = error_body
            .details
            .unwrap_or_default()
            .into_iter()
            .filter_map(|d| d.message.or(d.debug_message))
            .collect::<Vec<_>>()
            .join("; ");

        let is_validation = error_body
            .error_type
            .as_deref()
            .is_some_and(|t| t == "parameter_validation_error")
            || status == StatusCode::UNPROCESSABLE_ENTITY;

        if is_validation && !message.is_empty() {
            return ConektaError::ParameterValidation(message);
        }

        if !message.is_empty() {
            return ConektaError::Api {
                status: status.as_u16(),
                message,
            };
        }
    }

    ConektaError::Api {
        status: status.as_u16(),
        message: body.to_string(),
    }
}
