//! Embedded-checkout order generation.
//!
//! [`EmbedFormService::generate`] is the single entry point the host
//! application calls on every checkout attempt. It validates the order
//! parameters, then decides between creating a fresh Conekta order or
//! updating the one already mapped to the quote:
//!
//! Creates a new Conekta order when:
//! 1. no mapping row exists for the quote, or
//! 2. a mapping exists and:
//!    2.1. the Conekta order has a payment status, or
//!    2.2. the Conekta checkout has expired.
//!
//! Otherwise the existing order is updated in place, with `customer_info`
//! stripped from the payload.

use chrono::Utc;
use thiserror::Error;

use conekta_payments_core::{Amount, ConektaOrderId, MINIMUM_AMOUNT_PER_QUOTE, QuoteId};

use crate::conekta::{ConektaError, Order, OrderRequest, OrdersClient};
use crate::db::{QuoteOrderRepository, RepositoryError};
use crate::models::QuoteOrder;

/// Orders API seam; implemented by [`OrdersClient`] and by test fakes.
#[allow(async_fn_in_trait)]
pub trait OrdersApi {
    async fn find(&self, order_id: &ConektaOrderId) -> Result<Order, ConektaError>;
    async fn create(&self, request: &OrderRequest) -> Result<Order, ConektaError>;
    async fn update(
        &self,
        order_id: &ConektaOrderId,
        request: &OrderRequest,
    ) -> Result<Order, ConektaError>;
}

impl OrdersApi for OrdersClient {
    async fn find(&self, order_id: &ConektaOrderId) -> Result<Order, ConektaError> {
        Self::find(self, order_id).await
    }

    async fn create(&self, request: &OrderRequest) -> Result<Order, ConektaError> {
        Self::create(self, request).await
    }

    async fn update(
        &self,
        order_id: &ConektaOrderId,
        request: &OrderRequest,
    ) -> Result<Order, ConektaError> {
        Self::update(self, order_id, request).await
    }
}

/// Mapping-store seam; implemented by [`QuoteOrderRepository`] and test fakes.
#[allow(async_fn_in_trait)]
pub trait QuoteOrderStore {
    async fn get_by_quote_id(&self, quote_id: QuoteId) -> Result<QuoteOrder, RepositoryError>;
    async fn save(
        &self,
        quote_id: QuoteId,
        conekta_order_id: &ConektaOrderId,
    ) -> Result<QuoteOrder, RepositoryError>;
}

impl QuoteOrderStore for QuoteOrderRepository<'_> {
    async fn get_by_quote_id(&self, quote_id: QuoteId) -> Result<QuoteOrder, RepositoryError> {
        Self::get_by_quote_id(self, quote_id).await
    }

    async fn save(
        &self,
        quote_id: QuoteId,
        conekta_order_id: &ConektaOrderId,
    ) -> Result<QuoteOrder, RepositoryError> {
        Self::save(self, quote_id, conekta_order_id).await
    }
}

/// The single user-facing checkout error.
///
/// `Display` carries the internal description; [`CheckoutError::user_message`]
/// carries the localized text shown to the shopper, so internal detail never
/// leaks into the storefront.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Order currency is not MXN.
    #[error("order currency must be MXN, got {0}")]
    ForeignCurrency(String),

    /// Line-item total is below the checkout minimum.
    #[error("order total {total} is below the {MINIMUM_AMOUNT_PER_QUOTE} MXN minimum")]
    BelowMinimumAmount { total: Amount },

    /// Conekta rejected the order parameters.
    #[error("conekta rejected the order parameters: {0}")]
    Gateway(String),

    /// Conekta API or transport failure.
    #[error("conekta error: {0}")]
    Conekta(#[from] ConektaError),

    /// Mapping store failure.
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
}

impl CheckoutError {
    /// Localized message for the storefront (es-MX).
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::ForeignCurrency(_) => {
                "Este medio de pago no acepta moneda extranjera".to_owned()
            }
            Self::BelowMinimumAmount { .. } => format!(
                "Para utilizar este medio de pago debe ingresar una compra superior a ${MINIMUM_AMOUNT_PER_QUOTE}"
            ),
            Self::Gateway(message) => message.clone(),
            Self::Conekta(_) | Self::Repository(_) => {
                "No fue posible procesar el pago, intente nuevamente".to_owned()
            }
        }
    }
}

/// Orchestrates order generation for the embedded checkout form.
pub struct EmbedFormService<A, S> {
    orders: A,
    store: S,
}

impl<A: OrdersApi, S: QuoteOrderStore> EmbedFormService<A, S> {
    /// Create a new service over an orders API and a mapping store.
    #[must_use]
    pub const fn new(orders: A, store: S) -> Self {
        Self { orders, store }
    }

    /// Generate the Conekta order backing a quote's checkout.
    ///
    /// Returns the created or updated order; the mapping row is persisted
    /// whenever a new order is created.
    ///
    /// # Errors
    ///
    /// Returns `CheckoutError::ForeignCurrency` or
    /// `CheckoutError::BelowMinimumAmount` on invalid parameters,
    /// `CheckoutError::Gateway` when Conekta rejects them, and
    /// `CheckoutError::Conekta`/`CheckoutError::Repository` on remote or
    /// database faults. A missing mapping is not an error; it triggers
    /// creation.
    pub async fn generate(
        &self,
        quote_id: QuoteId,
        params: OrderRequest,
    ) -> Result<Order, CheckoutError> {
        validate_order_parameters(&params)?;

        let existing = self.find_existing_order(quote_id).await?;

        let now = Utc::now();
        match existing {
            Some(order) if !order.requires_replacement(now) => {
                tracing::info!(
                    %quote_id,
                    order_id = %order.id,
                    "updating existing conekta order"
                );
                let update = params.without_customer_info();
                self.orders
                    .update(&order.id, &update)
                    .await
                    .map_err(reject_gateway_error)
            }
            _ => {
                tracing::info!(%quote_id, "creating conekta order");
                let order = self
                    .orders
                    .create(&params)
                    .await
                    .map_err(reject_gateway_error)?;

                self.store.save(quote_id, &order.id).await?;
                tracing::info!(%quote_id, order_id = %order.id, "conekta order mapped to quote");
                Ok(order)
            }
        }
    }

    /// Resolve the quote's currently mapped Conekta order, if any.
    ///
    /// A missing mapping row and a mapping pointing at an order Conekta no
    /// longer knows are both normal branches resolving to `None`.
    async fn find_existing_order(
        &self,
        quote_id: QuoteId,
    ) -> Result<Option<Order>, CheckoutError> {
        let mapping = match self.store.get_by_quote_id(quote_id).await {
            Ok(mapping) => mapping,
            Err(RepositoryError::NotFound) => {
                tracing::debug!(%quote_id, "no conekta order mapped to quote");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        match self.orders.find(&mapping.conekta_order_id).await {
            Ok(order) => Ok(Some(order)),
            Err(ConektaError::NotFound(_)) => {
                tracing::warn!(
                    %quote_id,
                    order_id = %mapping.conekta_order_id,
                    "mapped conekta order no longer exists"
                );
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// Validate checkout parameters before touching the remote API.
fn validate_order_parameters(params: &OrderRequest) -> Result<(), CheckoutError> {
    if !params.currency.eq_ignore_ascii_case("MXN") {
        return Err(CheckoutError::ForeignCurrency(params.currency.clone()));
    }

    let total = params.line_items_total();
    if total < Amount::from_pesos(MINIMUM_AMOUNT_PER_QUOTE) {
        return Err(CheckoutError::BelowMinimumAmount { total });
    }

    Ok(())
}

/// Re-signal remote validation failures as the domain error; everything else
/// passes through as a Conekta fault.
fn reject_gateway_error(error: ConektaError) -> CheckoutError {
    match error {
        ConektaError::ParameterValidation(message) => {
            tracing::error!(%message, "conekta rejected order parameters");
            CheckoutError::Gateway(message)
        }
        other => other.into(),
    }
}
