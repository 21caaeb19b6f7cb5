//! Quote/order mapping repository.
//!
//! One row per quote, keyed by `quote_id`. Lookups by Conekta order id assume
//! the value is unique; on duplicates the first match (lowest quote id) is
//! returned.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use conekta_payments_core::{ConektaOrderId, QuoteId};

use super::RepositoryError;
use crate::models::QuoteOrder;

/// Row shape shared by every query in this repository.
#[derive(sqlx::FromRow)]
struct QuoteOrderRow {
    quote_id: i32,
    conekta_order_id: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<QuoteOrderRow> for QuoteOrder {
    fn from(row: QuoteOrderRow) -> Self {
        Self {
            quote_id: QuoteId::new(row.quote_id),
            conekta_order_id: ConektaOrderId::new(row.conekta_order_id),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Repository for quote/order mapping operations.
pub struct QuoteOrderRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> QuoteOrderRepository<'a> {
    /// Create a new quote/order repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get the mapping for a quote.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no mapping exists for the quote,
    /// `RepositoryError::Database` if the query fails.
    pub async fn get_by_quote_id(&self, quote_id: QuoteId) -> Result<QuoteOrder, RepositoryError> {
        let row = sqlx::query_as::<_, QuoteOrderRow>(
            r"
            SELECT quote_id, conekta_order_id, created_at, updated_at
            FROM conekta_quote_order
            WHERE quote_id = $1
            ",
        )
        .bind(quote_id.as_i32())
        .fetch_optional(self.pool)
        .await?;

        row.map(QuoteOrder::from).ok_or(RepositoryError::NotFound)
    }

    /// Look up a mapping by Conekta order id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_conekta_order_id(
        &self,
        conekta_order_id: &ConektaOrderId,
    ) -> Result<Option<QuoteOrder>, RepositoryError> {
        let row = sqlx::query_as::<_, QuoteOrderRow>(
            r"
            SELECT quote_id, conekta_order_id, created_at, updated_at
            FROM conekta_quote_order
            WHERE conekta_order_id = $1
            ORDER BY quote_id ASC
            LIMIT 1
            ",
        )
        .bind(conekta_order_id.as_str())
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(QuoteOrder::from))
    }

    /// Save the mapping for a quote, replacing any previous Conekta order id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the upsert fails.
    pub async fn save(
        &self,
        quote_id: QuoteId,
        conekta_order_id: &ConektaOrderId,
    ) -> Result<QuoteOrder, RepositoryError> {
        let row = sqlx::query_as::<_, QuoteOrderRow>(
            r"
            INSERT INTO conekta_quote_order (quote_id, conekta_order_id)
            VALUES ($1, $2)
            ON CONFLICT (quote_id) DO UPDATE
                SET conekta_order_id = EXCLUDED.conekta_order_id,
                    updated_at = NOW()
            RETURNING quote_id, conekta_order_id, created_at, updated_at
            ",
        )
        .bind(quote_id.as_i32())
        .bind(conekta_order_id.as_str())
        .fetch_one(self.pool)
        .await?;

        Ok(row.into())
    }
}
