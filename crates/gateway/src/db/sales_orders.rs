//! Conekta order to placed-order mapping repository.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use conekta_payments_core::{ConektaOrderId, IncrementOrderId};

use super::RepositoryError;
use crate::models::SalesOrder;

#[derive(sqlx::FromRow)]
struct SalesOrderRow {
    id: i32,
    conekta_order_id: String,
    increment_order_id: String,
    created_at: DateTime<Utc>,
}

impl From<SalesOrderRow> for SalesOrder {
    fn from(row: SalesOrderRow) -> Self {
        Self {
            id: row.id,
            conekta_order_id: ConektaOrderId::new(row.conekta_order_id),
            increment_order_id: IncrementOrderId::new(row.increment_order_id),
            created_at: row.created_at,
        }
    }
}

/// Repository for Conekta order to platform order links.
pub struct SalesOrderRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> SalesOrderRepository<'a> {
    /// Create a new sales-order repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Look up the platform order placed from a Conekta order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_conekta_order_id(
        &self,
        conekta_order_id: &ConektaOrderId,
    ) -> Result<Option<SalesOrder>, RepositoryError> {
        let row = sqlx::query_as::<_, SalesOrderRow>(
            r"
            SELECT id, conekta_order_id, increment_order_id, created_at
            FROM conekta_sales_order
            WHERE conekta_order_id = $1
            ORDER BY id ASC
            LIMIT 1
            ",
        )
        .bind(conekta_order_id.as_str())
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(SalesOrder::from))
    }

    /// Record which platform order was placed from a Conekta order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the Conekta order is already
    /// linked to a different platform order, `RepositoryError::Database` for
    /// other database errors.
    pub async fn save(
        &self,
        conekta_order_id: &ConektaOrderId,
        increment_order_id: &IncrementOrderId,
    ) -> Result<SalesOrder, RepositoryError> {
        let row = sqlx::query_as::<_, SalesOrderRow>(
            r"
            INSERT INTO conekta_sales_order (conekta_order_id, increment_order_id)
            VALUES ($1, $2)
            RETURNING id, conekta_order_id, increment_order_id, created_at
            ",
        )
        .bind(conekta_order_id.as_str())
        .bind(increment_order_id.as_str())
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return RepositoryError::Conflict(
                    "conekta order already linked to a platform order".to_owned(),
                );
            }
            RepositoryError::Database(e)
        })?;

        Ok(row.into())
    }
}
