// src/db/finance_repo.rs

use rust_decimal::Decimal;
use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{common::error::AppError, models::finance::Payment};

const PAYMENT_COLUMNS: &str =
    "id, booking_id, amount, method, status, transaction_id, gateway_response, paid_at, created_at";

#[derive(Clone)]
pub struct FinanceRepository {
    pool: PgPool,
}

impl FinanceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create_payment<'e, E>(
        &self,
        executor: E,
        booking_id: Uuid,
        amount: Decimal,
        method: &str,
        transaction_id: Option<&str>,
    ) -> Result<Payment, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!(
            r#"
            INSERT INTO payments (booking_id, amount, method, transaction_id)
            VALUES ($1, $2, $3, $4)
            RETURNING {PAYMENT_COLUMNS}
            "#
        );

        let payment = sqlx::query_as::<_, Payment>(&sql)
            .bind(booking_id)
            .bind(amount)
            .bind(method)
            .bind(transaction_id)
            .fetch_one(executor)
            .await?;

        Ok(payment)
    }

    /// Marca como pago e registra `paid_at` — a partir daqui a linha
    /// passa a contar na receita do dashboard.
    pub async fn mark_payment_paid<'e, E>(
        &self,
        executor: E,
        payment_id: Uuid,
    ) -> Result<Option<Payment>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!(
            r#"
            UPDATE payments
            SET status = 'paid', paid_at = now()
            WHERE id = $1
            RETURNING {PAYMENT_COLUMNS}
            "#
        );

        let payment = sqlx::query_as::<_, Payment>(&sql)
            .bind(payment_id)
            .fetch_optional(executor)
            .await?;

        Ok(payment)
    }

    pub async fn list_payments_for_booking<'e, E>(
        &self,
        executor: E,
        booking_id: Uuid,
    ) -> Result<Vec<Payment>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!(
            r#"
            SELECT {PAYMENT_COLUMNS}
            FROM payments
            WHERE booking_id = $1
            ORDER BY created_at ASC
            "#
        );

        let payments = sqlx::query_as::<_, Payment>(&sql)
            .bind(booking_id)
            .fetch_all(executor)
            .await?;

        Ok(payments)
    }
}
