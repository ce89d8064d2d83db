// src/services/finance_service.rs

use rust_decimal::Decimal;
use sqlx::{Acquire, Executor, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{BookingRepository, FinanceRepository},
    models::finance::{CreatePaymentPayload, Payment},
};

#[derive(Clone)]
pub struct FinanceService {
    finance_repo: FinanceRepository,
    booking_repo: BookingRepository,
}

impl FinanceService {
    pub fn new(finance_repo: FinanceRepository, booking_repo: BookingRepository) -> Self {
        Self {
            finance_repo,
            booking_repo,
        }
    }

    pub async fn create_payment<'e, E>(
        &self,
        executor: E,
        booking_id: Uuid,
        payload: &CreatePaymentPayload,
    ) -> Result<Payment, AppError>
    where
        E: Executor<'e, Database = Postgres> + Acquire<'e, Database = Postgres>,
    {
        if payload.amount < Decimal::ZERO {
            return Err(AppError::InvalidAmount(payload.amount));
        }

        let mut tx = executor.begin().await?;

        self.booking_repo
            .get_booking(&mut *tx, booking_id)
            .await?
            .ok_or(AppError::BookingNotFound)?;

        let payment = self
            .finance_repo
            .create_payment(
                &mut *tx,
                booking_id,
                payload.amount,
                &payload.method,
                payload.transaction_id.as_deref(),
            )
            .await?;

        tx.commit().await?;
        Ok(payment)
    }

    /// Confirma o pagamento; só a partir daqui ele conta como receita.
    pub async fn mark_paid<'e, E>(&self, executor: E, payment_id: Uuid) -> Result<Payment, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.finance_repo
            .mark_payment_paid(executor, payment_id)
            .await?
            .ok_or(AppError::PaymentNotFound)
    }
}
