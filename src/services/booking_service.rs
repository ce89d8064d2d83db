// src/services/booking_service.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{Acquire, Executor, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{BookingRepository, CatalogRepository, FinanceRepository, UserRepository},
    models::{
        booking::{
            Booking, BookingDetail, BookingItem, BookingItemPayload, BookingStatus,
            BookingTotalResponse, CreateBookingPayload,
        },
        catalog::CleanerStatus,
    },
};

// ---
// Núcleo de precificação (puro)
// ---

/// Subtotal da linha: quantidade × preço unitário, arredondado
/// para a precisão da moeda (2 casas).
pub fn item_subtotal(quantity: i32, unit_price: Decimal) -> Decimal {
    (Decimal::from(quantity) * unit_price).round_dp(2)
}

/// Total do booking: soma dos subtotais. Conjunto vazio = 0.
pub fn booking_total(items: &[BookingItem]) -> Decimal {
    items
        .iter()
        .map(|item| item_subtotal(item.quantity, item.price))
        .sum::<Decimal>()
        .round_dp(2)
}

fn validate_item(quantity: i32, unit_price: Decimal) -> Result<(), AppError> {
    if quantity < 1 {
        return Err(AppError::InvalidQuantity(quantity));
    }
    if unit_price < Decimal::ZERO {
        return Err(AppError::InvalidUnitPrice(unit_price));
    }
    Ok(())
}

/// Somente faxineiro `active` pode receber booking; `inactive` e
/// `on_leave` são recusados com conflito.
fn ensure_assignable(status: CleanerStatus) -> Result<(), AppError> {
    match status {
        CleanerStatus::Active => Ok(()),
        CleanerStatus::Inactive | CleanerStatus::OnLeave => Err(AppError::CleanerNotActive),
    }
}

/// Número de booking legível, gerado no servidor: BK-YYYYMMDD-XXXXXX.
pub(crate) fn generate_booking_number(now: DateTime<Utc>) -> String {
    let uuid = Uuid::new_v4().simple().to_string();
    format!("BK-{}-{}", now.format("%Y%m%d"), uuid[..6].to_uppercase())
}

#[derive(Clone)]
pub struct BookingService {
    booking_repo: BookingRepository,
    catalog_repo: CatalogRepository,
    user_repo: UserRepository,
    finance_repo: FinanceRepository,
}

impl BookingService {
    pub fn new(
        booking_repo: BookingRepository,
        catalog_repo: CatalogRepository,
        user_repo: UserRepository,
        finance_repo: FinanceRepository,
    ) -> Self {
        Self {
            booking_repo,
            catalog_repo,
            user_repo,
            finance_repo,
        }
    }

    // --- CRIAR BOOKING (cabeçalho + itens iniciais, uma transação) ---
    pub async fn create_booking<'e, E>(
        &self,
        executor: E,
        payload: CreateBookingPayload,
    ) -> Result<Booking, AppError>
    where
        E: Executor<'e, Database = Postgres> + Acquire<'e, Database = Postgres>,
    {
        let mut tx = executor.begin().await?;

        self.user_repo
            .get_user(&mut *tx, payload.user_id)
            .await?
            .ok_or(AppError::UserNotFound)?;

        let booking_number = generate_booking_number(Utc::now());

        let mut booking = self
            .booking_repo
            .create_booking(
                &mut *tx,
                &booking_number,
                payload.user_id,
                payload.scheduled_at,
                payload.duration_minutes,
                &payload.address,
                payload.location.as_ref(),
                payload.extras.as_ref(),
            )
            .await?;

        for item in &payload.items {
            self.upsert_item_in_tx(&mut tx, booking.id, item).await?;
        }

        // O total persistido nasce consistente com os itens
        booking.total_price = self.recompute_total_in_tx(&mut tx, booking.id).await?;

        tx.commit().await?;
        Ok(booking)
    }

    // --- UPSERT DE ITEM (mutação + recálculo do total, uma transação) ---
    pub async fn upsert_booking_item<'e, E>(
        &self,
        executor: E,
        booking_id: Uuid,
        payload: &BookingItemPayload,
    ) -> Result<BookingTotalResponse, AppError>
    where
        E: Executor<'e, Database = Postgres> + Acquire<'e, Database = Postgres>,
    {
        let mut tx = executor.begin().await?;

        self.booking_repo
            .get_booking(&mut *tx, booking_id)
            .await?
            .ok_or(AppError::BookingNotFound)?;

        self.upsert_item_in_tx(&mut tx, booking_id, payload).await?;

        let total_price = self.recompute_total_in_tx(&mut tx, booking_id).await?;

        tx.commit().await?;
        Ok(BookingTotalResponse {
            booking_id,
            total_price,
        })
    }

    // --- REMOVER ITEM (idem: recálculo na mesma transação) ---
    pub async fn delete_booking_item<'e, E>(
        &self,
        executor: E,
        item_id: Uuid,
    ) -> Result<BookingTotalResponse, AppError>
    where
        E: Executor<'e, Database = Postgres> + Acquire<'e, Database = Postgres>,
    {
        let mut tx = executor.begin().await?;

        let booking_id = self
            .booking_repo
            .delete_item(&mut *tx, item_id)
            .await?
            .ok_or(AppError::BookingItemNotFound)?;

        // Sem itens restantes o total vai a 0, nunca NULL
        let total_price = self.recompute_total_in_tx(&mut tx, booking_id).await?;

        tx.commit().await?;
        Ok(BookingTotalResponse {
            booking_id,
            total_price,
        })
    }

    /// Valida o item, resolve o serviço e congela o preço: o unitário
    /// omitido assume o `base_price` ATUAL do serviço, e a partir daí o
    /// snapshot não acompanha mais o catálogo.
    async fn upsert_item_in_tx(
        &self,
        tx: &mut sqlx::Transaction<'_, Postgres>,
        booking_id: Uuid,
        payload: &BookingItemPayload,
    ) -> Result<BookingItem, AppError> {
        let service = self
            .catalog_repo
            .get_service(&mut **tx, payload.service_id)
            .await?
            .ok_or(AppError::ServiceNotFound)?;

        let price = payload.unit_price.unwrap_or(service.base_price);
        validate_item(payload.quantity, price)?;

        self.booking_repo
            .upsert_item(
                &mut **tx,
                booking_id,
                payload.service_id,
                payload.quantity,
                price,
                payload.notes.as_deref(),
            )
            .await
    }

    /// Relê os itens e persiste `total = Σ subtotal` na mesma transação.
    /// Se falhar, a mutação do item é desfeita junto: nunca fica total velho.
    async fn recompute_total_in_tx(
        &self,
        tx: &mut sqlx::Transaction<'_, Postgres>,
        booking_id: Uuid,
    ) -> Result<Decimal, AppError> {
        let items = self.booking_repo.get_items(&mut **tx, booking_id).await?;
        let total = booking_total(&items);
        self.booking_repo.update_total(&mut **tx, booking_id, total).await
    }

    // --- LEITURAS ---

    pub async fn get_booking_detail<'e, E>(
        &self,
        executor: E,
        booking_id: Uuid,
    ) -> Result<BookingDetail, AppError>
    where
        E: Executor<'e, Database = Postgres> + Acquire<'e, Database = Postgres>,
    {
        let mut tx = executor.begin().await?;

        let booking = self
            .booking_repo
            .get_booking(&mut *tx, booking_id)
            .await?
            .ok_or(AppError::BookingNotFound)?;

        let items = self.booking_repo.get_items(&mut *tx, booking_id).await?;
        let payments = self
            .finance_repo
            .list_payments_for_booking(&mut *tx, booking_id)
            .await?;
        let rating = self
            .booking_repo
            .get_rating_for_booking(&mut *tx, booking_id)
            .await?;

        tx.commit().await?;
        Ok(BookingDetail {
            booking,
            items,
            payments,
            rating,
        })
    }

    pub async fn list_bookings<'e, E>(
        &self,
        executor: E,
        status: Option<BookingStatus>,
        limit: i64,
    ) -> Result<Vec<Booking>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.booking_repo.list_bookings(executor, status, limit).await
    }

    // --- AÇÕES OPERACIONAIS ---

    /// Atribui o faxineiro ao booking, depois de passar pelo guard de status.
    pub async fn assign_cleaner<'e, E>(
        &self,
        executor: E,
        booking_id: Uuid,
        cleaner_id: Uuid,
    ) -> Result<Booking, AppError>
    where
        E: Executor<'e, Database = Postgres> + Acquire<'e, Database = Postgres>,
    {
        let mut tx = executor.begin().await?;

        let cleaner = self
            .catalog_repo
            .get_cleaner(&mut *tx, cleaner_id)
            .await?
            .ok_or(AppError::CleanerNotFound)?;

        ensure_assignable(cleaner.status)?;

        let booking = self
            .booking_repo
            .assign_cleaner(&mut *tx, booking_id, cleaner_id)
            .await?
            .ok_or(AppError::BookingNotFound)?;

        tx.commit().await?;
        Ok(booking)
    }

    pub async fn change_status<'e, E>(
        &self,
        executor: E,
        booking_id: Uuid,
        status: BookingStatus,
    ) -> Result<Booking, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.booking_repo
            .update_status(executor, booking_id, status)
            .await?
            .ok_or(AppError::BookingNotFound)
    }

    // --- AVALIAÇÃO (uma por booking) ---

    pub async fn rate_booking<'e, E>(
        &self,
        executor: E,
        booking_id: Uuid,
        user_id: Uuid,
        rating: i32,
        comment: Option<&str>,
    ) -> Result<crate::models::finance::Rating, AppError>
    where
        E: Executor<'e, Database = Postgres> + Acquire<'e, Database = Postgres>,
    {
        let mut tx = executor.begin().await?;

        let booking = self
            .booking_repo
            .get_booking(&mut *tx, booking_id)
            .await?
            .ok_or(AppError::BookingNotFound)?;

        let created = self
            .booking_repo
            .create_rating(
                &mut *tx,
                booking_id,
                user_id,
                booking.cleaner_id,
                rating,
                comment,
            )
            .await?;

        tx.commit().await?;
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(quantity: i32, price: Decimal) -> BookingItem {
        BookingItem {
            id: Uuid::new_v4(),
            booking_id: Uuid::new_v4(),
            service_id: Uuid::new_v4(),
            quantity,
            price,
            notes: None,
        }
    }

    #[test]
    fn subtotal_is_quantity_times_price() {
        assert_eq!(
            item_subtotal(2, Decimal::new(50_000_00, 2)),
            Decimal::new(100_000_00, 2)
        );
    }

    #[test]
    fn subtotal_rounds_to_currency_precision() {
        // 3 × 19.999 = 59.997 -> 60.00
        assert_eq!(
            item_subtotal(3, Decimal::new(19_999, 3)),
            Decimal::new(60_00, 2)
        );
    }

    #[test]
    fn total_sums_all_subtotals() {
        // (2 × 50000) + (1 × 30000) = 130000
        let items = vec![
            item(2, Decimal::new(50_000_00, 2)),
            item(1, Decimal::new(30_000_00, 2)),
        ];
        assert_eq!(booking_total(&items), Decimal::new(130_000_00, 2));
    }

    #[test]
    fn total_of_empty_set_is_zero() {
        assert_eq!(booking_total(&[]), Decimal::ZERO);
    }

    #[test]
    fn rejects_quantity_below_one() {
        assert!(matches!(
            validate_item(0, Decimal::ONE),
            Err(AppError::InvalidQuantity(0))
        ));
        assert!(matches!(
            validate_item(-3, Decimal::ONE),
            Err(AppError::InvalidQuantity(-3))
        ));
    }

    #[test]
    fn rejects_negative_unit_price() {
        assert!(matches!(
            validate_item(1, Decimal::new(-1, 2)),
            Err(AppError::InvalidUnitPrice(_))
        ));
    }

    #[test]
    fn accepts_free_item() {
        // Quantidade 1 com preço 0 é válido (cortesia)
        assert!(validate_item(1, Decimal::ZERO).is_ok());
    }

    #[test]
    fn only_active_cleaner_is_assignable() {
        assert!(ensure_assignable(CleanerStatus::Active).is_ok());
        assert!(matches!(
            ensure_assignable(CleanerStatus::Inactive),
            Err(AppError::CleanerNotActive)
        ));
        assert!(matches!(
            ensure_assignable(CleanerStatus::OnLeave),
            Err(AppError::CleanerNotActive)
        ));
    }

    #[test]
    fn booking_number_has_expected_shape() {
        let now = "2025-08-25T10:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let number = generate_booking_number(now);
        assert!(number.starts_with("BK-20250825-"));
        assert_eq!(number.len(), "BK-20250825-".len() + 6);
    }
}
