// src/db/booking_repo.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::{AppError, map_unique_violation},
    models::{
        booking::{Booking, BookingItem, BookingStatus},
        finance::Rating,
    },
};

const BOOKING_COLUMNS: &str = "id, booking_number, user_id, cleaner_id, scheduled_at, \
     duration_minutes, address, location, status, total_price, extras, created_at, updated_at";

#[derive(Clone)]
pub struct BookingRepository {
    pool: PgPool,
}

impl BookingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // =========================================================================
    //  CABEÇALHO DO BOOKING
    // =========================================================================

    #[allow(clippy::too_many_arguments)]
    pub async fn create_booking<'e, E>(
        &self,
        executor: E,
        booking_number: &str,
        user_id: Uuid,
        scheduled_at: DateTime<Utc>,
        duration_minutes: i32,
        address: &str,
        location: Option<&serde_json::Value>,
        extras: Option<&serde_json::Value>,
    ) -> Result<Booking, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!(
            r#"
            INSERT INTO bookings
                (booking_number, user_id, scheduled_at, duration_minutes, address, location, extras)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {BOOKING_COLUMNS}
            "#
        );

        let booking = sqlx::query_as::<_, Booking>(&sql)
            .bind(booking_number)
            .bind(user_id)
            .bind(scheduled_at)
            .bind(duration_minutes)
            .bind(address)
            .bind(location)
            .bind(extras)
            .fetch_one(executor)
            .await?;

        Ok(booking)
    }

    pub async fn get_booking<'e, E>(
        &self,
        executor: E,
        booking_id: Uuid,
    ) -> Result<Option<Booking>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!("SELECT {BOOKING_COLUMNS} FROM bookings WHERE id = $1");

        let booking = sqlx::query_as::<_, Booking>(&sql)
            .bind(booking_id)
            .fetch_optional(executor)
            .await?;

        Ok(booking)
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
        let sql = format!(
            r#"
            SELECT {BOOKING_COLUMNS}
            FROM bookings
            WHERE ($1::booking_status IS NULL OR status = $1)
            ORDER BY created_at DESC
            LIMIT $2
            "#
        );

        let bookings = sqlx::query_as::<_, Booking>(&sql)
            .bind(status)
            .bind(limit)
            .fetch_all(executor)
            .await?;

        Ok(bookings)
    }

    pub async fn assign_cleaner<'e, E>(
        &self,
        executor: E,
        booking_id: Uuid,
        cleaner_id: Uuid,
    ) -> Result<Option<Booking>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!(
            r#"
            UPDATE bookings
            SET cleaner_id = $2, updated_at = now()
            WHERE id = $1
            RETURNING {BOOKING_COLUMNS}
            "#
        );

        let booking = sqlx::query_as::<_, Booking>(&sql)
            .bind(booking_id)
            .bind(cleaner_id)
            .fetch_optional(executor)
            .await?;

        Ok(booking)
    }

    pub async fn update_status<'e, E>(
        &self,
        executor: E,
        booking_id: Uuid,
        status: BookingStatus,
    ) -> Result<Option<Booking>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!(
            r#"
            UPDATE bookings
            SET status = $2, updated_at = now()
            WHERE id = $1
            RETURNING {BOOKING_COLUMNS}
            "#
        );

        let booking = sqlx::query_as::<_, Booking>(&sql)
            .bind(booking_id)
            .bind(status)
            .fetch_optional(executor)
            .await?;

        Ok(booking)
    }

    // =========================================================================
    //  ITENS (linha de serviço) E TOTAL
    // =========================================================================

    /// Insere ou atualiza o item pela chave natural (booking_id, service_id).
    pub async fn upsert_item<'e, E>(
        &self,
        executor: E,
        booking_id: Uuid,
        service_id: Uuid,
        quantity: i32,
        price: Decimal,
        notes: Option<&str>,
    ) -> Result<BookingItem, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let item = sqlx::query_as::<_, BookingItem>(
            r#"
            INSERT INTO booking_items (booking_id, service_id, quantity, price, notes)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (booking_id, service_id)
            DO UPDATE SET quantity = EXCLUDED.quantity,
                          price = EXCLUDED.price,
                          notes = EXCLUDED.notes
            RETURNING id, booking_id, service_id, quantity, price, notes
            "#,
        )
        .bind(booking_id)
        .bind(service_id)
        .bind(quantity)
        .bind(price)
        .bind(notes)
        .fetch_one(executor)
        .await?;

        Ok(item)
    }

    /// Remove o item e devolve o booking dono (None = item inexistente).
    pub async fn delete_item<'e, E>(
        &self,
        executor: E,
        item_id: Uuid,
    ) -> Result<Option<Uuid>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let booking_id = sqlx::query_scalar::<_, Uuid>(
            "DELETE FROM booking_items WHERE id = $1 RETURNING booking_id",
        )
        .bind(item_id)
        .fetch_optional(executor)
        .await?;

        Ok(booking_id)
    }

    pub async fn get_items<'e, E>(
        &self,
        executor: E,
        booking_id: Uuid,
    ) -> Result<Vec<BookingItem>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let items = sqlx::query_as::<_, BookingItem>(
            r#"
            SELECT id, booking_id, service_id, quantity, price, notes
            FROM booking_items
            WHERE booking_id = $1
            ORDER BY id ASC
            "#,
        )
        .bind(booking_id)
        .fetch_all(executor)
        .await?;

        Ok(items)
    }

    /// Persiste o total desnormalizado calculado pelo service.
    /// Deve rodar na MESMA transação da mutação do item.
    pub async fn update_total<'e, E>(
        &self,
        executor: E,
        booking_id: Uuid,
        total: Decimal,
    ) -> Result<Decimal, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let total = sqlx::query_scalar::<_, Decimal>(
            r#"
            UPDATE bookings
            SET total_price = $2, updated_at = now()
            WHERE id = $1
            RETURNING total_price
            "#,
        )
        .bind(booking_id)
        .bind(total)
        .fetch_optional(executor)
        .await?
        .ok_or(AppError::TotalRecomputeFailed(booking_id))?;

        Ok(total)
    }

    // =========================================================================
    //  AVALIAÇÕES
    // =========================================================================

    pub async fn create_rating<'e, E>(
        &self,
        executor: E,
        booking_id: Uuid,
        user_id: Uuid,
        cleaner_id: Option<Uuid>,
        rating: i32,
        comment: Option<&str>,
    ) -> Result<Rating, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let rating = sqlx::query_as::<_, Rating>(
            r#"
            INSERT INTO ratings (booking_id, user_id, cleaner_id, rating, comment)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, booking_id, user_id, cleaner_id, rating, comment, created_at
            "#,
        )
        .bind(booking_id)
        .bind(user_id)
        .bind(cleaner_id)
        .bind(rating)
        .bind(comment)
        .fetch_one(executor)
        .await
        .map_err(|e| map_unique_violation(e, AppError::RatingAlreadyExists))?;

        Ok(rating)
    }

    pub async fn get_rating_for_booking<'e, E>(
        &self,
        executor: E,
        booking_id: Uuid,
    ) -> Result<Option<Rating>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let rating = sqlx::query_as::<_, Rating>(
            r#"
            SELECT id, booking_id, user_id, cleaner_id, rating, comment, created_at
            FROM ratings
            WHERE booking_id = $1
            "#,
        )
        .bind(booking_id)
        .fetch_optional(executor)
        .await?;

        Ok(rating)
    }
}
