// src/db/dashboard_repo.rs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::{Acquire, Executor, PgPool, Postgres};

use crate::{
    common::error::AppError,
    models::{
        booking::BookingStatus,
        dashboard::{
            DailyCountRow, DashboardSummary, LatestBookingEntry, MonthlyRevenueRow,
            ServicePopularityEntry, TopSpenderEntry,
        },
    },
};

#[derive(Clone)]
pub struct DashboardRepository {
    pool: PgPool,
}

impl DashboardRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // 1. Cards do topo
    pub async fn get_summary<'e, E>(&self, executor: E) -> Result<DashboardSummary, AppError>
    where
        E: Executor<'e, Database = Postgres> + Acquire<'e, Database = Postgres>,
    {
        // Transação = snapshot consistente entre as seis leituras
        let mut tx = executor.begin().await?;

        let total_users = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(&mut *tx)
            .await?;

        let bookings_this_month = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM bookings
            WHERE (created_at AT TIME ZONE 'UTC') >= date_trunc('month', now() AT TIME ZONE 'UTC')
            "#,
        )
        .fetch_one(&mut *tx)
        .await?;

        let bookings_prev_month = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM bookings
            WHERE (created_at AT TIME ZONE 'UTC')
                  >= date_trunc('month', now() AT TIME ZONE 'UTC') - INTERVAL '1 month'
              AND (created_at AT TIME ZONE 'UTC')
                  < date_trunc('month', now() AT TIME ZONE 'UTC')
            "#,
        )
        .fetch_one(&mut *tx)
        .await?;

        let revenue_this_month = sqlx::query_scalar::<_, Decimal>(
            r#"
            SELECT COALESCE(SUM(amount), 0)
            FROM payments
            WHERE status = 'paid'
              AND paid_at IS NOT NULL
              AND (paid_at AT TIME ZONE 'UTC') >= date_trunc('month', now() AT TIME ZONE 'UTC')
            "#,
        )
        .fetch_one(&mut *tx)
        .await?;

        let revenue_prev_month = sqlx::query_scalar::<_, Decimal>(
            r#"
            SELECT COALESCE(SUM(amount), 0)
            FROM payments
            WHERE status = 'paid'
              AND paid_at IS NOT NULL
              AND (paid_at AT TIME ZONE 'UTC')
                  >= date_trunc('month', now() AT TIME ZONE 'UTC') - INTERVAL '1 month'
              AND (paid_at AT TIME ZONE 'UTC')
                  < date_trunc('month', now() AT TIME ZONE 'UTC')
            "#,
        )
        .fetch_one(&mut *tx)
        .await?;

        let pending_bookings =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM bookings WHERE status = 'pending'")
                .fetch_one(&mut *tx)
                .await?;

        tx.commit().await?;

        Ok(DashboardSummary {
            total_users,
            bookings_this_month,
            bookings_prev_month,
            revenue_this_month,
            revenue_prev_month,
            pending_bookings,
        })
    }

    // 2. Bookings por dia (linhas esparsas — o service densifica)
    pub async fn daily_booking_counts<'e, E>(
        &self,
        executor: E,
        since: NaiveDate,
        status: Option<BookingStatus>,
    ) -> Result<Vec<DailyCountRow>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let rows = sqlx::query_as::<_, DailyCountRow>(
            r#"
            SELECT (created_at AT TIME ZONE 'UTC')::date AS day,
                   COUNT(*) AS count
            FROM bookings
            WHERE (created_at AT TIME ZONE 'UTC')::date >= $1
              AND ($2::booking_status IS NULL OR status = $2)
            GROUP BY day
            ORDER BY day ASC
            "#,
        )
        .bind(since)
        .bind(status)
        .fetch_all(executor)
        .await?;

        Ok(rows)
    }

    // 3. Receita por mês (somente pagamentos com status = paid)
    pub async fn monthly_revenue<'e, E>(
        &self,
        executor: E,
        since: DateTime<Utc>,
    ) -> Result<Vec<MonthlyRevenueRow>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let rows = sqlx::query_as::<_, MonthlyRevenueRow>(
            r#"
            SELECT EXTRACT(YEAR FROM paid_at AT TIME ZONE 'UTC')::int AS year,
                   EXTRACT(MONTH FROM paid_at AT TIME ZONE 'UTC')::int AS month,
                   COALESCE(SUM(amount), 0) AS total
            FROM payments
            WHERE status = 'paid'
              AND paid_at IS NOT NULL
              AND paid_at >= $1
            GROUP BY 1, 2
            ORDER BY 1, 2
            "#,
        )
        .bind(since)
        .fetch_all(executor)
        .await?;

        Ok(rows)
    }

    // 4. Top K serviços por quantidade pedida.
    //    Desempate por s.id para manter o ranking determinístico.
    pub async fn top_services<'e, E>(
        &self,
        executor: E,
        limit: i64,
    ) -> Result<Vec<ServicePopularityEntry>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let rows = sqlx::query_as::<_, ServicePopularityEntry>(
            r#"
            SELECT s.name AS service_name,
                   SUM(bi.quantity)::bigint AS total_quantity
            FROM booking_items bi
            JOIN services s ON s.id = bi.service_id
            GROUP BY s.id, s.name
            ORDER BY total_quantity DESC, s.id ASC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(executor)
        .await?;

        Ok(rows)
    }

    // 5. Top K clientes. LEFT JOIN: usuário sem booking aparece com
    //    count 0 / gasto 0, só que no fim do ranking.
    pub async fn top_spenders<'e, E>(
        &self,
        executor: E,
        limit: i64,
    ) -> Result<Vec<TopSpenderEntry>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let rows = sqlx::query_as::<_, TopSpenderEntry>(
            r#"
            SELECT u.id AS user_id,
                   u.fullname,
                   u.email,
                   COUNT(b.id)::bigint AS booking_count,
                   COALESCE(SUM(b.total_price), 0) AS total_spent
            FROM users u
            LEFT JOIN bookings b ON b.user_id = u.id
            GROUP BY u.id, u.fullname, u.email, u.created_at
            ORDER BY booking_count DESC, u.created_at ASC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(executor)
        .await?;

        Ok(rows)
    }

    // 6. Tabela de bookings recentes
    pub async fn latest_bookings<'e, E>(
        &self,
        executor: E,
        limit: i64,
    ) -> Result<Vec<LatestBookingEntry>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let rows = sqlx::query_as::<_, LatestBookingEntry>(
            r#"
            SELECT b.id,
                   b.booking_number,
                   u.fullname AS customer_name,
                   b.scheduled_at,
                   b.total_price,
                   b.status,
                   b.created_at
            FROM bookings b
            JOIN users u ON u.id = b.user_id
            ORDER BY b.created_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(executor)
        .await?;

        Ok(rows)
    }
}
