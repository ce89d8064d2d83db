// src/models/dashboard.rs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::booking::BookingStatus;

// 1. Cards do topo (snapshot consistente, lido em uma transação)
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_users: i64,
    pub bookings_this_month: i64,
    pub bookings_prev_month: i64,
    pub revenue_this_month: Decimal,
    pub revenue_prev_month: Decimal,
    pub pending_bookings: i64,
}

// 2. Gráfico de bookings por dia (série densa: exatamente N pontos,
//    dias sem booking aparecem com count = 0)
#[derive(Debug, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DailyBookingEntry {
    #[schema(example = "2025-08-25")]
    pub date: NaiveDate,
    pub count: i64,
}

// Linha esparsa vinda do GROUP BY; o service preenche os buracos.
#[derive(Debug, FromRow)]
pub struct DailyCountRow {
    pub day: NaiveDate,
    pub count: i64,
}

// 3. Receita por mês (série densa de M meses, chave "YYYY-MM")
#[derive(Debug, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyRevenueEntry {
    #[schema(example = "2025-08")]
    pub year_month: String,
    #[schema(example = "1250000.00")]
    pub total: Decimal,
}

#[derive(Debug, FromRow)]
pub struct MonthlyRevenueRow {
    pub year: i32,
    pub month: i32,
    pub total: Decimal,
}

// 4. Popularidade de serviços (Top K por quantidade)
#[derive(Debug, Clone, PartialEq, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServicePopularityEntry {
    #[schema(example = "Limpeza Pesada")]
    pub service_name: String,
    pub total_quantity: i64,
}

/// Resultado da popularidade: `NoData` é um sentinela explícito para a
/// base vazia — o chamador precisa tratá-lo, nunca é uma lista vazia.
#[derive(Debug, PartialEq, Serialize, ToSchema)]
#[serde(tag = "kind", content = "entries", rename_all = "camelCase")]
pub enum ServicePopularity {
    NoData,
    Ranked(Vec<ServicePopularityEntry>),
}

// 5. Top clientes (LEFT JOIN: usuários sem booking aparecem com 0)
#[derive(Debug, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TopSpenderEntry {
    pub user_id: Uuid,
    pub fullname: String,
    pub email: String,
    pub booking_count: i64,
    #[schema(example = "560000.00")]
    pub total_spent: Decimal,
}

// 6. Bookings recentes (tabela do dashboard)
#[derive(Debug, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LatestBookingEntry {
    pub id: Uuid,
    pub booking_number: String,
    pub customer_name: String,
    pub scheduled_at: DateTime<Utc>,
    pub total_price: Decimal,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}
