// src/models/booking.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::finance::{Payment, Rating};

// --- Enums (Mapeando o Postgres) ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "booking_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    InProgress,
    Completed,
    Cancelled,
}

// --- Structs ---

/// Cabeçalho do booking. `total_price` é um cache desnormalizado:
/// recalculado e persistido a cada mutação de itens, nunca derivado na leitura.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: Uuid,

    #[schema(example = "BK-20250825-7F3A2C")]
    pub booking_number: String,

    pub user_id: Uuid,

    /// Faxineiro atribuído; opcional até a confirmação.
    pub cleaner_id: Option<Uuid>,

    pub scheduled_at: DateTime<Utc>,

    #[schema(example = 120)]
    pub duration_minutes: i32,

    pub address: String,

    /// {"lat": ..., "lng": ...}
    pub location: Option<serde_json::Value>,

    pub status: BookingStatus,

    #[schema(example = "130000.00")]
    pub total_price: Decimal,

    pub extras: Option<serde_json::Value>,

    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Item de serviço dentro de um booking. `price` é snapshot do
/// `base_price` do serviço no momento da inclusão — alterações
/// posteriores no catálogo não afetam bookings históricos.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingItem {
    pub id: Uuid,
    pub booking_id: Uuid,
    pub service_id: Uuid,

    #[schema(example = 2)]
    pub quantity: i32,

    #[schema(example = "50000.00")]
    pub price: Decimal,

    pub notes: Option<String>,
}

/// Visão completa de um booking para a tela de detalhe.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingDetail {
    #[serde(flatten)]
    pub booking: Booking,
    pub items: Vec<BookingItem>,
    pub payments: Vec<Payment>,
    pub rating: Option<Rating>,
}

/// Resposta das mutações de item: o novo total recalculado.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingTotalResponse {
    pub booking_id: Uuid,
    #[schema(example = "130000.00")]
    pub total_price: Decimal,
}

// --- Payloads ---

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingItemPayload {
    pub service_id: Uuid,

    #[validate(range(min = 1))]
    #[schema(example = 2)]
    pub quantity: i32,

    /// Omitido = `base_price` atual do serviço.
    pub unit_price: Option<Decimal>,

    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingPayload {
    pub user_id: Uuid,

    pub scheduled_at: DateTime<Utc>,

    #[validate(range(min = 15, max = 1440))]
    pub duration_minutes: i32,

    #[validate(length(min = 1))]
    pub address: String,

    pub location: Option<serde_json::Value>,
    pub extras: Option<serde_json::Value>,

    #[validate(nested)]
    pub items: Vec<BookingItemPayload>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignCleanerPayload {
    pub cleaner_id: Uuid,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChangeStatusPayload {
    pub status: BookingStatus,
}
