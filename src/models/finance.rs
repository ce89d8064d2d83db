// src/models/finance.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

// --- Enums (Mapeando o Postgres) ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "payment_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Paid, // Somente este status entra na receita do dashboard
    Failed,
    Refunded,
}

// --- Structs ---

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: Uuid,
    pub booking_id: Uuid,

    #[schema(example = "130000.00")]
    pub amount: Decimal,

    #[schema(example = "bank_transfer")]
    pub method: String,

    pub status: PaymentStatus,

    pub transaction_id: Option<String>,
    pub gateway_response: Option<serde_json::Value>,

    pub paid_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    pub id: Uuid,
    pub booking_id: Uuid,
    pub user_id: Uuid,
    pub cleaner_id: Option<Uuid>,

    #[schema(example = 5)]
    pub rating: i32,

    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

// --- Payloads ---

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentPayload {
    /// Precisa ser >= 0; guard no service (validator não cobre Decimal).
    pub amount: Decimal,

    #[validate(length(min = 1, max = 50))]
    pub method: String,

    pub transaction_id: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRatingPayload {
    pub user_id: Uuid,

    #[validate(range(min = 1, max = 5))]
    pub rating: i32,

    pub comment: Option<String>,
}
