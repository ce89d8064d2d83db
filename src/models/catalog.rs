// src/models/catalog.rs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

// --- Enums (Mapeando o Postgres) ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "cleaner_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum CleanerStatus {
    Active,
    Inactive,
    OnLeave,
}

// --- Structs ---

/// Entrada do catálogo de serviços. `base_price` é o preço vigente,
/// copiado para o item no momento da inclusão no booking.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: Uuid,

    #[schema(example = "DEEP_CLEAN")]
    pub code: String,

    #[schema(example = "Limpeza Pesada")]
    pub name: String,

    pub description: Option<String>,

    #[schema(example = "250000.00")]
    pub base_price: Decimal,

    #[schema(example = 120)]
    pub default_duration_minutes: i32,

    pub is_active: bool,

    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Cleaner {
    pub id: Uuid,

    #[schema(example = "CLN-0042")]
    pub employee_code: String,

    #[schema(example = "João da Silva")]
    pub fullname: String,

    pub phone: Option<String>,
    pub email: Option<String>,

    pub status: CleanerStatus,

    pub availability: Option<serde_json::Value>,
    pub notes: Option<String>,
    pub hired_at: Option<NaiveDate>,

    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

// --- Payloads ---

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateServicePayload {
    #[validate(length(min = 1, max = 50))]
    pub code: String,

    #[validate(length(min = 1, max = 150))]
    pub name: String,

    pub description: Option<String>,

    /// Precisa ser >= 0; o guard fica no service (validator não cobre Decimal).
    pub base_price: Decimal,

    pub default_duration_minutes: Option<i32>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCleanerPayload {
    #[validate(length(min = 1, max = 50))]
    pub employee_code: String,

    #[validate(length(min = 1, max = 150))]
    pub fullname: String,

    pub phone: Option<String>,

    #[validate(email)]
    pub email: Option<String>,

    pub availability: Option<serde_json::Value>,
    pub notes: Option<String>,
    pub hired_at: Option<NaiveDate>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCleanerStatusPayload {
    pub status: CleanerStatus,
}
