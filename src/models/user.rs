// src/models/user.rs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

// --- Enums (Mapeando o Postgres) ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "user_role", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,    // Acesso total ao back-office
    Staff,    // Acesso operacional
    Customer, // Cliente final, sem acesso ao painel
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "subscription_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    Active,
    Paused,
    Cancelled,
    Expired,
}

// --- Structs ---

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,

    #[schema(example = "Siti Rahma")]
    pub fullname: String,

    #[schema(example = "siti@example.com")]
    pub email: String,

    #[schema(example = "+62811111111")]
    pub phone: Option<String>,

    pub address: Option<String>,

    pub role: UserRole,

    pub metadata: Option<serde_json::Value>,

    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub id: Uuid,
    pub user_id: Uuid,

    #[schema(example = "MONTHLY_4X")]
    pub plan_code: String,

    #[schema(example = "400000.00")]
    pub price: Decimal,

    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: SubscriptionStatus,
    pub meta: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
}

impl Subscription {
    /// Ativa = status `active` E ainda dentro da vigência.
    pub fn is_active(&self, today: NaiveDate) -> bool {
        self.status == SubscriptionStatus::Active && self.end_date >= today
    }
}

// --- Payloads ---

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserPayload {
    #[validate(length(min = 1, max = 150))]
    pub fullname: String,

    #[validate(email)]
    pub email: String,

    pub phone: Option<String>,
    pub address: Option<String>,

    /// Omitido = `customer`.
    pub role: Option<UserRole>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PanelAccessResponse {
    pub user_id: Uuid,
    pub role: UserRole,
    pub can_access_panel: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subscription(status: SubscriptionStatus, end: NaiveDate) -> Subscription {
        Subscription {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            plan_code: "MONTHLY_4X".into(),
            price: Decimal::new(400_000_00, 2),
            start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            end_date: end,
            status,
            meta: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn subscription_active_within_period() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        let sub = subscription(SubscriptionStatus::Active, today);
        assert!(sub.is_active(today)); // end_date == hoje ainda vale
    }

    #[test]
    fn subscription_inactive_after_end_date() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        let sub = subscription(
            SubscriptionStatus::Active,
            NaiveDate::from_ymd_opt(2025, 6, 14).unwrap(),
        );
        assert!(!sub.is_active(today));
    }

    #[test]
    fn subscription_inactive_when_cancelled() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        let sub = subscription(
            SubscriptionStatus::Cancelled,
            NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
        );
        assert!(!sub.is_active(today));
    }
}
