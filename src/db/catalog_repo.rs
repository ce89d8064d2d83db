// src/db/catalog_repo.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::{AppError, map_unique_violation},
    models::catalog::{Cleaner, CleanerStatus, Service},
};

#[derive(Clone)]
pub struct CatalogRepository {
    pool: PgPool,
}

impl CatalogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // =========================================================================
    //  SERVIÇOS (Catálogo)
    // =========================================================================

    pub async fn create_service<'e, E>(
        &self,
        executor: E,
        code: &str,
        name: &str,
        description: Option<&str>,
        base_price: Decimal,
        default_duration_minutes: i32,
    ) -> Result<Service, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let service = sqlx::query_as::<_, Service>(
            r#"
            INSERT INTO services (code, name, description, base_price, default_duration_minutes)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, code, name, description, base_price, default_duration_minutes,
                      is_active, created_at, updated_at
            "#,
        )
        .bind(code)
        .bind(name)
        .bind(description)
        .bind(base_price)
        .bind(default_duration_minutes)
        .fetch_one(executor)
        .await
        .map_err(|e| map_unique_violation(e, AppError::CodeAlreadyExists))?;

        Ok(service)
    }

    pub async fn get_service<'e, E>(
        &self,
        executor: E,
        service_id: Uuid,
    ) -> Result<Option<Service>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let service = sqlx::query_as::<_, Service>(
            r#"
            SELECT id, code, name, description, base_price, default_duration_minutes,
                   is_active, created_at, updated_at
            FROM services
            WHERE id = $1
            "#,
        )
        .bind(service_id)
        .fetch_optional(executor)
        .await?;

        Ok(service)
    }

    pub async fn get_all_services<'e, E>(&self, executor: E) -> Result<Vec<Service>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let services = sqlx::query_as::<_, Service>(
            r#"
            SELECT id, code, name, description, base_price, default_duration_minutes,
                   is_active, created_at, updated_at
            FROM services
            ORDER BY name ASC
            "#,
        )
        .fetch_all(executor)
        .await?;

        Ok(services)
    }

    // =========================================================================
    //  PETUGAS (Equipe de limpeza)
    // =========================================================================

    pub async fn create_cleaner<'e, E>(
        &self,
        executor: E,
        employee_code: &str,
        fullname: &str,
        phone: Option<&str>,
        email: Option<&str>,
        availability: Option<&serde_json::Value>,
        notes: Option<&str>,
        hired_at: Option<NaiveDate>,
    ) -> Result<Cleaner, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let cleaner = sqlx::query_as::<_, Cleaner>(
            r#"
            INSERT INTO cleaners (employee_code, fullname, phone, email, availability, notes, hired_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, employee_code, fullname, phone, email, status, availability,
                      notes, hired_at, created_at, updated_at
            "#,
        )
        .bind(employee_code)
        .bind(fullname)
        .bind(phone)
        .bind(email)
        .bind(availability)
        .bind(notes)
        .bind(hired_at)
        .fetch_one(executor)
        .await
        .map_err(|e| map_unique_violation(e, AppError::CodeAlreadyExists))?;

        Ok(cleaner)
    }

    pub async fn get_cleaner<'e, E>(
        &self,
        executor: E,
        cleaner_id: Uuid,
    ) -> Result<Option<Cleaner>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let cleaner = sqlx::query_as::<_, Cleaner>(
            r#"
            SELECT id, employee_code, fullname, phone, email, status, availability,
                   notes, hired_at, created_at, updated_at
            FROM cleaners
            WHERE id = $1
            "#,
        )
        .bind(cleaner_id)
        .fetch_optional(executor)
        .await?;

        Ok(cleaner)
    }

    pub async fn get_all_cleaners<'e, E>(&self, executor: E) -> Result<Vec<Cleaner>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let cleaners = sqlx::query_as::<_, Cleaner>(
            r#"
            SELECT id, employee_code, fullname, phone, email, status, availability,
                   notes, hired_at, created_at, updated_at
            FROM cleaners
            ORDER BY fullname ASC
            "#,
        )
        .fetch_all(executor)
        .await?;

        Ok(cleaners)
    }

    pub async fn update_cleaner_status<'e, E>(
        &self,
        executor: E,
        cleaner_id: Uuid,
        status: CleanerStatus,
    ) -> Result<Option<Cleaner>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let cleaner = sqlx::query_as::<_, Cleaner>(
            r#"
            UPDATE cleaners
            SET status = $2, updated_at = now()
            WHERE id = $1
            RETURNING id, employee_code, fullname, phone, email, status, availability,
                      notes, hired_at, created_at, updated_at
            "#,
        )
        .bind(cleaner_id)
        .bind(status)
        .fetch_optional(executor)
        .await?;

        Ok(cleaner)
    }
}
