// src/services/catalog_service.rs

use rust_decimal::Decimal;
use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::CatalogRepository,
    models::catalog::{Cleaner, CleanerStatus, CreateCleanerPayload, CreateServicePayload, Service},
};

const DEFAULT_SERVICE_DURATION_MINUTES: i32 = 60;

#[derive(Clone)]
pub struct CatalogService {
    repo: CatalogRepository,
}

impl CatalogService {
    pub fn new(repo: CatalogRepository) -> Self {
        Self { repo }
    }

    // --- SERVIÇOS ---

    pub async fn create_service<'e, E>(
        &self,
        executor: E,
        payload: &CreateServicePayload,
    ) -> Result<Service, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        if payload.base_price < Decimal::ZERO {
            return Err(AppError::InvalidUnitPrice(payload.base_price));
        }

        self.repo
            .create_service(
                executor,
                &payload.code,
                &payload.name,
                payload.description.as_deref(),
                payload.base_price,
                payload
                    .default_duration_minutes
                    .unwrap_or(DEFAULT_SERVICE_DURATION_MINUTES),
            )
            .await
    }

    pub async fn get_all_services<'e, E>(&self, executor: E) -> Result<Vec<Service>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.get_all_services(executor).await
    }

    // --- PETUGAS ---

    pub async fn create_cleaner<'e, E>(
        &self,
        executor: E,
        payload: &CreateCleanerPayload,
    ) -> Result<Cleaner, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo
            .create_cleaner(
                executor,
                &payload.employee_code,
                &payload.fullname,
                payload.phone.as_deref(),
                payload.email.as_deref(),
                payload.availability.as_ref(),
                payload.notes.as_deref(),
                payload.hired_at,
            )
            .await
    }

    pub async fn get_all_cleaners<'e, E>(&self, executor: E) -> Result<Vec<Cleaner>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.get_all_cleaners(executor).await
    }

    pub async fn update_cleaner_status<'e, E>(
        &self,
        executor: E,
        cleaner_id: Uuid,
        status: CleanerStatus,
    ) -> Result<Cleaner, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo
            .update_cleaner_status(executor, cleaner_id, status)
            .await?
            .ok_or(AppError::CleanerNotFound)
    }
}
