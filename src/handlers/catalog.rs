// src/handlers/catalog.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    models::catalog::{
        Cleaner, CreateCleanerPayload, CreateServicePayload, Service, UpdateCleanerStatusPayload,
    },
};

// POST /api/services
#[utoipa::path(
    post,
    path = "/api/services",
    tag = "Catalog",
    request_body = CreateServicePayload,
    responses(
        (status = 201, description = "Serviço criado", body = Service),
        (status = 400, description = "Preço base inválido"),
        (status = 409, description = "Código já em uso")
    )
)]
pub async fn create_service(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateServicePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let service = app_state
        .catalog_service
        .create_service(&app_state.db_pool, &payload)
        .await?;

    Ok((StatusCode::CREATED, Json(service)))
}

// GET /api/services
#[utoipa::path(
    get,
    path = "/api/services",
    tag = "Catalog",
    responses(
        (status = 200, description = "Catálogo de serviços", body = Vec<Service>)
    )
)]
pub async fn get_all_services(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let services = app_state
        .catalog_service
        .get_all_services(&app_state.db_pool)
        .await?;

    Ok((StatusCode::OK, Json(services)))
}

// POST /api/cleaners
#[utoipa::path(
    post,
    path = "/api/cleaners",
    tag = "Catalog",
    request_body = CreateCleanerPayload,
    responses(
        (status = 201, description = "Faxineiro cadastrado", body = Cleaner),
        (status = 409, description = "Código de funcionário já em uso")
    )
)]
pub async fn create_cleaner(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateCleanerPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let cleaner = app_state
        .catalog_service
        .create_cleaner(&app_state.db_pool, &payload)
        .await?;

    Ok((StatusCode::CREATED, Json(cleaner)))
}

// GET /api/cleaners
#[utoipa::path(
    get,
    path = "/api/cleaners",
    tag = "Catalog",
    responses(
        (status = 200, description = "Equipe de limpeza", body = Vec<Cleaner>)
    )
)]
pub async fn get_all_cleaners(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let cleaners = app_state
        .catalog_service
        .get_all_cleaners(&app_state.db_pool)
        .await?;

    Ok((StatusCode::OK, Json(cleaners)))
}

// POST /api/cleaners/{id}/status
#[utoipa::path(
    post,
    path = "/api/cleaners/{id}/status",
    tag = "Catalog",
    params(("id" = Uuid, Path, description = "ID do faxineiro")),
    request_body = UpdateCleanerStatusPayload,
    responses(
        (status = 200, description = "Status atualizado", body = Cleaner),
        (status = 404, description = "Faxineiro não encontrado")
    )
)]
pub async fn update_cleaner_status(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateCleanerStatusPayload>,
) -> Result<impl IntoResponse, AppError> {
    let cleaner = app_state
        .catalog_service
        .update_cleaner_status(&app_state.db_pool, id, payload.status)
        .await?;

    Ok((StatusCode::OK, Json(cleaner)))
}
