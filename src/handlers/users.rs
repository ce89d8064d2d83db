// src/handlers/users.rs

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
    models::user::{CreateUserPayload, PanelAccessResponse, Subscription, User},
};

// POST /api/users
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "Users",
    request_body = CreateUserPayload,
    responses(
        (status = 201, description = "Usuário criado", body = User),
        (status = 409, description = "E-mail já em uso")
    )
)]
pub async fn create_user(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateUserPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let user = app_state
        .user_service
        .create_user(&app_state.db_pool, &payload)
        .await?;

    Ok((StatusCode::CREATED, Json(user)))
}

// GET /api/users
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    responses(
        (status = 200, description = "Todos os usuários", body = Vec<User>)
    )
)]
pub async fn get_all_users(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let users = app_state
        .user_service
        .get_all_users(&app_state.db_pool)
        .await?;

    Ok((StatusCode::OK, Json(users)))
}

// GET /api/users/{id}
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "Users",
    params(("id" = Uuid, Path, description = "ID do usuário")),
    responses(
        (status = 200, description = "Usuário", body = User),
        (status = 404, description = "Usuário não encontrado")
    )
)]
pub async fn get_user(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let user = app_state.user_service.get_user(&app_state.db_pool, id).await?;

    Ok((StatusCode::OK, Json(user)))
}

// GET /api/users/{id}/subscriptions
#[utoipa::path(
    get,
    path = "/api/users/{id}/subscriptions",
    tag = "Users",
    params(("id" = Uuid, Path, description = "ID do usuário")),
    responses(
        (status = 200, description = "Assinaturas do usuário", body = Vec<Subscription>),
        (status = 404, description = "Usuário não encontrado")
    )
)]
pub async fn list_subscriptions(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let subs = app_state
        .user_service
        .list_subscriptions(&app_state.db_pool, id)
        .await?;

    Ok((StatusCode::OK, Json(subs)))
}

// GET /api/users/{id}/panel-access
#[utoipa::path(
    get,
    path = "/api/users/{id}/panel-access",
    tag = "Users",
    params(("id" = Uuid, Path, description = "ID do usuário")),
    responses(
        (status = 200, description = "Acesso ao painel decidido pela política de papéis", body = PanelAccessResponse),
        (status = 404, description = "Usuário não encontrado")
    )
)]
pub async fn panel_access(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let access = app_state
        .user_service
        .panel_access(&app_state.db_pool, id)
        .await?;

    Ok((StatusCode::OK, Json(access)))
}
