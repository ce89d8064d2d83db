// src/handlers/bookings.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    models::{
        booking::{
            AssignCleanerPayload, Booking, BookingDetail, BookingItemPayload, BookingStatus,
            BookingTotalResponse, ChangeStatusPayload, CreateBookingPayload,
        },
        finance::{CreatePaymentPayload, CreateRatingPayload, Payment, Rating},
    },
};

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ListBookingsParams {
    pub status: Option<BookingStatus>,
    pub limit: Option<i64>,
}

// POST /api/bookings
#[utoipa::path(
    post,
    path = "/api/bookings",
    tag = "Bookings",
    request_body = CreateBookingPayload,
    responses(
        (status = 201, description = "Booking criado com itens e total já calculado", body = Booking),
        (status = 400, description = "Quantidade ou preço inválido"),
        (status = 404, description = "Usuário ou serviço não encontrado")
    )
)]
pub async fn create_booking(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateBookingPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let booking = app_state
        .booking_service
        .create_booking(&app_state.db_pool, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(booking)))
}

// GET /api/bookings
#[utoipa::path(
    get,
    path = "/api/bookings",
    tag = "Bookings",
    params(ListBookingsParams),
    responses(
        (status = 200, description = "Bookings mais recentes, filtro opcional por status", body = Vec<Booking>)
    )
)]
pub async fn list_bookings(
    State(app_state): State<AppState>,
    Query(params): Query<ListBookingsParams>,
) -> Result<impl IntoResponse, AppError> {
    let bookings = app_state
        .booking_service
        .list_bookings(
            &app_state.db_pool,
            params.status,
            params.limit.unwrap_or(50).clamp(1, 200),
        )
        .await?;

    Ok((StatusCode::OK, Json(bookings)))
}

// GET /api/bookings/{id}
#[utoipa::path(
    get,
    path = "/api/bookings/{id}",
    tag = "Bookings",
    params(("id" = Uuid, Path, description = "ID do booking")),
    responses(
        (status = 200, description = "Booking com itens, pagamentos e avaliação", body = BookingDetail),
        (status = 404, description = "Booking não encontrado")
    )
)]
pub async fn get_booking(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let detail = app_state
        .booking_service
        .get_booking_detail(&app_state.db_pool, id)
        .await?;

    Ok((StatusCode::OK, Json(detail)))
}

// POST /api/bookings/{id}/items
#[utoipa::path(
    post,
    path = "/api/bookings/{id}/items",
    tag = "Bookings",
    params(("id" = Uuid, Path, description = "ID do booking")),
    request_body = BookingItemPayload,
    responses(
        (status = 200, description = "Item inserido/atualizado; retorna o total recalculado", body = BookingTotalResponse),
        (status = 400, description = "Quantidade ou preço inválido"),
        (status = 404, description = "Booking ou serviço não encontrado")
    )
)]
pub async fn upsert_booking_item(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<BookingItemPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let total = app_state
        .booking_service
        .upsert_booking_item(&app_state.db_pool, id, &payload)
        .await?;

    Ok((StatusCode::OK, Json(total)))
}

// DELETE /api/bookings/items/{item_id}
#[utoipa::path(
    delete,
    path = "/api/bookings/items/{item_id}",
    tag = "Bookings",
    params(("item_id" = Uuid, Path, description = "ID do item")),
    responses(
        (status = 200, description = "Item removido; retorna o total recalculado (0 se era o último)", body = BookingTotalResponse),
        (status = 404, description = "Item não encontrado")
    )
)]
pub async fn delete_booking_item(
    State(app_state): State<AppState>,
    Path(item_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let total = app_state
        .booking_service
        .delete_booking_item(&app_state.db_pool, item_id)
        .await?;

    Ok((StatusCode::OK, Json(total)))
}

// POST /api/bookings/{id}/assign-cleaner
#[utoipa::path(
    post,
    path = "/api/bookings/{id}/assign-cleaner",
    tag = "Bookings",
    params(("id" = Uuid, Path, description = "ID do booking")),
    request_body = AssignCleanerPayload,
    responses(
        (status = 200, description = "Faxineiro atribuído", body = Booking),
        (status = 404, description = "Booking ou faxineiro não encontrado"),
        (status = 409, description = "Faxineiro não está ativo")
    )
)]
pub async fn assign_cleaner(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<AssignCleanerPayload>,
) -> Result<impl IntoResponse, AppError> {
    let booking = app_state
        .booking_service
        .assign_cleaner(&app_state.db_pool, id, payload.cleaner_id)
        .await?;

    Ok((StatusCode::OK, Json(booking)))
}

// POST /api/bookings/{id}/status
#[utoipa::path(
    post,
    path = "/api/bookings/{id}/status",
    tag = "Bookings",
    params(("id" = Uuid, Path, description = "ID do booking")),
    request_body = ChangeStatusPayload,
    responses(
        (status = 200, description = "Status atualizado", body = Booking),
        (status = 404, description = "Booking não encontrado")
    )
)]
pub async fn change_status(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ChangeStatusPayload>,
) -> Result<impl IntoResponse, AppError> {
    let booking = app_state
        .booking_service
        .change_status(&app_state.db_pool, id, payload.status)
        .await?;

    Ok((StatusCode::OK, Json(booking)))
}

// POST /api/bookings/{id}/payments
#[utoipa::path(
    post,
    path = "/api/bookings/{id}/payments",
    tag = "Bookings",
    params(("id" = Uuid, Path, description = "ID do booking")),
    request_body = CreatePaymentPayload,
    responses(
        (status = 201, description = "Pagamento registrado (pendente)", body = Payment),
        (status = 400, description = "Valor inválido"),
        (status = 404, description = "Booking não encontrado")
    )
)]
pub async fn create_payment(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<CreatePaymentPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let payment = app_state
        .finance_service
        .create_payment(&app_state.db_pool, id, &payload)
        .await?;

    Ok((StatusCode::CREATED, Json(payment)))
}

// POST /api/bookings/payments/{payment_id}/mark-paid
#[utoipa::path(
    post,
    path = "/api/bookings/payments/{payment_id}/mark-paid",
    tag = "Bookings",
    params(("payment_id" = Uuid, Path, description = "ID do pagamento")),
    responses(
        (status = 200, description = "Pagamento confirmado; passa a contar na receita", body = Payment),
        (status = 404, description = "Pagamento não encontrado")
    )
)]
pub async fn mark_payment_paid(
    State(app_state): State<AppState>,
    Path(payment_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let payment = app_state
        .finance_service
        .mark_paid(&app_state.db_pool, payment_id)
        .await?;

    Ok((StatusCode::OK, Json(payment)))
}

// POST /api/bookings/{id}/rating
#[utoipa::path(
    post,
    path = "/api/bookings/{id}/rating",
    tag = "Bookings",
    params(("id" = Uuid, Path, description = "ID do booking")),
    request_body = CreateRatingPayload,
    responses(
        (status = 201, description = "Avaliação registrada", body = Rating),
        (status = 404, description = "Booking não encontrado"),
        (status = 409, description = "Booking já avaliado")
    )
)]
pub async fn rate_booking(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<CreateRatingPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let rating = app_state
        .booking_service
        .rate_booking(
            &app_state.db_pool,
            id,
            payload.user_id,
            payload.rating,
            payload.comment.as_deref(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(rating)))
}
