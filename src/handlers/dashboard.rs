// src/handlers/dashboard.rs

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    common::error::AppError,
    config::AppState,
    models::{
        booking::BookingStatus,
        dashboard::{
            DailyBookingEntry, DashboardSummary, LatestBookingEntry, MonthlyRevenueEntry,
            ServicePopularity, TopSpenderEntry,
        },
    },
};

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct BookingsChartParams {
    /// Janela em dias (padrão 30)
    pub days: Option<u32>,
    /// Filtro opcional de status
    pub status: Option<BookingStatus>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct RevenueChartParams {
    /// Janela em meses (padrão 12)
    pub months: Option<u32>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct TopListParams {
    /// Tamanho do ranking
    pub limit: Option<i64>,
}

// GET /api/dashboard/summary
#[utoipa::path(
    get,
    path = "/api/dashboard/summary",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Cards do topo: usuários, bookings e receita do mês", body = DashboardSummary)
    )
)]
pub async fn get_summary(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let summary = app_state
        .dashboard_service
        .get_summary(&app_state.db_pool)
        .await?;

    Ok((StatusCode::OK, Json(summary)))
}

// GET /api/dashboard/bookings-chart
#[utoipa::path(
    get,
    path = "/api/dashboard/bookings-chart",
    tag = "Dashboard",
    params(BookingsChartParams),
    responses(
        (status = 200, description = "Série densa de bookings por dia (N pontos, zero-fill)", body = Vec<DailyBookingEntry>)
    )
)]
pub async fn get_bookings_chart(
    State(app_state): State<AppState>,
    Query(params): Query<BookingsChartParams>,
) -> Result<impl IntoResponse, AppError> {
    let series = app_state
        .dashboard_service
        .daily_booking_counts(&app_state.db_pool, params.days, params.status)
        .await?;

    Ok((StatusCode::OK, Json(series)))
}

// GET /api/dashboard/revenue-chart
#[utoipa::path(
    get,
    path = "/api/dashboard/revenue-chart",
    tag = "Dashboard",
    params(RevenueChartParams),
    responses(
        (status = 200, description = "Receita paga por mês (M entradas, zero-fill)", body = Vec<MonthlyRevenueEntry>)
    )
)]
pub async fn get_revenue_chart(
    State(app_state): State<AppState>,
    Query(params): Query<RevenueChartParams>,
) -> Result<impl IntoResponse, AppError> {
    let series = app_state
        .dashboard_service
        .monthly_revenue(&app_state.db_pool, params.months)
        .await?;

    Ok((StatusCode::OK, Json(series)))
}

// GET /api/dashboard/top-services
#[utoipa::path(
    get,
    path = "/api/dashboard/top-services",
    tag = "Dashboard",
    params(TopListParams),
    responses(
        (status = 200, description = "Ranking de serviços por quantidade; sentinela noData quando a base está vazia", body = ServicePopularity)
    )
)]
pub async fn get_top_services(
    State(app_state): State<AppState>,
    Query(params): Query<TopListParams>,
) -> Result<impl IntoResponse, AppError> {
    let popularity = app_state
        .dashboard_service
        .top_services(&app_state.db_pool, params.limit)
        .await?;

    Ok((StatusCode::OK, Json(popularity)))
}

// GET /api/dashboard/top-spenders
#[utoipa::path(
    get,
    path = "/api/dashboard/top-spenders",
    tag = "Dashboard",
    params(TopListParams),
    responses(
        (status = 200, description = "Clientes por número de bookings e total gasto (LEFT JOIN)", body = Vec<TopSpenderEntry>)
    )
)]
pub async fn get_top_spenders(
    State(app_state): State<AppState>,
    Query(params): Query<TopListParams>,
) -> Result<impl IntoResponse, AppError> {
    let spenders = app_state
        .dashboard_service
        .top_spenders(&app_state.db_pool, params.limit)
        .await?;

    Ok((StatusCode::OK, Json(spenders)))
}

// GET /api/dashboard/latest-bookings
#[utoipa::path(
    get,
    path = "/api/dashboard/latest-bookings",
    tag = "Dashboard",
    params(TopListParams),
    responses(
        (status = 200, description = "Bookings mais recentes para a tabela do dashboard", body = Vec<LatestBookingEntry>)
    )
)]
pub async fn get_latest_bookings(
    State(app_state): State<AppState>,
    Query(params): Query<TopListParams>,
) -> Result<impl IntoResponse, AppError> {
    let bookings = app_state
        .dashboard_service
        .latest_bookings(&app_state.db_pool, params.limit)
        .await?;

    Ok((StatusCode::OK, Json(bookings)))
}
