//src/main.rs

use axum::{
    Router,
    routing::{delete, get, post},
};
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod common;
mod config;
mod db;
mod docs;
mod handlers;
mod models;
mod services;

use crate::config::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().with_target(false).compact().init();

    // .expect() é bom aqui: se a configuração falhar, a aplicação não deve iniciar.
    let app_state = AppState::new()
        .await
        .expect("Falha ao inicializar o estado da aplicação.");

    sqlx::migrate!()
        .run(&app_state.db_pool)
        .await
        .expect("Falha ao rodar as migrações do banco de dados.");

    tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

    let dashboard_routes = Router::new()
        .route("/summary", get(handlers::dashboard::get_summary))
        .route("/bookings-chart", get(handlers::dashboard::get_bookings_chart))
        .route("/revenue-chart", get(handlers::dashboard::get_revenue_chart))
        .route("/top-services", get(handlers::dashboard::get_top_services))
        .route("/top-spenders", get(handlers::dashboard::get_top_spenders))
        .route("/latest-bookings", get(handlers::dashboard::get_latest_bookings));

    let booking_routes = Router::new()
        .route("/"
               ,post(handlers::bookings::create_booking)
               .get(handlers::bookings::list_bookings)
        )
        .route("/{id}", get(handlers::bookings::get_booking))
        .route("/{id}/items", post(handlers::bookings::upsert_booking_item))
        .route("/items/{item_id}", delete(handlers::bookings::delete_booking_item))
        .route("/{id}/assign-cleaner", post(handlers::bookings::assign_cleaner))
        .route("/{id}/status", post(handlers::bookings::change_status))
        .route("/{id}/payments", post(handlers::bookings::create_payment))
        .route("/payments/{payment_id}/mark-paid", post(handlers::bookings::mark_payment_paid))
        .route("/{id}/rating", post(handlers::bookings::rate_booking));

    let service_routes = Router::new()
        .route("/"
               ,post(handlers::catalog::create_service)
               .get(handlers::catalog::get_all_services)
        );

    let cleaner_routes = Router::new()
        .route("/"
               ,post(handlers::catalog::create_cleaner)
               .get(handlers::catalog::get_all_cleaners)
        )
        .route("/{id}/status", post(handlers::catalog::update_cleaner_status));

    let user_routes = Router::new()
        .route("/"
               ,post(handlers::users::create_user)
               .get(handlers::users::get_all_users)
        )
        .route("/{id}", get(handlers::users::get_user))
        .route("/{id}/subscriptions", get(handlers::users::list_subscriptions))
        .route("/{id}/panel-access", get(handlers::users::panel_access));

    // Combina tudo no router principal
    let app = Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .nest("/api/dashboard", dashboard_routes)
        .nest("/api/bookings", booking_routes)
        .nest("/api/services", service_routes)
        .nest("/api/cleaners", cleaner_routes)
        .nest("/api/users", user_routes)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", docs::ApiDoc::openapi()))
        .with_state(app_state);

    // Inicia o servidor
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("0.0.0.0:{port}");
    let listener = TcpListener::bind(&addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr().unwrap());
    axum::serve(listener, app)
        .await
        .expect("Erro no servidor Axum");
}
