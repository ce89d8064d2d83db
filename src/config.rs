// src/config.rs

use sqlx::{PgPool, postgres::PgPoolOptions};
use std::{env, time::Duration};

use crate::{
    db::{
        BookingRepository, CatalogRepository, DashboardRepository, FinanceRepository,
        UserRepository,
    },
    services::{BookingService, CatalogService, DashboardService, FinanceService, UserService},
};

#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub booking_service: BookingService,
    pub catalog_service: CatalogService,
    pub dashboard_service: DashboardService,
    pub finance_service: FinanceService,
    pub user_service: UserService,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL")?;

        let db_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_url)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        // --- Monta o gráfico de dependências ---
        let user_repo = UserRepository::new(db_pool.clone());
        let catalog_repo = CatalogRepository::new(db_pool.clone());
        let booking_repo = BookingRepository::new(db_pool.clone());
        let finance_repo = FinanceRepository::new(db_pool.clone());
        let dashboard_repo = DashboardRepository::new(db_pool.clone());

        let booking_service = BookingService::new(
            booking_repo.clone(),
            catalog_repo.clone(),
            user_repo.clone(),
            finance_repo.clone(),
        );
        let catalog_service = CatalogService::new(catalog_repo);
        let dashboard_service = DashboardService::new(dashboard_repo);
        let finance_service = FinanceService::new(finance_repo, booking_repo);
        let user_service = UserService::new(user_repo);

        Ok(Self {
            db_pool,
            booking_service,
            catalog_service,
            dashboard_service,
            finance_service,
            user_service,
        })
    }
}
