pub mod booking_repo;
pub use booking_repo::BookingRepository;
pub mod catalog_repo;
pub use catalog_repo::CatalogRepository;
pub mod dashboard_repo;
pub use dashboard_repo::DashboardRepository;
pub mod finance_repo;
pub use finance_repo::FinanceRepository;
pub mod user_repo;
pub use user_repo::UserRepository;
