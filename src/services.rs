pub mod booking_service;
pub use booking_service::BookingService;
pub mod catalog_service;
pub use catalog_service::CatalogService;
pub mod dashboard_service;
pub use dashboard_service::DashboardService;
pub mod finance_service;
pub use finance_service::FinanceService;
pub mod user_service;
pub use user_service::UserService;
