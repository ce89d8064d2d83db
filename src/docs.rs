// src/docs.rs

use utoipa::OpenApi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Dashboard ---
        handlers::dashboard::get_summary,
        handlers::dashboard::get_bookings_chart,
        handlers::dashboard::get_revenue_chart,
        handlers::dashboard::get_top_services,
        handlers::dashboard::get_top_spenders,
        handlers::dashboard::get_latest_bookings,

        // --- Bookings ---
        handlers::bookings::create_booking,
        handlers::bookings::list_bookings,
        handlers::bookings::get_booking,
        handlers::bookings::upsert_booking_item,
        handlers::bookings::delete_booking_item,
        handlers::bookings::assign_cleaner,
        handlers::bookings::change_status,
        handlers::bookings::create_payment,
        handlers::bookings::mark_payment_paid,
        handlers::bookings::rate_booking,

        // --- Catalog ---
        handlers::catalog::create_service,
        handlers::catalog::get_all_services,
        handlers::catalog::create_cleaner,
        handlers::catalog::get_all_cleaners,
        handlers::catalog::update_cleaner_status,

        // --- Users ---
        handlers::users::create_user,
        handlers::users::get_all_users,
        handlers::users::get_user,
        handlers::users::list_subscriptions,
        handlers::users::panel_access,
    ),
    components(
        schemas(
            // --- DASHBOARD ---
            models::dashboard::DashboardSummary,
            models::dashboard::DailyBookingEntry,
            models::dashboard::MonthlyRevenueEntry,
            models::dashboard::ServicePopularity,
            models::dashboard::ServicePopularityEntry,
            models::dashboard::TopSpenderEntry,
            models::dashboard::LatestBookingEntry,

            // --- BOOKINGS ---
            models::booking::BookingStatus,
            models::booking::Booking,
            models::booking::BookingItem,
            models::booking::BookingDetail,
            models::booking::BookingTotalResponse,
            models::booking::CreateBookingPayload,
            models::booking::BookingItemPayload,
            models::booking::AssignCleanerPayload,
            models::booking::ChangeStatusPayload,

            // --- FINANCE ---
            models::finance::PaymentStatus,
            models::finance::Payment,
            models::finance::Rating,
            models::finance::CreatePaymentPayload,
            models::finance::CreateRatingPayload,

            // --- CATALOG ---
            models::catalog::CleanerStatus,
            models::catalog::Service,
            models::catalog::Cleaner,
            models::catalog::CreateServicePayload,
            models::catalog::CreateCleanerPayload,
            models::catalog::UpdateCleanerStatusPayload,

            // --- USERS ---
            models::user::UserRole,
            models::user::SubscriptionStatus,
            models::user::User,
            models::user::Subscription,
            models::user::CreateUserPayload,
            models::user::PanelAccessResponse,
        )
    ),
    tags(
        (name = "Dashboard", description = "Indicadores e Gráficos Gerenciais"),
        (name = "Bookings", description = "Gestão de Bookings, Itens e Pagamentos"),
        (name = "Catalog", description = "Catálogo de Serviços e Equipe"),
        (name = "Users", description = "Clientes e Assinaturas")
    )
)]
pub struct ApiDoc;
