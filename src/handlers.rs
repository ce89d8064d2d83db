pub mod bookings;
pub mod catalog;
pub mod dashboard;
pub mod users;
