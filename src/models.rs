pub mod booking;
pub mod catalog;
pub mod dashboard;
pub mod finance;
pub mod user;
