pub mod booking_service;
pub mod stats_service;
pub mod tutor_service;
pub mod user_service;
