pub mod access_control;
pub mod auth_service;
pub mod time_tracking;
