pub mod notifications_service;
pub mod plans_service;
