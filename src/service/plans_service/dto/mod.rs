mod plans_service_config;

pub use plans_service_config::*;
