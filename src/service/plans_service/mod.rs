mod dto;
mod plan_duration;
mod plan_price;
mod plans_service;
mod plans_service_impl;

pub use dto::PlansServiceConfig;
pub use plan_duration::*;
pub use plan_price::*;
pub use plans_service::*;
pub use plans_service_impl::*;
