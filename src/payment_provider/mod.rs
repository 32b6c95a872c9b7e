//!
//! Payment provider resources needed to sell subscription plans
//!

mod dto;
mod error;
mod payment_provider;
mod stripe_payment_provider;

pub use dto::*;
pub use error::*;
pub use payment_provider::*;
pub use stripe_payment_provider::*;
