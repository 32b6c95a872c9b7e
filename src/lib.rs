//!
//! Notification records stored in MongoDB and billing provisioning
//! of subscription plans in the payment provider
//!

pub mod application;
pub mod dto;
pub mod error;
pub mod payment_provider;
pub mod repository;
pub mod service;
