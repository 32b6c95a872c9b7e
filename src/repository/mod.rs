mod dto;
mod entity;
mod error;
mod notifications_repository;
mod notifications_repository_impl;

pub use dto::*;
pub use error::*;
pub use notifications_repository::*;
pub use notifications_repository_impl::*;
