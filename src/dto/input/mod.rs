mod notification;
mod notification_filters;
mod pagination;
mod plan;

pub use super::inoutput::NotificationType;
pub use notification::*;
pub use notification_filters::*;
pub use pagination::*;
pub use plan::*;
