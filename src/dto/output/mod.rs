mod notification;
mod notification_id;
mod notifications_count;
mod plan_billing;

pub use super::inoutput::NotificationType;
pub use notification::*;
pub use notification_id::*;
pub use notifications_count::*;
pub use plan_billing::*;
