use serde::{Deserialize, Serialize};
use strum::AsRefStr;

///
/// Audience of the notification.
/// Notifications without type are addressed to the receiver
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Serialize, Deserialize)]
pub enum NotificationType {
    #[strum(serialize = "ADMIN")]
    #[serde(rename = "ADMIN")]
    Admin,
}
