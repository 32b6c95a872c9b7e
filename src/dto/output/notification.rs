use super::NotificationType;
use crate::repository;
use serde::Serialize;
use time::OffsetDateTime;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub text: String,
    pub receiver: Option<String>,
    pub reference_id: String,
    pub screen: String,
    pub read: bool,
    #[serde(rename = "type")]
    pub notification_type: Option<NotificationType>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<repository::Notification> for Notification {
    fn from(value: repository::Notification) -> Self {
        Self {
            id: value.id.to_hex(),
            text: value.text,
            receiver: value.receiver.map(|receiver| receiver.to_hex()),
            reference_id: value.reference_id.to_hex(),
            screen: value.screen,
            read: value.read,
            notification_type: value.notification_type,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}
