use crate::{dto::input::NotificationType, repository::entity::NotificationFindEntity};
use bson::oid::ObjectId;
use time::OffsetDateTime;

#[derive(Debug, Clone)]
pub struct Notification {
    pub id: ObjectId,
    pub text: String,
    pub receiver: Option<ObjectId>,
    pub reference_id: ObjectId,
    pub screen: String,
    pub read: bool,
    pub notification_type: Option<NotificationType>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl From<NotificationFindEntity> for Notification {
    fn from(value: NotificationFindEntity) -> Self {
        Self {
            id: value.id,
            text: value.text,
            receiver: value.receiver,
            reference_id: value.reference_id,
            screen: value.screen,
            read: value.read,
            notification_type: value.notification_type,
            created_at: value.created_at.into(),
            updated_at: value.updated_at.into(),
        }
    }
}
