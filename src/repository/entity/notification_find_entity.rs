use crate::dto::input::NotificationType;
use bson::{oid::ObjectId, DateTime};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationFindEntity {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub text: String,
    pub receiver: Option<ObjectId>,
    pub reference_id: ObjectId,
    pub screen: String,

    #[serde(default)]
    pub read: bool,

    #[serde(rename = "type")]
    pub notification_type: Option<NotificationType>,

    pub created_at: DateTime,
    pub updated_at: DateTime,
}
