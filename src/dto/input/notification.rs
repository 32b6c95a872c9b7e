use super::NotificationType;
use crate::dto::inoutput::object_id_hex;
use bson::oid::ObjectId;
use serde::Deserialize;

///
/// New notification as sent by dispatching collaborator.
/// `read` and timestamps are managed by the application
/// and are ignored when present.
///
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub text: String,
    #[serde(default, with = "object_id_hex::option")]
    pub receiver: Option<ObjectId>,
    #[serde(with = "object_id_hex")]
    pub reference_id: ObjectId,
    pub screen: String,
    #[serde(rename = "type", default)]
    pub notification_type: Option<NotificationType>,
}
