use bson::{oid::ObjectId, DateTime};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationInsertEntity<'a> {
    pub text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receiver: Option<ObjectId>,
    pub reference_id: ObjectId,
    pub screen: &'a str,
    pub read: bool,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub notification_type: Option<&'a str>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}
