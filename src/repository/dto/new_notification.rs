use crate::dto::input::NotificationType;
use bson::oid::ObjectId;

///
/// Notification that passed validation and is ready to be inserted.
/// `read` and timestamps are set by the repository
///
#[derive(Debug, Clone, PartialEq)]
pub struct NewNotification {
    pub text: String,
    pub receiver: Option<ObjectId>,
    pub reference_id: ObjectId,
    pub screen: String,
    pub notification_type: Option<NotificationType>,
}
