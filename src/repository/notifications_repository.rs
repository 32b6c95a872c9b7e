use super::{
    dto::{NewNotification, Notification},
    error::Error,
};
use crate::dto::input;
use axum::async_trait;
use bson::oid::ObjectId;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationsRepository: Send + Sync {
    ///
    /// Inserts new notification with read = false
    /// and both timestamps set to current time
    ///
    async fn insert(&self, notification: NewNotification) -> Result<Notification, Error>;

    ///
    /// Finds one notification
    ///
    async fn find(&self, id: ObjectId) -> Result<Option<Notification>, Error>;

    ///
    /// Finds notifications addressed to the receiver.
    /// Notifications are sorted descending by creation date.
    ///
    async fn find_many_by_receiver(
        &self,
        receiver: ObjectId,
        pagination: input::Pagination,
        filters: input::NotificationFilters,
    ) -> Result<Vec<Notification>, Error>;

    ///
    /// Finds notifications of the type.
    /// Notifications are sorted descending by creation date.
    ///
    async fn find_many_by_type(
        &self,
        notification_type: input::NotificationType,
        pagination: input::Pagination,
        filters: input::NotificationFilters,
    ) -> Result<Vec<Notification>, Error>;

    ///
    /// Marks notification as read
    ///
    /// ### Errors
    /// - [Error::NoDocumentUpdated] when
    ///     - notification does not exist
    ///     - notification is already read
    ///
    async fn update_read(&self, id: ObjectId) -> Result<(), Error>;

    ///
    /// Marks all unread notifications of the receiver as read
    ///
    /// ### Returns
    /// number of modified notifications
    ///
    async fn update_many_read(&self, receiver: ObjectId) -> Result<u64, Error>;

    ///
    /// Counts unread notifications of the receiver
    ///
    async fn count_unread(&self, receiver: ObjectId) -> Result<u64, Error>;
}
