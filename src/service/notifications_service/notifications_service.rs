use crate::{
    dto::{input, output},
    error::Error,
};
use axum::async_trait;
use bson::oid::ObjectId;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationsService: Send + Sync {
    ///
    /// Save new notification in application.
    ///
    /// ### Returns
    /// ID of created notification
    ///
    /// ### Errors
    /// - [Error::Validation] when
    ///     - text is blank
    ///     - screen is blank
    /// - [Error::ValidationTextTooLong] when
    ///     - text is too long
    ///
    async fn save_notification(
        &self,
        notification: input::Notification,
    ) -> Result<output::NotificationId, Error>;

    ///
    /// Find notifications addressed to the receiver that match filters
    ///
    /// ### Errors
    /// - [Error::Validation] when pagination is invalid
    ///
    async fn find_notifications(
        &self,
        receiver: ObjectId,
        pagination: input::Pagination,
        filters: input::NotificationFilters,
    ) -> Result<Vec<output::Notification>, Error>;

    ///
    /// Find notifications addressed to administrators that match filters
    ///
    /// ### Errors
    /// - [Error::Validation] when pagination is invalid
    ///
    async fn find_admin_notifications(
        &self,
        pagination: input::Pagination,
        filters: input::NotificationFilters,
    ) -> Result<Vec<output::Notification>, Error>;

    ///
    /// ### Errors
    /// - [Error::NotificationNotExist] when
    ///     - notification with id does not exist
    ///
    async fn find_notification(&self, id: ObjectId) -> Result<output::Notification, Error>;

    ///
    /// Flip read from false to true
    ///
    /// ### Errors
    /// - [Error::NotificationNotExist] when
    ///     - notification with id does not exist
    /// - [Error::NotificationAlreadyRead] when
    ///     - notification has already been read
    ///
    async fn mark_notification_read(&self, id: ObjectId) -> Result<(), Error>;

    ///
    /// Mark all unread notifications of the receiver as read
    ///
    /// ### Returns
    /// number of notifications marked as read
    ///
    async fn mark_all_notifications_read(
        &self,
        receiver: ObjectId,
    ) -> Result<output::NotificationsCount, Error>;

    async fn count_unread_notifications(
        &self,
        receiver: ObjectId,
    ) -> Result<output::NotificationsCount, Error>;
}
