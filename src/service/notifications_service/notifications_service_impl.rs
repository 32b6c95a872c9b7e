use super::{NotificationsService, NotificationsServiceConfig};
use crate::{
    dto::{input, output},
    error::Error,
    repository::{self, NewNotification, NotificationsRepository},
};
use axum::async_trait;
use bson::oid::ObjectId;
use std::sync::Arc;

pub struct NotificationsServiceImpl {
    config: NotificationsServiceConfig,
    repository: Arc<dyn NotificationsRepository>,
}

impl NotificationsServiceImpl {
    pub fn new(
        config: NotificationsServiceConfig,
        repository: Arc<dyn NotificationsRepository>,
    ) -> Self {
        Self { config, repository }
    }

    fn validate_save_notification(&self, notification: &input::Notification) -> Result<(), Error> {
        if notification.text.trim().is_empty() {
            return Err(Error::Validation("text is blank"));
        }
        self.validate_text_not_too_long(&notification.text)?;

        if notification.screen.trim().is_empty() {
            return Err(Error::Validation("screen is blank"));
        }

        Ok(())
    }

    fn validate_text_not_too_long(&self, text: &str) -> Result<(), Error> {
        let len = text.chars().count();
        if len > self.config.max_text_len {
            return Err(Error::ValidationTextTooLong {
                len,
                max_len: self.config.max_text_len,
            });
        }

        Ok(())
    }

    fn validate_pagination(&self, pagination: &input::Pagination) -> Result<(), Error> {
        if pagination.page_size == 0 {
            return Err(Error::Validation("page_size must be greater than 0"));
        }
        if pagination.page_size > self.config.max_page_size {
            return Err(Error::Validation("page_size too large"));
        }

        Ok(())
    }
}

#[async_trait]
impl NotificationsService for NotificationsServiceImpl {
    async fn save_notification(
        &self,
        notification: input::Notification,
    ) -> Result<output::NotificationId, Error> {
        tracing::info!("creating notification");
        tracing::trace!(?notification);

        self.validate_save_notification(&notification)?;

        let input::Notification {
            text,
            receiver,
            reference_id,
            screen,
            notification_type,
        } = notification;

        let inserted_notification = self
            .repository
            .insert(NewNotification {
                text,
                receiver,
                reference_id,
                screen,
                notification_type,
            })
            .await?;

        let id = inserted_notification.id.to_hex();
        tracing::info!(%id, "created notification");

        Ok(output::NotificationId { id })
    }

    async fn find_notifications(
        &self,
        receiver: ObjectId,
        pagination: input::Pagination,
        filters: input::NotificationFilters,
    ) -> Result<Vec<output::Notification>, Error> {
        tracing::info!(%receiver, "finding notifications");
        tracing::trace!(?pagination, ?filters);

        self.validate_pagination(&pagination)?;

        let notifications = self
            .repository
            .find_many_by_receiver(receiver, pagination, filters)
            .await?;
        tracing::info!(count = notifications.len(), "found notifications");

        let notifications = notifications
            .into_iter()
            .map(output::Notification::from)
            .collect();

        Ok(notifications)
    }

    async fn find_admin_notifications(
        &self,
        pagination: input::Pagination,
        filters: input::NotificationFilters,
    ) -> Result<Vec<output::Notification>, Error> {
        tracing::info!("finding admin notifications");
        tracing::trace!(?pagination, ?filters);

        self.validate_pagination(&pagination)?;

        let notifications = self
            .repository
            .find_many_by_type(input::NotificationType::Admin, pagination, filters)
            .await?;
        tracing::info!(count = notifications.len(), "found notifications");

        let notifications = notifications
            .into_iter()
            .map(output::Notification::from)
            .collect();

        Ok(notifications)
    }

    async fn find_notification(&self, id: ObjectId) -> Result<output::Notification, Error> {
        tracing::info!(%id, "finding notification");

        let notification = self
            .repository
            .find(id)
            .await?
            .ok_or(Error::NotificationNotExist)?;

        tracing::info!("found notification");

        Ok(notification.into())
    }

    async fn mark_notification_read(&self, id: ObjectId) -> Result<(), Error> {
        tracing::info!(%id, "marking notification as read");

        match self.repository.update_read(id).await {
            Ok(()) => {
                tracing::info!("marked notification as read");
                Ok(())
            }
            Err(repository::Error::NoDocumentUpdated) => {
                // Unread notification with id doesn't exist,
                // find out which half of the filter failed
                match self.repository.find(id).await? {
                    Some(_) => Err(Error::NotificationAlreadyRead),
                    None => Err(Error::NotificationNotExist),
                }
            }
            Err(err) => Err(Error::Database(err)),
        }
    }

    async fn mark_all_notifications_read(
        &self,
        receiver: ObjectId,
    ) -> Result<output::NotificationsCount, Error> {
        tracing::info!(%receiver, "marking all notifications as read");

        let count = self.repository.update_many_read(receiver).await?;
        tracing::info!(count, "marked notifications as read");

        Ok(output::NotificationsCount { count })
    }

    async fn count_unread_notifications(
        &self,
        receiver: ObjectId,
    ) -> Result<output::NotificationsCount, Error> {
        tracing::info!(%receiver, "counting unread notifications");

        let count = self.repository.count_unread(receiver).await?;

        Ok(output::NotificationsCount { count })
    }
}
