use super::{
    dto::{NewNotification, Notification},
    entity::{NotificationFindEntity, NotificationInsertEntity},
    Error, NotificationsRepository,
};
use crate::dto::input;
use axum::async_trait;
use bson::{doc, oid::ObjectId, Bson, DateTime, Document};
use futures_util::TryStreamExt;
use mongodb::{error::ErrorKind, options::IndexOptions, Collection, Database, IndexModel};
use std::sync::Arc;
use time::OffsetDateTime;

const NOTIFICATIONS: &str = "notifications";
const INDEX_NAME_RECEIVER_CREATED_AT: &str = "index_receiver_created_at";
const INDEX_NAME_TYPE_CREATED_AT: &str = "index_type_created_at";

pub struct NotificationsRepositoryImpl {
    database: Database,
}

impl NotificationsRepositoryImpl {
    pub async fn new(database: Database) -> Result<Self, mongodb::error::Error> {
        let collection_names = database.list_collection_names().await?;
        if !collection_names.iter().any(|name| name == NOTIFICATIONS) {
            database.create_collection(NOTIFICATIONS).await?;
            tracing::debug!("created collection {NOTIFICATIONS}");
        }

        let collection = database.collection(NOTIFICATIONS);
        let index_names = collection.list_index_names().await?;

        if !index_names.contains(&INDEX_NAME_RECEIVER_CREATED_AT.to_string()) {
            Self::create_created_at_index(&collection, "receiver", INDEX_NAME_RECEIVER_CREATED_AT)
                .await?;
            tracing::debug!("created index {NOTIFICATIONS}.{INDEX_NAME_RECEIVER_CREATED_AT}");
        }
        if !index_names.contains(&INDEX_NAME_TYPE_CREATED_AT.to_string()) {
            Self::create_created_at_index(&collection, "type", INDEX_NAME_TYPE_CREATED_AT).await?;
            tracing::debug!("created index {NOTIFICATIONS}.{INDEX_NAME_TYPE_CREATED_AT}");
        }

        Ok(Self { database })
    }

    async fn create_created_at_index(
        collection: &Collection<Document>,
        field: &str,
        name: &str,
    ) -> Result<(), mongodb::error::Error> {
        let index = IndexModel::builder()
            .keys(doc! {
                field: 1,
                "createdAt": -1,
            })
            .options(IndexOptions::builder().name(name.to_string()).build())
            .build();

        collection.create_index(index).await?;

        Ok(())
    }

    async fn find_many(
        &self,
        mut filter: Document,
        pagination: input::Pagination,
        input::NotificationFilters { read }: input::NotificationFilters,
    ) -> Result<Vec<Notification>, Error> {
        if let Some(read) = read {
            filter.insert("read", read);
        }

        let skip = u64::from(pagination.page_size) * u64::from(pagination.page_idx);

        let notifications = self
            .database
            .collection::<NotificationFindEntity>(NOTIFICATIONS)
            .find(filter)
            .sort(doc! { "createdAt": -1 })
            .skip(skip)
            .limit(i64::from(pagination.page_size))
            .await?
            .map_ok(Notification::from)
            .try_collect()
            .await?;

        Ok(notifications)
    }
}

#[async_trait]
impl NotificationsRepository for NotificationsRepositoryImpl {
    async fn insert(&self, notification: NewNotification) -> Result<Notification, Error> {
        let now = OffsetDateTime::now_utc();
        let insert_entity = NotificationInsertEntity {
            text: &notification.text,
            receiver: notification.receiver,
            reference_id: notification.reference_id,
            screen: &notification.screen,
            read: false,
            notification_type: notification
                .notification_type
                .as_ref()
                .map(|notification_type| notification_type.as_ref()),
            created_at: DateTime::from(now),
            updated_at: DateTime::from(now),
        };

        let insert_result = self
            .database
            .collection::<NotificationInsertEntity>(NOTIFICATIONS)
            .insert_one(&insert_entity)
            .await?;

        let Bson::ObjectId(id) = insert_result.inserted_id else {
            tracing::error!("invalid type of inserted '_id'");
            return Err(Error::Mongo(
                ErrorKind::Custom(Arc::new("invalid type of inserted '_id'")).into(),
            ));
        };

        // Timestamps are returned with the millisecond precision they are stored with
        let stored_at = OffsetDateTime::from(DateTime::from(now));

        Ok(Notification {
            id,
            text: notification.text,
            receiver: notification.receiver,
            reference_id: notification.reference_id,
            screen: notification.screen,
            read: false,
            notification_type: notification.notification_type,
            created_at: stored_at,
            updated_at: stored_at,
        })
    }

    async fn find(&self, id: ObjectId) -> Result<Option<Notification>, Error> {
        let notification = self
            .database
            .collection::<NotificationFindEntity>(NOTIFICATIONS)
            .find_one(doc! { "_id": id })
            .await?
            .map(Notification::from);

        Ok(notification)
    }

    async fn find_many_by_receiver(
        &self,
        receiver: ObjectId,
        pagination: input::Pagination,
        filters: input::NotificationFilters,
    ) -> Result<Vec<Notification>, Error> {
        self.find_many(doc! { "receiver": receiver }, pagination, filters)
            .await
    }

    async fn find_many_by_type(
        &self,
        notification_type: input::NotificationType,
        pagination: input::Pagination,
        filters: input::NotificationFilters,
    ) -> Result<Vec<Notification>, Error> {
        self.find_many(
            doc! { "type": notification_type.as_ref() },
            pagination,
            filters,
        )
        .await
    }

    async fn update_read(&self, id: ObjectId) -> Result<(), Error> {
        let now = DateTime::from(OffsetDateTime::now_utc());

        let update_result = self
            .database
            .collection::<Document>(NOTIFICATIONS)
            .update_one(
                doc! {
                    "_id": id,
                    "read": false,
                },
                doc! {
                    "$set": {
                        "read": true,
                        "updatedAt": now,
                    }
                },
            )
            .await?;

        match update_result.matched_count == 1 {
            true => Ok(()),
            false => Err(Error::NoDocumentUpdated),
        }
    }

    async fn update_many_read(&self, receiver: ObjectId) -> Result<u64, Error> {
        let now = DateTime::from(OffsetDateTime::now_utc());

        let update_result = self
            .database
            .collection::<Document>(NOTIFICATIONS)
            .update_many(
                doc! {
                    "receiver": receiver,
                    "read": false,
                },
                doc! {
                    "$set": {
                        "read": true,
                        "updatedAt": now,
                    }
                },
            )
            .await?;

        Ok(update_result.modified_count)
    }

    async fn count_unread(&self, receiver: ObjectId) -> Result<u64, Error> {
        let count = self
            .database
            .collection::<Document>(NOTIFICATIONS)
            .count_documents(doc! {
                "receiver": receiver,
                "read": false,
            })
            .await?;

        Ok(count)
    }
}
