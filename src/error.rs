use crate::repository;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("notification not exist")]
    NotificationNotExist,

    #[error("notification already read")]
    NotificationAlreadyRead,

    #[error("validation error: {0}")]
    Validation(&'static str),

    #[error("validation error: notification text too long {len}/{max_len}")]
    ValidationTextTooLong { len: usize, max_len: usize },

    ///
    /// Payment provider call failed or returned incomplete resource.
    /// Message is safe to show to the caller, details are logged.
    ///
    #[error("{0}")]
    ExternalService(&'static str),

    #[error("database error: {0}")]
    Database(#[from] repository::Error),
}

impl Error {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::NotificationNotExist => StatusCode::NOT_FOUND,
            Error::NotificationAlreadyRead => StatusCode::CONFLICT,
            Error::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Error::ValidationTextTooLong { len: _, max_len: _ } => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            Error::ExternalService(_) => StatusCode::BAD_REQUEST,
            Error::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::warn!(err = %self);

        let status_code = self.status_code();
        let message = match self {
            Error::Database(_) => "internal server error".to_string(),
            err => err.to_string(),
        };

        (status_code, message).into_response()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use axum::body::to_bytes;

    #[test]
    fn external_service_is_client_error() {
        let err = Error::ExternalService("Failed to create price");

        assert!(err.status_code().is_client_error());
        assert_eq!(err.to_string(), "Failed to create price");
    }

    #[test]
    fn validation_is_unprocessable_entity() {
        let err = Error::ValidationTextTooLong { len: 10, max_len: 5 };

        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn into_response_carries_message() {
        let response = Error::ExternalService("Failed to create payment link").into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"Failed to create payment link");
    }

    #[tokio::test]
    async fn into_response_hides_database_details() {
        let err = Error::Database(repository::Error::Mongo(
            mongodb::error::ErrorKind::Custom(std::sync::Arc::new("connection refused")).into(),
        ));

        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"internal server error");
    }
}
