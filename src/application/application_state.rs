use super::ApplicationEnv;
use crate::{
    payment_provider::{StripePaymentProvider, StripePaymentProviderConfig},
    repository::NotificationsRepositoryImpl,
    service::{
        notifications_service::{
            NotificationsService, NotificationsServiceConfig, NotificationsServiceImpl,
        },
        plans_service::{PlansService, PlansServiceConfig, PlansServiceImpl},
    },
};
use mongodb::{options::ClientOptions, Client};
use std::sync::Arc;

#[derive(Clone)]
pub struct ApplicationState {
    pub notifications_service: Arc<dyn NotificationsService>,
    pub plans_service: Arc<dyn PlansService>,
}

pub struct ApplicationStateToClose {
    pub db_client: Client,
}

pub async fn create_state(
    env: &ApplicationEnv,
) -> anyhow::Result<(ApplicationState, ApplicationStateToClose)> {
    tracing::info!("connecting to database");
    let db_client_options = ClientOptions::parse(&env.db_connection_string).await?;
    let db_client = Client::with_options(db_client_options)?;
    let db = db_client.database(&env.db_name);

    tracing::info!("creating repositories");
    let notifications_repository = NotificationsRepositoryImpl::new(db).await?;
    let notifications_repository = Arc::new(notifications_repository);

    tracing::info!("creating payment provider");
    let config = StripePaymentProviderConfig {
        api_url: env.stripe_api_url.clone(),
        secret_key: env.stripe_secret_key.clone(),
        request_timeout: env.stripe_request_timeout,
    };
    let payment_provider = StripePaymentProvider::new(config)?;
    let payment_provider = Arc::new(payment_provider);

    tracing::info!("creating services");
    let config = NotificationsServiceConfig {
        max_text_len: env.max_notification_text_len,
        max_page_size: env.max_page_size,
    };
    let notifications_service = NotificationsServiceImpl::new(config, notifications_repository);
    let notifications_service = Arc::new(notifications_service);

    let config = PlansServiceConfig {
        payment_success_url: env.stripe_payment_success_url.clone(),
    };
    let plans_service = PlansServiceImpl::new(config, payment_provider);
    let plans_service = Arc::new(plans_service);

    Ok((
        ApplicationState {
            notifications_service,
            plans_service,
        },
        ApplicationStateToClose { db_client },
    ))
}
