use super::{plan_price, PlanDuration, PlansService, PlansServiceConfig};
use crate::{
    dto::{input, output},
    error::Error,
    payment_provider::{self, CreatePaymentLink, CreatePrice, CreateProduct, PaymentProvider},
};
use axum::async_trait;
use std::sync::Arc;

const CURRENCY: &str = "usd";
const PAYMENT_LINK_QUANTITY: u32 = 1;
const METADATA_PRODUCT_ID: &str = "productId";

const PRODUCT_FAILED: &str = "Failed to create product";
const PRICE_FAILED: &str = "Failed to create price";
const PAYMENT_LINK_FAILED: &str = "Failed to create payment link";

pub struct PlansServiceImpl {
    config: PlansServiceConfig,
    payment_provider: Arc<dyn PaymentProvider>,
}

impl PlansServiceImpl {
    pub fn new(config: PlansServiceConfig, payment_provider: Arc<dyn PaymentProvider>) -> Self {
        Self {
            config,
            payment_provider,
        }
    }

    fn validate_title(title: &str) -> Result<(), Error> {
        if title.trim().is_empty() {
            return Err(Error::Validation("title is blank"));
        }

        Ok(())
    }

    fn provider_error(message: &'static str) -> impl FnOnce(payment_provider::Error) -> Error {
        move |err| {
            tracing::error!(%err, "{message}");
            Error::ExternalService(message)
        }
    }

    fn incomplete_resource(message: &'static str) -> Error {
        tracing::error!("{message}: provider returned incomplete resource");
        Error::ExternalService(message)
    }

    fn warn_orphaned_product(product_id: &str) {
        tracing::warn!(product_id, "product left without payment link");
    }
}

#[async_trait]
impl PlansService for PlansServiceImpl {
    async fn provision_billing(&self, plan: input::Plan) -> Result<output::PlanBilling, Error> {
        tracing::info!("provisioning plan billing");
        tracing::trace!(?plan);

        Self::validate_title(&plan.title)?;
        let unit_amount = plan_price::unit_amount(&plan.price)?;

        let input::Plan {
            title,
            description,
            duration,
            ..
        } = plan;

        let product = self
            .payment_provider
            .create_product(CreateProduct {
                name: title,
                description: description.filter(|description| !description.trim().is_empty()),
            })
            .await
            .map_err(Self::provider_error(PRODUCT_FAILED))?;
        if product.id.is_empty() {
            return Err(Self::incomplete_resource(PRODUCT_FAILED));
        }

        let recurring = PlanDuration::from_label(duration.as_deref()).recurring();

        let price = self
            .payment_provider
            .create_price(CreatePrice {
                product: product.id.clone(),
                unit_amount,
                currency: CURRENCY.to_string(),
                recurring,
            })
            .await
            .map_err(Self::provider_error(PRICE_FAILED))
            .and_then(|price| price.ok_or_else(|| Self::incomplete_resource(PRICE_FAILED)))
            .inspect_err(|_| Self::warn_orphaned_product(&product.id))?;

        let payment_link = self
            .payment_provider
            .create_payment_link(CreatePaymentLink {
                price: price.id,
                quantity: PAYMENT_LINK_QUANTITY,
                redirect_url: self.config.payment_success_url.clone(),
                metadata: vec![(METADATA_PRODUCT_ID.to_string(), product.id.clone())],
            })
            .await
            .map_err(Self::provider_error(PAYMENT_LINK_FAILED))
            .and_then(|payment_link| {
                payment_link
                    .url
                    .filter(|url| !url.is_empty())
                    .ok_or_else(|| Self::incomplete_resource(PAYMENT_LINK_FAILED))
            })
            .inspect_err(|_| Self::warn_orphaned_product(&product.id))?;

        tracing::info!(product_id = %product.id, "provisioned plan billing");

        Ok(output::PlanBilling {
            product_id: product.id,
            payment_link,
        })
    }
}
