use super::{
    CreatePaymentLink, CreatePrice, CreateProduct, Error, PaymentLink, PaymentProvider, Price,
    Product,
};
use axum::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize};
use std::time::Duration;

const PRODUCTS: &str = "/v1/products";
const PRICES: &str = "/v1/prices";
const PAYMENT_LINKS: &str = "/v1/payment_links";

pub struct StripePaymentProviderConfig {
    pub api_url: String,
    pub secret_key: String,
    pub request_timeout: Duration,
}

///
/// Stripe REST API client.
/// Requests are form encoded with nested keys written as `key[subkey]`
///
pub struct StripePaymentProvider {
    config: StripePaymentProviderConfig,
    client: Client,
}

#[derive(Deserialize)]
struct StripeErrorEntity {
    error: StripeErrorDetailsEntity,
}

#[derive(Deserialize)]
struct StripeErrorDetailsEntity {
    message: Option<String>,
}

impl StripePaymentProvider {
    pub fn new(config: StripePaymentProviderConfig) -> Result<Self, Error> {
        let client = Client::builder().timeout(config.request_timeout).build()?;

        Ok(Self { config, client })
    }

    async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        form: &[(String, String)],
    ) -> Result<T, Error> {
        let url = format!("{}{path}", self.config.api_url.trim_end_matches('/'));
        tracing::debug!(%url, "sending request to stripe");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.secret_key)
            .form(form)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let message = serde_json::from_slice::<StripeErrorEntity>(&body)
                .ok()
                .and_then(|entity| entity.error.message)
                .unwrap_or_else(|| String::from_utf8_lossy(&body).into_owned());

            return Err(Error::Api {
                status: status.as_u16(),
                message,
            });
        }

        let resource = serde_json::from_slice(&body)?;

        Ok(resource)
    }

    fn product_form(product: CreateProduct) -> Vec<(String, String)> {
        let mut form = vec![("name".to_string(), product.name)];
        if let Some(description) = product.description {
            form.push(("description".to_string(), description));
        }

        form
    }

    fn price_form(price: CreatePrice) -> Vec<(String, String)> {
        vec![
            ("product".to_string(), price.product),
            ("unit_amount".to_string(), price.unit_amount.to_string()),
            ("currency".to_string(), price.currency),
            (
                "recurring[interval]".to_string(),
                price.recurring.interval.as_ref().to_string(),
            ),
            (
                "recurring[interval_count]".to_string(),
                price.recurring.interval_count.to_string(),
            ),
        ]
    }

    fn payment_link_form(payment_link: CreatePaymentLink) -> Vec<(String, String)> {
        let mut form = vec![
            ("line_items[0][price]".to_string(), payment_link.price),
            (
                "line_items[0][quantity]".to_string(),
                payment_link.quantity.to_string(),
            ),
            ("after_completion[type]".to_string(), "redirect".to_string()),
            (
                "after_completion[redirect][url]".to_string(),
                payment_link.redirect_url,
            ),
        ];
        form.extend(
            payment_link
                .metadata
                .into_iter()
                .map(|(key, value)| (format!("metadata[{key}]"), value)),
        );

        form
    }
}

#[async_trait]
impl PaymentProvider for StripePaymentProvider {
    async fn create_product(&self, product: CreateProduct) -> Result<Product, Error> {
        let product = self
            .post::<Product>(PRODUCTS, &Self::product_form(product))
            .await?;
        tracing::info!(id = %product.id, "created product");

        Ok(product)
    }

    async fn create_price(&self, price: CreatePrice) -> Result<Option<Price>, Error> {
        let price = self
            .post::<Option<Price>>(PRICES, &Self::price_form(price))
            .await?;
        if let Some(price) = &price {
            tracing::info!(id = %price.id, "created price");
        }

        Ok(price)
    }

    async fn create_payment_link(
        &self,
        payment_link: CreatePaymentLink,
    ) -> Result<PaymentLink, Error> {
        let payment_link = self
            .post::<PaymentLink>(PAYMENT_LINKS, &Self::payment_link_form(payment_link))
            .await?;
        tracing::info!(id = %payment_link.id, "created payment link");

        Ok(payment_link)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::payment_provider::{Recurring, RecurringInterval};
    use mockito::{Matcher, Server, ServerGuard};

    const SECRET_KEY: &str = "sk_test_fake_secret";

    fn create_provider(server: &ServerGuard) -> StripePaymentProvider {
        StripePaymentProvider::new(StripePaymentProviderConfig {
            api_url: server.url(),
            secret_key: SECRET_KEY.to_string(),
            request_timeout: Duration::from_secs(5),
        })
        .unwrap()
    }

    fn form_matcher(pairs: &[(&str, &str)]) -> Matcher {
        Matcher::AllOf(
            pairs
                .iter()
                .map(|(key, value)| Matcher::UrlEncoded(key.to_string(), value.to_string()))
                .collect(),
        )
    }

    #[tokio::test]
    async fn create_product_ok() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", PRODUCTS)
            .match_header("authorization", format!("Bearer {SECRET_KEY}").as_str())
            .match_body(form_matcher(&[("name", "Pro"), ("description", "d")]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{ "id": "prod_NWjs8kKbJWmuuc", "object": "product", "active": true }"#)
            .create_async()
            .await;
        let provider = create_provider(&server);

        let product = provider
            .create_product(CreateProduct {
                name: "Pro".to_string(),
                description: Some("d".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(product.id, "prod_NWjs8kKbJWmuuc");
        mock.assert_async().await;
    }

    #[test]
    fn create_product_description_omitted() {
        let form = StripePaymentProvider::product_form(CreateProduct {
            name: "Pro".to_string(),
            description: None,
        });

        assert_eq!(form, vec![("name".to_string(), "Pro".to_string())]);
    }

    #[tokio::test]
    async fn create_product_api_error() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", PRODUCTS)
            .with_status(401)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{ "error": { "message": "Invalid API Key provided", "type": "invalid_request_error" } }"#,
            )
            .create_async()
            .await;
        let provider = create_provider(&server);

        let create_result = provider
            .create_product(CreateProduct {
                name: "Pro".to_string(),
                description: None,
            })
            .await;

        let Err(Error::Api { status, message }) = create_result else {
            panic!("expected api error");
        };
        assert_eq!(status, 401);
        assert_eq!(message, "Invalid API Key provided");
    }

    #[tokio::test]
    async fn create_product_invalid_response() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", PRODUCTS)
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;
        let provider = create_provider(&server);

        let create_result = provider
            .create_product(CreateProduct {
                name: "Pro".to_string(),
                description: None,
            })
            .await;

        assert!(matches!(create_result, Err(Error::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn create_price_sends_recurring_and_amount() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", PRICES)
            .match_body(form_matcher(&[
                ("product", "prod_NWjs8kKbJWmuuc"),
                ("unit_amount", "1999"),
                ("currency", "usd"),
                ("recurring[interval]", "month"),
                ("recurring[interval_count]", "3"),
            ]))
            .with_status(200)
            .with_body(r#"{ "id": "price_1MoBy5LkdIwHu7ixZhnattbh", "object": "price" }"#)
            .create_async()
            .await;
        let provider = create_provider(&server);

        let price = provider
            .create_price(CreatePrice {
                product: "prod_NWjs8kKbJWmuuc".to_string(),
                unit_amount: 1999,
                currency: "usd".to_string(),
                recurring: Recurring {
                    interval: RecurringInterval::Month,
                    interval_count: 3,
                },
            })
            .await
            .unwrap();

        assert_eq!(price.unwrap().id, "price_1MoBy5LkdIwHu7ixZhnattbh");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn create_price_null_body() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", PRICES)
            .with_status(200)
            .with_body("null")
            .create_async()
            .await;
        let provider = create_provider(&server);

        let price = provider
            .create_price(CreatePrice {
                product: "prod_NWjs8kKbJWmuuc".to_string(),
                unit_amount: 100,
                currency: "usd".to_string(),
                recurring: Recurring {
                    interval: RecurringInterval::Year,
                    interval_count: 1,
                },
            })
            .await
            .unwrap();

        assert!(price.is_none());
    }

    #[tokio::test]
    async fn create_payment_link_sends_redirect_and_metadata() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", PAYMENT_LINKS)
            .match_body(form_matcher(&[
                ("line_items[0][price]", "price_1MoBy5LkdIwHu7ixZhnattbh"),
                ("line_items[0][quantity]", "1"),
                ("after_completion[type]", "redirect"),
                (
                    "after_completion[redirect][url]",
                    "https://example.com/payment/success",
                ),
                ("metadata[productId]", "prod_NWjs8kKbJWmuuc"),
            ]))
            .with_status(200)
            .with_body(
                r#"{ "id": "plink_1MoC3ULkdIwHu7ixZjtGpVl2", "object": "payment_link", "url": "https://buy.stripe.com/test_cN25nr0iZ7bUa7meUY" }"#,
            )
            .create_async()
            .await;
        let provider = create_provider(&server);

        let payment_link = provider
            .create_payment_link(CreatePaymentLink {
                price: "price_1MoBy5LkdIwHu7ixZhnattbh".to_string(),
                quantity: 1,
                redirect_url: "https://example.com/payment/success".to_string(),
                metadata: vec![("productId".to_string(), "prod_NWjs8kKbJWmuuc".to_string())],
            })
            .await
            .unwrap();

        assert_eq!(
            payment_link.url.as_deref(),
            Some("https://buy.stripe.com/test_cN25nr0iZ7bUa7meUY")
        );
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn create_payment_link_without_url() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", PAYMENT_LINKS)
            .with_status(200)
            .with_body(r#"{ "id": "plink_1MoC3ULkdIwHu7ixZjtGpVl2", "url": null }"#)
            .create_async()
            .await;
        let provider = create_provider(&server);

        let payment_link = provider
            .create_payment_link(CreatePaymentLink {
                price: "price_1MoBy5LkdIwHu7ixZhnattbh".to_string(),
                quantity: 1,
                redirect_url: "https://example.com/payment/success".to_string(),
                metadata: vec![],
            })
            .await
            .unwrap();

        assert!(payment_link.url.is_none());
    }
}
