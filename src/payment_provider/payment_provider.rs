use super::{
    CreatePaymentLink, CreatePrice, CreateProduct, Error, PaymentLink, Price, Product,
};
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaymentProvider: Send + Sync {
    async fn create_product(&self, product: CreateProduct) -> Result<Product, Error>;

    ///
    /// ### Returns
    /// `None` when provider accepted request but did not return the price
    ///
    async fn create_price(&self, price: CreatePrice) -> Result<Option<Price>, Error>;

    async fn create_payment_link(
        &self,
        payment_link: CreatePaymentLink,
    ) -> Result<PaymentLink, Error>;
}
