use crate::{
    dto::{input, output},
    error::Error,
};
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlansService: Send + Sync {
    ///
    /// Creates product, recurring price and payment link
    /// for the plan in the payment provider.
    /// Calls are made one after another, nothing is rolled back on failure.
    ///
    /// ### Returns
    /// provider identifiers of created product and payment link
    ///
    /// ### Errors
    /// - [Error::Validation] when
    ///     - title is blank
    ///     - price is not a non-negative number with at most 2 decimal places
    /// - [Error::ExternalService] when
    ///     - any provider call fails
    ///     - provider returns no price
    ///     - provider returns payment link without url
    ///
    async fn provision_billing(&self, plan: input::Plan) -> Result<output::PlanBilling, Error>;
}
