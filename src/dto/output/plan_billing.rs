use serde::Serialize;

///
/// Identifiers of billing resources created in the payment provider
///
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanBilling {
    pub product_id: String,
    pub payment_link: String,
}
