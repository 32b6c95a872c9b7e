use serde::Deserialize;

#[derive(Debug, Clone, PartialEq)]
pub struct CreatePaymentLink {
    pub price: String,
    pub quantity: u32,
    ///
    /// Where the customer is redirected after completed payment
    ///
    pub redirect_url: String,
    pub metadata: Vec<(String, String)>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PaymentLink {
    pub id: String,
    pub url: Option<String>,
}
