pub struct PlansServiceConfig {
    ///
    /// Customer is redirected here after completing payment
    ///
    pub payment_success_url: String,
}
