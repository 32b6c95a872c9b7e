use serde::Deserialize;
use strum::AsRefStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum RecurringInterval {
    Month,
    Year,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recurring {
    pub interval: RecurringInterval,
    pub interval_count: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreatePrice {
    pub product: String,
    ///
    /// Amount in the smallest currency unit
    ///
    pub unit_amount: i64,
    pub currency: String,
    pub recurring: Recurring,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Price {
    pub id: String,
}
