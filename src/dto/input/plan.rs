use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Plan {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: PlanPrice,
    ///
    /// Human readable duration, e.g. `"3 months"`
    ///
    #[serde(default)]
    pub duration: Option<String>,
}

///
/// Price in currency units. Accepted both as JSON number and numeric string
///
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PlanPrice {
    Number(serde_json::Number),
    Text(String),
}

impl PlanPrice {
    pub fn as_decimal_text(&self) -> String {
        match self {
            PlanPrice::Number(number) => number.to_string(),
            PlanPrice::Text(text) => text.trim().to_string(),
        }
    }
}
