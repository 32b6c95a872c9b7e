use serde::Deserialize;

#[derive(Debug, Clone, PartialEq)]
pub struct CreateProduct {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Product {
    pub id: String,
}
