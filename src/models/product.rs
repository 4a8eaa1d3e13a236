use serde::{Deserialize, Serialize};

/// A live catalog entry. `id` is assigned by the store and never reused.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u64,
    pub product_code: i32,
    pub description: String,
    pub price: f64,
    pub stock_group_code: i64,
    /// Derived from `stock_group_code`, see [`super::StockGroup::label`].
    pub stock_group_label: String,
}

// ── Request payloads ─────────────────────────────────────────────────────────

/// Payload for create and update. Every field is optional on the wire so a
/// missing one is reported by name instead of as a generic parse failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    pub product_code: Option<i32>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub stock_group_code: Option<i64>,
}

impl ProductInput {
    pub fn new(
        product_code: i32,
        description: impl Into<String>,
        price: f64,
        stock_group_code: i64,
    ) -> Self {
        Self {
            product_code: Some(product_code),
            description: Some(description.into()),
            price: Some(price),
            stock_group_code: Some(stock_group_code),
        }
    }
}

// ── Query responses ──────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct CodeExists {
    pub code: i32,
    pub exists: bool,
}
