//! Product record types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A product record as stored and served.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier, assigned by the store on creation.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Unit price. Serialized as a JSON number.
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub price: Decimal,
    /// Grouping label for filtering and statistics.
    pub category: String,
    /// Whether the product is currently in stock.
    pub in_stock: bool,
}

/// An incoming product payload: a [`Product`] without an id.
///
/// Serde enforces field presence and types; semantic checks (non-empty name,
/// non-negative price) live in [`crate::validate`]. A missing `inStock`
/// defaults to `false`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    /// Display name.
    pub name: String,
    /// Free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Unit price.
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub price: Decimal,
    /// Grouping label.
    pub category: String,
    /// Whether the product is currently in stock.
    #[serde(default)]
    pub in_stock: bool,
}

impl Product {
    /// Materialize a draft under a store-assigned id.
    pub fn from_draft(id: String, draft: ProductDraft) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            price: draft.price,
            category: draft.category,
            in_stock: draft.in_stock,
        }
    }
}
