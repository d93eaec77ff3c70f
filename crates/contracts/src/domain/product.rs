use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::NamedRef;

/// Listing record from `GET /products`. Products are created by platform
/// users; the admin panel only moderates them (top promotion, delete).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub profile: Option<ProductProfile>,
    #[serde(default)]
    pub category: Option<NamedRef>,
    #[serde(default)]
    pub region: Option<NamedRef>,
    #[serde(default)]
    pub district: Option<NamedRef>,
    #[serde(default)]
    pub payment_type: Option<String>,
    #[serde(default)]
    pub is_top: bool,
    #[serde(default)]
    pub top_expires_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductProfile {
    #[serde(default)]
    pub full_name: Option<String>,
}

/// Payload for `PATCH /products/{id}/top`. Promoting requires an expiry;
/// demoting clears it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopUpdate {
    pub is_top: bool,
    pub top_expires_at: Option<DateTime<Utc>>,
}

impl TopUpdate {
    pub fn promote(expires_at: DateTime<Utc>) -> Self {
        Self {
            is_top: true,
            top_expires_at: Some(expires_at),
        }
    }

    pub fn demote() -> Self {
        Self {
            is_top: false,
            top_expires_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sparse_product_deserializes() {
        let json = r#"{"id":9,"title":"Bicycle"}"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.title, "Bicycle");
        assert!(!p.is_top);
        assert!(p.top_expires_at.is_none());
        assert!(p.category.is_none());
    }

    #[test]
    fn demote_clears_expiry() {
        let update = TopUpdate::demote();
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json["isTop"], false);
        assert!(json["topExpiresAt"].is_null());
    }
}
