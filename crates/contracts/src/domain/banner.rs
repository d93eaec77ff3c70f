use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::banner_placement::BannerPlacement;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub link_url: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub placement: BannerPlacement,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub order: i32,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

pub const BANNER_TITLE_MAX: usize = 255;
pub const BANNER_DESCRIPTION_MAX: usize = 500;

/// Editable banner fields. Sent as multipart form fields together with the
/// image file; `POST /banners` handles both create and update (the latter
/// carries the record id).
#[derive(Debug, Clone, PartialEq)]
pub struct BannerDraft {
    pub title: String,
    pub description: String,
    pub link_url: String,
    pub placement: BannerPlacement,
    pub is_active: bool,
    pub order: i32,
}

impl Default for BannerDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            link_url: String::new(),
            placement: BannerPlacement::HomeHero,
            is_active: true,
            order: 0,
        }
    }
}

impl BannerDraft {
    pub fn from_record(record: &Banner) -> Self {
        Self {
            title: record.title.clone().unwrap_or_default(),
            description: record.description.clone().unwrap_or_default(),
            link_url: record.link_url.clone().unwrap_or_default(),
            placement: record.placement,
            is_active: record.is_active,
            order: record.order,
        }
    }

    /// `has_image` is true when either a new file was picked or the record
    /// being edited already has one. An image is mandatory for new banners.
    pub fn validate(&self, has_image: bool) -> Result<(), String> {
        if self.title.chars().count() > BANNER_TITLE_MAX {
            return Err("Title must not exceed 255 characters".into());
        }
        if self.description.chars().count() > BANNER_DESCRIPTION_MAX {
            return Err("Description must not exceed 500 characters".into());
        }
        let link = self.link_url.trim();
        if !link.is_empty() && !link.starts_with("http://") && !link.starts_with("https://") {
            return Err("Link must be a valid http(s) URL".into());
        }
        if self.order < 0 {
            return Err("Order must not be negative".into());
        }
        if !has_image {
            return Err("Banner image is required".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_image_is_rejected_on_create() {
        let draft = BannerDraft::default();
        assert_eq!(draft.validate(false), Err("Banner image is required".into()));
        assert!(draft.validate(true).is_ok());
    }

    #[test]
    fn overlong_title_is_rejected() {
        let draft = BannerDraft {
            title: "x".repeat(BANNER_TITLE_MAX + 1),
            ..BannerDraft::default()
        };
        assert!(draft.validate(true).is_err());
    }

    #[test]
    fn non_http_link_is_rejected() {
        let draft = BannerDraft {
            link_url: "javascript:alert(1)".into(),
            ..BannerDraft::default()
        };
        assert!(draft.validate(true).is_err());
    }

    #[test]
    fn draft_round_trips_editable_fields() {
        let record = Banner {
            id: 3,
            title: Some("Sale".into()),
            description: Some("Spring sale".into()),
            link_url: Some("https://example.com/sale".into()),
            image_url: Some("https://cdn.example.com/s.png".into()),
            placement: BannerPlacement::AdSection,
            is_active: false,
            order: 7,
            created_at: None,
        };
        let draft = BannerDraft::from_record(&record);
        assert_eq!(draft.title, "Sale");
        assert_eq!(draft.placement, BannerPlacement::AdSection);
        assert_eq!(draft.order, 7);
        assert!(!draft.is_active);
    }

    #[test]
    fn placement_round_trips_snake_case() {
        let json = serde_json::to_value(BannerPlacement::ProductDetailTop).unwrap();
        assert_eq!(json, "product_detail_top");
        let parsed: BannerPlacement = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, BannerPlacement::ProductDetailTop);
    }
}
