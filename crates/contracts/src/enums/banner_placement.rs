use serde::{Deserialize, Serialize};

/// Where a banner is rendered on the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BannerPlacement {
    HomeHero,
    CategorySidebar,
    ProductDetailTop,
    AdSection,
}

impl BannerPlacement {
    /// Wire value, also used in the `placement` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            BannerPlacement::HomeHero => "home_hero",
            BannerPlacement::CategorySidebar => "category_sidebar",
            BannerPlacement::ProductDetailTop => "product_detail_top",
            BannerPlacement::AdSection => "ad_section",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BannerPlacement::HomeHero => "Home page (hero)",
            BannerPlacement::CategorySidebar => "Category sidebar",
            BannerPlacement::ProductDetailTop => "Product detail (top)",
            BannerPlacement::AdSection => "Ad section",
        }
    }

    pub fn all() -> Vec<BannerPlacement> {
        vec![
            BannerPlacement::HomeHero,
            BannerPlacement::CategorySidebar,
            BannerPlacement::ProductDetailTop,
            BannerPlacement::AdSection,
        ]
    }

    pub fn from_str_value(value: &str) -> Option<Self> {
        match value {
            "home_hero" => Some(BannerPlacement::HomeHero),
            "category_sidebar" => Some(BannerPlacement::CategorySidebar),
            "product_detail_top" => Some(BannerPlacement::ProductDetailTop),
            "ad_section" => Some(BannerPlacement::AdSection),
            _ => None,
        }
    }
}

impl Default for BannerPlacement {
    fn default() -> Self {
        BannerPlacement::HomeHero
    }
}
