use contracts::domain::product::{Product, TopUpdate};
use contracts::envelope::{DataPage, Envelope};

use crate::shared::http::{self, ApiResult};

/// Server-paginated listing; `params` is the serialized page query.
pub async fn fetch_products(params: String) -> ApiResult<DataPage<Product>> {
    let envelope: Envelope<DataPage<Product>> =
        http::get_json(&format!("/products?{}", params)).await?;
    Ok(envelope.content)
}

pub async fn update_top(id: i64, update: &TopUpdate) -> ApiResult<()> {
    let _: serde_json::Value =
        http::patch_json(&format!("/products/{}/top", id), update).await?;
    Ok(())
}

pub async fn delete_product(id: i64) -> ApiResult<()> {
    http::delete(&format!("/products/by-id/{}", id)).await
}
