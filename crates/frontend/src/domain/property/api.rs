use contracts::domain::property::{CategoryProperties, PropertyPayload};
use contracts::envelope::Envelope;

use crate::shared::http::{self, ApiResult};

/// Properties grouped by category; `params` carries the category id.
/// Without a selected category nothing is fetched.
pub async fn fetch_properties(params: String) -> ApiResult<Vec<CategoryProperties>> {
    if params.is_empty() {
        return Ok(Vec::new());
    }
    let envelope: Envelope<Vec<CategoryProperties>> =
        http::get_json(&format!("/category/{}/properties", params)).await?;
    Ok(envelope.content)
}

pub async fn create_property(payload: &PropertyPayload) -> ApiResult<()> {
    let _: serde_json::Value = http::post_json("/property", payload).await?;
    Ok(())
}

pub async fn delete_property(id: i64) -> ApiResult<()> {
    http::delete(&format!("/property/{}", id)).await
}
