use contracts::domain::category::{Category, CategoryDraft, CategoryVisibility};
use contracts::envelope::{Envelope, UploadedFile};

use crate::shared::http::{self, ApiError, ApiResult};

/// List categories; `params` is either empty (root) or `parentId=N`.
pub async fn fetch_categories(params: String) -> ApiResult<Vec<Category>> {
    let path = if params.is_empty() {
        "/category".to_string()
    } else {
        format!("/category?{}", params)
    };
    let envelope: Envelope<Vec<Category>> = http::get_json(&path).await?;
    Ok(envelope.content)
}

pub async fn create_category(draft: &CategoryDraft) -> ApiResult<()> {
    let _: serde_json::Value = http::post_json("/category", draft).await?;
    Ok(())
}

pub async fn update_category(id: i64, draft: &CategoryDraft) -> ApiResult<()> {
    let _: serde_json::Value = http::put_json(&format!("/category/{}", id), draft).await?;
    Ok(())
}

/// Narrow field update; the list reflects the change after the refetch.
pub async fn set_visibility(id: i64, is_visible: bool) -> ApiResult<()> {
    let _: serde_json::Value = http::put_json(
        &format!("/category/{}", id),
        &CategoryVisibility { is_visible },
    )
    .await?;
    Ok(())
}

pub async fn delete_category(id: i64) -> ApiResult<()> {
    http::delete(&format!("/category/{}", id)).await
}

/// Upload a category image and return the durable URL reference to embed
/// in the draft.
pub async fn upload_image(file: web_sys::File) -> ApiResult<String> {
    let js_err = |e: wasm_bindgen::JsValue| ApiError::Network(format!("{:?}", e));
    let form = web_sys::FormData::new().map_err(js_err)?;
    form.append_with_blob("file", &file).map_err(js_err)?;
    let envelope: Envelope<UploadedFile> = http::post_form("/file/upload", form).await?;
    Ok(envelope.content.url)
}
