use contracts::domain::banner::{Banner, BannerDraft};
use contracts::envelope::Envelope;

use crate::shared::http::{self, ApiError, ApiResult};

/// `params` is the placement filter value, or empty for all banners.
pub async fn fetch_banners(params: String) -> ApiResult<Vec<Banner>> {
    let path = if params.is_empty() {
        "/banners".to_string()
    } else {
        format!("/banners?placement={}", urlencoding::encode(&params))
    };
    let envelope: Envelope<Vec<Banner>> = http::get_json(&path).await?;
    Ok(envelope.content)
}

/// Create or update; the endpoint accepts multipart form fields plus an
/// optional image file, with the record id present on update.
pub async fn save_banner(
    id: Option<i64>,
    draft: &BannerDraft,
    file: Option<web_sys::File>,
) -> ApiResult<()> {
    let js_err = |e: wasm_bindgen::JsValue| ApiError::Network(format!("{:?}", e));

    let form = web_sys::FormData::new().map_err(js_err)?;
    if let Some(id) = id {
        form.append_with_str("id", &id.to_string()).map_err(js_err)?;
    }
    if !draft.title.is_empty() {
        form.append_with_str("title", &draft.title).map_err(js_err)?;
    }
    if !draft.description.is_empty() {
        form.append_with_str("description", &draft.description)
            .map_err(js_err)?;
    }
    if !draft.link_url.trim().is_empty() {
        form.append_with_str("linkUrl", draft.link_url.trim())
            .map_err(js_err)?;
    }
    form.append_with_str("placement", draft.placement.as_str())
        .map_err(js_err)?;
    form.append_with_str("order", &draft.order.to_string())
        .map_err(js_err)?;
    form.append_with_str("isActive", if draft.is_active { "true" } else { "false" })
        .map_err(js_err)?;
    if let Some(file) = &file {
        form.append_with_blob("file", file).map_err(js_err)?;
    }

    let _: serde_json::Value = http::post_form("/banners", form).await?;
    Ok(())
}

pub async fn delete_banner(id: i64) -> ApiResult<()> {
    http::delete(&format!("/banners/{}", id)).await
}
