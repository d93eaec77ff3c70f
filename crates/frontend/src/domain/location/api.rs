use contracts::domain::location::{District, DistrictPayload, Region, RegionPayload};
use contracts::envelope::Envelope;
use serde::{Deserialize, Serialize};

use crate::shared::http::{self, ApiResult};

/// Rows of the location list, depending on the selected mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum LocationRows {
    Regions(Vec<Region>),
    Districts(Vec<District>),
}

/// `params` is `region`, `district`, or `district:{regionId}`.
pub async fn fetch_locations(params: String) -> ApiResult<LocationRows> {
    if let Some(region_id) = params.strip_prefix("district") {
        let region_id = region_id.strip_prefix(':').unwrap_or("");
        let envelope: Envelope<Vec<District>> =
            http::get_json(&format!("/location/districts/{}", region_id)).await?;
        Ok(LocationRows::Districts(envelope.content))
    } else {
        let envelope: Envelope<Vec<Region>> = http::get_json("/location/regions").await?;
        Ok(LocationRows::Regions(envelope.content))
    }
}

pub async fn fetch_regions(_params: String) -> ApiResult<Vec<Region>> {
    let envelope: Envelope<Vec<Region>> = http::get_json("/location/regions").await?;
    Ok(envelope.content)
}

pub async fn create_region(payload: &RegionPayload) -> ApiResult<()> {
    let _: serde_json::Value = http::post_json("/location/region", payload).await?;
    Ok(())
}

pub async fn create_district(payload: &DistrictPayload) -> ApiResult<()> {
    let _: serde_json::Value = http::post_json("/location/district", payload).await?;
    Ok(())
}

pub async fn delete_region(id: i64) -> ApiResult<()> {
    http::delete(&format!("/location/{}/region", id)).await
}

pub async fn delete_district(id: i64) -> ApiResult<()> {
    http::delete(&format!("/location/{}/district", id)).await
}
