use contracts::domain::profile::Profile;
use contracts::envelope::Envelope;

use crate::shared::http::{self, ApiResult};

pub async fn fetch_profiles(_params: String) -> ApiResult<Vec<Profile>> {
    let envelope: Envelope<Vec<Profile>> = http::get_json("/profiles").await?;
    Ok(envelope.content)
}

pub async fn delete_profile(id: i64) -> ApiResult<()> {
    http::delete(&format!("/profiles/{}", id)).await
}
