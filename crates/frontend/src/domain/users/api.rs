use contracts::domain::user::{RoleUpdate, User};
use contracts::enums::user_role::UserRole;
use contracts::envelope::{Envelope, UserPage};

use crate::shared::http::{self, ApiResult};

pub async fn fetch_users(params: String) -> ApiResult<UserPage<User>> {
    let envelope: Envelope<UserPage<User>> =
        http::get_json(&format!("/users?{}", params)).await?;
    Ok(envelope.content)
}

/// Narrow role update; the list reflects the change after the refetch.
pub async fn update_role(id: i64, role: UserRole) -> ApiResult<()> {
    let _: serde_json::Value =
        http::patch_json(&format!("/users/{}/role", id), &RoleUpdate { role }).await?;
    Ok(())
}

pub async fn delete_user(id: i64) -> ApiResult<()> {
    http::delete(&format!("/users/{}", id)).await
}
