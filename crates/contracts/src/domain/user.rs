use serde::{Deserialize, Serialize};

use crate::domain::common::NamedRef;
use crate::enums::user_role::UserRole;

/// Platform user as listed by `GET /users`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default)]
    pub profile: Option<UserProfile>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub region: Option<NamedRef>,
    #[serde(default)]
    pub district: Option<NamedRef>,
}

/// Payload for `PATCH /users/{id}/role`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleUpdate {
    pub role: UserRole,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_defaults_to_user() {
        let u: User = serde_json::from_str(r#"{"id":1,"phone":"+998901234567"}"#).unwrap();
        assert_eq!(u.role, UserRole::User);
    }

    #[test]
    fn role_update_serializes_uppercase() {
        let json = serde_json::to_value(RoleUpdate { role: UserRole::Admin }).unwrap();
        assert_eq!(json["role"], "ADMIN");
    }
}
