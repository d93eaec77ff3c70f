use serde::{Deserialize, Serialize};

use crate::domain::common::NamedRef;

/// Region with its districts, from `GET /location/regions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub districts: Vec<District>,
}

/// District row; `region` is embedded by `GET /location/districts/{regionId}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct District {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub region: Option<NamedRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionPayload {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistrictPayload {
    pub name: String,
    pub region_id: i64,
}

/// Local state of the create-location form.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LocationDraft {
    pub name: String,
    /// `Some(region_id)` means a district is being created under that region.
    pub parent_region_id: Option<i64>,
    pub is_district: bool,
}

impl LocationDraft {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Name is required".into());
        }
        if self.is_district && self.parent_region_id.is_none() {
            return Err("Region is required for a district".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn district_without_region_is_rejected() {
        let draft = LocationDraft {
            name: "Chilonzor".into(),
            parent_region_id: None,
            is_district: true,
        };
        assert!(draft.validate().is_err());
    }

    #[test]
    fn region_needs_only_a_name() {
        let draft = LocationDraft {
            name: "Tashkent".into(),
            parent_region_id: None,
            is_district: false,
        };
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn district_payload_is_camel_case() {
        let payload = DistrictPayload {
            name: "Chilonzor".into(),
            region_id: 2,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["regionId"], 2);
    }
}
