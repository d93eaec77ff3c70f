use serde::{Deserialize, Serialize};

use crate::enums::property_type::PropertyType;

/// A property attached to a category (e.g. "Screen size" on Phones).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: PropertyType,
    #[serde(default)]
    pub options: Option<Vec<String>>,
}

/// `GET /category/{id}/properties` returns categories each carrying their
/// own properties; the list view flattens them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryProperties {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub properties: Vec<Property>,
}

/// Create payload for `POST /property`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyPayload {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: PropertyType,
    pub category_id: i64,
    pub options: Option<Vec<String>>,
}

/// Local editable state of the create-property form. The options field is
/// kept as the raw comma-separated input and only split on submit.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PropertyDraft {
    pub name: String,
    pub kind: PropertyType,
    pub category_id: Option<i64>,
    pub options_text: String,
}

impl PropertyDraft {
    /// Split the raw options input into trimmed, non-empty entries.
    pub fn parsed_options(&self) -> Vec<String> {
        self.options_text
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Property name is required".into());
        }
        if self.category_id.is_none() {
            return Err("Category is required".into());
        }
        if self.kind == PropertyType::Select && self.parsed_options().is_empty() {
            return Err("At least one option is required for a Select property".into());
        }
        Ok(())
    }

    /// Build the wire payload. Callers must `validate` first.
    pub fn to_payload(&self) -> Result<PropertyPayload, String> {
        self.validate()?;
        let category_id = self.category_id.ok_or_else(|| "Category is required".to_string())?;
        let options = match self.kind {
            PropertyType::Select => Some(self.parsed_options()),
            _ => None,
        };
        Ok(PropertyPayload {
            name: self.name.trim().to_string(),
            kind: self.kind,
            category_id,
            options,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_with_blank_options_is_rejected() {
        let draft = PropertyDraft {
            name: "Color".into(),
            kind: PropertyType::Select,
            category_id: Some(4),
            options_text: " ,  , ".into(),
        };
        assert!(draft.validate().is_err());
        assert!(draft.to_payload().is_err());
    }

    #[test]
    fn select_options_are_trimmed_and_filtered() {
        let draft = PropertyDraft {
            name: "Color".into(),
            kind: PropertyType::Select,
            category_id: Some(4),
            options_text: " red, green ,, blue ".into(),
        };
        let payload = draft.to_payload().unwrap();
        assert_eq!(payload.options, Some(vec!["red".into(), "green".into(), "blue".into()]));
    }

    #[test]
    fn non_select_carries_no_options() {
        let draft = PropertyDraft {
            name: "Weight".into(),
            kind: PropertyType::Number,
            category_id: Some(4),
            options_text: "ignored".into(),
        };
        let payload = draft.to_payload().unwrap();
        assert_eq!(payload.options, None);
    }

    #[test]
    fn missing_category_is_rejected() {
        let draft = PropertyDraft {
            name: "Weight".into(),
            kind: PropertyType::Number,
            category_id: None,
            options_text: String::new(),
        };
        assert_eq!(draft.validate(), Err("Category is required".into()));
    }

    #[test]
    fn kind_serializes_under_type_key() {
        let payload = PropertyPayload {
            name: "Color".into(),
            kind: PropertyType::Select,
            category_id: 4,
            options: Some(vec!["red".into()]),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["type"], "SELECT");
        assert_eq!(json["categoryId"], 4);
    }
}
