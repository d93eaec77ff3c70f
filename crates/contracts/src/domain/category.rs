use serde::{Deserialize, Serialize};

/// Category record as returned by `GET /category`.
///
/// `children` carries the nested subtree when the endpoint is called at the
/// root; child listings return flat rows with `parentId` set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub parent_id: Option<i64>,
    #[serde(default)]
    pub parent_name: Option<String>,
    #[serde(default = "default_visible")]
    pub is_visible: bool,
    #[serde(default)]
    pub order: i32,
    #[serde(default)]
    pub children: Vec<Category>,
}

fn default_visible() -> bool {
    true
}

/// Editable fields of a category, sent on create (`POST /category`) and
/// update (`PUT /category/{id}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDraft {
    pub name: String,
    pub image_url: Option<String>,
    pub parent_id: Option<i64>,
    pub is_visible: bool,
    pub order: i32,
}

impl Default for CategoryDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            image_url: None,
            parent_id: None,
            is_visible: true,
            order: 0,
        }
    }
}

impl CategoryDraft {
    pub fn from_record(record: &Category) -> Self {
        Self {
            name: record.name.clone(),
            image_url: record.image_url.clone(),
            parent_id: record.parent_id,
            is_visible: record.is_visible,
            order: record.order,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Category name is required".into());
        }
        if let Some(url) = &self.image_url {
            if !url.is_empty() && !url.starts_with("http://") && !url.starts_with("https://") {
                return Err("Image URL must start with http:// or https://".into());
            }
        }
        if self.order < 0 {
            return Err("Order must not be negative".into());
        }
        Ok(())
    }
}

/// Narrow payload for the visibility toggle (`PUT /category/{id}`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryVisibility {
    pub is_visible: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> Category {
        Category {
            id: 5,
            name: "Electronics".into(),
            image_url: Some("https://cdn.example.com/tv.png".into()),
            parent_id: Some(1),
            parent_name: Some("Home".into()),
            is_visible: false,
            order: 3,
            children: Vec::new(),
        }
    }

    #[test]
    fn draft_round_trips_editable_fields() {
        let rec = record();
        let draft = CategoryDraft::from_record(&rec);
        assert_eq!(draft.name, rec.name);
        assert_eq!(draft.image_url, rec.image_url);
        assert_eq!(draft.parent_id, rec.parent_id);
        assert_eq!(draft.is_visible, rec.is_visible);
        assert_eq!(draft.order, rec.order);
    }

    #[test]
    fn empty_name_is_rejected() {
        let draft = CategoryDraft {
            name: "   ".into(),
            ..CategoryDraft::default()
        };
        assert!(draft.validate().is_err());
    }

    #[test]
    fn bad_image_url_is_rejected() {
        let draft = CategoryDraft {
            name: "Phones".into(),
            image_url: Some("ftp://cdn.example.com/p.png".into()),
            ..CategoryDraft::default()
        };
        assert!(draft.validate().is_err());
    }

    #[test]
    fn default_draft_is_visible_with_zero_order() {
        let draft = CategoryDraft::default();
        assert!(draft.is_visible);
        assert_eq!(draft.order, 0);
        assert!(draft.parent_id.is_none());
    }

    #[test]
    fn nested_children_deserialize() {
        let json = r#"{"id":1,"name":"Electronics","children":[{"id":2,"name":"Phones"}]}"#;
        let cat: Category = serde_json::from_str(json).unwrap();
        assert_eq!(cat.children.len(), 1);
        assert_eq!(cat.children[0].name, "Phones");
        assert!(cat.children[0].is_visible);
    }
}
