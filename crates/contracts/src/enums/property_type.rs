use serde::{Deserialize, Serialize};

/// Value type of a category property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PropertyType {
    String,
    Number,
    Boolean,
    Date,
    Select,
}

impl PropertyType {
    /// Wire value, also used as the `<select>` option value.
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::String => "STRING",
            PropertyType::Number => "NUMBER",
            PropertyType::Boolean => "BOOLEAN",
            PropertyType::Date => "DATE",
            PropertyType::Select => "SELECT",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PropertyType::String => "String",
            PropertyType::Number => "Number",
            PropertyType::Boolean => "Boolean",
            PropertyType::Date => "Date",
            PropertyType::Select => "Select",
        }
    }

    pub fn all() -> Vec<PropertyType> {
        vec![
            PropertyType::String,
            PropertyType::Number,
            PropertyType::Boolean,
            PropertyType::Date,
            PropertyType::Select,
        ]
    }

    pub fn from_str_value(value: &str) -> Option<Self> {
        match value {
            "STRING" => Some(PropertyType::String),
            "NUMBER" => Some(PropertyType::Number),
            "BOOLEAN" => Some(PropertyType::Boolean),
            "DATE" => Some(PropertyType::Date),
            "SELECT" => Some(PropertyType::Select),
            _ => None,
        }
    }
}

impl Default for PropertyType {
    fn default() -> Self {
        PropertyType::String
    }
}
