use serde::{Deserialize, Serialize};

/// Minimal reference to a related record, as embedded by list endpoints
/// (category of a product, region of a district, and so on).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedRef {
    pub id: i64,
    pub name: String,
}
