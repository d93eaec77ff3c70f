//! Response envelopes used by the admin API.
//!
//! Every endpoint wraps its payload in `{ "content": ... }`; the paginated
//! endpoints additionally differ in how they shape the page inside the
//! envelope, so each family gets its own typed page struct instead of
//! defensive deep-path reads.

use serde::{Deserialize, Serialize};

/// The outer `content` wrapper common to all endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub content: T,
}

/// Page shape returned by `/products`: records under `data` plus a total.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataPage<T> {
    #[serde(default)]
    pub data: Vec<T>,
    #[serde(default)]
    pub total: u64,
}

/// Page shape returned by `/users`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPage<T> {
    #[serde(default)]
    pub users: Vec<T>,
    #[serde(default)]
    pub total: u64,
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default = "first_page")]
    pub total_pages: u32,
}

fn first_page() -> u32 {
    1
}

/// `POST /file/upload` response payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadedFile {
    pub url: String,
}

/// Query parameters for the server-paginated list endpoints.
/// `page` is 1-based on the wire; the UI keeps 0-based pages and converts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PageQuery {
    pub page: u32,
    #[serde(rename = "pageSize")]
    pub page_size: u32,
}

impl PageQuery {
    pub fn from_zero_based(page: usize, page_size: usize) -> Self {
        Self {
            page: page as u32 + 1,
            page_size: page_size as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_unwraps_content() {
        let parsed: Envelope<Vec<i64>> = serde_json::from_str(r#"{"content":[1,2,3]}"#).unwrap();
        assert_eq!(parsed.content, vec![1, 2, 3]);
    }

    #[test]
    fn user_page_defaults_missing_fields() {
        let parsed: UserPage<i64> = serde_json::from_str(r#"{"users":[7]}"#).unwrap();
        assert_eq!(parsed.users, vec![7]);
        assert_eq!(parsed.total, 0);
        assert_eq!(parsed.page, 1);
        assert_eq!(parsed.total_pages, 1);
    }

    #[test]
    fn page_query_is_one_based_on_the_wire() {
        let q = PageQuery::from_zero_based(0, 10);
        assert_eq!(q.page, 1);
        assert_eq!(q.page_size, 10);
    }
}
