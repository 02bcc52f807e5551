//! FAQ Endpoints

use super::{client, ApiRequest};
use crate::error::ApiResult;
use crate::models::{FaqItem, Items};

pub const DEFAULT_FAQ_LIMIT: u32 = 30;

/// Build the FAQ list request; blank filters are left out
pub fn faq_request(query: &str, category: Option<&str>, limit: u32) -> ApiRequest {
    let mut request = ApiRequest::get("/faq");
    let query = query.trim();
    if !query.is_empty() {
        request = request.query("query", query);
    }
    if let Some(category) = category.map(str::trim).filter(|c| !c.is_empty()) {
        request = request.query("category", category);
    }
    request.query("limit", limit)
}

pub async fn fetch_faq(query: &str, category: Option<&str>, limit: u32) -> ApiResult<Vec<FaqItem>> {
    let items: Items<FaqItem> = client().fetch(faq_request(query, category, limit)).await?;
    Ok(items.items)
}

pub async fn fetch_faq_categories() -> ApiResult<Vec<String>> {
    let items: Items<String> = client().fetch(ApiRequest::get("/faq/categories")).await?;
    Ok(items.items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faq_request_omits_blank_filters() {
        let request = faq_request("  ", Some(""), DEFAULT_FAQ_LIMIT);
        assert_eq!(request.query, vec![("limit".to_string(), "30".to_string())]);
    }

    #[test]
    fn test_faq_request_with_filters() {
        let request = faq_request(" 탈퇴 ", Some("계정"), 10);
        assert_eq!(
            request.query,
            vec![
                ("query".to_string(), "탈퇴".to_string()),
                ("category".to_string(), "계정".to_string()),
                ("limit".to_string(), "10".to_string()),
            ]
        );
    }

    #[test]
    fn test_items_envelope() {
        let items: Items<String> = serde_json::from_str(r#"{"items":["계정","레시피"]}"#).unwrap();
        assert_eq!(items.items, vec!["계정", "레시피"]);
        let empty: Items<String> = serde_json::from_str("{}").unwrap();
        assert!(empty.items.is_empty());
    }
}
