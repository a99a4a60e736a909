//! Continuation-token paging shared by every list operation.

use serde::{Deserialize, Serialize};

/// Cursor-paged list envelope returned by list operations.
///
/// Both fields are optional on the wire. Re-issue the same query with
/// [`PagedList::next_token`] to fetch the following page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct PagedList<T> {
    /// Opaque cursor for the next page; absent or empty when exhausted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub continuation_token: Option<String>,
    /// Items on this page.
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

impl<T> Default for PagedList<T> {
    fn default() -> Self {
        PagedList {
            continuation_token: None,
            items: Vec::new(),
        }
    }
}

impl<T> PagedList<T> {
    /// Token to pass on the next request, or `None` when no pages remain.
    pub fn next_token(&self) -> Option<&str> {
        self.continuation_token
            .as_deref()
            .filter(|token| !token.is_empty())
    }

    /// Whether more pages are available.
    pub fn has_more(&self) -> bool {
        self.next_token().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_with_missing_fields() {
        let page: PagedList<String> = serde_json::from_value(json!({})).expect("empty object");
        assert!(page.items.is_empty());
        assert!(!page.has_more());

        let page: PagedList<String> =
            serde_json::from_value(json!({"ContinuationToken": "abc"})).expect("token only");
        assert_eq!(page.next_token(), Some("abc"));
        assert!(page.items.is_empty());
    }

    #[test]
    fn empty_token_means_no_more_pages() {
        let page: PagedList<u32> =
            serde_json::from_value(json!({"ContinuationToken": "", "Items": [1, 2]}))
                .expect("decode");
        assert_eq!(page.items, vec![1, 2]);
        assert_eq!(page.next_token(), None);
    }

    #[test]
    fn omits_absent_token_when_serializing() {
        let page = PagedList {
            continuation_token: None,
            items: vec!["a".to_string()],
        };
        let value = serde_json::to_value(&page).expect("encode");
        assert_eq!(value, json!({"Items": ["a"]}));
    }
}
