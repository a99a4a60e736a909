use std::collections::HashSet;
use std::future::Future;

use common::api::PagedList;
use tracing::debug;

use crate::error::{ClientError, Result};

/// Upper bound on pages [`collect_pages`] fetches for one listing.
pub const DEFAULT_MAX_PAGES: usize = 1_000;

/// Follows continuation tokens until the service reports no further pages.
///
/// `fetch` receives the token for the next page (`None` for the first one).
/// A token the service already handed out, or more than `DEFAULT_MAX_PAGES`
/// pages, aborts with [`ClientError::Paging`].
pub async fn collect_pages<T, F, Fut>(fetch: F) -> Result<Vec<T>>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<PagedList<T>>>,
{
    collect_pages_with_limit(DEFAULT_MAX_PAGES, fetch).await
}

pub async fn collect_pages_with_limit<T, F, Fut>(max_pages: usize, fetch: F) -> Result<Vec<T>>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<PagedList<T>>>,
{
    collect(max_pages, usize::MAX, fetch).await
}

/// Like [`collect_pages`] but stops requesting pages once `max_items` items
/// are in hand, and returns at most that many.
pub async fn collect_items<T, F, Fut>(max_items: usize, fetch: F) -> Result<Vec<T>>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<PagedList<T>>>,
{
    collect(DEFAULT_MAX_PAGES, max_items, fetch).await
}

async fn collect<T, F, Fut>(max_pages: usize, max_items: usize, mut fetch: F) -> Result<Vec<T>>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<PagedList<T>>>,
{
    let mut items = Vec::new();
    if max_items == 0 {
        return Ok(items);
    }
    let mut seen = HashSet::new();
    let mut token: Option<String> = None;

    for page_no in 0..max_pages {
        let page = fetch(token.take()).await?;
        let next = page.next_token().map(str::to_string);
        debug!(page = page_no, count = page.items.len(), more = next.is_some(), "fetched page");
        items.extend(page.items);
        if items.len() >= max_items {
            items.truncate(max_items);
            return Ok(items);
        }

        match next {
            None => return Ok(items),
            Some(next) => {
                if !seen.insert(next.clone()) {
                    return Err(ClientError::Paging(format!(
                        "continuation token {next} was returned twice"
                    )));
                }
                token = Some(next);
            }
        }
    }

    Err(ClientError::Paging(format!(
        "listing did not finish within {max_pages} pages"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn page(token: Option<&str>, items: &[u32]) -> PagedList<u32> {
        PagedList {
            continuation_token: token.map(str::to_string),
            items: items.to_vec(),
        }
    }

    #[tokio::test]
    async fn follows_tokens_until_exhausted() {
        let requested = Arc::new(Mutex::new(Vec::new()));
        let log = requested.clone();
        let items = collect_pages(move |token| {
            let log = log.clone();
            async move {
                log.lock().expect("lock").push(token.clone());
                Ok(match token.as_deref() {
                    None => page(Some("p2"), &[1, 2]),
                    Some("p2") => page(Some("p3"), &[3]),
                    _ => page(Some(""), &[4]),
                })
            }
        })
        .await
        .expect("collect");

        assert_eq!(items, vec![1, 2, 3, 4]);
        assert_eq!(
            *requested.lock().expect("lock"),
            vec![None, Some("p2".to_string()), Some("p3".to_string())]
        );
    }

    #[tokio::test]
    async fn repeated_token_aborts() {
        let err = collect_pages(|_| async { Ok(page(Some("same"), &[1])) })
            .await
            .expect_err("loop");
        assert!(matches!(err, ClientError::Paging(_)));
    }

    #[tokio::test]
    async fn page_cap_aborts() {
        let mut n = 0u32;
        let err = collect_pages_with_limit(3, |_| {
            n += 1;
            let token = format!("t{n}");
            async move { Ok(page(Some(token.as_str()), &[])) }
        })
        .await
        .expect_err("cap");
        assert!(err.to_string().contains("3 pages"));
    }

    #[tokio::test]
    async fn item_cap_stops_fetching() {
        let mut fetched = 0u32;
        let items = collect_items(3, |token| {
            fetched += 1;
            let next = format!("t{fetched}");
            async move {
                Ok(match token {
                    None => page(Some(next.as_str()), &[1, 2]),
                    Some(_) => page(Some(next.as_str()), &[3, 4]),
                })
            }
        })
        .await
        .expect("collect");

        assert_eq!(items, vec![1, 2, 3]);
        assert_eq!(fetched, 2);
        assert!(collect_items(0, |_| async { Ok(page(None, &[1])) })
            .await
            .expect("empty")
            .is_empty());
    }

    #[tokio::test]
    async fn errors_propagate() {
        let err = collect_pages::<u32, _, _>(|_| async {
            Err(ClientError::InvalidArgument("boom".into()))
        })
        .await
        .expect_err("error");
        assert!(matches!(err, ClientError::InvalidArgument(_)));
    }
}
