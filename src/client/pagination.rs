//! Pagination helpers for token-based listing operations
//!
//! Listing calls return one [`Page`] at a time together with an opaque
//! continuation token. [`paginate`] turns a page-fetching closure into a lazy
//! stream of pages, and [`collect_all`] drains that stream into memory.

use std::future::Future;

use futures::stream::{self, Stream, TryStreamExt};
use log::debug;

use crate::error::{ApiError, Error, Result};

/// Upper bound on items collected from a single listing.
pub const DEFAULT_MAX_ITEMS: usize = 10_000;

/// One page of a listing response.
#[derive(Debug, Clone)]
pub struct Page<T> {
    /// Items on this page
    pub items: Vec<T>,

    /// Token for the next page, `None` on the last page
    pub next_token: Option<String>,
}

impl<T> Page<T> {
    /// Create a page. An empty continuation token counts as the last page.
    pub fn new(items: Vec<T>, next_token: Option<String>) -> Self {
        Self {
            items,
            next_token: next_token.filter(|token| !token.is_empty()),
        }
    }
}

/// Where the next request starts.
enum Cursor {
    First,
    Token(String),
    Done,
}

/// Lazily walk every page of a listing.
///
/// `fetch` is called with `None` for the first page and with the previous
/// page's continuation token afterwards. The stream ends after the first page
/// without a token and stops at the first error.
pub fn paginate<T, F, Fut>(fetch: F) -> impl Stream<Item = Result<Vec<T>>>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<Page<T>>>,
{
    stream::try_unfold((fetch, Cursor::First), |(mut fetch, cursor)| async move {
        let token = match cursor {
            Cursor::Done => return Ok(None),
            Cursor::First => None,
            Cursor::Token(token) => Some(token),
        };

        let page = fetch(token).await?;
        let next = match page.next_token {
            Some(token) => Cursor::Token(token),
            None => Cursor::Done,
        };

        Ok::<_, Error>(Some((page.items, (fetch, next))))
    })
}

/// Drain a page stream into a single vector.
///
/// Fails with [`ApiError::TooManyResults`] once more than `max_items` items
/// have been collected. Nothing is returned on failure.
pub async fn collect_all<T, S>(pages: S, max_items: usize) -> Result<Vec<T>>
where
    S: Stream<Item = Result<Vec<T>>>,
{
    let mut pages = std::pin::pin!(pages);
    let mut items = Vec::new();
    let mut page_count = 0usize;

    while let Some(page) = pages.try_next().await? {
        page_count += 1;
        items.extend(page);

        if items.len() > max_items {
            return Err(ApiError::TooManyResults(max_items).into());
        }
    }

    debug!("Collected {} items from {} pages", items.len(), page_count);
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn pages_of(
        pages: Vec<Vec<u32>>,
    ) -> impl FnMut(Option<String>) -> std::future::Ready<Result<Page<u32>>> {
        let total = pages.len();
        move |token: Option<String>| {
            let index: usize = token.map(|t| t.parse().unwrap()).unwrap_or(0);
            let next = (index + 1 < total).then(|| (index + 1).to_string());
            std::future::ready(Ok(Page::new(pages[index].clone(), next)))
        }
    }

    #[test]
    fn test_page_empty_token_is_last() {
        let page: Page<u32> = Page::new(vec![1], Some(String::new()));
        assert!(page.next_token.is_none());

        let page: Page<u32> = Page::new(vec![1], Some("abc".to_string()));
        assert!(page.next_token.is_some());
    }

    #[tokio::test]
    async fn test_collect_all_drains_pages_in_order() {
        let pages = paginate(pages_of(vec![vec![1, 2], vec![3], vec![4, 5]]));
        let items = collect_all(pages, DEFAULT_MAX_ITEMS).await.unwrap();
        assert_eq!(items, vec![1, 2, 3, 4, 5]);
    }

    #[tokio::test]
    async fn test_collect_all_tolerates_empty_pages() {
        let pages = paginate(pages_of(vec![vec![], vec![7], vec![]]));
        let items = collect_all(pages, DEFAULT_MAX_ITEMS).await.unwrap();
        assert_eq!(items, vec![7]);
    }

    #[tokio::test]
    async fn test_paginate_passes_tokens_through() {
        let seen = Mutex::new(Vec::new());
        let pages = paginate(|token: Option<String>| {
            seen.lock().unwrap().push(token.clone());
            let page = match token.as_deref() {
                None => Page::new(vec!["a"], Some("t1".to_string())),
                Some("t1") => Page::new(vec!["b"], Some("t2".to_string())),
                _ => Page::new(vec!["c"], None),
            };
            std::future::ready(Ok(page))
        });

        let items = collect_all(pages, DEFAULT_MAX_ITEMS).await.unwrap();
        assert_eq!(items, vec!["a", "b", "c"]);
        assert_eq!(
            *seen.lock().unwrap(),
            vec![None, Some("t1".to_string()), Some("t2".to_string())]
        );
    }

    #[tokio::test]
    async fn test_collect_all_aborts_on_page_error() {
        let pages = paginate(|token: Option<String>| {
            let result = match token {
                None => Ok(Page::new(vec![1u32], Some("next".to_string()))),
                Some(_) => Err(ApiError::AccessDenied("denied".to_string()).into()),
            };
            std::future::ready(result)
        });

        let result = collect_all(pages, DEFAULT_MAX_ITEMS).await;
        assert!(matches!(
            result,
            Err(Error::Api(ApiError::AccessDenied(_)))
        ));
    }

    #[tokio::test]
    async fn test_collect_all_enforces_cap() {
        let pages = paginate(pages_of(vec![vec![1, 2], vec![3, 4]]));
        let result = collect_all(pages, 3).await;
        assert!(matches!(
            result,
            Err(Error::Api(ApiError::TooManyResults(3)))
        ));
    }
}
