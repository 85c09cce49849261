//! Shared pagination for collection endpoints.
//!
//! Some endpoints page server-side (`content` carries `pageIndex`,
//! `pageSize`, `totalRow` and a `data` array); others return the whole
//! collection as a plain array. [`Page::from_response`] folds both shapes
//! into one `Page`, slicing locally when the server did not. The fallback
//! treats a plain-array response as the authoritative full collection — it
//! is never re-applied to a payload that already carries `pageIndex`.

use serde::Deserialize;

/// Query parameters for a paged request.
///
/// `page_index` is 1-based; values below 1 are clamped on construction, as
/// is a zero `page_size`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageQuery {
    pub page_index: u32,
    pub page_size: u32,
    pub keyword: Option<String>,
}

impl PageQuery {
    pub fn new(page_index: u32, page_size: u32) -> Self {
        Self {
            page_index: page_index.max(1),
            page_size: page_size.max(1),
            keyword: None,
        }
    }

    /// Attach a search keyword; blank keywords are dropped.
    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        let keyword = keyword.into().trim().to_string();
        self.keyword = (!keyword.is_empty()).then_some(keyword);
        self
    }

    /// Query pairs for the outbound request.
    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("pageIndex", self.page_index.to_string()),
            ("pageSize", self.page_size.to_string()),
        ];
        if let Some(keyword) = &self.keyword {
            pairs.push(("keyword", keyword.clone()));
        }
        pairs
    }
}

impl Default for PageQuery {
    fn default() -> Self {
        Self::new(1, 10)
    }
}

/// Server-side paged payload inside the envelope.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedContent<T> {
    pub page_index: u32,
    pub page_size: u32,
    pub total_row: u32,
    #[serde(default)]
    pub keywords: Option<String>,
    pub data: Vec<T>,
}

/// A collection endpoint either pages server-side or returns everything.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum PagedOrFull<T> {
    Paged(PagedContent<T>),
    Full(Vec<T>),
}

/// One page of results with totals, whichever side did the slicing.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page_index: u32,
    pub page_size: u32,
    pub total_row: u32,
    pub total_pages: u32,
}

impl<T> Page<T> {
    /// Fold a paged or full response into a page.
    pub fn from_response(response: PagedOrFull<T>, query: &PageQuery) -> Self {
        match response {
            PagedOrFull::Paged(content) => Self::from_paged(content),
            PagedOrFull::Full(items) => Self::slice(items, query),
        }
    }

    /// Wrap a server-paged payload without touching its items.
    pub fn from_paged(content: PagedContent<T>) -> Self {
        let page_size = content.page_size.max(1);
        Self {
            page_index: content.page_index.max(1),
            page_size,
            total_row: content.total_row,
            total_pages: total_pages(content.total_row, page_size),
            items: content.data,
        }
    }

    /// Client-side fallback: slice the full collection at
    /// `(page_index - 1) * page_size .. + page_size`.
    pub fn slice(items: Vec<T>, query: &PageQuery) -> Self {
        // Re-clamp in case the query was built as a struct literal.
        let page_index = query.page_index.max(1);
        let page_size = query.page_size.max(1);
        let total_row = items.len() as u32;
        let start = ((page_index - 1) * page_size) as usize;
        let items = if start >= items.len() {
            Vec::new()
        } else {
            items
                .into_iter()
                .skip(start)
                .take(page_size as usize)
                .collect()
        };
        Self {
            items,
            page_index,
            page_size,
            total_row,
            total_pages: total_pages(total_row, page_size),
        }
    }
}

fn total_pages(total_row: u32, page_size: u32) -> u32 {
    total_row.div_ceil(page_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(23, 10), 3);
    }

    #[test]
    fn test_query_clamps_index_and_size() {
        let query = PageQuery::new(0, 0);
        assert_eq!(query.page_index, 1);
        assert_eq!(query.page_size, 1);
    }

    #[test]
    fn test_blank_keyword_is_dropped() {
        let query = PageQuery::new(1, 10).with_keyword("   ");
        assert!(query.keyword.is_none());

        let query = PageQuery::new(1, 10).with_keyword(" beach ");
        assert_eq!(query.keyword.as_deref(), Some("beach"));
    }

    #[test]
    fn test_query_pairs_include_keyword_only_when_set() {
        let query = PageQuery::new(2, 5);
        let pairs = query.query_pairs();
        assert_eq!(pairs.len(), 2);
        assert!(pairs.contains(&("pageIndex", "2".to_string())));

        let query = query.with_keyword("hanoi");
        let pairs = query.query_pairs();
        assert!(pairs.contains(&("keyword", "hanoi".to_string())));
    }

    #[test]
    fn test_slice_middle_page() {
        let query = PageQuery::new(2, 3);
        let page = Page::slice((1..=7).collect::<Vec<u32>>(), &query);
        assert_eq!(page.items, vec![4, 5, 6]);
        assert_eq!(page.total_row, 7);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn test_slice_short_last_page() {
        let query = PageQuery::new(3, 3);
        let page = Page::slice((1..=7).collect::<Vec<u32>>(), &query);
        assert_eq!(page.items, vec![7]);
    }

    #[test]
    fn test_slice_past_the_end_is_empty() {
        let query = PageQuery::new(5, 3);
        let page = Page::slice((1..=7).collect::<Vec<u32>>(), &query);
        assert!(page.items.is_empty());
        assert_eq!(page.total_row, 7);
    }

    #[test]
    fn test_decodes_paged_shape() {
        let body = r#"{"pageIndex":1,"pageSize":10,"totalRow":23,"keywords":null,"data":[1,2,3]}"#;
        let response: PagedOrFull<u32> = serde_json::from_str(body).unwrap();
        let page = Page::from_response(response, &PageQuery::new(1, 10));
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items, vec![1, 2, 3]);
    }

    #[test]
    fn test_decodes_full_shape_and_slices() {
        let body = "[1,2,3,4,5]";
        let response: PagedOrFull<u32> = serde_json::from_str(body).unwrap();
        let page = Page::from_response(response, &PageQuery::new(2, 2));
        assert_eq!(page.items, vec![3, 4]);
        assert_eq!(page.total_row, 5);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn test_paged_shape_is_never_resliced() {
        // A server page with more rows than its page size stays untouched.
        let content = PagedContent {
            page_index: 2,
            page_size: 2,
            total_row: 9,
            keywords: None,
            data: vec![10, 20],
        };
        let page = Page::from_paged(content);
        assert_eq!(page.items, vec![10, 20]);
        assert_eq!(page.total_pages, 5);
    }
}
