//! Cursor-driven pager
//!
//! Drives a [`PageFetcher`] page by page, owning the cursor of its private
//! copy of the list options.

use super::query::{get_query_param, QueryParamParser};
use super::types::{ListOptions, NextLocator, PageFetcher, PageResult, PagerState};
use crate::error::{Error, Result};
use futures::stream::{self, Stream};
use tracing::debug;

/// Query parameter carrying the cursor in "next" URLs unless overridden
pub const DEFAULT_CURSOR_PARAM: &str = "start";

/// Retrieves every page of a listing in order
///
/// A pager is created per listing, is not reusable once exhausted, and needs
/// `&mut self` to advance, so a single instance is never driven concurrently.
pub struct Pager<O, F>
where
    O: ListOptions,
    F: PageFetcher<O>,
{
    options: O,
    fetcher: F,
    state: PagerState,
    cursor_param: String,
    parse_query: QueryParamParser,
    pages_fetched: usize,
}

impl<O, F> Pager<O, F>
where
    O: ListOptions,
    F: PageFetcher<O>,
{
    /// Create a pager over a copy of `options`
    ///
    /// Fails with a configuration error if `options` already carries a
    /// non-empty cursor; the pager owns cursor progression.
    pub fn new(options: &O, fetcher: F) -> Result<Self> {
        if options.cursor().is_some_and(|cursor| !cursor.is_empty()) {
            return Err(Error::config(
                "the starting cursor must not be set on options passed to a pager",
            ));
        }

        Ok(Self {
            options: options.clone(),
            fetcher,
            state: PagerState::default(),
            cursor_param: DEFAULT_CURSOR_PARAM.to_string(),
            parse_query: get_query_param,
            pages_fetched: 0,
        })
    }

    /// Read the cursor from a different query parameter of "next" URLs
    #[must_use]
    pub fn with_cursor_param(mut self, name: impl Into<String>) -> Self {
        self.cursor_param = name.into();
        self
    }

    /// Replace the query parameter parser
    #[must_use]
    pub fn with_query_parser(mut self, parser: QueryParamParser) -> Self {
        self.parse_query = parser;
        self
    }

    /// Check if more results may be retrieved
    pub fn has_next(&self) -> bool {
        self.state.is_ready()
    }

    /// Current state
    pub fn state(&self) -> &PagerState {
        &self.state
    }

    /// Number of pages fetched successfully so far
    pub fn pages_fetched(&self) -> usize {
        self.pages_fetched
    }

    /// The wrapped fetcher
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Fetch the next page of results
    ///
    /// On failure the pager state is left untouched, so the same page can be
    /// requested again.
    pub async fn get_next(&mut self) -> Result<Vec<F::Item>> {
        let PagerState::Ready { cursor } = &self.state else {
            return Err(Error::NoMoreResults);
        };

        self.options.set_cursor(cursor.clone());
        let page = self.fetcher.fetch_page(&self.options).await?;
        let next_cursor = self.next_cursor(&page)?;

        self.pages_fetched += 1;
        debug!(
            page = self.pages_fetched,
            items = page.items.len(),
            has_next = next_cursor.is_some(),
            "Fetched page"
        );

        self.state = match next_cursor {
            Some(cursor) => PagerState::Ready {
                cursor: Some(cursor),
            },
            None => PagerState::Exhausted,
        };

        Ok(page.items)
    }

    /// Fetch all remaining pages and concatenate them in order
    ///
    /// Fails on the first error without returning partial results.
    pub async fn get_all(&mut self) -> Result<Vec<F::Item>> {
        let mut all_items = Vec::new();
        while self.has_next() {
            let page = self.get_next().await?;
            all_items.extend(page);
        }
        Ok(all_items)
    }

    /// Consume the pager as a lazy stream of pages
    ///
    /// The stream ends after the last page or after the first error.
    pub fn into_stream(self) -> impl Stream<Item = Result<Vec<F::Item>>> {
        stream::try_unfold(self, |mut pager| async move {
            if !pager.has_next() {
                return Ok::<_, Error>(None);
            }
            let page = pager.get_next().await?;
            Ok(Some((page, pager)))
        })
    }

    /// Cursor for the page after `page`, `None` when it was the last one
    fn next_cursor(&self, page: &PageResult<F::Item>) -> Result<Option<String>> {
        let cursor = match &page.next {
            None => None,
            Some(NextLocator::Url(url)) => (self.parse_query)(url, &self.cursor_param)?,
            Some(NextLocator::Token(token)) => Some(token.clone()),
        };
        Ok(cursor.filter(|c| !c.is_empty()))
    }
}

impl<O, F> std::fmt::Debug for Pager<O, F>
where
    O: ListOptions + std::fmt::Debug,
    F: PageFetcher<O>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pager")
            .field("options", &self.options)
            .field("state", &self.state)
            .field("cursor_param", &self.cursor_param)
            .field("pages_fetched", &self.pages_fetched)
            .finish_non_exhaustive()
    }
}
