//! Pagination types and traits
//!
//! Defines the page, locator and collaborator abstractions the pager drives.

use crate::error::Result;
use async_trait::async_trait;

/// Where the next page starts, as reported by the page just fetched
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextLocator {
    /// Absolute or relative URL; the cursor is one of its query parameters
    Url(String),
    /// Cursor carried directly in the response body
    Token(String),
}

impl NextLocator {
    /// Create a URL locator
    pub fn url(url: impl Into<String>) -> Self {
        Self::Url(url.into())
    }

    /// Create a token locator
    pub fn token(token: impl Into<String>) -> Self {
        Self::Token(token.into())
    }
}

/// One fetched page
#[derive(Debug, Clone, PartialEq)]
pub struct PageResult<T> {
    /// Items in the order the service returned them
    pub items: Vec<T>,
    /// Locator of the next page, absent on the last page
    pub next: Option<NextLocator>,
}

impl<T> PageResult<T> {
    /// Create a page that has a successor
    pub fn new(items: Vec<T>, next: NextLocator) -> Self {
        Self {
            items,
            next: Some(next),
        }
    }

    /// Create the final page
    pub fn last(items: Vec<T>) -> Self {
        Self { items, next: None }
    }

    /// Check if this page reports a successor
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}

/// Pager lifecycle state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PagerState {
    /// More pages may exist; the cursor is unset before the first fetch
    Ready {
        /// Cursor to send with the next request
        cursor: Option<String>,
    },
    /// The last page has been returned
    Exhausted,
}

impl PagerState {
    /// Check if more pages may be fetched
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready { .. })
    }

    /// Check if pagination is complete
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted)
    }
}

impl Default for PagerState {
    fn default() -> Self {
        Self::Ready { cursor: None }
    }
}

/// Parameters of a list call that carry a continuation cursor
///
/// The cursor field is owned by the pager once the options are handed over.
pub trait ListOptions: Clone + Send + Sync {
    /// Current cursor value
    fn cursor(&self) -> Option<&str>;

    /// Replace the cursor value
    fn set_cursor(&mut self, cursor: Option<String>);
}

/// Fetches a single page for the given options
///
/// Implemented by service clients; one call is one network round trip.
#[async_trait]
pub trait PageFetcher<O: Send + Sync>: Send + Sync {
    /// Item type of the listed collection
    type Item: Send;

    /// Fetch the page selected by `options`
    async fn fetch_page(&self, options: &O) -> Result<PageResult<Self::Item>>;
}
