//! Pagination module
//!
//! Cursor-driven retrieval of list endpoints.
//!
//! # Overview
//!
//! A [`Pager`] repeatedly invokes a [`PageFetcher`] with a private copy of the
//! caller's list options, carrying the continuation cursor from each page's
//! "next" locator into the following request. Callers either pull one page at
//! a time with [`Pager::get_next`], collect everything with
//! [`Pager::get_all`], or consume the pages lazily via [`Pager::into_stream`].
//!
//! ```rust,ignore
//! let mut pager = controller.new_resource_instances_pager(&options)?;
//! while pager.has_next() {
//!     for instance in pager.get_next().await? {
//!         println!("{:?}", instance.name);
//!     }
//! }
//! ```

mod pager;
mod query;
mod types;

pub use pager::{Pager, DEFAULT_CURSOR_PARAM};
pub use query::{get_query_param, QueryParamParser};
pub use types::{ListOptions, NextLocator, PageFetcher, PageResult, PagerState};
