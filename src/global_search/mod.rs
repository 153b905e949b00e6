//! Global Search V2
//!
//! Searches resources across an account with the Lucene query syntax.
//! Results come back in batches linked by a live `search_cursor`; a
//! [`SearchPager`] follows the cursor until an empty batch arrives.
//!
//! ```rust,ignore
//! let service = GlobalSearchV2::from_env()?;
//! let options = SearchOptions::new().query("name:my-vm*").fields(["name", "crn"]);
//! let items = service.new_search_pager(&options)?.get_all().await?;
//! ```

mod service;
mod types;

pub use service::{GlobalSearchV2, SearchPager, DEFAULT_SERVICE_NAME, DEFAULT_SERVICE_URL};
pub use types::{ResultItem, ScanResult, SearchOptions, SupportedTypesList};

#[cfg(test)]
mod tests;
