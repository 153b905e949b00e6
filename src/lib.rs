// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::new_without_default)]

//! # Platform Services
//!
//! Typed async client for the Global Search V2 and Resource Controller V2
//! platform APIs.
//!
//! ## Features
//!
//! - **Cursor Pagination**: [`Pager`] walks any list endpoint page by page,
//!   collects everything, or streams pages lazily
//! - **Extensible Records**: [`ExtensibleRecord`] payloads keep unknown wire
//!   fields next to their declared ones and round-trip them unchanged
//! - **Resilient Transport**: retries with backoff, `Retry-After` handling and
//!   client-side rate limiting
//! - **Configuration**: environment variables or a YAML file per service
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use platform_services::resource_controller::{
//!     ListResourceInstancesOptions, ResourceControllerV2,
//! };
//!
//! #[tokio::main]
//! async fn main() -> platform_services::Result<()> {
//!     let controller = ResourceControllerV2::from_env()?;
//!
//!     let options = ListResourceInstancesOptions::new().limit(50);
//!     let mut pager = controller.new_resource_instances_pager(&options)?;
//!     for instance in pager.get_all().await? {
//!         println!("{:?}", instance.name);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────┬──────────────────────────────────┐
//! │        global_search          │       resource_controller        │
//! │  search  supported_types      │  instances  keys  (CRUD, lock)   │
//! └───────────────┬───────────────┴────────────────┬─────────────────┘
//!                 │                                │
//! ┌───────────────┴────────────┬───────────────────┴─────────────────┐
//! │        pagination          │              record                 │
//! │  Pager  PageFetcher        │  ExtensibleRecord  extensible_serde │
//! └───────────────┬────────────┴─────────────────────────────────────┘
//!                 │
//! ┌───────────────┴────────────────────────────────────────────────────┐
//! │  http: retry, backoff, rate limit    config: env / YAML            │
//! └────────────────────────────────────────────────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the client
pub mod error;

/// Common types and type aliases
pub mod types;

/// HTTP client with retry and rate limiting
pub mod http;

/// Cursor-driven pagination
pub mod pagination;

/// Records with declared fields plus dynamic properties
pub mod record;

/// Service configuration
pub mod config;

/// Global Search V2 service
pub mod global_search;

/// Resource Controller V2 service
pub mod resource_controller;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use config::ServiceConfig;
pub use global_search::GlobalSearchV2;
pub use pagination::{ListOptions, PageFetcher, PageResult, Pager};
pub use record::ExtensibleRecord;
pub use resource_controller::ResourceControllerV2;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
