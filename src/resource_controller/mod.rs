//! Resource Controller V2
//!
//! Lifecycle of resource instances and the keys that grant access to them.
//!
//! List endpoints return `{ next_url, rows_count, resources }`, where
//! `next_url` is a relative URL whose `start` parameter selects the next
//! page. The `new_*_pager` constructors wrap those endpoints in a [`Pager`].
//!
//! Key credentials and key creation parameters are open-ended, so they are
//! [`ExtensibleRecord`]s: [`Credentials`] and [`ResourceKeyPostParameters`].
//!
//! [`Pager`]: crate::pagination::Pager
//! [`ExtensibleRecord`]: crate::record::ExtensibleRecord

mod options;
mod service;
mod types;

pub use options::{
    CreateResourceInstanceOptions, CreateResourceKeyOptions, DeleteResourceInstanceOptions,
    ListResourceInstancesOptions, ListResourceKeysForInstanceOptions, ListResourceKeysOptions,
    UpdateResourceInstanceOptions, UpdateResourceKeyOptions,
};
pub use service::{
    ResourceControllerV2, ResourceInstancesPager, ResourceKeysForInstancePager, ResourceKeysPager,
    DEFAULT_SERVICE_NAME, DEFAULT_SERVICE_URL,
};
pub use types::{
    Credentials, PlanHistoryItem, ResourceInstance, ResourceInstancesList, ResourceKey,
    ResourceKeyPostParameters, ResourceKeysList,
};
