//! Global Search request options and response models

use crate::error::Result;
use crate::pagination::ListOptions;
use crate::record::{put_field, take_field, ExtensibleRecord, PropertyMap};
use crate::types::{JsonObject, StringMap};
use serde::{Deserialize, Serialize};

// ============================================================================
// Options
// ============================================================================

/// Options for a search call
///
/// `search_cursor` is the continuation cursor; leave it unset when handing
/// the options to a pager.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchOptions {
    /// Lucene query string
    pub query: Option<String>,
    /// Fields returned for every item
    pub fields: Option<Vec<String>>,
    /// Cursor returned by the previous call
    pub search_cursor: Option<String>,
    /// Transaction id propagated in the `transaction-id` header
    pub transaction_id: Option<String>,
    /// Account to search in
    pub account_id: Option<String>,
    /// Maximum number of items per call
    pub limit: Option<i64>,
    /// Search timeout in milliseconds
    pub timeout: Option<i64>,
    /// Sort fields, `-` prefix for descending
    pub sort: Option<Vec<String>>,
    /// Additional request headers
    pub headers: StringMap,
}

impl SearchOptions {
    /// Create empty search options
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    #[must_use]
    pub fn fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn search_cursor(mut self, cursor: impl Into<String>) -> Self {
        self.search_cursor = Some(cursor.into());
        self
    }

    #[must_use]
    pub fn transaction_id(mut self, id: impl Into<String>) -> Self {
        self.transaction_id = Some(id.into());
        self
    }

    #[must_use]
    pub fn account_id(mut self, id: impl Into<String>) -> Self {
        self.account_id = Some(id.into());
        self
    }

    #[must_use]
    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub fn timeout(mut self, timeout: i64) -> Self {
        self.timeout = Some(timeout);
        self
    }

    #[must_use]
    pub fn sort<I, S>(mut self, sort: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sort = Some(sort.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }
}

impl ListOptions for SearchOptions {
    fn cursor(&self) -> Option<&str> {
        self.search_cursor.as_deref()
    }

    fn set_cursor(&mut self, cursor: Option<String>) {
        self.search_cursor = cursor;
    }
}

// ============================================================================
// Models
// ============================================================================

/// One resource found by a search
///
/// Only `crn` is declared; every other requested field is kept as a dynamic
/// property.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultItem {
    /// Cloud resource name of the resource
    pub crn: Option<String>,
    additional_properties: PropertyMap,
}

impl ResultItem {
    /// Create an item for the given CRN
    pub fn new(crn: impl Into<String>) -> Self {
        Self {
            crn: Some(crn.into()),
            additional_properties: PropertyMap::new(),
        }
    }
}

impl ExtensibleRecord for ResultItem {
    const FIELDS: &'static [&'static str] = &["crn"];

    fn decode_fields(raw: &mut JsonObject) -> Result<Self> {
        Ok(Self {
            crn: take_field(raw, "crn")?,
            additional_properties: PropertyMap::new(),
        })
    }

    fn encode_fields(&self, out: &mut JsonObject) -> Result<()> {
        put_field(out, "crn", self.crn.as_ref())
    }

    fn property_map(&self) -> &PropertyMap {
        &self.additional_properties
    }

    fn property_map_mut(&mut self) -> &mut PropertyMap {
        &mut self.additional_properties
    }
}

crate::extensible_serde!(ResultItem);

/// One batch of search results
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScanResult {
    /// Cursor to send with the next call
    #[serde(default)]
    pub search_cursor: Option<String>,
    /// Limit applied by the service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<f64>,
    /// Resources in this batch; empty once the results are exhausted
    #[serde(default)]
    pub items: Vec<ResultItem>,
}

/// Resource types the search service indexes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportedTypesList {
    #[serde(default)]
    pub supported_types: Vec<String>,
}
