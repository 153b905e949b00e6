//! Global Search V2 client

use super::types::{ResultItem, ScanResult, SearchOptions, SupportedTypesList};
use crate::config::ServiceConfig;
use crate::error::Result;
use crate::http::{sdk_headers, HttpClient, RequestConfig};
use crate::pagination::{NextLocator, PageFetcher, PageResult, Pager};
use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

/// Endpoint used when no URL is configured
pub const DEFAULT_SERVICE_URL: &str = "https://api.global-search-tagging.cloud.ibm.com";

/// Service name used for configuration lookup and SDK headers
pub const DEFAULT_SERVICE_NAME: &str = "global_search";

const SERVICE_VERSION: &str = "V2";

/// Pager over search results
pub type SearchPager = Pager<SearchOptions, GlobalSearchV2>;

/// Client for the Global Search V2 API
#[derive(Debug, Clone)]
pub struct GlobalSearchV2 {
    client: HttpClient,
}

impl GlobalSearchV2 {
    /// Create a client on top of an existing transport
    ///
    /// The transport's base URL must point at the service.
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    /// Create a client from service settings
    pub fn from_config(config: &ServiceConfig) -> Result<Self> {
        let mut http = config.http_config();
        if http.base_url.is_none() {
            http.base_url = Some(DEFAULT_SERVICE_URL.to_string());
        }
        Ok(Self::new(HttpClient::with_config(http)?))
    }

    /// Create a client configured from `GLOBAL_SEARCH_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_config(&ServiceConfig::from_env(DEFAULT_SERVICE_NAME)?)
    }

    /// The underlying transport
    pub fn client(&self) -> &HttpClient {
        &self.client
    }

    /// Find resources matching a query
    ///
    /// Each call returns one batch and a live cursor for the next one; the
    /// results are exhausted once a batch comes back empty.
    pub async fn search(&self, options: &SearchOptions) -> Result<ScanResult> {
        let mut body = serde_json::Map::new();
        if let Some(ref query) = options.query {
            body.insert("query".to_string(), json!(query));
        }
        if let Some(ref fields) = options.fields {
            body.insert("fields".to_string(), json!(fields));
        }
        if let Some(ref cursor) = options.search_cursor {
            body.insert("search_cursor".to_string(), json!(cursor));
        }

        let mut request = RequestConfig::new()
            .headers(options.headers.clone())
            .headers(sdk_headers(DEFAULT_SERVICE_NAME, SERVICE_VERSION, "Search"))
            .query_opt("account_id", options.account_id.as_ref())
            .query_opt("limit", options.limit)
            .query_opt("timeout", options.timeout)
            .query_opt("sort", options.sort.as_ref().map(|sort| sort.join(",")))
            .json(body.into());
        if let Some(ref id) = options.transaction_id {
            request = request.header("transaction-id", id);
        }

        self.client.post_json("v3/resources/search", request).await
    }

    /// List the resource types the service indexes
    pub async fn get_supported_types(&self) -> Result<SupportedTypesList> {
        let request = RequestConfig::new().headers(sdk_headers(
            DEFAULT_SERVICE_NAME,
            SERVICE_VERSION,
            "GetSupportedTypes",
        ));
        self.client
            .get_json("v2/resources/supported_types", request)
            .await
    }

    /// Create a pager over every batch of a search
    ///
    /// Fails if `options` already carries a search cursor.
    pub fn new_search_pager(&self, options: &SearchOptions) -> Result<SearchPager> {
        Pager::new(options, self.clone())
    }
}

#[async_trait]
impl PageFetcher<SearchOptions> for GlobalSearchV2 {
    type Item = ResultItem;

    async fn fetch_page(&self, options: &SearchOptions) -> Result<PageResult<ResultItem>> {
        let result = self.search(options).await?;
        if result.items.is_empty() {
            debug!("Search returned an empty batch");
            return Ok(PageResult::last(result.items));
        }

        Ok(match result.search_cursor {
            Some(cursor) => PageResult::new(result.items, NextLocator::token(cursor)),
            None => PageResult::last(result.items),
        })
    }
}
