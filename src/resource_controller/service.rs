//! Resource Controller V2 client

use super::options::{
    CreateResourceInstanceOptions, CreateResourceKeyOptions, DeleteResourceInstanceOptions,
    ListResourceInstancesOptions, ListResourceKeysForInstanceOptions, ListResourceKeysOptions,
    UpdateResourceInstanceOptions, UpdateResourceKeyOptions,
};
use super::types::{ResourceInstance, ResourceInstancesList, ResourceKey, ResourceKeysList};
use crate::config::ServiceConfig;
use crate::error::Result;
use crate::http::{encode_path, sdk_headers, HttpClient, RequestConfig};
use crate::pagination::{NextLocator, PageFetcher, PageResult, Pager};
use async_trait::async_trait;
use reqwest::Method;

/// Endpoint used when no URL is configured
pub const DEFAULT_SERVICE_URL: &str = "https://resource-controller.cloud.ibm.com";

/// Service name used for configuration lookup and SDK headers
pub const DEFAULT_SERVICE_NAME: &str = "resource_controller";

const SERVICE_VERSION: &str = "V2";

/// Pager over resource instances
pub type ResourceInstancesPager = Pager<ListResourceInstancesOptions, ResourceControllerV2>;

/// Pager over resource keys
pub type ResourceKeysPager = Pager<ListResourceKeysOptions, ResourceControllerV2>;

/// Pager over the keys of one resource instance
pub type ResourceKeysForInstancePager =
    Pager<ListResourceKeysForInstanceOptions, ResourceControllerV2>;

/// Client for the Resource Controller V2 API
#[derive(Debug, Clone)]
pub struct ResourceControllerV2 {
    client: HttpClient,
}

impl ResourceControllerV2 {
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

    /// Create a client configured from `RESOURCE_CONTROLLER_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_config(&ServiceConfig::from_env(DEFAULT_SERVICE_NAME)?)
    }

    /// The underlying transport
    pub fn client(&self) -> &HttpClient {
        &self.client
    }

    fn request(operation_id: &str) -> RequestConfig {
        RequestConfig::new().headers(sdk_headers(
            DEFAULT_SERVICE_NAME,
            SERVICE_VERSION,
            operation_id,
        ))
    }

    // ========================================================================
    // Resource Instances
    // ========================================================================

    /// List one page of resource instances
    pub async fn list_resource_instances(
        &self,
        options: &ListResourceInstancesOptions,
    ) -> Result<ResourceInstancesList> {
        let request = options.apply(Self::request("ListResourceInstances"));
        self.client.get_json("v2/resource_instances", request).await
    }

    /// Provision a new resource instance
    pub async fn create_resource_instance(
        &self,
        options: &CreateResourceInstanceOptions,
    ) -> Result<ResourceInstance> {
        let mut request = Self::request("CreateResourceInstance").json(serde_json::to_value(options)?);
        if let Some(lock) = options.entity_lock {
            request = request.header("Entity-Lock", lock.to_string());
        }
        self.client.post_json("v2/resource_instances", request).await
    }

    /// Get a resource instance by id
    pub async fn get_resource_instance(&self, id: &str) -> Result<ResourceInstance> {
        self.client
            .get_json(
                &encode_path(&["v2", "resource_instances", id])?,
                Self::request("GetResourceInstance"),
            )
            .await
    }

    /// Update a resource instance
    pub async fn update_resource_instance(
        &self,
        options: &UpdateResourceInstanceOptions,
    ) -> Result<ResourceInstance> {
        let request = Self::request("UpdateResourceInstance").json(serde_json::to_value(options)?);
        self.client
            .request_json(
                Method::PATCH,
                &encode_path(&["v2", "resource_instances", options.id.as_str()])?,
                request,
            )
            .await
    }

    /// Delete a resource instance
    pub async fn delete_resource_instance(
        &self,
        options: &DeleteResourceInstanceOptions,
    ) -> Result<()> {
        let request =
            Self::request("DeleteResourceInstance").query_opt("recursive", options.recursive);
        self.client
            .request(
                Method::DELETE,
                &encode_path(&["v2", "resource_instances", options.id.as_str()])?,
                request,
            )
            .await?;
        Ok(())
    }

    /// Lock a resource instance against updates and deletion
    pub async fn lock_resource_instance(&self, id: &str) -> Result<ResourceInstance> {
        self.client
            .post_json(
                &encode_path(&["v2", "resource_instances", id, "lock"])?,
                Self::request("LockResourceInstance"),
            )
            .await
    }

    /// Unlock a resource instance
    pub async fn unlock_resource_instance(&self, id: &str) -> Result<ResourceInstance> {
        self.client
            .request_json(
                Method::DELETE,
                &encode_path(&["v2", "resource_instances", id, "lock"])?,
                Self::request("UnlockResourceInstance"),
            )
            .await
    }

    /// Create a pager over every resource instance matching `options`
    ///
    /// Fails if `options.start` is already set.
    pub fn new_resource_instances_pager(
        &self,
        options: &ListResourceInstancesOptions,
    ) -> Result<ResourceInstancesPager> {
        Pager::new(options, self.clone())
    }

    // ========================================================================
    // Resource Keys
    // ========================================================================

    /// List one page of resource keys
    pub async fn list_resource_keys(
        &self,
        options: &ListResourceKeysOptions,
    ) -> Result<ResourceKeysList> {
        let request = options.apply(Self::request("ListResourceKeys"));
        self.client.get_json("v2/resource_keys", request).await
    }

    /// List one page of the keys of a resource instance
    pub async fn list_resource_keys_for_instance(
        &self,
        options: &ListResourceKeysForInstanceOptions,
    ) -> Result<ResourceKeysList> {
        let request = Self::request("ListResourceKeysForInstance")
            .query_opt("limit", options.limit)
            .query_opt("start", options.start.as_ref());
        self.client
            .get_json(
                &encode_path(&[
                    "v2",
                    "resource_instances",
                    options.id.as_str(),
                    "resource_keys",
                ])?,
                request,
            )
            .await
    }

    /// Create a resource key
    pub async fn create_resource_key(
        &self,
        options: &CreateResourceKeyOptions,
    ) -> Result<ResourceKey> {
        let request = Self::request("CreateResourceKey").json(serde_json::to_value(options)?);
        self.client.post_json("v2/resource_keys", request).await
    }

    /// Get a resource key by id
    pub async fn get_resource_key(&self, id: &str) -> Result<ResourceKey> {
        self.client
            .get_json(
                &encode_path(&["v2", "resource_keys", id])?,
                Self::request("GetResourceKey"),
            )
            .await
    }

    /// Rename a resource key
    pub async fn update_resource_key(
        &self,
        options: &UpdateResourceKeyOptions,
    ) -> Result<ResourceKey> {
        let request = Self::request("UpdateResourceKey").json(serde_json::to_value(options)?);
        self.client
            .request_json(
                Method::PATCH,
                &encode_path(&["v2", "resource_keys", options.id.as_str()])?,
                request,
            )
            .await
    }

    /// Delete a resource key
    pub async fn delete_resource_key(&self, id: &str) -> Result<()> {
        self.client
            .request(
                Method::DELETE,
                &encode_path(&["v2", "resource_keys", id])?,
                Self::request("DeleteResourceKey"),
            )
            .await?;
        Ok(())
    }

    /// Create a pager over every resource key matching `options`
    ///
    /// Fails if `options.start` is already set.
    pub fn new_resource_keys_pager(
        &self,
        options: &ListResourceKeysOptions,
    ) -> Result<ResourceKeysPager> {
        Pager::new(options, self.clone())
    }

    /// Create a pager over every key of one resource instance
    pub fn new_resource_keys_for_instance_pager(
        &self,
        options: &ListResourceKeysForInstanceOptions,
    ) -> Result<ResourceKeysForInstancePager> {
        Pager::new(options, self.clone())
    }
}

fn next_locator(next_url: Option<String>) -> Option<NextLocator> {
    next_url.map(NextLocator::Url)
}

#[async_trait]
impl PageFetcher<ListResourceInstancesOptions> for ResourceControllerV2 {
    type Item = ResourceInstance;

    async fn fetch_page(
        &self,
        options: &ListResourceInstancesOptions,
    ) -> Result<PageResult<ResourceInstance>> {
        let list = self.list_resource_instances(options).await?;
        Ok(PageResult {
            items: list.resources,
            next: next_locator(list.next_url),
        })
    }
}

#[async_trait]
impl PageFetcher<ListResourceKeysOptions> for ResourceControllerV2 {
    type Item = ResourceKey;

    async fn fetch_page(&self, options: &ListResourceKeysOptions) -> Result<PageResult<ResourceKey>> {
        let list = self.list_resource_keys(options).await?;
        Ok(PageResult {
            items: list.resources,
            next: next_locator(list.next_url),
        })
    }
}

#[async_trait]
impl PageFetcher<ListResourceKeysForInstanceOptions> for ResourceControllerV2 {
    type Item = ResourceKey;

    async fn fetch_page(
        &self,
        options: &ListResourceKeysForInstanceOptions,
    ) -> Result<PageResult<ResourceKey>> {
        let list = self.list_resource_keys_for_instance(options).await?;
        Ok(PageResult {
            items: list.resources,
            next: next_locator(list.next_url),
        })
    }
}
