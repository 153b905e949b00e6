//! Resource Controller request options
//!
//! List options carry the `start` cursor and implement [`ListOptions`];
//! create and update options serialize directly into the request body.

use super::types::ResourceKeyPostParameters;
use crate::http::RequestConfig;
use crate::pagination::ListOptions;
use crate::types::JsonObject;
use serde::Serialize;

// ============================================================================
// Resource Instances
// ============================================================================

/// Filters for listing resource instances
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListResourceInstancesOptions {
    pub guid: Option<String>,
    pub name: Option<String>,
    pub resource_group_id: Option<String>,
    pub resource_id: Option<String>,
    pub resource_plan_id: Option<String>,
    /// `service_instance` or `resource_instance`
    pub instance_type: Option<String>,
    pub sub_type: Option<String>,
    pub state: Option<String>,
    /// Maximum number of instances per page
    pub limit: Option<i64>,
    /// Page cursor; set by the pager
    pub start: Option<String>,
    /// Only instances updated on or after this date
    pub updated_from: Option<String>,
    /// Only instances updated on or before this date
    pub updated_to: Option<String>,
}

impl ListResourceInstancesOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn guid(mut self, guid: impl Into<String>) -> Self {
        self.guid = Some(guid.into());
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn resource_group_id(mut self, id: impl Into<String>) -> Self {
        self.resource_group_id = Some(id.into());
        self
    }

    #[must_use]
    pub fn resource_id(mut self, id: impl Into<String>) -> Self {
        self.resource_id = Some(id.into());
        self
    }

    #[must_use]
    pub fn resource_plan_id(mut self, id: impl Into<String>) -> Self {
        self.resource_plan_id = Some(id.into());
        self
    }

    #[must_use]
    pub fn instance_type(mut self, instance_type: impl Into<String>) -> Self {
        self.instance_type = Some(instance_type.into());
        self
    }

    #[must_use]
    pub fn sub_type(mut self, sub_type: impl Into<String>) -> Self {
        self.sub_type = Some(sub_type.into());
        self
    }

    #[must_use]
    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    #[must_use]
    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub fn start(mut self, start: impl Into<String>) -> Self {
        self.start = Some(start.into());
        self
    }

    #[must_use]
    pub fn updated_from(mut self, date: impl Into<String>) -> Self {
        self.updated_from = Some(date.into());
        self
    }

    #[must_use]
    pub fn updated_to(mut self, date: impl Into<String>) -> Self {
        self.updated_to = Some(date.into());
        self
    }

    pub(crate) fn apply(&self, request: RequestConfig) -> RequestConfig {
        request
            .query_opt("guid", self.guid.as_ref())
            .query_opt("name", self.name.as_ref())
            .query_opt("resource_group_id", self.resource_group_id.as_ref())
            .query_opt("resource_id", self.resource_id.as_ref())
            .query_opt("resource_plan_id", self.resource_plan_id.as_ref())
            .query_opt("type", self.instance_type.as_ref())
            .query_opt("sub_type", self.sub_type.as_ref())
            .query_opt("state", self.state.as_ref())
            .query_opt("limit", self.limit)
            .query_opt("start", self.start.as_ref())
            .query_opt("updated_from", self.updated_from.as_ref())
            .query_opt("updated_to", self.updated_to.as_ref())
    }
}

impl ListOptions for ListResourceInstancesOptions {
    fn cursor(&self) -> Option<&str> {
        self.start.as_deref()
    }

    fn set_cursor(&mut self, cursor: Option<String>) {
        self.start = cursor;
    }
}

/// Options for provisioning a resource instance
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateResourceInstanceOptions {
    pub name: String,
    /// Deployment location of the instance
    pub target: String,
    pub resource_group: String,
    pub resource_plan_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_cleanup: Option<bool>,
    /// Broker-specific provisioning parameters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<JsonObject>,
    /// Lock the instance as soon as it is created
    #[serde(skip)]
    pub entity_lock: Option<bool>,
}

impl CreateResourceInstanceOptions {
    pub fn new(
        name: impl Into<String>,
        target: impl Into<String>,
        resource_group: impl Into<String>,
        resource_plan_id: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            target: target.into(),
            resource_group: resource_group.into(),
            resource_plan_id: resource_plan_id.into(),
            tags: None,
            allow_cleanup: None,
            parameters: None,
            entity_lock: None,
        }
    }

    #[must_use]
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn allow_cleanup(mut self, allow: bool) -> Self {
        self.allow_cleanup = Some(allow);
        self
    }

    #[must_use]
    pub fn parameters(mut self, parameters: JsonObject) -> Self {
        self.parameters = Some(parameters);
        self
    }

    #[must_use]
    pub fn entity_lock(mut self, lock: bool) -> Self {
        self.entity_lock = Some(lock);
        self
    }
}

/// Options for updating a resource instance
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateResourceInstanceOptions {
    #[serde(skip)]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<JsonObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_plan_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_cleanup: Option<bool>,
}

impl UpdateResourceInstanceOptions {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            parameters: None,
            resource_plan_id: None,
            allow_cleanup: None,
        }
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn parameters(mut self, parameters: JsonObject) -> Self {
        self.parameters = Some(parameters);
        self
    }

    #[must_use]
    pub fn resource_plan_id(mut self, id: impl Into<String>) -> Self {
        self.resource_plan_id = Some(id.into());
        self
    }

    #[must_use]
    pub fn allow_cleanup(mut self, allow: bool) -> Self {
        self.allow_cleanup = Some(allow);
        self
    }
}

/// Options for deleting a resource instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteResourceInstanceOptions {
    pub id: String,
    /// Also delete the instance's keys and bindings
    pub recursive: Option<bool>,
}

impl DeleteResourceInstanceOptions {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            recursive: None,
        }
    }

    #[must_use]
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = Some(recursive);
        self
    }
}

// ============================================================================
// Resource Keys
// ============================================================================

/// Filters for listing resource keys
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListResourceKeysOptions {
    pub guid: Option<String>,
    pub name: Option<String>,
    pub resource_group_id: Option<String>,
    pub resource_id: Option<String>,
    /// Maximum number of keys per page
    pub limit: Option<i64>,
    /// Page cursor; set by the pager
    pub start: Option<String>,
    pub updated_from: Option<String>,
    pub updated_to: Option<String>,
}

impl ListResourceKeysOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn guid(mut self, guid: impl Into<String>) -> Self {
        self.guid = Some(guid.into());
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn resource_group_id(mut self, id: impl Into<String>) -> Self {
        self.resource_group_id = Some(id.into());
        self
    }

    #[must_use]
    pub fn resource_id(mut self, id: impl Into<String>) -> Self {
        self.resource_id = Some(id.into());
        self
    }

    #[must_use]
    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub fn start(mut self, start: impl Into<String>) -> Self {
        self.start = Some(start.into());
        self
    }

    #[must_use]
    pub fn updated_from(mut self, date: impl Into<String>) -> Self {
        self.updated_from = Some(date.into());
        self
    }

    #[must_use]
    pub fn updated_to(mut self, date: impl Into<String>) -> Self {
        self.updated_to = Some(date.into());
        self
    }

    pub(crate) fn apply(&self, request: RequestConfig) -> RequestConfig {
        request
            .query_opt("guid", self.guid.as_ref())
            .query_opt("name", self.name.as_ref())
            .query_opt("resource_group_id", self.resource_group_id.as_ref())
            .query_opt("resource_id", self.resource_id.as_ref())
            .query_opt("limit", self.limit)
            .query_opt("start", self.start.as_ref())
            .query_opt("updated_from", self.updated_from.as_ref())
            .query_opt("updated_to", self.updated_to.as_ref())
    }
}

impl ListOptions for ListResourceKeysOptions {
    fn cursor(&self) -> Option<&str> {
        self.start.as_deref()
    }

    fn set_cursor(&mut self, cursor: Option<String>) {
        self.start = cursor;
    }
}

/// Options for listing the keys of one instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListResourceKeysForInstanceOptions {
    /// Instance id or GUID
    pub id: String,
    pub limit: Option<i64>,
    /// Page cursor; set by the pager
    pub start: Option<String>,
}

impl ListResourceKeysForInstanceOptions {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            limit: None,
            start: None,
        }
    }

    #[must_use]
    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub fn start(mut self, start: impl Into<String>) -> Self {
        self.start = Some(start.into());
        self
    }
}

impl ListOptions for ListResourceKeysForInstanceOptions {
    fn cursor(&self) -> Option<&str> {
        self.start.as_deref()
    }

    fn set_cursor(&mut self, cursor: Option<String>) {
        self.start = cursor;
    }
}

/// Options for creating a resource key
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateResourceKeyOptions {
    pub name: String,
    /// Instance or alias the key is created for
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<ResourceKeyPostParameters>,
    /// IAM role name or CRN, `Writer` when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl CreateResourceKeyOptions {
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
            parameters: None,
            role: None,
        }
    }

    #[must_use]
    pub fn parameters(mut self, parameters: ResourceKeyPostParameters) -> Self {
        self.parameters = Some(parameters);
        self
    }

    #[must_use]
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }
}

/// Options for renaming a resource key
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateResourceKeyOptions {
    #[serde(skip)]
    pub id: String,
    pub name: String,
}

impl UpdateResourceKeyOptions {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
