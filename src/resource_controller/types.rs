//! Resource Controller response models

use crate::error::Result;
use crate::record::{put_field, take_field, ExtensibleRecord, PropertyMap};
use crate::types::JsonObject;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Extensible Records
// ============================================================================

/// Credentials of a resource key
///
/// Service-specific credential fields (connection strings, endpoints,
/// certificates) are kept as dynamic properties.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Credentials {
    /// Set instead of the secret fields when the caller may not see them
    pub redacted: Option<String>,
    /// The API key for the credentials
    pub apikey: Option<String>,
    /// Optional description of the API key
    pub iam_apikey_description: Option<String>,
    /// Name of the API key
    pub iam_apikey_name: Option<String>,
    /// CRN of the role of the credentials
    pub iam_role_crn: Option<String>,
    /// CRN of the service ID of the credentials
    pub iam_serviceid_crn: Option<String>,
    additional_properties: PropertyMap,
}

impl Credentials {
    /// Check if the secret fields were withheld by the service
    pub fn is_redacted(&self) -> bool {
        self.redacted.is_some()
    }
}

impl ExtensibleRecord for Credentials {
    const FIELDS: &'static [&'static str] = &[
        "REDACTED",
        "apikey",
        "iam_apikey_description",
        "iam_apikey_name",
        "iam_role_crn",
        "iam_serviceid_crn",
    ];

    fn decode_fields(raw: &mut JsonObject) -> Result<Self> {
        Ok(Self {
            redacted: take_field(raw, "REDACTED")?,
            apikey: take_field(raw, "apikey")?,
            iam_apikey_description: take_field(raw, "iam_apikey_description")?,
            iam_apikey_name: take_field(raw, "iam_apikey_name")?,
            iam_role_crn: take_field(raw, "iam_role_crn")?,
            iam_serviceid_crn: take_field(raw, "iam_serviceid_crn")?,
            additional_properties: PropertyMap::new(),
        })
    }

    fn encode_fields(&self, out: &mut JsonObject) -> Result<()> {
        put_field(out, "REDACTED", self.redacted.as_ref())?;
        put_field(out, "apikey", self.apikey.as_ref())?;
        put_field(out, "iam_apikey_description", self.iam_apikey_description.as_ref())?;
        put_field(out, "iam_apikey_name", self.iam_apikey_name.as_ref())?;
        put_field(out, "iam_role_crn", self.iam_role_crn.as_ref())?;
        put_field(out, "iam_serviceid_crn", self.iam_serviceid_crn.as_ref())
    }

    fn property_map(&self) -> &PropertyMap {
        &self.additional_properties
    }

    fn property_map_mut(&mut self) -> &mut PropertyMap {
        &mut self.additional_properties
    }
}

crate::extensible_serde!(Credentials);

/// Parameters passed to the service broker when a key is created
///
/// Brokers accept arbitrary parameters; only `serviceid_crn` is interpreted
/// by the controller itself.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceKeyPostParameters {
    /// Service ID the generated API key belongs to
    pub serviceid_crn: Option<String>,
    additional_properties: PropertyMap,
}

impl ResourceKeyPostParameters {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn serviceid_crn(mut self, crn: impl Into<String>) -> Self {
        self.serviceid_crn = Some(crn.into());
        self
    }
}

impl ExtensibleRecord for ResourceKeyPostParameters {
    const FIELDS: &'static [&'static str] = &["serviceid_crn"];

    fn decode_fields(raw: &mut JsonObject) -> Result<Self> {
        Ok(Self {
            serviceid_crn: take_field(raw, "serviceid_crn")?,
            additional_properties: PropertyMap::new(),
        })
    }

    fn encode_fields(&self, out: &mut JsonObject) -> Result<()> {
        put_field(out, "serviceid_crn", self.serviceid_crn.as_ref())
    }

    fn property_map(&self) -> &PropertyMap {
        &self.additional_properties
    }

    fn property_map_mut(&mut self) -> &mut PropertyMap {
        &mut self.additional_properties
    }
}

crate::extensible_serde!(ResourceKeyPostParameters);

// ============================================================================
// Resource Instances
// ============================================================================

/// A plan change in the life of an instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanHistoryItem {
    pub resource_plan_id: String,
    pub start_date: DateTime<Utc>,
}

/// A provisioned resource instance
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceInstance {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_group_crn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_plan_id: Option<String>,
    /// Deployment location, e.g. a region CRN
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_crn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_cleanup: Option<bool>,
    /// Locked instances cannot be updated or deleted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_operation: Option<JsonObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dashboard_url: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub plan_history: Vec<PlanHistoryItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_aliases_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_bindings_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_keys_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

/// One page of resource instances
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceInstancesList {
    /// Relative URL of the next page, absent on the last page
    #[serde(default)]
    pub next_url: Option<String>,
    #[serde(default)]
    pub rows_count: i64,
    #[serde(default)]
    pub resources: Vec<ResourceInstance>,
}

// ============================================================================
// Resource Keys
// ============================================================================

/// A set of credentials for a resource instance
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceKey {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_group_id: Option<String>,
    /// CRN of the instance or alias the key belongs to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_crn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credentials: Option<Credentials>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iam_compatible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_instance_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

/// One page of resource keys
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceKeysList {
    /// Relative URL of the next page, absent on the last page
    #[serde(default)]
    pub next_url: Option<String>,
    #[serde(default)]
    pub rows_count: i64,
    #[serde(default)]
    pub resources: Vec<ResourceKey>,
}
