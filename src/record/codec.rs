//! Record codec
//!
//! Decode/encode contract shared by every extensible record.

use crate::error::{Error, Result};
use crate::types::{JsonObject, JsonValue};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::trace;

/// Dynamic properties of a record, keyed by wire name
pub type PropertyMap = JsonObject;

/// A record with declared fields plus an open set of dynamic properties
///
/// Implementors provide the declared half (`FIELDS`, `decode_fields`,
/// `encode_fields`) and access to their property map; the wire codec and
/// the property accessors come for free.
///
/// A declared wire name never appears in the property map: decoding removes
/// declared keys before the remainder is stored, and [`set_property`]
/// refuses them.
///
/// [`set_property`]: ExtensibleRecord::set_property
pub trait ExtensibleRecord: Sized {
    /// Wire names of the declared fields
    const FIELDS: &'static [&'static str];

    /// Take every declared field out of `raw`, typically with [`take_field`]
    fn decode_fields(raw: &mut JsonObject) -> Result<Self>;

    /// Write every present declared field into `out`, typically with [`put_field`]
    fn encode_fields(&self, out: &mut JsonObject) -> Result<()>;

    /// Dynamic property storage (for implementors)
    fn property_map(&self) -> &PropertyMap;

    /// Mutable dynamic property storage (for implementors)
    fn property_map_mut(&mut self) -> &mut PropertyMap;

    /// Decode a record from a wire object
    ///
    /// Fails on the first declared field that does not parse; unknown keys
    /// never cause a failure.
    fn decode(raw: JsonObject) -> Result<Self> {
        let mut remaining = raw;
        let mut record = Self::decode_fields(&mut remaining)?;
        for (key, value) in remaining {
            trace!(key = %key, "Keeping undeclared property");
            record.property_map_mut().insert(key, value);
        }
        Ok(record)
    }

    /// Decode a record from any JSON value, which must be an object
    fn decode_value(raw: JsonValue) -> Result<Self> {
        match raw {
            JsonValue::Object(object) => Self::decode(object),
            other => Err(Error::decode(format!(
                "expected a JSON object, found {}",
                json_kind(&other)
            ))),
        }
    }

    /// Encode the record into a single flat wire object
    ///
    /// Declared fields overwrite same-named dynamic entries. `decode` then
    /// `encode` reproduces the input except for declared fields sent as
    /// `null`, which decode as absent and are therefore omitted.
    fn encode(&self) -> Result<JsonObject> {
        let mut out = self.property_map().clone();
        self.encode_fields(&mut out)?;
        Ok(out)
    }

    /// Check if `key` is the wire name of a declared field
    fn is_declared(key: &str) -> bool {
        Self::FIELDS.contains(&key)
    }

    /// Set a dynamic property
    ///
    /// Declared fields are only reachable through their typed accessors, so
    /// a declared wire name is rejected.
    fn set_property(&mut self, key: impl Into<String>, value: impl Into<JsonValue>) -> Result<()> {
        let key = key.into();
        if Self::is_declared(&key) {
            return Err(Error::ReservedProperty { key });
        }
        self.property_map_mut().insert(key, value.into());
        Ok(())
    }

    /// Get a dynamic property
    fn get_property(&self, key: &str) -> Option<&JsonValue> {
        self.property_map().get(key)
    }

    /// All dynamic properties
    fn get_properties(&self) -> &PropertyMap {
        self.property_map()
    }

    /// Remove a dynamic property, returning its value
    fn remove_property(&mut self, key: &str) -> Option<JsonValue> {
        self.property_map_mut().remove(key)
    }
}

/// Remove `key` from `raw` and parse it as `T`
///
/// A missing key or a JSON `null` yields `None`.
pub fn take_field<T: DeserializeOwned>(raw: &mut JsonObject, key: &str) -> Result<Option<T>> {
    match raw.remove(key) {
        None | Some(JsonValue::Null) => Ok(None),
        Some(value) => serde_json::from_value(value)
            .map(Some)
            .map_err(|e| Error::field_decode(key, e.to_string())),
    }
}

/// Insert `value` under `key` when present
pub fn put_field<T: Serialize + ?Sized>(
    out: &mut JsonObject,
    key: &str,
    value: Option<&T>,
) -> Result<()> {
    if let Some(value) = value {
        let value =
            serde_json::to_value(value).map_err(|e| Error::field_decode(key, e.to_string()))?;
        out.insert(key.to_string(), value);
    }
    Ok(())
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}

/// Implement `Serialize` and `Deserialize` for an [`ExtensibleRecord`]
///
/// ```rust,ignore
/// extensible_serde!(Credentials);
/// ```
#[macro_export]
macro_rules! extensible_serde {
    ($record:ty) => {
        impl ::serde::Serialize for $record {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                let object = $crate::record::ExtensibleRecord::encode(self)
                    .map_err(<S::Error as ::serde::ser::Error>::custom)?;
                ::serde::Serialize::serialize(&object, serializer)
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $record {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let object =
                    <$crate::types::JsonObject as ::serde::Deserialize>::deserialize(deserializer)?;
                <$record as $crate::record::ExtensibleRecord>::decode(object)
                    .map_err(<D::Error as ::serde::de::Error>::custom)
            }
        }
    };
}
