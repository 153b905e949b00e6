//! Extensible record module
//!
//! Records that declare a fixed set of typed fields while round-tripping any
//! other keys found in the wire object.
//!
//! # Overview
//!
//! A type implementing [`ExtensibleRecord`] decodes its declared fields out of
//! a JSON object with [`take_field`], and every key left over lands in its
//! dynamic property map. Encoding starts from the property map and overlays
//! the declared fields with [`put_field`], so both halves share one flat
//! object on the wire.
//!
//! The [`extensible_serde!`](crate::extensible_serde) macro bridges a record
//! into serde so it can be nested inside ordinary `#[derive(Deserialize)]`
//! models.

mod codec;

pub use codec::{put_field, take_field, ExtensibleRecord, PropertyMap};
