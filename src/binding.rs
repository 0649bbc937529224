//! Field binding resolution.
//!
//! A field's value is read from the header, the path (URI), the query string
//! or, when none of those apply, the request body. The location comes from the
//! field's own annotation first and the owning message's default second.

use crate::descriptor::{FieldDescriptor, MessageDescriptor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Part of an HTTP request a message field is bound to.
///
/// Body is not a variant: it is what a field falls back to when it resolves
/// to none of header, uri or query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BindingLocation {
    #[serde(alias = "BINDING_LOCATION_UNSPECIFIED")]
    Unspecified,
    #[serde(alias = "BINDING_LOCATION_HEADER")]
    Header,
    #[serde(alias = "BINDING_LOCATION_URI")]
    Uri,
    #[serde(alias = "BINDING_LOCATION_QUERY")]
    Query,
}

impl fmt::Display for BindingLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindingLocation::Unspecified => write!(f, "Unspecified"),
            BindingLocation::Header => write!(f, "Header"),
            BindingLocation::Uri => write!(f, "Uri"),
            BindingLocation::Query => write!(f, "Query"),
        }
    }
}

/// Location a field resolves to: its own annotation, else the message
/// default, else `None` (implicit body).
#[inline]
#[must_use]
pub fn effective_location(
    field: &FieldDescriptor,
    message: &MessageDescriptor,
) -> Option<BindingLocation> {
    field.location.or(message.default_location)
}

/// Whether `field` of `message` is bound to `location`.
///
/// An explicit field annotation decides on its own, even when it names a
/// different location than the message default. Exclusivity of annotations
/// is guaranteed by the descriptor, not checked here.
#[inline]
#[must_use]
pub fn resolves_to(
    field: &FieldDescriptor,
    message: &MessageDescriptor,
    location: BindingLocation,
) -> bool {
    effective_location(field, message) == Some(location)
}
