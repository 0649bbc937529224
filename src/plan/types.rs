use crate::descriptor::MethodDescriptor;
use http::Method;
use serde::{Serialize, Serializer};
use std::path::{Path, PathBuf};

/// Field read from a request header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderField {
    pub name: String,
}

/// Field read from a path parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UriField {
    /// Route parameter name (sanitized field name)
    pub name: String,
    /// Declared field name
    pub field: String,
    /// Parameter captures multiple segments (`*name`)
    pub wildcard: bool,
}

/// Field read from the query string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryField {
    pub name: String,
}

/// Where every input field of one method binding is read from.
///
/// The four lists are disjoint by field name and each keeps declared field
/// order. `body_fields` is only ever non-empty for methods that carry a body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MethodBindingPlan {
    pub header_fields: Vec<HeaderField>,
    pub uri_fields: Vec<UriField>,
    pub query_fields: Vec<QueryField>,
    pub body_fields: Vec<String>,
}

impl MethodBindingPlan {
    /// True when no field is left for the request body.
    #[must_use]
    pub fn is_bodyless(&self) -> bool {
        self.body_fields.is_empty()
    }
}

fn serialize_method<S: Serializer>(method: &Method, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(method.as_str())
}

/// One HTTP route of a method, ready for code emission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoutePlan {
    pub service: String,
    pub method: String,
    #[serde(serialize_with = "serialize_method")]
    pub http_method: Method,
    /// Path template as annotated
    pub template: String,
    /// Compiled router path
    pub router_path: String,
    pub bindings: MethodBindingPlan,
}

/// All routes planned for one proto file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilePlan {
    pub path: PathBuf,
    pub routes: Vec<RoutePlan>,
}

/// Identity of the method being planned, carried into diagnostics.
#[derive(Debug, Clone, Copy)]
pub struct MethodContext<'a> {
    pub file: &'a Path,
    pub service: &'a str,
    pub method: &'a MethodDescriptor,
}
