use crate::binding::BindingLocation;
use crate::error::DescriptorError;
use http::Method;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A set of proto files to plan, as read from a descriptor document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DescriptorSet {
    #[serde(default)]
    pub files: Vec<FileDescriptor>,
}

/// One proto source file and the services it declares.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileDescriptor {
    /// Proto source path, reported in diagnostics
    pub path: PathBuf,
    #[serde(default)]
    pub services: Vec<ServiceDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceDescriptor {
    pub name: String,
    #[serde(default)]
    pub methods: Vec<MethodDescriptor>,
}

/// An RPC method with its HTTP annotation and input message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodDescriptor {
    pub name: String,
    /// `google.api.http` rule; methods without one are not exposed over HTTP
    #[serde(default)]
    pub http: Option<HttpRule>,
    pub input: MessageDescriptor,
}

/// Input message of a method, with its fields in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageDescriptor {
    pub name: String,
    /// Message-level default binding for fields without their own annotation
    #[serde(default)]
    pub default_location: Option<BindingLocation>,
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    /// Explicit binding annotation on the field
    #[serde(default)]
    pub location: Option<BindingLocation>,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        FieldDescriptor {
            name: name.into(),
            location: None,
        }
    }

    #[must_use]
    pub fn with_location(mut self, location: BindingLocation) -> Self {
        self.location = Some(location);
        self
    }
}

/// Verb + template for a non-standard HTTP method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomPattern {
    pub kind: String,
    pub path: String,
}

/// A `google.api.http` rule.
///
/// Exactly one of the verb fields is expected to be set. Additional bindings
/// expose the same method under further routes; bindings nested inside an
/// additional binding are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpRule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub get: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub put: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patch: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<CustomPattern>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional_bindings: Vec<HttpRule>,
}

impl HttpRule {
    /// HTTP method and path template of this rule.
    ///
    /// Returns `Ok(None)` when no verb is set.
    ///
    /// # Errors
    ///
    /// Fails when more than one verb is set or a custom kind is not a valid
    /// method token.
    pub fn pattern(&self) -> Result<Option<(Method, &str)>, DescriptorError> {
        let mut found: Vec<(Method, &str)> = Vec::with_capacity(1);
        let mut verbs: Vec<String> = Vec::new();

        let standard = [
            (Method::GET, self.get.as_deref()),
            (Method::PUT, self.put.as_deref()),
            (Method::POST, self.post.as_deref()),
            (Method::DELETE, self.delete.as_deref()),
            (Method::PATCH, self.patch.as_deref()),
        ];
        for (method, path) in standard {
            if let Some(path) = path {
                verbs.push(method.as_str().to_string());
                found.push((method, path));
            }
        }

        if let Some(custom) = &self.custom {
            let kind = custom.kind.to_ascii_uppercase();
            let method = Method::from_bytes(kind.as_bytes()).map_err(|_| {
                DescriptorError::InvalidHttpMethod {
                    kind: custom.kind.clone(),
                }
            })?;
            verbs.push(kind);
            found.push((method, custom.path.as_str()));
        }

        match found.len() {
            0 => Ok(None),
            1 => Ok(found.pop()),
            _ => Err(DescriptorError::AmbiguousHttpRule { verbs }),
        }
    }

    /// This rule followed by its additional bindings, in declaration order.
    pub fn bindings(&self) -> impl Iterator<Item = &HttpRule> {
        std::iter::once(self).chain(self.additional_bindings.iter())
    }
}
