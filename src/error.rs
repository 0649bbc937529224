use std::fmt;
use std::path::PathBuf;

/// Generation-time validation failure for a single method binding.
///
/// Any variant aborts generation for the enclosing method and file. The
/// context fields are carried verbatim so the driver can report them without
/// re-reading the descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindingError {
    /// The HTTP rule carried an empty path template.
    EmptyTemplate,
    /// A route parameter exists but its field is not bound to the URI.
    BindingMismatch {
        /// Service owning the method
        service: String,
        /// Method name
        method: String,
        /// Offending input field
        field: String,
        /// Compiled router path the parameter was found in
        route: String,
        /// Proto source file of the service
        file: PathBuf,
        /// Input message name
        message: String,
    },
    /// Two URI-bound fields sanitize to the same route parameter.
    DuplicateUriField {
        /// Service owning the method
        service: String,
        /// Method name
        method: String,
        /// Route parameter both fields map to
        param: String,
        /// Field that claimed the parameter first
        first: String,
        /// Field rejected as the second claimant
        field: String,
        /// Compiled router path
        route: String,
        /// Proto source file of the service
        file: PathBuf,
        /// Input message name
        message: String,
    },
    /// A no-body method has a field bound to none of header, uri or query.
    UnboundField {
        /// Service owning the method
        service: String,
        /// Method name
        method: String,
        /// Offending input field
        field: String,
        /// Proto source file of the service
        file: PathBuf,
        /// Input message name
        message: String,
    },
}

impl BindingError {
    /// Short machine-readable kind, shared with lint issue kinds.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            BindingError::EmptyTemplate => "empty_template",
            BindingError::BindingMismatch { .. } => "binding_mismatch",
            BindingError::DuplicateUriField { .. } => "duplicate_uri_field",
            BindingError::UnboundField { .. } => "unbound_field",
        }
    }
}

impl fmt::Display for BindingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindingError::EmptyTemplate => write!(f, "path template cannot be empty"),
            BindingError::BindingMismatch {
                service,
                method,
                field,
                route,
                file,
                message,
            } => write!(
                f,
                "method `{}.{}` parameter `{}` is not bound to URI, but it is used in route `{}`. \
                File: `{}`, Field: `{}`",
                service,
                method,
                field,
                route,
                file.display(),
                message
            ),
            BindingError::DuplicateUriField {
                service,
                method,
                param,
                first,
                field,
                route,
                file,
                message,
            } => write!(
                f,
                "method `{}.{}` parameters `{}` and `{}` both bind route parameter `{}` in route `{}`. \
                File: `{}`, Field: `{}`",
                service,
                method,
                first,
                field,
                param,
                route,
                file.display(),
                message
            ),
            BindingError::UnboundField {
                service,
                method,
                field,
                file,
                message,
            } => write!(
                f,
                "method `{}.{}` parameter `{}` is not bound to either query or uri. \
                File: `{}`, Field: `{}`",
                service,
                method,
                field,
                file.display(),
                message
            ),
        }
    }
}

impl std::error::Error for BindingError {}

/// Descriptor-level problem detected before any template is compiled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DescriptorError {
    /// `custom.kind` is not a valid HTTP method token
    InvalidHttpMethod {
        /// The rejected method string
        kind: String,
    },
    /// An HTTP rule sets more than one verb
    AmbiguousHttpRule {
        /// Verbs set on the rule, in declaration order
        verbs: Vec<String>,
    },
}

impl fmt::Display for DescriptorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DescriptorError::InvalidHttpMethod { kind } => {
                write!(f, "invalid HTTP method '{}' in custom http rule", kind)
            }
            DescriptorError::AmbiguousHttpRule { verbs } => write!(
                f,
                "http rule must set exactly one verb, found: {}",
                verbs.join(", ")
            ),
        }
    }
}

impl DescriptorError {
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            DescriptorError::InvalidHttpMethod { .. } => "invalid_http_method",
            DescriptorError::AmbiguousHttpRule { .. } => "ambiguous_http_rule",
        }
    }
}

impl std::error::Error for DescriptorError {}

/// Any failure while planning a method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    /// Template or consistency validation failed
    Binding(BindingError),
    /// The descriptor itself is malformed
    Descriptor(DescriptorError),
}

impl PlanError {
    /// Short machine-readable error kind
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            PlanError::Binding(e) => e.kind(),
            PlanError::Descriptor(e) => e.kind(),
        }
    }
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanError::Binding(e) => e.fmt(f),
            PlanError::Descriptor(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for PlanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlanError::Binding(e) => Some(e),
            PlanError::Descriptor(e) => Some(e),
        }
    }
}

impl From<BindingError> for PlanError {
    fn from(e: BindingError) -> Self {
        PlanError::Binding(e)
    }
}

impl From<DescriptorError> for PlanError {
    fn from(e: DescriptorError) -> Self {
        PlanError::Descriptor(e)
    }
}
