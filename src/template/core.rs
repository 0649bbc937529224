use super::params::ParamTable;
use super::segment::{tokenize, Segment};
use crate::error::BindingError;
use serde::Serialize;
use std::fmt;
use tracing::{debug, warn};

/// A path template compiled into router syntax.
///
/// Holds the rendered path (`:name` for single-segment captures, `*name` for
/// multi-segment ones), the parameters registered while compiling, and the
/// typed segments the template was split into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouterPath {
    path: String,
    params: ParamTable,
    #[serde(skip)]
    segments: Vec<Segment>,
}

impl RouterPath {
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.path
    }

    /// Parameters registered at compile time.
    ///
    /// Binding validation does not use this table; it re-derives one from the
    /// path string with [`ParamTable::from_router_path`] so downstream
    /// consumers only ever need the string.
    #[must_use]
    pub fn params(&self) -> &ParamTable {
        &self.params
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Fragments that matched none of the supported forms and were left verbatim.
    pub fn unrecognized(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Unrecognized { raw } => Some(raw.as_str()),
            _ => None,
        })
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.path
    }
}

impl fmt::Display for RouterPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

impl AsRef<str> for RouterPath {
    fn as_ref(&self) -> &str {
        &self.path
    }
}

/// Compile a `google.api.http` path template into router syntax.
///
/// Supported forms:
///
/// | Template               | Router path       | Param            |
/// |------------------------|-------------------|------------------|
/// | `{name=literal/*}`     | `/literal/:name`  | `name` (single)  |
/// | `{name=literal/**}`    | `/literal/*name`  | `name` (wildcard)|
/// | `{name=literal}`       | `/literal`        | none             |
/// | `{name=**}`            | `/*name`          | `name` (wildcard)|
/// | `{name=*}` / `{name}`  | `/:name`          | `name` (single)  |
///
/// Anything else inside braces is copied through unchanged and registers no
/// parameter. This is a known gap kept for compatibility with templates using
/// grammar this compiler does not understand; the linter reports such
/// fragments.
///
/// # Errors
///
/// Returns [`BindingError::EmptyTemplate`] when `template` is empty.
///
/// # Example
///
/// ```
/// use protoroute::template::compile;
///
/// let route = compile("/v1/{name=shelves/*}/books/{book.id}").unwrap();
/// assert_eq!(route.as_str(), "/v1/shelves/:name/books/:book_id");
/// assert_eq!(route.params().wildcard("book_id"), Some(false));
/// ```
pub fn compile(template: &str) -> Result<RouterPath, BindingError> {
    if template.is_empty() {
        return Err(BindingError::EmptyTemplate);
    }

    let segments = tokenize(template);
    let mut rendered = String::with_capacity(template.len() + 8);
    let mut params = ParamTable::new();

    for segment in &segments {
        segment.render_into(&mut rendered);
        if let Some((name, wildcard)) = segment.param() {
            params.insert(name, wildcard);
        }
        if let Segment::Unrecognized { raw } = segment {
            warn!(
                template = %template,
                fragment = %raw,
                "Path template fragment not recognized; copied verbatim"
            );
        }
    }

    let path = normalize_path(&rendered);
    debug!(
        template = %template,
        router_path = %path,
        params = ?params,
        "Compiled path template"
    );

    Ok(RouterPath {
        path,
        params,
        segments,
    })
}

/// Collapse separator runs, force a single leading `/` and drop a trailing
/// `/` unless the result is the root.
#[must_use]
pub fn normalize_path(path: &str) -> String {
    let mut out = String::with_capacity(path.len() + 1);
    out.push('/');
    for c in path.chars() {
        if c == '/' && out.ends_with('/') {
            continue;
        }
        out.push(c);
    }
    if out.len() > 1 && out.ends_with('/') {
        out.pop();
    }
    out
}
