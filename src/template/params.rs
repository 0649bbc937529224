use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;

/// `:name` tokens in a compiled router path.
static NAMED_PARAM_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r":([a-zA-Z_][a-zA-Z0-9_]*)").expect("named param regex should be valid")
});

/// `*name` tokens in a compiled router path.
static WILDCARD_PARAM_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\*([a-zA-Z_][a-zA-Z0-9_]*)").expect("wildcard param regex should be valid")
});

/// Route parameters keyed by name, mapped to whether they capture multiple
/// segments.
///
/// Keys are unique and iterate in name order so plans and diagnostics are
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ParamTable {
    params: BTreeMap<String, bool>,
}

impl ParamTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a parameter. A later registration of the same name replaces
    /// the earlier wildcard flag.
    pub fn insert(&mut self, name: impl Into<String>, wildcard: bool) {
        self.params.insert(name.into(), wildcard);
    }

    /// Wildcard flag for `name`, or `None` when the route has no such param.
    #[inline]
    #[must_use]
    pub fn wildcard(&self, name: &str) -> Option<bool> {
        self.params.get(name).copied()
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.params.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.params.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Re-derive the parameter table from a finished router path.
    ///
    /// `:name` tokens register as single-segment, then `*name` tokens register
    /// as wildcards, so a name appearing in both forms ends up a wildcard.
    /// Only identifiers starting with a letter or `_` are recognized.
    ///
    /// # Example
    ///
    /// ```
    /// use protoroute::template::ParamTable;
    ///
    /// let params = ParamTable::from_router_path("/v1/shelves/:shelf/files/*path");
    /// assert_eq!(params.wildcard("shelf"), Some(false));
    /// assert_eq!(params.wildcard("path"), Some(true));
    /// ```
    #[must_use]
    pub fn from_router_path(route: &str) -> Self {
        let mut table = ParamTable::new();
        for caps in NAMED_PARAM_REGEX.captures_iter(route) {
            table.insert(&caps[1], false);
        }
        for caps in WILDCARD_PARAM_REGEX.captures_iter(route) {
            table.insert(&caps[1], true);
        }
        table
    }
}

impl<'a> IntoIterator for &'a ParamTable {
    type Item = (&'a String, &'a bool);
    type IntoIter = std::collections::btree_map::Iter<'a, String, bool>;

    fn into_iter(self) -> Self::IntoIter {
        self.params.iter()
    }
}

/// Turn a (possibly qualified) field name into a router-safe identifier.
///
/// Every `.` and every character outside `[A-Za-z0-9_]` becomes `_`, so
/// `book.id` becomes `book_id`. The same function is applied when compiling
/// templates and when looking fields up, which keeps both sides in agreement.
#[must_use]
pub fn sanitize_param_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
