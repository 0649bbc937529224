//! # Configuration Module
//!
//! Generator settings loaded from an optional config file and environment
//! variables.
//!
//! ## Config file
//!
//! YAML, JSON or TOML, picked by extension:
//!
//! ```yaml
//! no_body_methods: [GET, HEAD, DELETE, OPTIONS]
//! ```
//!
//! ## Environment Variables
//!
//! ### `PROTOROUTE_NO_BODY_METHODS`
//!
//! Comma-separated HTTP methods that never carry a request body. Overrides
//! the file value. Every input field of a method using one of these verbs must
//! bind to a header, the path or the query string.
//!
//! ```bash
//! export PROTOROUTE_NO_BODY_METHODS=GET,DELETE
//! ```

use anyhow::Context;
use http::Method;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::env;
use std::path::Path;

/// Environment variable overriding [`GeneratorConfig::no_body_methods`].
pub const NO_BODY_METHODS_ENV: &str = "PROTOROUTE_NO_BODY_METHODS";

fn default_no_body_methods() -> Vec<String> {
    ["GET", "HEAD", "DELETE", "OPTIONS"]
        .iter()
        .map(|m| (*m).to_string())
        .collect()
}

/// Settings shared by planning and linting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// HTTP methods whose requests have no body
    #[serde(default = "default_no_body_methods")]
    pub no_body_methods: Vec<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            no_body_methods: default_no_body_methods(),
        }
    }
}

impl GeneratorConfig {
    /// Load a config file, choosing the parser from its extension.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let parsed = match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content).map_err(anyhow::Error::from),
            Some("toml") => toml::from_str(&content).map_err(anyhow::Error::from),
            _ => serde_json::from_str(&content).map_err(anyhow::Error::from),
        };
        parsed.with_context(|| format!("failed to parse config {}", path.display()))
    }

    /// Apply environment overrides on top of `self`.
    #[must_use]
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(val) = env::var(NO_BODY_METHODS_ENV) {
            self.no_body_methods = split_methods(&val);
        }
        self
    }

    /// Defaults, then the optional file, then environment overrides.
    ///
    /// # Errors
    ///
    /// Returns an error when a config file is given but cannot be loaded.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let base = match path {
            Some(p) => Self::from_file(p)?,
            None => Self::default(),
        };
        Ok(base.with_env_overrides())
    }

    /// Parse the configured method names into a lookup set.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first entry that is not a valid HTTP method.
    pub fn no_body_methods(&self) -> anyhow::Result<NoBodyMethods> {
        NoBodyMethods::parse(&self.no_body_methods)
    }
}

fn split_methods(val: &str) -> Vec<String> {
    val.split(',')
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
        .collect()
}

/// HTTP methods for which a request carries no body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoBodyMethods {
    methods: HashSet<Method>,
}

impl NoBodyMethods {
    /// # Errors
    ///
    /// Returns an error when an entry is not a valid method token.
    pub fn parse<S: AsRef<str>>(names: &[S]) -> anyhow::Result<Self> {
        let mut methods = HashSet::with_capacity(names.len());
        for name in names {
            let upper = name.as_ref().trim().to_ascii_uppercase();
            let method = Method::from_bytes(upper.as_bytes())
                .with_context(|| format!("invalid HTTP method '{}' in no_body_methods", name.as_ref()))?;
            methods.insert(method);
        }
        Ok(NoBodyMethods { methods })
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, method: &Method) -> bool {
        self.methods.contains(method)
    }
}

impl Default for NoBodyMethods {
    fn default() -> Self {
        NoBodyMethods {
            methods: [Method::GET, Method::HEAD, Method::DELETE, Method::OPTIONS]
                .into_iter()
                .collect(),
        }
    }
}

impl FromIterator<Method> for NoBodyMethods {
    fn from_iter<I: IntoIterator<Item = Method>>(iter: I) -> Self {
        NoBodyMethods {
            methods: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_no_body_methods() {
        let methods = GeneratorConfig::default().no_body_methods().unwrap();
        assert!(methods.contains(&Method::GET));
        assert!(methods.contains(&Method::DELETE));
        assert!(!methods.contains(&Method::POST));
        assert_eq!(methods, NoBodyMethods::default());
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        let methods = NoBodyMethods::parse(&["get", " Delete "]).unwrap();
        assert!(methods.contains(&Method::GET));
        assert!(methods.contains(&Method::DELETE));
    }

    #[test]
    fn test_parse_rejects_invalid_method() {
        let err = NoBodyMethods::parse(&["GET", "NOT A METHOD"]).unwrap_err();
        assert!(err.to_string().contains("NOT A METHOD"));
    }

    #[test]
    fn test_split_methods() {
        assert_eq!(split_methods("GET, DELETE,,"), vec!["GET", "DELETE"]);
    }

    #[test]
    fn test_from_yaml_file() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "no_body_methods: [GET]").unwrap();
        let config = GeneratorConfig::from_file(file.path()).unwrap();
        assert_eq!(config.no_body_methods, vec!["GET"]);
    }

    #[test]
    fn test_from_toml_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "no_body_methods = [\"GET\", \"HEAD\"]").unwrap();
        let config = GeneratorConfig::from_file(file.path()).unwrap();
        assert_eq!(config.no_body_methods, vec!["GET", "HEAD"]);
    }

    #[test]
    fn test_parse_error_names_the_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "no_body_methods = GET").unwrap();
        let err = GeneratorConfig::from_file(file.path()).unwrap_err();
        let text = format!("{:#}", err);
        assert!(text.contains("failed to parse config"), "got: {}", text);
        assert!(text.contains(&file.path().display().to_string()));
    }

    #[test]
    fn test_missing_key_uses_default() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        writeln!(file, "{{}}").unwrap();
        let config = GeneratorConfig::from_file(file.path()).unwrap();
        assert_eq!(config, GeneratorConfig::default());
    }
}
