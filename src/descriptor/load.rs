use super::types::DescriptorSet;
use anyhow::Context;
use std::path::Path;
use tracing::info;

/// Serialization format of a descriptor document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptorFormat {
    Yaml,
    Json,
}

impl DescriptorFormat {
    /// Pick the format from a file extension: `.yaml`/`.yml` is YAML, anything
    /// else is JSON.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => DescriptorFormat::Yaml,
            _ => DescriptorFormat::Json,
        }
    }
}

/// Parse a descriptor document held in memory.
///
/// # Errors
///
/// Returns an error when the content is not a valid descriptor in `format`.
pub fn parse_descriptor(content: &str, format: DescriptorFormat) -> anyhow::Result<DescriptorSet> {
    let set = match format {
        DescriptorFormat::Yaml => serde_yaml::from_str(content)?,
        DescriptorFormat::Json => serde_json::from_str(content)?,
    };
    Ok(set)
}

/// Load a descriptor document from disk.
///
/// # Errors
///
/// Returns an error when the file cannot be read or parsed.
pub fn load_descriptor(path: &Path) -> anyhow::Result<DescriptorSet> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read descriptor {}", path.display()))?;
    let set = parse_descriptor(&content, DescriptorFormat::from_path(path))
        .with_context(|| format!("failed to parse descriptor {}", path.display()))?;

    let methods: usize = set
        .files
        .iter()
        .flat_map(|f| &f.services)
        .map(|s| s.methods.len())
        .sum();
    info!(
        descriptor = %path.display(),
        files = set.files.len(),
        methods,
        "Descriptor loaded"
    );
    Ok(set)
}
