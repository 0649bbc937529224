#![allow(dead_code)]

use std::path::PathBuf;

/// Path of a file under `tests/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub mod temp_files {
    use std::io::Write;
    use tempfile::{Builder, NamedTempFile};

    /// Write `content` to a uniquely named temp file with extension `ext`.
    /// The file is removed when the returned handle drops.
    pub fn create_temp_file(content: &str, ext: &str) -> NamedTempFile {
        let mut file = Builder::new()
            .prefix("protoroute_test_")
            .suffix(&format!(".{ext}"))
            .tempfile()
            .expect("create temp file");
        file.write_all(content.as_bytes()).expect("write temp file");
        file.flush().expect("flush temp file");
        file
    }

    pub fn create_temp_yaml(content: &str) -> NamedTempFile {
        create_temp_file(content, "yaml")
    }

    pub fn create_temp_json(content: &str) -> NamedTempFile {
        create_temp_file(content, "json")
    }
}
