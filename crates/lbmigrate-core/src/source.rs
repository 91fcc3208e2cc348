//! Loading the JSON export from disk.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde_json::Value;
use tracing::info;

use crate::error::{Error, Result};

/// Read and parse a JSON export.
///
/// The whole file is read into memory before parsing. A missing file maps to
/// [`Error::FileNotFound`], malformed content to [`Error::Parse`].
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<Value> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::FileNotFound(path.to_path_buf()),
        _ => Error::Io(e),
    })?;
    info!("Read {} bytes from {}", content.len(), path.display());
    parse_document(&content)
}

/// Parse JSON content that is already in memory
pub fn parse_document(content: &str) -> Result<Value> {
    Ok(serde_json::from_str(content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_load_document() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("export.json");
        let mut file = fs::File::create(&path).unwrap();
        write!(file, r#"{{"__collections__": {{}}}}"#).unwrap();

        let doc = load_document(&path).unwrap();
        assert!(doc.get("__collections__").is_some());
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.json");

        match load_document(&path) {
            Err(Error::FileNotFound(p)) => assert_eq!(p, path),
            other => panic!("expected FileNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{\"__collections__\": ").unwrap();

        assert!(matches!(load_document(&path), Err(Error::Parse(_))));
    }

    #[test]
    fn test_parse_document_scalar() {
        // Any JSON value parses; shape checks belong to the transform
        let doc = parse_document("42").unwrap();
        assert_eq!(doc, Value::from(42));
    }
}
