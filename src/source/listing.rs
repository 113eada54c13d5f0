//! Listing Parser
//!
//! Accepts either the hosting API's envelope (`{"sha", "tree": [...],
//! "truncated"}`) or a bare array of entries.

use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::debug;

use crate::types::{FlatEntry, RepoTreeError, Result, TreeListing};

/// Parse a listing document from any reader
pub fn parse_listing<R: Read>(reader: R) -> Result<TreeListing> {
    let value: Value = serde_json::from_reader(reader)?;
    listing_from_value(value)
}

pub fn listing_from_value(value: Value) -> Result<TreeListing> {
    match value {
        Value::Array(_) => {
            let entries: Vec<FlatEntry> = serde_json::from_value(value)?;
            Ok(TreeListing::from_entries(entries))
        }
        Value::Object(ref map) if map.contains_key("tree") => Ok(serde_json::from_value(value)?),
        other => Err(RepoTreeError::invalid_data(
            "listing",
            format!(
                "expected an entry array or an object with a 'tree' field, got {}",
                json_kind(&other)
            ),
        )),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object without 'tree'",
    }
}

/// Read a listing from a file path, or stdin when the path is `-`
pub fn read_listing(path: &Path) -> Result<TreeListing> {
    if path.as_os_str() == "-" {
        debug!("Reading listing from stdin");
        return parse_listing(std::io::stdin().lock());
    }

    debug!("Reading listing from {}", path.display());
    let file = File::open(path)?;
    parse_listing(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EntryKind;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_envelope() {
        let json = r#"{
            "sha": "deadbeef",
            "url": "https://api.github.com/repos/o/r/git/trees/deadbeef",
            "tree": [
                {"path": "src", "mode": "040000", "type": "tree", "sha": "1"},
                {"path": "src/main.rs", "mode": "100644", "type": "blob", "sha": "2", "size": 7}
            ],
            "truncated": true
        }"#;
        let listing = parse_listing(json.as_bytes()).unwrap();
        assert_eq!(listing.sha.as_deref(), Some("deadbeef"));
        assert!(listing.truncated);
        assert_eq!(listing.tree.len(), 2);
        assert_eq!(listing.tree[0].kind, EntryKind::Tree);
        assert_eq!(listing.blob_count(), 1);
    }

    #[test]
    fn test_parse_bare_array() {
        let json = r#"[{"path": "README.md", "type": "blob", "size": 3}]"#;
        let listing = parse_listing(json.as_bytes()).unwrap();
        assert!(!listing.truncated);
        assert_eq!(listing.tree, vec![FlatEntry::blob("README.md", Some(3))]);
    }

    #[test]
    fn test_parse_rejects_other_shapes() {
        let err = parse_listing(r#"{"message": "Not Found"}"#.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("'tree'"));
        assert_eq!(err.http_status(), 500);

        let err = parse_listing("42".as_bytes()).unwrap_err();
        assert!(err.to_string().contains("a number"));
    }

    #[test]
    fn test_parse_invalid_json() {
        let err = parse_listing("{not json".as_bytes()).unwrap_err();
        assert!(matches!(err, RepoTreeError::Json(_)));
    }

    #[test]
    fn test_read_listing_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"[{{"path": "a/b.txt", "type": "blob"}}]"#).unwrap();
        let listing = read_listing(file.path()).unwrap();
        assert_eq!(listing.tree[0].path, "a/b.txt");
    }
}
