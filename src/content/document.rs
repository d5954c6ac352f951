use crate::content::error::ContentError;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// File the validators read when no other path is given.
pub const DEFAULT_DOCUMENT: &str = "prompts.json";

/// Reads a content document without imposing a schema; the validators report
/// structural problems themselves.
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<Value, ContentError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|err| ContentError::from_io(path.into(), err))?;
    parse_document(&raw, path)
}

pub fn parse_document(raw: &str, origin: &Path) -> Result<Value, ContentError> {
    serde_json::from_str(raw).map_err(|source| ContentError::Json {
        path: PathBuf::from(origin),
        source,
    })
}
