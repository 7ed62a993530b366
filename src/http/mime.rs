//! MIME type detection module
//!
//! Maps file extensions to Content-Type strings. The table is loaded once
//! (from the builtin JSON table or an external JSON file) and never mutated,
//! so it can be shared across requests without synchronization.

use crate::logger;
use std::collections::HashMap;
use std::io;

/// Builtin extension-to-content-type table, embedded at compile time
const BUILTIN_TYPES: &str = include_str!("mime_types.json");

/// Returned for extensions with no table entry
const DEFAULT_TYPE: &str = "text/plain";

/// Immutable extension-to-content-type mapping
#[derive(Debug, Clone)]
pub struct MimeTable {
    types: HashMap<String, String>,
}

impl MimeTable {
    /// Load the table from a JSON object file mapping extension to
    /// content-type. Leading dots in keys are stripped.
    pub fn load(path: &str) -> io::Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Table built from the JSON embedded in the crate
    pub fn builtin() -> Self {
        Self::from_json(BUILTIN_TYPES).unwrap_or_else(|e| {
            logger::log_error(&format!("builtin MIME table failed to parse: {e}"));
            Self {
                types: HashMap::new(),
            }
        })
    }

    fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let parsed: HashMap<String, String> = serde_json::from_str(raw)?;
        let types = parsed
            .into_iter()
            .map(|(k, v)| (k.trim_start_matches('.').to_string(), v))
            .collect();
        Ok(Self { types })
    }

    /// Look up the content-type for a file path.
    ///
    /// The extension is the substring after the last `.` (the whole name
    /// when there is no dot), matched case-sensitively. A miss logs a
    /// diagnostic and returns `"text/plain"`; this never fails.
    pub fn mime_for(&self, file_path: &str) -> &str {
        let extension = file_path.rsplit('.').next().unwrap_or(file_path);
        match self.types.get(extension) {
            Some(content_type) => content_type,
            None => {
                logger::log_mime_miss(extension);
                DEFAULT_TYPE
            }
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl Default for MimeTable {
    fn default() -> Self {
        Self::builtin()
    }
}
