//! The durable document backing the pack store
//!
//! One JSON object per data directory, `packs.json`. Top-level keys are
//! identity strings; under each key a `contents` array holds the slot
//! values by position, with empty slots as null. Keys that do not parse as
//! identities are ignored by enumeration but written back verbatim.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::warn;
use uuid::Uuid;

use crate::error::Result;
use crate::material::Stack;

pub const DOCUMENT_NAME: &str = "packs.json";

/// Sub-key holding the slot array under each identity key.
const CONTENTS_KEY: &str = "contents";

/// In-memory copy of the durable document.
#[derive(Debug, Default)]
pub struct Document {
    entries: Map<String, Value>,
}

impl Document {
    /// Read a document from disk. A missing file yields an empty document;
    /// an unreadable or unparseable one does too, with a logged warning,
    /// since the cache stays authoritative for the process lifetime.
    pub fn read(path: &Path) -> Document {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Document::default();
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "could not read pack document");
                return Document::default();
            }
        };

        if raw.trim().is_empty() {
            return Document::default();
        }

        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Object(entries)) => Document { entries },
            Ok(_) => {
                warn!(path = %path.display(), "pack document is not a JSON object, starting empty");
                Document::default()
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "pack document is malformed, starting empty");
                Document::default()
            }
        }
    }

    /// Write the whole document to disk atomically (temp file + rename).
    pub fn write(&self, path: &Path) -> Result<()> {
        let raw = serde_json::to_string_pretty(&Value::Object(self.entries.clone()))?;
        let tmp = tmp_path(path);
        fs::write(&tmp, raw)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }

    /// Set the slot array for an identity.
    pub fn set_contents(&mut self, identity: Uuid, slots: &[Option<Stack>]) {
        let contents = serde_json::to_value(slots).unwrap_or(Value::Null);
        let mut entry = Map::new();
        entry.insert(CONTENTS_KEY.to_string(), contents);
        self.entries.insert(identity.to_string(), Value::Object(entry));
    }

    /// Get the stored slot array for an identity, if present. A present but
    /// malformed entry is reported as absent.
    pub fn contents(&self, identity: Uuid) -> Option<Vec<Option<Stack>>> {
        let entry = self.entries.get(&identity.to_string())?;
        let contents = entry.get(CONTENTS_KEY)?;
        match serde_json::from_value(contents.clone()) {
            Ok(slots) => Some(slots),
            Err(e) => {
                warn!(%identity, error = %e, "stored contents are malformed, ignoring");
                None
            }
        }
    }

    /// True iff a record exists for the identity.
    pub fn contains(&self, identity: Uuid) -> bool {
        self.entries.contains_key(&identity.to_string())
    }

    /// Remove an identity's record. Returns whether anything was removed.
    pub fn remove(&mut self, identity: Uuid) -> bool {
        self.entries.remove(&identity.to_string()).is_some()
    }

    /// Every key that parses as an identity, in document key order.
    /// Malformed keys are skipped silently.
    pub fn identities(&self) -> Vec<Uuid> {
        self.entries
            .keys()
            .filter_map(|key| Uuid::parse_str(key).ok())
            .collect()
    }

    /// Number of top-level records, valid or not.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    PathBuf::from(tmp)
}
