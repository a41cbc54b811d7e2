//! Pack store
//!
//! The single owner of authoritative container state. Containers live in an
//! in-memory cache keyed by identity for the process lifetime, are hydrated
//! lazily from the durable document, and are persisted on every mutation.
//! The whole document is rewritten on each persist; mutation frequency is
//! bounded by user interaction, so simplicity wins over throughput here.
//!
//! Persistence failures are logged and non-fatal: the cache stays the
//! source of truth until the next mutation retries the write.

mod document;

pub use document::{Document, DOCUMENT_NAME};

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::{error, info};
use uuid::Uuid;

use crate::error::{PackError, Result};
use crate::material::Stack;

/// Owns the identity-to-contents cache and the durable document.
///
/// All methods take `&self`; a single mutex guards the cache and the
/// document together, which is the whole concurrency discipline — rewrites
/// are whole-document anyway, so finer locking buys nothing.
#[derive(Debug)]
pub struct PackStore {
    path: PathBuf,
    inner: Mutex<Inner>,
}

#[derive(Debug)]
struct Inner {
    document: Document,
    cache: HashMap<Uuid, Vec<Option<Stack>>>,
}

impl PackStore {
    /// Open a store rooted at the given data directory, creating the
    /// directory if needed and reading the existing document.
    pub fn open_at(data_dir: &Path) -> Result<PackStore> {
        fs::create_dir_all(data_dir)
            .map_err(|e| PackError::DataDir(format!("{}: {}", data_dir.display(), e)))?;

        let path = data_dir.join(DOCUMENT_NAME);
        let document = Document::read(&path);
        info!(records = document.len(), path = %path.display(), "loaded pack document");

        Ok(PackStore {
            path,
            inner: Mutex::new(Inner {
                document,
                cache: HashMap::new(),
            }),
        })
    }

    /// Get or create the container for an identity at the given capacity,
    /// returning a snapshot of its slots.
    ///
    /// Cached at the same size: returned as-is, no I/O. Cached at a
    /// different size: resized positionally (slots beyond the new capacity
    /// are dropped) and persisted. Not cached: hydrated from the document,
    /// or created empty, then cached and persisted immediately so the new
    /// identity is visible to enumeration before any edit.
    pub fn open(&self, identity: Uuid, capacity: usize) -> Vec<Option<Stack>> {
        let mut inner = self.inner.lock().expect("store lock poisoned");

        if let Some(cached) = inner.cache.get(&identity) {
            if cached.len() == capacity {
                return cached.clone();
            }
            info!(
                %identity,
                old_len = cached.len(),
                new_len = capacity,
                "resizing pack contents"
            );
            let resized = resize(cached, capacity);
            inner.cache.insert(identity, resized.clone());
            inner.document.set_contents(identity, &resized);
            self.persist(&inner.document);
            return resized;
        }

        let slots = match inner.document.contents(identity) {
            Some(stored) => resize(&stored, capacity),
            None => vec![None; capacity],
        };

        inner.cache.insert(identity, slots.clone());
        inner.document.set_contents(identity, &slots);
        self.persist(&inner.document);
        slots
    }

    /// Overwrite a container's slots and persist. Idempotent.
    pub fn save(&self, identity: Uuid, slots: &[Option<Stack>]) {
        let mut inner = self.inner.lock().expect("store lock poisoned");
        inner.cache.insert(identity, slots.to_vec());
        inner.document.set_contents(identity, slots);
        self.persist(&inner.document);
    }

    /// Delete a container's record and evict it from the cache. Not an
    /// error if the identity was never stored.
    pub fn clear(&self, identity: Uuid) {
        let mut inner = self.inner.lock().expect("store lock poisoned");
        inner.document.remove(identity);
        inner.cache.remove(&identity);
        self.persist(&inner.document);
    }

    /// True iff a persisted record exists for the identity. Cache state is
    /// irrelevant: a container is known once persisted at least once.
    pub fn exists(&self, identity: Uuid) -> bool {
        let inner = self.inner.lock().expect("store lock poisoned");
        inner.document.contains(identity)
    }

    /// Every identity in the durable document, re-read fresh from disk.
    /// Malformed keys are skipped.
    pub fn identities(&self) -> Vec<Uuid> {
        Document::read(&self.path).identities()
    }

    /// Persist every cached container in one pass. Called at shutdown as a
    /// safety net; per-mutation saves already make each change durable.
    pub fn save_all(&self) {
        let mut inner = self.inner.lock().expect("store lock poisoned");
        let entries: Vec<(Uuid, Vec<Option<Stack>>)> = inner
            .cache
            .iter()
            .map(|(id, slots)| (*id, slots.clone()))
            .collect();
        for (identity, slots) in &entries {
            inner.document.set_contents(*identity, slots);
        }
        self.persist(&inner.document);
        info!(count = entries.len(), "saved all cached packs");
    }

    /// Number of containers currently cached in memory.
    pub fn cached_count(&self) -> usize {
        let inner = self.inner.lock().expect("store lock poisoned");
        inner.cache.len()
    }

    /// Path of the durable document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, document: &Document) {
        if let Err(e) = document.write(&self.path) {
            error!(path = %self.path.display(), error = %e, "could not persist pack document");
        }
    }
}

/// Copy `slots` into a fresh array of `capacity`, positionally. Extension
/// fills with empties; truncation drops everything past the new capacity.
fn resize(slots: &[Option<Stack>], capacity: usize) -> Vec<Option<Stack>> {
    let mut resized = vec![None; capacity];
    for (i, slot) in slots.iter().take(capacity).enumerate() {
        resized[i] = slot.clone();
    }
    resized
}
