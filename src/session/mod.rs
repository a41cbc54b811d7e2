//! View sessions
//!
//! The glue between an external editing surface and the store. Opening a
//! view registers a token-to-identity entry in a side table; autosave and
//! close look the identity up by token instead of scanning live references.
//! The store itself never learns about views.

use std::collections::HashMap;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::codec::PackHandle;
use crate::error::{PackError, Result};
use crate::material::Stack;
use crate::store::PackStore;

/// Opaque token naming one open view session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ViewId(Uuid);

/// Registry of open view sessions.
#[derive(Debug, Default)]
pub struct Sessions {
    views: Mutex<HashMap<ViewId, Uuid>>,
}

impl Sessions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a container for viewing. Resolves capacity from the tier tag on
    /// the handle, opens the container, and registers the session.
    pub fn open_view(
        &self,
        store: &PackStore,
        handle: &PackHandle,
    ) -> Result<(ViewId, Vec<Option<Stack>>)> {
        let tier = handle.tier().ok_or_else(|| {
            PackError::UnknownTier(format!("tier tag {} on handle", handle.tier_level()))
        })?;

        let slots = store.open(handle.identity(), tier.slots());
        let view = ViewId(Uuid::new_v4());
        self.views
            .lock()
            .expect("session lock poisoned")
            .insert(view, handle.identity());
        debug!(identity = %handle.identity(), tier = %tier, "opened view");
        Ok((view, slots))
    }

    /// Mid-session autosave (per-edit persistence). Unknown views are a
    /// no-op. Slot arrays containing pack handles are rejected outright:
    /// a pack never goes inside another pack.
    pub fn save_view(&self, store: &PackStore, view: ViewId, slots: &[Option<Stack>]) -> Result<()> {
        let identity = match self.identity_of(view) {
            Some(identity) => identity,
            None => return Ok(()),
        };
        reject_nested_packs(slots)?;
        store.save(identity, slots);
        Ok(())
    }

    /// Close a view: persist the final slot state and drop the session
    /// entry. The session is dropped even when the final state is rejected,
    /// mirroring a cancelled edit. Unknown views are a no-op.
    pub fn close_view(
        &self,
        store: &PackStore,
        view: ViewId,
        slots: &[Option<Stack>],
    ) -> Result<()> {
        let identity = match self
            .views
            .lock()
            .expect("session lock poisoned")
            .remove(&view)
        {
            Some(identity) => identity,
            None => return Ok(()),
        };
        reject_nested_packs(slots)?;
        store.save(identity, slots);
        debug!(%identity, "closed view");
        Ok(())
    }

    /// The identity a view session was opened for, if it is still open.
    pub fn identity_of(&self, view: ViewId) -> Option<Uuid> {
        self.views
            .lock()
            .expect("session lock poisoned")
            .get(&view)
            .copied()
    }

    /// Number of currently open views.
    pub fn open_count(&self) -> usize {
        self.views.lock().expect("session lock poisoned").len()
    }
}

fn reject_nested_packs(slots: &[Option<Stack>]) -> Result<()> {
    if slots.iter().flatten().any(|s| s.is_pack()) {
        return Err(PackError::NestedPack);
    }
    Ok(())
}
