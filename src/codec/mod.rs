//! Identity codec
//!
//! A `PackHandle` is the copyable, transportable reference to one logical
//! container: a random 128-bit identity plus the tier level tagged onto the
//! handle at mint time. Handles are capability tokens, not storage; any
//! number of handles may carry the same identity, which is exactly how
//! enderpack aliasing and cloning work. The tier carried on a handle is a
//! label only; the store reads actual capacity from the tier at open time.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::tier::Tier;

/// A transportable reference to one logical container.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PackHandle {
    identity: Uuid,
    #[serde(rename = "tier")]
    tier_level: u8,
}

impl PackHandle {
    /// Mint a handle with a fresh random identity.
    pub fn new(tier: Tier) -> Self {
        Self::with_identity(tier, Uuid::new_v4())
    }

    /// Mint a handle carrying a specific identity (cloning and upgrading).
    pub fn with_identity(tier: Tier, identity: Uuid) -> Self {
        Self {
            identity,
            tier_level: tier.level(),
        }
    }

    /// The container identity this handle refers to.
    pub fn identity(&self) -> Uuid {
        self.identity
    }

    /// The raw tier level tag carried on the handle.
    pub fn tier_level(&self) -> u8 {
        self.tier_level
    }

    /// The tier recovered from the level tag. None if the tag does not
    /// name a known tier.
    pub fn tier(&self) -> Option<Tier> {
        Tier::from_level(self.tier_level)
    }

    /// Derive a handle with the same identity at a new tier.
    pub fn upgraded(&self, new_tier: Tier) -> PackHandle {
        PackHandle::with_identity(new_tier, self.identity)
    }

    /// Derive a second handle indistinguishable from this one. Both refer
    /// to the same container.
    pub fn clone_shared(&self) -> PackHandle {
        self.clone()
    }

    /// First eight hex characters of the identity, for display.
    pub fn short_id(&self) -> String {
        self.identity.to_string()[..8].to_string()
    }

    /// Display lines for this handle, in the style shown to users.
    pub fn describe(&self) -> Vec<String> {
        let mut lines = Vec::new();
        match self.tier() {
            Some(tier) => {
                lines.push(tier.display_name().to_string());
                lines.push(format!("{} rows \u{2022} {} slots", tier.rows(), tier.slots()));
                if tier.is_shared_storage() {
                    lines.push("Shared Storage".to_string());
                    lines.push("All enderpacks with the same ID share the same contents".to_string());
                }
            }
            None => lines.push(format!("Unknown pack (tier tag {})", self.tier_level)),
        }
        lines.push(format!("ID: {}...", self.short_id()));
        lines
    }
}
