//! Tier catalog
//!
//! Tiers form an ordered chain from dirt (level 0) to netherite (level 6),
//! plus the enderpack side branch, which shares storage across all handles
//! carrying the same identity. All tier data lives in one static table;
//! lookups are driven by level, never by dispatch.

mod catalog;

pub use catalog::{Tier, TierInfo};
