//! Packstore - a tiered, persistent item-container store
//!
//! Packstore manages named, variably-sized containers identified by random
//! 128-bit identities. Handles to a container are freely copyable; cloned
//! enderpack handles alias the same storage. Containers grow (or shrink)
//! when a handle is re-tiered, and a pattern resolver decides when a grid
//! of inputs crafts, clones, or re-tiers a pack.
//!
//! # Example
//!
//! ```no_run
//! use packstore::{PackHandle, PackStore, Tier};
//!
//! let store = PackStore::open_at(std::path::Path::new("packstore")).unwrap();
//! let handle = PackHandle::new(Tier::Leather);
//! let slots = store.open(handle.identity(), Tier::Leather.slots());
//! assert_eq!(slots.len(), 9);
//! ```

pub mod cli;
pub mod codec;
pub mod config;
pub mod error;
pub mod material;
pub mod output;
pub mod resolver;
pub mod session;
pub mod store;
pub mod tier;

pub use codec::PackHandle;
pub use config::Config;
pub use error::{PackError, Result};
pub use material::{Item, Material, Stack};
pub use output::{format_output, OutputFormat, Report};
pub use resolver::{resolve_forge, resolve_grid, Resolution};
pub use session::{Sessions, ViewId};
pub use store::PackStore;
pub use tier::Tier;
