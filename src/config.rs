//! Runtime configuration
//!
//! One `Config` is built at startup and passed by reference to whatever
//! needs it. There is no ambient global state anywhere in the crate.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::codec::PackHandle;
use crate::tier::Tier;

/// Startup configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the durable pack document.
    pub data_dir: PathBuf,
    /// Whether new users are handed a starter pack on first contact.
    pub give_starter_pack: bool,
}

impl Config {
    /// Configuration rooted at the given data directory.
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            give_starter_pack: false,
        }
    }

    /// The default data directory: `$PACKSTORE_DATA` if set, otherwise
    /// `./packstore` under the working directory.
    pub fn default_data_dir() -> PathBuf {
        std::env::var_os("PACKSTORE_DATA")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("packstore"))
    }

    /// Mint the starter pack for a first-time user, if enabled.
    pub fn starter_pack(&self) -> Option<PackHandle> {
        if self.give_starter_pack {
            Some(PackHandle::new(Tier::Leather))
        } else {
            None
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Self::default_data_dir())
    }
}
