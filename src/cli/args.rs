//! CLI argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "packstore")]
#[command(author, version, about = "Tiered, persistent item-container store", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: SubCommand,

    /// Data directory holding the pack document
    #[arg(long, env = "PACKSTORE_DATA", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Output format as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum SubCommand {
    /// Mint a new pack handle at the given tier
    Give {
        /// Tier name (dirt, leather, copper, iron, gold, diamond, netherite, enderpack)
        tier: String,
    },

    /// Print the stored contents of a pack
    Open {
        /// The pack identity (UUID)
        identity: String,
    },

    /// Delete a pack's stored record
    Clear {
        /// The pack identity (UUID)
        identity: String,
    },

    /// Mint an enderpack handle aliasing an existing identity
    Clone {
        /// The pack identity (UUID)
        identity: String,
    },

    /// List all stored pack identities
    List,

    /// Print the tier and transformation guide
    Guide,
}
