//! Core CLI definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "d2sockets")]
#[command(about = "Destiny 2 item socket inspector", long_about = None)]
pub struct Cli {
    /// Path to a jsonWorldContent manifest (uses configured default if not provided)
    #[arg(short, long, global = true, env = "D2_MANIFEST")]
    pub manifest: Option<PathBuf>,

    /// Log dropped sockets and plugs (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build sockets for items in a profile response
    #[command(visible_alias = "i")]
    Inspect {
        /// Profile JSON with "items" and "itemComponents"
        #[arg(short, long)]
        profile: PathBuf,

        /// Only inspect the item with this instance ID
        #[arg(long)]
        instance: Option<String>,

        /// Output JSON instead of a tree
        #[arg(long)]
        json: bool,
    },

    /// Build sockets from an item definition alone (vendor/collection view)
    #[command(visible_alias = "d")]
    Definition {
        /// Inventory item hash
        #[arg(long)]
        hash: u32,

        /// Output JSON instead of a tree
        #[arg(long)]
        json: bool,
    },

    /// Configure default settings
    #[command(visible_alias = "c")]
    Configure {
        /// Set default manifest path
        #[arg(long = "set-manifest")]
        set_manifest: Option<PathBuf>,

        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}
