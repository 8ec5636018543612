//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use passfold_core::VERSION;

/// Passfold - a local vault of lockable credential folders
#[derive(Parser)]
#[command(name = "passfold")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the store file
    #[arg(
        short,
        long,
        global = true,
        env = "PASSFOLD_STORE",
        default_value = "passfold.json"
    )]
    pub store: PathBuf,

    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Work with a single folder
    Folder {
        #[command(subcommand)]
        action: FolderAction,
    },

    /// List all folders with lock state and entry count
    List {
        /// Also print each folder's entries
        #[arg(short, long)]
        verbose: bool,
    },

    /// Lock every unlocked folder under one key
    LockAll {
        /// Key (prompted if omitted)
        #[arg(long)]
        key: Option<String>,
    },

    /// Unlock every locked folder with one key
    UnlockAll {
        /// Key (prompted if omitted)
        #[arg(long)]
        key: Option<String>,
    },

    /// Generate a random password
    Gen {
        /// Password length
        #[arg(default_value_t = 15)]
        length: usize,
    },

    /// Print the characters entries and keys may contain
    Allowed,

    /// Score a key's composition strength
    Check {
        /// The key to score
        key: String,
    },
}

#[derive(Subcommand)]
pub enum FolderAction {
    /// Create an empty folder
    Create {
        /// Folder name
        name: String,
    },

    /// Delete a folder (must be unlocked)
    Drop {
        /// Folder name
        name: String,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Add an entry (folder must be unlocked)
    Add {
        /// Folder name
        folder: String,

        /// Entry name
        name: String,

        /// Login / account identifier
        login: String,

        /// Password or secret
        password: String,

        /// Optional note (remaining words are joined with spaces)
        note: Vec<String>,
    },

    /// Remove the entry at the given index (folder must be unlocked)
    Remove {
        /// Folder name
        folder: String,

        /// Entry index, starting at 0
        index: usize,
    },

    /// Show a folder's entries
    Show {
        /// Folder name
        folder: String,
    },

    /// Encrypt a folder's entries under a key
    Lock {
        /// Folder name
        folder: String,

        /// Key (prompted hidden if omitted)
        #[arg(long)]
        key: Option<String>,
    },

    /// Decrypt a folder's entries; succeeds only with the correct key
    Unlock {
        /// Folder name
        folder: String,

        /// Key (prompted hidden if omitted)
        #[arg(long)]
        key: Option<String>,
    },

    /// Print a folder's log history (folder must be unlocked)
    Info {
        /// Folder name
        folder: String,
    },

    /// Write a folder's entries to a text file
    Export {
        /// Folder name
        folder: String,

        /// Output file (defaults to <folder>.txt)
        #[arg(long)]
        output: Option<PathBuf>,
    },
}
