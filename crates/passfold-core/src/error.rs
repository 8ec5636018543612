//! Error types for Passfold core operations.
//!
//! This module defines the error hierarchy for all core operations.
//! Errors are descriptive at the core level; the CLI layer will map these
//! to user-friendly messages.

use thiserror::Error;

/// Result type alias for Passfold operations.
pub type Result<T> = std::result::Result<T, PassfoldError>;

/// Core error type for Passfold operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PassfoldError {
    /// Character outside the 91-symbol alphabet domain
    #[error("Unknown symbol: {0:?}")]
    UnknownSymbol(char),

    /// Cipher or verifier invoked with an empty key
    #[error("Key cannot be empty")]
    EmptyKey,

    /// Unlock attempted with a key whose digest does not match the stored verifier
    #[error("Wrong key")]
    WrongKey,

    /// Lock attempted on a folder that is already locked
    #[error("Folder is already locked")]
    AlreadyLocked,

    /// Unlock attempted on a folder that is already unlocked
    #[error("Folder is already unlocked")]
    AlreadyUnlocked,

    /// Entry mutation attempted on a locked folder
    #[error("Folder is locked")]
    FolderLocked,

    /// Invalid user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
