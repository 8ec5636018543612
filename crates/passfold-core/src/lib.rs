//! # Passfold Core
//!
//! Core library for Passfold - a local secrets vault of named folders
//! that can be locked (encrypted in place) and unlocked under a
//! user-supplied key.
//!
//! This crate provides the cryptographic transform and the lock/unlock
//! state machine, independent of the CLI interface. It performs no I/O
//! and never prompts; all errors are returned as values.
//!
//! ## Architecture
//!
//! - **alphabet**: the fixed 91-symbol domain and its index bijection
//! - **cipher**: the substitution / iterated / split-key cipher stack
//! - **verifier**: one-way key digests gating unlock attempts
//! - **folder**: folders, entries, and the lock/unlock state machine
//! - **strength**: key composition scoring
//!
//! The cipher is a pedagogical obfuscation layer preserved for
//! compatibility with previously stored data; it is not a security
//! primitive and makes no claim of resisting ciphertext analysis.

pub mod alphabet;
pub mod cipher;
pub mod error;
pub mod folder;
pub mod strength;
pub mod verifier;

pub use cipher::{IteratedShiftCipher, SplitKeyCipher};
pub use error::{PassfoldError, Result};
pub use folder::{Entry, Folder, LockState, LogRecord};
pub use strength::score_key;
pub use verifier::{Blake3Verifier, KeyVerifier, VerifierValue};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
