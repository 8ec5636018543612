//! Folders of credential entries and the lock/unlock state machine.
//!
//! A [`Folder`] is an owned aggregate: entries, lock state, and an
//! append-only log, mutated only through the operations here; the host
//! layer never reaches into the fields. Locking transforms every
//! entry's sensitive fields (login, password, note) with the split-key
//! cipher and stores a one-way verifier of the key; unlocking is gated
//! by a verifier match and reverses the transform. Both transitions are
//! atomic: every entry is transformed before any state flips, so a
//! failure leaves the folder exactly as it was.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cipher::SplitKeyCipher;
use crate::error::{PassfoldError, Result};
use crate::verifier::{Blake3Verifier, KeyVerifier, VerifierValue};

/// A single credential entry.
///
/// `login`, `password`, and `note` are ciphertext while the containing
/// folder is locked; `name` is never transformed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Display name, always plaintext
    pub name: String,

    /// Login / account identifier
    pub login: String,

    /// Password or secret
    pub password: String,

    /// Free-form note (optional, empty by default)
    #[serde(default)]
    pub note: String,
}

impl Entry {
    pub fn new(
        name: impl Into<String>,
        login: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            login: login.into(),
            password: password.into(),
            note: String::new(),
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }
}

/// One record in a folder's append-only history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogRecord {
    /// When the action happened
    pub at: DateTime<Utc>,

    /// What happened (e.g., "encrypted", "added entry mail")
    pub action: String,
}

impl LogRecord {
    fn now(action: impl Into<String>) -> Self {
        Self {
            at: Utc::now(),
            action: action.into(),
        }
    }
}

/// Lock state of a folder.
///
/// The verifier exists exactly when the folder is locked; the enum
/// makes that invariant structural rather than a runtime check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum LockState {
    /// Entries are plaintext; mutation is permitted.
    Unlocked,
    /// Entries are ciphertext under the key whose digest is stored.
    Locked { verifier: VerifierValue },
}

/// A named folder of credential entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Folder {
    name: String,
    entries: Vec<Entry>,
    #[serde(flatten)]
    state: LockState,
    log: Vec<LogRecord>,
}

impl Folder {
    /// Create an empty, unlocked folder.
    pub fn new(name: impl Into<String>) -> Self {
        let mut folder = Self {
            name: name.into(),
            entries: Vec::new(),
            state: LockState::Unlocked,
            log: Vec::new(),
        };
        folder.log("created");
        folder
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_locked(&self) -> bool {
        matches!(self.state, LockState::Locked { .. })
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// The folder's history, oldest record first.
    pub fn log_records(&self) -> &[LogRecord] {
        &self.log
    }

    /// Append an entry.
    ///
    /// # Errors
    ///
    /// Returns [`PassfoldError::FolderLocked`] if the folder is locked;
    /// the folder is left unchanged.
    pub fn add_entry(&mut self, entry: Entry) -> Result<()> {
        if self.is_locked() {
            return Err(PassfoldError::FolderLocked);
        }
        self.log(format!("added entry {}", entry.name));
        self.entries.push(entry);
        Ok(())
    }

    /// Remove the entry at `index`, returning it.
    ///
    /// # Errors
    ///
    /// Returns [`PassfoldError::FolderLocked`] if the folder is locked,
    /// or [`PassfoldError::InvalidInput`] for an out-of-range index.
    pub fn delete_entry(&mut self, index: usize) -> Result<Entry> {
        if self.is_locked() {
            return Err(PassfoldError::FolderLocked);
        }
        if index >= self.entries.len() {
            return Err(PassfoldError::InvalidInput(format!(
                "invalid index {}; must be below {}",
                index,
                self.entries.len()
            )));
        }
        let entry = self.entries.remove(index);
        self.log(format!("deleted entry {}", entry.name));
        Ok(entry)
    }

    /// Lock the folder under `key` using the default verifier.
    pub fn lock(&mut self, key: &str) -> Result<()> {
        self.lock_with(key, &Blake3Verifier)
    }

    /// Lock the folder under `key`.
    ///
    /// Computes the key verifier, encrypts every entry's sensitive
    /// fields, then flips the state and logs `"encrypted"`. If any
    /// entry fails to transform the folder is left unlocked and
    /// untouched.
    ///
    /// # Errors
    ///
    /// [`PassfoldError::AlreadyLocked`] if the folder is locked (side
    /// effect free), or any cipher/verifier error for a bad key.
    pub fn lock_with(&mut self, key: &str, verifier: &dyn KeyVerifier) -> Result<()> {
        if self.is_locked() {
            return Err(PassfoldError::AlreadyLocked);
        }
        let digest = verifier.digest(key)?;
        let cipher = SplitKeyCipher::vault();
        self.entries = transform_entries(&self.entries, |field| cipher.encrypt(field, key))?;
        self.state = LockState::Locked { verifier: digest };
        self.log("encrypted");
        Ok(())
    }

    /// Unlock the folder with `key` using the default verifier.
    pub fn unlock(&mut self, key: &str) -> Result<()> {
        self.unlock_with(key, &Blake3Verifier)
    }

    /// Unlock the folder with `key`.
    ///
    /// The candidate key's digest is compared against the stored
    /// verifier before any ciphertext is touched; a mismatch fails with
    /// [`PassfoldError::WrongKey`], logs `"decrypting unsuccessful"`,
    /// and leaves entries and verifier unchanged. On a match, every
    /// entry is decrypted, the verifier is cleared, and `"decrypted"`
    /// is logged.
    ///
    /// # Errors
    ///
    /// [`PassfoldError::AlreadyUnlocked`] if the folder is not locked,
    /// [`PassfoldError::WrongKey`] on verifier mismatch, or a
    /// cipher/verifier error for a bad key.
    pub fn unlock_with(&mut self, key: &str, verifier: &dyn KeyVerifier) -> Result<()> {
        let stored = match &self.state {
            LockState::Unlocked => return Err(PassfoldError::AlreadyUnlocked),
            LockState::Locked { verifier } => verifier.clone(),
        };
        let candidate = verifier.digest(key)?;
        if candidate != stored {
            self.log("decrypting unsuccessful");
            return Err(PassfoldError::WrongKey);
        }
        let cipher = SplitKeyCipher::vault();
        self.entries = transform_entries(&self.entries, |field| cipher.decrypt(field, key))?;
        self.state = LockState::Unlocked;
        self.log("decrypted");
        Ok(())
    }

    fn log(&mut self, action: impl Into<String>) {
        self.log.push(LogRecord::now(action));
    }
}

/// Transform the sensitive fields of every entry, all-or-nothing.
///
/// The result is built in full before the caller commits it, which is
/// what makes lock/unlock atomic.
fn transform_entries(
    entries: &[Entry],
    transform: impl Fn(&str) -> Result<String>,
) -> Result<Vec<Entry>> {
    entries
        .iter()
        .map(|entry| {
            Ok(Entry {
                name: entry.name.clone(),
                login: transform(&entry.login)?,
                password: transform(&entry.password)?,
                note: transform(&entry.note)?,
            })
        })
        .collect()
}
