//! Command handlers.
//!
//! Each handler works on the in-memory [`Store`]; persistence is the
//! caller's job so that a handler never half-saves.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context};
use dialoguer::{Confirm, Password};
use zeroize::Zeroizing;

use passfold_core::{alphabet, score_key, Entry, PassfoldError};

use crate::store::Store;
use crate::ui;

/// Characters used by the password generator (letters and digits, as in
/// the original tool).
const PASSWORD_CHARS: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Use the given key or prompt for one with hidden input.
fn obtain_key(key: Option<String>, prompt: &str) -> anyhow::Result<Zeroizing<String>> {
    match key {
        Some(key) => Ok(Zeroizing::new(key)),
        None => {
            let key = Password::new()
                .with_prompt(prompt)
                .interact()
                .context("reading key")?;
            Ok(Zeroizing::new(key))
        }
    }
}

pub fn handle_list(store: &Store, verbose: bool) {
    if store.is_empty() {
        ui::warn("empty list of folders");
        return;
    }
    if verbose {
        for folder in store.folders() {
            println!(
                "{} folder {} with {} entries",
                ui::lock_badge(folder),
                folder.name(),
                folder.entries().len()
            );
            if !folder.entries().is_empty() {
                println!("{}", ui::entries_table(folder));
            }
        }
    } else {
        println!("{}", ui::folders_table(store.folders()));
    }
}

pub fn handle_create(store: &mut Store, name: &str, quiet: bool) -> anyhow::Result<()> {
    store.create_folder(name)?;
    if !quiet {
        ui::success(&format!("created folder {name}"));
    }
    Ok(())
}

pub fn handle_drop(store: &mut Store, name: &str, yes: bool, quiet: bool) -> anyhow::Result<()> {
    // Existence and lock state are checked before prompting.
    if store.folder(name)?.is_locked() {
        bail!("cannot delete a locked folder: {name}");
    }
    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("delete folder {name}?"))
            .default(false)
            .interact()
            .context("reading confirmation")?;
        if !confirmed {
            ui::warn("aborted");
            return Ok(());
        }
    }
    store.remove_folder(name)?;
    if !quiet {
        ui::success(&format!("deleted folder {name}"));
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub fn handle_add(
    store: &mut Store,
    folder: &str,
    name: &str,
    login: &str,
    password: &str,
    note: &[String],
    quiet: bool,
) -> anyhow::Result<()> {
    let entry = Entry::new(name, login, password).with_note(note.join(" "));
    store.folder_mut(folder)?.add_entry(entry)?;
    if !quiet {
        ui::success(&format!("added entry {name} to folder {folder}"));
    }
    Ok(())
}

pub fn handle_remove(
    store: &mut Store,
    folder: &str,
    index: usize,
    quiet: bool,
) -> anyhow::Result<()> {
    let removed = store.folder_mut(folder)?.delete_entry(index)?;
    if !quiet {
        ui::success(&format!(
            "deleted entry {} from folder {folder}",
            removed.name
        ));
    }
    Ok(())
}

pub fn handle_show(store: &Store, folder: &str) -> anyhow::Result<()> {
    let folder = store.folder(folder)?;
    println!(
        "{} folder {} with {} entries",
        ui::lock_badge(folder),
        folder.name(),
        folder.entries().len()
    );
    if folder.entries().is_empty() {
        ui::warn("no entries");
    } else {
        println!("{}", ui::entries_table(folder));
    }
    Ok(())
}

pub fn handle_lock(
    store: &mut Store,
    folder: &str,
    key: Option<String>,
    quiet: bool,
) -> anyhow::Result<()> {
    let key = obtain_key(key, "Key")?;
    store.folder_mut(folder)?.lock(&key)?;
    if !quiet {
        ui::success(&format!("folder {folder} encrypted successfully"));
    }
    Ok(())
}

pub fn handle_unlock(
    store: &mut Store,
    folder: &str,
    key: Option<String>,
    quiet: bool,
) -> anyhow::Result<()> {
    let key = obtain_key(key, "Key")?;
    store
        .folder_mut(folder)?
        .unlock(&key)
        .with_context(|| format!("unlocking folder {folder}"))?;
    if !quiet {
        ui::success(&format!("folder {folder} decrypted successfully"));
    }
    Ok(())
}

pub fn handle_lock_all(
    store: &mut Store,
    key: Option<String>,
    quiet: bool,
) -> anyhow::Result<()> {
    let key = obtain_key(key, "Key")?;
    for folder in store.folders_mut() {
        let name = folder.name().to_string();
        match folder.lock(&key) {
            Ok(()) => {
                if !quiet {
                    ui::success(&format!("folder {name} encrypted successfully"));
                }
            }
            Err(PassfoldError::AlreadyLocked) => {
                ui::warn(&format!("folder {name} is already locked"));
            }
            Err(err) => {
                ui::warn(&format!("folder {name} not locked: {err}"));
            }
        }
    }
    Ok(())
}

pub fn handle_unlock_all(
    store: &mut Store,
    key: Option<String>,
    quiet: bool,
) -> anyhow::Result<()> {
    let key = obtain_key(key, "Key")?;
    for folder in store.folders_mut() {
        let name = folder.name().to_string();
        match folder.unlock(&key) {
            Ok(()) => {
                if !quiet {
                    ui::success(&format!("folder {name} decrypted successfully"));
                }
            }
            Err(PassfoldError::AlreadyUnlocked) => {
                ui::warn(&format!("folder {name} is already unlocked"));
            }
            Err(PassfoldError::WrongKey) => {
                ui::warn(&format!("invalid key for folder {name}"));
            }
            Err(err) => {
                ui::warn(&format!("folder {name} not unlocked: {err}"));
            }
        }
    }
    Ok(())
}

pub fn handle_info(store: &Store, folder: &str) -> anyhow::Result<()> {
    let folder = store.folder(folder)?;
    if folder.is_locked() {
        bail!("cannot display info about a locked folder");
    }
    for record in folder.log_records() {
        println!("{} - {}", record.at, record.action);
    }
    Ok(())
}

pub fn handle_export(
    store: &Store,
    folder: &str,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let folder = store.folder(folder)?;
    let path = output.unwrap_or_else(|| PathBuf::from(format!("{}.txt", folder.name())));

    let mut lines = String::new();
    for entry in folder.entries() {
        lines.push_str(&format!("{} | {} | {}", entry.name, entry.login, entry.password));
        if !entry.note.is_empty() {
            lines.push_str(&format!(" | {}", entry.note));
        }
        lines.push('\n');
    }
    fs::write(&path, lines).with_context(|| format!("writing {}", path.display()))?;
    ui::success(&format!(
        "exported {} entries to {}",
        folder.entries().len(),
        path.display()
    ));
    Ok(())
}

pub fn handle_gen(length: usize) -> anyhow::Result<()> {
    if length == 0 {
        bail!("password length must be positive");
    }
    let mut buf = vec![0u8; length];
    getrandom::getrandom(&mut buf).map_err(|err| anyhow::anyhow!("random generator: {err}"))?;
    let password: String = buf
        .iter()
        .map(|&b| PASSWORD_CHARS[usize::from(b) % PASSWORD_CHARS.len()] as char)
        .collect();
    println!("{password}");
    Ok(())
}

pub fn handle_allowed() {
    println!("{}", alphabet::domain().collect::<String>());
}

pub fn handle_check(key: &str) -> anyhow::Result<()> {
    let score = score_key(key)?;
    println!("the key is {:.0}% reliable", score * 100.0);
    Ok(())
}
