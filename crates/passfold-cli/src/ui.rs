//! Console rendering: tables and status lines.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use owo_colors::OwoColorize;

use passfold_core::Folder;

fn base_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Table of one folder's entries.
pub fn entries_table(folder: &Folder) -> Table {
    let mut table = base_table();
    table.set_header(vec!["#", "NAME", "LOGIN", "PASSWORD", "NOTE"]);
    for (index, entry) in folder.entries().iter().enumerate() {
        table.add_row(vec![
            index.to_string(),
            entry.name.clone(),
            entry.login.clone(),
            entry.password.clone(),
            entry.note.clone(),
        ]);
    }
    table
}

/// Summary table of all folders.
pub fn folders_table<'a>(folders: impl Iterator<Item = &'a Folder>) -> Table {
    let mut table = base_table();
    table.set_header(vec!["FOLDER", "STATE", "ENTRIES"]);
    for folder in folders {
        table.add_row(vec![
            folder.name().to_string(),
            lock_badge(folder),
            folder.entries().len().to_string(),
        ]);
    }
    table
}

/// Colored lock-state badge for a folder.
pub fn lock_badge(folder: &Folder) -> String {
    if folder.is_locked() {
        format!("{}", "LOCKED".yellow())
    } else {
        format!("{}", "OPEN".green())
    }
}

pub fn success(message: &str) {
    println!("{}", message.green());
}

pub fn warn(message: &str) {
    println!("{}", message.yellow());
}
