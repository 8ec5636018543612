//! Passfold CLI - a local vault of lockable credential folders.
//!
//! This is the command-line interface for Passfold. Folders of
//! credential entries live in a JSON store; locking a folder encrypts
//! its entries in place under a user-supplied key.

mod cli;
mod commands;
mod store;
mod ui;

use clap::Parser;
use owo_colors::OwoColorize;

use cli::{Cli, Commands, FolderAction};
use store::Store;

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("{} {err:#}", "error:".red().bold());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Gen { length } => commands::handle_gen(length),
        Commands::Allowed => {
            commands::handle_allowed();
            Ok(())
        }
        Commands::Check { key } => commands::handle_check(&key),
        Commands::List { verbose } => {
            let store = Store::load(&cli.store)?;
            commands::handle_list(&store, verbose);
            Ok(())
        }
        Commands::LockAll { key } => {
            let mut store = Store::load(&cli.store)?;
            commands::handle_lock_all(&mut store, key, cli.quiet)?;
            store.save()
        }
        Commands::UnlockAll { key } => {
            let mut store = Store::load(&cli.store)?;
            commands::handle_unlock_all(&mut store, key, cli.quiet)?;
            store.save()
        }
        Commands::Folder { action } => {
            let mut store = Store::load(&cli.store)?;
            run_folder(&mut store, action, cli.quiet)
        }
    }
}

fn run_folder(store: &mut Store, action: FolderAction, quiet: bool) -> anyhow::Result<()> {
    match action {
        FolderAction::Create { name } => {
            commands::handle_create(store, &name, quiet)?;
            store.save()
        }
        FolderAction::Drop { name, yes } => {
            commands::handle_drop(store, &name, yes, quiet)?;
            store.save()
        }
        FolderAction::Add {
            folder,
            name,
            login,
            password,
            note,
        } => {
            commands::handle_add(store, &folder, &name, &login, &password, &note, quiet)?;
            store.save()
        }
        FolderAction::Remove { folder, index } => {
            commands::handle_remove(store, &folder, index, quiet)?;
            store.save()
        }
        FolderAction::Show { folder } => commands::handle_show(store, &folder),
        FolderAction::Lock { folder, key } => {
            commands::handle_lock(store, &folder, key, quiet)?;
            store.save()
        }
        FolderAction::Unlock { folder, key } => {
            // Save even when the key was wrong: the failed attempt is
            // part of the folder's log history.
            let result = commands::handle_unlock(store, &folder, key, quiet);
            store.save()?;
            result
        }
        FolderAction::Info { folder } => commands::handle_info(store, &folder),
        FolderAction::Export { folder, output } => {
            commands::handle_export(store, &folder, output)
        }
    }
}
