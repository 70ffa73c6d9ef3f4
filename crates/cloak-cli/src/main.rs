//! Cloak CLI - encrypt and decrypt text locally with passphrase-derived keys
//!
//! This is the command-line interface for Cloak. It provides a user-friendly
//! interface to the core library functionality: text encryption, key
//! generation, and the named key store.

mod cli;
mod clipboard;
mod commands;
mod config;
mod helpers;
mod output;

use clap::Parser;
use cloak_core::VERSION;

use crate::cli::{Cli, Commands, KeysSubcommand};
use crate::commands::{decrypt, encrypt, keygen, keys, misc};
use crate::output::print_error;

fn main() {
    let mut cli = Cli::parse();
    let command = cli.command.take();

    if let Err(e) = run(&cli, command) {
        let error_msg = format!("{}", e);
        let hint = extract_error_hint(&error_msg);
        print_error(&error_msg, hint.as_deref());
        std::process::exit(1);
    }
}

/// Provide contextual hints for common error types.
fn extract_error_hint(error: &str) -> Option<String> {
    let error_lower = error.to_lowercase();

    // Wrong key or corrupted/foreign ciphertext
    if error_lower.contains("incorrect key") {
        return Some(
            "Hint: Check the key, and make sure the input is complete ciphertext produced by `cloak encrypt`.".to_string(),
        );
    }

    // Duplicate key name
    if error_lower.contains("already exists") {
        return Some(
            "Hint: Run `cloak keys list` to see saved names, or `cloak keys delete <NAME>` to free one.".to_string(),
        );
    }

    // Unknown key name
    if error_lower.contains("not found in the key store") {
        return Some("Hint: Run `cloak keys list` to see saved names.".to_string());
    }

    // No key supplied in a non-interactive session
    if error_lower.contains("no key provided") {
        return Some(
            "Hint: Pass --key <KEY>, --key-name <NAME>, or export CLOAK_KEY.".to_string(),
        );
    }

    // Headless environment
    if error_lower.contains("clipboard") {
        return Some("Hint: Use --out <FILE> instead of --copy on headless systems.".to_string());
    }

    None
}

// Handlers that receive secret material take their args by value.
fn run(cli: &Cli, command: Option<Commands>) -> anyhow::Result<()> {
    match command {
        Some(Commands::Encrypt(args)) => {
            encrypt::handle_encrypt(cli, args)?;
        }
        Some(Commands::Decrypt(args)) => {
            decrypt::handle_decrypt(cli, args)?;
        }
        Some(Commands::Keygen(args)) => {
            keygen::handle_keygen(cli, &args)?;
        }
        Some(Commands::Keys(args)) => match args.command {
            KeysSubcommand::List(list_args) => {
                keys::handle_list(cli, &list_args)?;
            }
            KeysSubcommand::Save(save_args) => {
                keys::handle_save(cli, save_args)?;
            }
            KeysSubcommand::Delete(delete_args) => {
                keys::handle_delete(cli, &delete_args)?;
            }
        },
        Some(Commands::Completions(args)) => {
            misc::handle_completions(&args)?;
        }
        None => {
            println!("Cloak v{}", VERSION);
            println!("\nQuickstart:");
            println!("  cloak keygen --save work");
            println!("  cloak encrypt \"hello world\" --key-name work");
            println!("  cloak encrypt --in notes.txt --key-name work --out");
            println!("  cloak decrypt --in encrypted.txt --key-name work");
            println!("\nRun `cloak --help` for full usage.");
        }
    }

    Ok(())
}
