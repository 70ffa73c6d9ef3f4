use std::io::IsTerminal;

use cloak_core::crypto::Secret;
use cloak_core::KeyStore;

use crate::cli::{Cli, KeysDeleteArgs, KeysListArgs, KeysSaveArgs};
use crate::config::resolve_keystore_path;
use crate::helpers::input::{prompt_secret, secret_from_env};
use crate::output::print_status;

pub fn handle_list(cli: &Cli, args: &KeysListArgs) -> anyhow::Result<()> {
    let store = KeyStore::load(resolve_keystore_path(cli)?);

    if args.json {
        // Names only - secrets stay out of terminal scrollback and logs.
        let names: Vec<serde_json::Value> = store
            .list()
            .iter()
            .map(|record| serde_json::json!({ "name": record.name }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&names)?);
        return Ok(());
    }

    if store.is_empty() {
        print_status(cli.quiet, "No saved keys yet");
        return Ok(());
    }
    for record in store.list() {
        println!("{}", record.name);
    }
    Ok(())
}

pub fn handle_save(cli: &Cli, args: KeysSaveArgs) -> anyhow::Result<()> {
    let secret = match args.key {
        Some(value) => {
            if value.is_empty() {
                return Err(anyhow::anyhow!("Key cannot be empty"));
            }
            Secret::new(value)
        }
        None => match secret_from_env() {
            Some(secret) => secret,
            None => {
                if args.no_input || !std::io::stdin().is_terminal() {
                    return Err(anyhow::anyhow!(
                        "No key provided. Use --key or set CLOAK_KEY."
                    ));
                }
                prompt_secret()?
            }
        },
    };

    let mut store = KeyStore::load(resolve_keystore_path(cli)?);
    store.save(&args.name, secret.as_str())?;
    print_status(cli.quiet, &format!("Key \"{}\" saved", args.name));
    Ok(())
}

pub fn handle_delete(cli: &Cli, args: &KeysDeleteArgs) -> anyhow::Result<()> {
    let mut store = KeyStore::load(resolve_keystore_path(cli)?);

    let existed = store.find(&args.name).is_some();
    store.delete(&args.name)?;

    if existed {
        print_status(cli.quiet, &format!("Key \"{}\" deleted", args.name));
    } else {
        print_status(
            cli.quiet,
            &format!("Key \"{}\" was not saved; nothing to delete", args.name),
        );
    }
    Ok(())
}
