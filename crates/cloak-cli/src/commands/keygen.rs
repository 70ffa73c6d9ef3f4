use cloak_core::crypto::generate_key;
use cloak_core::KeyStore;

use crate::cli::{Cli, KeygenArgs};
use crate::clipboard::copy_to_clipboard;
use crate::config::resolve_keystore_path;
use crate::output::print_status;

pub fn handle_keygen(cli: &Cli, args: &KeygenArgs) -> anyhow::Result<()> {
    let key = generate_key(args.length)?;

    if let Some(name) = &args.save {
        let mut store = KeyStore::load(resolve_keystore_path(cli)?);
        store.save(name, &key)?;
        print_status(
            cli.quiet,
            &format!("Saved key \"{}\" to {}", name, store.path().display()),
        );
    }

    if args.copy {
        copy_to_clipboard(&key)?;
        print_status(cli.quiet, "Copied key to clipboard");
    }

    println!("{}", key);
    Ok(())
}
