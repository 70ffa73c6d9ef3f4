use cloak_core::crypto::{decrypt_text, is_plausible_ciphertext};

use crate::cli::{Cli, DecryptArgs};
use crate::commands::emit_result;
use crate::helpers::{read_text, resolve_secret};
use crate::output::print_warning;

pub fn handle_decrypt(cli: &Cli, args: DecryptArgs) -> anyhow::Result<()> {
    let text = read_text(args.text, args.input.as_deref(), "decrypt")?;
    if text.is_empty() {
        return Err(anyhow::anyhow!("Nothing to decrypt: the input is empty"));
    }

    // Hint only - decryption itself is the authoritative check.
    if !is_plausible_ciphertext(&text) {
        print_warning(
            cli.quiet,
            "Input does not look like encrypted text; attempting to decrypt anyway",
        );
    }

    let secret = resolve_secret(cli, args.key, args.key_name.as_deref(), args.no_input)?;
    let plaintext = decrypt_text(&text, secret.as_str())?;

    emit_result(cli, &plaintext, args.out.as_deref(), args.copy)
}
