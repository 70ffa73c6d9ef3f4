use cloak_core::crypto::encrypt_text;

use crate::cli::{Cli, EncryptArgs};
use crate::commands::emit_result;
use crate::helpers::{read_text, resolve_secret};

pub fn handle_encrypt(cli: &Cli, args: EncryptArgs) -> anyhow::Result<()> {
    let text = read_text(args.text, args.input.as_deref(), "encrypt")?;
    if text.is_empty() {
        return Err(anyhow::anyhow!("Nothing to encrypt: the input is empty"));
    }

    let secret = resolve_secret(cli, args.key, args.key_name.as_deref(), args.no_input)?;
    let ciphertext = encrypt_text(&text, secret.as_str())?;

    emit_result(cli, &ciphertext, args.out.as_deref(), args.copy)
}
