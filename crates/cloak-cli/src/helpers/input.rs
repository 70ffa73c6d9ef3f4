//! Input handling helpers for text and key acquisition.

use std::io::{self, IsTerminal, Read};

use cloak_core::crypto::Secret;
use cloak_core::KeyStore;
use dialoguer::Password;

use crate::cli::Cli;
use crate::config::resolve_keystore_path;

/// Resolve the text to operate on: positional argument, `--in` file, or
/// piped stdin, in that order.
pub fn read_text(
    text: Option<String>,
    input_file: Option<&str>,
    verb: &str,
) -> anyhow::Result<String> {
    if let Some(value) = text {
        return Ok(value);
    }

    if let Some(path) = input_file {
        // The file's full content becomes the active text, verbatim.
        return std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path, e));
    }

    if !io::stdin().is_terminal() {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| anyhow::anyhow!("Failed to read stdin: {}", e))?;
        // Shells append a trailing newline to piped input; drop just that one.
        if buffer.ends_with('\n') {
            buffer.pop();
        }
        return Ok(buffer);
    }

    Err(anyhow::anyhow!(
        "No text to {}. Pass TEXT, use --in <FILE>, or pipe via stdin.",
        verb
    ))
}

/// Resolve the key for a cipher operation.
///
/// Precedence: `--key-name` (key store lookup), then `--key`, then the
/// `CLOAK_KEY` env var, then an interactive prompt. Takes the flag value by
/// ownership; it is moved into the returned `Secret`.
pub fn resolve_secret(
    cli: &Cli,
    key: Option<String>,
    key_name: Option<&str>,
    no_input: bool,
) -> anyhow::Result<Secret> {
    if let Some(name) = key_name {
        let store = KeyStore::load(resolve_keystore_path(cli)?);
        return match store.find(name) {
            Some(record) => Ok(Secret::new(record.secret.clone())),
            None => Err(anyhow::anyhow!(
                "Key \"{}\" not found in the key store",
                name
            )),
        };
    }

    if let Some(value) = key {
        if value.is_empty() {
            return Err(anyhow::anyhow!("Key cannot be empty"));
        }
        return Ok(Secret::new(value));
    }

    if let Some(secret) = secret_from_env() {
        return Ok(secret);
    }

    if !no_input && io::stdin().is_terminal() {
        return prompt_secret();
    }

    Err(anyhow::anyhow!(
        "No key provided. Use --key, --key-name, or set CLOAK_KEY."
    ))
}

/// Read a key from the `CLOAK_KEY` env var, if set and non-empty.
pub fn secret_from_env() -> Option<Secret> {
    match std::env::var("CLOAK_KEY") {
        Ok(value) if !value.trim().is_empty() => Some(Secret::new(value)),
        _ => None,
    }
}

/// Prompt for a key without echoing it.
pub fn prompt_secret() -> anyhow::Result<Secret> {
    let value = Password::new()
        .with_prompt("Key")
        .interact()
        .map_err(|e| anyhow::anyhow!("Failed to read key: {}", e))?;
    if value.is_empty() {
        return Err(anyhow::anyhow!("Key cannot be empty"));
    }
    Ok(Secret::new(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Commands;
    use clap::Parser;
    use std::sync::Mutex;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn bare_cli() -> Cli {
        Cli {
            keystore: None,
            command: None,
            quiet: false,
        }
    }

    #[test]
    fn test_env_key_does_not_conflict_with_key_name() {
        let _guard = ENV_LOCK.lock().expect("env lock");
        std::env::set_var("CLOAK_KEY", "from-env");

        // Saved keys must stay usable while CLOAK_KEY is exported
        let cli = Cli::try_parse_from(["cloak", "encrypt", "hi", "--key-name", "work"])
            .expect("env key must not clash with --key-name");
        match cli.command {
            Some(Commands::Encrypt(args)) => {
                assert!(args.key.is_none());
                assert_eq!(args.key_name.as_deref(), Some("work"));
            }
            _ => panic!("expected encrypt command"),
        }

        std::env::remove_var("CLOAK_KEY");
    }

    #[test]
    fn test_key_flag_beats_env() {
        let _guard = ENV_LOCK.lock().expect("env lock");
        std::env::set_var("CLOAK_KEY", "from-env");

        let secret =
            resolve_secret(&bare_cli(), Some("from-flag".to_string()), None, true).unwrap();
        assert_eq!(secret.as_str(), "from-flag");

        std::env::remove_var("CLOAK_KEY");
    }

    #[test]
    fn test_env_key_used_when_no_flag() {
        let _guard = ENV_LOCK.lock().expect("env lock");
        std::env::set_var("CLOAK_KEY", "from-env");

        let secret = resolve_secret(&bare_cli(), None, None, true).unwrap();
        assert_eq!(secret.as_str(), "from-env");

        std::env::remove_var("CLOAK_KEY");
    }

    #[test]
    fn test_no_key_sources_errors() {
        let _guard = ENV_LOCK.lock().expect("env lock");
        std::env::remove_var("CLOAK_KEY");

        let result = resolve_secret(&bare_cli(), None, None, true);
        assert!(result.is_err());
    }
}
