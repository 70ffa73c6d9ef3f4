use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use cloak_core::VERSION;

/// Cloak - encrypt and decrypt text locally with passphrase-derived keys
#[derive(Parser)]
#[command(name = "cloak")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the key store file
    #[arg(long, global = true, env = "CLOAK_KEYSTORE", value_name = "PATH")]
    pub keystore: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Arguments for the `encrypt` command
#[derive(Args)]
pub struct EncryptArgs {
    /// Text to encrypt (overrides stdin)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Read the text from a file instead
    #[arg(long = "in", value_name = "FILE")]
    pub input: Option<String>,

    /// Encryption key (CLOAK_KEY is consulted when no key source is given)
    #[arg(short, long)]
    pub key: Option<String>,

    /// Use a saved key by name
    #[arg(long, value_name = "NAME", conflicts_with = "key")]
    pub key_name: Option<String>,

    /// Write the result to a file (defaults to encrypted.txt)
    #[arg(
        short = 'o',
        long = "out",
        value_name = "FILE",
        num_args = 0..=1,
        default_missing_value = "encrypted.txt"
    )]
    pub out: Option<String>,

    /// Copy the result to the clipboard
    #[arg(long)]
    pub copy: bool,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `decrypt` command
#[derive(Args)]
pub struct DecryptArgs {
    /// Encrypted text to decrypt (overrides stdin)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Read the encrypted text from a file instead
    #[arg(long = "in", value_name = "FILE")]
    pub input: Option<String>,

    /// Decryption key (CLOAK_KEY is consulted when no key source is given)
    #[arg(short, long)]
    pub key: Option<String>,

    /// Use a saved key by name
    #[arg(long, value_name = "NAME", conflicts_with = "key")]
    pub key_name: Option<String>,

    /// Write the result to a file (defaults to decrypted.txt)
    #[arg(
        short = 'o',
        long = "out",
        value_name = "FILE",
        num_args = 0..=1,
        default_missing_value = "decrypted.txt"
    )]
    pub out: Option<String>,

    /// Copy the result to the clipboard
    #[arg(long)]
    pub copy: bool,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `keygen` command
#[derive(Args)]
pub struct KeygenArgs {
    /// Key length in random bytes
    #[arg(long, default_value_t = cloak_core::crypto::DEFAULT_KEY_LENGTH)]
    pub length: usize,

    /// Copy the generated key to the clipboard
    #[arg(long)]
    pub copy: bool,

    /// Save the generated key under a name in the key store
    #[arg(long, value_name = "NAME")]
    pub save: Option<String>,
}

/// Arguments for the `keys` command group
#[derive(Args)]
pub struct KeysArgs {
    #[command(subcommand)]
    pub command: KeysSubcommand,
}

#[derive(Subcommand)]
pub enum KeysSubcommand {
    /// List saved key names
    List(KeysListArgs),

    /// Save a key under a name
    Save(KeysSaveArgs),

    /// Delete a saved key
    Delete(KeysDeleteArgs),
}

/// Arguments for `keys list`
#[derive(Args)]
pub struct KeysListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `keys save`
#[derive(Args)]
pub struct KeysSaveArgs {
    /// Name for the key
    #[arg(value_name = "NAME")]
    pub name: String,

    /// The key to save (CLOAK_KEY or a prompt is used when omitted)
    #[arg(short, long)]
    pub key: Option<String>,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for `keys delete`
#[derive(Args)]
pub struct KeysDeleteArgs {
    /// Name of the key to delete
    #[arg(value_name = "NAME")]
    pub name: String,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Encrypt text with a key
    Encrypt(EncryptArgs),

    /// Decrypt previously encrypted text
    Decrypt(DecryptArgs),

    /// Generate a random key
    Keygen(KeygenArgs),

    /// Manage saved keys
    Keys(KeysArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_bare_out_flag_uses_fixed_names() {
        let cli = Cli::try_parse_from(["cloak", "encrypt", "hi", "--key", "k", "--out"]).unwrap();
        match cli.command {
            Some(Commands::Encrypt(args)) => {
                assert_eq!(args.out.as_deref(), Some("encrypted.txt"));
            }
            _ => panic!("expected encrypt command"),
        }

        let cli = Cli::try_parse_from(["cloak", "decrypt", "hi", "--key", "k", "--out"]).unwrap();
        match cli.command {
            Some(Commands::Decrypt(args)) => {
                assert_eq!(args.out.as_deref(), Some("decrypted.txt"));
            }
            _ => panic!("expected decrypt command"),
        }
    }

    #[test]
    fn test_key_and_key_name_conflict() {
        let result = Cli::try_parse_from([
            "cloak", "encrypt", "hi", "--key", "k", "--key-name", "work",
        ]);
        assert!(result.is_err());
    }
}
