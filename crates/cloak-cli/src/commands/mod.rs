pub mod decrypt;
pub mod encrypt;
pub mod keygen;
pub mod keys;
pub mod misc;

use crate::cli::Cli;
use crate::clipboard::copy_to_clipboard;
use crate::output::print_status;

/// Deliver a result string to its destinations: file export and/or
/// clipboard when requested, stdout otherwise.
pub(crate) fn emit_result(
    cli: &Cli,
    result: &str,
    out: Option<&str>,
    copy: bool,
) -> anyhow::Result<()> {
    let mut delivered = false;

    if let Some(path) = out {
        std::fs::write(path, result)
            .map_err(|e| anyhow::anyhow!("Failed to write {}: {}", path, e))?;
        print_status(
            cli.quiet,
            &format!("Wrote {} ({} bytes)", path, result.len()),
        );
        delivered = true;
    }

    if copy {
        copy_to_clipboard(result)?;
        print_status(cli.quiet, "Copied to clipboard");
        delivered = true;
    }

    if !delivered {
        println!("{}", result);
    }
    Ok(())
}
