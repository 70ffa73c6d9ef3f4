//! User-facing status messages.
//!
//! Results (ciphertext, plaintext, generated keys) go to stdout so they can
//! be piped; status and errors go to stderr. Color only when stderr is a
//! terminal and NO_COLOR is unset.

use std::io::IsTerminal;

use owo_colors::OwoColorize;

fn color_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal()
}

pub fn print_error(message: &str, hint: Option<&str>) {
    if color_enabled() {
        eprintln!("{} {}", "Error:".red().bold(), message);
    } else {
        eprintln!("Error: {}", message);
    }
    if let Some(hint) = hint {
        if color_enabled() {
            eprintln!("{}", hint.dimmed());
        } else {
            eprintln!("{}", hint);
        }
    }
}

pub fn print_status(quiet: bool, message: &str) {
    if quiet {
        return;
    }
    if color_enabled() {
        eprintln!("{}", message.green());
    } else {
        eprintln!("{}", message);
    }
}

pub fn print_warning(quiet: bool, message: &str) {
    if quiet {
        return;
    }
    if color_enabled() {
        eprintln!("{} {}", "Warning:".yellow().bold(), message);
    } else {
        eprintln!("Warning: {}", message);
    }
}
