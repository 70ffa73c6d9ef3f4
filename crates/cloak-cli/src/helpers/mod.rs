//! Shared helpers for command handlers.

pub mod input;

pub use input::{read_text, resolve_secret};
