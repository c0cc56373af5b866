//! Shared helpers for commands

use std::fmt;

/// Structured exit code carried through `anyhow` so `main` can set the
/// process status after destructors have run.
#[derive(Debug)]
pub(crate) struct ExitCode(pub(crate) i32);

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Control flow only; nothing user-facing to print.
        write!(f, "")
    }
}

impl std::error::Error for ExitCode {}
