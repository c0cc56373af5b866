//! Interactive confirmation for production deployments

use std::io::{self, BufRead, StdinLock, Write};

/// Source of yes/no answers for the production gate
pub trait ConfirmPrompt {
    /// Ask `message`; returns true only for an affirmative answer
    fn confirm(&mut self, message: &str) -> bool;
}

/// Whether an answer counts as confirmation.
///
/// Only `yes` is accepted, ignoring ASCII case. The line ending is stripped;
/// any other surrounding characters make the answer a refusal.
pub fn is_affirmative(answer: &str) -> bool {
    answer
        .trim_end_matches(['\n', '\r'])
        .eq_ignore_ascii_case("yes")
}

/// Prompts on stderr and reads one line from a reader.
///
/// Blocks until a line arrives; there is no timeout. End of input or a read
/// error counts as a refusal.
pub struct LineConfirm<R> {
    reader: R,
}

impl<R: BufRead> LineConfirm<R> {
    /// Read answers from `reader`
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl LineConfirm<StdinLock<'static>> {
    /// Read answers from the process's standard input
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> ConfirmPrompt for LineConfirm<R> {
    fn confirm(&mut self, message: &str) -> bool {
        eprint!("{} (yes/no): ", message);
        let _ = io::stderr().flush();

        let mut input = String::new();
        match self.reader.read_line(&mut input) {
            Ok(0) => false,
            Ok(_) => is_affirmative(&input),
            Err(e) => {
                log::warn!("Failed to read confirmation: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
#[path = "confirm_test.rs"]
mod tests;
