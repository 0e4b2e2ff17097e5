//! Interactive confirmation on stdin.

use std::io::{BufRead, Write};

use anyhow::Result;

use crate::application::ports::ConfirmPrompt;

/// Terminal confirmation prompt.
pub struct StdinPrompt;

impl ConfirmPrompt for StdinPrompt {
    fn confirm(&self, question: &str) -> Result<bool> {
        print!("{question} [y/N]: ");
        std::io::stdout().flush()?;
        let mut line = String::new();
        std::io::stdin().lock().read_line(&mut line)?;
        Ok(is_affirmative(&line))
    }
}

/// The affirmative set is exactly a trimmed, case-insensitive `y`; widening
/// it is a behavior change. Empty input and EOF decline.
fn is_affirmative(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case("y")
}

#[cfg(test)]
mod tests {
    use super::is_affirmative;

    #[test]
    fn only_a_literal_y_confirms() {
        assert!(is_affirmative("y"));
        assert!(is_affirmative("Y"));
        assert!(is_affirmative("  y \n"));
    }

    #[test]
    fn everything_else_declines() {
        for answer in ["n", "N", "", "\n", "yes", "yy", "ok", "y es"] {
            assert!(!is_affirmative(answer), "{answer:?} must decline");
        }
    }
}
