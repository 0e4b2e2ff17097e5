//! Output formatting module

pub mod reporter;
pub mod styles;

use console::Term;
pub use styles::Styles;

/// Output context carrying styling and quiet state. Printing itself lives in
/// [`reporter::TerminalReporter`]; this only decides how output should look.
pub struct OutputContext {
    /// Stylesheet for colored output.
    pub styles: Styles,
    /// Whether to suppress non-error output.
    pub quiet: bool,
}

impl OutputContext {
    /// Create output context based on CLI flags and environment. Colors are
    /// enabled only for a TTY with no `--no-color` flag and no `NO_COLOR`
    /// environment variable.
    #[must_use]
    pub fn new(no_color: bool, quiet: bool) -> Self {
        let is_tty = Term::stdout().is_term();
        let use_colors = !no_color && is_tty && std::env::var("NO_COLOR").is_err();

        let mut styles = Styles::default();
        if use_colors {
            styles.colorize();
        }

        Self { styles, quiet }
    }
}
