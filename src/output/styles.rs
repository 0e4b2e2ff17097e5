//! Output styles using the owo-colors stylesheet pattern.

use owo_colors::Style;

/// Centralized stylesheet for CLI output colors. All styles are no-ops
/// until [`Styles::colorize`] is applied.
#[derive(Default, Clone)]
pub struct Styles {
    /// Step and completion messages (green)
    pub success: Style,
    /// Informational warnings (yellow)
    pub warning: Style,
    /// Error messages (red)
    pub error: Style,
    /// Surfaced backend output (blue)
    pub info: Style,
    /// Dimmed/secondary text
    pub dim: Style,
    /// Bold text
    pub bold: Style,
}

impl Styles {
    /// Apply colors to the stylesheet.
    pub fn colorize(&mut self) {
        self.success = Style::new().green();
        self.warning = Style::new().yellow();
        self.error = Style::new().red();
        self.info = Style::new().blue();
        self.dim = Style::new().dimmed();
        self.bold = Style::new().bold();
    }
}
