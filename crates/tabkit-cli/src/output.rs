//! Terminal output utilities.

use console::{Style, Term};

/// Terminal output formatter.
///
/// Markup goes to stdout; status messages go to stderr so they never mix
/// with rendered HTML.
pub(crate) struct Output {
    out: Term,
    err: Term,
    green: Style,
    red: Style,
}

impl Output {
    /// Create a new output formatter.
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            green: Style::new().green(),
            red: Style::new().red(),
        }
    }

    /// Write rendered markup to stdout.
    pub(crate) fn markup(&self, html: &str) -> std::io::Result<()> {
        self.out.write_line(html)
    }

    /// Print an info message.
    pub(crate) fn info(&self, msg: &str) {
        let _ = self.err.write_line(msg);
    }

    /// Print a success message (green).
    pub(crate) fn success(&self, msg: &str) {
        let _ = self.err.write_line(&self.green.apply_to(msg).to_string());
    }

    /// Print an error message (red).
    pub(crate) fn error(&self, msg: &str) {
        let _ = self.err.write_line(&self.red.apply_to(msg).to_string());
    }
}
