// ABOUTME: Human-readable console feedback for cleanup commands.
// ABOUTME: Writes progress notices and one outcome line per processed resource.

use crate::cleanup::{ActionKind, ActionOutcome};
use console::style;
use std::io::{self, Stdout, Write};

/// Writes user-facing lines, by default to stdout.
///
/// Diagnostics do not go through here; they are emitted with `tracing` and
/// end up on stderr.
pub struct Output<W: Write = Stdout> {
    out: W,
    colored: bool,
}

impl Output<Stdout> {
    /// Output on stdout, coloured when stdout is a terminal.
    pub fn stdout() -> Self {
        Self {
            out: io::stdout(),
            colored: console::colors_enabled(),
        }
    }
}

impl<W: Write> Output<W> {
    /// Uncoloured output into an arbitrary writer.
    pub fn new(out: W) -> Self {
        Self {
            out,
            colored: false,
        }
    }

    /// Print a progress or status message.
    pub fn progress(&mut self, message: &str) {
        self.line(format_args!("{message}"));
    }

    /// Print the result line for one resource, immediately.
    pub fn outcome(&mut self, kind: ActionKind, resource_kind: &str, outcome: &ActionOutcome) {
        if outcome.succeeded() {
            let marker = style("✓").green().force_styling(self.colored);
            self.line(format_args!(
                "{marker} {} {resource_kind} {}",
                kind.past(),
                outcome.name
            ));
        } else {
            let marker = style("✗").red().force_styling(self.colored);
            self.line(format_args!(
                "{marker} Failed to {} {resource_kind} {}",
                kind.verb(),
                outcome.name
            ));
        }
    }

    /// Consume the output and return the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, args: std::fmt::Arguments<'_>) {
        let written = writeln!(self.out, "{args}").and_then(|()| self.out.flush());
        if let Err(e) = written {
            tracing::debug!(error = %e, "failed to write to output");
        }
    }
}
