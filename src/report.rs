use std::io::{self, ErrorKind, Write};
use tracing::warn;

/// Sink for the per-change report lines.
pub trait Reporter {
    fn report(&mut self, line: &str);
}

/// Writes one line per report to any writer.
///
/// A closed pipe (`mixtape-changes | head -1`) stops the reporting, the run
/// itself goes on and still saves its output.
pub struct WriteReporter<W: Write> {
    writer: W,
    closed: bool,
}

impl<W: Write> WriteReporter<W> {
    pub fn new(writer: W) -> Self {
        WriteReporter {
            writer,
            closed: false,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl<W: Write> Reporter for WriteReporter<W> {
    fn report(&mut self, line: &str) {
        if self.closed {
            return;
        }
        if let Err(err) = writeln!(self.writer, "{}", line).and_then(|_| self.writer.flush()) {
            if err.kind() != ErrorKind::BrokenPipe {
                warn!("Could not write report line: {}", err);
            }
            self.closed = true;
        }
    }
}

/// Prints every line to stdout.
pub type StdoutReporter = WriteReporter<io::Stdout>;

impl Default for StdoutReporter {
    fn default() -> Self {
        WriteReporter::new(io::stdout())
    }
}

/// Keeps the lines in memory.
#[derive(Default, Debug)]
pub struct VecReporter {
    pub lines: Vec<String>,
}

impl Reporter for VecReporter {
    fn report(&mut self, line: &str) {
        self.lines.push(line.to_owned());
    }
}
