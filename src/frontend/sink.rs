use std::{
    fs::OpenOptions,
    io::{self, Write},
    path::PathBuf,
};

use crate::interpreter::{dispatch::CalcResult, value::render_result};

/// Receives the outcome of every evaluated line.
///
/// The front ends never print results themselves; they hand each result to
/// a sink, which decides where it ends up.
pub trait ResultSink {
    /// Records one line's result.
    ///
    /// # Errors
    /// Returns an error only if the console itself cannot be written to.
    fn record(&mut self, result: &CalcResult<f64>) -> io::Result<()>;
}

/// Prints every result as `-> answer is <result>`.
pub struct ConsoleSink<W: Write> {
    out: W,
}

impl<W: Write> ConsoleSink<W> {
    /// Creates a sink that writes to `out`.
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Gives access to the underlying writer, e.g. for the interactive prompt.
    pub const fn writer(&mut self) -> &mut W {
        &mut self.out
    }

    /// Consumes the sink and returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ResultSink for ConsoleSink<W> {
    fn record(&mut self, result: &CalcResult<f64>) -> io::Result<()> {
        writeln!(self.out, "-> answer is {}", render_result(result))
    }
}

/// Appends every result to a file, one per line, and echoes it to the
/// console.
///
/// The file is opened in append mode for each result. If it cannot be opened
/// or written, the failure is reported on the console and the result is still
/// echoed there.
pub struct AppendFileSink<W: Write> {
    path:    PathBuf,
    console: ConsoleSink<W>,
}

impl<W: Write> AppendFileSink<W> {
    /// Creates a sink appending to `path` and echoing to `console`.
    pub fn new(path: impl Into<PathBuf>, console: W) -> Self {
        Self { path:    path.into(),
               console: ConsoleSink::new(console), }
    }

    /// Gives access to the console writer.
    pub const fn console(&mut self) -> &mut W {
        self.console.writer()
    }

    /// Consumes the sink and returns the console writer.
    pub fn into_inner(self) -> W {
        self.console.into_inner()
    }
}

impl<W: Write> ResultSink for AppendFileSink<W> {
    fn record(&mut self, result: &CalcResult<f64>) -> io::Result<()> {
        match OpenOptions::new().append(true).create(true).open(&self.path) {
            Ok(mut file) => {
                if let Err(e) = writeln!(file, "{}", render_result(result)) {
                    writeln!(self.console.writer(),
                             "error while writing result into file {} {e}",
                             self.path.display())?;
                }
            },
            Err(e) => {
                writeln!(self.console.writer(),
                         "error while opening or creating output file {} {e}",
                         self.path.display())?;
            },
        }

        self.console.record(result)
    }
}
