use std::{io, path::PathBuf};

#[derive(Debug)]
/// Represents the I/O failures that end a whole run.
///
/// Unlike [`CalcError`](super::CalcError), none of these can be reported in
/// place of a result; the binary prints them and exits with a failure status.
pub enum SessionError {
    /// Reading a line from the console failed.
    ReadConsole {
        /// The underlying I/O error.
        source: io::Error,
    },
    /// Writing the prompt or a result to the console failed.
    WriteConsole {
        /// The underlying I/O error.
        source: io::Error,
    },
    /// The batch input file could not be opened.
    OpenInput {
        /// The input path given on the command line.
        path:   PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// Reading a line from the batch input file failed.
    ReadInput {
        /// The input path given on the command line.
        path:   PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// A stale output file exists and could not be deleted.
    RemoveOutput {
        /// The output path given on the command line.
        path:   PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ReadConsole { source } => write!(f, "error while reading console {source}"),
            Self::WriteConsole { source } => write!(f, "error while writing console {source}"),
            Self::OpenInput { path, source } => {
                write!(f, "error while reading file {} {source}", path.display())
            },
            Self::ReadInput { path, source } => {
                write!(f, "error while scanning file {} {source}", path.display())
            },
            Self::RemoveOutput { path, source } => {
                write!(f, "error while deleting file {} {source}", path.display())
            },
        }
    }
}

impl std::error::Error for SessionError {}

impl SessionError {
    /// Wraps a failed console write.
    #[must_use]
    pub const fn write_console(source: io::Error) -> Self {
        Self::WriteConsole { source }
    }
}
