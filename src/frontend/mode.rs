use std::path::{Path, PathBuf};

/// Input path that always selects console mode.
pub const STDIN_MARKER: &str = "-";

/// How a run reads its lines and where its results go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Interactive prompt on standard input and output.
    Console,
    /// Batch run from one file into another.
    Batch {
        /// File to read expressions from.
        input:  PathBuf,
        /// File results are written to; recreated on every run.
        output: PathBuf,
    },
}

impl Mode {
    /// Chooses the mode from the positional command-line arguments.
    ///
    /// Batch mode needs exactly two arguments, and the first must be an
    /// existing regular file other than `-`. Every other invocation falls
    /// back to console mode.
    ///
    /// # Example
    /// ```
    /// use chaincalc::frontend::mode::Mode;
    ///
    /// assert_eq!(Mode::from_args(&[]), Mode::Console);
    /// assert_eq!(Mode::from_args(&["-".to_string(), "out.txt".to_string()]),
    ///            Mode::Console);
    /// ```
    #[must_use]
    pub fn from_args(args: &[String]) -> Self {
        let [input, output] = args else {
            return Self::Console;
        };

        if input != STDIN_MARKER && Path::new(input).is_file() {
            Self::Batch { input:  PathBuf::from(input),
                          output: PathBuf::from(output), }
        } else {
            Self::Console
        }
    }
}
