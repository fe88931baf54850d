use std::io::{self, BufRead, Write};

use crate::{
    error::SessionError,
    frontend::{input::decode_line, sink::ResultSink},
    interpreter::line::calc_line,
};

/// Printed before every line read from the console.
pub const PROMPT: &str = "-> ";

/// Word that ends an interactive session, matched anywhere in the line and
/// without regard to case.
pub const EXIT_WORD: &str = "EXIT";

/// Returns whether a console line asks to end the session.
///
/// # Example
/// ```
/// use chaincalc::frontend::console::is_exit;
///
/// assert!(is_exit("exit\n"));
/// assert!(is_exit("please Exit now"));
/// assert!(!is_exit("add 1 2"));
/// ```
#[must_use]
pub fn is_exit(line: &str) -> bool {
    line.to_uppercase().contains(EXIT_WORD)
}

/// Runs the interactive session.
///
/// Prints [`PROMPT`] to `prompt`, reads one line from `input`, and hands its
/// result to `sink`, until a line containing [`EXIT_WORD`] is read.
/// Evaluation errors are recorded like any other result and do not end the
/// session. Bytes that are not UTF-8 are replaced and reported through the
/// evaluator.
///
/// # Errors
/// - [`SessionError::ReadConsole`] if reading a line fails, or if the input
///   ends before an exit line. An unterminated last line is not evaluated.
/// - [`SessionError::WriteConsole`] if the prompt or a result cannot be
///   written.
///
/// # Example
/// ```
/// use chaincalc::frontend::{console, sink::ConsoleSink};
///
/// let input = "add 1 2\nfoo 1 2\nexit\nadd 5 5\n".as_bytes();
/// let mut prompt = Vec::new();
/// let mut sink = ConsoleSink::new(Vec::new());
///
/// console::run(input, &mut prompt, &mut sink).unwrap();
///
/// let answers = String::from_utf8(sink.into_inner()).unwrap();
/// assert_eq!(answers, "-> answer is 3\n-> answer is command foo is not supported\n");
/// ```
pub fn run<R, W, S>(mut input: R, prompt: &mut W, sink: &mut S) -> Result<(), SessionError>
    where R: BufRead,
          W: Write,
          S: ResultSink
{
    let mut buf = Vec::new();

    loop {
        prompt.write_all(PROMPT.as_bytes())
              .and_then(|()| prompt.flush())
              .map_err(SessionError::write_console)?;

        buf.clear();
        input.read_until(b'\n', &mut buf)
             .map_err(|source| SessionError::ReadConsole { source })?;
        if buf.last() != Some(&b'\n') {
            let source = io::Error::new(io::ErrorKind::UnexpectedEof,
                                        "console closed before an exit line");
            return Err(SessionError::ReadConsole { source });
        }

        let line = decode_line(&buf);
        if is_exit(&line) {
            return Ok(());
        }

        sink.record(&calc_line(&line))
            .map_err(SessionError::write_console)?;
    }
}
