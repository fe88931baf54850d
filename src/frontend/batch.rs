use std::{
    fs::{self, File},
    io::{BufRead, BufReader, Write},
    path::Path,
};

use crate::{
    error::SessionError,
    frontend::{
        input::decode_line,
        sink::{AppendFileSink, ResultSink},
    },
    interpreter::line::calc_line,
};

/// Runs a batch over `input`, writing one result per line to `output`.
///
/// The input must exist. A stale file at `output` is deleted first, so every
/// run produces a fresh file. Each input line is echoed to `console` as
/// `-> <line>`, evaluated, appended to `output` and echoed again as
/// `-> answer is <result>`. A line that is not valid UTF-8 is evaluated with
/// the bad bytes replaced, so it yields an error result instead of stopping
/// the run. If `output` cannot be opened for a given result,
/// the failure is reported on `console` and the result still appears there.
///
/// Returns the console writer once the input is exhausted.
///
/// # Errors
/// - [`SessionError::OpenInput`] if `input` cannot be opened.
/// - [`SessionError::RemoveOutput`] if a stale `output` cannot be deleted.
/// - [`SessionError::ReadInput`] if reading `input` fails midway.
/// - [`SessionError::WriteConsole`] if `console` cannot be written.
pub fn run<W: Write>(input: &Path, output: &Path, console: W) -> Result<W, SessionError> {
    let file = File::open(input).map_err(|source| SessionError::OpenInput { path: input.to_path_buf(),
                                                                              source })?;

    remove_stale_output(output)?;

    let mut sink = AppendFileSink::new(output, console);
    process(BufReader::new(file), input, &mut sink)?;

    Ok(sink.into_inner())
}

/// Deletes `output` if it is an existing regular file.
///
/// A missing file is not an error. A directory is left alone; appending to it
/// will then fail per result and fall back to the console.
///
/// # Errors
/// Returns [`SessionError::RemoveOutput`] if the file exists but cannot be
/// deleted.
pub fn remove_stale_output(output: &Path) -> Result<(), SessionError> {
    if !output.is_file() {
        return Ok(());
    }

    fs::remove_file(output).map_err(|source| SessionError::RemoveOutput { path: output.to_path_buf(),
                                                                           source })
}

fn process<R, W>(reader: R, input: &Path, sink: &mut AppendFileSink<W>) -> Result<(), SessionError>
    where R: BufRead,
          W: Write
{
    for bytes in reader.split(b'\n') {
        let bytes = bytes.map_err(|source| SessionError::ReadInput { path: input.to_path_buf(),
                                                                     source })?;
        let line = decode_line(&bytes);

        writeln!(sink.console(), "-> {line}").map_err(SessionError::write_console)?;
        sink.record(&calc_line(&line))
            .map_err(SessionError::write_console)?;
    }

    Ok(())
}
