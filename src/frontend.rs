/// The batch front end evaluates a whole file.
///
/// It deletes any stale output, then reads the input file line by line,
/// appending one result per line to the output file and echoing everything
/// to the console.
pub mod batch;
/// The console front end runs the interactive prompt.
///
/// # Responsibilities
/// - Prints the `-> ` prompt and reads one line at a time.
/// - Stops on any line containing `exit`, in any case.
/// - Reports every result, including per-line errors, and keeps going.
pub mod console;
/// Turns raw input bytes into lines for the evaluator.
pub mod input;
/// Selects console or batch mode from the command-line arguments.
pub mod mode;
/// Output sinks that receive line results.
///
/// Results are never written directly by the evaluator; the front ends pass
/// them to a [`sink::ResultSink`], which prints them to the console or
/// appends them to a file with a console echo.
pub mod sink;
