/// Per-line evaluation errors.
///
/// Defines the errors a single input line can produce: a malformed token
/// count, an operand that is not a number, or an unknown command. These are
/// reported in place of a result and never stop a run.
pub mod calc_error;
/// Fatal session errors.
///
/// Contains the I/O failures that end a run, such as an unreadable console,
/// a missing input file, or a stale output file that cannot be deleted.
pub mod session_error;

pub use calc_error::{CalcError, OperandError};
pub use session_error::SessionError;
