/// The dispatcher applies a single command to two textual operands.
///
/// It parses both operands as floats, recognizes the command and performs
/// the matching arithmetic. It is the only place where operand and command
/// errors are raised.
pub mod dispatch;
/// The lexer module recognizes command words.
///
/// Command words are matched with a `logos` lexer that ignores ASCII case.
/// Anything that is not exactly one command token is rejected.
pub mod lexer;
/// The line module reduces a whole input line to one number.
///
/// It validates the token layout and folds the chained `op operand` pairs
/// over the running result, left to right.
///
/// # Responsibilities
/// - Strips the line terminator and splits the line on single spaces.
/// - Rejects lines with a malformed token count.
/// - Short-circuits on the first failing step.
pub mod line;
/// Text rendering of line results.
pub mod value;
