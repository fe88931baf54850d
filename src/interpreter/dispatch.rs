use crate::{
    error::{CalcError, OperandError},
    interpreter::lexer::Command,
};

/// Result type used by the evaluator.
///
/// Evaluation either produces a number or the first [`CalcError`] met on the
/// line.
pub type CalcResult<T> = Result<T, CalcError>;

/// Applies one command to two textual operands.
///
/// Both operands are parsed before the command is looked at, left operand
/// first, so a line like `foo x 2` reports the bad operand rather than the
/// unknown command.
///
/// # Parameters
/// - `command`: The command word, matched without regard to ASCII case.
/// - `operand1`: Left operand.
/// - `operand2`: Right operand.
///
/// # Errors
/// - [`CalcError::Parse`] naming the first operand that is not a float, or
///   whose magnitude is too large for an `f64` (such as `1e400`).
/// - [`CalcError::UnsupportedCommand`] if the command is not `add`, `mul`,
///   `sub` or `div`.
///
/// # Example
/// ```
/// use chaincalc::{error::CalcError, interpreter::dispatch::calc};
///
/// assert_eq!(calc("SUB", "7", "2.5"), Ok(4.5));
/// assert_eq!(calc("div", "10", "0"), Ok(f64::INFINITY));
/// assert!(matches!(calc("pow", "2", "3"),
///                  Err(CalcError::UnsupportedCommand { command }) if command == "pow"));
/// ```
pub fn calc(command: &str, operand1: &str, operand2: &str) -> CalcResult<f64> {
    let left = parse_operand(operand1)?;
    let right = parse_operand(operand2)?;

    match Command::from_word(command) {
        Some(cmd) => Ok(cmd.apply(left, right)),
        None => Err(CalcError::UnsupportedCommand { command: command.to_string() }),
    }
}

fn parse_operand(operand: &str) -> CalcResult<f64> {
    let reject = |source| CalcError::Parse { operand: operand.to_string(),
                                             source };

    let value: f64 = operand.parse()
                            .map_err(|e| reject(OperandError::Invalid(e)))?;

    if value.is_infinite() && !spells_infinity(operand) {
        return Err(reject(OperandError::OutOfRange));
    }

    Ok(value)
}

/// Returns whether the operand names infinity outright (`inf`, `-Infinity`)
/// rather than overflowing to it.
fn spells_infinity(operand: &str) -> bool {
    let unsigned = operand.strip_prefix(['+', '-']).unwrap_or(operand);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}
