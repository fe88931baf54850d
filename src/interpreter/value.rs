use crate::interpreter::dispatch::CalcResult;

/// Smallest decimal exponent printed without scientific notation.
pub const MIN_PLAIN_EXPONENT: i32 = -4;
/// Decimal exponents from this value upwards use scientific notation.
pub const MAX_PLAIN_EXPONENT: i32 = 6;

/// Formats a float the way results are written to the console and to batch
/// output files.
///
/// Uses the shortest digits that read back to the same value. Scientific
/// notation (`1e+06`, `2.5e-05`) is used when the decimal exponent is below
/// [`MIN_PLAIN_EXPONENT`] or at least [`MAX_PLAIN_EXPONENT`]; the exponent
/// always carries a sign and at least two digits. Infinities print as `+Inf`
/// and `-Inf`, not-a-number as `NaN`.
///
/// # Example
/// ```
/// use chaincalc::interpreter::value::format_float;
///
/// assert_eq!(format_float(9.0), "9");
/// assert_eq!(format_float(0.5), "0.5");
/// assert_eq!(format_float(1_000_000.0), "1e+06");
/// assert_eq!(format_float(0.000_01), "1e-05");
/// assert_eq!(format_float(f64::INFINITY), "+Inf");
/// ```
#[must_use]
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() { "+Inf" } else { "-Inf" }.to_string();
    }

    let scientific = format!("{value:e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return format!("{value}");
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return format!("{value}");
    };

    if (MIN_PLAIN_EXPONENT..MAX_PLAIN_EXPONENT).contains(&exponent) {
        format!("{value}")
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs())
    }
}

/// Renders a line's outcome: the formatted number, or the error message.
///
/// # Example
/// ```
/// use chaincalc::interpreter::{line::calc_line, value::render_result};
///
/// assert_eq!(render_result(&calc_line("mul 2 2.5")), "5");
/// assert_eq!(render_result(&calc_line("foo 1 2")), "command foo is not supported");
/// ```
#[must_use]
pub fn render_result(result: &CalcResult<f64>) -> String {
    match result {
        Ok(value) => format_float(*value),
        Err(e) => e.to_string(),
    }
}
