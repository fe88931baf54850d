use crate::{
    error::CalcError,
    interpreter::dispatch::{CalcResult, calc},
};

/// Number of tokens in the leading `op a b` triple.
pub const TRIPLE_LEN: usize = 3;

/// Fractional digits kept when the running result is handed back to the
/// dispatcher as text.
pub const RUNNING_RESULT_PRECISION: usize = 6;

/// Reduces one input line to a single number.
///
/// The line is split on single spaces. The first three tokens form an
/// `op a b` triple; every following `op b` pair is applied to the running
/// result, strictly left to right. There is no precedence: `add 1 2 mul 3` is
/// `(1 + 2) * 3`.
///
/// The running result is rendered with [`RUNNING_RESULT_PRECISION`]
/// fractional digits before each chained step, so chained lines carry at most
/// six decimals forward.
///
/// # Errors
/// - [`CalcError::Format`] if there are fewer than three tokens or an odd
///   number of tokens after the triple.
/// - The first [`CalcError`] raised by [`calc`]; later steps are not run.
///
/// # Example
/// ```
/// use chaincalc::{error::CalcError, interpreter::line::calc_line};
///
/// assert_eq!(calc_line("add 1 2 mul 3\n"), Ok(9.0));
/// assert_eq!(calc_line("add 1 2 mul"), Err(CalcError::Format));
/// ```
pub fn calc_line(line: &str) -> CalcResult<f64> {
    let line = line.trim_end_matches(['\n', '\r']);
    let params: Vec<&str> = line.split(' ').collect();

    if params.len() < TRIPLE_LEN || (params.len() - TRIPLE_LEN) % 2 != 0 {
        return Err(CalcError::Format);
    }

    let initial = calc(params[0], params[1], params[2])?;

    params[TRIPLE_LEN..].chunks_exact(2).try_fold(initial, |result, pair| {
                                            let running = format!("{result:.prec$}",
                                                                  prec = RUNNING_RESULT_PRECISION);
                                            calc(pair[0], &running, pair[1])
                                        })
}
