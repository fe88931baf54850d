//! # chaincalc
//!
//! chaincalc evaluates lines of chained arithmetic such as `add 1 2 mul 3`.
//! Each line starts with an `op a b` triple and may continue with any number
//! of `op b` pairs, applied to the running result strictly from left to right.
//! Lines are read either from an interactive prompt or from a batch file.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

/// Provides the error types for evaluation and for whole runs.
///
/// This module separates errors that only affect one input line from errors
/// that end the run. Line errors are reported in place of a result; session
/// errors make the binary exit with a failure status.
///
/// # Responsibilities
/// - Defines the per-line format, operand and command errors.
/// - Defines the fatal console and file errors.
/// - Implements `Display` with the messages shown to the user.
pub mod error;
/// Reads lines from the console or a batch file and routes their results.
///
/// This module holds both front ends, the argument-based choice between them,
/// and the output sinks that carry results to the console and to files.
///
/// # Responsibilities
/// - Runs the interactive prompt and the batch loop.
/// - Deletes stale batch output before a run.
/// - Degrades to console-only output when the output file is unavailable.
pub mod frontend;
/// Turns one line of text into a number.
///
/// This module recognizes commands, parses operands, folds chained
/// operations and renders results as text. It performs no I/O.
///
/// # Responsibilities
/// - Validates the token layout of a line.
/// - Applies `add`, `mul`, `sub` and `div` without precedence.
/// - Formats results for display and for output files.
pub mod interpreter;

pub use interpreter::{dispatch::calc, line::calc_line, value::render_result};
