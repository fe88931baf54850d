use std::num::ParseFloatError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating a single line.
///
/// Every variant is recoverable: the front ends report it in place of a
/// numeric result and carry on with the next line.
pub enum CalcError {
    /// The line does not split into one `op a b` triple followed by zero or
    /// more `op b` pairs.
    Format,
    /// An operand could not be read as a floating-point number.
    Parse {
        /// The operand as it appeared in the line.
        operand: String,
        /// Why the operand was rejected.
        source:  OperandError,
    },
    /// The command is not one of `add`, `mul`, `sub` or `div`.
    UnsupportedCommand {
        /// The command as it appeared in the line.
        command: String,
    },
}

impl std::fmt::Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Format => write!(f,
                                   "error: incorrect format. (examples 'add 1 2' or 'mul 1 2 add 1' (without quotes))"),
            Self::Parse { operand, source } => {
                write!(f, "error while converting {operand} to float {source}")
            },
            Self::UnsupportedCommand { command } => {
                write!(f, "command {command} is not supported")
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Explains why an operand is not a usable float.
pub enum OperandError {
    /// The text is not float syntax at all.
    Invalid(ParseFloatError),
    /// The text is float syntax but its magnitude exceeds `f64::MAX`.
    OutOfRange,
}

impl std::fmt::Display for OperandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invalid(e) => write!(f, "{e}"),
            Self::OutOfRange => write!(f, "value out of range"),
        }
    }
}

impl std::error::Error for OperandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Invalid(e) => Some(e),
            Self::OutOfRange => None,
        }
    }
}

impl std::error::Error for CalcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse { source, .. } => Some(source),
            Self::Format | Self::UnsupportedCommand { .. } => None,
        }
    }
}
