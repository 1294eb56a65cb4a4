use crate::interpreter::value::bounded::{MAX_VALUE, MIN_VALUE};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while performing arithmetic.
pub enum RuntimeError {
    /// Attempted division or remainder with a zero divisor.
    DivisionByZero,
    /// A constructed or computed value fell outside the allowed range.
    OutOfRange {
        /// The offending value.
        value: i64,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "Error: Division by zero."),

            Self::OutOfRange { value } => write!(f,
                                                 "Error: Value {value} is out of range [{MIN_VALUE}, {MAX_VALUE}]."),
        }
    }
}

impl std::error::Error for RuntimeError {}
