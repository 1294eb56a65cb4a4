/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of an
/// expression. Parse errors include invalid characters, unexpected tokens,
/// unbalanced parentheses, and trailing input after a complete expression.
pub mod parse_error;
/// Arithmetic errors.
///
/// Contains all error types that can be raised while computing a result.
/// Runtime errors are division by zero and values escaping the allowed
/// integer range.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Unified error type returned by [`evaluate`](crate::evaluate).
///
/// Every failure of an evaluation is either a [`ParseError`] (the input
/// could not be read) or a [`RuntimeError`] (the arithmetic could not be
/// performed). Both convert into `Error` with `?`.
pub enum Error {
    /// The input could not be tokenized or parsed.
    Parse(ParseError),
    /// The arithmetic failed during evaluation.
    Runtime(RuntimeError),
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
