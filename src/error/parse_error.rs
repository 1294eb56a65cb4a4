#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// The input contains a character outside the accepted set.
    InvalidCharacter {
        /// The offending character.
        ch:  char,
        /// The byte position of the character in the input.
        pos: usize,
    },
    /// Reached the end of input while a factor was still expected.
    UnexpectedEndOfInput,
    /// Found a token that cannot begin a factor.
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The byte position of the token in the input.
        pos:   usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// The byte position where the parenthesis was expected.
        pos: usize,
    },
    /// Found extra tokens after a complete expression.
    TrailingTokens {
        /// The first extra token.
        token: String,
        /// The byte position of the token in the input.
        pos:   usize,
    },
    /// An integer literal was too large to be represented at all.
    LiteralTooLarge {
        /// The byte position of the literal in the input.
        pos: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCharacter { ch, pos } => {
                write!(f, "Error at position {pos}: Invalid character: '{ch}'.")
            },

            Self::UnexpectedEndOfInput => write!(f, "Error: Unexpected end of input."),

            Self::UnexpectedToken { token, pos } => {
                write!(f, "Error at position {pos}: Unexpected token: {token}.")
            },

            Self::ExpectedClosingParen { pos } => write!(f,
                                                         "Error at position {pos}: Expected closing parenthesis ')' but none found."),

            Self::TrailingTokens { token, pos } => write!(f,
                                                          "Error at position {pos}: Extra tokens after expression. Check your input: {token}"),

            Self::LiteralTooLarge { pos } => {
                write!(f, "Error at position {pos}: Literal is too large.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
