use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the expression language.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    /// Integer literal tokens, such as `42`. Unsigned at the lexical
    /// level; signs are unary operators handled by the parser.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Whitespace,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Percent => write!(f, "%"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Whitespace => write!(f, " "),
        }
    }
}

/// Parses an integer literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if successful.
/// - `None`: If the digit run does not fit in an `i64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Tokenizes an expression into `(Token, position)` pairs.
///
/// The raw input is validated first: every character must be a digit, one
/// of `( ) + - * / %`, or ASCII whitespace. The position attached to each
/// token is its byte offset in the input, used for error reporting.
///
/// While scanning, a synthetic [`Token::Star`] is inserted wherever two
/// adjacent tokens form an implicit multiplication (`2(3)`, `(2)3`,
/// `(2)(3)`), so the parser never has to know the `*` was absent from the
/// source text.
///
/// # Errors
/// - `ParseError::InvalidCharacter` for the first character outside the
///   accepted set.
/// - `ParseError::LiteralTooLarge` for a digit run that does not fit in an
///   `i64`.
///
/// # Example
/// ```
/// use rangecalc::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("2(3)").unwrap();
/// let kinds: Vec<Token> = tokens.iter().map(|(token, _)| *token).collect();
/// assert_eq!(kinds,
///            vec![Token::Integer(2),
///                 Token::Star,
///                 Token::LParen,
///                 Token::Integer(3),
///                 Token::RParen]);
/// ```
pub fn tokenize(input: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    validate_characters(input)?;

    let mut tokens: Vec<(Token, usize)> = Vec::new();
    let mut lexer = Token::lexer(input);

    while let Some(token) = lexer.next() {
        let pos = lexer.span().start;
        match token {
            Ok(token) => {
                if let Some((prev, _)) = tokens.last()
                   && is_implicit_multiplication(*prev, token)
                {
                    tokens.push((Token::Star, pos));
                }
                tokens.push((token, pos));
            },
            // Every character already passed validation, so the only way
            // the lexer can fail is a digit run that overflows i64.
            Err(()) => return Err(ParseError::LiteralTooLarge { pos }),
        }
    }

    Ok(tokens)
}

/// Checks the raw input against the accepted character set before any
/// tokenization happens.
///
/// # Errors
/// `ParseError::InvalidCharacter` for the first violation.
fn validate_characters(input: &str) -> Result<(), ParseError> {
    for (pos, ch) in input.char_indices() {
        if !ch.is_ascii_digit() && !"()+-*/%".contains(ch) && !ch.is_ascii_whitespace() {
            return Err(ParseError::InvalidCharacter { ch, pos });
        }
    }
    Ok(())
}

/// Returns whether a `*` should be inserted between two adjacent tokens.
///
/// The three juxtapositions that mean multiplication are a literal before
/// `(`, a `)` before a literal, and a `)` before `(`. No insertion happens
/// around binary operators or unary signs.
const fn is_implicit_multiplication(prev: Token, current: Token) -> bool {
    matches!((prev, current),
             (Token::Integer(_), Token::LParen)
             | (Token::RParen, Token::Integer(_))
             | (Token::RParen, Token::LParen))
}
