use std::iter::Peekable;

use crate::{
    error::{Error, ParseError},
    interpreter::{
        lexer::{self, Token},
        value::bounded::BoundedInt,
    },
};

/// Result type used by the evaluator.
///
/// Evaluation functions return either a value of type `T` or an [`Error`]
/// describing the failure, parse-time or arithmetic.
pub type EvalResult<T> = Result<T, Error>;

/// Evaluates an arithmetic expression to a single [`BoundedInt`].
///
/// The input is validated, tokenized, and then parsed and computed in one
/// recursive descent over three precedence levels: expression (`+` `-`),
/// term (`*` `/` `%`), and factor (literals, unary signs, parenthesized
/// groups). All binary operators are left-associative; no syntax tree is
/// built.
///
/// Each call owns its token sequence and cursor exclusively, so the
/// evaluator is stateless across calls and safe to invoke from multiple
/// threads on independent inputs.
///
/// # Errors
/// Any of the [`ParseError`](crate::error::ParseError) or
/// [`RuntimeError`](crate::error::RuntimeError) kinds, wrapped in
/// [`Error`].
///
/// # Example
/// ```
/// use rangecalc::interpreter::evaluator::evaluate;
///
/// let result = evaluate("(5 + 3) * 2").unwrap();
/// assert_eq!(result.value(), 16);
/// ```
pub fn evaluate(input: &str) -> EvalResult<BoundedInt> {
    let tokens = lexer::tokenize(input)?;
    let mut tokens = tokens.iter().peekable();

    let result = parse_expression(&mut tokens)?;

    if let Some((token, pos)) = tokens.next() {
        return Err(Error::Parse(ParseError::TrailingTokens { token: token.to_string(),
                                                             pos:   *pos, }));
    }

    Ok(result)
}

/// Parses and computes a full expression.
///
/// Handles the left-associative binary operators `+` and `-`.
///
/// The rule is: `expression := term (("+" | "-") term)*`
///
/// # Parameters
/// - `tokens`: Token cursor providing `(Token, position)` pairs.
///
/// # Returns
/// The computed value of the expression.
fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> EvalResult<BoundedInt>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut result = parse_term(tokens)?;
    loop {
        match tokens.peek() {
            Some((Token::Plus, _)) => {
                tokens.next();
                result = result.add(parse_term(tokens)?)?;
            },

            Some((Token::Minus, _)) => {
                tokens.next();
                result = result.subtract(parse_term(tokens)?)?;
            },

            _ => break,
        }
    }
    Ok(result)
}

/// Parses and computes a term.
///
/// Handles the left-associative binary operators `*`, `/` and `%`.
///
/// The rule is: `term := factor (("*" | "/" | "%") factor)*`
///
/// # Parameters
/// - `tokens`: Token cursor providing `(Token, position)` pairs.
///
/// # Returns
/// The computed value of the term.
fn parse_term<'a, I>(tokens: &mut Peekable<I>) -> EvalResult<BoundedInt>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut result = parse_factor(tokens)?;
    loop {
        match tokens.peek() {
            Some((Token::Star, _)) => {
                tokens.next();
                result = result.multiply(parse_factor(tokens)?)?;
            },

            Some((Token::Slash, _)) => {
                tokens.next();
                result = result.divide(parse_factor(tokens)?)?;
            },

            Some((Token::Percent, _)) => {
                tokens.next();
                result = result.modulo(parse_factor(tokens)?)?;
            },

            _ => break,
        }
    }
    Ok(result)
}

/// Parses and computes a factor.
///
/// A factor is a parenthesized expression, a sign applied to a factor, or
/// an integer literal. Unary signs bind tighter than any binary operator.
///
/// The rule is: `factor := "(" expression ")" | ("-" | "+") factor | literal`
///
/// # Parameters
/// - `tokens`: Token cursor providing `(Token, position)` pairs.
///
/// # Returns
/// The computed value of the factor.
///
/// # Errors
/// - `UnexpectedEndOfInput` if no token remains where a factor is
///   expected.
/// - `ExpectedClosingParen` if a parenthesized group is not closed.
/// - `UnexpectedToken` for any token that cannot begin a factor.
/// - `OutOfRange` for a literal outside the allowed range.
fn parse_factor<'a, I>(tokens: &mut Peekable<I>) -> EvalResult<BoundedInt>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let Some((token, pos)) = tokens.next() else {
        return Err(Error::Parse(ParseError::UnexpectedEndOfInput));
    };

    match token {
        Token::LParen => {
            let result = parse_expression(tokens)?;
            match tokens.next() {
                Some((Token::RParen, _)) => Ok(result),

                Some((_, at)) => {
                    Err(Error::Parse(ParseError::ExpectedClosingParen { pos: *at }))
                },

                // The group that opened at `pos` never closed.
                None => Err(Error::Parse(ParseError::ExpectedClosingParen { pos: *pos })),
            }
        },

        Token::Minus => Ok(parse_factor(tokens)?.negated()?),

        Token::Plus => parse_factor(tokens),

        Token::Integer(n) => Ok(BoundedInt::new(*n)?),

        _ => Err(Error::Parse(ParseError::UnexpectedToken { token: token.to_string(),
                                                            pos:   *pos, })),
    }
}
