//! # rangecalc
//!
//! rangecalc is an arithmetic expression calculator over a bounded integer
//! domain. It evaluates expressions with `+ - * / %`, parentheses, unary
//! signs, and implicit multiplication (`2(3+4)`, `(1+2)(3+4)`), with every
//! value constrained to `[-10000, 10000]`.

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

use crate::interpreter::value::bounded::BoundedInt;

/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing,
/// or computing an expression. It standardizes error reporting and carries
/// enough context to build a message: the offending character or token, its
/// position in the input, or the out-of-range value.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, arithmetic).
/// - Attaches byte positions and offending values for user feedback.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of expression evaluation.
///
/// This module ties together the lexer, the recursive-descent evaluator,
/// the bounded value type, and error handling to provide a complete
/// evaluation pipeline for arithmetic expressions.
///
/// # Responsibilities
/// - Coordinates the core components: lexer, evaluator, and value type.
/// - Provides the entry point for evaluating user expressions.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Evaluates an arithmetic expression and returns the resulting value.
///
/// This is the single operation the crate exposes to its callers: the
/// console loop, or any other front-end that obtains an expression string.
/// The call is synchronous and stateless; a failed evaluation leaves
/// nothing behind, and the next call starts fresh.
///
/// # Errors
/// Returns an [`error::Error`] if the input cannot be parsed or the
/// arithmetic fails. See [`error::ParseError`] and
/// [`error::RuntimeError`] for the individual kinds.
///
/// # Examples
/// ```
/// use rangecalc::evaluate;
///
/// let result = evaluate("2 + 3 * 4").unwrap();
/// assert_eq!(result.value(), 14);
/// assert_eq!(result.to_string(), "14");
///
/// // Implicit multiplication between juxtaposed factors.
/// assert_eq!(evaluate("2(3+4)").unwrap().value(), 14);
///
/// // Values are confined to [-10000, 10000].
/// assert!(evaluate("10000 + 1").is_err());
/// ```
pub fn evaluate(input: &str) -> Result<BoundedInt, error::Error> {
    interpreter::evaluator::evaluate(input)
}
