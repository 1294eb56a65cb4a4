/// The evaluator module parses tokens and computes results.
///
/// The evaluator consumes the token stream produced by the lexer with a
/// recursive-descent parse over three precedence levels, computing a
/// bounded integer eagerly at each step. No syntax tree is built or
/// retained; parsing and evaluation are a single pass.
///
/// # Responsibilities
/// - Implements operator precedence and left-associativity.
/// - Applies unary signs and parenthesized grouping.
/// - Reports parse errors with token positions, and propagates arithmetic
///   errors such as division by zero or out-of-range results.
pub mod evaluator;
/// The lexer module tokenizes an expression for further parsing.
///
/// The lexer (tokenizer) validates the raw text against the accepted
/// character set, then produces a stream of tokens, each corresponding to
/// an integer literal, an operator, or a parenthesis. Implicit
/// multiplication is made explicit here: a synthetic `*` token is inserted
/// between juxtaposed factors, so the grammar never special-cases it.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with byte positions.
/// - Decodes integer literals once, during lexing.
/// - Reports invalid characters and unrepresentable literals.
pub mod lexer;
/// The value module defines the arithmetic data type for evaluation.
///
/// This module declares the bounded integer type that all evaluation
/// computes with. Construction and every operation enforce the range
/// invariant, so out-of-range values cannot circulate.
///
/// # Responsibilities
/// - Defines `BoundedInt` and its range constants.
/// - Implements range-checked arithmetic and canonical rendering.
pub mod value;
