/// Bounded integer support.
///
/// Defines the `BoundedInt` type used for all arithmetic in the calculator.
/// Every value is constrained to a fixed closed range, and every operation
/// range-checks its result, so an out-of-range value can never be observed.
///
/// Includes implementations for the five arithmetic operations, unary
/// negation, and the canonical decimal rendering.
pub mod bounded;
