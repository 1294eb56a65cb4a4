use std::fmt::Display;

use crate::error::RuntimeError;

/// Smallest value a [`BoundedInt`] may hold.
pub const MIN_VALUE: i64 = -10_000;
/// Largest value a [`BoundedInt`] may hold.
pub const MAX_VALUE: i64 = 10_000;

/// A signed integer constrained to `[MIN_VALUE, MAX_VALUE]`.
///
/// The invariant is enforced at every construction site: the initial
/// literal and the result of every arithmetic operation. A `BoundedInt`
/// that exists is always in range, and it never changes afterwards.
///
/// The value is stored as `i64`; with both operands bounded by the
/// invariant, no intermediate result of any operation can overflow before
/// the range check runs (the worst case, `10_000 * 10_000`, is far inside
/// `i64`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundedInt {
    value: i64,
}

impl Display for BoundedInt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl BoundedInt {
    /// Constructs a new bounded integer from the given value.
    ///
    /// # Errors
    /// Returns `RuntimeError::OutOfRange` if `value` lies outside
    /// `[MIN_VALUE, MAX_VALUE]`.
    ///
    /// # Example
    /// ```
    /// use rangecalc::interpreter::value::bounded::BoundedInt;
    ///
    /// let n = BoundedInt::new(42).unwrap();
    /// assert_eq!(n.value(), 42);
    ///
    /// assert!(BoundedInt::new(10_001).is_err());
    /// assert!(BoundedInt::new(-10_001).is_err());
    /// ```
    pub const fn new(value: i64) -> Result<Self, RuntimeError> {
        if value < MIN_VALUE || value > MAX_VALUE {
            return Err(RuntimeError::OutOfRange { value });
        }
        Ok(Self { value })
    }

    /// Returns the wrapped value.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.value
    }

    /// Adds two bounded integers.
    ///
    /// # Errors
    /// Returns `RuntimeError::OutOfRange` if the sum leaves the range.
    ///
    /// # Example
    /// ```
    /// use rangecalc::interpreter::value::bounded::BoundedInt;
    ///
    /// let a = BoundedInt::new(9_999).unwrap();
    /// let b = BoundedInt::new(1).unwrap();
    /// assert_eq!(a.add(b).unwrap().value(), 10_000);
    /// assert!(a.add(b).unwrap().add(b).is_err());
    /// ```
    pub const fn add(&self, arg: Self) -> Result<Self, RuntimeError> {
        Self::new(self.value + arg.value)
    }

    /// Subtracts `arg` from this bounded integer.
    ///
    /// # Errors
    /// Returns `RuntimeError::OutOfRange` if the difference leaves the
    /// range.
    pub const fn subtract(&self, arg: Self) -> Result<Self, RuntimeError> {
        Self::new(self.value - arg.value)
    }

    /// Multiplies two bounded integers.
    ///
    /// # Errors
    /// Returns `RuntimeError::OutOfRange` if the product leaves the range.
    pub const fn multiply(&self, arg: Self) -> Result<Self, RuntimeError> {
        Self::new(self.value * arg.value)
    }

    /// Divides this bounded integer by `arg`, truncating toward zero.
    ///
    /// # Errors
    /// - `RuntimeError::DivisionByZero` if `arg` is zero.
    /// - `RuntimeError::OutOfRange` if the quotient leaves the range
    ///   (unreachable for in-range operands).
    ///
    /// # Example
    /// ```
    /// use rangecalc::interpreter::value::bounded::BoundedInt;
    ///
    /// let a = BoundedInt::new(-7).unwrap();
    /// let b = BoundedInt::new(2).unwrap();
    /// assert_eq!(a.divide(b).unwrap().value(), -3);
    ///
    /// let zero = BoundedInt::new(0).unwrap();
    /// assert!(a.divide(zero).is_err());
    /// ```
    pub const fn divide(&self, arg: Self) -> Result<Self, RuntimeError> {
        if arg.value == 0 {
            return Err(RuntimeError::DivisionByZero);
        }
        Self::new(self.value / arg.value)
    }

    /// Computes the remainder of dividing this bounded integer by `arg`.
    ///
    /// The remainder follows the truncating-division sign convention: its
    /// sign matches the dividend, so `-7 % 2 == -1`.
    ///
    /// # Errors
    /// - `RuntimeError::DivisionByZero` if `arg` is zero.
    /// - `RuntimeError::OutOfRange` (unreachable for in-range operands).
    ///
    /// # Example
    /// ```
    /// use rangecalc::interpreter::value::bounded::BoundedInt;
    ///
    /// let a = BoundedInt::new(-7).unwrap();
    /// let b = BoundedInt::new(2).unwrap();
    /// assert_eq!(a.modulo(b).unwrap().value(), -1);
    /// ```
    pub const fn modulo(&self, arg: Self) -> Result<Self, RuntimeError> {
        if arg.value == 0 {
            return Err(RuntimeError::DivisionByZero);
        }
        Self::new(self.value % arg.value)
    }

    /// Returns the arithmetic negation of this bounded integer.
    ///
    /// # Errors
    /// Returns `RuntimeError::OutOfRange` if the negation leaves the range
    /// (unreachable while the range stays symmetric).
    pub const fn negated(&self) -> Result<Self, RuntimeError> {
        Self::new(-self.value)
    }
}
